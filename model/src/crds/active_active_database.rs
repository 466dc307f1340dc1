use super::common::{
    AlertSettings, DatabaseModule, DatabaseType, Persistence, RolePermission, ShardsPlacement,
    TlsMode,
};
use crate::CrdExt;
use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;
use kube::{CustomResource, Resource as Kresource};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The desired state of a Redis Enterprise active-active database (REAADB), a database that is
/// replicated across the participating clusters. The `CustomResource` derive also produces a
/// struct named `RedisEnterpriseActiveActiveDatabase`.
#[derive(Clone, CustomResource, Debug, Default, Deserialize, JsonSchema, PartialEq, Serialize)]
#[kube(
    derive = "Default",
    derive = "PartialEq",
    group = "app.redislabs.com",
    kind = "RedisEnterpriseActiveActiveDatabase",
    namespaced,
    plural = "redisenterpriseactiveactivedatabases",
    singular = "redisenterpriseactiveactivedatabase",
    shortname = "reaadb",
    status = "ActiveActiveDatabaseStatus",
    version = "v1alpha1",
    printcolumn = r#"{"name":"Status", "type":"string", "jsonPath":".status.status"}"#,
    printcolumn = r#"{"name":"Spec Status", "type":"string", "jsonPath":".status.specStatus"}"#,
    printcolumn = r#"{"name":"Linked REDBs", "type":"string", "jsonPath":".status.linkedRedbs"}"#
)]
#[serde(rename_all = "camelCase")]
pub struct RedisEnterpriseActiveActiveDatabaseSpec {
    /// The active-active database global configurations, contains the global properties for each
    /// of the participating clusters' instances of the database.
    pub global_configurations: Option<GlobalConfigurations>,
    /// The list of instances/clusters specifications and configurations.
    pub participating_clusters: Vec<ParticipatingCluster>,
    /// Connection to the Redis Enterprise Cluster that owns the active-active database.
    pub redis_enterprise_cluster: Option<super::common::ClusterReference>,
}

/// Database settings that apply to every participating instance of an active-active database.
#[derive(Clone, Debug, Default, Deserialize, Eq, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GlobalConfigurations {
    /// Settings for database alerts.
    pub alert_settings: Option<AlertSettings>,
    /// The Secrets containing TLS Client Certificate to use for Authentication.
    pub client_authentication_certificates: Option<Vec<String>>,
    /// Internode encryption (INE) setting, overriding a similar cluster-wide policy.
    pub data_internode_encryption: Option<bool>,
    /// TCP port assigned to the database within the Redis Enterprise cluster.
    pub database_port: Option<i32>,
    /// Annotations for the database secret, per participating cluster.
    pub database_secrets_annotations: Option<BTreeMap<String, String>>,
    /// The name of the secret that holds the password to the database.
    pub database_secret_name: Option<String>,
    /// Is connecting with a default user allowed?
    pub default_user: Option<bool>,
    /// Database eviction policy.
    pub eviction_policy: Option<String>,
    /// Whether it is an RoF database or not.
    pub is_rof: Option<bool>,
    /// Memory size of the database. Set to 100MB by default.
    #[schemars(regex(pattern = r"^\d+(\.\d+)?(B|KB|MB|GB|TB|K|M|G|T|Ki|Mi|Gi|Ti)?$"))]
    pub memory_size: Option<String>,
    /// List of modules associated with the database.
    pub modules_list: Option<Vec<DatabaseModule>>,
    /// OSS Cluster mode option.
    pub oss_cluster: Option<bool>,
    /// Database on-disk persistence policy.
    #[serde(default)]
    #[schemars(schema_with = "crate::schema_utils::nullable_enum::<Persistence>")]
    pub persistence: Option<Persistence>,
    /// The policy used for proxy binding to the endpoint.
    pub proxy_policy: Option<String>,
    /// Whether database should be rack aware.
    pub rack_aware: Option<bool>,
    /// In-memory database replication.
    pub replication: Option<bool>,
    /// Whether this database supports RESP3 protocol.
    pub resp3: Option<bool>,
    /// The size of the RAM portion of an RoF database.
    pub rof_ram_size: Option<String>,
    /// List of Redis Enteprise ACL and Role bindings to apply.
    pub roles_permissions: Option<Vec<RolePermission>>,
    /// Number of database server-side shards.
    #[schemars(range(min = 1))]
    pub shard_count: Option<i32>,
    /// Control the density of shards.
    #[serde(default)]
    #[schemars(schema_with = "crate::schema_utils::nullable_enum::<ShardsPlacement>")]
    pub shards_placement: Option<ShardsPlacement>,
    /// Require SSL authenticated and encrypted connections to the database.
    #[serde(default)]
    #[schemars(schema_with = "crate::schema_utils::nullable_enum::<TlsMode>")]
    pub tls_mode: Option<TlsMode>,
    /// The type of the database.
    #[serde(rename = "type")]
    #[serde(default)]
    #[schemars(schema_with = "crate::schema_utils::nullable_enum::<DatabaseType>")]
    pub type_: Option<DatabaseType>,
}

/// A cluster that holds an instance of the active-active database.
#[derive(Clone, Debug, Default, Deserialize, Eq, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParticipatingCluster {
    /// The name of the remote cluster CR to link.
    pub name: String,
}

/// The observed state of an active-active database, as reported by the operator.
#[derive(Clone, Debug, Default, Deserialize, Eq, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActiveActiveDatabaseStatus {
    /// The status of the active active database.
    pub status: Option<String>,
    /// Whether the desired specification is valid.
    pub spec_status: Option<String>,
    /// The linked REDBs.
    pub linked_redbs: Option<Vec<String>>,
    /// The generation of the REAADB resource that was fully acted upon.
    pub observed_generation: Option<i64>,
    /// The names of the participating clusters and their replication status.
    pub participating_clusters: Option<Vec<ParticipatingClusterStatus>>,
}

#[derive(Clone, Debug, Default, Deserialize, Eq, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParticipatingClusterStatus {
    /// The name of the remote cluster CR that is linked.
    pub name: Option<String>,
    /// The corresponding ID of the instance in the active-active database.
    pub id: Option<i64>,
}

impl CrdExt for RedisEnterpriseActiveActiveDatabase {
    fn object_meta(&self) -> &ObjectMeta {
        self.meta()
    }
}
