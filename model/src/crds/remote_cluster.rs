use crate::CrdExt;
use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;
use kube::{CustomResource, Resource as Kresource};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// The desired state of a Redis Enterprise remote cluster (RERC), which describes how to reach a
/// Redis Enterprise Cluster that participates in active-active databases. The `CustomResource`
/// derive also produces a struct named `RedisEnterpriseRemoteCluster`.
#[derive(Clone, CustomResource, Debug, Default, Deserialize, JsonSchema, PartialEq, Serialize)]
#[kube(
    derive = "Default",
    derive = "PartialEq",
    group = "app.redislabs.com",
    kind = "RedisEnterpriseRemoteCluster",
    namespaced,
    plural = "redisenterpriseremoteclusters",
    singular = "redisenterpriseremotecluster",
    shortname = "rerc",
    status = "RemoteClusterStatus",
    version = "v1alpha1",
    printcolumn = r#"{"name":"Status", "type":"string", "jsonPath":".status.status"}"#,
    printcolumn = r#"{"name":"Spec Status", "type":"string", "jsonPath":".status.specStatus"}"#,
    printcolumn = r#"{"name":"Local", "type":"boolean", "jsonPath":".status.local"}"#
)]
#[serde(rename_all = "camelCase")]
pub struct RedisEnterpriseRemoteClusterSpec {
    /// The URL of the cluster, will be used for the active-active database URL.
    pub api_fqdn_url: String,
    /// The port number of the cluster's URL used for connectivity/sync.
    #[schemars(range(min = 1, max = 65535))]
    pub api_port: Option<i32>,
    /// The database URL suffix, will be used for the active-active database replication
    /// endpoint and replication endpoint SNI.
    pub db_fqdn_suffix: Option<String>,
    /// The name of the REC that the RERC is pointing at.
    pub rec_name: String,
    /// The namespace of the REC that the RERC is pointing at.
    pub rec_namespace: String,
    /// The name of the secret containing cluster credentials. Must be of the following format:
    /// "redis-enterprise-<RERC name>".
    pub secret_name: Option<String>,
}

/// The observed state of a remote cluster, as reported by the operator.
#[derive(Clone, Debug, Default, Deserialize, Eq, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoteClusterStatus {
    /// The status of the remote cluster.
    pub status: Option<String>,
    /// Whether the desired specification is valid.
    pub spec_status: Option<String>,
    /// Indicates whether this object represents a local or a remote cluster.
    pub local: Option<bool>,
    /// The most recent generation observed for this RERC. It corresponds to the RERC's
    /// generation, which is updated by the API Server.
    pub observed_generation: Option<i64>,
}

impl CrdExt for RedisEnterpriseRemoteCluster {
    fn object_meta(&self) -> &ObjectMeta {
        self.meta()
    }
}
