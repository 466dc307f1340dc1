use super::common::{
    AlertSettings, ClusterReference, DatabaseModule, DatabaseType, Persistence, RolePermission,
    ShardsPlacement, TlsMode,
};
use crate::CrdExt;
use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;
use kube::{CustomResource, Resource as Kresource};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// The desired state of a Redis Enterprise database (REDB). The `CustomResource` derive also
/// produces a struct named `RedisEnterpriseDatabase` which represents a database object in the k8s
/// API.
#[derive(Clone, CustomResource, Debug, Default, Deserialize, JsonSchema, PartialEq, Serialize)]
#[kube(
    derive = "Default",
    derive = "PartialEq",
    group = "app.redislabs.com",
    kind = "RedisEnterpriseDatabase",
    namespaced,
    plural = "redisenterprisedatabases",
    singular = "redisenterprisedatabase",
    shortname = "redb",
    status = "DatabaseStatus",
    version = "v1alpha1",
    printcolumn = r#"{"name":"Version", "type":"string", "jsonPath":".spec.redisVersion"}"#,
    printcolumn = r#"{"name":"Status", "type":"string", "jsonPath":".status.status"}"#,
    printcolumn = r#"{"name":"Spec Status", "type":"string", "jsonPath":".status.specStatus"}"#
)]
#[serde(rename_all = "camelCase")]
pub struct RedisEnterpriseDatabaseSpec {
    /// Settings for database alerts.
    pub alert_settings: Option<AlertSettings>,
    /// Target for automatic database backups.
    pub backup: Option<DatabaseBackup>,
    /// The Secrets containing TLS Client Certificate to use for Authentication.
    pub client_authentication_certificates: Option<Vec<String>>,
    /// Internode encryption (INE) setting. An optional boolean setting, overriding a similar
    /// cluster-wide policy. If set to False, INE is guaranteed to be turned off for this DB
    /// (regardless of cluster-wide policy). If set to True, INE will be turned on, unless the
    /// capability is not supported by the DB (in such a case we will get an error and database
    /// creation will fail). If left unset, will be disabled.
    pub data_internode_encryption: Option<bool>,
    /// TCP port assigned to the database within the Redis Enterprise cluster. Must be unique
    /// across all databases in the Redis Enterprise cluster. Will be generated automatically if
    /// omitted. Can only be set upon creation.
    pub database_port: Option<i32>,
    /// The name of the secret that holds the password to the database (redis databases only). If
    /// secret does not exist, it will be created. To define the password, create an opaque secret
    /// and set the name in the spec. The password will be taken from the value of the 'password'
    /// key. Use an empty string as value within the secret to disable authentication for the
    /// database.
    pub database_secret_name: Option<String>,
    /// Is connecting with a default user allowed? If disabled, the DatabaseSecret will not be
    /// created or updated.
    pub default_user: Option<bool>,
    /// Database eviction policy. See https://redis.io/docs/latest/operate/rs/databases/memory-performance/eviction-policy/
    pub eviction_policy: Option<String>,
    /// Whether it is an RoF database or not. Applicable only for databases of type "REDIS".
    /// Assumed to be false if left blank.
    pub is_rof: Option<bool>,
    /// Credentials used for binary authentication in memcached databases. The credentials should
    /// be saved as an opaque secret and the name of that secret should be configured using this
    /// field. For username, use 'username' as the key and the actual username as the value. For
    /// password, use 'password' as the key and the actual password as the value.
    pub memcached_sasl_secret_name: Option<String>,
    /// Memory size of the database. Set to 100MB by default.
    #[schemars(regex(pattern = r"^\d+(\.\d+)?(B|KB|MB|GB|TB|K|M|G|T|Ki|Mi|Gi|Ti)?$"))]
    pub memory_size: Option<String>,
    /// List of modules associated with the database. The list of valid modules for the specific
    /// cluster can be retrieved from the status of the REC object.
    pub modules_list: Option<Vec<DatabaseModule>>,
    /// OSS Cluster mode option. Note that not all client libraries support OSS cluster mode.
    pub oss_cluster: Option<bool>,
    /// Database on-disk persistence policy.
    #[serde(default)]
    #[schemars(schema_with = "crate::schema_utils::nullable_enum::<Persistence>")]
    pub persistence: Option<Persistence>,
    /// The policy used for proxy binding to the endpoint. Supported proxy policies are:
    /// single/all-master-shards/all-nodes. When left blank, the default value will be chosen
    /// according to the value of ossCluster - single if disabled, all-master-shards when enabled.
    pub proxy_policy: Option<String>,
    /// Whether database should be rack aware. This improves availability - more information:
    /// https://docs.redis.com/latest/rs/concepts/high-availability/rack-zone-awareness/
    pub rack_aware: Option<bool>,
    /// Connection to the Redis Enterprise Cluster.
    pub redis_enterprise_cluster: Option<ClusterReference>,
    /// Redis OSS version. Version can be specified via <major.minor> prefix, or via channels -
    /// for existing databases - Upgrade Redis OSS version. For new databases - the version which
    /// the database will be created with. If set to 'major' - will always upgrade to the most
    /// recent major Redis version. If set to 'latest' - will always upgrade to the most recent
    /// Redis version. Depends on 'redisUpgradePolicy' - if you want to set the value to 'latest'
    /// for some databases, you must set redisUpgradePolicy on the cluster before. Possible values
    /// are 'major' or 'latest'. When using upgrade - make sure to backup the database before.
    pub redis_version: Option<String>,
    /// What databases to replicate from.
    pub replica_sources: Option<Vec<ReplicaSource>>,
    /// In-memory database replication. When enabled, database will have replica shard for every
    /// master - leading to higher availability. Defaults to false.
    pub replication: Option<bool>,
    /// Whether this database supports RESP3 protocol. Note - Deleting this property after
    /// explicitly setting its value shall have no effect. Please view the corresponding field in
    /// RS doc for more info.
    pub resp3: Option<bool>,
    /// The size of the RAM portion of an RoF database. Similarly to "memorySize" use formats like
    /// 100MB, 0.1GB. It must be at least 10% of combined memory size (RAM and Flash), as
    /// specified by "memorySize".
    pub rof_ram_size: Option<String>,
    /// List of Redis Enteprise ACL and Role bindings to apply.
    pub roles_permissions: Option<Vec<RolePermission>>,
    /// Number of database server-side shards.
    #[schemars(range(min = 1))]
    pub shard_count: Option<i32>,
    /// Control the density of shards - should they reside on as few or as many nodes as possible.
    /// Available options are "dense" or "sparse". If left unset, defaults to "dense".
    #[serde(default)]
    #[schemars(schema_with = "crate::schema_utils::nullable_enum::<ShardsPlacement>")]
    pub shards_placement: Option<ShardsPlacement>,
    /// Require SSL authenticated and encrypted connections to the database. enabled - all
    /// incoming connections to the Database must use SSL. disabled - no incoming connection to
    /// the Database should use SSL. replica_only - databases that replicate from this one need to
    /// use SSL.
    #[serde(default)]
    #[schemars(schema_with = "crate::schema_utils::nullable_enum::<TlsMode>")]
    pub tls_mode: Option<TlsMode>,
    /// The type of the database.
    #[serde(rename = "type")]
    #[serde(default)]
    #[schemars(schema_with = "crate::schema_utils::nullable_enum::<DatabaseType>")]
    pub type_: Option<DatabaseType>,
    /// Specifications for DB upgrade.
    pub upgrade_spec: Option<UpgradeSpec>,
}

/// Target for automatic database backups. Exactly one storage location should be set.
#[derive(Clone, Debug, Default, Deserialize, Eq, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DatabaseBackup {
    /// Backup Interval in seconds.
    pub interval: Option<i32>,
    pub abs: Option<AbsStorage>,
    pub ftp: Option<FtpStorage>,
    pub gcs: Option<GcsStorage>,
    pub mount: Option<MountStorage>,
    pub s3: Option<S3Storage>,
    pub sftp: Option<SftpStorage>,
    pub swift: Option<SwiftStorage>,
}

#[derive(Clone, Debug, Default, Deserialize, Eq, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AbsStorage {
    /// The name of the K8s secret that holds ABS credentials. The secret must contain the keys
    /// "AccountName" and "AccountKey", and these must hold the corresponding credentials.
    pub abs_secret_name: Option<String>,
    /// Azure Blob Storage container name.
    pub container: Option<String>,
    /// Optional. Azure Blob Storage subdir under container.
    pub subdir: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize, Eq, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FtpStorage {
    /// A URI of the "ftps://[USER[:PASSWORD]@]HOST[:PORT]/PATH[/]" format.
    #[schemars(regex(pattern = r"^ftps?://"))]
    pub url: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize, Eq, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GcsStorage {
    /// Google Storage bucket name.
    pub bucket_name: Option<String>,
    /// The name of the K8s secret that holds the Google Cloud Storage credentials.
    pub gcs_secret_name: Option<String>,
    /// Optional. Google Storage subdir under bucket.
    pub subdir: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize, Eq, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MountStorage {
    /// Path to the local mount point. You must create the mount point on all nodes, and the
    /// redislabs:redislabs user must have read and write permissions on the local mount point.
    pub path: String,
}

#[derive(Clone, Debug, Default, Deserialize, Eq, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct S3Storage {
    /// The name of the K8s secret that holds the AWS credentials. The secret must contain the
    /// keys "AWS_ACCESS_KEY_ID" and "AWS_SECRET_ACCESS_KEY", and these must hold the
    /// corresponding credentials.
    pub aws_secret_name: Option<String>,
    /// Amazon S3 bucket name.
    pub bucket_name: Option<String>,
    /// Optional. Amazon S3 subdir under bucket.
    pub subdir: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize, Eq, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SftpStorage {
    /// The name of the K8s secret that holds SFTP credentials. The secret must contain the "Key"
    /// key, which is the SSH private key for connecting to the sftp server.
    pub sftp_secret_name: Option<String>,
    /// SFTP url.
    #[serde(rename = "sftp_url")]
    #[schemars(regex(pattern = r"^sftp://"))]
    pub sftp_url: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize, Eq, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SwiftStorage {
    /// Swift service container name.
    pub container: Option<String>,
    /// Optional. Prefix (path) of backup files in the swift container.
    pub prefix: Option<String>,
    /// The name of the K8s secret that holds Swift credentials. The secret must contain the
    /// keys "Key" and "User", and these must hold the corresponding credentials.
    pub swift_secret_name: Option<String>,
}

/// A source database to replicate from.
#[derive(Clone, Debug, Default, Deserialize, Eq, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReplicaSource {
    /// Secret that defines the client certificate and key used by the syncer in the target
    /// database cluster. The secret must have 2 keys in its map: "cert" which is the PEM encoded
    /// certificate, and "key" which is the PEM encoded private key.
    pub client_key_secret: Option<String>,
    /// GZIP compression level (0-6) to use for replication.
    #[schemars(range(min = 0, max = 6))]
    pub compression: Option<i32>,
    /// The name of the resource from which the source database URI is derived. The type of
    /// resource must match the type specified in the ReplicaSourceType field.
    pub replica_source_name: String,
    /// The type of resource from which the source database URI is derived. If set to 'SECRET',
    /// the source database URI is derived from the secret named in the ReplicaSourceName field.
    /// The secret must have a key named 'uri' that defines the URI of the source database in the
    /// form of 'redis://...'. The type of secret (kubernetes, vault, ...) is determined by the
    /// secret mechanism used by the underlying REC object. If set to 'REDB', the source database
    /// URI is derived from the RedisEnterpriseDatabase resource named in the ReplicaSourceName
    /// field.
    pub replica_source_type: String,
    /// Secret that defines the server certificate used by the proxy in the source database
    /// cluster. The secret must have 1 key in its map: "cert" which is the PEM encoded
    /// certificate.
    pub server_cert_secret: Option<String>,
    /// TLS SNI name to use for the replication link.
    pub tls_sni_name: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize, Eq, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpgradeSpec {
    /// Upgrades the modules to the latest version that supportes the DB version during a DB
    /// upgrade action, to upgrade the DB version view the 'redisVersion' field. Notes - All
    /// modules must be without specifing the version. in addition, This field is currently not
    /// supported for Active-Active databases.
    pub upgrade_modules_to_latest: bool,
}

/// The observed state of a database, as reported by the operator.
#[derive(Clone, Debug, Default, Deserialize, Eq, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DatabaseStatus {
    /// The status of the database.
    pub status: Option<String>,
    /// Whether the desired specification is valid.
    pub spec_status: Option<String>,
    /// Database UID provided by redis enterprise.
    #[serde(rename = "databaseUID")]
    pub database_uid: Option<String>,
    /// Endpoints listed internally by the Redis Enterprise Cluster.
    pub internal_endpoints: Option<Vec<InternalEndpoint>>,
    /// The generation (built in update counter of K8s) of the REDB resource that was fully
    /// acted upon, meaning that all changes were handled and sent as an API call to the Redis
    /// Enterprise Cluster (REC).
    pub observed_generation: Option<i64>,
    /// The name of the REC that the database belongs to.
    pub redis_enterprise_cluster: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize, Eq, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InternalEndpoint {
    /// Hostname assigned to the database.
    pub host: Option<String>,
    /// Database port name.
    pub port: Option<i32>,
}

impl CrdExt for RedisEnterpriseDatabase {
    fn object_meta(&self) -> &ObjectMeta {
        self.meta()
    }
}
