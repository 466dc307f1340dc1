use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_plain::{derive_display_from_serialize, derive_fromstr_from_deserialize};

/// A reference to the Redis Enterprise Cluster (REC) that hosts an object.
#[derive(Clone, Debug, Default, Deserialize, Eq, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClusterReference {
    /// The name of the REC that the database or remote cluster belongs to.
    pub name: Option<String>,
}

/// A Redis module loaded into a database.
#[derive(Clone, Debug, Default, Deserialize, Eq, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DatabaseModule {
    /// The name of the module, e.g. "search" or "ReJSON".
    pub name: String,
    /// Module version. Leave empty to use the latest version bundled with the cluster.
    pub version: Option<String>,
    /// Module command line arguments, e.g. "VKEY_MAX_ENTITY_COUNT 30".
    pub config: Option<String>,
}

/// Grants a role ACL permissions on a database.
#[derive(Clone, Debug, Default, Deserialize, Eq, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RolePermission {
    /// Role name.
    pub role: String,
    /// ACL name.
    pub acl: String,
    /// Type of role permission.
    #[serde(rename = "type")]
    pub type_: RolePermissionType,
}

#[derive(Clone, Copy, Debug, Deserialize, Eq, JsonSchema, PartialEq, Serialize)]
pub enum RolePermissionType {
    #[serde(rename = "redis-enterprise")]
    RedisEnterprise,
}

impl Default for RolePermissionType {
    fn default() -> Self {
        Self::RedisEnterprise
    }
}

/// A single alert of a database.
#[derive(Clone, Debug, Default, Deserialize, Eq, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AlertSetting {
    /// Whether the alert is enabled.
    pub enabled: Option<bool>,
    /// The threshold of the alert. Its unit depends on the alert.
    pub threshold: Option<String>,
}

/// Database alert settings. The field names follow the cluster's REST API and are therefore not
/// camel cased.
#[derive(Clone, Debug, Default, Deserialize, Eq, JsonSchema, PartialEq, Serialize)]
pub struct AlertSettings {
    /// Periodic backup has been delayed for longer than the specified threshold (minutes).
    pub bdb_backup_delayed: Option<AlertSetting>,
    /// Active-active source - sync lag is higher than the specified threshold (seconds).
    pub bdb_crdt_src_high_syncer_lag: Option<AlertSetting>,
    /// Active-active source - sync has connection error while trying to connect replica source.
    pub bdb_crdt_src_syncer_connection_error: Option<AlertSetting>,
    /// Active-active source - sync encountered in general error.
    pub bdb_crdt_src_syncer_general_error: Option<AlertSetting>,
    /// Latency is higher than the specified threshold (microseconds).
    pub bdb_high_latency: Option<AlertSetting>,
    /// Throughput is higher than the specified threshold (ops/sec).
    pub bdb_high_throughput: Option<AlertSetting>,
    /// An alert for state-machines that are running for too long (minutes).
    pub bdb_long_running_action: Option<AlertSetting>,
    /// Throughput is lower than the specified threshold (ops/sec).
    pub bdb_low_throughput: Option<AlertSetting>,
    /// Dataset RAM overhead of a shard has reached the threshold (percent).
    pub bdb_ram_dataset_overhead: Option<AlertSetting>,
    /// Percent of values kept in a shard's RAM is lower than the threshold (percent).
    pub bdb_ram_values: Option<AlertSetting>,
    /// Replica-of source - sync lag is higher than the specified threshold (seconds).
    pub bdb_replica_src_high_syncer_lag: Option<AlertSetting>,
    /// Replica-of source - sync has connection error while trying to connect replica source.
    pub bdb_replica_src_syncer_connection_error: Option<AlertSetting>,
    /// Number of values kept in a shard's RAM is lower than the threshold (values).
    pub bdb_shard_num_ram_values: Option<AlertSetting>,
    /// Dataset size has reached the threshold value (percent of the memory limit).
    pub bdb_size: Option<AlertSetting>,
}

#[derive(Clone, Copy, Debug, Deserialize, Eq, JsonSchema, PartialEq, Serialize)]
pub enum Persistence {
    #[serde(rename = "disabled")]
    Disabled,
    #[serde(rename = "aofEverySecond")]
    AofEverySecond,
    #[serde(rename = "aofAlways")]
    AofAlways,
    #[serde(rename = "snapshotEvery1Hour")]
    SnapshotEvery1Hour,
    #[serde(rename = "snapshotEvery6Hour")]
    SnapshotEvery6Hour,
    #[serde(rename = "snapshotEvery12Hour")]
    SnapshotEvery12Hour,
}

#[derive(Clone, Copy, Debug, Deserialize, Eq, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TlsMode {
    Disabled,
    Enabled,
    ReplicaOnly,
}

#[derive(Clone, Copy, Debug, Deserialize, Eq, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DatabaseType {
    Redis,
    Memcached,
}

#[derive(Clone, Copy, Debug, Deserialize, Eq, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ShardsPlacement {
    Dense,
    Sparse,
}

derive_display_from_serialize!(Persistence);
derive_fromstr_from_deserialize!(Persistence, |e| -> crate::Error {
    crate::error::OpaqueError::SerdePlain { source: e }.into()
});
derive_display_from_serialize!(TlsMode);
derive_fromstr_from_deserialize!(TlsMode, |e| -> crate::Error {
    crate::error::OpaqueError::SerdePlain { source: e }.into()
});
derive_display_from_serialize!(DatabaseType);
derive_fromstr_from_deserialize!(DatabaseType, |e| -> crate::Error {
    crate::error::OpaqueError::SerdePlain { source: e }.into()
});
derive_display_from_serialize!(ShardsPlacement);
derive_fromstr_from_deserialize!(ShardsPlacement, |e| -> crate::Error {
    crate::error::OpaqueError::SerdePlain { source: e }.into()
});
