/*!

This library provides the Redis Enterprise operator's custom resource definitions, modeled as Rust
structs, and a generic dynamic API client for them.

!*/

#![deny(
    clippy::expect_used,
    clippy::get_unwrap,
    clippy::panic,
    clippy::panic_in_result_fn,
    clippy::panicking_unwrap,
    clippy::unwrap_in_result,
    clippy::unwrap_used
)]

pub use crd_ext::CrdExt;
pub use crds::{
    AbsStorage, ActiveActiveDatabaseStatus, AlertSetting, AlertSettings, ClusterReference,
    DatabaseBackup, DatabaseModule, DatabaseStatus, DatabaseType, FtpStorage, GcsStorage,
    GlobalConfigurations, InternalEndpoint, MountStorage, ParticipatingCluster,
    ParticipatingClusterStatus, Persistence, RedisEnterpriseActiveActiveDatabase,
    RedisEnterpriseActiveActiveDatabaseSpec, RedisEnterpriseDatabase, RedisEnterpriseDatabaseSpec,
    RedisEnterpriseRemoteCluster, RedisEnterpriseRemoteClusterSpec, RemoteClusterStatus,
    ReplicaSource, RolePermission, RolePermissionType, S3Storage, SftpStorage, ShardsPlacement,
    SwiftStorage, TlsMode, UpgradeSpec,
};
pub use error::{Error, Result};
use k8s_openapi::apiextensions_apiserver::pkg::apis::apiextensions::v1::JSONSchemaProps;
use kube::CustomResourceExt;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt::Debug;

pub mod clients;
pub mod constants;
mod crd_ext;
mod crds;
mod error;
mod schema_utils;

pub use schema_utils::prune_nulls;

/// `CrdKind` ties one of the Redis Enterprise CRD types to everything a generic client or provider
/// needs to know about it. Group, version, kind and plural come from `CustomResourceExt::api_resource`
/// and the generated `CustomResourceDefinition`. A human readable description is added here.
pub trait CrdKind:
    kube::Resource<DynamicType = ()>
    + CustomResourceExt
    + CrdExt
    + Serialize
    + DeserializeOwned
    + Clone
    + Debug
    + Send
    + Sync
    + 'static
{
    /// A short, human readable description of what objects of this kind represent.
    const DESCRIPTION: &'static str;

    /// The OpenAPI v3 schema of the `spec` field, taken from the first served version of the
    /// generated `CustomResourceDefinition`.
    fn spec_schema() -> Option<JSONSchemaProps> {
        Self::crd()
            .spec
            .versions
            .into_iter()
            .find(|version| version.served)
            .and_then(|version| version.schema)
            .and_then(|validation| validation.open_api_v3_schema)
            .and_then(|schema| schema.properties)
            .and_then(|mut properties| properties.remove("spec"))
    }
}

impl CrdKind for RedisEnterpriseDatabase {
    const DESCRIPTION: &'static str = "RedisEnterpriseDatabase is the Schema for the \
        redisenterprisedatabases API";
}

impl CrdKind for RedisEnterpriseActiveActiveDatabase {
    const DESCRIPTION: &'static str = "RedisEnterpriseActiveActiveDatabase is the Schema for the \
        redisenterpriseactiveactivedatabase API";
}

impl CrdKind for RedisEnterpriseRemoteCluster {
    const DESCRIPTION: &'static str = "RedisEnterpriseRemoteCluster represents a remote \
        participating cluster";
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::constants::{GROUP, VERSION};
    use kube::Resource;

    #[test]
    fn api_resources() {
        let ar = RedisEnterpriseDatabase::api_resource();
        assert_eq!(ar.group, GROUP);
        assert_eq!(ar.version, VERSION);
        assert_eq!(ar.kind, "RedisEnterpriseDatabase");
        assert_eq!(ar.plural, "redisenterprisedatabases");

        let ar = RedisEnterpriseActiveActiveDatabase::api_resource();
        assert_eq!(ar.plural, "redisenterpriseactiveactivedatabases");

        let ar = RedisEnterpriseRemoteCluster::api_resource();
        assert_eq!(ar.plural, "redisenterpriseremoteclusters");
        assert_eq!(
            RedisEnterpriseRemoteCluster::api_version(&()),
            crate::constants::API_VERSION
        );
    }

    #[test]
    fn spec_schemas() {
        let spec = RedisEnterpriseRemoteCluster::spec_schema().unwrap();
        let required = spec.required.unwrap();
        assert!(required.contains(&"apiFqdnUrl".to_string()));
        assert!(required.contains(&"recName".to_string()));
        assert!(required.contains(&"recNamespace".to_string()));
        let properties = spec.properties.unwrap();
        assert!(properties.contains_key("dbFqdnSuffix"));

        let spec = RedisEnterpriseDatabase::spec_schema().unwrap();
        let properties = spec.properties.unwrap();
        let backup = properties.get("backup").unwrap();
        assert_eq!(backup.type_.as_deref(), Some("object"));
        assert!(backup.properties.as_ref().unwrap().contains_key("s3"));

        let spec = RedisEnterpriseActiveActiveDatabase::spec_schema().unwrap();
        assert!(spec
            .required
            .unwrap()
            .contains(&"participatingClusters".to_string()));
    }
}
