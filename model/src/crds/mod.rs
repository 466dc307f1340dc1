pub use active_active_database::{
    ActiveActiveDatabaseStatus, GlobalConfigurations, ParticipatingCluster,
    ParticipatingClusterStatus, RedisEnterpriseActiveActiveDatabase,
    RedisEnterpriseActiveActiveDatabaseSpec,
};
pub use common::{
    AlertSetting, AlertSettings, ClusterReference, DatabaseModule, DatabaseType, Persistence,
    RolePermission, RolePermissionType, ShardsPlacement, TlsMode,
};
pub use database::{
    AbsStorage, DatabaseBackup, DatabaseStatus, FtpStorage, GcsStorage, InternalEndpoint,
    MountStorage, RedisEnterpriseDatabase, RedisEnterpriseDatabaseSpec, ReplicaSource, S3Storage,
    SftpStorage, SwiftStorage, UpgradeSpec,
};
pub use remote_cluster::{
    RedisEnterpriseRemoteCluster, RedisEnterpriseRemoteClusterSpec, RemoteClusterStatus,
};

mod active_active_database;
mod common;
mod database;
mod remote_cluster;

#[cfg(test)]
mod test {
    use super::*;
    use crate::CrdExt;
    use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;

    #[test]
    fn database_from_operator_yaml() {
        let yaml = r#"
apiVersion: app.redislabs.com/v1alpha1
kind: RedisEnterpriseDatabase
metadata:
  name: smalldb
  namespace: redis
spec:
  memorySize: 100MB
  persistence: aofEverySecond
  tlsMode: enabled
  shardCount: 2
  redisEnterpriseCluster:
    name: rec
  modulesList:
    - name: search
      version: 2.8.4
  rolesPermissions:
    - role: reader
      acl: read-only
      type: redis-enterprise
status:
  status: active
  databaseUID: "3"
"#;
        let db: RedisEnterpriseDatabase = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(db.import_id(), "redis/smalldb");
        assert_eq!(db.spec.memory_size.as_deref(), Some("100MB"));
        assert_eq!(db.spec.persistence, Some(Persistence::AofEverySecond));
        assert_eq!(db.spec.tls_mode, Some(TlsMode::Enabled));
        assert_eq!(
            db.spec.roles_permissions.as_ref().unwrap()[0].type_,
            RolePermissionType::RedisEnterprise
        );
        assert_eq!(
            db.status.as_ref().unwrap().database_uid.as_deref(),
            Some("3")
        );
    }

    #[test]
    fn remote_cluster_yaml() {
        let rerc = RedisEnterpriseRemoteCluster {
            metadata: ObjectMeta {
                name: Some("rerc-east".to_string()),
                namespace: Some("redis".to_string()),
                ..Default::default()
            },
            spec: RedisEnterpriseRemoteClusterSpec {
                api_fqdn_url: "api-east.example.com".to_string(),
                rec_name: "rec-east".to_string(),
                rec_namespace: "redis".to_string(),
                db_fqdn_suffix: Some("-db-east.example.com".to_string()),
                ..Default::default()
            },
            status: None,
        };
        let yaml = rerc.to_yaml().unwrap();
        assert!(yaml.contains("apiVersion: app.redislabs.com/v1alpha1"));
        assert!(yaml.contains("kind: RedisEnterpriseRemoteCluster"));
        assert!(yaml.contains("apiFqdnUrl: api-east.example.com"));
        assert!(!yaml.contains("secretName"));
        assert!(!yaml.contains("status"));
    }

    #[test]
    fn enum_display_and_parse() {
        assert_eq!(Persistence::SnapshotEvery1Hour.to_string(), "snapshotEvery1Hour");
        assert_eq!("replica_only".parse::<TlsMode>().unwrap(), TlsMode::ReplicaOnly);
        assert!("sometimes".parse::<TlsMode>().is_err());
    }
}
