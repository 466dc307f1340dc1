use std::path::PathBuf;

/// Returns the path to a file in `cli/tests/data`.
pub fn data_path(file_name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/data")
        .join(file_name)
}

/// Returns the path to the configuration of a remote cluster resource.
pub fn remote_cluster_path() -> PathBuf {
    data_path("remote-cluster.yaml")
}

/// Returns the path to a remote cluster configuration with several mistakes.
pub fn invalid_remote_cluster_path() -> PathBuf {
    data_path("invalid-remote-cluster.yaml")
}

/// Returns the path to the configuration of a database.
pub fn database_path() -> PathBuf {
    data_path("database.yaml")
}

/// Returns the path to the configuration of a database data source.
pub fn database_lookup_path() -> PathBuf {
    data_path("database-lookup.json")
}
