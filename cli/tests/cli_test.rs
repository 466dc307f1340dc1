mod data;

use assert_cmd::Command;
use serde_json::Value;
use std::process::Output;

const DATABASE: &str = "k8s_app_redislabs_com_redis_enterprise_database_v1alpha1";
const REMOTE_CLUSTER: &str = "k8s_app_redislabs_com_redis_enterprise_remote_cluster_v1alpha1";

fn run(args: &[&str]) -> Output {
    let mut cmd = Command::cargo_bin("redis-enterprise-tf").unwrap();
    cmd.env_remove("KUBECONFIG").env_remove("RUST_LOG").args(args);
    cmd.output().unwrap()
}

fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).unwrap()
}

fn stderr(output: &Output) -> String {
    String::from_utf8(output.stderr.clone()).unwrap()
}

#[test]
fn types() {
    let output = run(&["types", "--json"]);
    assert!(output.status.success());
    let types: Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(types["provider"], "k8s");
    assert_eq!(types["data_sources"].as_array().unwrap().len(), 6);
    assert_eq!(types["resources"].as_array().unwrap().len(), 3);
    assert!(types["data_sources"]
        .as_array()
        .unwrap()
        .contains(&Value::from(format!("{}_manifest", DATABASE))));
}

#[test]
fn resource_schema() {
    let output = run(&["schema", REMOTE_CLUSTER, "--resource"]);
    assert!(output.status.success());
    let schema: Value = serde_json::from_str(&stdout(&output)).unwrap();
    let names: Vec<&str> = schema["attributes"]
        .as_array()
        .unwrap()
        .iter()
        .map(|a| a["name"].as_str().unwrap())
        .collect();
    assert!(names.contains(&"field_manager"));
    assert!(names.contains(&"wait_for_deletion"));
    assert!(names.contains(&"spec"));

    let output = run(&["schema", "k8s_app_redislabs_com_nothing_v1alpha1"]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("Unknown data source type"));
}

#[test]
fn validate_configurations() {
    let path = data::remote_cluster_path();
    let output = run(&[
        "validate",
        REMOTE_CLUSTER,
        "--resource",
        "-f",
        path.to_str().unwrap(),
    ]);
    assert!(output.status.success(), "{}", stderr(&output));

    let path = data::invalid_remote_cluster_path();
    let output = run(&[
        "validate",
        REMOTE_CLUSTER,
        "--resource",
        "-f",
        path.to_str().unwrap(),
    ]);
    assert!(!output.status.success());
    let stderr = stderr(&output);
    assert!(stderr.contains("Missing required argument"));
    assert!(stderr.contains("with spec.api_fqdn_url"));
    assert!(stderr.contains("Unsupported argument"));
    assert!(stderr.contains("with spec.replicas"));
    assert!(stderr.contains("with spec.api_port"));
    assert!(stderr.contains("with metadata.name"));
}

#[test]
fn manifest() {
    let path = data::database_path();
    let output = run(&["manifest", DATABASE, "-f", path.to_str().unwrap()]);
    assert!(output.status.success(), "{}", stderr(&output));
    let manifest: Value = serde_yaml::from_str(&stdout(&output)).unwrap();
    assert_eq!(manifest["apiVersion"], "app.redislabs.com/v1alpha1");
    assert_eq!(manifest["kind"], "RedisEnterpriseDatabase");
    assert_eq!(manifest["metadata"]["name"], "smalldb");
    assert_eq!(manifest["spec"]["memorySize"], "100MB");
    assert_eq!(manifest["spec"]["persistence"], "aofEverySecond");
    assert_eq!(manifest["spec"]["modulesList"][0]["name"], "search");
    assert_eq!(manifest["spec"]["redisEnterpriseCluster"]["name"], "rec");
    assert!(manifest.get("status").is_none());
}

#[test]
fn offline_read_is_not_configured() {
    let path = data::database_lookup_path();
    let output = run(&["--offline", "read", DATABASE, "-f", path.to_str().unwrap()]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("Provider not configured"));
}

#[test]
fn import_with_invalid_id() {
    let output = run(&["--offline", "import", REMOTE_CLUSTER, "rerc-east"]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("Error importing resource"));
}
