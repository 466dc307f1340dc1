/*!

The Redis Enterprise custom resource definitions are modeled as Rust structs in the model crate.
Here we generate the corresponding k8s yaml file, which can be applied to a cluster that runs the
operator's CRDs from this workspace instead of the operator bundle.

!*/

use kube::CustomResourceExt;
use model::{
    RedisEnterpriseActiveActiveDatabase, RedisEnterpriseDatabase, RedisEnterpriseRemoteCluster,
};
use std::fs::{self, File};
use std::io::Write;
use std::path::PathBuf;

const YAMLGEN_DIR: &str = env!("CARGO_MANIFEST_DIR");
const HEADER: &str = "# This file is generated. Do not edit.\n";

fn main() {
    // Re-run this build script if the model changes.
    println!("cargo:rerun-if-changed=../model/src");

    let dir = PathBuf::from(YAMLGEN_DIR).join("deploy");
    fs::create_dir_all(&dir)
        .unwrap_or_else(|e| panic!("unable to create '{}': {}", dir.display(), e));
    let path = dir.join("redis-enterprise-crds.yaml");

    let mut f = File::create(&path)
        .unwrap_or_else(|e| panic!("unable to open file '{}' for writing: {}", path.display(), e));

    f.write_all(HEADER.as_bytes())
        .expect("unable to write file header");
    serde_yaml::to_writer(&f, &RedisEnterpriseDatabase::crd())
        .expect("unable to write RedisEnterpriseDatabase CRD");
    serde_yaml::to_writer(&f, &RedisEnterpriseActiveActiveDatabase::crd())
        .expect("unable to write RedisEnterpriseActiveActiveDatabase CRD");
    serde_yaml::to_writer(&f, &RedisEnterpriseRemoteCluster::crd())
        .expect("unable to write RedisEnterpriseRemoteCluster CRD");
}
