use anyhow::{bail, Context, Result};
use clap::Args;
use provider::{DataSource, Diagnostics, Provider, Resource};
use serde_json::Value;
use std::path::Path;

/// Selects a data source or a resource. Data sources and resources of the same CRD share a type
/// name, so the data source is chosen unless `--resource` is passed.
#[derive(Debug, Args)]
pub(crate) struct TypeArgs {
    /// The type name, e.g. `k8s_app_redislabs_com_redis_enterprise_database_v1alpha1`.
    pub(crate) type_name: String,
    /// Use the resource type instead of the data source type.
    #[clap(long = "resource")]
    pub(crate) resource: bool,
}

pub(crate) fn data_source(provider: &Provider, type_name: &str) -> Result<Box<dyn DataSource>> {
    provider
        .data_source(type_name)
        .with_context(|| format!("Unknown data source type '{}'", type_name))
}

pub(crate) fn resource(provider: &Provider, type_name: &str) -> Result<Box<dyn Resource>> {
    provider
        .resource(type_name)
        .with_context(|| format!("Unknown resource type '{}'", type_name))
}

/// Reads a configuration, plan or state document. YAML is accepted as well as JSON.
pub(crate) async fn read_document(path: &Path) -> Result<Value> {
    let text = tokio::fs::read_to_string(path)
        .await
        .context(format!("Unable to read '{}'", path.display()))?;
    match serde_json::from_str(&text) {
        Ok(value) => Ok(value),
        Err(_) => serde_yaml::from_str(&text)
            .context(format!("Unable to parse '{}' as JSON or YAML", path.display())),
    }
}

pub(crate) fn print_json(value: &Value) -> Result<()> {
    println!(
        "{}",
        serde_json::to_string_pretty(value).context("Could not create string from result.")?
    );
    Ok(())
}

/// Print every diagnostic to stderr. Fails if any of them is an error.
pub(crate) fn report(diagnostics: &Diagnostics) -> Result<()> {
    for diagnostic in diagnostics.iter() {
        eprintln!("{}\n", diagnostic);
    }
    let errors = diagnostics.errors().count();
    if errors > 0 {
        bail!("Operation failed with {} error(s)", errors);
    }
    Ok(())
}

/// Validate `config` against the schema and fail on any error.
pub(crate) fn validate(schema: &provider::Schema, config: &Value) -> Result<()> {
    report(&schema.validate(config)).context("Invalid configuration")
}
