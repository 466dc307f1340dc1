/*!

This is the command line interface for the Redis Enterprise CRD provider. It runs a single provider
operation (validate, read, apply, delete, import, render a manifest) against a configuration, plan
or state file and prints the result as JSON.

!*/

mod apply;
mod delete;
mod import;
mod io;
mod manifest;
mod read;
mod schema;
mod types;
mod validate;

use anyhow::{Context, Result};
use clap::Parser;
use env_logger::Builder;
use log::LevelFilter;
use provider::{Diagnostics, Provider, ProviderData};
use serde_json::{json, Value};
use std::path::PathBuf;

/// The command line interface for managing Redis Enterprise custom resources through the provider.
#[derive(Debug, Parser)]
#[clap(author, version, about)]
struct Args {
    /// Set logging verbosity [trace|debug|info|warn|error]. If the environment variable `RUST_LOG`
    /// is present, it overrides the default logging behavior. See https://docs.rs/env_logger/latest
    #[clap(long = "log-level", default_value = "info")]
    log_level: LevelFilter,
    /// Path to the kubeconfig file. Also can be passed with the KUBECONFIG environment variable.
    #[clap(long = "kubeconfig", env = "KUBECONFIG")]
    kubeconfig: Option<PathBuf>,
    /// The kubeconfig context to use instead of the current one.
    #[clap(long = "context")]
    context: Option<String>,
    /// Do not connect to a cluster. Only manifests can be rendered.
    #[clap(long = "offline")]
    offline: bool,
    #[clap(subcommand)]
    command: Command,
}

#[derive(Debug, Parser)]
enum Command {
    /// List every data source and resource type.
    Types(types::Types),
    /// Print the schema of a data source or resource type.
    Schema(schema::Schema),
    /// Validate a configuration against the schema of its type.
    Validate(validate::Validate),
    /// Read a data source, or refresh the state of a resource.
    Read(read::Read),
    /// Create a resource, or update it when its prior state is given.
    Apply(apply::Apply),
    /// Delete a resource.
    Delete(delete::Delete),
    /// Import an existing object as a resource.
    Import(import::Import),
    /// Render the YAML manifest of an object.
    Manifest(manifest::Manifest),
}

#[tokio::main]
async fn main() {
    let args = Args::parse();
    init_logger(args.log_level);
    if let Err(e) = run(args).await {
        eprintln!("{:#}", e);
        std::process::exit(1);
    }
}

async fn run(args: Args) -> Result<()> {
    let provider = Provider::default();
    match args.command {
        Command::Types(ref types) => types.run(&provider),
        Command::Schema(ref schema) => schema.run(&provider),
        Command::Validate(ref validate) => validate.run(&provider).await,
        Command::Manifest(ref manifest) => manifest.run(&provider).await,
        Command::Read(ref read) => read.run(&provider, configure(&provider, &args).await?).await,
        Command::Apply(ref apply) => {
            apply
                .run(&provider, configure(&provider, &args).await?)
                .await
        }
        Command::Delete(ref delete) => {
            delete
                .run(&provider, configure(&provider, &args).await?)
                .await
        }
        Command::Import(ref import) => {
            import
                .run(&provider, configure(&provider, &args).await?)
                .await
        }
    }
}

/// Configure the provider from the global arguments.
async fn configure(provider: &Provider, args: &Args) -> Result<ProviderData> {
    let mut config = json!({ "offline": args.offline });
    if let Some(kubeconfig) = &args.kubeconfig {
        config["kubeconfig"] = Value::from(kubeconfig.display().to_string());
    }
    if let Some(context) = &args.context {
        config["context"] = Value::from(context.as_str());
    }
    let mut diagnostics = Diagnostics::new();
    let provider_data = provider.configure(&config, &mut diagnostics).await;
    io::report(&diagnostics).context("Unable to configure the provider")?;
    provider_data.context("Unable to configure the provider")
}

/// Initialize the logger with the value passed by `--log-level` (or its default) when the
/// `RUST_LOG` environment variable is not present. If present, the `RUST_LOG` environment variable
/// overrides `--log-level`/`level`.
fn init_logger(level: LevelFilter) {
    match std::env::var(env_logger::DEFAULT_FILTER_ENV).ok() {
        Some(_) => {
            // RUST_LOG exists; env_logger will use it.
            Builder::from_default_env().init();
        }
        None => {
            // RUST_LOG does not exist; use default log level for this workspace's crates only.
            Builder::new()
                .filter(Some(env!("CARGO_CRATE_NAME")), level)
                .filter(Some("redis_enterprise_provider"), level)
                .filter(Some("redis_enterprise_model"), level)
                .init();
        }
    }
}
