use crate::io;
use anyhow::{Context, Result};
use clap::{value_parser, Parser};
use provider::{Diagnostics, Provider, ProviderData};
use std::path::PathBuf;

/// Render the YAML manifest of the object described by a configuration. No cluster is needed.
#[derive(Debug, Parser)]
pub(crate) struct Manifest {
    /// The manifest type name. The `_manifest` suffix may be left out.
    type_name: String,
    /// Path to the configuration, in JSON or YAML.
    #[clap(short = 'f', long = "file", value_parser = value_parser!(PathBuf))]
    file: PathBuf,
    /// Output the whole state in JSON format instead of the YAML manifest.
    #[clap(long = "json")]
    json: bool,
}

impl Manifest {
    pub(crate) async fn run(&self, provider: &Provider) -> Result<()> {
        let config = io::read_document(&self.file).await?;
        let type_name = if self.type_name.ends_with("_manifest") {
            self.type_name.clone()
        } else {
            format!("{}_manifest", self.type_name)
        };
        let mut data_source = io::data_source(provider, &type_name)?;
        io::validate(&data_source.schema(), &config)?;
        data_source.configure(&ProviderData::offline());

        let mut diagnostics = Diagnostics::new();
        let state = data_source.read(&config, &mut diagnostics).await;
        io::report(&diagnostics)?;
        let state = state.context("The manifest could not be rendered")?;
        if self.json {
            io::print_json(&state)
        } else {
            print!("{}", state["yaml"].as_str().unwrap_or_default());
            Ok(())
        }
    }
}
