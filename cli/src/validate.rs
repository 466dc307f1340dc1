use crate::io::{self, TypeArgs};
use anyhow::Result;
use clap::{value_parser, Parser};
use provider::Provider;
use std::path::PathBuf;

/// Validate a configuration file against the schema of its type.
#[derive(Debug, Parser)]
pub(crate) struct Validate {
    #[clap(flatten)]
    type_args: TypeArgs,
    /// Path to the configuration, in JSON or YAML.
    #[clap(short = 'f', long = "file", value_parser = value_parser!(PathBuf))]
    file: PathBuf,
}

impl Validate {
    pub(crate) async fn run(&self, provider: &Provider) -> Result<()> {
        let config = io::read_document(&self.file).await?;
        let type_name = &self.type_args.type_name;
        let schema = if self.type_args.resource {
            io::resource(provider, type_name)?.schema()
        } else {
            io::data_source(provider, type_name)?.schema()
        };
        io::validate(&schema, &config)?;
        println!("The configuration is valid.");
        Ok(())
    }
}
