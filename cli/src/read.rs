use crate::io::{self, TypeArgs};
use anyhow::Result;
use clap::{value_parser, Parser};
use log::info;
use provider::{Diagnostics, Provider, ProviderData};
use std::path::PathBuf;

/// Read a data source from its configuration, or refresh a resource from its state.
#[derive(Debug, Parser)]
pub(crate) struct Read {
    #[clap(flatten)]
    type_args: TypeArgs,
    /// Path to the data source configuration or the resource state, in JSON or YAML.
    #[clap(short = 'f', long = "file", value_parser = value_parser!(PathBuf))]
    file: PathBuf,
}

impl Read {
    pub(crate) async fn run(&self, provider: &Provider, provider_data: ProviderData) -> Result<()> {
        let input = io::read_document(&self.file).await?;
        let type_name = &self.type_args.type_name;
        let mut diagnostics = Diagnostics::new();
        let state = if self.type_args.resource {
            let mut resource = io::resource(provider, type_name)?;
            resource.configure(&provider_data);
            resource.read(&input, &mut diagnostics).await
        } else {
            let mut data_source = io::data_source(provider, type_name)?;
            io::validate(&data_source.schema(), &input)?;
            data_source.configure(&provider_data);
            data_source.read(&input, &mut diagnostics).await
        };
        io::report(&diagnostics)?;
        match state {
            Some(state) => io::print_json(&state),
            None => {
                info!("The object no longer exists");
                io::print_json(&serde_json::Value::Null)
            }
        }
    }
}
