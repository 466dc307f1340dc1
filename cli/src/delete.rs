use crate::io;
use anyhow::Result;
use clap::{value_parser, Parser};
use provider::{Diagnostics, Provider, ProviderData};
use std::path::PathBuf;

/// Delete the object of a resource.
#[derive(Debug, Parser)]
pub(crate) struct Delete {
    /// The resource type name.
    type_name: String,
    /// Path to the state of the resource, in JSON or YAML.
    #[clap(short = 'f', long = "file", value_parser = value_parser!(PathBuf))]
    file: PathBuf,
}

impl Delete {
    pub(crate) async fn run(&self, provider: &Provider, provider_data: ProviderData) -> Result<()> {
        let state = io::read_document(&self.file).await?;
        let mut resource = io::resource(provider, &self.type_name)?;
        resource.configure(&provider_data);
        let mut diagnostics = Diagnostics::new();
        resource.delete(&state, &mut diagnostics).await;
        io::report(&diagnostics)?;
        println!("Deleted '{}'.", state["id"].as_str().unwrap_or_default());
        Ok(())
    }
}
