use crate::io;
use anyhow::Result;
use clap::{value_parser, Parser};
use provider::{Diagnostics, Provider, ProviderData};
use std::path::PathBuf;

/// Create a resource from its planned configuration, or update it when its prior state is given.
#[derive(Debug, Parser)]
pub(crate) struct Apply {
    /// The resource type name.
    type_name: String,
    /// Path to the planned configuration, in JSON or YAML.
    #[clap(short = 'f', long = "file", value_parser = value_parser!(PathBuf))]
    file: PathBuf,
    /// Path to the prior state of the resource. Without it the resource is created.
    #[clap(long = "state", value_parser = value_parser!(PathBuf))]
    state: Option<PathBuf>,
}

impl Apply {
    pub(crate) async fn run(&self, provider: &Provider, provider_data: ProviderData) -> Result<()> {
        let plan = io::read_document(&self.file).await?;
        let mut resource = io::resource(provider, &self.type_name)?;
        io::validate(&resource.schema(), &plan)?;
        resource.configure(&provider_data);

        let mut diagnostics = Diagnostics::new();
        let state = match &self.state {
            Some(path) => {
                let prior = io::read_document(path).await?;
                resource.update(&plan, &prior, &mut diagnostics).await
            }
            None => resource.create(&plan, &mut diagnostics).await,
        };
        io::report(&diagnostics)?;
        match state {
            Some(state) => io::print_json(&state),
            None => Ok(()),
        }
    }
}
