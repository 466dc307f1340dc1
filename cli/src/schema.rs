use crate::io::{self, TypeArgs};
use anyhow::{Context, Result};
use clap::Parser;
use provider::Provider;

/// Print the schema of a type as JSON.
#[derive(Debug, Parser)]
pub(crate) struct Schema {
    #[clap(flatten)]
    type_args: TypeArgs,
}

impl Schema {
    pub(crate) fn run(&self, provider: &Provider) -> Result<()> {
        let type_name = &self.type_args.type_name;
        let schema = if type_name == provider.type_name() {
            provider.schema()
        } else if self.type_args.resource {
            io::resource(provider, type_name)?.schema()
        } else {
            io::data_source(provider, type_name)?.schema()
        };
        io::print_json(&serde_json::to_value(&schema).context("Unable to serialize schema")?)
    }
}
