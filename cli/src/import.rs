use crate::io;
use anyhow::{bail, Result};
use clap::Parser;
use provider::{Diagnostics, Provider, ProviderData};

/// Import an existing object as a resource and print its state.
#[derive(Debug, Parser)]
pub(crate) struct Import {
    /// The resource type name.
    type_name: String,
    /// The identifier of the object, `namespace/name`.
    id: String,
}

impl Import {
    pub(crate) async fn run(&self, provider: &Provider, provider_data: ProviderData) -> Result<()> {
        let mut resource = io::resource(provider, &self.type_name)?;
        resource.configure(&provider_data);
        let mut diagnostics = Diagnostics::new();
        let state = resource.import_state(&self.id, &mut diagnostics);
        io::report(&diagnostics)?;
        let state = match state {
            Some(state) => resource.read(&state, &mut diagnostics).await,
            None => None,
        };
        io::report(&diagnostics)?;
        match state {
            Some(state) => io::print_json(&state),
            None => bail!("Cannot import non-existent remote object '{}'", self.id),
        }
    }
}
