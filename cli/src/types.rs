use anyhow::Result;
use clap::Parser;
use provider::Provider;

/// List the type names offered by the provider.
#[derive(Debug, Parser)]
pub(crate) struct Types {
    /// Output the type names in JSON format.
    #[clap(long = "json")]
    json: bool,
}

impl Types {
    pub(crate) fn run(&self, provider: &Provider) -> Result<()> {
        let data_sources: Vec<String> = provider
            .data_sources()
            .iter()
            .map(|d| d.type_name().to_string())
            .collect();
        let resources: Vec<String> = provider
            .resources()
            .iter()
            .map(|r| r.type_name().to_string())
            .collect();
        if self.json {
            crate::io::print_json(&serde_json::json!({
                "provider": provider.type_name(),
                "version": provider.version(),
                "data_sources": data_sources,
                "resources": resources,
            }))
        } else {
            for name in data_sources {
                println!("data source  {}", name);
            }
            for name in resources {
                println!("resource     {}", name);
            }
            Ok(())
        }
    }
}
