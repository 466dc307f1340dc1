/*!

A Terraform style provider for the custom resources of the Redis Enterprise operator. Every CRD
kind is offered three ways:

- a data source that reads an existing object,
- a resource that manages an object with server-side apply,
- a manifest data source that renders an object as YAML without a cluster.

The schemas of all of them are derived from the OpenAPI schema of the CRD. Configurations, plans
and states are JSON values keyed by the schema's attribute names, and every failure is reported as
a `Diagnostic`.

!*/

#![deny(
    clippy::expect_used,
    clippy::get_unwrap,
    clippy::panic,
    clippy::panic_in_result_fn,
    clippy::panicking_unwrap,
    clippy::unwrap_in_result,
    clippy::unwrap_used
)]

mod common;
mod data_source;
mod diagnostics;
mod error;
mod manifest;
mod provider;
mod resource;
pub mod schema;
#[cfg(test)]
mod test_util;

pub use data_source::{CustomResourceDataSource, DataSource};
pub use diagnostics::{Diagnostic, Diagnostics, Severity};
pub use error::{Error, Result};
pub use manifest::ManifestDataSource;
pub use provider::{Provider, ProviderData};
pub use resource::{CustomResource, Resource};
pub use schema::Schema;
