use crate::diagnostics::Diagnostic;
use crate::schema::AttributePath;
use model::clients::HttpStatusCode;
use snafu::Snafu;

/// The `Result` type returned by the provider operations.
pub type Result<T> = std::result::Result<T, Error>;

/// The public error type of the provider operations. Operations report it as a `Diagnostic`.
#[derive(Debug, Snafu)]
pub struct Error(InnerError);

#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub(crate) enum InnerError {
    #[snafu(display("{}", source))]
    Marshal { source: serde_json::Error },

    #[snafu(display("{}", source))]
    Unmarshal { source: serde_json::Error },

    #[snafu(display("{}", source))]
    Yaml { source: model::Error },

    #[snafu(display("{}", source))]
    Get { source: model::clients::Error },

    #[snafu(display("{}", source))]
    Patch { source: model::clients::Error },

    #[snafu(display("{}", source))]
    Delete { source: model::clients::Error },

    #[snafu(display(
        "Expected configured provider data with a Kubernetes client. Configure the provider \
        without 'offline' to use '{}'.",
        type_name
    ))]
    NotConfigured { type_name: String },

    #[snafu(display("Expected '{}' to be set.", what))]
    MissingMetadata { what: String },

    #[snafu(display(
        "Expected import identifier with format 'namespace/name', got: {:?}",
        id
    ))]
    InvalidImportId { id: String },

    #[snafu(display(
        "The value of {} cannot be changed in place, the resource must be replaced.",
        path
    ))]
    RequiresReplacement { path: AttributePath },

    #[snafu(display("Unable to read kubeconfig: {}", source))]
    Kubeconfig { source: kube::config::KubeconfigError },

    #[snafu(display("Unable to create Kubernetes client: {}", source))]
    ClientCreate { source: kube::Error },
}

impl Error {
    /// Renders the error as a diagnostic with a summary that names the failed step.
    pub fn to_diagnostic(&self) -> Diagnostic {
        let summary = match &self.0 {
            InnerError::Marshal { .. } | InnerError::Yaml { .. } => "Unable to marshal resource",
            InnerError::Unmarshal { .. } => "Unable to unmarshal resource",
            InnerError::Get { .. } => "Unable to GET resource",
            InnerError::Patch { .. } => "Unable to PATCH resource",
            InnerError::Delete { .. } => "Unable to DELETE resource",
            InnerError::NotConfigured { .. } => "Provider not configured",
            InnerError::MissingMetadata { .. } => "Invalid resource metadata",
            InnerError::InvalidImportId { .. } => "Error importing resource",
            InnerError::RequiresReplacement { .. } => "Unable to update resource",
            InnerError::Kubeconfig { .. } | InnerError::ClientCreate { .. } => {
                "Unable to configure provider"
            }
        };
        match &self.0 {
            InnerError::Patch { source } if source.is_conflict() => Diagnostic::error(
                summary,
                format!(
                    "{}\n\nSet force_conflicts = true to take over the conflicting fields.",
                    self
                ),
            ),
            InnerError::RequiresReplacement { path } => {
                Diagnostic::error(summary, self.to_string()).with_path(path.clone())
            }
            _ => Diagnostic::error(summary, self.to_string()),
        }
    }
}

impl From<Error> for Diagnostic {
    fn from(e: Error) -> Self {
        e.to_diagnostic()
    }
}
