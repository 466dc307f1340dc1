use crate::clients::{HttpStatusCode, StatusCode};
use snafu::Snafu;
use std::time::Duration;

/// The `Result` type returned by `clients`.
pub type Result<T> = std::result::Result<T, Error>;

/// The public error type returned by `clients`.
#[derive(Debug, Snafu)]
pub struct Error(InnerError);

/// The private error type returned by `clients`.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub(super)))]
pub(crate) enum InnerError {
    #[snafu(display("Unable to {} {}: {}", method, what, source))]
    KubeApiCall {
        method: String,
        what: String,
        source: kube::Error,
    },

    #[snafu(display(
        "{} '{}' still exists {:?} after it was deleted",
        what,
        name,
        timeout
    ))]
    DeletionTimeout {
        what: String,
        name: String,
        timeout: Duration,
    },
}

impl HttpStatusCode for InnerError {
    fn status_code(&self) -> Option<StatusCode> {
        match self {
            InnerError::DeletionTimeout { .. } => None,
            InnerError::KubeApiCall {
                method: _,
                source: e,
                what: _,
            } => e.status_code(),
        }
    }
}

impl HttpStatusCode for Error {
    fn status_code(&self) -> Option<StatusCode> {
        self.0.status_code()
    }
}
