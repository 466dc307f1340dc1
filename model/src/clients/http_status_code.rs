pub use http::StatusCode;
use kube::error::ErrorResponse;

/// Exposes the HTTP status of a failed Kubernetes API call, so that callers can tell the responses
/// they handle (a missing object, a field manager conflict) apart from other failures.
pub trait HttpStatusCode {
    fn status_code(&self) -> Option<StatusCode>;

    fn is_status_code(&self, status_code: StatusCode) -> bool {
        self.status_code() == Some(status_code)
    }

    /// The object does not exist (any more).
    fn is_not_found(&self) -> bool {
        self.is_status_code(StatusCode::NOT_FOUND)
    }

    /// A server-side apply touched fields that another field manager owns.
    fn is_conflict(&self) -> bool {
        self.is_status_code(StatusCode::CONFLICT)
    }
}

impl HttpStatusCode for ErrorResponse {
    fn status_code(&self) -> Option<StatusCode> {
        StatusCode::from_u16(self.code).ok()
    }
}

impl HttpStatusCode for kube::Error {
    fn status_code(&self) -> Option<StatusCode> {
        match self {
            kube::Error::Api(response) => response.status_code(),
            _ => None,
        }
    }
}

impl<T, E> HttpStatusCode for std::result::Result<T, E>
where
    E: HttpStatusCode,
{
    fn status_code(&self) -> Option<StatusCode> {
        self.as_ref().err().and_then(HttpStatusCode::status_code)
    }
}
