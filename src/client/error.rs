use std::error::Error as StdError;
use std::path::PathBuf;

use crate::domain::ValidationError;
use crate::transport::decode_api_message;

/// A transport call that did not yield a usable response.
#[derive(Debug)]
pub(crate) enum TransportFailure {
    /// The gateway answered with a non-success status.
    Response { status: u16, body: String },
    /// The request went out but no response came back (DNS, TLS, timeout, reset).
    NoResponse(Box<dyn StdError + Send + Sync>),
    /// The request could not be built or dispatched at all.
    Setup(Box<dyn StdError + Send + Sync>),
}

#[derive(Debug, thiserror::Error)]
/// Errors returned by [`ApipediaClient`](crate::ApipediaClient) and
/// [`ChainResult`](crate::ChainResult).
///
/// Every network failure is one of `Api`, `Network` or `Request`; `FileNotFound`
/// and `Validation` are raised before anything is sent.
pub enum ApipediaError {
    /// The gateway rejected the request.
    #[error("API Error: {status} - {message}")]
    Api { status: u16, message: String },

    /// No response reached the caller.
    #[error("Network Error: No response received from API")]
    Network(#[source] Box<dyn StdError + Send + Sync>),

    /// Local failure before the request was dispatched.
    #[error("Request Error: {message}")]
    Request { message: String },

    /// A media path does not exist on disk.
    #[error("File does not exist: {}", .path.display())]
    FileNotFound { path: PathBuf },

    /// One of the domain constructors rejected an argument.
    #[error("Request Error: {0}")]
    Validation(#[from] ValidationError),
}

impl ApipediaError {
    pub(crate) fn request(message: impl Into<String>) -> Self {
        Self::Request {
            message: message.into(),
        }
    }
}

impl From<TransportFailure> for ApipediaError {
    /// Response first, then "sent but unanswered", then local setup failure.
    fn from(value: TransportFailure) -> Self {
        match value {
            TransportFailure::Response { status, body } => Self::Api {
                status,
                message: decode_api_message(status, &body),
            },
            TransportFailure::NoResponse(source) => Self::Network(source),
            TransportFailure::Setup(source) => Self::request(source.to_string()),
        }
    }
}
