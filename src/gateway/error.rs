//! Gateway error taxonomy
//!
//! Every variant is terminal for the request. `Display` is the plain-text body
//! sent back to the caller.

use hyper::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GatewayError {
    /// The server secret is unset or empty
    #[error("Server configuration error: {0} is not set.")]
    MissingSecret(String),

    #[error("Unauthorized: Invalid or missing token.")]
    Unauthorized,

    #[error("Bad Request: Invalid file name.")]
    InvalidFileName,

    #[error("Not Found")]
    NotFound,

    /// Unexpected filesystem failure while checking or reading the file
    #[error("Internal Server Error")]
    Io(#[source] std::io::Error),
}

impl GatewayError {
    /// HTTP status for this error
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::MissingSecret(_) | Self::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::InvalidFileName => StatusCode::BAD_REQUEST,
            Self::NotFound => StatusCode::NOT_FOUND,
        }
    }
}
