use thiserror::Error;

/// Errors from the platform API client.
///
/// `Http` carries the server's `error` body field verbatim when present,
/// since every screen displays it unmodified.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Please log in to continue")]
    NotAuthenticated,

    #[error("Cannot reach the BrainScan API at {0}")]
    Connection(String),

    #[error("Request timed out")]
    Timeout,

    #[error("{message}")]
    Http { status: u16, message: String },

    #[error("Malformed response: {0}")]
    ResponseParsing(String),

    #[error("HTTP transport error: {0}")]
    Transport(String),
}
