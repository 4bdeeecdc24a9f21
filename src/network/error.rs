use thiserror::Error;

/// Failure of a campaign request.
///
/// Only [`FetchError::NoInternetConnection`] is recoverable from the listing
/// screen; every other kind ends the fetch cycle.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FetchError {
    #[error("no internet connection: {0}")]
    NoInternetConnection(String),
    #[error("server responded with HTTP {status}")]
    Http { status: u16 },
    #[error("malformed response: {0}")]
    Decode(String),
    #[error("request failed: {0}")]
    Transport(String),
}

impl FetchError {
    pub fn is_connectivity(&self) -> bool {
        matches!(self, FetchError::NoInternetConnection(_))
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_connect() || e.is_timeout() {
            FetchError::NoInternetConnection(e.to_string())
        } else if e.is_decode() {
            FetchError::Decode(e.to_string())
        } else if let Some(status) = e.status() {
            FetchError::Http {
                status: status.as_u16(),
            }
        } else {
            FetchError::Transport(e.to_string())
        }
    }
}
