use thiserror::Error;
use url::Url;

use crate::{config::ConfigError, errors::RequestFailure};

/// Anything that went wrong while talking to SharpAPI.
#[derive(Debug, Error)]
pub enum TransportFailure {
    #[error(transparent)]
    Reqwest(#[from] reqwest::Error),

    #[error(transparent)]
    Failure(#[from] RequestFailure),

    #[error("[E008] Malformed response from {url}: {reason}\n\nSuggestions:\n  • Check that the base URL points at the SharpAPI v1 API\n  • The service may have changed its response format")]
    MalformedResponse { url: Url, reason: String },
}

impl TransportFailure {
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::Reqwest(_) => "E999", // Network errors get generic code
            Self::Failure(f) => f.error_code(),
            Self::MalformedResponse { .. } => "E008",
        }
    }
}

#[derive(Debug, Error)]
pub enum ApiClientError {
    #[error(transparent)]
    InvalidConfiguration(#[from] ConfigError),

    #[error(transparent)]
    Transport(#[from] TransportFailure),
}

impl ApiClientError {
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidConfiguration(e) => e.error_code(),
            Self::Transport(e) => e.error_code(),
        }
    }
}

impl From<reqwest::Error> for ApiClientError {
    fn from(value: reqwest::Error) -> Self {
        Self::Transport(TransportFailure::from(value))
    }
}

impl From<RequestFailure> for ApiClientError {
    fn from(value: RequestFailure) -> Self {
        Self::Transport(TransportFailure::from(value))
    }
}
