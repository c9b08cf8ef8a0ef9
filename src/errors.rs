use reqwest::StatusCode;
use std::fmt::{self, Formatter};
use thiserror::Error;
use url::Url;

/// A request that reached SharpAPI but came back with a non-success status.
#[derive(Debug, Error)]
pub struct RequestFailure {
    pub url: Url,
    pub status: StatusCode,
    pub msg: String,
}

impl RequestFailure {
    pub fn new(url: Url, status: StatusCode, msg: impl Into<String>) -> Self {
        Self {
            url,
            status,
            msg: msg.into(),
        }
    }

    pub const fn error_code(&self) -> &'static str {
        "E002"
    }

    fn suggestions(&self) -> Vec<&'static str> {
        match self.status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => vec![
                "Check that SHARP_API_KEY holds a valid SharpAPI key",
                "Verify that your subscription covers the HR endpoints",
            ],
            StatusCode::NOT_FOUND => vec![
                "Check that the base URL is correct",
                "Expected something like https://sharpapi.com/api/v1",
            ],
            StatusCode::UNPROCESSABLE_ENTITY => vec![
                "Make sure the job position name is not empty",
                "Review the optional parameters for invalid values",
            ],
            StatusCode::TOO_MANY_REQUESTS => vec![
                "Wait a moment before retrying",
                "Consider reducing request frequency",
            ],
            status if status.is_server_error() => vec![
                "SharpAPI is having trouble right now, try again later",
            ],
            _ => vec!["Inspect the server response below for details"],
        }
    }
}

impl fmt::Display for RequestFailure {
    fn fmt(&self, formatter: &mut Formatter) -> fmt::Result {
        writeln!(
            formatter,
            "[{}] Request to {} returned {}",
            self.error_code(),
            self.url,
            self.status
        )?;
        writeln!(formatter, "\nSuggestions:")?;
        for suggestion in self.suggestions() {
            writeln!(formatter, "  • {suggestion}")?;
        }
        write!(formatter, "\nServer response: {}", self.msg)
    }
}
