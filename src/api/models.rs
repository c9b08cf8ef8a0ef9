use serde::Deserialize;

/// Error body SharpAPI sends alongside validation failures.
#[derive(Debug, Deserialize)]
pub struct Error {
    pub message: String,
}

/// Body of a successful job dispatch.
#[derive(Debug, Deserialize)]
pub struct StatusUrlResponse {
    pub status_url: String,
}
