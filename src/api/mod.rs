// Re-export the API module components
pub use self::{
    client::{SharpApiClient, DEFAULT_USER_AGENT},
    errors::{ApiClientError, TransportFailure},
    models::{Error, StatusUrlResponse},
};

// Module declarations
mod client;
mod errors;
mod models;
