use log::debug;
use toml::Table;

use crate::{
    api::{ApiClientError, SharpApiClient},
    config::Config,
    parameters::JobDescriptionParameters,
};

/// Identifies this package to SharpAPI.
pub const USER_AGENT: &str = "SharpAPILaravelHrJobDescription/1.0.0";

const JOB_DESCRIPTION_ENDPOINT: &str = "/hr/job_description";

/// Client for SharpAPI's HR job description generator.
///
/// Generation is asynchronous on the SharpAPI side: a call dispatches the
/// job and hands back the URL to poll for its result.
#[derive(Clone)]
pub struct HrJobDescriptionClient {
    api: SharpApiClient,
}

impl HrJobDescriptionClient {
    /// # Errors
    ///
    /// Fails with [`ApiClientError::InvalidConfiguration`] if the API key
    /// is empty or the base URL cannot be a base.
    pub fn new(config: &Config) -> Result<Self, ApiClientError> {
        let mut api = SharpApiClient::new(config.api_key())?;
        api.set_base_url(config.base_url().clone())?;
        api.set_polling_interval(config.polling_interval());
        api.set_polling_wait(config.polling_wait());
        api.set_user_agent(USER_AGENT);

        Ok(Self { api })
    }

    /// Builds the client from a host configuration store populated by
    /// [`crate::registrar::register`].
    ///
    /// # Errors
    ///
    /// Fails with [`ApiClientError::InvalidConfiguration`] if the store
    /// lacks an API key or holds invalid values.
    pub fn from_store(store: &Table) -> Result<Self, ApiClientError> {
        Self::new(&Config::from_store(store)?)
    }

    pub const fn api(&self) -> &SharpApiClient {
        &self.api
    }

    /// Dispatches a job description generation job and returns the URL to
    /// poll for the result. Only `name` is required in `params`.
    ///
    /// # Errors
    ///
    /// Will return [`ApiClientError::Transport`] on network failure,
    /// non-2xx status or a response without a status URL.
    pub fn generate_job_description(
        &self,
        params: &JobDescriptionParameters,
    ) -> Result<String, ApiClientError> {
        debug!("Requesting job description for: {}", params.name);

        let (url, response) = self.api.post(JOB_DESCRIPTION_ENDPOINT, params)?;
        SharpApiClient::parse_status_url(url, response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_client_takes_config_snapshot() {
        let config = Config::new("key")
            .unwrap()
            .with_base_url("https://eu.sharpapi.com/api/v1")
            .unwrap()
            .with_polling_interval(7)
            .with_polling_wait(90);
        let client = HrJobDescriptionClient::new(&config).unwrap();

        assert_eq!(client.api().base_url().as_str(), "https://eu.sharpapi.com/api/v1");
        assert_eq!(client.api().polling_interval(), Duration::from_secs(7));
        assert_eq!(client.api().polling_wait(), Duration::from_secs(90));
        assert_eq!(client.api().user_agent(), USER_AGENT);
    }

    #[test]
    fn test_client_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<HrJobDescriptionClient>();
    }
}
