use std::time::Duration;

use log::debug;
use reqwest::{
    blocking::{self, Client, Response},
    header::{ACCEPT, USER_AGENT},
    StatusCode,
};
use serde::Serialize;
use url::Url;

use crate::{
    config::{
        default_base_url, validate_api_key, ConfigError, DEFAULT_POLLING_INTERVAL_SECS,
        DEFAULT_POLLING_WAIT_SECS,
    },
    errors::RequestFailure,
};

use super::errors::{ApiClientError, TransportFailure};
use super::models::{Error, StatusUrlResponse};

pub const DEFAULT_USER_AGENT: &str = concat!("SharpAPIRustClient/", env!("CARGO_PKG_VERSION"));

/// Generic SharpAPI transport: authenticated JSON requests against a base
/// URL, plus the polling settings for whoever checks job status later.
///
/// Endpoint clients wrap one of these and configure it once; after that
/// it is only read, so a shared reference can be used from many threads.
#[derive(Clone)]
pub struct SharpApiClient {
    api_key: String,
    base: Url,
    user_agent: String,
    polling_interval: Duration,
    polling_wait: Duration,
    client: Client,
}

impl SharpApiClient {
    /// # Errors
    ///
    /// Fails if `api_key` is blank or can't be sent as a bearer token.
    /// Nothing is sent over the network before this check.
    pub fn new(api_key: impl AsRef<str>) -> Result<Self, ApiClientError> {
        let api_key = validate_api_key(api_key.as_ref())?;

        Ok(Self {
            api_key,
            base: default_base_url(),
            user_agent: DEFAULT_USER_AGENT.to_owned(),
            polling_interval: Duration::from_secs(DEFAULT_POLLING_INTERVAL_SECS),
            polling_wait: Duration::from_secs(DEFAULT_POLLING_WAIT_SECS),
            client: blocking::Client::new(),
        })
    }

    /// # Errors
    ///
    /// Fails if provided `Url` cannot be a base. We rely on that
    /// invariant in [`Self::endpoint_url`].
    pub fn set_base_url(&mut self, base: Url) -> Result<(), ApiClientError> {
        if base.cannot_be_a_base() {
            return Err(ApiClientError::from(ConfigError::CannotBeBase(base)));
        }
        self.base = base;
        Ok(())
    }

    pub fn set_user_agent(&mut self, user_agent: impl Into<String>) {
        self.user_agent = user_agent.into();
    }

    pub fn set_polling_interval(&mut self, interval: Duration) {
        self.polling_interval = interval;
    }

    pub fn set_polling_wait(&mut self, wait: Duration) {
        self.polling_wait = wait;
    }

    pub const fn base_url(&self) -> &Url {
        &self.base
    }

    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    pub const fn polling_interval(&self) -> Duration {
        self.polling_interval
    }

    pub const fn polling_wait(&self) -> Duration {
        self.polling_wait
    }

    /// Appends the segments of `path` to the base URL, so
    /// `/hr/job_description` against `https://sharpapi.com/api/v1` becomes
    /// `https://sharpapi.com/api/v1/hr/job_description`.
    ///
    /// # Errors
    ///
    /// Will return `Err` if the URL cannot be a base.
    pub fn endpoint_url(&self, path: &str) -> Result<Url, ApiClientError> {
        let mut url = self.base.clone();
        let url_clone = url.clone();
        url.path_segments_mut()
            .map_err(|_| ConfigError::CannotBeBase(url_clone))?
            .pop_if_empty()
            .extend(path.split('/').filter(|segment| !segment.is_empty()));
        Ok(url)
    }

    /// Sends `body` as JSON to `path`. Exactly one request is made; a
    /// non-success status is returned as [`RequestFailure`] without retrying.
    ///
    /// # Errors
    ///
    /// Will return `Err` on network failure or non-2xx status.
    pub fn post<B>(&self, path: &str, body: &B) -> Result<(Url, Response), ApiClientError>
    where
        B: Serialize + ?Sized,
    {
        let url = self.endpoint_url(path)?;
        debug!("POST {url}");

        let response = self
            .client
            .post(url.clone())
            .bearer_auth(&self.api_key)
            .header(ACCEPT, "application/json")
            .header(USER_AGENT, &self.user_agent)
            .json(body)
            .send()
            .map_err(TransportFailure::from)?;

        let status = response.status();
        debug!("{url} responded with {status}");
        if status.is_success() {
            return Ok((url, response));
        }

        let text = response.text()?;
        let msg = match status {
            StatusCode::UNPROCESSABLE_ENTITY => serde_json::from_str::<Error>(&text)
                .map(|error| error.message)
                .unwrap_or(text),
            _ => text,
        };
        Err(ApiClientError::from(RequestFailure::new(url, status, msg)))
    }

    /// Pulls the job's status URL out of a dispatch response.
    ///
    /// # Errors
    ///
    /// Will return `Err` if the body can't be read, isn't the expected
    /// JSON or carries an empty `status_url`.
    pub fn parse_status_url(url: Url, response: Response) -> Result<String, ApiClientError> {
        let text = response.text()?;

        let dispatch: StatusUrlResponse =
            serde_json::from_str(&text).map_err(|e| TransportFailure::MalformedResponse {
                url: url.clone(),
                reason: e.to_string(),
            })?;

        if dispatch.status_url.trim().is_empty() {
            return Err(ApiClientError::from(TransportFailure::MalformedResponse {
                url,
                reason: "status_url is empty".to_owned(),
            }));
        }

        Ok(dispatch.status_url)
    }
}
