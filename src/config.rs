use std::{fmt, fs, io, path::Path, time::Duration};

use reqwest::header::HeaderValue;
use thiserror::Error;
use toml::{Table, Value};
use url::Url;

/// Key the package settings live under in a host configuration store.
pub const NAMESPACE: &str = "sharpapi-hr-job-description";

pub const DEFAULT_BASE_URL: &str = "https://sharpapi.com/api/v1";
pub const DEFAULT_POLLING_INTERVAL_SECS: u64 = 5;
pub const DEFAULT_POLLING_WAIT_SECS: u64 = 180;

pub mod keys {
    pub const API_KEY: &str = "api_key";
    pub const BASE_URL: &str = "base_url";
    pub const POLLING_INTERVAL: &str = "api_job_status_polling_interval";
    pub const POLLING_WAIT: &str = "api_job_status_polling_wait";
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("[E001] SharpAPI key is missing or empty\n\nSuggestions:\n  • Set the SHARP_API_KEY environment variable\n  • Or set api_key in the [sharpapi-hr-job-description] section of your config file\n  • Keys are available from your SharpAPI dashboard")]
    MissingApiKey,

    #[error("[E003] Invalid base URL: {url}\n\nSuggestions:\n  • Provide a valid HTTP or HTTPS URL\n  • Example: https://sharpapi.com/api/v1")]
    InvalidBaseUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("[E004] {0} cannot be a base URL\n\nSuggestions:\n  • Ensure the URL includes the protocol (http:// or https://)\n  • Example: https://sharpapi.com/api/v1")]
    CannotBeBase(Url),

    #[error("[E005] Configuration value '{key}' must be {expected}")]
    InvalidValue {
        key: &'static str,
        expected: &'static str,
    },

    #[error("[E006] Failed to parse configuration file\n\nSuggestions:\n  • Check that the file is valid TOML\n  • Settings belong in a [sharpapi-hr-job-description] table")]
    Parse(#[from] toml::de::Error),

    #[error("[E007] Failed to read configuration file")]
    Io(#[from] io::Error),
}

impl ConfigError {
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::MissingApiKey => "E001",
            Self::InvalidBaseUrl { .. } => "E003",
            Self::CannotBeBase(_) => "E004",
            Self::InvalidValue { .. } => "E005",
            Self::Parse(_) => "E006",
            Self::Io(_) => "E007",
        }
    }
}

/// Settings the job description client is constructed from.
///
/// Built once at bootstrap, either directly or from a host configuration
/// store populated by [`crate::registrar::register`]. The polling settings
/// are carried for whoever polls the returned status URL; the client itself
/// never waits on them.
#[derive(Clone, PartialEq, Eq)]
pub struct Config {
    api_key: String,
    base_url: Url,
    polling_interval_secs: u64,
    polling_wait_secs: u64,
}

impl Config {
    /// # Errors
    ///
    /// Fails with [`ConfigError::MissingApiKey`] if `api_key` is empty
    /// or blank, and with [`ConfigError::InvalidValue`] if it can't be sent
    /// in an `Authorization` header.
    pub fn new(api_key: impl AsRef<str>) -> Result<Self, ConfigError> {
        let api_key = validate_api_key(api_key.as_ref())?;

        Ok(Self {
            api_key,
            base_url: default_base_url(),
            polling_interval_secs: DEFAULT_POLLING_INTERVAL_SECS,
            polling_wait_secs: DEFAULT_POLLING_WAIT_SECS,
        })
    }

    /// # Errors
    ///
    /// Fails if `raw` doesn't parse as a URL or cannot be a base.
    pub fn with_base_url(mut self, raw: &str) -> Result<Self, ConfigError> {
        self.base_url = parse_base_url(raw)?;
        Ok(self)
    }

    #[must_use]
    pub const fn with_polling_interval(mut self, secs: u64) -> Self {
        self.polling_interval_secs = secs;
        self
    }

    #[must_use]
    pub const fn with_polling_wait(mut self, secs: u64) -> Self {
        self.polling_wait_secs = secs;
        self
    }

    /// Reads the [`NAMESPACE`] section of a host configuration store.
    /// Absent values fall back to the package defaults.
    ///
    /// # Errors
    ///
    /// Fails if the API key is absent or empty, or if any present value
    /// has the wrong type.
    pub fn from_store(store: &Table) -> Result<Self, ConfigError> {
        let empty = Table::new();
        let section = match store.get(NAMESPACE) {
            None => &empty,
            Some(Value::Table(section)) => section,
            Some(_) => {
                return Err(ConfigError::InvalidValue {
                    key: NAMESPACE,
                    expected: "a table",
                })
            }
        };

        let api_key = match section.get(keys::API_KEY) {
            None => "",
            Some(value) => as_str(value, keys::API_KEY)?,
        };
        let mut config = Self::new(api_key)?;

        if let Some(value) = section.get(keys::BASE_URL) {
            config = config.with_base_url(as_str(value, keys::BASE_URL)?)?;
        }
        if let Some(value) = section.get(keys::POLLING_INTERVAL) {
            config = config.with_polling_interval(as_secs(value, keys::POLLING_INTERVAL)?);
        }
        if let Some(value) = section.get(keys::POLLING_WAIT) {
            config = config.with_polling_wait(as_secs(value, keys::POLLING_WAIT)?);
        }

        Ok(config)
    }

    /// Loads a host configuration file into a store.
    ///
    /// # Errors
    ///
    /// Fails if the file can't be read or isn't valid TOML.
    pub fn load_store(path: &Path) -> Result<Table, ConfigError> {
        let content = fs::read_to_string(path)?;
        Ok(content.parse::<Table>()?)
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub const fn polling_interval_secs(&self) -> u64 {
        self.polling_interval_secs
    }

    pub const fn polling_wait_secs(&self) -> u64 {
        self.polling_wait_secs
    }

    pub const fn polling_interval(&self) -> Duration {
        Duration::from_secs(self.polling_interval_secs)
    }

    pub const fn polling_wait(&self) -> Duration {
        Duration::from_secs(self.polling_wait_secs)
    }
}

// Keep the key out of logs.
impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url.as_str())
            .field("polling_interval_secs", &self.polling_interval_secs)
            .field("polling_wait_secs", &self.polling_wait_secs)
            .finish()
    }
}

pub(crate) fn default_base_url() -> Url {
    Url::parse(DEFAULT_BASE_URL).unwrap_or_else(|_| unreachable!("default base URL is valid"))
}

/// Trims surrounding whitespace off `raw` and checks that what is left can
/// be sent as a bearer token.
///
/// # Errors
///
/// Fails with [`ConfigError::MissingApiKey`] if nothing is left after
/// trimming, and with [`ConfigError::InvalidValue`] if the key holds
/// control characters.
pub fn validate_api_key(raw: &str) -> Result<String, ConfigError> {
    let api_key = raw.trim();
    if api_key.is_empty() {
        return Err(ConfigError::MissingApiKey);
    }
    if HeaderValue::from_str(&format!("Bearer {api_key}")).is_err() {
        return Err(ConfigError::InvalidValue {
            key: keys::API_KEY,
            expected: "a printable ASCII token",
        });
    }

    Ok(api_key.to_owned())
}

/// # Errors
///
/// Fails if `raw` doesn't parse as a URL or cannot be a base.
pub fn parse_base_url(raw: &str) -> Result<Url, ConfigError> {
    let url = Url::parse(raw).map_err(|source| ConfigError::InvalidBaseUrl {
        url: raw.to_owned(),
        source,
    })?;

    if url.cannot_be_a_base() {
        Err(ConfigError::CannotBeBase(url))
    } else {
        Ok(url)
    }
}

fn as_str<'a>(value: &'a Value, key: &'static str) -> Result<&'a str, ConfigError> {
    value.as_str().ok_or(ConfigError::InvalidValue {
        key,
        expected: "a string",
    })
}

// Numbers may arrive as strings when they came from the environment.
fn as_secs(value: &Value, key: &'static str) -> Result<u64, ConfigError> {
    let invalid = ConfigError::InvalidValue {
        key,
        expected: "a non-negative number of seconds",
    };

    match value {
        Value::Integer(secs) => u64::try_from(*secs).map_err(|_| invalid),
        Value::String(raw) => raw.trim().parse::<u64>().map_err(|_| invalid),
        _ => Err(invalid),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store(section: &str) -> Table {
        format!("[{NAMESPACE}]\n{section}").parse::<Table>().unwrap()
    }

    #[test]
    fn test_defaults_applied() {
        let config = Config::new("key").unwrap();

        assert_eq!(config.base_url().as_str(), "https://sharpapi.com/api/v1");
        assert_eq!(config.polling_interval_secs(), 5);
        assert_eq!(config.polling_wait_secs(), 180);
        assert_eq!(config.polling_wait(), Duration::from_secs(180));
    }

    #[test]
    fn test_empty_and_blank_keys_rejected() {
        assert!(matches!(Config::new(""), Err(ConfigError::MissingApiKey)));
        assert!(matches!(Config::new("  \t"), Err(ConfigError::MissingApiKey)));
    }

    #[test]
    fn test_key_whitespace_trimmed() {
        assert_eq!(Config::new("key\n").unwrap().api_key(), "key");
        assert_eq!(Config::new(" key ").unwrap().api_key(), "key");
        assert_eq!(Config::new("\tkey\r\n").unwrap().api_key(), "key");
    }

    #[test]
    fn test_key_with_control_characters_rejected() {
        for raw in ["secret\nkey", "secret\u{7}key", "secret\u{0}"] {
            let error = Config::new(raw).unwrap_err();
            assert!(
                matches!(
                    error,
                    ConfigError::InvalidValue {
                        key: keys::API_KEY,
                        ..
                    }
                ),
                "{raw:?} gave {error:?}"
            );
            assert_eq!(error.error_code(), "E005");
        }
    }

    #[test]
    fn test_from_store_trims_key() {
        let config = Config::from_store(&store("api_key = \"secret-key\\n\"")).unwrap();
        assert_eq!(config.api_key(), "secret-key");
    }

    #[test]
    fn test_from_store_missing_key() {
        let store = store("base_url = \"https://example.com/api\"");
        assert!(matches!(
            Config::from_store(&store),
            Err(ConfigError::MissingApiKey)
        ));
        assert!(matches!(
            Config::from_store(&Table::new()),
            Err(ConfigError::MissingApiKey)
        ));
    }

    #[test]
    fn test_from_store_overrides() {
        let store = store(
            r#"
api_key = "secret"
base_url = "https://staging.sharpapi.com/api/v1"
api_job_status_polling_interval = 10
api_job_status_polling_wait = "60"
"#,
        );
        let config = Config::from_store(&store).unwrap();

        assert_eq!(config.api_key(), "secret");
        assert_eq!(
            config.base_url().as_str(),
            "https://staging.sharpapi.com/api/v1"
        );
        assert_eq!(config.polling_interval_secs(), 10);
        assert_eq!(config.polling_wait_secs(), 60);
    }

    #[test]
    fn test_from_store_rejects_bad_values() {
        let negative = store("api_key = \"k\"\napi_job_status_polling_wait = -1");
        assert!(matches!(
            Config::from_store(&negative),
            Err(ConfigError::InvalidValue {
                key: keys::POLLING_WAIT,
                ..
            })
        ));

        let not_a_string = store("api_key = 42");
        assert!(matches!(
            Config::from_store(&not_a_string),
            Err(ConfigError::InvalidValue {
                key: keys::API_KEY,
                ..
            })
        ));

        let mut not_a_table = Table::new();
        not_a_table.insert(NAMESPACE.to_owned(), Value::String("oops".to_owned()));
        assert!(matches!(
            Config::from_store(&not_a_table),
            Err(ConfigError::InvalidValue { key: NAMESPACE, .. })
        ));
    }

    #[test]
    fn test_base_url_validation() {
        assert!(matches!(
            parse_base_url("not a url"),
            Err(ConfigError::InvalidBaseUrl { .. })
        ));
        assert!(matches!(
            parse_base_url("mailto:hr@example.com"),
            Err(ConfigError::CannotBeBase(_))
        ));
    }

    #[test]
    fn test_debug_redacts_key() {
        let config = Config::new("super-secret").unwrap();
        let debug = format!("{config:?}");

        assert!(!debug.contains("super-secret"));
        assert!(debug.contains("<redacted>"));
    }
}
