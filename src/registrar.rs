//! Bootstrap helpers that put the package configuration in front of a host
//! application.
//!
//! [`register`] merges the package defaults into the host's configuration
//! store without touching values the host already set. [`boot`] copies the
//! bundled default configuration file into the host's config directory, but
//! only when running from a console.

use std::{
    env::{self, VarError},
    fs, io,
    path::{Path, PathBuf},
};

use log::{debug, info, warn};
use toml::{Table, Value};

use crate::config::{keys, ConfigError, NAMESPACE};

/// Name of the published configuration file.
pub const CONFIG_FILE_NAME: &str = "sharpapi-hr-job-description.toml";

const DEFAULT_CONFIG: &str = include_str!("../config/sharpapi-hr-job-description.toml");

/// Environment variables overlaying the bundled defaults, by config key.
pub const ENV_OVERRIDES: [(&str, &str); 4] = [
    (keys::API_KEY, "SHARP_API_KEY"),
    (keys::BASE_URL, "SHARP_API_BASE_URL"),
    (keys::POLLING_INTERVAL, "SHARP_API_JOB_STATUS_POLLING_INTERVAL"),
    (keys::POLLING_WAIT, "SHARP_API_JOB_STATUS_POLLING_WAIT"),
];

/// Where the host application is running from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunContext {
    /// Interactive or administrative invocation, e.g. a CLI.
    Console,
    /// Normal request serving.
    Serving,
}

#[derive(Debug, PartialEq, Eq)]
pub enum Publication {
    Written(PathBuf),
    /// Destination existed and `force` wasn't set.
    AlreadyPresent(PathBuf),
    /// Not running from a console, nothing was copied.
    Skipped,
}

/// Contents of the bundled default configuration file.
pub const fn default_config_source() -> &'static str {
    DEFAULT_CONFIG
}

/// Package defaults overlaid with the process environment.
///
/// # Errors
///
/// Fails if the bundled file is malformed.
pub fn package_defaults() -> Result<Table, ConfigError> {
    package_defaults_with(env_lookup)
}

/// Reads `name` from the process environment. A variable that is set but
/// isn't valid UTF-8 is logged and treated as unset.
pub fn env_lookup(name: &str) -> Option<String> {
    env_value(name, env::var(name))
}

fn env_value(name: &str, value: Result<String, VarError>) -> Option<String> {
    match value {
        Ok(value) => Some(value),
        Err(VarError::NotPresent) => None,
        Err(VarError::NotUnicode(_)) => {
            warn!("Ignoring {name}: its value is not valid UTF-8");
            None
        }
    }
}

/// Package defaults overlaid with whatever `lookup` returns for the
/// variables in [`ENV_OVERRIDES`].
///
/// # Errors
///
/// Fails if the bundled file is malformed.
pub fn package_defaults_with<F>(lookup: F) -> Result<Table, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut bundled = DEFAULT_CONFIG.parse::<Table>()?;
    let mut defaults = match bundled.remove(NAMESPACE) {
        Some(Value::Table(section)) => section,
        _ => {
            return Err(ConfigError::InvalidValue {
                key: NAMESPACE,
                expected: "a table",
            })
        }
    };

    for (key, var) in ENV_OVERRIDES {
        if let Some(value) = lookup(var) {
            debug!("Using {var} for {NAMESPACE}.{key}");
            defaults.insert(key.to_owned(), Value::String(value));
        }
    }

    Ok(defaults)
}

/// Merges the package defaults into `store` under [`NAMESPACE`].
///
/// # Errors
///
/// Fails if the defaults can't be built or the host already holds a
/// non-table value under [`NAMESPACE`].
pub fn register(store: &mut Table) -> Result<(), ConfigError> {
    merge_defaults(store, package_defaults()?)
}

/// Inserts every key of `defaults` the host hasn't set itself. Merging the
/// same defaults again leaves the store unchanged.
///
/// # Errors
///
/// Fails if `store` holds a non-table value under [`NAMESPACE`].
pub fn merge_defaults(store: &mut Table, defaults: Table) -> Result<(), ConfigError> {
    let section = store
        .entry(NAMESPACE)
        .or_insert(Value::Table(Table::new()))
        .as_table_mut()
        .ok_or(ConfigError::InvalidValue {
            key: NAMESPACE,
            expected: "a table",
        })?;

    for (key, value) in defaults {
        section.entry(key).or_insert(value);
    }

    Ok(())
}

/// Publishes the default configuration file when running from a console.
///
/// # Errors
///
/// Surfaces file-system errors unchanged.
pub fn boot(context: RunContext, config_dir: &Path, force: bool) -> io::Result<Publication> {
    match context {
        RunContext::Console => publish(config_dir, force),
        RunContext::Serving => Ok(Publication::Skipped),
    }
}

/// Copies the bundled default file to `<config_dir>/`[`CONFIG_FILE_NAME`].
/// An existing file is kept unless `force` is set.
///
/// # Errors
///
/// Surfaces file-system errors unchanged.
pub fn publish(config_dir: &Path, force: bool) -> io::Result<Publication> {
    let destination = config_dir.join(CONFIG_FILE_NAME);

    if !force && destination.try_exists()? {
        debug!("{} already exists, leaving it alone", destination.display());
        return Ok(Publication::AlreadyPresent(destination));
    }

    fs::create_dir_all(config_dir)?;
    fs::write(&destination, DEFAULT_CONFIG)?;
    info!("Published {}", destination.display());

    Ok(Publication::Written(destination))
}
