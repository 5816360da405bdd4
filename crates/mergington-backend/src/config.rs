use std::{fmt::Display, net::IpAddr, path::PathBuf, str::FromStr};

use mergington::errors::ConfigError;
use mergington::log;

const HOST_VAR: &str = "MERGINGTON_HOST";
const PORT_VAR: &str = "MERGINGTON_PORT";
const STATIC_DIR_VAR: &str = "MERGINGTON_STATIC_DIR";

/// Server settings, read once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub host: IpAddr,
    pub port: u16,
    pub static_dir: PathBuf,
}

impl Config {
    /// Loads the configuration from the process environment.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Loads the configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            host: try_load(&lookup, HOST_VAR, "127.0.0.1")?,
            port: try_load(&lookup, PORT_VAR, "8000")?,
            static_dir: try_load(&lookup, STATIC_DIR_VAR, "static")?,
        })
    }
}

fn try_load<T, F>(lookup: &F, key: &str, default: &str) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: Display,
    F: Fn(&str) -> Option<String>,
{
    let value = lookup(key).unwrap_or_else(|| {
        log::debug!("{key} not set, using default: {default}");
        default.to_string()
    });

    value.parse().map_err(|e: T::Err| ConfigError::Invalid {
        key: key.to_string(),
        reason: e.to_string(),
        value,
    })
}
