// Runtime settings read from the environment.
//
// Variables
// - MATCHES_HOST (default 0.0.0.0), MATCHES_PORT (default 8080)
// - MATCHES_STORAGE_PATH (default matches.json)
// - MATCHES_PERSISTENCE: true/false, default true. false keeps everything in memory.

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;
use thiserror::Error;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_STORAGE_PATH: &str = "matches.json";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{key} has an invalid value {value:?}: {reason}")]
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub host: IpAddr,
    pub port: u16,
    /// `None` runs the pure in-memory variant.
    pub storage_path: Option<PathBuf>,
}

impl Settings {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_source(|key| std::env::var(key).ok())
    }

    pub fn from_source(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let host = parse(&lookup, "MATCHES_HOST", DEFAULT_HOST)?;
        let port = parse(&lookup, "MATCHES_PORT", &DEFAULT_PORT.to_string())?;
        let persistence: bool = parse(&lookup, "MATCHES_PERSISTENCE", "true")?;
        let storage_path = persistence.then(|| {
            lookup("MATCHES_STORAGE_PATH")
                .filter(|path| !path.trim().is_empty())
                .map_or_else(|| PathBuf::from(DEFAULT_STORAGE_PATH), PathBuf::from)
        });
        Ok(Self {
            host,
            port,
            storage_path,
        })
    }

    pub fn address(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

fn parse<T>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
    default: &str,
) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    let value = lookup(key).unwrap_or_else(|| default.to_string());
    value.trim().parse().map_err(|err: T::Err| ConfigError::Invalid {
        key,
        reason: err.to_string(),
        value,
    })
}
