use std::env;
use std::time::Duration;

use thiserror::Error;

use crate::constants::{defaults, envvars};

#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),
    #[error("invalid value for {var}: '{value}'")]
    Invalid { var: &'static str, value: String },
}

#[derive(Clone, Debug, PartialEq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ClientConfig {
    /// Base URL of the service, e.g. `https://10.0.0.12`
    pub endpoint: String,
    pub credentials: Option<Credentials>,
    /// Skip TLS certificate verification (self-signed BMC certificates)
    pub insecure: bool,
    pub timeout: Duration,
    /// Upper bound on concurrent member fetches when listing collections
    pub fetch_workers: usize,
}

impl ClientConfig {
    pub fn new(endpoint: impl Into<String>) -> Self {
        ClientConfig {
            endpoint: endpoint.into(),
            credentials: None,
            insecure: false,
            timeout: defaults::API_REQUEST_TIMEOUT,
            fetch_workers: defaults::FETCH_WORKERS,
        }
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        let endpoint = env::var(envvars::ENDPOINT)
            .ok()
            .filter(|e| !e.is_empty())
            .ok_or(ConfigError::Missing(envvars::ENDPOINT))?;

        let credentials = match env::var(envvars::USERNAME) {
            Ok(username) if !username.is_empty() => Some(Credentials {
                username,
                password: env::var(envvars::PASSWORD).unwrap_or_default(),
            }),
            _ => None,
        };

        let insecure = match env::var(envvars::INSECURE) {
            Ok(v) => parse_bool(envvars::INSECURE, &v)?,
            Err(_) => false,
        };

        let timeout = match env::var(envvars::TIMEOUT_SECS) {
            Ok(v) => Duration::from_secs(parse_number(envvars::TIMEOUT_SECS, &v)?),
            Err(_) => defaults::API_REQUEST_TIMEOUT,
        };

        let fetch_workers = match env::var(envvars::FETCH_WORKERS) {
            Ok(v) => parse_number::<usize>(envvars::FETCH_WORKERS, &v)?.max(1),
            Err(_) => defaults::FETCH_WORKERS,
        };

        Ok(ClientConfig {
            endpoint,
            credentials,
            insecure,
            timeout,
            fetch_workers,
        })
    }
}

fn parse_bool(var: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" => Ok(true),
        "0" | "false" | "no" | "" => Ok(false),
        _ => Err(ConfigError::Invalid {
            var,
            value: value.to_string(),
        }),
    }
}

fn parse_number<T: std::str::FromStr>(var: &'static str, value: &str) -> Result<T, ConfigError> {
    value.trim().parse::<T>().map_err(|_| ConfigError::Invalid {
        var,
        value: value.to_string(),
    })
}
