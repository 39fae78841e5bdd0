// src/config.rs
use std::{fmt, net::SocketAddr, time::Duration};

use thiserror::Error;

/// Live slot data served by the parking system's realtime database.
pub const SLOTS_URL: &str = "https://smart-parking-1289-default-rtdb.firebaseio.com/slots.json";

/// Hosted model used for every completion.
pub const MODEL: &str = "gemini-2.0-flash";

pub const GENERATION_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

pub const DEFAULT_PORT: u16 = 8000;
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 30;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing required environment variable {0}")]
    MissingVar(&'static str),

    #[error("invalid value for {var}: {reason}")]
    InvalidVar { var: &'static str, reason: String },
}

#[derive(Clone)]
pub struct Config {
    pub api_key: String,
    pub port: u16,
    pub http_timeout: Duration,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("api_key", &"<redacted>")
            .field("port", &self.port)
            .field("http_timeout", &self.http_timeout)
            .finish()
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the config from any variable source. `from_env` is this over the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup("API_KEY")
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .ok_or(ConfigError::MissingVar("API_KEY"))?;

        let port = match lookup("PORT") {
            Some(raw) => raw.trim().parse::<u16>().map_err(|e| ConfigError::InvalidVar {
                var: "PORT",
                reason: e.to_string(),
            })?,
            None => DEFAULT_PORT,
        };

        let timeout_secs = match lookup("RELAY_HTTP_TIMEOUT_SECS") {
            Some(raw) => {
                let secs = raw.trim().parse::<u64>().map_err(|e| ConfigError::InvalidVar {
                    var: "RELAY_HTTP_TIMEOUT_SECS",
                    reason: e.to_string(),
                })?;
                if secs == 0 {
                    return Err(ConfigError::InvalidVar {
                        var: "RELAY_HTTP_TIMEOUT_SECS",
                        reason: "must be greater than zero".to_string(),
                    });
                }
                secs
            }
            None => DEFAULT_HTTP_TIMEOUT_SECS,
        };

        Ok(Self {
            api_key,
            port,
            http_timeout: Duration::from_secs(timeout_secs),
        })
    }

    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::from(([0, 0, 0, 0], self.port))
    }
}
