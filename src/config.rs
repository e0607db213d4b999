use std::net::SocketAddr;
use thiserror::Error;

use crate::h2h::DEFAULT_BATCH_CAP;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {value:?} ({reason})")]
    InvalidValue {
        key: &'static str,
        value: String,
        reason: String,
    },
}

/// Runtime settings, read from the environment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    /// Postgres connection string; in-memory stores are used when absent
    pub database_url: Option<String>,
    /// Pair documents per atomic H2H commit
    pub h2h_batch_cap: usize,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let value = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let bind_addr: SocketAddr = match value("BIND_ADDR") {
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|e: std::net::AddrParseError| ConfigError::InvalidValue {
                    key: "BIND_ADDR",
                    value: raw.clone(),
                    reason: e.to_string(),
                })?,
            None => DEFAULT_BIND_ADDR
                .parse()
                .map_err(|e: std::net::AddrParseError| ConfigError::InvalidValue {
                    key: "BIND_ADDR",
                    value: DEFAULT_BIND_ADDR.to_string(),
                    reason: e.to_string(),
                })?,
        };

        let h2h_batch_cap = match value("H2H_BATCH_CAP") {
            Some(raw) => match raw.trim().parse::<usize>() {
                Ok(cap) if cap > 0 => cap,
                Ok(_) => {
                    return Err(ConfigError::InvalidValue {
                        key: "H2H_BATCH_CAP",
                        value: raw,
                        reason: "must be greater than zero".to_string(),
                    })
                }
                Err(e) => {
                    return Err(ConfigError::InvalidValue {
                        key: "H2H_BATCH_CAP",
                        value: raw,
                        reason: e.to_string(),
                    })
                }
            },
            None => DEFAULT_BATCH_CAP,
        };

        Ok(Self {
            bind_addr,
            database_url: value("DATABASE_URL"),
            h2h_batch_cap,
        })
    }
}
