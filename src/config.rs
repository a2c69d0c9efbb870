//! Runtime configuration read from the environment.

use std::env;
use thiserror::Error;

pub const ACTOR_BUFFER_VAR: &str = "FLOTA_ACTOR_BUFFER";
pub const LOG_FILTER_VAR: &str = "FLOTA_LOG";

const DEFAULT_ACTOR_BUFFER: usize = 32;
const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("invalid value for {key}: {value:?}")]
    Invalid { key: &'static str, value: String },
}

/// Settings for a [`FleetSystem`](crate::lifecycle::FleetSystem).
#[derive(Debug, Clone, PartialEq)]
pub struct SystemConfig {
    /// Capacity of every actor's request channel.
    pub actor_buffer: usize,
    /// Filter used when `RUST_LOG` is not set.
    pub log_filter: String,
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            actor_buffer: DEFAULT_ACTOR_BUFFER,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl SystemConfig {
    /// Reads `FLOTA_ACTOR_BUFFER` and `FLOTA_LOG`, falling back to defaults when unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(raw) = lookup(ACTOR_BUFFER_VAR) {
            config.actor_buffer = match raw.trim().parse::<usize>() {
                Ok(n) if n > 0 => n,
                _ => {
                    return Err(ConfigError::Invalid {
                        key: ACTOR_BUFFER_VAR,
                        value: raw,
                    })
                }
            };
        }
        if let Some(filter) = lookup(LOG_FILTER_VAR) {
            if !filter.trim().is_empty() {
                config.log_filter = filter;
            }
        }

        Ok(config)
    }
}
