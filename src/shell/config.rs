// Service configuration read from environment variables (a `.env` file is
// loaded first by the binary).
//
// STUDENTS_HOST  bind address           (default 0.0.0.0)
// STUDENTS_PORT  bind port              (default 4000)
// STUDENTS_LOG   log filter fallback    (default info, RUST_LOG wins)
// STUDENTS_SEED  start with seed data   (default true)

use thiserror::Error;

pub const HOST_VAR: &str = "STUDENTS_HOST";
pub const PORT_VAR: &str = "STUDENTS_PORT";
pub const LOG_VAR: &str = "STUDENTS_LOG";
pub const SEED_VAR: &str = "STUDENTS_SEED";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value for {key}: {value:?}")]
    Invalid { key: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub log_level: String,
    pub seed: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 4000,
            log_level: "info".to_string(),
            seed: true,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let port = match lookup(PORT_VAR) {
            Some(raw) => raw.trim().parse().map_err(|_| ConfigError::Invalid {
                key: PORT_VAR,
                value: raw,
            })?,
            None => defaults.port,
        };
        let seed = match lookup(SEED_VAR) {
            Some(raw) => parse_flag(&raw).ok_or(ConfigError::Invalid {
                key: SEED_VAR,
                value: raw,
            })?,
            None => defaults.seed,
        };

        Ok(Self {
            host: lookup(HOST_VAR).unwrap_or(defaults.host),
            port,
            log_level: lookup(LOG_VAR).unwrap_or(defaults.log_level),
            seed,
        })
    }

    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
