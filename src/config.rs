// Settings read from the environment.
//
// Variables
// - EVENTS_HOST: interface to bind, defaults to 0.0.0.0.
// - EVENTS_PORT: port to bind, defaults to 8080.
// - EVENTS_SEED_FILE: optional JSON array of events loaded into the store at startup.

use std::collections::HashMap;
use std::env;
use std::path::PathBuf;
use thiserror::Error;

pub const HOST_VAR: &str = "EVENTS_HOST";
pub const PORT_VAR: &str = "EVENTS_PORT";
pub const SEED_FILE_VAR: &str = "EVENTS_SEED_FILE";

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("EVENTS_PORT must be a port number, got {0:?}")]
    InvalidPort(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub host: String,
    pub port: u16,
    pub seed_file: Option<PathBuf>,
}

impl Settings {
    /// Loads `.env` when present, then reads the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        if let Err(error) = dotenvy::dotenv() {
            if !error.not_found() {
                tracing::warn!(%error, "ignoring unreadable .env file");
            }
        }
        Self::from_vars(env::vars().collect())
    }

    pub fn from_vars(vars: HashMap<String, String>) -> Result<Self, ConfigError> {
        let host = vars
            .get(HOST_VAR)
            .cloned()
            .unwrap_or_else(|| DEFAULT_HOST.to_string());
        let port = match vars.get(PORT_VAR) {
            Some(raw) => raw
                .parse()
                .map_err(|_| ConfigError::InvalidPort(raw.clone()))?,
            None => DEFAULT_PORT,
        };
        let seed_file = vars
            .get(SEED_FILE_VAR)
            .filter(|path| !path.is_empty())
            .map(PathBuf::from);
        Ok(Self {
            host,
            port,
            seed_file,
        })
    }

    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
