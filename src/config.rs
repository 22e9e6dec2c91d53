use crate::constants::*;
use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: String,
    pub data_path: String,
    pub database_name: String,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidPort(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::InvalidPort(port) => {
                write!(f, "Invalid port number: {}", port)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let host = env::var("SERVER_HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string());
        let port = env::var("SERVER_PORT").unwrap_or_else(|_| DEFAULT_PORT.to_string());
        let data_path = env::var("DATABASE_PATH").unwrap_or_else(|_| DEFAULT_DATA_PATH.to_string());
        let database_name =
            env::var("DATABASE_NAME").unwrap_or_else(|_| DEFAULT_DATABASE_NAME.to_string());

        // Validate port is a valid number
        if port.parse::<u16>().is_err() {
            return Err(ConfigError::InvalidPort(port));
        }

        Ok(Config {
            host,
            port,
            data_path,
            database_name,
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
