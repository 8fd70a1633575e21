//! Process configuration.
//!
//! Only the database connection string comes from the environment; the bind
//! address and the allowed CORS origin are fixed.

use thiserror::Error;

pub const CONNECTION_STRING_VAR: &str = "MONGODB_CONNECTION_STRING";
pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8000;
pub const ALLOWED_ORIGIN: &str = "http://localhost";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("required environment variable {0} is not set")]
    MissingVar(&'static str),
}

#[derive(Debug, Clone)]
pub struct ServiceConfig {
    pub connection_string: String,
    pub host: String,
    pub port: u16,
    pub allowed_origin: String,
}

impl ServiceConfig {
    pub fn new(connection_string: impl Into<String>) -> Self {
        Self {
            connection_string: connection_string.into(),
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            allowed_origin: ALLOWED_ORIGIN.to_string(),
        }
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let connection_string = lookup(CONNECTION_STRING_VAR)
            .filter(|s| !s.is_empty())
            .ok_or(ConfigError::MissingVar(CONNECTION_STRING_VAR))?;
        Ok(Self::new(connection_string))
    }

    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = ServiceConfig::new("mongodb://localhost:27017");
        assert_eq!(config.socket_addr(), "0.0.0.0:8000");
        assert_eq!(config.allowed_origin, "http://localhost");
    }

    #[test]
    fn reads_connection_string() {
        let config = ServiceConfig::from_lookup(|key| {
            (key == CONNECTION_STRING_VAR).then(|| "mongodb://db:27017".to_string())
        })
        .unwrap();
        assert_eq!(config.connection_string, "mongodb://db:27017");
    }

    #[test]
    fn missing_connection_string_is_an_error() {
        let err = ServiceConfig::from_lookup(|_| None).unwrap_err();
        assert!(matches!(err, ConfigError::MissingVar(CONNECTION_STRING_VAR)));
    }

    #[test]
    fn empty_connection_string_is_an_error() {
        let err = ServiceConfig::from_lookup(|_| Some(String::new())).unwrap_err();
        assert!(matches!(err, ConfigError::MissingVar(_)));
    }
}
