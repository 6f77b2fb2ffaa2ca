use crate::error::ConfigError;
use std::time::Duration;

pub const DEFAULT_BOOKS_API_URL: &str = "https://6781684b85151f714b0aa5db.mockapi.io/api/v1/books";
pub const DEFAULT_PORT: u16 = 3000;
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub books_api_url: String,
    pub port: u16,
    pub request_timeout: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup. Unset and empty values
    /// both fall back to the defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|value| !value.is_empty());

        let books_api_url =
            non_empty("BOOKS_API_URL").unwrap_or_else(|| DEFAULT_BOOKS_API_URL.to_string());

        let port = match non_empty("PORT") {
            Some(raw) => raw.parse::<u16>().map_err(|_| ConfigError::InvalidPort(raw))?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            books_api_url,
            port,
            request_timeout: REQUEST_TIMEOUT,
        })
    }

    pub fn bind_address(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }
}
