use reqwest::Url;
use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 5002;
const DEFAULT_BOOKS_API_URL: &str = "http://localhost:5001";
const DEFAULT_TIMEOUT_SECS: u64 = 5;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid value for {name}: {value:?}")]
    Invalid { name: &'static str, value: String },
    #[error("Invalid BOOKS_API_URL {value:?}: {reason}")]
    InvalidUrl { value: String, reason: String },
}

#[derive(Debug, Clone)]
pub struct Config {
    pub bind_addr: String,
    pub port: u16,
    pub books_api_url: Url,
    pub request_timeout: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let bind_addr = lookup("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let port = parse_var(&lookup, "PORT", DEFAULT_PORT)?;
        let timeout_secs = parse_var(&lookup, "BOOKS_API_TIMEOUT_SECS", DEFAULT_TIMEOUT_SECS)?;
        if timeout_secs == 0 {
            return Err(ConfigError::Invalid {
                name: "BOOKS_API_TIMEOUT_SECS",
                value: "0".to_string(),
            });
        }

        let raw_url =
            lookup("BOOKS_API_URL").unwrap_or_else(|| DEFAULT_BOOKS_API_URL.to_string());
        let books_api_url = parse_base_url(&raw_url)?;

        Ok(Self {
            bind_addr,
            port,
            books_api_url,
            request_timeout: Duration::from_secs(timeout_secs),
        })
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.bind_addr, self.port)
    }
}

fn parse_var<F, T>(lookup: &F, name: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(name) {
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { name, value }),
        None => Ok(default),
    }
}

fn parse_base_url(raw: &str) -> Result<Url, ConfigError> {
    let invalid = |reason: String| ConfigError::InvalidUrl {
        value: raw.to_string(),
        reason,
    };

    let url = Url::parse(raw.trim()).map_err(|e| invalid(e.to_string()))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(invalid(format!("unsupported scheme {}", url.scheme())));
    }
    if url.cannot_be_a_base() {
        return Err(invalid("not a base URL".to_string()));
    }
    Ok(url)
}
