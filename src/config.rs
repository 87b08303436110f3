// src/config.rs
use std::net::SocketAddr;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {key}: {value:?}")]
    Invalid { key: &'static str, value: String },
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub addr: SocketAddr,
    /// Base URL of the platform REST API, always ending in `/`.
    pub api_base_url: String,
    pub max_workers: usize,
    pub api_timeout: Duration,
    /// Adds `Secure` to the session cookie.
    pub secure_cookies: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            api_base_url: "http://localhost:5000/api/".to_string(),
            max_workers: 8,
            api_timeout: Duration::from_secs(10),
            secure_cookies: false,
        }
    }
}

impl AppConfig {
    /// Load from the process environment, reading `.env` first if present.
    pub fn from_env() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut cfg = Self::default();

        if let Some(v) = lookup("DASHBOARD_ADDR") {
            cfg.addr = parse("DASHBOARD_ADDR", &v)?;
        }
        if let Some(v) = lookup("DASHBOARD_API_URL") {
            let v = v.trim();
            if v.is_empty() {
                return Err(ConfigError::Invalid {
                    key: "DASHBOARD_API_URL",
                    value: v.to_string(),
                });
            }
            cfg.api_base_url = with_trailing_slash(v);
        }
        if let Some(v) = lookup("DASHBOARD_WORKERS") {
            let n: usize = parse("DASHBOARD_WORKERS", &v)?;
            if n == 0 {
                return Err(ConfigError::Invalid {
                    key: "DASHBOARD_WORKERS",
                    value: v,
                });
            }
            cfg.max_workers = n;
        }
        if let Some(v) = lookup("DASHBOARD_API_TIMEOUT_SECS") {
            cfg.api_timeout = Duration::from_secs(parse("DASHBOARD_API_TIMEOUT_SECS", &v)?);
        }
        if let Some(v) = lookup("DASHBOARD_SECURE_COOKIES") {
            cfg.secure_cookies = match v.trim().to_lowercase().as_str() {
                "1" | "true" | "yes" => true,
                "0" | "false" | "no" => false,
                _ => {
                    return Err(ConfigError::Invalid {
                        key: "DASHBOARD_SECURE_COOKIES",
                        value: v,
                    })
                }
            };
        }

        Ok(cfg)
    }
}

fn parse<T: std::str::FromStr>(key: &'static str, value: &str) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::Invalid {
        key,
        value: value.to_string(),
    })
}

fn with_trailing_slash(url: &str) -> String {
    if url.ends_with('/') {
        url.to_string()
    } else {
        format!("{url}/")
    }
}
