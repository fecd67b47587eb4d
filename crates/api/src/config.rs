//! API configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All optional:
//! - `HOST` - Bind address (default: 0.0.0.0)
//! - `PORT` - Listen port (default: 3001)
//! - `ALLOWED_ORIGINS` - Comma-separated CORS allow-list
//!   (default: the production front end and `http://localhost:4200`)
//! - `STATIC_DIR` - Directory served for unmatched paths (default: public)
//! - `SENTRY_DSN` - Sentry error tracking DSN
//! - `SENTRY_ENVIRONMENT` - Sentry environment name
//! - `SENTRY_TRACES_SAMPLE_RATE` - Fraction of requests traced (default: 0.0)

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

use axum::http::HeaderValue;
use thiserror::Error;

/// Origins allowed to call the API when `ALLOWED_ORIGINS` is not set.
pub const DEFAULT_ALLOWED_ORIGINS: [&str; 2] = [
    "https://projeto-final-lemm.vercel.app",
    "http://localhost:4200",
];

const DEFAULT_PORT: u16 = 3001;
const DEFAULT_STATIC_DIR: &str = "public";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// API server configuration.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Origins permitted to make cross-origin requests
    pub allowed_origins: Vec<String>,
    /// Directory of static files
    pub static_dir: PathBuf,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
    /// Sentry environment (e.g. "production")
    pub sentry_environment: Option<String>,
    /// Sentry performance sampling rate
    pub sentry_traces_sample_rate: f32,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
            allowed_origins: DEFAULT_ALLOWED_ORIGINS.map(String::from).to_vec(),
            static_dir: PathBuf::from(DEFAULT_STATIC_DIR),
            sentry_dsn: None,
            sentry_environment: None,
            sentry_traces_sample_rate: 0.0,
        }
    }
}

impl ApiConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an unusable value.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an unusable value.
    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let host = match var("HOST") {
            Some(value) => value
                .parse::<IpAddr>()
                .map_err(|e| ConfigError::InvalidEnvVar("HOST".to_string(), e.to_string()))?,
            None => defaults.host,
        };
        let port = match var("PORT") {
            Some(value) => value
                .parse::<u16>()
                .map_err(|e| ConfigError::InvalidEnvVar("PORT".to_string(), e.to_string()))?,
            None => defaults.port,
        };
        let allowed_origins = match var("ALLOWED_ORIGINS") {
            Some(value) => parse_origins(&value)?,
            None => defaults.allowed_origins,
        };
        let static_dir = var("STATIC_DIR").map_or(defaults.static_dir, PathBuf::from);
        let sentry_traces_sample_rate = match var("SENTRY_TRACES_SAMPLE_RATE") {
            Some(value) => parse_sample_rate(&value)?,
            None => defaults.sentry_traces_sample_rate,
        };

        Ok(Self {
            host,
            port,
            allowed_origins,
            static_dir,
            sentry_dsn: var("SENTRY_DSN").filter(|v| !v.is_empty()),
            sentry_environment: var("SENTRY_ENVIRONMENT"),
            sentry_traces_sample_rate,
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// Whether an `Origin` header value is in the allow-list.
    #[must_use]
    pub fn is_origin_allowed(&self, origin: &str) -> bool {
        self.allowed_origins.iter().any(|o| o == origin)
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Parse a comma-separated origin list. Every entry must be a valid header value.
fn parse_origins(value: &str) -> Result<Vec<String>, ConfigError> {
    let origins: Vec<String> = value
        .split(',')
        .map(str::trim)
        .filter(|o| !o.is_empty())
        .map(String::from)
        .collect();

    if origins.is_empty() {
        return Err(ConfigError::InvalidEnvVar(
            "ALLOWED_ORIGINS".to_string(),
            "must list at least one origin".to_string(),
        ));
    }

    for origin in &origins {
        HeaderValue::from_str(origin).map_err(|e| {
            ConfigError::InvalidEnvVar("ALLOWED_ORIGINS".to_string(), format!("{origin}: {e}"))
        })?;
    }

    Ok(origins)
}

fn parse_sample_rate(value: &str) -> Result<f32, ConfigError> {
    let rate = value.parse::<f32>().map_err(|e| {
        ConfigError::InvalidEnvVar("SENTRY_TRACES_SAMPLE_RATE".to_string(), e.to_string())
    })?;

    if !(0.0..=1.0).contains(&rate) {
        return Err(ConfigError::InvalidEnvVar(
            "SENTRY_TRACES_SAMPLE_RATE".to_string(),
            format!("must be between 0.0 and 1.0 (got {rate})"),
        ));
    }

    Ok(rate)
}
