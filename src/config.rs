//! Message configuration.
//!
//! `MessageConfig` holds the defaults used when responses are created from
//! scratch (see [`Response::from_config`](crate::net::Response::from_config)
//! and [`Response::json`](crate::net::Response::json)).
//!
//! # Examples
//!
//! ## Use defaults
//! ```rust
//! use gosub_http::config::MessageConfig;
//! let cfg = MessageConfig::default();
//! assert_eq!(cfg.protocol_version, "1.1");
//! ```
//!
//! ## Customize with the builder
//! ```rust
//! use gosub_http::config::MessageConfig;
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let cfg = MessageConfig::builder()
//!     .protocol_version("1.0")
//!     .server("Gosub/0.1")
//!     .content_type("application/ld+json")
//!     .build()?; // returns Result<MessageConfig, ConfigError>
//! # Ok(()) }
//! ```
//!
//! # Errors
//!
//! Builder validation returns [`ConfigError`] for a malformed protocol version
//! or for server / content type values that cannot be sent as header values.

use crate::net::message::is_valid_protocol_version;
use http::HeaderValue;
use std::fmt;

const DEFAULT_SERVER: &str = "Gosub/1.0";

#[derive(Debug, Clone)]
pub struct MessageConfig {
    /// Protocol version for new responses (`major[.minor]`)
    pub protocol_version: String,
    /// Value for the `Server` header, not sent when `None`
    pub server: Option<String>,
    /// `Content-Type` used for JSON payloads
    pub content_type: String,
}

impl Default for MessageConfig {
    fn default() -> Self {
        Self {
            protocol_version: "1.1".to_string(),
            server: Some(DEFAULT_SERVER.to_string()),
            content_type: "application/json".to_string(),
        }
    }
}

impl MessageConfig {
    pub fn builder() -> MessageConfigBuilder {
        MessageConfigBuilder::default()
    }
}

#[derive(Debug, Clone, Default)]
pub struct MessageConfigBuilder {
    inner: MessageConfig,
}

impl MessageConfigBuilder {
    #[inline]
    fn map(mut self, f: impl FnOnce(&mut MessageConfig)) -> Self {
        f(&mut self.inner);
        self
    }

    pub fn protocol_version<S: Into<String>>(self, v: S) -> Self {
        self.map(|c| c.protocol_version = v.into())
    }
    pub fn server<S: Into<String>>(self, s: S) -> Self { self.map(|c| c.server = Some(s.into())) }
    pub fn no_server(self) -> Self { self.map(|c| c.server = None) }
    pub fn content_type<S: Into<String>>(self, ct: S) -> Self {
        self.map(|c| c.content_type = ct.into())
    }

    /// Apply multiple changes in one go.
    pub fn with(self, f: impl FnOnce(&mut MessageConfig)) -> Self { self.map(f) }

    /// Validate and build the final config.
    pub fn build(self) -> Result<MessageConfig, ConfigError> {
        validate(&self.inner)?;
        Ok(self.inner)
    }
}

// ---------- Validation ----------

#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    InvalidProtocolVersion(String),
    InvalidHeaderValue { field: &'static str, value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidProtocolVersion(v) =>
                write!(f, "protocol_version '{v}' is invalid (expected major[.minor])"),
            ConfigError::InvalidHeaderValue { field, value } =>
                write!(f, "{field} '{value}' is not a valid header value"),
        }
    }
}
impl std::error::Error for ConfigError {}

fn validate(c: &MessageConfig) -> Result<(), ConfigError> {
    if !is_valid_protocol_version(&c.protocol_version) {
        return Err(ConfigError::InvalidProtocolVersion(c.protocol_version.clone()));
    }
    if let Some(server) = &c.server {
        check_header_value("server", server)?;
    }
    check_header_value("content_type", &c.content_type)
}

fn check_header_value(field: &'static str, value: &str) -> Result<(), ConfigError> {
    if value.trim().is_empty() || HeaderValue::from_str(value).is_err() {
        return Err(ConfigError::InvalidHeaderValue { field, value: value.to_string() });
    }
    Ok(())
}
