//! HTTP response value object.
//!
//! A [`Response`] holds the parts of an outgoing server response: protocol
//! version, status code + reason phrase, headers and the raw body. It does not
//! touch the network; a transport layer consumes the fields (or the
//! [`http::Response`] conversion) to put the message on the wire.
//!
//! ## Notes
//! - Responses are **immutable**. `with_*` methods return a modified copy and
//!   never change the receiver.
//! - [`Response::new`] stores its arguments verbatim. Only
//!   [`Response::with_status`] checks the code against the supported table.
//! - `headers` is an `http::HeaderMap`, which is **case-insensitive** for
//!   header names.
//!
//! ```rust
//! use gosub_http::net::{Message, Response};
//! # fn main() -> Result<(), gosub_http::errors::HttpError> {
//! let resp = Response::new("1.1", 200, "OK", http::HeaderMap::new(), "hello");
//! let missing = resp.with_status(404, "")?;
//!
//! assert_eq!(missing.reason_phrase(), "Not Found");
//! assert_eq!(missing.status_line(), "HTTP/1.1 404 Not Found");
//! assert_eq!(resp.status_code(), 200);
//! assert_eq!(missing.body(), b"hello");
//! # Ok(()) }
//! ```

use crate::config::MessageConfig;
use crate::errors::HttpError;
use crate::net::message::{is_valid_protocol_version, Message};
use crate::net::status;
use http::header::{HeaderName, HeaderValue, CONTENT_LENGTH, CONTENT_TYPE, SERVER};
use http::{HeaderMap, Version};
use serde::Serialize;

/// Protocol version strings and their `http` crate counterparts. The first
/// entry for a version is the one used when converting back to a string.
const VERSIONS: &[(&str, Version)] = &[
    ("0.9", Version::HTTP_09),
    ("1.0", Version::HTTP_10),
    ("1.1", Version::HTTP_11),
    ("2", Version::HTTP_2),
    ("2.0", Version::HTTP_2),
    ("3", Version::HTTP_3),
    ("3.0", Version::HTTP_3),
];

#[derive(Debug, Clone, PartialEq)]
pub struct Response {
    /// Protocol version, e.g. `"1.1"`
    protocol_version: String,
    status_code: u16,
    /// May be empty
    reason_phrase: String,
    headers: HeaderMap,
    body: Vec<u8>,
}

impl Response {
    /// Creates a response from its parts without any validation.
    pub fn new(
        protocol_version: impl Into<String>,
        status_code: u16,
        reason_phrase: impl Into<String>,
        headers: HeaderMap,
        body: impl Into<Vec<u8>>,
    ) -> Self {
        Self {
            protocol_version: protocol_version.into(),
            status_code,
            reason_phrase: reason_phrase.into(),
            headers,
            body: body.into(),
        }
    }

    /// Creates an empty `200 OK` response with the configured protocol
    /// version and `Server` header.
    pub fn from_config(config: &MessageConfig) -> Result<Self, HttpError> {
        let resp = Self::new(
            config.protocol_version.clone(),
            200,
            status::reason_phrase(200).unwrap_or_default(),
            HeaderMap::new(),
            Vec::new(),
        );

        match &config.server {
            Some(server) => resp.with_header(SERVER.as_str(), server),
            None => Ok(resp),
        }
    }

    /// Creates a `200 OK` response carrying `value` serialized as JSON, with
    /// `Content-Type` and `Content-Length` set.
    pub fn json<T>(config: &MessageConfig, value: &T) -> Result<Self, HttpError>
    where
        T: Serialize + ?Sized,
    {
        let body = serde_json::to_vec(value)?;

        Ok(Self::from_config(config)?
            .with_header(CONTENT_TYPE.as_str(), &config.content_type)?
            .with_header(CONTENT_LENGTH.as_str(), &body.len().to_string())?
            .with_body(body))
    }

    pub fn status_code(&self) -> u16 {
        self.status_code
    }

    /// Returns the reason phrase. May be empty.
    pub fn reason_phrase(&self) -> &str {
        &self.reason_phrase
    }

    /// Returns a copy with the given status code and reason phrase.
    ///
    /// The code must be one of the supported status codes, otherwise
    /// [`HttpError::InvalidStatusCode`] is returned. An empty `reason_phrase`
    /// selects the default phrase for the code.
    pub fn with_status(&self, code: u16, reason_phrase: &str) -> Result<Self, HttpError> {
        let Some(default_phrase) = status::reason_phrase(code) else {
            log::debug!("Response: rejected status code {}", code);
            return Err(HttpError::InvalidStatusCode(code));
        };

        let mut resp = self.clone();
        resp.status_code = code;
        resp.reason_phrase = if reason_phrase.is_empty() {
            default_phrase.to_string()
        } else {
            reason_phrase.to_string()
        };
        Ok(resp)
    }

    /// Returns a copy with the given protocol version (`major[.minor]`).
    pub fn with_protocol_version(&self, version: &str) -> Result<Self, HttpError> {
        if !is_valid_protocol_version(version) {
            return Err(HttpError::InvalidArgument(format!("invalid protocol version '{version}'")));
        }

        let mut resp = self.clone();
        resp.protocol_version = version.to_string();
        Ok(resp)
    }

    /// Returns a copy where `name` holds only `value`, replacing earlier values.
    pub fn with_header(&self, name: &str, value: &str) -> Result<Self, HttpError> {
        let (name, value) = header_pair(name, value)?;

        let mut resp = self.clone();
        resp.headers.insert(name, value);
        Ok(resp)
    }

    /// Returns a copy with `value` appended to the values of `name`.
    pub fn with_added_header(&self, name: &str, value: &str) -> Result<Self, HttpError> {
        let (name, value) = header_pair(name, value)?;

        let mut resp = self.clone();
        resp.headers.append(name, value);
        Ok(resp)
    }

    /// Returns a copy without the header `name` (case-insensitive).
    pub fn without_header(&self, name: &str) -> Self {
        let mut resp = self.clone();
        resp.headers.remove(name);
        resp
    }

    /// Returns a copy with the given body.
    ///
    /// A `Content-Length` header that is already present is updated to the
    /// new body length; one that is absent is not added.
    pub fn with_body(&self, body: impl Into<Vec<u8>>) -> Self {
        let mut resp = self.clone();
        resp.body = body.into();
        if resp.headers.contains_key(CONTENT_LENGTH) {
            resp.headers.insert(CONTENT_LENGTH, HeaderValue::from(resp.body.len()));
        }
        resp
    }

    /// Renders the status line, e.g. `HTTP/1.1 404 Not Found`.
    pub fn status_line(&self) -> String {
        format!("HTTP/{} {} {}", self.protocol_version, self.status_code, self.reason_phrase)
    }
}

impl Message for Response {
    fn protocol_version(&self) -> &str {
        &self.protocol_version
    }

    fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    fn body(&self) -> &[u8] {
        &self.body
    }
}

fn header_pair(name: &str, value: &str) -> Result<(HeaderName, HeaderValue), HttpError> {
    let name = HeaderName::from_bytes(name.as_bytes())
        .map_err(|_| HttpError::InvalidArgument(format!("invalid header name '{name}'")))?;
    let value = HeaderValue::from_str(value)
        .map_err(|_| HttpError::InvalidArgument(format!("invalid value for header '{name}'")))?;
    Ok((name, value))
}

/// Converts into an [`http::Response`]. A custom reason phrase cannot be
/// represented there and is dropped.
impl TryFrom<Response> for http::Response<Vec<u8>> {
    type Error = HttpError;

    fn try_from(resp: Response) -> Result<Self, Self::Error> {
        let status = http::StatusCode::from_u16(resp.status_code)
            .map_err(|_| HttpError::InvalidStatusCode(resp.status_code))?;
        let version = VERSIONS
            .iter()
            .find(|(s, _)| *s == resp.protocol_version)
            .map(|&(_, v)| v)
            .ok_or_else(|| {
                let msg = format!("unsupported protocol version '{}'", resp.protocol_version);
                HttpError::InvalidArgument(msg)
            })?;

        let known = [status.canonical_reason(), status::reason_phrase(resp.status_code)];
        let is_known = known.iter().flatten().any(|p| *p == resp.reason_phrase);
        if !resp.reason_phrase.is_empty() && !is_known {
            log::warn!(
                "Response: reason phrase '{}' for {} is lost in conversion",
                resp.reason_phrase,
                resp.status_code
            );
        }

        let mut out = http::Response::new(resp.body);
        *out.status_mut() = status;
        *out.version_mut() = version;
        *out.headers_mut() = resp.headers;
        Ok(out)
    }
}

/// Builds a response from an [`http::Response`], picking the default reason
/// phrase for the status code.
impl<B: Into<Vec<u8>>> From<http::Response<B>> for Response {
    fn from(resp: http::Response<B>) -> Self {
        let (parts, body) = resp.into_parts();
        let code = parts.status.as_u16();
        let version = VERSIONS
            .iter()
            .find(|&&(_, v)| v == parts.version)
            .map(|&(s, _)| s)
            .unwrap_or("1.1");
        let phrase = status::reason_phrase(code)
            .or(parts.status.canonical_reason())
            .unwrap_or_default();

        Response::new(version, code, phrase, parts.headers, body)
    }
}
