//! Read-only HTTP message contract.
//!
//! [`Message`] is what requests and responses have in common: a protocol
//! version, a case-insensitive header map and a body. Mutation is not part of
//! the trait; concrete messages expose their own `with_*` methods that return
//! modified copies.

use http::HeaderMap;

pub trait Message {
    /// HTTP protocol version as a string, e.g. `"1.1"`.
    fn protocol_version(&self) -> &str;

    /// All headers. Names are case-insensitive.
    fn headers(&self) -> &HeaderMap;

    /// Raw body bytes.
    fn body(&self) -> &[u8];

    /// Returns true if a header with this name (case-insensitive) is present.
    fn has_header(&self, name: &str) -> bool {
        self.headers().contains_key(name)
    }

    /// Returns all values of the header, in insertion order.
    ///
    /// Values that are not visible ASCII are skipped. An unknown or malformed
    /// name yields an empty vector.
    fn header(&self, name: &str) -> Vec<&str> {
        self.headers()
            .get_all(name)
            .iter()
            .filter_map(|v| v.to_str().ok())
            .collect()
    }

    /// Returns all values of the header joined with `", "`, or an empty string.
    fn header_line(&self, name: &str) -> String {
        self.header(name).join(", ")
    }
}

/// Checks a `major[.minor]` protocol version such as `1.1` or `2`.
pub(crate) fn is_valid_protocol_version(version: &str) -> bool {
    let digits = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());
    match version.split_once('.') {
        Some((major, minor)) => digits(major) && digits(minor),
        None => digits(version),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::header::{HeaderValue, ACCEPT, CONTENT_TYPE};

    struct Fixture {
        headers: HeaderMap,
    }

    impl Message for Fixture {
        fn protocol_version(&self) -> &str {
            "1.1"
        }
        fn headers(&self) -> &HeaderMap {
            &self.headers
        }
        fn body(&self) -> &[u8] {
            b""
        }
    }

    fn fixture() -> Fixture {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("text/plain"));
        headers.append(ACCEPT, HeaderValue::from_static("text/html"));
        headers.append(ACCEPT, HeaderValue::from_static("application/json"));
        Fixture { headers }
    }

    #[test]
    fn header_lookup_is_case_insensitive() {
        let m = fixture();
        assert!(m.has_header("content-type"));
        assert!(m.has_header("Content-Type"));
        assert_eq!(m.header("CONTENT-TYPE"), vec!["text/plain"]);
    }

    #[test]
    fn multi_value_header_line() {
        let m = fixture();
        assert_eq!(m.header("accept"), vec!["text/html", "application/json"]);
        assert_eq!(m.header_line("Accept"), "text/html, application/json");
    }

    #[test]
    fn missing_or_malformed_names() {
        let m = fixture();
        assert!(!m.has_header("x-missing"));
        assert!(m.header("x-missing").is_empty());
        assert_eq!(m.header_line("x-missing"), "");
        assert!(!m.has_header("bad name"));
        assert!(m.header("bad name").is_empty());
    }

    #[test]
    fn protocol_versions() {
        for ok in ["1.0", "1.1", "2", "2.0", "3"] {
            assert!(is_valid_protocol_version(ok), "{ok}");
        }
        for bad in ["", "1.", ".1", "HTTP/1.1", "1.1.1", "one"] {
            assert!(!is_valid_protocol_version(bad), "{bad}");
        }
    }
}
