//! Supported HTTP status codes and their reason phrases.
//!
//! The table is the RFC 2616 registry: 40 codes spanning 1xx to 5xx. Codes
//! outside this table are rejected by
//! [`Response::with_status`](crate::net::Response::with_status).

/// Status codes with their default reason phrase, sorted by code.
const STATUS_PHRASES: [(u16, &str); 40] = [
    (100, "Continue"),
    (101, "Switching Protocols"),
    (200, "OK"),
    (201, "Created"),
    (202, "Accepted"),
    (203, "Non-Authoritative Information"),
    (204, "No Content"),
    (205, "Reset Content"),
    (206, "Partial Content"),
    (300, "Multiple Choices"),
    (301, "Moved Permanently"),
    (302, "Found"),
    (303, "See Other"),
    (304, "Not Modified"),
    (305, "Use Proxy"),
    (307, "Temporary Redirect"),
    (400, "Bad Request"),
    (401, "Unauthorized"),
    (402, "Payment Required"),
    (403, "Forbidden"),
    (404, "Not Found"),
    (405, "Method Not Allowed"),
    (406, "Not Acceptable"),
    (407, "Proxy Authentication Required"),
    (408, "Request Time-out"),
    (409, "Conflict"),
    (410, "Gone"),
    (411, "Length Required"),
    (412, "Precondition Failed"),
    (413, "Request Entity Too Large"),
    (414, "Request-URI Too Large"),
    (415, "Unsupported Media Type"),
    (416, "Requested range not satisfiable"),
    (417, "Expectation Failed"),
    (500, "Internal Server Error"),
    (501, "Not Implemented"),
    (502, "Bad Gateway"),
    (503, "Service Unavailable"),
    (504, "Gateway Time-out"),
    (505, "HTTP Version not supported"),
];

/// Returns the default reason phrase for `code`, or `None` when the code is not supported.
pub fn reason_phrase(code: u16) -> Option<&'static str> {
    STATUS_PHRASES
        .binary_search_by_key(&code, |&(c, _)| c)
        .ok()
        .map(|idx| STATUS_PHRASES[idx].1)
}

/// Iterates all supported `(code, phrase)` pairs in ascending order.
pub fn supported() -> impl Iterator<Item = (u16, &'static str)> {
    STATUS_PHRASES.iter().copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_is_sorted_and_unique() {
        // binary search depends on it
        assert!(STATUS_PHRASES.windows(2).all(|w| w[0].0 < w[1].0));
    }

    #[test]
    fn table_spans_all_classes() {
        for class in 1..=5u16 {
            assert!(
                supported().any(|(c, _)| c / 100 == class),
                "no {class}xx code in table"
            );
        }
        assert_eq!(supported().count(), 40);
    }

    #[test]
    fn known_phrases() {
        assert_eq!(reason_phrase(100), Some("Continue"));
        assert_eq!(reason_phrase(200), Some("OK"));
        assert_eq!(reason_phrase(307), Some("Temporary Redirect"));
        assert_eq!(reason_phrase(404), Some("Not Found"));
        assert_eq!(reason_phrase(412), Some("Precondition Failed"));
        assert_eq!(reason_phrase(503), Some("Service Unavailable"));
        assert_eq!(reason_phrase(505), Some("HTTP Version not supported"));
    }

    #[test]
    fn unsupported_codes() {
        for code in [0, 99, 102, 207, 306, 308, 418, 429, 506, 999] {
            assert!(reason_phrase(code).is_none(), "{code} should not be supported");
        }
    }
}
