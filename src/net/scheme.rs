//! Supported URI schemes.
//!
//! Only `http` and `https` are accepted. Each scheme carries its registered
//! default port, which the [`Uri`](crate::net::Uri) uses to decide whether a
//! port is explicit or implied.

/// Supported schemes and their default ports, in lookup order.
const SUPPORTED_SCHEMES: &[(&str, u16)] = &[("http", 80), ("https", 443)];

/// Returns true when `scheme` (already lowercased) is in the allow-list.
pub fn is_supported(scheme: &str) -> bool {
    default_port(scheme).is_some()
}

/// Returns the registered default port for `scheme`, if it is supported.
pub fn default_port(scheme: &str) -> Option<u16> {
    SUPPORTED_SCHEMES
        .iter()
        .find(|(name, _)| *name == scheme)
        .map(|&(_, port)| port)
}

/// Drops `port` when it is the default for `scheme`.
pub(crate) fn effective_port(scheme: &str, port: Option<u16>) -> Option<u16> {
    match (port, default_port(scheme)) {
        (Some(p), Some(d)) if p == d => None,
        (p, _) => p,
    }
}
