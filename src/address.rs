//! Contact-address normalization for library item source links.
//!
//! Records carry a free-text contact string that may be a bare host, a full
//! URL, or junk. Normalization forces a fixed scheme and default-port
//! semantics so every consumer sees one canonical shape; malformed input
//! yields absence, never an error.

use std::fmt;

/// Structured form of a normalized contact address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedAddress {
    /// Scheme forced by the caller.
    pub scheme: String,
    /// Lowercased host with any explicit port removed.
    pub host: String,
    /// Path, query, and fragment verbatim from the input.
    pub rest: String,
}

impl fmt::Display for NormalizedAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}://{}{}", self.scheme, self.host, self.rest)
    }
}

/// Builds a normalized address from free contact text.
///
/// Any scheme already present in the input is discarded in favor of the
/// given one, and an explicit port on the authority is dropped.
pub fn normalize_address(contact: &str, scheme: &str) -> Option<NormalizedAddress> {
    let trimmed = contact.trim();
    let scheme = scheme.trim();
    if trimmed.is_empty() || scheme.is_empty() {
        return None;
    }

    let without_scheme = match trimmed.split_once("://") {
        Some((prefix, rest)) if is_scheme_like(prefix) => rest,
        Some(_) => return None,
        None => trimmed,
    };

    let (authority, rest) = match without_scheme.find(['/', '?', '#']) {
        Some(index) => without_scheme.split_at(index),
        None => (without_scheme, ""),
    };

    let host = strip_port(authority);
    if host.is_empty() || host.contains(char::is_whitespace) || host.contains("://") {
        return None;
    }

    Some(NormalizedAddress {
        scheme: scheme.to_string(),
        host: host.to_ascii_lowercase(),
        rest: rest.to_string(),
    })
}

fn is_scheme_like(prefix: &str) -> bool {
    !prefix.is_empty()
        && prefix
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}

/// Drops a trailing `:port` so the address reads with default-port
/// semantics. Bracketed IPv6 literals keep their brackets.
fn strip_port(authority: &str) -> String {
    if let Some((host, port)) = authority.rsplit_once(':') {
        let bracket_safe = !authority.starts_with('[') || host.ends_with(']');
        if bracket_safe && !host.is_empty() && !port.is_empty() && port.bytes().all(|b| b.is_ascii_digit())
        {
            return host.to_string();
        }
    }
    authority.to_string()
}
