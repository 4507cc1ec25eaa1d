// SPDX-License-Identifier: GPL-3.0-only

//! Barcode payload to URL resolution
//!
//! A scanned payload that already is an http(s) URL is opened as-is.
//! Anything else (product codes, free text, empty payloads) becomes a
//! lookup against the configured search URL, with the payload embedded
//! percent-encoded as the `q` query parameter.

/// Resolve a barcode payload to the URL the session should open
pub fn resolve(payload: &str, search_url: &str) -> String {
    if payload.starts_with("http://") || payload.starts_with("https://") {
        return payload.to_string();
    }

    // Not a URL. Whitespace-only payloads land here too; the payload is
    // never interpolated unescaped.
    format!("{}?q={}", search_url, percent_encode(payload))
}

/// Percent-encode a string for use as a query parameter value
///
/// Everything outside the RFC 3986 unreserved set is escaped.
fn percent_encode(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for byte in input.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(byte as char);
            }
            _ => {
                out.push('%');
                out.push_str(&format!("{:02X}", byte));
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::DEFAULT_SEARCH_URL;

    #[test]
    fn test_https_payload_passes_through_unchanged() {
        let url = resolve("https://example.com/x", DEFAULT_SEARCH_URL);
        assert_eq!(url, "https://example.com/x");
    }

    #[test]
    fn test_http_payload_passes_through_unchanged() {
        let url = resolve("http://example.com/a?b=c", DEFAULT_SEARCH_URL);
        assert_eq!(url, "http://example.com/a?b=c");
    }

    #[test]
    fn test_raw_digit_payload_becomes_search_url() {
        let url = resolve("8901030865278", DEFAULT_SEARCH_URL);
        assert_eq!(url, "https://www.example.com/search?q=8901030865278");
    }

    #[test]
    fn test_other_schemes_are_not_passed_through() {
        let url = resolve("ftp://example.com/x", DEFAULT_SEARCH_URL);
        assert!(url.starts_with("https://www.example.com/search?q="));
    }

    #[test]
    fn test_payload_is_escaped() {
        let url = resolve("a b&c=d", DEFAULT_SEARCH_URL);
        assert_eq!(url, "https://www.example.com/search?q=a%20b%26c%3Dd");
    }

    #[test]
    fn test_empty_and_whitespace_payloads_use_search_branch() {
        assert_eq!(
            resolve("", DEFAULT_SEARCH_URL),
            "https://www.example.com/search?q="
        );
        assert_eq!(
            resolve("  ", DEFAULT_SEARCH_URL),
            "https://www.example.com/search?q=%20%20"
        );
    }

    #[test]
    fn test_non_ascii_payload_is_escaped_bytewise() {
        let url = resolve("café", DEFAULT_SEARCH_URL);
        assert_eq!(url, "https://www.example.com/search?q=caf%C3%A9");
    }
}
