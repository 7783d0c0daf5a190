//! Percent-decoding on ingest and percent-encoding on output for the request target.
//!
//! Paths and query strings are decoded differently: a path only reverses `%XX`
//! escapes, while query components follow `application/x-www-form-urlencoded`
//! rules where `+` also stands for a space. Encoding escapes every byte the
//! parser would otherwise treat as a delimiter, so a serialized request parses
//! back to the same decoded values.

use std::borrow::Cow;

use percent_encoding::{percent_decode, utf8_percent_encode, AsciiSet, PercentEncode, CONTROLS};

use crate::protocol::{MultiMap, ParseError};

/// Bytes escaped in a path: delimiters of the request line plus `%` itself.
const PATH: &AsciiSet = &CONTROLS.add(b' ').add(b'"').add(b'#').add(b'%').add(b'<').add(b'>').add(b'?').add(b'`').add(b'{').add(b'}');

/// Bytes escaped in a query name or value, on top of [`PATH`].
const QUERY_COMPONENT: &AsciiSet = &PATH.add(b'&').add(b'+').add(b'=');

/// Reverses `%XX` escapes in a raw path. `+` is kept as is.
///
/// # Errors
///
/// Returns [`ParseError::InvalidEncoding`] when the decoded bytes are not UTF-8.
pub fn decode_path(raw: &[u8]) -> Result<String, ParseError> {
    percent_decode(raw)
        .decode_utf8()
        .map(Cow::into_owned)
        .map_err(|_| ParseError::InvalidEncoding { component: "path" })
}

/// Splits a raw query string into decoded `(name, value)` pairs.
///
/// Segments are separated by `&` and split on their first `=`. A segment
/// without `=` yields the name with an empty value and empty segments are
/// skipped. In both name and value `+` stands for a space.
///
/// # Errors
///
/// Returns [`ParseError::InvalidEncoding`] when a decoded name or value is not UTF-8.
pub fn decode_query(raw: &[u8]) -> Result<MultiMap, ParseError> {
    raw.split(|&b| b == b'&')
        .filter(|segment| !segment.is_empty())
        .map(|segment| {
            let (name, value) = match segment.iter().position(|&b| b == b'=') {
                Some(index) => (&segment[..index], &segment[index + 1..]),
                None => (segment, &b""[..]),
            };
            Ok::<_, ParseError>((decode_query_component(name)?, decode_query_component(value)?))
        })
        .collect()
}

fn decode_query_component(raw: &[u8]) -> Result<String, ParseError> {
    let raw: Cow<'_, [u8]> = if raw.contains(&b'+') {
        Cow::Owned(raw.iter().map(|&b| if b == b'+' { b' ' } else { b }).collect())
    } else {
        Cow::Borrowed(raw)
    };

    percent_decode(&raw)
        .decode_utf8()
        .map(Cow::into_owned)
        .map_err(|_| ParseError::InvalidEncoding { component: "query" })
}

pub fn encode_path(path: &str) -> PercentEncode<'_> {
    utf8_percent_encode(path, PATH)
}

pub fn encode_query_component(component: &str) -> PercentEncode<'_> {
    utf8_percent_encode(component, QUERY_COMPONENT)
}

/// Renders `path[?name=value&...]` with every component escaped.
pub(crate) fn request_target(path: &str, query: &MultiMap) -> String {
    let mut target = String::with_capacity(path.len() + 1);
    target.extend(encode_path(path));

    let mut separator = '?';
    for (name, value) in query {
        target.push(separator);
        target.extend(encode_query_component(name));
        target.push('=');
        target.extend(encode_query_component(value));
        separator = '&';
    }

    target
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_decoding() {
        assert_eq!(decode_path(b"/a%20b").unwrap(), "/a b");
        assert_eq!(decode_path(b"/a+b").unwrap(), "/a+b");
        assert_eq!(decode_path(b"/caf%C3%A9").unwrap(), "/caf\u{e9}");
        assert_eq!(decode_path(b"/100%").unwrap(), "/100%");
        assert!(matches!(decode_path(b"/%FF"), Err(ParseError::InvalidEncoding { component: "path" })));
    }

    #[test]
    fn query_decoding() {
        let query = decode_query(b"q=a+b&q=c&empty=&flag&&x=%3D1").unwrap();

        assert_eq!(
            query.iter().collect::<Vec<_>>(),
            vec![("q", "a b"), ("q", "c"), ("empty", ""), ("flag", ""), ("x", "=1")]
        );
    }

    #[test]
    fn query_value_splits_on_first_equals() {
        let query = decode_query(b"expr=a=b").unwrap();
        assert_eq!(query.get("expr"), Some("a=b"));
    }

    #[test]
    fn query_rejects_invalid_utf8() {
        assert!(matches!(decode_query(b"name=%FF"), Err(ParseError::InvalidEncoding { component: "query" })));
        assert!(matches!(decode_query(b"%C3=1"), Err(ParseError::InvalidEncoding { component: "query" })));
    }

    #[test]
    fn query_keeps_broken_escapes() {
        let query = decode_query(b"%ZZ=100%").unwrap();
        assert_eq!(query.get("%ZZ"), Some("100%"));
    }

    #[test]
    fn empty_query() {
        assert!(decode_query(b"").unwrap().is_empty());
    }

    #[test]
    fn target_encoding() {
        let mut query = MultiMap::new();
        assert_eq!(request_target("/a b?", &query), "/a%20b%3F");

        query.insert("q", "a b");
        query.insert("k&=", "1+1%");
        assert_eq!(request_target("/search", &query), "/search?q=a%20b&k%26%3D=1%2B1%25");
    }

    #[test]
    fn target_never_ends_with_separator() {
        let query: MultiMap = [("a", "1"), ("b", "")].into_iter().collect();
        let target = request_target("/", &query);
        assert_eq!(target, "/?a=1&b=");
        assert!(!target.ends_with('&'));
    }
}
