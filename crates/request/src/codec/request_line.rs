//! Request line decoding: `METHOD PATH[?QUERY] PROTOCOL/VERSION`.
//!
//! The line is scanned in one forward pass, in a fixed order:
//!
//! 1. method, the first whitespace-delimited token
//! 2. path, up to a space or `?`, percent-decoded
//! 3. query string, only when the path scan stopped at `?`
//! 4. protocol name, up to `/`, trimmed
//! 5. version, the rest of the line, parsed as a floating-point number
//!
//! Only a bad version is a [`ParseError::BadRequest`]; other structural damage is
//! reported as [`ParseError::InvalidRequestLine`], [`ParseError::InvalidMethod`] or,
//! when the input simply stops, [`ParseError::TruncatedInput`].

use std::str;

use http::Method;

use crate::codec::cursor::Cursor;
use crate::codec::uri;
use crate::ensure;
use crate::protocol::{is_valid_protocol, is_valid_version, MultiMap, ParseError};

#[derive(Debug)]
pub(crate) struct RequestLine {
    pub(crate) method: Method,
    pub(crate) path: String,
    pub(crate) query_parameters: MultiMap,
    pub(crate) protocol: String,
    pub(crate) version: f64,
}

#[inline]
fn is_line_end(b: u8) -> bool {
    b == b'\r' || b == b'\n'
}

pub(crate) fn decode(cursor: &mut Cursor<'_>) -> Result<RequestLine, ParseError> {
    let method = parse_method(cursor)?;
    let path = parse_path(cursor)?;
    let query_parameters = parse_query_parameters(cursor)?;
    let protocol = parse_protocol(cursor)?;
    let version = parse_version(cursor)?;

    Ok(RequestLine { method, path, query_parameters, protocol, version })
}

fn parse_method(cursor: &mut Cursor<'_>) -> Result<Method, ParseError> {
    // stray empty lines before a request are ignored
    cursor.skip_while(|b| b.is_ascii_whitespace());
    ensure!(!cursor.is_empty(), ParseError::truncated("missing request line"));

    let token = cursor.read_token(|b| b.is_ascii_whitespace());
    match cursor.bump() {
        None => return Err(ParseError::truncated("request line ends after the method")),
        Some(b) if is_line_end(b) => return Err(ParseError::invalid_request_line("missing request target")),
        Some(_) => {}
    }

    Method::from_bytes(token).map_err(|_| ParseError::invalid_method(String::from_utf8_lossy(token)))
}

fn parse_path(cursor: &mut Cursor<'_>) -> Result<String, ParseError> {
    let (raw, delimiter) = cursor.read_until(|b| b == b' ' || b == b'?' || is_line_end(b));
    match delimiter {
        None => Err(ParseError::truncated("request line ends inside the path")),
        Some(b) if is_line_end(b) => Err(ParseError::invalid_request_line("missing protocol")),
        Some(_) if raw.is_empty() => Err(ParseError::invalid_request_line("empty request target")),
        Some(_) => uri::decode_path(raw),
    }
}

fn parse_query_parameters(cursor: &mut Cursor<'_>) -> Result<MultiMap, ParseError> {
    if cursor.previous() != Some(b'?') {
        return Ok(MultiMap::new());
    }

    let (raw, delimiter) = cursor.read_until(|b| b.is_ascii_whitespace());
    match delimiter {
        None => Err(ParseError::truncated("request line ends inside the query string")),
        Some(b) if is_line_end(b) => Err(ParseError::invalid_request_line("missing protocol")),
        Some(_) => uri::decode_query(raw),
    }
}

fn parse_protocol(cursor: &mut Cursor<'_>) -> Result<String, ParseError> {
    let (raw, delimiter) = cursor.read_until(|b| b == b'/' || is_line_end(b));
    match delimiter {
        None => return Err(ParseError::truncated("request line ends inside the protocol")),
        Some(b) if is_line_end(b) => return Err(ParseError::invalid_request_line("missing protocol version")),
        Some(_) => {}
    }

    let protocol = str::from_utf8(raw.trim_ascii()).map_err(|_| ParseError::InvalidEncoding { component: "protocol" })?;
    ensure!(is_valid_protocol(protocol), ParseError::invalid_request_line(format!("invalid protocol {protocol:?}")));

    Ok(protocol.to_owned())
}

fn parse_version(cursor: &mut Cursor<'_>) -> Result<f64, ParseError> {
    let (raw, delimiter) = cursor.read_until(|b| b == b'\n');
    ensure!(delimiter.is_some(), ParseError::truncated("request line is not terminated"));

    let token = raw.trim_ascii();
    let text = str::from_utf8(token).map_err(|_| ParseError::bad_request(String::from_utf8_lossy(token)))?;
    let version = text.parse::<f64>().map_err(|_| ParseError::bad_request(text))?;
    ensure!(is_valid_version(version), ParseError::bad_request(text));

    Ok(version)
}
