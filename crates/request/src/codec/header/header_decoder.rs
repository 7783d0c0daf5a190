//! Header block decoding
//!
//! Reads `Name: Value` lines until an empty line or the end of the buffered head.
//! Each line is split on its first colon and both sides are trimmed. Repeated
//! names are all kept, in order.
//!
//! A line without a colon is a [`ParseError::MalformedHeader`]; it is never
//! skipped. Control characters other than horizontal tab are rejected the same
//! way, since they would corrupt the block when serialized again.

use std::str;

use tracing::warn;

use crate::codec::cursor::Cursor;
use crate::ensure;
use crate::protocol::{MultiMap, ParseError};

/// Decoder for the header block following the request line.
#[derive(Debug, Clone, Copy)]
pub(crate) struct HeaderDecoder {
    max_headers: usize,
}

impl HeaderDecoder {
    pub(crate) fn new(max_headers: usize) -> Self {
        Self { max_headers }
    }

    /// Consumes header lines from `cursor`, leaving it just past the terminating empty line.
    ///
    /// # Errors
    ///
    /// - [`ParseError::MalformedHeader`] for a line without `:`, with an empty name, or
    ///   with control characters
    /// - [`ParseError::TooManyHeaders`] once more than `max_headers` lines are seen
    /// - [`ParseError::InvalidEncoding`] for a line that is not UTF-8
    pub(crate) fn decode(&self, cursor: &mut Cursor<'_>) -> Result<MultiMap, ParseError> {
        let mut headers = MultiMap::new();

        while let Some(line) = cursor.read_line() {
            if line.is_empty() {
                break;
            }

            ensure!(headers.len() < self.max_headers, ParseError::too_many_headers(self.max_headers));

            let line = str::from_utf8(line).map_err(|_| ParseError::InvalidEncoding { component: "header" })?;
            let (name, value) = split_header(line).ok_or_else(|| {
                warn!(line, "rejecting malformed header line");
                ParseError::malformed_header(line)
            })?;

            headers.insert(name, value);
        }

        Ok(headers)
    }
}

fn split_header(line: &str) -> Option<(&str, &str)> {
    if line.bytes().any(|b| b.is_ascii_control() && b != b'\t') {
        return None;
    }

    let (name, value) = line.split_once(':')?;
    let name = name.trim();
    if name.is_empty() {
        return None;
    }

    Some((name, value.trim()))
}
