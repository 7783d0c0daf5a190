//! HTTP request head decoder
//!
//! [`RequestDecoder`] turns buffered bytes into a [`Request`]. It waits until a
//! complete head (request line plus header block, closed by an empty line) is
//! buffered, splits exactly those bytes off the buffer and parses them. Whatever
//! follows, typically the body, stays in the buffer for the next reader.
//!
//! At end of stream ([`Decoder::decode_eof`]) the remaining bytes are taken as
//! the whole head, so a header block may also be closed by the stream itself.
//!
//! # Example
//!
//! ```
//! use bytes::BytesMut;
//! use micro_request::codec::RequestDecoder;
//! use tokio_util::codec::Decoder;
//!
//! let mut decoder = RequestDecoder::new();
//! let mut buffer = BytesMut::from("GET /index.html HTTP/1.1\r\nHost: localhost\r\n\r\nbody");
//!
//! let request = decoder.decode(&mut buffer).unwrap().unwrap();
//! assert_eq!(request.path(), "/index.html");
//! assert_eq!(&buffer[..], b"body");
//! ```

use bytes::BytesMut;
use tokio_util::codec::Decoder;
use tracing::{debug, trace};

use crate::codec::cursor::Cursor;
use crate::codec::header::HeaderDecoder;
use crate::codec::request_line;
use crate::ensure;
use crate::protocol::{Endpoints, ParseError, Request};

/// Maximum number of headers allowed in a request by default
const MAX_HEADER_NUM: usize = 64;

/// Maximum size in bytes allowed for the entire head by default
const MAX_HEADER_BYTES: usize = 8 * 1024;

/// Size limits applied while decoding a request head.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    /// Upper bound for request line plus header block, terminator included.
    pub max_header_bytes: usize,
    /// Upper bound for the number of header lines.
    pub max_headers: usize,
}

impl Limits {
    /// No bound on head size or header count.
    pub const UNBOUNDED: Self = Self { max_header_bytes: usize::MAX, max_headers: usize::MAX };
}

impl Default for Limits {
    fn default() -> Self {
        Self { max_header_bytes: MAX_HEADER_BYTES, max_headers: MAX_HEADER_NUM }
    }
}

/// Decoder for HTTP request heads implementing the [`Decoder`] trait.
///
/// Every decoded [`Request`] carries the [`Endpoints`] the decoder was created
/// with; the bytes themselves never say who is on either side of the connection.
#[derive(Debug, Default, Clone)]
pub struct RequestDecoder {
    endpoints: Endpoints,
    limits: Limits,
}

impl RequestDecoder {
    /// Creates a decoder with empty endpoints and default limits.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_endpoints(endpoints: Endpoints) -> Self {
        Self { endpoints, limits: Limits::default() }
    }

    #[must_use]
    pub fn limits(mut self, limits: Limits) -> Self {
        self.limits = limits;
        self
    }

    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    fn decode_head(&self, head: &[u8]) -> Result<Request, ParseError> {
        let mut cursor = Cursor::new(head);

        let line = request_line::decode(&mut cursor)?;
        debug!(method = %line.method, path = %line.path, version = line.version, "decoded request line");

        let headers = HeaderDecoder::new(self.limits.max_headers).decode(&mut cursor)?;
        trace!(head_size = cursor.position(), header_count = headers.len(), "decoded request head");

        Ok(Request {
            method: line.method,
            path: line.path,
            query_parameters: line.query_parameters,
            protocol: line.protocol,
            version: line.version,
            headers,
            endpoints: self.endpoints.clone(),
            body: bytes::Bytes::new(),
        })
    }
}

impl Decoder for RequestDecoder {
    type Item = Request;
    type Error = ParseError;

    /// Attempts to decode a request head from the provided buffer.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(request))` if a complete head was parsed; the head bytes are removed from `src`
    /// - `Ok(None)` if more data is needed
    /// - `Err(ParseError)` if parsing failed
    ///
    /// # Errors
    ///
    /// Returns `ParseError` if:
    /// - The buffered head exceeds `max_header_bytes`
    /// - The request line or a header line is malformed
    fn decode(&mut self, src: &mut BytesMut) -> Result<Option<Self::Item>, Self::Error> {
        let max_size = self.limits.max_header_bytes;

        match find_head_end(src) {
            Some(head_end) => {
                ensure!(head_end <= max_size, ParseError::too_large_header(head_end, max_size));
                let head = src.split_to(head_end);
                self.decode_head(&head).map(Some)
            }
            None => {
                ensure!(src.len() <= max_size, ParseError::too_large_header(src.len(), max_size));
                Ok(None)
            }
        }
    }

    /// Like [`decode`](Self::decode), but treats the end of the stream as the end of the head.
    ///
    /// Leftover whitespace only is treated as a clean end of stream.
    fn decode_eof(&mut self, src: &mut BytesMut) -> Result<Option<Self::Item>, Self::Error> {
        if let Some(request) = self.decode(src)? {
            return Ok(Some(request));
        }

        if src.iter().all(u8::is_ascii_whitespace) {
            src.clear();
            return Ok(None);
        }

        let head = src.split();
        self.decode_head(&head).map(Some)
    }
}

/// Finds the end of the head: the index just past the first empty line.
///
/// Leading blank lines are skipped so they are not mistaken for the end of an
/// empty head. Both `\r\n` and bare `\n` terminators are recognized.
fn find_head_end(src: &[u8]) -> Option<usize> {
    let mut from = src.iter().position(|b| !b.is_ascii_whitespace())?;

    while let Some(offset) = src[from..].iter().position(|&b| b == b'\n') {
        let line_end = from + offset;
        match &src[line_end + 1..] {
            [b'\n', ..] => return Some(line_end + 2),
            [b'\r', b'\n', ..] => return Some(line_end + 3),
            _ => from = line_end + 1,
        }
    }

    None
}

/// Parses one request head from `src`.
///
/// The head ends at the first empty line or, failing that, at the end of `src`.
/// The head bytes are removed from `src`; anything after them (the body) is left
/// in place. The returned request carries `endpoints` and an empty body.
///
/// `src` is expected to hold the complete head already, so no [`Limits`] apply:
/// any request [`to_bytes`](crate::codec::to_bytes) produces parses back. Use
/// [`RequestDecoder`] to bound what is buffered from a connection.
///
/// # Errors
///
/// - [`ParseError::BadRequest`] if the protocol version is not a valid number
/// - [`ParseError::MalformedHeader`] if a header line has no `:`
/// - [`ParseError::TruncatedInput`] if `src` ends before the request line is complete
/// - any other [`ParseError`] for a structurally broken head
pub fn parse(src: &mut BytesMut, endpoints: &Endpoints) -> Result<Request, ParseError> {
    RequestDecoder::with_endpoints(endpoints.clone())
        .limits(Limits::UNBOUNDED)
        .decode_eof(src)?
        .ok_or_else(|| ParseError::truncated("no request in input"))
}
