//! HTTP request serializer
//!
//! Writes a [`Request`] in wire order:
//!
//! 1. `METHOD PATH[?QUERY] PROTOCOL/VERSION\r\n`, the version with exactly one
//!    fractional digit (`1.1`, `2.0`)
//! 2. one `name: value\r\n` line per header, then an empty line
//! 3. the body bytes, untouched
//!
//! Path and query components are percent-encoded on the way out, so parsing the
//! output yields the same decoded values again.

use std::io;

use bytes::{BufMut, Bytes, BytesMut};
use tokio_util::codec::Encoder;

use crate::codec::header::HeaderEncoder;
use crate::codec::uri;
use crate::protocol::Request;

/// Initial buffer size reserved for the request head
const INIT_HEAD_SIZE: usize = 1024;

/// Encoder for requests implementing the [`Encoder`] trait.
///
/// Encoding never fails: every structural check already happened when the
/// [`Request`] was built. The `io::Error` type only satisfies the trait.
#[derive(Debug, Default)]
pub struct RequestEncoder {
    header_encoder: HeaderEncoder,
}

impl RequestEncoder {
    pub fn new() -> Self {
        Self::default()
    }

    fn write(&self, request: &Request, dst: &mut BytesMut) {
        let target = uri::request_target(request.path(), request.query_parameters());
        let version = format!("{:.1}", request.version());

        dst.reserve(INIT_HEAD_SIZE + request.body().len());

        dst.put_slice(request.method().as_str().as_bytes());
        dst.put_u8(b' ');
        dst.put_slice(target.as_bytes());
        dst.put_u8(b' ');
        dst.put_slice(request.protocol().as_bytes());
        dst.put_u8(b'/');
        dst.put_slice(version.as_bytes());
        dst.put_slice(b"\r\n");

        self.header_encoder.encode(request.headers(), dst);

        dst.put_slice(request.body());
    }
}

impl Encoder<&Request> for RequestEncoder {
    type Error = io::Error;

    fn encode(&mut self, item: &Request, dst: &mut BytesMut) -> Result<(), Self::Error> {
        self.write(item, dst);
        Ok(())
    }
}

/// Serializes `request` into its wire form: request line, header block and body.
pub fn to_bytes(request: &Request) -> Bytes {
    let mut dst = BytesMut::new();
    RequestEncoder::new().write(request, &mut dst);
    dst.freeze()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::parse;
    use crate::protocol::Endpoints;
    use http::Method;

    fn request_line(request: &Request) -> String {
        let bytes = to_bytes(request);
        let text = std::str::from_utf8(&bytes).unwrap();
        text.split_inclusive("\r\n").next().unwrap().to_owned()
    }

    #[test]
    fn full_request() {
        let request = Request::builder()
            .method(Method::POST)
            .path("/submit")
            .query_parameter("a", "1")
            .query_parameter("b", "2")
            .header("Host", "example.com")
            .header("Content-Length", "5")
            .body("hello")
            .build()
            .unwrap();

        assert_eq!(
            &to_bytes(&request)[..],
            b"POST /submit?a=1&b=2 HTTP/1.1\r\nHost: example.com\r\nContent-Length: 5\r\n\r\nhello"
        );
    }

    #[test]
    fn version_has_one_fractional_digit() {
        let request = Request::builder().version(1.5).build().unwrap();
        assert!(request_line(&request).ends_with("HTTP/1.5\r\n"));

        let request = Request::builder().version(2.0).build().unwrap();
        assert!(request_line(&request).ends_with("HTTP/2.0\r\n"));

        let request = Request::builder().version(1.10).build().unwrap();
        assert!(request_line(&request).ends_with("HTTP/1.1\r\n"));
    }

    #[test]
    fn no_trailing_separator() {
        let request = Request::builder().path("/p").query_parameter("only", "one").build().unwrap();
        assert_eq!(request_line(&request), "GET /p?only=one HTTP/1.1\r\n");

        let request = Request::builder().path("/p").build().unwrap();
        assert_eq!(request_line(&request), "GET /p HTTP/1.1\r\n");
    }

    #[test]
    fn escapes_delimiters() {
        let request = Request::builder().path("/a b?c").query_parameter("q", "x y&z=1").build().unwrap();
        assert_eq!(request_line(&request), "GET /a%20b%3Fc?q=x%20y%26z%3D1 HTTP/1.1\r\n");
    }

    #[test]
    fn encoder_appends_to_buffer() {
        let request = Request::builder().header("Host", "h").build().unwrap();
        let mut dst = BytesMut::from("prefix|");

        RequestEncoder::new().encode(&request, &mut dst).unwrap();

        assert_eq!(&dst[..], b"prefix|GET / HTTP/1.1\r\nHost: h\r\n\r\n");
    }

    #[test]
    fn round_trip() {
        let request = Request::builder()
            .method(Method::PUT)
            .path("/files/r\u{e9}sum\u{e9} 2024.pdf")
            .query_parameter("tag", "a+b")
            .query_parameter("tag", "c d")
            .query_parameter("empty", "")
            .protocol("HTTP")
            .version(1.0)
            .header("Host", "example.com")
            .header("Set-Cookie", "a=1")
            .header("Set-Cookie", "b=2")
            .build()
            .unwrap();

        let mut bytes = BytesMut::from(&to_bytes(&request)[..]);
        let parsed = parse(&mut bytes, &Endpoints::default()).unwrap();

        assert_eq!(parsed, request);
        assert!(bytes.is_empty());
    }

    #[test]
    fn round_trip_many_and_large_headers() {
        let request = (0..65)
            .fold(Request::builder(), |builder, i| builder.header(format!("X-H{i}"), i.to_string()))
            .header("Cookie", "a".repeat(9000))
            .build()
            .unwrap();

        let mut bytes = BytesMut::from(&to_bytes(&request)[..]);
        let parsed = parse(&mut bytes, &Endpoints::default()).unwrap();

        assert_eq!(parsed.headers().len(), 66);
        assert_eq!(parsed, request);
    }

    #[test]
    fn body_is_left_for_the_next_reader() {
        let request = Request::builder().method(Method::POST).body(&b"\x00\x01binary"[..]).build().unwrap();

        let mut bytes = BytesMut::from(&to_bytes(&request)[..]);
        let parsed = parse(&mut bytes, &Endpoints::default()).unwrap();

        assert!(parsed.body().is_empty());
        assert_eq!(&bytes[..], b"\x00\x01binary");
    }
}
