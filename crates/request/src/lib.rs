//! HTTP/1.1 request head parsing and serialization
//!
//! This crate is the boundary between untrusted bytes arriving on a connection
//! and the structured [`protocol::Request`] that routing and handler code works
//! with. It parses a request line and header block into a `Request` and writes
//! a `Request` back out as wire bytes, for forwarding or replaying.
//!
//! # Example
//!
//! ```
//! use bytes::BytesMut;
//! use micro_request::codec::{parse, to_bytes};
//! use micro_request::protocol::{Endpoints, Request};
//!
//! let raw = "GET /a%20b?tag=x&tag=y HTTP/1.1\r\nHost: localhost\r\nSet-Cookie: a=1\r\nSet-Cookie: b=2\r\n\r\n";
//! let mut buffer = BytesMut::from(raw);
//!
//! let request = parse(&mut buffer, &Endpoints::new("127.0.0.1:50000", "127.0.0.1:8080")).unwrap();
//! assert_eq!(request.path(), "/a b");
//! assert_eq!(request.query_parameters().get_all("tag").collect::<Vec<_>>(), ["x", "y"]);
//! assert_eq!(request.headers().get_all("Set-Cookie").count(), 2);
//! assert_eq!(request.origin(), "127.0.0.1:50000");
//!
//! let outbound = Request::builder()
//!     .path("/upstream")
//!     .header("Host", "backend")
//!     .version(1.0)
//!     .build()
//!     .unwrap();
//! assert_eq!(&to_bytes(&outbound)[..], b"GET /upstream HTTP/1.0\r\nHost: backend\r\n\r\n");
//! ```
//!
//! # Architecture
//!
//! - [`protocol`]: the [`Request`](protocol::Request) data model, its builder, the
//!   ordered [`MultiMap`](protocol::MultiMap) and the error types
//! - [`codec`]: the parser ([`codec::parse`], [`codec::RequestDecoder`]) and the
//!   serializer ([`codec::to_bytes`], [`codec::RequestEncoder`])
//! - [`connection`]: [`connection::RequestReader`], reading request heads off an
//!   async stream
//!
//! # Error Handling
//!
//! - [`protocol::ParseError`]: parse failures; `BadRequest` for an unparsable
//!   protocol version, `MalformedHeader` for a header line without a colon,
//!   `TruncatedInput` when the input stops mid request line
//! - [`protocol::BuildError`]: invariants rejected by the request builder
//!
//! Serialization cannot fail. A failed parse never yields a partially filled request.
//!
//! # Limitations
//!
//! - No body handling: body bytes stay in the buffer for a separate reader
//! - No header folding or other obsolete HTTP/1.x syntax
//! - HTTP/2 and later are not supported
//! - Maximum head size: 8KB, maximum number of headers: 64 (both configurable)

pub mod codec;
pub mod connection;
pub mod protocol;

mod utils;
pub(crate) use utils::ensure;
