//! HTTP codec module for parsing and serializing request heads
//!
//! # Components
//!
//! - Parsing:
//!   - [`parse`]: one-shot parse of a buffered request head
//!   - [`RequestDecoder`]: the same parser as a streaming [`Decoder`](tokio_util::codec::Decoder)
//!   - request line and header block decoding, scanned in a single forward pass
//!
//! - Serializing:
//!   - [`to_bytes`]: renders a [`Request`](crate::protocol::Request) as wire bytes
//!   - [`RequestEncoder`]: the same as an [`Encoder`](tokio_util::codec::Encoder)
//!
//! - [`uri`]: percent-decoding and percent-encoding of path and query components
//!
//! # Example
//!
//! ```
//! use bytes::BytesMut;
//! use micro_request::codec::{parse, to_bytes};
//! use micro_request::protocol::Endpoints;
//!
//! let mut buffer = BytesMut::from("GET /search?q=rust&q=http HTTP/1.1\r\nHost: localhost\r\n\r\n");
//! let request = parse(&mut buffer, &Endpoints::default()).unwrap();
//!
//! assert_eq!(request.path(), "/search");
//! assert_eq!(request.query_parameters().get_all("q").count(), 2);
//! assert_eq!(&to_bytes(&request)[..], b"GET /search?q=rust&q=http HTTP/1.1\r\nHost: localhost\r\n\r\n");
//! ```

mod cursor;
mod header;
mod request_decoder;
mod request_encoder;
mod request_line;
pub mod uri;

pub use request_decoder::{parse, Limits, RequestDecoder};
pub use request_encoder::{to_bytes, RequestEncoder};
