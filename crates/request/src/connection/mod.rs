//! Transport adapter for reading requests off a connection
//!
//! The parser itself never touches the network. [`RequestReader`] is the thin
//! glue between an async byte stream and [`RequestDecoder`](crate::codec::RequestDecoder):
//!
//! - buffers reads until a complete request head is available
//! - attaches the connection's [`Endpoints`](crate::protocol::Endpoints) to each request
//! - leaves body bytes buffered for whoever reads the body next
//!
//! It performs no retries and defines no timeouts; both belong to the server
//! driving the connection.

mod request_reader;

pub use request_reader::RequestReader;
