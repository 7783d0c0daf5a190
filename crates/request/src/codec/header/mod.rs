//! Header block processing for request heads
//!
//! - [`HeaderDecoder`]: parses `Name: Value` lines into a [`MultiMap`](crate::protocol::MultiMap),
//!   enforcing the header count limit
//! - [`HeaderEncoder`]: writes a [`MultiMap`](crate::protocol::MultiMap) back as a header block

mod header_decoder;
mod header_encoder;

pub(crate) use header_decoder::HeaderDecoder;
pub(crate) use header_encoder::HeaderEncoder;
