//! Request data model shared by the parser and the serializer.
//!
//! - [`Request`]: the immutable request representation
//! - [`RequestBuilder`]: validated construction of outbound requests
//! - [`MultiMap`]: ordered name/value pairs keeping duplicates, used for both
//!   headers and query parameters
//! - [`Endpoints`]: origin/destination descriptors supplied by the transport
//!
//! # Error Handling
//!
//! - [`ParseError`]: everything that can go wrong turning bytes into a [`Request`]
//! - [`BuildError`]: invariant violations caught by [`RequestBuilder::build`]

mod endpoint;
pub use endpoint::Endpoints;

mod multimap;
pub use multimap::Iter;
pub use multimap::MultiMap;

mod request;
pub use request::Request;
pub use request::RequestBuilder;
pub(crate) use request::{is_valid_protocol, is_valid_version};

mod error;
pub use error::BuildError;
pub use error::ParseError;
