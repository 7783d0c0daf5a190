//! The structured request produced by the parser and consumed by the serializer.
//!
//! A [`Request`] is built once, either by [`codec::parse`](crate::codec::parse) from
//! inbound bytes or by a caller through [`RequestBuilder`], and is read-only from
//! then on. All structural checks happen while building, which is what lets the
//! serializer be infallible.

use bytes::Bytes;
use http::{Method, Version};

use crate::codec::uri;
use crate::protocol::{BuildError, Endpoints, MultiMap};

/// A parsed (or hand-built) HTTP request head plus its opaque body.
#[derive(Debug, Clone, PartialEq)]
pub struct Request {
    pub(crate) method: Method,
    pub(crate) path: String,
    pub(crate) query_parameters: MultiMap,
    pub(crate) protocol: String,
    pub(crate) version: f64,
    pub(crate) headers: MultiMap,
    pub(crate) endpoints: Endpoints,
    pub(crate) body: Bytes,
}

impl Request {
    /// Starts a builder with `GET / HTTP/1.1` defaults.
    #[inline]
    pub fn builder() -> RequestBuilder {
        RequestBuilder::new()
    }

    /// Turns this request back into a builder, e.g. to forward it with an extra header.
    pub fn into_builder(self) -> RequestBuilder {
        RequestBuilder { inner: self }
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    /// The percent-decoded path, without the query string.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Decoded query parameters, in the order they appeared.
    pub fn query_parameters(&self) -> &MultiMap {
        &self.query_parameters
    }

    /// The protocol name, usually `HTTP`.
    pub fn protocol(&self) -> &str {
        &self.protocol
    }

    pub fn version(&self) -> f64 {
        self.version
    }

    pub fn headers(&self) -> &MultiMap {
        &self.headers
    }

    pub fn origin(&self) -> &str {
        self.endpoints.origin()
    }

    pub fn destination(&self) -> &str {
        self.endpoints.destination()
    }

    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    pub fn body(&self) -> &Bytes {
        &self.body
    }
}

/// Assembles a [`Request`], validating it in [`RequestBuilder::build`].
///
/// Repeated calls to [`header`](Self::header) or
/// [`query_parameter`](Self::query_parameter) append; nothing is ever replaced.
#[derive(Debug, Clone)]
pub struct RequestBuilder {
    inner: Request,
}

impl Default for RequestBuilder {
    fn default() -> Self {
        Self {
            inner: Request {
                method: Method::GET,
                path: String::from("/"),
                query_parameters: MultiMap::new(),
                protocol: String::from("HTTP"),
                version: 1.1,
                headers: MultiMap::new(),
                endpoints: Endpoints::default(),
                body: Bytes::new(),
            },
        }
    }
}

impl RequestBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn method(mut self, method: Method) -> Self {
        self.inner.method = method;
        self
    }

    /// Sets the path in its decoded form; the serializer takes care of escaping.
    pub fn path(mut self, path: impl Into<String>) -> Self {
        self.inner.path = path.into();
        self
    }

    pub fn query_parameter(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.inner.query_parameters.insert(name, value);
        self
    }

    pub fn protocol(mut self, protocol: impl Into<String>) -> Self {
        self.inner.protocol = protocol.into();
        self
    }

    pub fn version(mut self, version: f64) -> Self {
        self.inner.version = version;
        self
    }

    /// Appends a header; surrounding whitespace of name and value is dropped.
    pub fn header(mut self, name: impl AsRef<str>, value: impl AsRef<str>) -> Self {
        self.inner.headers.insert(name.as_ref().trim(), value.as_ref().trim());
        self
    }

    pub fn endpoints(mut self, endpoints: Endpoints) -> Self {
        self.inner.endpoints = endpoints;
        self
    }

    pub fn body(mut self, body: impl Into<Bytes>) -> Self {
        self.inner.body = body.into();
        self
    }

    /// Validates and returns the request.
    ///
    /// # Errors
    ///
    /// - [`BuildError::InvalidProtocol`] if the protocol name is empty or contains `/`,
    ///   whitespace or control characters
    /// - [`BuildError::InvalidPath`] if the path is empty
    /// - [`BuildError::InvalidVersion`] if the version is negative (`-0.0` included), NaN or infinite
    /// - [`BuildError::InvalidHeaderName`] if a header name is empty or contains `:` or
    ///   a control character
    /// - [`BuildError::InvalidHeaderValue`] if a header value contains a control character
    pub fn build(self) -> Result<Request, BuildError> {
        let request = self.inner;

        if !is_valid_protocol(&request.protocol) {
            return Err(BuildError::InvalidProtocol { protocol: request.protocol });
        }

        if request.path.is_empty() {
            return Err(BuildError::InvalidPath);
        }

        if !is_valid_version(request.version) {
            return Err(BuildError::InvalidVersion { version: request.version });
        }

        for (name, value) in &request.headers {
            if !is_valid_header_name(name) {
                return Err(BuildError::InvalidHeaderName { name: name.to_owned() });
            }
            if value.bytes().any(|b| b.is_ascii_control() && b != b'\t') {
                return Err(BuildError::InvalidHeaderValue { name: name.to_owned() });
            }
        }

        Ok(request)
    }
}

pub(crate) fn is_valid_protocol(protocol: &str) -> bool {
    !protocol.is_empty() && protocol.bytes().all(|b| b.is_ascii_graphic() && b != b'/')
}

pub(crate) fn is_valid_version(version: f64) -> bool {
    version.is_finite() && version.is_sign_positive()
}

fn is_valid_header_name(name: &str) -> bool {
    !name.is_empty() && !name.bytes().any(|b| b == b':' || b.is_ascii_control())
}

/// Bridges into the `http` crate types, re-encoding path and query into the uri.
impl TryFrom<&Request> for http::Request<Bytes> {
    type Error = BuildError;

    fn try_from(request: &Request) -> Result<Self, Self::Error> {
        let version = match format!("{:.1}", request.version).as_str() {
            "0.9" => Version::HTTP_09,
            "1.0" => Version::HTTP_10,
            "1.1" => Version::HTTP_11,
            "2.0" => Version::HTTP_2,
            "3.0" => Version::HTTP_3,
            _ => return Err(BuildError::UnsupportedVersion { version: request.version }),
        };

        let mut builder = http::Request::builder()
            .method(request.method.clone())
            .uri(uri::request_target(&request.path, &request.query_parameters))
            .version(version);

        for (name, value) in &request.headers {
            builder = builder.header(name, value);
        }

        Ok(builder.body(request.body.clone())?)
    }
}
