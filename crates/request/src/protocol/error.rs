use std::io;

use http::StatusCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("bad request: invalid protocol version {version:?}")]
    BadRequest { version: String },

    #[error("malformed header line: {line:?}")]
    MalformedHeader { line: String },

    #[error("truncated input: {reason}")]
    TruncatedInput { reason: String },

    #[error("invalid http method: {method:?}")]
    InvalidMethod { method: String },

    #[error("invalid request line: {reason}")]
    InvalidRequestLine { reason: String },

    #[error("invalid encoding in {component}")]
    InvalidEncoding { component: &'static str },

    #[error("header size too large, current: {current_size} exceed the limit {max_size}")]
    TooLargeHeader { current_size: usize, max_size: usize },

    #[error("header number exceed the limit {max_num}")]
    TooManyHeaders { max_num: usize },

    #[error("io error: {source}")]
    Io {
        #[from]
        source: io::Error,
    },
}

impl ParseError {
    pub fn bad_request<S: ToString>(version: S) -> Self {
        Self::BadRequest { version: version.to_string() }
    }

    pub fn malformed_header<S: ToString>(line: S) -> Self {
        Self::MalformedHeader { line: line.to_string() }
    }

    pub fn truncated<S: ToString>(reason: S) -> Self {
        Self::TruncatedInput { reason: reason.to_string() }
    }

    pub fn invalid_method<S: ToString>(method: S) -> Self {
        Self::InvalidMethod { method: method.to_string() }
    }

    pub fn invalid_request_line<S: ToString>(reason: S) -> Self {
        Self::InvalidRequestLine { reason: reason.to_string() }
    }

    pub fn too_large_header(current_size: usize, max_size: usize) -> Self {
        Self::TooLargeHeader { current_size, max_size }
    }

    pub fn too_many_headers(max_num: usize) -> Self {
        Self::TooManyHeaders { max_num }
    }

    pub fn io<E: Into<io::Error>>(e: E) -> Self {
        Self::Io { source: e.into() }
    }

    /// The response status a transport should answer this failure with.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::TooLargeHeader { .. } | Self::TooManyHeaders { .. } => StatusCode::REQUEST_HEADER_FIELDS_TOO_LARGE,
            Self::Io { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            _ => StatusCode::BAD_REQUEST,
        }
    }
}

/// Rejections raised while assembling a [`Request`](crate::protocol::Request) by hand.
#[derive(Error, Debug)]
pub enum BuildError {
    #[error("invalid http method: {method:?}")]
    InvalidMethod { method: String },

    #[error("request path must not be empty")]
    InvalidPath,

    #[error("invalid protocol name: {protocol:?}")]
    InvalidProtocol { protocol: String },

    #[error("invalid protocol version: {version}")]
    InvalidVersion { version: f64 },

    #[error("invalid header name: {name:?}")]
    InvalidHeaderName { name: String },

    #[error("invalid value for header {name:?}")]
    InvalidHeaderValue { name: String },

    #[error("protocol version {version} has no http counterpart")]
    UnsupportedVersion { version: f64 },

    #[error("http error: {source}")]
    Http {
        #[from]
        source: http::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes() {
        assert_eq!(ParseError::bad_request("x.y").status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(ParseError::malformed_header("oops").status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(ParseError::truncated("eof").status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(ParseError::too_large_header(9000, 8192).status_code(), StatusCode::REQUEST_HEADER_FIELDS_TOO_LARGE);
        assert_eq!(ParseError::too_many_headers(64).status_code(), StatusCode::REQUEST_HEADER_FIELDS_TOO_LARGE);
        assert_eq!(
            ParseError::io(io::Error::from(io::ErrorKind::ConnectionReset)).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn display() {
        assert_eq!(ParseError::bad_request("x.y").to_string(), r#"bad request: invalid protocol version "x.y""#);
        assert_eq!(ParseError::malformed_header("Host").to_string(), r#"malformed header line: "Host""#);
    }
}
