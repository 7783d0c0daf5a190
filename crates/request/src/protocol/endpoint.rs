//! Connection endpoint descriptors attached to parsed requests.
//!
//! The parser never derives these from the request bytes; the transport layer
//! knows who is on each side of the socket and hands that over.

use std::net::SocketAddr;

/// Textual `address:port` descriptors of the remote peer and the local socket.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Endpoints {
    origin: String,
    destination: String,
}

impl Endpoints {
    pub fn new(origin: impl Into<String>, destination: impl Into<String>) -> Self {
        Self { origin: origin.into(), destination: destination.into() }
    }

    /// Renders both socket addresses, bracketing IPv6 hosts (`[::1]:8080`).
    pub fn from_socket_addrs(remote: SocketAddr, local: SocketAddr) -> Self {
        Self::new(remote.to_string(), local.to_string())
    }

    /// The remote peer.
    pub fn origin(&self) -> &str {
        &self.origin
    }

    /// The local side of the connection.
    pub fn destination(&self) -> &str {
        &self.destination
    }
}
