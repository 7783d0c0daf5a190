use bytes::BytesMut;
use futures::StreamExt;
use std::io;
use tokio::io::AsyncRead;
use tokio::net::TcpStream;
use tokio_util::codec::FramedRead;
use tracing::{error, info, trace};

use crate::codec::{Limits, RequestDecoder};
use crate::protocol::{Endpoints, ParseError, Request};

/// Initial capacity of the read buffer
const READ_BUFFER_SIZE: usize = 8 * 1024;

/// Reads request heads from an async byte stream.
///
/// `RequestReader` buffers bytes from the transport until a full head is
/// available, then hands back a [`Request`] carrying the connection's
/// [`Endpoints`]. Bytes read past the head (the start of a body, or a pipelined
/// request) stay buffered; [`read_buffer`](Self::read_buffer) and
/// [`into_parts`](Self::into_parts) give a body reader access to them.
///
/// # Type Parameters
///
/// * `R`: The async readable stream type
#[derive(Debug)]
pub struct RequestReader<R> {
    framed_read: FramedRead<R, RequestDecoder>,
}

impl<R> RequestReader<R>
where
    R: AsyncRead + Unpin,
{
    pub fn new(reader: R, endpoints: Endpoints) -> Self {
        Self::with_limits(reader, endpoints, Limits::default())
    }

    pub fn with_limits(reader: R, endpoints: Endpoints, limits: Limits) -> Self {
        let decoder = RequestDecoder::with_endpoints(endpoints).limits(limits);
        Self { framed_read: FramedRead::with_capacity(reader, decoder, READ_BUFFER_SIZE) }
    }

    /// Reads the next request head.
    ///
    /// Returns `Ok(None)` when the stream ends cleanly between requests. A parse
    /// failure is returned as is; the caller decides how to answer it, e.g. with
    /// [`ParseError::status_code`].
    ///
    /// # Errors
    ///
    /// Any [`ParseError`] raised by the decoder, or [`ParseError::Io`] if reading fails.
    pub async fn read_request(&mut self) -> Result<Option<Request>, ParseError> {
        match self.framed_read.next().await {
            Some(Ok(request)) => {
                trace!(buffered = self.framed_read.read_buffer().len(), "bytes buffered past request head");
                Ok(Some(request))
            }

            Some(Err(e)) => {
                error!(cause = %e, status = %e.status_code(), "can't parse request");
                Err(e)
            }

            None => {
                info!("cant read more request, stream ended");
                Ok(None)
            }
        }
    }

    /// Bytes already read from the stream but not part of any returned head.
    pub fn read_buffer(&self) -> &BytesMut {
        self.framed_read.read_buffer()
    }

    pub fn endpoints(&self) -> &Endpoints {
        self.framed_read.decoder().endpoints()
    }

    /// Releases the underlying stream together with the bytes buffered past the last head.
    pub fn into_parts(self) -> (R, BytesMut) {
        let parts = self.framed_read.into_parts();
        (parts.io, parts.read_buf)
    }
}

impl RequestReader<TcpStream> {
    /// Wraps an accepted connection, taking origin and destination from its socket addresses.
    ///
    /// # Errors
    ///
    /// Fails if either socket address cannot be queried.
    pub fn from_tcp_stream(stream: TcpStream) -> io::Result<Self> {
        let endpoints = Endpoints::from_socket_addrs(stream.peer_addr()?, stream.local_addr()?);
        Ok(Self::new(stream, endpoints))
    }
}
