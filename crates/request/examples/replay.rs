//! Accepts connections, parses each request head and answers with the request
//! serialized back to wire form, so `curl -v http://127.0.0.1:8080/a%20b?x=1`
//! shows exactly what the parser understood.

use bytes::Bytes;
use micro_request::codec::to_bytes;
use micro_request::connection::RequestReader;
use tokio::io::AsyncWriteExt;
use tokio::net::{TcpListener, TcpStream};
use tracing::{error, info, warn, Level};
use tracing_subscriber::FmtSubscriber;

#[tokio::main]
async fn main() {
    let subscriber = FmtSubscriber::builder().with_max_level(Level::DEBUG).finish();
    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");

    info!(port = 8080, "start listening");
    let tcp_listener = match TcpListener::bind("127.0.0.1:8080").await {
        Ok(tcp_listener) => tcp_listener,
        Err(e) => {
            error!(cause = %e, "bind server error");
            return;
        }
    };

    loop {
        let (tcp_stream, _remote_addr) = match tcp_listener.accept().await {
            Ok(stream_and_addr) => stream_and_addr,
            Err(e) => {
                warn!(cause = %e, "failed to accept");
                continue;
            }
        };

        tokio::spawn(async move {
            if let Err(e) = replay(tcp_stream).await {
                error!(cause = %e, "connection failed");
            }
        });
    }
}

async fn replay(tcp_stream: TcpStream) -> std::io::Result<()> {
    let mut reader = RequestReader::from_tcp_stream(tcp_stream)?;

    let response = match reader.read_request().await {
        Ok(Some(request)) => {
            info!(origin = request.origin(), method = %request.method(), path = request.path(), "replaying request");
            response(200, "OK", to_bytes(&request))
        }
        Ok(None) => return Ok(()),
        Err(e) => {
            let status = e.status_code();
            response(status.as_u16(), status.canonical_reason().unwrap_or(""), Bytes::from(e.to_string()))
        }
    };

    let (mut tcp_stream, _rest) = reader.into_parts();
    tcp_stream.write_all(&response).await?;
    tcp_stream.shutdown().await
}

fn response(status: u16, reason: &str, body: Bytes) -> Vec<u8> {
    let mut response = format!(
        "HTTP/1.1 {status} {reason}\r\nContent-Type: text/plain\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
        body.len()
    )
    .into_bytes();
    response.extend_from_slice(&body);
    response
}
