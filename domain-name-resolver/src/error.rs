use std::io;
use std::net::SocketAddr;
use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ResolveError {
    #[error("invalid domain: {0}")]
    Encode(#[from] dns::EncodeError),

    #[error("failed to open UDP socket: {0}")]
    Bind(io::Error),

    #[error("failed to connect UDP socket to {addr}: {source}")]
    Connect { addr: SocketAddr, source: io::Error },

    #[error("failed to send query: {0}")]
    Send(io::Error),

    #[error("failed to receive response: {0}")]
    Recv(io::Error),

    #[error("no response within {0:?}")]
    Timeout(Duration),

    #[error("malformed response: {0}")]
    Decode(#[from] dns::DecodeError),

    #[error("resolution task failed: {0}")]
    TaskFailed(String),
}
