use crate::error::ResolveError;
use bytes::BytesMut;
use dns::{DecodeResponse, FixedOffsetDecoder};
use domain_name_query_types::Answer;
use std::net::{Ipv4Addr, Ipv6Addr, SocketAddr};
use std::time::Duration;
use tokio::net::UdpSocket;

// https://datatracker.ietf.org/doc/html/rfc1035#section-4.2.1
//
// Messages carried by UDP are restricted to 512 bytes (not counting the IP
// or UDP headers).
pub const MAX_RESPONSE_SIZE: usize = 512;

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// Resolves A records against one DNS server, one UDP exchange per call.
#[derive(Clone, Debug)]
pub struct Resolver<D = FixedOffsetDecoder> {
    server_addr: SocketAddr,
    timeout: Duration,
    decoder: D,
}

impl Resolver<FixedOffsetDecoder> {
    pub fn new(server_addr: SocketAddr) -> Self {
        Self {
            server_addr,
            timeout: DEFAULT_TIMEOUT,
            decoder: FixedOffsetDecoder,
        }
    }
}

impl<D: DecodeResponse> Resolver<D> {
    /// The deadline covers sending the query and receiving the response.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_decoder<E: DecodeResponse>(self, decoder: E) -> Resolver<E> {
        Resolver {
            server_addr: self.server_addr,
            timeout: self.timeout,
            decoder,
        }
    }

    pub fn server_addr(&self) -> SocketAddr {
        self.server_addr
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub async fn resolve(&self, domain: &str) -> Result<Answer, ResolveError> {
        // 每次查询使用新的随机 id
        let id: u16 = rand::random();
        self.resolve_with_id(id, domain).await
    }

    pub async fn resolve_with_id(&self, id: u16, domain: &str) -> Result<Answer, ResolveError> {
        tracing::debug!("resolving domain: {}, id: {}", domain, id);

        let request_bytes = dns::encode_request(id, domain)?;

        let local_addr: SocketAddr = if self.server_addr.is_ipv4() {
            (Ipv4Addr::UNSPECIFIED, 0).into()
        } else {
            (Ipv6Addr::UNSPECIFIED, 0).into()
        };
        let sock = UdpSocket::bind(local_addr).await.map_err(ResolveError::Bind)?;
        sock.connect(self.server_addr)
            .await
            .map_err(|source| ResolveError::Connect {
                addr: self.server_addr,
                source,
            })?;

        let exchange = async {
            let _send_size = sock.send(&request_bytes).await.map_err(ResolveError::Send)?;

            let mut resp_buf = BytesMut::zeroed(MAX_RESPONSE_SIZE);
            let response_size = sock.recv(&mut resp_buf).await.map_err(ResolveError::Recv)?;
            resp_buf.truncate(response_size);
            tracing::debug!(
                "received udp response for {}, length: {}, {:?}",
                domain,
                response_size,
                &resp_buf[..]
            );

            Ok::<_, ResolveError>(resp_buf)
        };

        let resp_buf = tokio::time::timeout(self.timeout, exchange)
            .await
            .map_err(|_| ResolveError::Timeout(self.timeout))??;

        let answer = self.decoder.decode(&resp_buf, domain)?;

        Ok(answer)
    }
}
