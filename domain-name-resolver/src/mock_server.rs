// 测试用的 DNS 服务端，监听 127.0.0.1 的随机端口
use std::net::{Ipv4Addr, SocketAddr};
use std::sync::{Arc, Mutex};
use tokio::net::UdpSocket;

pub enum Reply {
    Address(Ipv4Addr, u32),
    Raw(Vec<u8>),
    Silent,
}

pub struct MockServer {
    addr: SocketAddr,
    queries: Arc<Mutex<Vec<Vec<u8>>>>,
}

impl MockServer {
    pub async fn start<F>(handler: F) -> Self
    where
        F: Fn(&str) -> Reply + Send + 'static,
    {
        let sock = UdpSocket::bind("127.0.0.1:0").await.unwrap();
        let addr = sock.local_addr().unwrap();
        let queries = Arc::new(Mutex::new(Vec::new()));

        let recorded = Arc::clone(&queries);
        tokio::spawn(async move {
            let mut buf = [0u8; 512];
            loop {
                let (n, peer) = match sock.recv_from(&mut buf).await {
                    Ok(r) => r,
                    Err(_) => continue,
                };
                let query = buf[..n].to_vec();
                recorded.lock().unwrap().push(query.clone());

                let domain = query_domain(&query);
                let response = match handler(&domain) {
                    Reply::Address(addr, ttl) => answer_for(&query, addr, ttl),
                    Reply::Raw(bytes) => bytes,
                    Reply::Silent => continue,
                };
                let _ = sock.send_to(&response, peer).await;
            }
        });

        Self { addr, queries }
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    pub fn queries(&self) -> Vec<Vec<u8>> {
        self.queries.lock().unwrap().clone()
    }
}

fn query_domain(query: &[u8]) -> String {
    let mut labels = Vec::new();
    let mut index = 12;
    while index < query.len() && query[index] != 0 {
        let len = query[index] as usize;
        let label = &query[index + 1..index + 1 + len];
        labels.push(String::from_utf8_lossy(label).to_string());
        index += 1 + len;
    }
    labels.join(".")
}

// 复制请求的 header 和 question，再追加一条使用压缩指针的 A 记录
fn answer_for(query: &[u8], addr: Ipv4Addr, ttl: u32) -> Vec<u8> {
    let mut response = query.to_vec();
    response[2] = 0x81;
    response[3] = 0x80;
    response[6] = 0;
    response[7] = 1;

    response.extend_from_slice(&[0xc0, 0x0c, 0, 1, 0, 1]);
    response.extend_from_slice(&ttl.to_be_bytes());
    response.extend_from_slice(&[0, 4]);
    response.extend_from_slice(&addr.octets());
    response
}
