use std::io;
use std::net::SocketAddr;
use std::time::Duration;

use async_trait::async_trait;
use peerdial_common::config::Config;
use tokio::io::AsyncWriteExt;
use tokio::net::{TcpStream, lookup_host};
use tokio::time::timeout;

use crate::ports::{Connection, Dialer, Network};

/// Dials real TCP sockets, giving up after `timeout` per attempt.
#[derive(Debug, Clone, Copy)]
pub struct TcpDialer {
    timeout: Duration,
}

impl TcpDialer {
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }

    pub fn from_config(cfg: &Config) -> Self {
        Self::new(cfg.dial_timeout)
    }

    async fn connect(&self, network: Network, address: &str) -> io::Result<TcpStream> {
        let candidates: Vec<SocketAddr> = lookup_host(address)
            .await?
            .filter(|socket_addr| network.accepts(&socket_addr.ip()))
            .collect();
        if candidates.is_empty() {
            return Err(io::Error::new(
                io::ErrorKind::AddrNotAvailable,
                format!("no {network} address found for {address}"),
            ));
        }
        TcpStream::connect(&candidates[..]).await
    }
}

#[async_trait]
impl Dialer for TcpDialer {
    async fn dial(&self, network: Network, address: &str) -> io::Result<Box<dyn Connection>> {
        match timeout(self.timeout, self.connect(network, address)).await {
            Ok(Ok(stream)) => Ok(Box::new(TcpConnection(stream))),
            Ok(Err(err)) => Err(err),
            Err(_elapsed) => Err(io::Error::new(
                io::ErrorKind::TimedOut,
                format!("dial {network} {address}: i/o timeout"),
            )),
        }
    }
}

pub struct TcpConnection(TcpStream);

#[async_trait]
impl Connection for TcpConnection {
    async fn close(&mut self) -> io::Result<()> {
        self.0.shutdown().await
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
