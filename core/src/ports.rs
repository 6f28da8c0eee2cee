//! Capabilities the core depends on but never constructs on its own.
//!
//! Production adapters live next to the code that uses them
//! ([`SystemResolver`], [`TcpDialer`], [`WallClock`]); tests inject stubs that
//! implement the same traits.
//!
//! [`SystemResolver`]: crate::resolver::SystemResolver
//! [`TcpDialer`]: crate::network::tcp::TcpDialer
//! [`WallClock`]: crate::clock::WallClock

use std::fmt;
use std::io;
use std::net::IpAddr;

use async_trait::async_trait;
use peerdial_common::error::ResolveError;
use tokio::time::Instant;

/// Which transport (and address family) a dial should use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Network {
    Tcp,
    Tcp4,
    Tcp6,
}

impl Network {
    pub fn as_str(&self) -> &'static str {
        match self {
            Network::Tcp => "tcp",
            Network::Tcp4 => "tcp4",
            Network::Tcp6 => "tcp6",
        }
    }

    pub fn accepts(&self, ip: &IpAddr) -> bool {
        match self {
            Network::Tcp => true,
            Network::Tcp4 => ip.is_ipv4(),
            Network::Tcp6 => ip.is_ipv6(),
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Turns a hostname into zero or more IPs.
#[async_trait]
pub trait HostResolver: Send + Sync {
    async fn lookup_ip(&self, host: &str) -> Result<Vec<IpAddr>, ResolveError>;
}

/// An established connection. Probing only ever closes it.
#[async_trait]
pub trait Connection: Send {
    async fn close(&mut self) -> io::Result<()>;
}

/// Opens connections to `host:port` literals.
#[async_trait]
pub trait Dialer: Send + Sync {
    async fn dial(&self, network: Network, address: &str) -> io::Result<Box<dyn Connection>>;
}

pub trait Clock: Send + Sync {
    fn now(&self) -> Instant;
}
