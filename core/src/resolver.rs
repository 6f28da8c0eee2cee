//! # Hostname Resolution
//!
//! Expands hostname endpoints into the IPs they resolve to, in place.
//!
//! Numeric endpoints and `localhost` are never looked up. A hostname that
//! fails to resolve is dropped from the list; it never aborts the rest.

use std::net::IpAddr;

use async_trait::async_trait;
use peerdial_common::error::ResolveError;
use peerdial_common::network::address::Address;
use peerdial_common::network::hostport::HostPort;
use tokio::net::lookup_host;
use tracing::debug;

use crate::ports::HostResolver;
use crate::selection::drop_duplicated_host_ports;

/// Resolves through the operating system's resolver (`getaddrinfo`).
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemResolver;

#[async_trait]
impl HostResolver for SystemResolver {
    async fn lookup_ip(&self, host: &str) -> Result<Vec<IpAddr>, ResolveError> {
        let socket_addrs = lookup_host((host, 0))
            .await
            .map_err(|err| ResolveError::new(host, err))?;

        let mut ips: Vec<IpAddr> = Vec::new();
        for socket_addr in socket_addrs {
            let ip: IpAddr = socket_addr.ip();
            if !ips.contains(&ip) {
                ips.push(ip);
            }
        }
        Ok(ips)
    }
}

/// Replaces every hostname (other than `localhost`) with the IPs it
/// resolves to, on the same port, then drops exact duplicates.
///
/// Lookups run one after another on the calling task.
pub async fn resolve_or_drop_hostnames(resolver: &dyn HostResolver, host_ports: &[HostPort]) -> Vec<HostPort> {
    let mut resolved: Vec<HostPort> = Vec::with_capacity(host_ports.len());

    for hp in host_ports {
        let address: &Address = hp.address();
        if !address.is_hostname() || address.is_localhost() {
            resolved.push(hp.clone());
            continue;
        }

        match resolver.lookup_ip(address.value()).await {
            Ok(ips) => {
                resolved.extend(ips.into_iter().map(|ip| HostPort::new(Address::from(ip), hp.port())));
            }
            Err(err) => {
                debug!("removing unresolvable address {:?}: {err}", address.value());
            }
        }
    }

    drop_duplicated_host_ports(&resolved)
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
