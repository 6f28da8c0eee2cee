#![cfg(test)]
use std::net::{IpAddr, Ipv4Addr};
use std::sync::Arc;

use async_trait::async_trait;
use peerdial_common::config::Config;
use peerdial_common::error::ResolveError;
use peerdial_common::network::hostport::{HostPort, host_ports_to_strings, new_host_ports, parse_host_ports};
use peerdial_core::discovery::AddressDiscovery;
use peerdial_core::network::race::Racer;
use peerdial_core::ports::HostResolver;
use peerdial_core::resolver::{SystemResolver, resolve_or_drop_hostnames};
use peerdial_core::selection::{
    collapse_host_ports, ensure_first_host_port, select_internal_host_port, select_public_host_port,
};
use peerdial_core::unique::unique_host_ports;
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;

/// Every hostname resolves to loopback, except `nowhere.invalid`.
struct LoopbackResolver;

#[async_trait]
impl HostResolver for LoopbackResolver {
    async fn lookup_ip(&self, host: &str) -> Result<Vec<IpAddr>, ResolveError> {
        match host {
            "nowhere.invalid" => Err(ResolveError::new(host, "no such host")),
            _ => Ok(vec![IpAddr::V4(Ipv4Addr::LOCALHOST)]),
        }
    }
}

#[tokio::test]
async fn system_resolver_resolves_ip_literal() {
    let resolved = resolve_or_drop_hostnames(&SystemResolver, &new_host_ports(80, ["127.0.0.1", "::1"])).await;
    assert_eq!(host_ports_to_strings(&resolved), vec!["127.0.0.1:80", "[::1]:80"]);
}

#[tokio::test]
async fn stub_resolution_feeds_streaming_dedup() {
    let input = new_host_ports(17070, ["a.example", "nowhere.invalid", "127.0.0.1", "b.example"]);
    let resolved = resolve_or_drop_hostnames(&LoopbackResolver, &input).await;
    assert_eq!(host_ports_to_strings(&resolved), vec!["127.0.0.1:17070"]);

    let mut doubled = resolved.clone();
    doubled.extend(resolved.iter().cloned());
    let unique = unique_host_ports(CancellationToken::new(), doubled).collect().await;
    assert_eq!(unique, resolved);
}

#[tokio::test]
async fn selection_over_collapsed_groups() {
    let groups = vec![
        new_host_ports(17070, ["10.0.0.1", "example.com", "127.0.0.1"]),
        new_host_ports(17070, ["8.8.8.8", "fe80::1"]),
    ];
    let all: Vec<HostPort> = collapse_host_ports(&groups);

    assert_eq!(select_public_host_port(&all), "8.8.8.8:17070");
    assert_eq!(select_internal_host_port(&all, false), "10.0.0.1:17070");

    let pinned = ensure_first_host_port(&groups[1][1], &all);
    assert_eq!(pinned[0].to_string(), "[fe80::1]:17070");
    assert_eq!(pinned.len(), all.len());
}

#[tokio::test]
async fn discovery_drops_loopback_candidates() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = listener.local_addr().unwrap().port();

    // Resolves to loopback, which is never usable across machines.
    let cfg = Config::default();
    let discovery = AddressDiscovery::new(Arc::new(LoopbackResolver), Racer::from_config(&cfg), cfg);
    let input = new_host_ports(port, ["peer.example"]);

    assert!(discovery.candidates(&input).await.is_empty());
    assert!(discovery.best_endpoint(&input).await.is_err());
}

#[test]
fn parse_errors_name_the_offending_literal() {
    let err = parse_host_ports(["host"]).unwrap_err();
    assert_eq!(
        err.to_string(),
        r#"cannot parse "host" as address:port: missing port in address host"#
    );

    let err = parse_host_ports(["1.2.3.4:42", "foo"]).unwrap_err();
    assert_eq!(err.literal(), "foo");
}
