#![cfg(test)]
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use peerdial_common::config::Config;
use peerdial_common::error::RaceError;
use peerdial_common::network::hostport::{HostPort, parse_host_ports};
use peerdial_core::clock::WallClock;
use peerdial_core::network::race::{Racer, dial_host_port, fastest_host_port};
use peerdial_core::network::tcp::TcpDialer;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// Binds a loopback listener that accepts forever.
async fn live_listener() -> (SocketAddr, JoinHandle<()>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let handle = tokio::spawn(async move {
        while listener.accept().await.is_ok() {}
    });
    (addr, handle)
}

/// A loopback port with nothing listening on it.
async fn dead_port() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    addr
}

fn dialer() -> Arc<TcpDialer> {
    Arc::new(TcpDialer::new(Duration::from_secs(2)))
}

#[tokio::test]
async fn dial_host_port_reaches_listener() {
    let (addr, server) = live_listener().await;
    let host_port: HostPort = addr.to_string().parse().unwrap();

    let outcome = dial_host_port(&host_port, dialer().as_ref(), &WallClock).await;

    assert!(outcome.is_success(), "dial failed: {:?}", outcome.result);
    assert_eq!(outcome.endpoint, host_port);
    server.abort();
}

#[tokio::test]
async fn race_prefers_live_listener_over_dead_port() {
    let (live, server) = live_listener().await;
    let dead = dead_port().await;
    let candidates = parse_host_ports([dead.to_string(), live.to_string()]).unwrap();

    let best = fastest_host_port(dialer(), Arc::new(WallClock), &candidates)
        .await
        .unwrap();

    assert_eq!(best, candidates[1]);
    server.abort();
}

#[tokio::test]
async fn race_with_only_dead_ports_fails() {
    let mut literals: Vec<String> = Vec::new();
    for _ in 0..5 {
        literals.push(dead_port().await.to_string());
    }
    let candidates = parse_host_ports(&literals).unwrap();

    let racer = Racer::new(dialer(), Arc::new(WallClock));
    let err = racer.fastest(&candidates).await.unwrap_err();

    let message = err.to_string();
    assert!(
        message.starts_with("cannot connect to any address: 5 of 5 attempts failed ("),
        "unexpected message: {message}"
    );
    assert!(message.ends_with("and 2 more)"), "unexpected message: {message}");

    let RaceError::NoReachableEndpoint { attempted, failures } = err;
    assert_eq!(attempted, 5);
    assert_eq!(failures.len(), 5);
}

#[tokio::test]
async fn racer_from_config_reports_every_outcome() {
    let (live_a, server_a) = live_listener().await;
    let (live_b, server_b) = live_listener().await;
    let dead = dead_port().await;
    let candidates =
        parse_host_ports([live_a.to_string(), dead.to_string(), live_b.to_string()]).unwrap();

    let racer = Racer::from_config(&Config::default());
    let report = racer.race(&candidates).await.unwrap();

    assert_eq!(report.outcomes.len(), 3);
    assert!(report.outcomes[0].is_success());
    assert!(!report.outcomes[1].is_success());
    assert!(report.outcomes[2].is_success());
    assert_ne!(report.winner, candidates[1]);
    server_a.abort();
    server_b.abort();
}
