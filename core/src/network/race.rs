//! # Connectivity Racer
//!
//! Dials every candidate endpoint at once and keeps the one whose TCP
//! handshake completed fastest.
//!
//! This is a "best of all" race, not "first to finish": every attempt is
//! awaited before a winner is chosen, so a quick failure never preempts a
//! slower success. Ties on latency go to the earlier candidate.
//!
//! No overall timeout is applied here; per-attempt limits belong to the
//! injected [`Dialer`]. Callers wanting a deadline can wrap the future in
//! `tokio::time::timeout`, dropping it aborts every pending attempt.

use std::io;
use std::sync::Arc;
use std::time::Duration;

use peerdial_common::config::Config;
use peerdial_common::error::{DialError, RaceError};
use peerdial_common::network::hostport::HostPort;
use tokio::task::JoinSet;
use tracing::{info, trace, warn};

use super::tcp::TcpDialer;
use crate::clock::WallClock;
use crate::ports::{Clock, Dialer, Network};

/// The result of probing a single endpoint.
#[derive(Debug)]
pub struct DialOutcome {
    pub endpoint: HostPort,
    pub duration: Duration,
    pub result: Result<(), DialError>,
}

impl DialOutcome {
    pub fn is_success(&self) -> bool {
        self.result.is_ok()
    }
}

/// Every outcome of a race plus the winner picked from them.
#[derive(Debug)]
pub struct RaceReport {
    pub winner: HostPort,
    pub latency: Duration,
    /// One entry per candidate, in input order.
    pub outcomes: Vec<DialOutcome>,
}

/// Dials `host_port` once and times the handshake.
///
/// A successful connection is closed right after the timing sample is taken.
pub async fn dial_host_port(host_port: &HostPort, dialer: &dyn Dialer, clock: &dyn Clock) -> DialOutcome {
    let address: String = host_port.net_addr();
    let start = clock.now();
    let dialed = dialer.dial(Network::Tcp, &address).await;
    let duration: Duration = clock.now().saturating_duration_since(start);

    let result = match dialed {
        Ok(mut conn) => {
            if let Err(err) = conn.close().await {
                warn!("closing probe connection to {address}: {err}");
            }
            Ok(())
        }
        Err(source) => Err(DialError::new(address, source)),
    };
    trace!(endpoint = %host_port, ?duration, ok = result.is_ok(), "dial finished");

    DialOutcome {
        endpoint: host_port.clone(),
        duration,
        result,
    }
}

/// Races every endpoint and returns the full report.
pub async fn race_host_ports(
    dialer: Arc<dyn Dialer>,
    clock: Arc<dyn Clock>,
    host_ports: &[HostPort],
) -> Result<RaceReport, RaceError> {
    let mut attempts: JoinSet<(usize, DialOutcome)> = JoinSet::new();
    for (index, host_port) in host_ports.iter().cloned().enumerate() {
        let dialer = Arc::clone(&dialer);
        let clock = Arc::clone(&clock);
        attempts.spawn(async move {
            let outcome = dial_host_port(&host_port, dialer.as_ref(), clock.as_ref()).await;
            (index, outcome)
        });
    }

    let mut slots: Vec<Option<DialOutcome>> = host_ports.iter().map(|_| None).collect();
    while let Some(joined) = attempts.join_next().await {
        match joined {
            Ok((index, outcome)) => slots[index] = Some(outcome),
            Err(err) => warn!("dial attempt did not complete: {err}"),
        }
    }

    let outcomes: Vec<DialOutcome> = slots
        .into_iter()
        .zip(host_ports)
        .map(|(slot, host_port)| slot.unwrap_or_else(|| incomplete(host_port)))
        .collect();

    pick_fastest(outcomes)
}

/// Races every endpoint and returns the one with the lowest successful latency.
pub async fn fastest_host_port(
    dialer: Arc<dyn Dialer>,
    clock: Arc<dyn Clock>,
    host_ports: &[HostPort],
) -> Result<HostPort, RaceError> {
    race_host_ports(dialer, clock, host_ports)
        .await
        .map(|report| report.winner)
}

fn incomplete(host_port: &HostPort) -> DialOutcome {
    DialOutcome {
        endpoint: host_port.clone(),
        duration: Duration::ZERO,
        result: Err(DialError::new(
            host_port.net_addr(),
            io::Error::other("dial attempt did not complete"),
        )),
    }
}

fn pick_fastest(outcomes: Vec<DialOutcome>) -> Result<RaceReport, RaceError> {
    let fastest = outcomes
        .iter()
        .filter(|outcome| outcome.is_success())
        .min_by_key(|outcome| outcome.duration)
        .map(|outcome| (outcome.endpoint.clone(), outcome.duration));

    match fastest {
        Some((winner, latency)) => {
            info!(endpoint = %winner, ?latency, candidates = outcomes.len(), "fastest endpoint selected");
            Ok(RaceReport {
                winner,
                latency,
                outcomes,
            })
        }
        None => {
            let attempted: usize = outcomes.len();
            let failures: Vec<DialError> = outcomes
                .into_iter()
                .filter_map(|outcome| outcome.result.err())
                .collect();
            Err(RaceError::NoReachableEndpoint {
                attempted,
                failures,
            })
        }
    }
}

/// Holds the dialing capabilities so callers inject them once.
#[derive(Clone)]
pub struct Racer {
    dialer: Arc<dyn Dialer>,
    clock: Arc<dyn Clock>,
}

impl Racer {
    pub fn new(dialer: Arc<dyn Dialer>, clock: Arc<dyn Clock>) -> Self {
        Self { dialer, clock }
    }

    /// Real TCP dials bounded by `cfg.dial_timeout`, timed by the wall clock.
    pub fn from_config(cfg: &Config) -> Self {
        Self::new(Arc::new(TcpDialer::from_config(cfg)), Arc::new(WallClock))
    }

    pub async fn probe(&self, host_port: &HostPort) -> DialOutcome {
        dial_host_port(host_port, self.dialer.as_ref(), self.clock.as_ref()).await
    }

    pub async fn race(&self, host_ports: &[HostPort]) -> Result<RaceReport, RaceError> {
        race_host_ports(Arc::clone(&self.dialer), Arc::clone(&self.clock), host_ports).await
    }

    pub async fn fastest(&self, host_ports: &[HostPort]) -> Result<HostPort, RaceError> {
        fastest_host_port(Arc::clone(&self.dialer), Arc::clone(&self.clock), host_ports).await
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;
    use crate::ports::Connection;
    use async_trait::async_trait;
    use peerdial_common::network::hostport::new_host_ports;
    use std::collections::HashMap;
    use std::sync::Mutex;

    /// Records calls and advances a manual clock by a fixed delay per dial.
    struct StubDialer {
        clock: Arc<ManualClock>,
        delay: Duration,
        fail_with: Option<&'static str>,
        calls: Arc<Mutex<Vec<String>>>,
    }

    struct StubConnection {
        calls: Arc<Mutex<Vec<String>>>,
    }

    #[async_trait]
    impl Connection for StubConnection {
        async fn close(&mut self) -> io::Result<()> {
            self.calls.lock().unwrap().push("Close".to_string());
            Ok(())
        }
    }

    #[async_trait]
    impl Dialer for StubDialer {
        async fn dial(&self, network: Network, address: &str) -> io::Result<Box<dyn Connection>> {
            self.calls
                .lock()
                .unwrap()
                .push(format!("Dial {network} {address}"));
            self.clock.advance(self.delay);
            match self.fail_with {
                Some(msg) => Err(io::Error::other(msg)),
                None => Ok(Box::new(StubConnection {
                    calls: Arc::clone(&self.calls),
                })),
            }
        }
    }

    /// Sleeps on tokio time for a per-endpoint latency; meant for paused-time tests.
    struct LatencyDialer {
        latencies: HashMap<String, Duration>,
        failing: Vec<String>,
    }

    struct NoopConnection;

    #[async_trait]
    impl Connection for NoopConnection {
        async fn close(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[async_trait]
    impl Dialer for LatencyDialer {
        async fn dial(&self, _network: Network, address: &str) -> io::Result<Box<dyn Connection>> {
            let latency = self.latencies.get(address).copied().unwrap_or_default();
            tokio::time::sleep(latency).await;
            if self.failing.iter().any(|failing| failing == address) {
                return Err(io::Error::new(io::ErrorKind::ConnectionRefused, "connection refused"));
            }
            Ok(Box::new(NoopConnection))
        }
    }

    fn sequential_ports(count: u16) -> Vec<HostPort> {
        (1..=count)
            .flat_map(|port| new_host_ports(port, ["127.0.0.1"]))
            .collect()
    }

    #[tokio::test]
    async fn dial_host_port_success_closes_connection() {
        let clock = Arc::new(ManualClock::new());
        let calls = Arc::new(Mutex::new(Vec::new()));
        let dialer = StubDialer {
            clock: Arc::clone(&clock),
            delay: Duration::from_millis(42),
            fail_with: None,
            calls: Arc::clone(&calls),
        };
        let host_port = new_host_ports(1234, ["localhost"]).remove(0);

        let outcome = dial_host_port(&host_port, &dialer, clock.as_ref()).await;

        assert_eq!(outcome.endpoint, host_port);
        assert!(outcome.result.is_ok());
        assert_eq!(outcome.duration, Duration::from_millis(42));
        assert_eq!(
            *calls.lock().unwrap(),
            vec!["Dial tcp localhost:1234".to_string(), "Close".to_string()]
        );
    }

    #[tokio::test]
    async fn dial_host_port_error_keeps_timing() {
        let clock = Arc::new(ManualClock::new());
        let calls = Arc::new(Mutex::new(Vec::new()));
        let dialer = StubDialer {
            clock: Arc::clone(&clock),
            delay: Duration::from_millis(42),
            fail_with: Some("boom!"),
            calls: Arc::clone(&calls),
        };
        let host_port = new_host_ports(1234, ["localhost"]).remove(0);

        let outcome = dial_host_port(&host_port, &dialer, clock.as_ref()).await;

        assert_eq!(outcome.endpoint, host_port);
        assert_eq!(outcome.duration, Duration::from_millis(42));
        let err = outcome.result.unwrap_err();
        assert_eq!(err.source.to_string(), "boom!");
        assert_eq!(err.to_string(), "dial localhost:1234: boom!");
        assert_eq!(*calls.lock().unwrap(), vec!["Dial tcp localhost:1234".to_string()]);
    }

    #[tokio::test(start_paused = true)]
    async fn fastest_picks_lowest_latency_of_many() {
        let host_ports = sequential_ports(100);
        let latencies: HashMap<String, Duration> = host_ports
            .iter()
            .enumerate()
            .map(|(i, hp)| (hp.net_addr(), Duration::from_millis(10_000 - 10 * i as u64)))
            .collect();
        let dialer = Arc::new(LatencyDialer {
            latencies,
            failing: vec![],
        });

        let best = fastest_host_port(dialer, Arc::new(WallClock), &host_ports)
            .await
            .unwrap();
        assert_eq!(best, host_ports[99]);
    }

    #[tokio::test(start_paused = true)]
    async fn fast_failure_does_not_preempt_slower_success() {
        let host_ports = new_host_ports(80, ["10.0.0.1", "10.0.0.2", "10.0.0.3"]);
        let latencies = HashMap::from([
            ("10.0.0.1:80".to_string(), Duration::from_millis(300)),
            ("10.0.0.2:80".to_string(), Duration::from_millis(5)),
            ("10.0.0.3:80".to_string(), Duration::from_millis(120)),
        ]);
        let dialer = Arc::new(LatencyDialer {
            latencies,
            failing: vec!["10.0.0.2:80".to_string()],
        });

        let report = race_host_ports(dialer, Arc::new(WallClock), &host_ports)
            .await
            .unwrap();
        assert_eq!(report.winner, host_ports[2]);
        assert_eq!(report.latency, Duration::from_millis(120));
        assert_eq!(report.outcomes.len(), 3);
        assert!(!report.outcomes[1].is_success());
        assert_eq!(report.outcomes[0].endpoint, host_ports[0]);
    }

    #[tokio::test(start_paused = true)]
    async fn ties_go_to_the_earlier_candidate() {
        let host_ports = new_host_ports(80, ["10.0.0.1", "10.0.0.2", "10.0.0.3"]);
        let latencies = host_ports
            .iter()
            .map(|hp| (hp.net_addr(), Duration::from_millis(50)))
            .collect();
        let dialer = Arc::new(LatencyDialer {
            latencies,
            failing: vec!["10.0.0.1:80".to_string()],
        });

        let best = fastest_host_port(dialer, Arc::new(WallClock), &host_ports)
            .await
            .unwrap();
        assert_eq!(best, host_ports[1]);
    }

    #[tokio::test(start_paused = true)]
    async fn all_failures_are_aggregated() {
        let host_ports = sequential_ports(10);
        let dialer = Arc::new(LatencyDialer {
            latencies: HashMap::new(),
            failing: host_ports.iter().map(HostPort::net_addr).collect(),
        });

        let err = fastest_host_port(dialer, Arc::new(WallClock), &host_ports)
            .await
            .unwrap_err();
        let RaceError::NoReachableEndpoint { attempted, failures } = &err;
        assert_eq!(*attempted, 10);
        assert_eq!(failures.len(), 10);
        assert_eq!(failures[0].endpoint, "127.0.0.1:1");
        assert!(err.to_string().starts_with("cannot connect to any address: 10 of 10 attempts failed"));
    }

    #[tokio::test]
    async fn empty_input_is_unreachable() {
        let racer = Racer::new(
            Arc::new(LatencyDialer {
                latencies: HashMap::new(),
                failing: vec![],
            }),
            Arc::new(WallClock),
        );
        let err = racer.fastest(&[]).await.unwrap_err();
        assert!(matches!(
            err,
            RaceError::NoReachableEndpoint { attempted: 0, .. }
        ));
    }

    #[tokio::test(start_paused = true)]
    async fn racer_probe_reports_latency() {
        let host_port = new_host_ports(80, ["10.0.0.9"]).remove(0);
        let racer = Racer::new(
            Arc::new(LatencyDialer {
                latencies: HashMap::from([("10.0.0.9:80".to_string(), Duration::from_millis(7))]),
                failing: vec![],
            }),
            Arc::new(WallClock),
        );
        let outcome = racer.probe(&host_port).await;
        assert!(outcome.is_success());
        assert_eq!(outcome.duration, Duration::from_millis(7));
    }
}
