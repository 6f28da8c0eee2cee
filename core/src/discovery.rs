//! # Peer Address Discovery Service
//!
//! Implements the "which address should this agent use" use case.
//!
//! Ties the individual steps together for a caller that just has a bag of
//! candidate endpoints for a remote peer.

use std::sync::Arc;

use peerdial_common::config::Config;
use peerdial_common::error::RaceError;
use peerdial_common::network::hostport::HostPort;
use tracing::debug;

use crate::network::race::{RaceReport, Racer};
use crate::ports::HostResolver;
use crate::resolver::{SystemResolver, resolve_or_drop_hostnames};
use crate::selection::{drop_duplicated_host_ports, filter_unusable_host_ports};

/// Application service for picking a peer's endpoint.
///
/// Orchestrates the pipeline by:
/// 1. resolving hostnames through the [`HostResolver`] port (unless disabled),
/// 2. dropping duplicates and endpoints unusable across the network,
/// 3. racing what is left through the [`Racer`].
pub struct AddressDiscovery {
    resolver: Arc<dyn HostResolver>,
    racer: Racer,
    cfg: Config,
}

impl AddressDiscovery {
    pub fn new(resolver: Arc<dyn HostResolver>, racer: Racer, cfg: Config) -> Self {
        Self { resolver, racer, cfg }
    }

    /// Production wiring: system resolver, real TCP dials, wall clock.
    pub fn from_config(cfg: Config) -> Self {
        Self::new(Arc::new(SystemResolver), Racer::from_config(&cfg), cfg)
    }

    /// Candidate endpoints worth dialing, in input order.
    pub async fn candidates(&self, host_ports: &[HostPort]) -> Vec<HostPort> {
        let resolved: Vec<HostPort> = match self.cfg.no_dns {
            true => drop_duplicated_host_ports(host_ports),
            false => resolve_or_drop_hostnames(self.resolver.as_ref(), host_ports).await,
        };
        let usable: Vec<HostPort> = filter_unusable_host_ports(&resolved);
        debug!(
            input = host_ports.len(),
            resolved = resolved.len(),
            usable = usable.len(),
            "candidate endpoints prepared"
        );
        usable
    }

    /// Races the candidates and reports every outcome.
    pub async fn race(&self, host_ports: &[HostPort]) -> Result<RaceReport, RaceError> {
        let candidates: Vec<HostPort> = self.candidates(host_ports).await;
        self.racer.race(&candidates).await
    }

    /// The fastest reachable candidate.
    pub async fn best_endpoint(&self, host_ports: &[HostPort]) -> Result<HostPort, RaceError> {
        self.race(host_ports).await.map(|report| report.winner)
    }

    pub fn racer(&self) -> &Racer {
        &self.racer
    }

    pub fn config(&self) -> &Config {
        &self.cfg
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
