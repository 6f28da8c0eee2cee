//! Picking, filtering and merging endpoint lists.
//!
//! Every selector works over the order defined by
//! [`sort_host_ports`](peerdial_common::network::scope::sort_host_ports) and
//! never fails: an empty input yields an empty answer.

use std::collections::HashSet;

use peerdial_common::network::hostport::HostPort;
use peerdial_common::network::scope::{Scope, sorted_host_ports};

/// The best endpoint for reaching this peer from outside its network.
pub fn select_public_host_port(host_ports: &[HostPort]) -> String {
    let sorted: Vec<HostPort> = sorted_host_ports(host_ports);
    sorted
        .iter()
        .find(|hp| hp.scope() == Scope::Public)
        .or_else(|| sorted.first())
        .map(ToString::to_string)
        .unwrap_or_default()
}

/// The best endpoint for reaching this peer from inside its cloud.
///
/// Cloud-local endpoints win, together with machine-local ones when
/// `prefer_machine_local` is set. Public endpoints come next.
pub fn select_internal_host_port(host_ports: &[HostPort], prefer_machine_local: bool) -> String {
    let sorted: Vec<HostPort> = sorted_host_ports(host_ports);
    let preferred = |scope: Scope| match scope {
        Scope::CloudLocal => true,
        Scope::MachineLocal => prefer_machine_local,
        _ => false,
    };

    sorted
        .iter()
        .find(|hp| preferred(hp.scope()))
        .or_else(|| sorted.iter().find(|hp| hp.scope() == Scope::Public))
        .or_else(|| sorted.first())
        .map(ToString::to_string)
        .unwrap_or_default()
}

/// Drops machine-local and link-local endpoints, keeping everything else in place.
pub fn filter_unusable_host_ports(host_ports: &[HostPort]) -> Vec<HostPort> {
    host_ports
        .iter()
        .filter(|hp| hp.scope().is_usable_remotely())
        .cloned()
        .collect()
}

/// Returns `host_ports` with `target` moved (or prepended) to the front.
pub fn ensure_first_host_port(target: &HostPort, host_ports: &[HostPort]) -> Vec<HostPort> {
    if host_ports.first() == Some(target) {
        return host_ports.to_vec();
    }

    let mut result: Vec<HostPort> = Vec::with_capacity(host_ports.len() + 1);
    result.push(target.clone());
    match host_ports.iter().position(|hp| hp == target) {
        Some(index) => {
            result.extend_from_slice(&host_ports[..index]);
            result.extend_from_slice(&host_ports[index + 1..]);
        }
        None => result.extend_from_slice(host_ports),
    }
    result
}

pub fn collapse_host_ports(groups: &[Vec<HostPort>]) -> Vec<HostPort> {
    groups.iter().flatten().cloned().collect()
}

/// Stable dedup; the first occurrence of each `host:port` wins.
pub fn drop_duplicated_host_ports(host_ports: &[HostPort]) -> Vec<HostPort> {
    let mut seen: HashSet<&HostPort> = HashSet::with_capacity(host_ports.len());
    host_ports
        .iter()
        .filter(|hp| seen.insert(*hp))
        .cloned()
        .collect()
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
