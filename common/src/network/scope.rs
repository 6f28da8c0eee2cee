//! # Scope Classification & Ordering
//!
//! Maps address literals onto a [`Scope`] and defines the single total order
//! every selection routine relies on:
//!
//! 1. scope rank: `Public < CloudLocal < MachineLocal < LinkLocal < Unknown`
//! 2. within a rank, IPv4 before IPv6 before hostnames
//! 3. the literal value, compared lexically
//! 4. the port, ascending

use std::cmp::Ordering;
use std::fmt;
use std::net::IpAddr;

use super::address::{AddressKind, LOCALHOST};
use super::hostport::HostPort;
use crate::utils::ip::{self, IpRangeClass};

/// How broadly an address is expected to be reachable.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scope {
    #[default]
    Unknown,
    Public,
    CloudLocal,
    MachineLocal,
    LinkLocal,
}

impl Scope {
    /// Sort rank, lower is more preferred.
    pub fn rank(self) -> u8 {
        match self {
            Scope::Public => 0,
            Scope::CloudLocal => 1,
            Scope::MachineLocal => 2,
            Scope::LinkLocal => 3,
            Scope::Unknown => 4,
        }
    }

    /// Machine- and link-local addresses never work across a network boundary.
    pub fn is_usable_remotely(self) -> bool {
        !matches!(self, Scope::MachineLocal | Scope::LinkLocal)
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Scope::Unknown => "unknown",
            Scope::Public => "public",
            Scope::CloudLocal => "local-cloud",
            Scope::MachineLocal => "local-machine",
            Scope::LinkLocal => "link-local",
        };
        f.write_str(name)
    }
}

/// Classifies a literal of the given kind.
///
/// Hostnames are optimistically treated as [`Scope::Public`], except for
/// `localhost` which is always [`Scope::MachineLocal`].
pub fn classify(value: &str, kind: AddressKind) -> Scope {
    if kind == AddressKind::HostName {
        return match value {
            LOCALHOST => Scope::MachineLocal,
            _ => Scope::Public,
        };
    }
    match value.parse::<IpAddr>() {
        Ok(ip_addr) => scope_of_ip(&ip_addr),
        Err(_) => Scope::Unknown,
    }
}

pub fn scope_of_ip(ip_addr: &IpAddr) -> Scope {
    match ip::get_ip_range_class(ip_addr) {
        IpRangeClass::Loopback => Scope::MachineLocal,
        IpRangeClass::LinkLocal => Scope::LinkLocal,
        IpRangeClass::Private => Scope::CloudLocal,
        IpRangeClass::Global => Scope::Public,
    }
}

/// Total order over endpoints, most preferred first.
pub fn compare_host_ports(a: &HostPort, b: &HostPort) -> Ordering {
    let (left, right) = (a.address(), b.address());
    left.scope()
        .rank()
        .cmp(&right.scope().rank())
        .then_with(|| left.kind().cmp(&right.kind()))
        .then_with(|| left.value().cmp(right.value()))
        .then_with(|| a.port().cmp(&b.port()))
}

/// Sorts in place by [`compare_host_ports`]. The sort is stable.
pub fn sort_host_ports(host_ports: &mut [HostPort]) {
    host_ports.sort_by(compare_host_ports);
}

/// Returns a sorted copy, leaving the input untouched.
pub fn sorted_host_ports(host_ports: &[HostPort]) -> Vec<HostPort> {
    let mut sorted: Vec<HostPort> = host_ports.to_vec();
    sort_host_ports(&mut sorted);
    sorted
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
