//! # Host:Port Endpoints
//!
//! Parses and formats the `host:port` notation used everywhere an endpoint
//! is written down:
//!
//! * IPv4 and hostnames: `10.0.0.1:17070`, `example.com:443`
//! * IPv6, always bracketed: `[fc00::1]:17070`
//!
//! Formatting is the exact inverse of parsing.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use super::address::Address;
use super::scope::Scope;
use crate::error::{AddrErrorReason, ParseError};

/// An [`Address`] bound to a port. Equality is by `(address.value, port)`.
#[derive(Clone)]
pub struct HostPort {
    address: Address,
    port: u16,
}

impl HostPort {
    pub fn new(address: Address, port: u16) -> Self {
        Self { address, port }
    }

    /// Parses a single `host:port` literal.
    pub fn parse(literal: &str) -> Result<Self, ParseError> {
        let (host, port) = split_host_port(literal).map_err(|reason| ParseError::Address {
            literal: literal.to_string(),
            reason,
        })?;
        let port: u16 = port.parse().map_err(|source| ParseError::Port {
            literal: literal.to_string(),
            source,
        })?;
        Ok(Self::new(Address::new(host), port))
    }

    pub fn address(&self) -> &Address {
        &self.address
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub fn scope(&self) -> Scope {
        self.address.scope()
    }

    /// The dialable `host:port` form, bracketing IPv6 literals.
    pub fn net_addr(&self) -> String {
        self.to_string()
    }
}

impl PartialEq for HostPort {
    fn eq(&self, other: &Self) -> bool {
        self.port == other.port && self.address.value() == other.address.value()
    }
}

impl Eq for HostPort {}

impl Hash for HostPort {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.address.value().hash(state);
        self.port.hash(state);
    }
}

impl fmt::Display for HostPort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Any host with a colon (IPv6, zoned IPv6) must be bracketed to reparse.
        match self.address.value().contains(':') {
            true => write!(f, "[{}]:{}", self.address.value(), self.port),
            false => write!(f, "{}:{}", self.address.value(), self.port),
        }
    }
}

impl fmt::Debug for HostPort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl FromStr for HostPort {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Parses every literal, all-or-nothing: the first failure is returned and
/// no partial result is kept.
pub fn parse_host_ports<I, S>(literals: I) -> Result<Vec<HostPort>, ParseError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    literals
        .into_iter()
        .map(|literal| HostPort::parse(literal.as_ref()))
        .collect()
}

/// Pairs every address with the same port, in order.
pub fn addresses_with_port(addresses: &[Address], port: u16) -> Vec<HostPort> {
    addresses
        .iter()
        .map(|address| HostPort::new(address.clone(), port))
        .collect()
}

/// Builds addresses from literals and pairs them with `port`.
pub fn new_host_ports<I, S>(port: u16, literals: I) -> Vec<HostPort>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    literals
        .into_iter()
        .map(|literal| HostPort::new(Address::new(literal), port))
        .collect()
}

/// Projects back to the addresses, keeping order and duplicates.
pub fn hosts_without_port(host_ports: &[HostPort]) -> Vec<Address> {
    host_ports.iter().map(|hp| hp.address().clone()).collect()
}

pub fn host_ports_to_strings(host_ports: &[HostPort]) -> Vec<String> {
    host_ports.iter().map(HostPort::net_addr).collect()
}

/// Splits `host:port` (or `[host]:port`) into its two halves.
///
/// The port starts after the last colon. A bracketed host must close right
/// before that colon, and an unbracketed host may not contain a colon at all.
fn split_host_port(literal: &str) -> Result<(&str, &str), AddrErrorReason> {
    let Some(colon) = literal.rfind(':') else {
        return Err(AddrErrorReason::MissingPort);
    };

    let (host, open_from, close_from) = if literal.starts_with('[') {
        let Some(end) = literal.find(']') else {
            return Err(AddrErrorReason::MissingBracket);
        };
        match end + 1 {
            after if after == literal.len() => return Err(AddrErrorReason::MissingPort),
            after if after == colon => {}
            after => {
                return Err(match literal.as_bytes()[after] {
                    b':' => AddrErrorReason::TooManyColons,
                    _ => AddrErrorReason::MissingPort,
                });
            }
        }
        (&literal[1..end], 1, end + 1)
    } else {
        let host = &literal[..colon];
        if host.contains(':') {
            return Err(AddrErrorReason::TooManyColons);
        }
        (host, 0, 0)
    };

    if literal[open_from..].contains('[') {
        return Err(AddrErrorReason::UnexpectedBracket('['));
    }
    if literal[close_from..].contains(']') {
        return Err(AddrErrorReason::UnexpectedBracket(']'));
    }

    Ok((host, &literal[colon + 1..]))
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
