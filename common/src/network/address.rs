//! # Address Model
//!
//! A single network endpoint literal together with its derived [`AddressKind`]
//! and [`Scope`].
//!
//! The literal is kept verbatim (so `2001:DB8::1` stays upper-case), except that
//! a bracketed IPv6 literal such as `[fc00::1]` is stored without its brackets.

use std::fmt;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

use super::scope::{self, Scope};

/// The only hostname that is never sent to a resolver.
pub const LOCALHOST: &str = "localhost";

/// The syntactic form of an address literal. Variant order is sort order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AddressKind {
    Ipv4,
    Ipv6,
    HostName,
}

impl AddressKind {
    /// Derives the kind of a literal by trying to parse it as an IP.
    pub fn of(value: &str) -> Self {
        if value.parse::<Ipv4Addr>().is_ok() {
            AddressKind::Ipv4
        } else if value.parse::<Ipv6Addr>().is_ok() {
            AddressKind::Ipv6
        } else {
            AddressKind::HostName
        }
    }

    pub fn is_numeric(self) -> bool {
        !matches!(self, AddressKind::HostName)
    }
}

impl fmt::Display for AddressKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AddressKind::Ipv4 => "ipv4",
            AddressKind::Ipv6 => "ipv6",
            AddressKind::HostName => "hostname",
        };
        f.write_str(name)
    }
}

/// An immutable address value. Equality is by `(value, scope)`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Address {
    value: String,
    scope: Scope,
    kind: AddressKind,
}

impl Address {
    /// Creates an address whose scope is classified from the literal.
    pub fn new(value: impl Into<String>) -> Self {
        Self::scoped(value, Scope::Unknown)
    }

    /// Creates an address with a scope known out-of-band (e.g. reported by a
    /// cloud API). [`Scope::Unknown`] means "no override".
    pub fn scoped(value: impl Into<String>, scope: Scope) -> Self {
        let value: String = strip_brackets(value.into());
        let kind: AddressKind = AddressKind::of(&value);
        let scope: Scope = match scope {
            Scope::Unknown => scope::classify(&value, kind),
            explicit => explicit,
        };
        Self { value, scope, kind }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn scope(&self) -> Scope {
        self.scope
    }

    pub fn kind(&self) -> AddressKind {
        self.kind
    }

    pub fn is_hostname(&self) -> bool {
        self.kind == AddressKind::HostName
    }

    pub fn is_localhost(&self) -> bool {
        self.value == LOCALHOST
    }

    /// Returns the parsed IP for numeric addresses.
    pub fn ip(&self) -> Option<IpAddr> {
        match self.kind {
            AddressKind::HostName => None,
            _ => self.value.parse().ok(),
        }
    }
}

impl From<IpAddr> for Address {
    fn from(ip: IpAddr) -> Self {
        Self::new(ip.to_string())
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

/// Builds one [`Address`] per literal, in order.
pub fn new_addresses<I, S>(values: I) -> Vec<Address>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    values.into_iter().map(Address::new).collect()
}

fn strip_brackets(value: String) -> String {
    let inner = value
        .strip_prefix('[')
        .and_then(|rest| rest.strip_suffix(']'))
        .filter(|inner| inner.parse::<Ipv6Addr>().is_ok());
    match inner {
        Some(inner) => inner.to_string(),
        None => value,
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
