//! Error taxonomy shared by the `peerdial` crates.
//!
//! Only [`ParseError`] and [`RaceError`] ever reach a caller as a failure.
//! [`ResolveError`] and [`DialError`] are recovered from locally: a hostname
//! that does not resolve is dropped, a dial that fails loses the race.

use std::io;
use std::num::ParseIntError;

use thiserror::Error;

/// Why the address half of a `host:port` literal was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AddrErrorReason {
    #[error("missing port in address")]
    MissingPort,
    #[error("too many colons in address")]
    TooManyColons,
    #[error("missing ']' in address")]
    MissingBracket,
    #[error("unexpected '{0}' in address")]
    UnexpectedBracket(char),
}

/// A malformed `host:port` literal.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("cannot parse {literal:?} as address:port: {reason} {literal}")]
    Address {
        literal: String,
        reason: AddrErrorReason,
    },
    #[error("cannot parse {literal:?} port: {source}")]
    Port {
        literal: String,
        source: ParseIntError,
    },
}

impl ParseError {
    /// The literal that failed to parse.
    pub fn literal(&self) -> &str {
        match self {
            ParseError::Address { literal, .. } | ParseError::Port { literal, .. } => literal,
        }
    }

    pub fn is_missing_port(&self) -> bool {
        matches!(
            self,
            ParseError::Address {
                reason: AddrErrorReason::MissingPort,
                ..
            }
        )
    }
}

/// A single hostname could not be resolved.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("lookup {host}: {reason}")]
pub struct ResolveError {
    pub host: String,
    pub reason: String,
}

impl ResolveError {
    pub fn new(host: impl Into<String>, reason: impl ToString) -> Self {
        Self {
            host: host.into(),
            reason: reason.to_string(),
        }
    }
}

/// A single connection attempt failed.
#[derive(Debug, Error)]
#[error("dial {endpoint}: {source}")]
pub struct DialError {
    pub endpoint: String,
    pub source: io::Error,
}

impl DialError {
    pub fn new(endpoint: impl Into<String>, source: io::Error) -> Self {
        Self {
            endpoint: endpoint.into(),
            source,
        }
    }
}

const SUMMARY_LIMIT: usize = 3;

/// The connectivity race produced no winner.
#[derive(Debug, Error)]
pub enum RaceError {
    #[error("cannot connect to any address: {}", summarize(.attempted, .failures))]
    NoReachableEndpoint {
        attempted: usize,
        failures: Vec<DialError>,
    },
}

fn summarize(attempted: &usize, failures: &[DialError]) -> String {
    if *attempted == 0 {
        return String::from("no endpoints to dial");
    }
    let mut shown: Vec<String> = failures
        .iter()
        .take(SUMMARY_LIMIT)
        .map(ToString::to_string)
        .collect();
    if failures.len() > SUMMARY_LIMIT {
        shown.push(format!("and {} more", failures.len() - SUMMARY_LIMIT));
    }
    format!(
        "{} of {} attempts failed ({})",
        failures.len(),
        attempted,
        shown.join("; ")
    )
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
