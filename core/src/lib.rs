//! Endpoint selection and connectivity racing for `peerdial`.
//!
//! The value types live in `peerdial-common`; this crate adds everything that
//! needs a capability ([`ports`]) or a runtime: resolving hostnames, streaming
//! dedup and racing TCP dials.

pub mod clock;
pub mod discovery;
pub mod network;
pub mod ports;
pub mod resolver;
pub mod selection;
pub mod unique;
