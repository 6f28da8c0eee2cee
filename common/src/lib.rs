//! # Peerdial common types
//!
//! Value types shared by every `peerdial` crate:
//!
//! * **[`network`]**: addresses, host:port endpoints, scope classification and ordering.
//! * **[`error`]**: the error taxonomy (parse, resolve, dial and race failures).
//! * **[`config`]**: runtime settings handed from the CLI to the core services.
//!
//! Everything here is synchronous and side-effect free.

pub mod config;
pub mod error;
pub mod network;
pub mod utils;
