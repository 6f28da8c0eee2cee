pub mod race;
pub mod resolve;
pub mod select;
pub mod unique;

use std::time::Duration;

use clap::{ArgAction, Parser, Subcommand};
use peerdial_common::config::{Config, DEFAULT_DIAL_TIMEOUT};
use peerdial_common::network::hostport::HostPort;

#[derive(Parser)]
#[command(name = "peerdial")]
#[command(about = "Pick the best address to reach a peer.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,

    /// Per-attempt TCP connect timeout, in milliseconds
    #[arg(long, global = true, default_value_t = DEFAULT_DIAL_TIMEOUT.as_millis() as u64)]
    pub timeout_ms: u64,

    /// Accept machine-local endpoints for internal selection
    #[arg(long, global = true)]
    pub prefer_machine_local: bool,

    /// Never resolve hostnames
    #[arg(long, global = true)]
    pub no_dns: bool,

    /// Less output; repeat for even less
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub quiet: u8,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Order endpoints from most to least preferred
    #[command(alias = "o")]
    Sort { endpoints: Vec<HostPort> },
    /// Pick the single best endpoint
    #[command(alias = "s")]
    Select {
        /// Select for use inside the cloud instead of from outside
        #[arg(long)]
        internal: bool,
        endpoints: Vec<HostPort>,
    },
    /// Drop endpoints that are never reachable from another machine
    #[command(alias = "f")]
    Filter { endpoints: Vec<HostPort> },
    /// Replace hostnames with the addresses they resolve to
    #[command(alias = "r")]
    Resolve { endpoints: Vec<HostPort> },
    /// Stream endpoints with duplicates removed
    #[command(alias = "u")]
    Unique { endpoints: Vec<HostPort> },
    /// Dial every candidate and report the fastest
    #[command(alias = "x")]
    Race { endpoints: Vec<HostPort> },
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn config(&self) -> Config {
        Config {
            dial_timeout: Duration::from_millis(self.timeout_ms),
            prefer_machine_local: self.prefer_machine_local,
            no_dns: self.no_dns,
            quiet: self.quiet,
        }
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
