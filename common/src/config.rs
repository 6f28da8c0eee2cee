use std::time::Duration;

pub const DEFAULT_DIAL_TIMEOUT: Duration = Duration::from_secs(2);

#[derive(Debug, Clone)]
pub struct Config {
    /// Upper bound for a single TCP connect, including resolving its host.
    ///
    /// The racer itself never times out; this is applied by the TCP dialer.
    pub dial_timeout: Duration,
    /// Accept machine-local endpoints when selecting an internal address.
    pub prefer_machine_local: bool,
    /// Skips hostname resolution entirely; hostnames are passed through as-is.
    pub no_dns: bool,
    pub quiet: u8,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dial_timeout: DEFAULT_DIAL_TIMEOUT,
            prefer_machine_local: false,
            no_dns: false,
            quiet: 0,
        }
    }
}
