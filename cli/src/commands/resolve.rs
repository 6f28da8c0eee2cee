use anyhow::ensure;
use peerdial_common::config::Config;
use peerdial_common::network::hostport::HostPort;
use peerdial_core::resolver::{SystemResolver, resolve_or_drop_hostnames};
use tracing::Instrument;

use crate::mprint;
use crate::terminal::{format, print, spinner};

pub async fn resolve(endpoints: &[HostPort], cfg: &Config) -> anyhow::Result<()> {
    ensure!(!cfg.no_dns, "resolve cannot run with --no-dns");

    let hostnames: usize = endpoints
        .iter()
        .filter(|hp| hp.address().is_hostname())
        .count();
    let resolved: Vec<HostPort> = resolve_or_drop_hostnames(&SystemResolver, endpoints)
        .instrument(spinner::resolve_span(hostnames))
        .await;

    print::header("resolved endpoints", cfg.quiet);
    if resolved.is_empty() {
        print::no_results("resolvable endpoints");
        return Ok(());
    }
    for (idx, hp) in resolved.iter().enumerate() {
        match cfg.quiet {
            0 => print::tree_head(idx, &format::endpoint_colored(hp).to_string()),
            _ => mprint!(&hp.to_string()),
        }
    }
    Ok(())
}
