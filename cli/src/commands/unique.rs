use peerdial_common::config::Config;
use peerdial_common::network::hostport::HostPort;
use peerdial_core::unique::unique_host_ports;
use tokio_util::sync::CancellationToken;
use tracing::warn;

use crate::mprint;
use crate::terminal::{format, print};

/// Streams the distinct endpoints; Ctrl-C stops the stream early.
pub async fn unique(endpoints: Vec<HostPort>, cfg: &Config) -> anyhow::Result<()> {
    let total: usize = endpoints.len();
    let cancel = CancellationToken::new();
    let on_interrupt = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            on_interrupt.cancel();
        }
    });

    print::header("unique endpoints", cfg.quiet);
    let mut stream = unique_host_ports(cancel.clone(), endpoints);
    let mut count: usize = 0;
    while let Some(hp) = stream.next().await {
        match cfg.quiet {
            0 => print::tree_head(count, &format::endpoint_colored(&hp).to_string()),
            _ => mprint!(&hp.to_string()),
        }
        count += 1;
    }

    if cancel.is_cancelled() {
        warn!("interrupted after {count} endpoints");
    } else if cfg.quiet == 0 {
        mprint!();
        print::centerln(&format!("{count} of {total} endpoints are distinct"));
    }
    Ok(())
}
