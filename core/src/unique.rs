//! # Streaming Deduplication
//!
//! Removes duplicate endpoints from a possibly huge sequence without
//! materialising the output. A single producer task walks the input once,
//! remembers what it has seen and hands first occurrences over a channel
//! with room for one item, so it only runs ahead of the consumer by one
//! element.
//!
//! Cancelling the token stops both sides at their next step.

use std::collections::HashSet;

use peerdial_common::network::hostport::HostPort;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::trace;

/// Consumer half of [`unique_host_ports`].
#[derive(Debug)]
pub struct UniqueHostPorts {
    rx: mpsc::Receiver<HostPort>,
    cancel: CancellationToken,
}

/// Starts deduplicating `input` on a background task.
///
/// Must be called from within a tokio runtime.
pub fn unique_host_ports<I>(cancel: CancellationToken, input: I) -> UniqueHostPorts
where
    I: IntoIterator<Item = HostPort>,
    I::IntoIter: Send + 'static,
{
    let (tx, rx) = mpsc::channel::<HostPort>(1);
    tokio::spawn(produce(cancel.clone(), input.into_iter(), tx));
    UniqueHostPorts { rx, cancel }
}

async fn produce<I>(cancel: CancellationToken, input: I, tx: mpsc::Sender<HostPort>)
where
    I: Iterator<Item = HostPort>,
{
    let mut seen: HashSet<HostPort> = HashSet::new();
    let mut sent: usize = 0;

    for hp in input {
        if cancel.is_cancelled() {
            break;
        }
        if seen.contains(&hp) {
            continue;
        }
        seen.insert(hp.clone());

        tokio::select! {
            biased;
            _ = cancel.cancelled() => break,
            res = tx.send(hp) => {
                if res.is_err() {
                    break;
                }
                sent += 1;
            }
        }
    }

    trace!(sent, cancelled = cancel.is_cancelled(), "unique host ports producer done");
}

impl UniqueHostPorts {
    /// The next distinct endpoint, or `None` once the stream is finished,
    /// either because the input ran out or the token was cancelled.
    pub async fn next(&mut self) -> Option<HostPort> {
        if self.cancel.is_cancelled() {
            self.rx.close();
            return None;
        }
        tokio::select! {
            biased;
            _ = self.cancel.cancelled() => {
                self.rx.close();
                None
            }
            hp = self.rx.recv() => hp,
        }
    }

    /// Whether no more output will ever be produced. Does not consume anything.
    pub fn is_finished(&self) -> bool {
        self.cancel.is_cancelled() || (self.rx.is_closed() && self.rx.is_empty())
    }

    /// Drains whatever is left.
    pub async fn collect(mut self) -> Vec<HostPort> {
        let mut out: Vec<HostPort> = Vec::new();
        while let Some(hp) = self.next().await {
            out.push(hp);
        }
        out
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
