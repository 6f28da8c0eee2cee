use std::time::Instant;

use anyhow::Context;
use colored::*;
use peerdial_common::config::Config;
use peerdial_common::network::hostport::HostPort;
use peerdial_core::discovery::AddressDiscovery;
use peerdial_core::network::race::{DialOutcome, RaceReport};
use tracing::Instrument;

use crate::mprint;
use crate::terminal::format::{self, Detail};
use crate::terminal::{colors, print, spinner};

pub async fn race(endpoints: &[HostPort], cfg: &Config) -> anyhow::Result<()> {
    let discovery = AddressDiscovery::from_config(cfg.clone());

    let candidates: Vec<HostPort> = discovery.candidates(endpoints).await;
    let start_time: Instant = Instant::now();
    let report: RaceReport = discovery
        .racer()
        .race(&candidates)
        .instrument(spinner::race_span(candidates.len()))
        .await
        .with_context(|| format!("racing {} candidate endpoints", candidates.len()))?;

    race_ends(&report, start_time, cfg);
    Ok(())
}

fn race_ends(report: &RaceReport, start_time: Instant, cfg: &Config) {
    if cfg.quiet > 1 {
        mprint!(&report.winner.to_string());
        return;
    }

    print::header("connectivity race", cfg.quiet);
    if cfg.quiet == 0 {
        for (idx, outcome) in report.outcomes.iter().enumerate() {
            print::tree_head(idx, &format::endpoint_colored(&outcome.endpoint).to_string());
            print::as_tree_one_level(outcome_details(outcome));
        }
        print::fat_separator();
    }

    let winner: ColoredString = report.winner.to_string().bold().green();
    let latency: ColoredString = format::latency(report.latency);
    let total: ColoredString = format!("{:.2}s", start_time.elapsed().as_secs_f64())
        .bold()
        .yellow();
    let output: &ColoredString = &format!("Fastest endpoint: {winner} in {latency} (race took {total})")
        .color(colors::TEXT_DEFAULT);
    print::centerln(&output.to_string());
    print::end_of_program(cfg.quiet);
}

fn outcome_details(outcome: &DialOutcome) -> Vec<Detail> {
    let mut details: Vec<Detail> = vec![("Scope".to_string(), format::scope_colored(outcome.endpoint.scope()))];
    match &outcome.result {
        Ok(()) => {
            details.push(("Status".to_string(), "reachable".color(colors::SUCCESS)));
            details.push(("Latency".to_string(), format::latency(outcome.duration)));
        }
        Err(err) => {
            details.push(("Status".to_string(), "failed".color(colors::FAILURE)));
            details.push(("Error".to_string(), err.source.to_string().dimmed()));
        }
    }
    details
}
