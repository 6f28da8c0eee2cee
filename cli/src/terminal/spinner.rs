use colored::*;
use indicatif::ProgressStyle;
use tracing::{Span, info_span};
use tracing_indicatif::span_ext::IndicatifSpanExt;

const TICKS: &[&str] = &[
    "▁▁▁▁▁",
    "▁▂▂▂▁",
    "▁▄▂▄▁",
    "▂▄▆▄▂",
    "▄▆█▆▄",
    "▂▄▆▄▂",
    "▁▄▂▄▁",
    "▁▂▂▂▁",
];

fn spinner_style() -> ProgressStyle {
    ProgressStyle::with_template("{spinner:.blue} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
        .tick_strings(TICKS)
}

/// A span that shows a spinner for as long as it is entered.
pub fn race_span(candidates: usize) -> Span {
    let span = info_span!("race", indicatif.pb_show = true);
    span.pb_set_style(&spinner_style());
    span.pb_set_message(&format!(
        "Racing {} endpoints...",
        candidates.to_string().green().bold()
    ));
    span
}

pub fn resolve_span(hostnames: usize) -> Span {
    let span = info_span!("resolve", indicatif.pb_show = true);
    span.pb_set_style(&spinner_style());
    span.pb_set_message(&format!(
        "Resolving {} hostnames...",
        hostnames.to_string().green().bold()
    ));
    span
}
