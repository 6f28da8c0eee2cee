use colored::*;
use peerdial_common::config::Config;
use peerdial_common::network::hostport::HostPort;
use peerdial_common::network::scope::sorted_host_ports;
use peerdial_core::selection::{
    filter_unusable_host_ports, select_internal_host_port, select_public_host_port,
};

use crate::mprint;
use crate::terminal::{colors, format, print};

pub fn sort(endpoints: &[HostPort], cfg: &Config) {
    print::header("sorted endpoints", cfg.quiet);
    print_endpoints(&sorted_host_ports(endpoints), cfg);
}

pub fn filter(endpoints: &[HostPort], cfg: &Config) {
    let usable: Vec<HostPort> = filter_unusable_host_ports(endpoints);
    print::header("usable endpoints", cfg.quiet);
    print_endpoints(&usable, cfg);
    if cfg.quiet == 0 {
        mprint!();
        let dropped: usize = endpoints.len() - usable.len();
        print::aligned_line("dropped", dropped.to_string().color(colors::ACCENT), 7);
    }
}

pub fn select(endpoints: &[HostPort], internal: bool, cfg: &Config) {
    let (title, selected) = match internal {
        true => (
            "internal",
            select_internal_host_port(endpoints, cfg.prefer_machine_local),
        ),
        false => ("public", select_public_host_port(endpoints)),
    };

    if selected.is_empty() {
        print::no_results("endpoint to select");
        return;
    }

    match cfg.quiet {
        0 => {
            print::header("selection", cfg.quiet);
            print::aligned_line(title, selected.bold().green(), title.len());
        }
        _ => mprint!(&selected),
    }
}

fn print_endpoints(endpoints: &[HostPort], cfg: &Config) {
    if endpoints.is_empty() {
        print::no_results("endpoints");
        return;
    }
    for (idx, hp) in endpoints.iter().enumerate() {
        match cfg.quiet {
            2.. => mprint!(&hp.to_string()),
            _ => {
                print::tree_head(idx, &format::endpoint_colored(hp).to_string());
                print::as_tree_one_level(format::host_port_details(hp, cfg.quiet));
            }
        }
    }
}
