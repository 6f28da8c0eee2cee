use std::time::Duration;

use crate::terminal::colors;
use colored::*;
use peerdial_common::network::address::AddressKind;
use peerdial_common::network::hostport::HostPort;
use peerdial_common::network::scope::Scope;

pub type Detail = (String, ColoredString);

pub fn scope_colored(scope: Scope) -> ColoredString {
    let name: String = scope.to_string();
    match scope {
        Scope::Public => name.bright_green(),
        Scope::CloudLocal => name.cyan(),
        Scope::MachineLocal => name.yellow(),
        Scope::LinkLocal => name.magenta(),
        Scope::Unknown => name.dimmed(),
    }
}

pub fn endpoint_colored(hp: &HostPort) -> ColoredString {
    let color: Color = match hp.address().kind() {
        AddressKind::Ipv4 => colors::IPV4_ADDR,
        AddressKind::Ipv6 => colors::IPV6_ADDR,
        AddressKind::HostName => colors::HOSTNAME,
    };
    hp.to_string().color(color)
}

pub fn latency(duration: Duration) -> ColoredString {
    format!("{:.2}ms", duration.as_secs_f64() * 1000.0).bold().yellow()
}

pub fn host_port_details(hp: &HostPort, q_level: u8) -> Vec<Detail> {
    let mut details: Vec<Detail> = vec![("Scope".to_string(), scope_colored(hp.scope()))];
    if q_level == 0 {
        details.push((
            "Kind".to_string(),
            hp.address().kind().to_string().color(colors::TEXT_DEFAULT),
        ));
        details.push(("Port".to_string(), hp.port().to_string().color(colors::ACCENT)));
    }
    details
}
