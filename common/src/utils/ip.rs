use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

/// Coarse reachability class of a literal IP, before it is mapped onto a [`Scope`].
///
/// [`Scope`]: crate::network::scope::Scope
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum IpRangeClass {
    Loopback,
    LinkLocal,
    Private,
    #[default]
    Global,
}

pub fn get_ip_range_class(ip_addr: &IpAddr) -> IpRangeClass {
    match ip_addr {
        IpAddr::V4(ipv4_addr) => get_ipv4_range_class(ipv4_addr),
        IpAddr::V6(ipv6_addr) => get_ipv6_range_class(ipv6_addr),
    }
}

pub fn get_ipv4_range_class(ipv4_addr: &Ipv4Addr) -> IpRangeClass {
    match true {
        _ if ipv4_addr.is_loopback() => IpRangeClass::Loopback,
        _ if ipv4_addr.is_link_local() => IpRangeClass::LinkLocal,
        _ if is_link_local_multicast_v4(ipv4_addr) => IpRangeClass::LinkLocal,
        _ if ipv4_addr.is_private() => IpRangeClass::Private,
        _ => IpRangeClass::Global,
    }
}

pub fn get_ipv6_range_class(ipv6_addr: &Ipv6Addr) -> IpRangeClass {
    // ::ffff:a.b.c.d carries an IPv4 address and is judged by it
    if let Some(mapped) = ipv6_addr.to_ipv4_mapped() {
        return get_ipv4_range_class(&mapped);
    }
    match true {
        _ if ipv6_addr.is_loopback() => IpRangeClass::Loopback,
        _ if ipv6_addr.is_unicast_link_local() => IpRangeClass::LinkLocal,
        _ if is_interface_local_multicast(ipv6_addr) => IpRangeClass::LinkLocal,
        _ if is_link_local_multicast_v6(ipv6_addr) => IpRangeClass::LinkLocal,
        _ if ipv6_addr.is_unique_local() => IpRangeClass::Private,
        _ => IpRangeClass::Global,
    }
}

/// 224.0.0.0/24
pub fn is_link_local_multicast_v4(ipv4_addr: &Ipv4Addr) -> bool {
    let octets = ipv4_addr.octets();
    octets[0] == 224 && octets[1] == 0 && octets[2] == 0
}

/// ff01::/16 (and any ffX1:: with flags set)
pub fn is_interface_local_multicast(ipv6_addr: &Ipv6Addr) -> bool {
    let octets = ipv6_addr.octets();
    octets[0] == 0xff && octets[1] & 0x0f == 0x01
}

/// ff02::/16 (and any ffX2:: with flags set)
pub fn is_link_local_multicast_v6(ipv6_addr: &Ipv6Addr) -> bool {
    let octets = ipv6_addr.octets();
    octets[0] == 0xff && octets[1] & 0x0f == 0x02
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
