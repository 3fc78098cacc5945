//! Host network discovery.
//!
//! Reports the LAN-reachable IPv4 addresses of this machine so peers know
//! where to point their browsers. Nothing is cached; every call asks the OS.

use std::net::IpAddr;

use serde::Serialize;
use utoipa::ToSchema;

/// A non-loopback IPv4 address and the interface it belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct NetworkAddress {
    /// Interface name (e.g. `eth0`, `en0`).
    pub interface: String,
    /// Dotted-quad address.
    pub address: String,
}

/// Enumerate the host's non-loopback IPv4 addresses.
pub fn network_addresses() -> std::io::Result<Vec<NetworkAddress>> {
    let interfaces = if_addrs::get_if_addrs()?;

    Ok(lan_ipv4(
        interfaces
            .into_iter()
            .map(|iface| (iface.name.clone(), iface.ip(), iface.is_loopback())),
    ))
}

/// Keep IPv4, non-loopback entries in enumeration order.
fn lan_ipv4<I>(interfaces: I) -> Vec<NetworkAddress>
where
    I: IntoIterator<Item = (String, IpAddr, bool)>,
{
    interfaces
        .into_iter()
        .filter_map(|(name, ip, loopback)| match ip {
            IpAddr::V4(v4) if !loopback && !v4.is_loopback() => Some(NetworkAddress {
                interface: name,
                address: v4.to_string(),
            }),
            _ => None,
        })
        .collect()
}

/// Local hostname.
pub fn hostname() -> String {
    gethostname::gethostname().to_string_lossy().into_owned()
}

/// URLs a LAN peer can use to reach a server on `port`.
pub fn access_urls(addresses: &[NetworkAddress], port: u16) -> Vec<String> {
    addresses
        .iter()
        .map(|a| format!("http://{}:{}", a.address, port))
        .collect()
}
