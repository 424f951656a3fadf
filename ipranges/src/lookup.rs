use std::net::IpAddr;

use anyhow::Context;

use crate::document::IpPrefixEntry;

pub const UNKNOWN_REGION: &str = "Unknown";

pub fn parse_address(s: &str) -> anyhow::Result<IpAddr> {
    s.parse()
        .with_context(|| format!("{:?} is not a valid IPv4 or IPv6 address", s))
}

/// First entry whose network contains `addr`. Overlapping prefixes resolve to
/// whichever comes first in document order.
pub fn find_prefix(entries: &[IpPrefixEntry], addr: IpAddr) -> Option<&IpPrefixEntry> {
    entries.iter().find(|entry| entry.network.contains(addr))
}

pub fn resolve_region(entries: &[IpPrefixEntry], addr: IpAddr) -> &str {
    find_prefix(entries, addr)
        .map(|entry| entry.region.as_str())
        .unwrap_or(UNKNOWN_REGION)
}
