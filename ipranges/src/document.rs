use std::str::FromStr;

use anyhow::Context;
use ipnetwork::IpNetwork;
use serde::Deserialize;

/// The published `ip-ranges.json`. Fields not needed for lookups are ignored.
#[derive(Deserialize, Debug, Clone, Default)]
pub struct IpRangesDocument {
    #[serde(rename = "syncToken", default)]
    pub sync_token:    String,
    #[serde(rename = "createDate", default)]
    pub create_date:   String,
    pub prefixes:      Vec<JsonIpPrefix>,
    #[serde(default)]
    pub ipv6_prefixes: Vec<JsonIpv6Prefix>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct JsonIpPrefix {
    pub ip_prefix:            String,
    pub region:               String,
    #[serde(default)]
    pub service:              String,
    #[serde(default)]
    pub network_border_group: String,
}

#[derive(Deserialize, Debug, Clone)]
pub struct JsonIpv6Prefix {
    pub ipv6_prefix:          String,
    pub region:               String,
    #[serde(default)]
    pub service:              String,
    #[serde(default)]
    pub network_border_group: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct IpPrefixEntry {
    pub network:              IpNetwork,
    pub region:               String,
    pub service:              String,
    pub network_border_group: String,
}

impl IpRangesDocument {
    pub fn from_json(json: &str) -> anyhow::Result<IpRangesDocument> {
        serde_json::from_str(json).context("IP ranges document is not valid JSON")
    }

    /// IPv4 prefixes in document order, then IPv6 prefixes in document order.
    pub fn entries(&self) -> anyhow::Result<Vec<IpPrefixEntry>> {
        let v4 = self.prefixes.iter().map(|p| {
            entry(&p.ip_prefix, &p.region, &p.service, &p.network_border_group)
        });
        let v6 = self.ipv6_prefixes.iter().map(|p| {
            entry(&p.ipv6_prefix, &p.region, &p.service, &p.network_border_group)
        });

        v4.chain(v6).collect()
    }
}

fn entry(prefix: &str, region: &str, service: &str, network_border_group: &str) -> anyhow::Result<IpPrefixEntry> {
    let network = IpNetwork::from_str(prefix).with_context(|| format!("Invalid IP prefix {:?}", prefix))?;

    Ok(IpPrefixEntry {
        network,
        region: region.to_string(),
        service: service.to_string(),
        network_border_group: network_border_group.to_string(),
    })
}
