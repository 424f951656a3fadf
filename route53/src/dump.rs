use anyhow::Context;
use aws_recon_core::{AwsReconConfig, SessionError};

use crate::{
    addr::hosted_zone_id,
    connector::{DnsZoneApi, ProfileConnector},
    pages::RecordSetPages,
    resource::RecordSetPage,
    subdomains::SubdomainSet,
};

#[derive(Debug, Clone)]
pub struct DumpOptions {
    pub max_hosted_zones: i32,
}

impl From<&AwsReconConfig> for DumpOptions {
    fn from(config: &AwsReconConfig) -> Self {
        Self {
            max_hosted_zones: config.max_hosted_zones,
        }
    }
}

impl Default for DumpOptions {
    fn default() -> Self {
        Self::from(&AwsReconConfig::default())
    }
}

/// What happened to one profile during a dump.
#[derive(Debug)]
pub enum ProfileOutcome {
    Enumerated {
        profile:     String,
        account_id:  String,
        zones:       usize,
        record_sets: usize,
        new_names:   usize,
    },
    Skipped {
        profile: String,
        reason:  SessionError,
    },
}

impl ProfileOutcome {
    pub fn profile(&self) -> &str {
        match self {
            ProfileOutcome::Enumerated { profile, .. } => profile,
            ProfileOutcome::Skipped { profile, .. } => profile,
        }
    }

    pub fn is_skipped(&self) -> bool {
        matches!(self, ProfileOutcome::Skipped { .. })
    }
}

#[derive(Debug, Default)]
pub struct DumpReport {
    pub subdomains: SubdomainSet,
    pub outcomes:   Vec<ProfileOutcome>,
}

/// Trailing ids of up to `max_hosted_zones` zones. An empty account is logged, not fatal.
pub async fn collect_zone_ids<A: DnsZoneApi + ?Sized>(
    api: &A,
    profile: &str,
    max_hosted_zones: i32,
) -> anyhow::Result<Vec<String>> {
    tracing::info!("Getting all the hosted zones on Route53 for {}", profile);

    let listing = api
        .list_hosted_zones(max_hosted_zones)
        .await
        .with_context(|| format!("Failed to list hosted zones for profile {}", profile))?;

    if listing.zones.is_empty() {
        tracing::error!("No hosted zones accessible on Route53 for {}", profile);
    }

    if listing.truncated {
        tracing::warn!(
            "{} has more than {} hosted zones, the rest are not enumerated",
            profile,
            max_hosted_zones
        );
    }

    Ok(listing
        .zones
        .iter()
        .map(|hz| {
            let id = hosted_zone_id(&hz.id);
            tracing::debug!("Hosted zone {} ({}) - {}", hz.name, id, profile);
            id.to_string()
        })
        .collect())
}

/// Every record-set page of every zone, in zone order.
pub async fn collect_record_sets<A: DnsZoneApi + ?Sized>(
    api: &A,
    profile: &str,
    zone_ids: &[String],
) -> anyhow::Result<Vec<RecordSetPage>> {
    let mut pages = Vec::new();

    for zone_id in zone_ids {
        tracing::info!("Getting all the DNS resource records for {} - {}", zone_id, profile);

        let zone_pages = RecordSetPages::new(api, zone_id.as_str())
            .try_collect()
            .await
            .with_context(|| format!("Failed to list record sets of {} for profile {}", zone_id, profile))?;

        pages.extend(zone_pages);
    }

    Ok(pages)
}

pub fn extract_subdomains(pages: &[RecordSetPage], profile: &str, subdomains: &mut SubdomainSet) -> usize {
    tracing::info!("Parsing the record sets and extracting subdomains - {}", profile);
    subdomains.extend_from_pages(pages)
}

/// Walks `profiles` in order. A profile that fails to authenticate is logged
/// and skipped; any later API failure aborts the whole dump.
pub async fn dump_subdomains<C: ProfileConnector + ?Sized>(
    connector: &C,
    profiles: &[String],
    options: &DumpOptions,
) -> anyhow::Result<DumpReport> {
    let mut report = DumpReport::default();

    for profile in profiles {
        tracing::info!("Enumerating subdomains for profile {}", profile);

        let session = match connector.connect(profile).await {
            Ok(session) => session,
            Err(reason) => {
                tracing::error!("Error in accessing AWS profile {}: {}", profile, reason);
                report.outcomes.push(ProfileOutcome::Skipped {
                    profile: profile.clone(),
                    reason,
                });
                continue;
            }
        };

        let zone_ids = collect_zone_ids(&session, profile, options.max_hosted_zones).await?;
        let pages = collect_record_sets(&session, profile, &zone_ids).await?;
        let new_names = extract_subdomains(&pages, profile, &mut report.subdomains);

        report.outcomes.push(ProfileOutcome::Enumerated {
            profile: profile.clone(),
            account_id: session.account_id().to_string(),
            zones: zone_ids.len(),
            record_sets: pages.iter().map(|page| page.record_sets.len()).sum(),
            new_names,
        });
    }

    Ok(report)
}
