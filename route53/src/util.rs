use anyhow::Context;
use aws_sdk_route53::types::{ResourceRecordSet, RrType};

use crate::resource::{HostedZone, HostedZoneListing, RecordCursor, RecordSet, RecordSetPage};

/// ListHostedZones never returns more than this many zones per call.
pub const HOSTED_ZONES_PAGE_LIMIT: i32 = 100;

/// Lists at most `max_items` hosted zones, following markers across pages.
pub async fn list_hosted_zones(
    client: &aws_sdk_route53::Client,
    max_items: i32,
) -> anyhow::Result<HostedZoneListing> {
    let mut results = HostedZoneListing::default();

    if max_items <= 0 {
        tracing::debug!("max_items = {}, not listing hosted zones", max_items);
        return Ok(results);
    }

    let mut marker: Option<String> = None;

    loop {
        let remaining = max_items - results.zones.len() as i32;

        let list_result = client
            .list_hosted_zones()
            .max_items(remaining.min(HOSTED_ZONES_PAGE_LIMIT))
            .set_marker(marker)
            .send()
            .await
            .context("route53:ListHostedZones failed")?;

        for hz in list_result.hosted_zones {
            results.zones.push(HostedZone {
                id:   hz.id,
                name: hz.name,
            });
        }

        if !list_result.is_truncated {
            break;
        }

        if results.zones.len() as i32 >= max_items {
            results.truncated = true;
            break;
        }

        let Some(next_marker) = list_result.next_marker else {
            tracing::warn!("ListHostedZones reported more zones but returned no marker");
            results.truncated = true;
            break;
        };
        marker = Some(next_marker);
    }

    Ok(results)
}

/// Fetches one page of record sets, starting at `start` or at the top of the zone.
pub async fn list_resource_record_set_page(
    client: &aws_sdk_route53::Client,
    hosted_zone_id: &str,
    start: Option<RecordCursor>,
) -> anyhow::Result<RecordSetPage> {
    let mut request = client.list_resource_record_sets().hosted_zone_id(hosted_zone_id);

    if let Some(start) = start {
        request = request
            .start_record_name(start.name)
            .set_start_record_type(start.r#type.as_deref().map(RrType::from))
            .set_start_record_identifier(start.identifier);
    }

    let list_result = request
        .send()
        .await
        .with_context(|| format!("route53:ListResourceRecordSets failed for hosted zone {}", hosted_zone_id))?;

    let record_sets = list_result
        .resource_record_sets
        .into_iter()
        .map(record_set_from_sdk)
        .collect();

    let next = if list_result.is_truncated {
        list_result.next_record_name.map(|name| RecordCursor {
            name,
            r#type: list_result.next_record_type.map(|t| t.as_str().to_string()),
            identifier: list_result.next_record_identifier,
        })
    } else {
        None
    };

    Ok(RecordSetPage { record_sets, next })
}

fn record_set_from_sdk(record: ResourceRecordSet) -> RecordSet {
    let mut values: Vec<String> = record
        .resource_records
        .unwrap_or_default()
        .into_iter()
        .map(|r| r.value)
        .collect();

    if let Some(alias_target) = record.alias_target {
        values.push(alias_target.dns_name);
    }

    RecordSet {
        name: record.name,
        r#type: record.r#type.as_str().to_string(),
        values,
    }
}
