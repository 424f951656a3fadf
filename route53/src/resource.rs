#[derive(Debug, Clone, PartialEq)]
pub struct HostedZone {
    /// Path-like id as returned by ListHostedZones, e.g. `/hostedzone/Z123`.
    pub id:   String,
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct HostedZoneListing {
    pub zones:     Vec<HostedZone>,
    /// The account holds more zones than were requested.
    pub truncated: bool,
}

/// A Route53 DNS record set. Only `name` feeds the subdomain dump.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordSet {
    pub name:   String,
    pub r#type: String,
    /// Record values, or the alias target's DNS name for alias records.
    pub values: Vec<String>,
}

impl RecordSet {
    pub fn new(name: impl Into<String>, r#type: impl Into<String>) -> Self {
        Self {
            name:   name.into(),
            r#type: r#type.into(),
            values: Vec::new(),
        }
    }
}

/// Where the next page of ListResourceRecordSets starts.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordCursor {
    pub name:       String,
    pub r#type:     Option<String>,
    pub identifier: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordSetPage {
    pub record_sets: Vec<RecordSet>,
    /// None on the last page.
    pub next:        Option<RecordCursor>,
}
