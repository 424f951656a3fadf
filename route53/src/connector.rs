use async_trait::async_trait;
use aws_recon_core::{AwsReconConfig, SessionError, open_profile_session};

use crate::resource::{HostedZoneListing, RecordCursor, RecordSetPage};

pub mod list;

/// The slice of the Route53 API the subdomain dump needs, scoped to one
/// authenticated profile.
#[async_trait]
pub trait DnsZoneApi: Send + Sync {
    fn account_id(&self) -> &str;

    /// At most `max_items` hosted zones.
    async fn list_hosted_zones(&self, max_items: i32) -> anyhow::Result<HostedZoneListing>;

    /// One page of record sets. `start` is None for the first page.
    async fn list_record_set_page(
        &self,
        hosted_zone_id: &str,
        start: Option<RecordCursor>,
    ) -> anyhow::Result<RecordSetPage>;
}

/// Turns a named profile into an authenticated [`DnsZoneApi`].
#[async_trait]
pub trait ProfileConnector: Send + Sync {
    type Session: DnsZoneApi;

    async fn connect(&self, profile: &str) -> Result<Self::Session, SessionError>;
}

pub struct Route53Connector {
    config: AwsReconConfig,
}

impl Route53Connector {
    pub fn new(config: AwsReconConfig) -> Self {
        Self { config }
    }
}

pub struct Route53Session {
    client:     aws_sdk_route53::Client,
    account_id: String,
}

#[async_trait]
impl ProfileConnector for Route53Connector {
    type Session = Route53Session;

    async fn connect(&self, profile: &str) -> Result<Route53Session, SessionError> {
        let session = open_profile_session(profile, &self.config.route53_region, &self.config).await?;

        Ok(Route53Session {
            client:     aws_sdk_route53::Client::new(&session.sdk_config),
            account_id: session.account_id,
        })
    }
}
