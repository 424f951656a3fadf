use async_trait::async_trait;

use crate::{
    resource::{HostedZoneListing, RecordCursor, RecordSetPage},
    util::{list_hosted_zones, list_resource_record_set_page},
};

use super::{DnsZoneApi, Route53Session};

#[async_trait]
impl DnsZoneApi for Route53Session {
    fn account_id(&self) -> &str {
        &self.account_id
    }

    async fn list_hosted_zones(&self, max_items: i32) -> anyhow::Result<HostedZoneListing> {
        list_hosted_zones(&self.client, max_items).await
    }

    async fn list_record_set_page(
        &self,
        hosted_zone_id: &str,
        start: Option<RecordCursor>,
    ) -> anyhow::Result<RecordSetPage> {
        list_resource_record_set_page(&self.client, hosted_zone_id, start).await
    }
}
