use crate::{
    connector::DnsZoneApi,
    resource::{RecordCursor, RecordSetPage},
};

enum PageState {
    Start,
    Next(RecordCursor),
    Done,
}

/// The record-set pages of one hosted zone, fetched lazily one call at a time.
///
/// The sequence is finite and cannot be restarted: once the last page or an
/// error has been yielded, `next` returns `None`.
pub struct RecordSetPages<'a, A: DnsZoneApi + ?Sized> {
    api:            &'a A,
    hosted_zone_id: String,
    state:          PageState,
}

impl<'a, A: DnsZoneApi + ?Sized> RecordSetPages<'a, A> {
    pub fn new(api: &'a A, hosted_zone_id: impl Into<String>) -> Self {
        Self {
            api,
            hosted_zone_id: hosted_zone_id.into(),
            state: PageState::Start,
        }
    }

    pub async fn next(&mut self) -> Option<anyhow::Result<RecordSetPage>> {
        let start = match std::mem::replace(&mut self.state, PageState::Done) {
            PageState::Done => return None,
            PageState::Start => None,
            PageState::Next(cursor) => Some(cursor),
        };

        match self.api.list_record_set_page(&self.hosted_zone_id, start).await {
            Ok(page) => {
                if let Some(ref cursor) = page.next {
                    self.state = PageState::Next(cursor.clone());
                }
                Some(Ok(page))
            }
            Err(e) => Some(Err(e)),
        }
    }

    /// Drains the sequence, stopping at the first error.
    pub async fn try_collect(mut self) -> anyhow::Result<Vec<RecordSetPage>> {
        let mut pages = Vec::new();
        while let Some(page) = self.next().await {
            pages.push(page?);
        }
        Ok(pages)
    }
}
