//! End-to-end dump runs against in-memory Route53 accounts.

use std::collections::HashMap;

use anyhow::bail;
use async_trait::async_trait;
use aws_recon_core::SessionError;
use aws_recon_route53::{
    connector::{DnsZoneApi, ProfileConnector},
    dump::{DumpOptions, ProfileOutcome, dump_subdomains},
    pages::RecordSetPages,
    resource::{HostedZone, HostedZoneListing, RecordCursor, RecordSet, RecordSetPage},
};

/// One account: hosted zones plus the record-set pages of each zone, keyed by bare zone id.
#[derive(Clone, Default)]
struct FakeAccount {
    account_id: String,
    zones:      Vec<HostedZone>,
    pages:      HashMap<String, Vec<Vec<RecordSet>>>,
}

impl FakeAccount {
    fn new(account_id: &str) -> Self {
        Self {
            account_id: account_id.to_string(),
            ..Default::default()
        }
    }

    fn zone(mut self, id: &str, name: &str, pages: Vec<Vec<&str>>) -> Self {
        self.zones.push(HostedZone {
            id:   format!("/hostedzone/{}", id),
            name: name.to_string(),
        });
        self.pages.insert(
            id.to_string(),
            pages
                .into_iter()
                .map(|names| names.into_iter().map(|n| RecordSet::new(n, "A")).collect())
                .collect(),
        );
        self
    }

    /// A zone that is listed but whose records cannot be read.
    fn broken_zone(mut self, id: &str) -> Self {
        self.zones.push(HostedZone {
            id:   format!("/hostedzone/{}", id),
            name: format!("{}.example.", id),
        });
        self
    }
}

#[async_trait]
impl DnsZoneApi for FakeAccount {
    fn account_id(&self) -> &str {
        &self.account_id
    }

    async fn list_hosted_zones(&self, max_items: i32) -> anyhow::Result<HostedZoneListing> {
        let max_items = max_items.max(0) as usize;
        Ok(HostedZoneListing {
            zones:     self.zones.iter().take(max_items).cloned().collect(),
            truncated: self.zones.len() > max_items,
        })
    }

    async fn list_record_set_page(
        &self,
        hosted_zone_id: &str,
        start: Option<RecordCursor>,
    ) -> anyhow::Result<RecordSetPage> {
        let Some(pages) = self.pages.get(hosted_zone_id) else {
            bail!("NoSuchHostedZone: {}", hosted_zone_id);
        };

        let index = match start {
            Some(cursor) => cursor.name.parse::<usize>()?,
            None => 0,
        };

        let next = (index + 1 < pages.len()).then(|| RecordCursor {
            name:       (index + 1).to_string(),
            r#type:     Some(String::from("A")),
            identifier: None,
        });

        Ok(RecordSetPage {
            record_sets: pages.get(index).cloned().unwrap_or_default(),
            next,
        })
    }
}

/// Profiles not in `accounts` fail authentication.
#[derive(Default)]
struct FakeConnector {
    accounts: HashMap<String, FakeAccount>,
}

impl FakeConnector {
    fn with(mut self, profile: &str, account: FakeAccount) -> Self {
        self.accounts.insert(profile.to_string(), account);
        self
    }
}

#[async_trait]
impl ProfileConnector for FakeConnector {
    type Session = FakeAccount;

    async fn connect(&self, profile: &str) -> Result<FakeAccount, SessionError> {
        self.accounts
            .get(profile)
            .cloned()
            .ok_or_else(|| SessionError::CallerIdentity {
                profile: profile.to_string(),
                message: String::from("The config profile could not be found"),
            })
    }
}

fn profiles(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| s.to_string()).collect()
}

#[tokio::test]
async fn failed_profile_is_skipped_and_run_completes() {
    let connector = FakeConnector::default().with(
        "prod",
        FakeAccount::new("111111111111").zone(
            "Z1",
            "example.com.",
            vec![vec!["a.example.com", "_dmarc.example.com"]],
        ),
    );

    let report = dump_subdomains(&connector, &profiles(&["broken", "prod"]), &DumpOptions::default())
        .await
        .expect("dump should survive a bad profile");

    assert!(report.subdomains.contains("a.example.com"));
    assert!(!report.subdomains.contains("_dmarc.example.com"));
    assert_eq!(report.subdomains.len(), 1);

    assert_eq!(report.outcomes.len(), 2);
    assert!(report.outcomes[0].is_skipped());
    assert_eq!(report.outcomes[0].profile(), "broken");
    match &report.outcomes[1] {
        ProfileOutcome::Enumerated {
            account_id,
            zones,
            record_sets,
            ..
        } => {
            assert_eq!(account_id, "111111111111");
            assert_eq!(*zones, 1);
            assert_eq!(*record_sets, 2);
        }
        other => panic!("expected prod to be enumerated, got {:?}", other),
    }
}

#[tokio::test]
async fn hostname_from_several_zones_and_profiles_appears_once() {
    let connector = FakeConnector::default()
        .with(
            "prod",
            FakeAccount::new("1")
                .zone("Z1", "example.com.", vec![vec!["www.example.com.", "api.example.com."]])
                .zone("Z2", "example.net.", vec![vec!["www.example.com."]]),
        )
        .with(
            "staging",
            FakeAccount::new("2").zone("Z3", "example.com.", vec![vec!["www.example.com."]]),
        );

    let report = dump_subdomains(&connector, &profiles(&["prod", "staging"]), &DumpOptions::default())
        .await
        .unwrap();

    let names: Vec<String> = report.subdomains.into_iter().collect();
    assert_eq!(names, vec!["api.example.com.", "www.example.com."]);
}

#[tokio::test]
async fn backslash_names_are_dropped_wherever_they_come_from() {
    let connector = FakeConnector::default()
        .with(
            "prod",
            FakeAccount::new("1").zone("Z1", "example.com.", vec![vec!["\\052.example.com.", "ok.example.com."]]),
        )
        .with(
            "staging",
            FakeAccount::new("2").zone("Z9", "example.org.", vec![vec!["host\\100.example.org."]]),
        );

    let report = dump_subdomains(&connector, &profiles(&["prod", "staging"]), &DumpOptions::default())
        .await
        .unwrap();

    assert_eq!(report.subdomains.iter().collect::<Vec<_>>(), vec!["ok.example.com."]);
}

#[tokio::test]
async fn no_zones_means_empty_output() {
    let report = dump_subdomains(&FakeConnector::default(), &[], &DumpOptions::default())
        .await
        .unwrap();
    assert!(report.subdomains.is_empty());
    assert!(report.outcomes.is_empty());

    let connector = FakeConnector::default().with("empty", FakeAccount::new("3"));
    let report = dump_subdomains(&connector, &profiles(&["empty"]), &DumpOptions::default())
        .await
        .unwrap();
    assert!(report.subdomains.is_empty());
    assert!(matches!(
        report.outcomes[0],
        ProfileOutcome::Enumerated { zones: 0, record_sets: 0, .. }
    ));
}

#[tokio::test]
async fn every_skipped_profile_still_yields_empty_output() {
    let report = dump_subdomains(&FakeConnector::default(), &profiles(&["a", "b"]), &DumpOptions::default())
        .await
        .unwrap();
    assert!(report.subdomains.is_empty());
    assert!(report.outcomes.iter().all(ProfileOutcome::is_skipped));
}

#[tokio::test]
async fn record_listing_failure_aborts_the_dump() {
    let connector = FakeConnector::default()
        .with(
            "prod",
            FakeAccount::new("1")
                .zone("Z1", "example.com.", vec![vec!["a.example.com."]])
                .broken_zone("Z2"),
        )
        .with("staging", FakeAccount::new("2").zone("Z3", "example.org.", vec![vec!["b.example.org."]]));

    let err = dump_subdomains(&connector, &profiles(&["prod", "staging"]), &DumpOptions::default())
        .await
        .unwrap_err();

    assert!(format!("{:#}", err).contains("NoSuchHostedZone: Z2"));
}

#[tokio::test]
async fn zone_cap_limits_enumeration() {
    let connector = FakeConnector::default().with(
        "prod",
        FakeAccount::new("1")
            .zone("Z1", "example.com.", vec![vec!["a.example.com."]])
            .zone("Z2", "example.org.", vec![vec!["b.example.org."]]),
    );

    let options = DumpOptions { max_hosted_zones: 1 };
    let report = dump_subdomains(&connector, &profiles(&["prod"]), &options).await.unwrap();

    assert_eq!(report.subdomains.iter().collect::<Vec<_>>(), vec!["a.example.com."]);
}

#[tokio::test]
async fn pages_follow_the_cursor_to_the_end() {
    let account = FakeAccount::new("1").zone(
        "Z1",
        "example.com.",
        vec![
            vec!["a.example.com."],
            vec!["b.example.com.", "c.example.com."],
            vec!["d.example.com."],
        ],
    );

    let mut pages = RecordSetPages::new(&account, "Z1");
    let mut seen = Vec::new();
    while let Some(page) = pages.next().await {
        let page = page.unwrap();
        seen.extend(page.record_sets.into_iter().map(|r| r.name));
    }

    assert_eq!(seen, vec!["a.example.com.", "b.example.com.", "c.example.com.", "d.example.com."]);
    assert!(pages.next().await.is_none(), "sequence must not restart");
}

#[tokio::test]
async fn page_error_ends_the_sequence() {
    let account = FakeAccount::new("1").broken_zone("Z2");

    let mut pages = RecordSetPages::new(&account, "Z2");
    assert!(pages.next().await.unwrap().is_err());
    assert!(pages.next().await.is_none());
}
