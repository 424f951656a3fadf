use std::collections::BTreeSet;

use crate::resource::RecordSetPage;

/// Names with `_` (DKIM, DMARC, SRV labels) or `\` (Route53's octal escapes,
/// e.g. `\052` for a wildcard) are not plain hostnames.
pub fn is_hostname(name: &str) -> bool {
    !name.contains(['_', '\\'])
}

/// Every hostname seen during one run, deduplicated.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SubdomainSet {
    names: BTreeSet<String>,
}

impl SubdomainSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if `name` is a hostname not seen before.
    pub fn insert_record_name(&mut self, name: &str) -> bool {
        if !is_hostname(name) {
            tracing::trace!("Skipping non-hostname record {:?}", name);
            return false;
        }
        self.names.insert(name.to_string())
    }

    /// Adds the name of every record set in `pages`, returning how many were new.
    pub fn extend_from_pages(&mut self, pages: &[RecordSetPage]) -> usize {
        pages
            .iter()
            .flat_map(|page| page.record_sets.iter())
            .filter(|record_set| self.insert_record_name(&record_set.name))
            .count()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }
}

impl IntoIterator for SubdomainSet {
    type Item = String;
    type IntoIter = std::collections::btree_set::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.names.into_iter()
    }
}
