//! Count-per-key derivations over the report collection.
//!
//! Buckets come out in the order each key first appears in the input, not
//! sorted by name or severity. Dashboards depend on that ordering.

use crate::models::{EvidenceDocument, IssueCategory, SchoolReport, Urgency};
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct CategoryCount {
    pub category: IssueCategory,
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct UrgencyCount {
    pub urgency: Urgency,
    pub count: u64,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct DashboardSummary {
    pub total_reports: u64,
    pub total_documents: u64,
    pub by_category: Vec<CategoryCount>,
    pub by_urgency: Vec<UrgencyCount>,
}

/// Typed counter keyed by one of the closed enum sets, iterated in
/// insertion order.
struct Tally<K> {
    buckets: Vec<(K, u64)>,
}

impl<K: Copy + PartialEq> Tally<K> {
    fn new() -> Self {
        Self {
            buckets: Vec::new(),
        }
    }

    fn add(&mut self, key: K) {
        // Key sets have at most seven members, a linear scan is enough.
        match self.buckets.iter_mut().find(|(k, _)| *k == key) {
            Some((_, count)) => *count += 1,
            None => self.buckets.push((key, 1)),
        }
    }

    fn from_keys(keys: impl IntoIterator<Item = K>) -> Self {
        let mut tally = Self::new();
        for key in keys {
            tally.add(key);
        }
        tally
    }

    fn into_buckets(self) -> Vec<(K, u64)> {
        self.buckets
    }
}

pub fn aggregate_by_category(reports: &[SchoolReport]) -> Vec<CategoryCount> {
    Tally::from_keys(reports.iter().map(|r| r.category))
        .into_buckets()
        .into_iter()
        .map(|(category, count)| CategoryCount { category, count })
        .collect()
}

pub fn aggregate_by_urgency(reports: &[SchoolReport]) -> Vec<UrgencyCount> {
    Tally::from_keys(reports.iter().map(|r| r.urgency))
        .into_buckets()
        .into_iter()
        .map(|(urgency, count)| UrgencyCount { urgency, count })
        .collect()
}

pub fn dashboard(reports: &[SchoolReport], documents: &[EvidenceDocument]) -> DashboardSummary {
    DashboardSummary {
        total_reports: reports.len() as u64,
        total_documents: documents.len() as u64,
        by_category: aggregate_by_category(reports),
        by_urgency: aggregate_by_urgency(reports),
    }
}
