use crate::models::{seed, EvidenceDocument, SchoolReport};
use std::collections::VecDeque;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// In-memory, append-only collections of reports and evidence documents.
///
/// Both collections are kept newest first. Clones share the same
/// underlying collections.
#[derive(Clone, Default)]
pub struct DataStore {
    reports: Arc<RwLock<VecDeque<SchoolReport>>>,
    documents: Arc<RwLock<VecDeque<EvidenceDocument>>>,
}

impl DataStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store prefilled with the fixture collections.
    pub fn seeded() -> Self {
        Self::with_collections(seed::initial_reports(), seed::initial_documents())
    }

    /// Build a store from collections already ordered newest first.
    pub fn with_collections(reports: Vec<SchoolReport>, documents: Vec<EvidenceDocument>) -> Self {
        Self {
            reports: Arc::new(RwLock::new(reports.into())),
            documents: Arc::new(RwLock::new(documents.into())),
        }
    }

    pub fn append_report(&self, report: SchoolReport) {
        write(&self.reports).push_front(report);
    }

    pub fn append_document(&self, document: EvidenceDocument) {
        write(&self.documents).push_front(document);
    }

    pub fn reports(&self) -> Vec<SchoolReport> {
        read(&self.reports).iter().cloned().collect()
    }

    pub fn documents(&self) -> Vec<EvidenceDocument> {
        read(&self.documents).iter().cloned().collect()
    }

    pub fn report_count(&self) -> usize {
        read(&self.reports).len()
    }

    pub fn document_count(&self) -> usize {
        read(&self.documents).len()
    }
}

// Appends are single push_front calls, so a poisoned lock still guards a
// consistent collection.
fn read<T>(lock: &RwLock<T>) -> RwLockReadGuard<'_, T> {
    lock.read().unwrap_or_else(|poisoned| poisoned.into_inner())
}

fn write<T>(lock: &RwLock<T>) -> RwLockWriteGuard<'_, T> {
    lock.write().unwrap_or_else(|poisoned| poisoned.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{IssueCategory, Province, ReporterRole, Urgency};
    use chrono::Utc;
    use uuid::Uuid;

    fn report(school: &str) -> SchoolReport {
        SchoolReport {
            id: Uuid::new_v4(),
            school_name: school.to_string(),
            emis_code: "00000001".to_string(),
            province: Province::Sindh,
            district: "Thatta".to_string(),
            category: IssueCategory::Wash,
            urgency: Urgency::High,
            description: "desc".to_string(),
            reporter_name: "reporter".to_string(),
            role: ReporterRole::Teacher,
            timestamp: Utc::now(),
        }
    }

    #[test]
    fn new_store_is_empty() {
        let store = DataStore::new();
        assert_eq!(store.report_count(), 0);
        assert!(store.documents().is_empty());
    }

    #[test]
    fn appends_read_back_newest_first() {
        let store = DataStore::new();
        for name in ["first", "second", "third"] {
            store.append_report(report(name));
        }

        let names: Vec<_> = store
            .reports()
            .into_iter()
            .map(|r| r.school_name)
            .collect();
        assert_eq!(names, vec!["third", "second", "first"]);
    }

    #[test]
    fn appends_land_ahead_of_seed_data() {
        let store = DataStore::seeded();
        let seeded = store.report_count();
        store.append_report(report("fresh"));

        let reports = store.reports();
        assert_eq!(reports.len(), seeded + 1);
        assert_eq!(reports[0].school_name, "fresh");
    }

    #[test]
    fn clones_share_collections() {
        let store = DataStore::new();
        let handle = store.clone();
        handle.append_report(report("shared"));
        assert_eq!(store.report_count(), 1);
    }
}
