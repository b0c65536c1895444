pub mod document;
pub mod report;
pub mod seed;

pub use document::{EvidenceDocument, FileType, PLACEHOLDER_DOCUMENT_URL};
pub use report::{IssueCategory, Province, ReporterRole, SchoolReport, Urgency};
