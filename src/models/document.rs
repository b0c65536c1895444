use super::report::Province;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Reference used when a document is submitted without a hosted URL.
pub const PLACEHOLDER_DOCUMENT_URL: &str =
    "https://images.unsplash.com/photo-1450101499163-c8848c66ca85?q=80&w=400&auto=format&fit=crop";

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum FileType {
    #[default]
    Image,
    Pdf,
    Doc,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct EvidenceDocument {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub file_type: FileType,
    /// Externally hosted content; never uploaded through this service.
    pub url: String,
    pub province: Province,
    pub uploaded_by: String,
    pub timestamp: DateTime<Utc>,
}
