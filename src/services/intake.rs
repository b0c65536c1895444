use crate::{
    error::{AppError, AppResult},
    models::{
        EvidenceDocument, FileType, IssueCategory, Province, ReporterRole, SchoolReport, Urgency,
        PLACEHOLDER_DOCUMENT_URL,
    },
};
use chrono::Utc;
use serde::{Deserialize, Deserializer};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::{Validate, ValidationError, ValidationErrors};

const BLANK: &str = "blank";

const REPORT_REQUIRED: &[&str] = &[
    "school_name",
    "emis_code",
    "district",
    "description",
    "reporter_name",
];

const DOCUMENT_REQUIRED: &[&str] = &["title", "uploaded_by"];

/// Raw report form. Enum fields fall back to the form defaults when omitted.
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct ReportSubmission {
    #[serde(default, deserialize_with = "null_as_empty")]
    #[validate(custom(function = "non_blank"))]
    pub school_name: String,
    /// EMIS school code
    #[serde(default, deserialize_with = "null_as_empty")]
    #[validate(custom(function = "non_blank"))]
    pub emis_code: String,
    #[serde(default)]
    pub province: Province,
    #[serde(default, deserialize_with = "null_as_empty")]
    #[validate(custom(function = "non_blank"))]
    pub district: String,
    #[serde(default)]
    pub category: IssueCategory,
    #[serde(default)]
    pub urgency: Urgency,
    #[serde(default, deserialize_with = "null_as_empty")]
    #[validate(custom(function = "non_blank"))]
    pub description: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    #[validate(custom(function = "non_blank"))]
    pub reporter_name: String,
    #[serde(default)]
    pub role: ReporterRole,
}

#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct DocumentSubmission {
    #[serde(default, deserialize_with = "null_as_empty")]
    #[validate(custom(function = "non_blank"))]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub description: String,
    #[serde(default)]
    pub file_type: FileType,
    /// Hosted location of the evidence; a placeholder is used when omitted
    #[validate(url)]
    pub url: Option<String>,
    #[serde(default)]
    pub province: Province,
    #[serde(default, deserialize_with = "null_as_empty")]
    #[validate(custom(function = "non_blank"))]
    pub uploaded_by: String,
}

/// A JSON `null` in a text field reads as an empty string, so it is
/// reported through the missing-field path.
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

fn non_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new(BLANK));
    }
    Ok(())
}

/// Turn validator output into a single rejection. Blank required fields are
/// reported together by name; anything else is a plain validation error.
fn rejection(errors: ValidationErrors, required: &[&'static str]) -> AppError {
    let field_errors = errors.field_errors();
    let missing: Vec<&'static str> = required
        .iter()
        .copied()
        .filter(|field| {
            field_errors
                .get(*field)
                .is_some_and(|errs| errs.iter().any(|e| e.code == BLANK))
        })
        .collect();

    if missing.is_empty() {
        AppError::Validation(errors.to_string())
    } else {
        AppError::MissingFields(missing)
    }
}

pub struct IntakeService;

impl IntakeService {
    pub fn submit_report(submission: ReportSubmission) -> AppResult<SchoolReport> {
        submission
            .validate()
            .map_err(|e| rejection(e, REPORT_REQUIRED))?;

        let report = SchoolReport {
            id: Uuid::new_v4(),
            school_name: submission.school_name.trim().to_string(),
            emis_code: submission.emis_code.trim().to_string(),
            province: submission.province,
            district: submission.district.trim().to_string(),
            category: submission.category,
            urgency: submission.urgency,
            description: submission.description.trim().to_string(),
            reporter_name: submission.reporter_name.trim().to_string(),
            role: submission.role,
            timestamp: Utc::now(),
        };

        tracing::info!(
            id = %report.id,
            province = %report.province,
            category = %report.category,
            urgency = %report.urgency,
            "School report accepted"
        );
        Ok(report)
    }

    pub fn submit_document(mut submission: DocumentSubmission) -> AppResult<EvidenceDocument> {
        // A blank URL field means "no URL"; only real values are checked.
        submission.url = submission
            .url
            .map(|u| u.trim().to_string())
            .filter(|u| !u.is_empty());
        submission
            .validate()
            .map_err(|e| rejection(e, DOCUMENT_REQUIRED))?;

        let url = submission
            .url
            .unwrap_or_else(|| PLACEHOLDER_DOCUMENT_URL.to_string());

        let document = EvidenceDocument {
            id: Uuid::new_v4(),
            title: submission.title.trim().to_string(),
            description: submission.description.trim().to_string(),
            file_type: submission.file_type,
            url,
            province: submission.province,
            uploaded_by: submission.uploaded_by.trim().to_string(),
            timestamp: Utc::now(),
        };

        tracing::info!(id = %document.id, province = %document.province, "Evidence document accepted");
        Ok(document)
    }
}
