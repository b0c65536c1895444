//! Fixture collections the store starts with.

use super::{
    EvidenceDocument, FileType, IssueCategory, Province, ReporterRole, SchoolReport, Urgency,
};
use chrono::Utc;
use uuid::Uuid;

/// Seed reports, newest first.
pub fn initial_reports() -> Vec<SchoolReport> {
    let now = Utc::now();
    vec![
        SchoolReport {
            id: Uuid::new_v4(),
            school_name: "Govt High School No. 1".to_string(),
            emis_code: "35210001".to_string(),
            province: Province::Punjab,
            district: "Lahore".to_string(),
            category: IssueCategory::Wash,
            urgency: Urgency::Critical,
            description: "No clean drinking water available for 800 students for 3 days."
                .to_string(),
            reporter_name: "Ahmed Ali".to_string(),
            role: ReporterRole::Principal,
            timestamp: now,
        },
        SchoolReport {
            id: Uuid::new_v4(),
            school_name: "Public Primary School Ziarat".to_string(),
            emis_code: "12450092".to_string(),
            province: Province::Balochistan,
            district: "Ziarat".to_string(),
            category: IssueCategory::Infrastructure,
            urgency: Urgency::High,
            description: "Roof collapse in Grade 3 classroom due to heavy snow.".to_string(),
            reporter_name: "Sara Khan".to_string(),
            role: ReporterRole::Teacher,
            timestamp: now,
        },
        SchoolReport {
            id: Uuid::new_v4(),
            school_name: "Sindh Model School".to_string(),
            emis_code: "42200115".to_string(),
            province: Province::Sindh,
            district: "Karachi Central".to_string(),
            category: IssueCategory::Teachers,
            urgency: Urgency::Medium,
            description: "Shortage of mathematics teacher for senior classes.".to_string(),
            reporter_name: "Imran Shah".to_string(),
            role: ReporterRole::Parent,
            timestamp: now,
        },
    ]
}

/// Seed evidence documents, newest first.
pub fn initial_documents() -> Vec<EvidenceDocument> {
    let now = Utc::now();
    vec![
        EvidenceDocument {
            id: Uuid::new_v4(),
            title: "Damaged classroom roof".to_string(),
            description: "Photo of the Grade 3 classroom after the snowfall.".to_string(),
            file_type: FileType::Image,
            url: "https://images.unsplash.com/photo-1497633762265-9d179a990aa6?q=80&w=400&auto=format&fit=crop"
                .to_string(),
            province: Province::Balochistan,
            uploaded_by: "Sara Khan".to_string(),
            timestamp: now,
        },
        EvidenceDocument {
            id: Uuid::new_v4(),
            title: "Water quality test results".to_string(),
            description: "District lab report on the school's drinking water supply.".to_string(),
            file_type: FileType::Pdf,
            url: "https://images.unsplash.com/photo-1532996122724-e3c354a0b15b?q=80&w=400&auto=format&fit=crop"
                .to_string(),
            province: Province::Punjab,
            uploaded_by: "Ahmed Ali".to_string(),
            timestamp: now,
        },
    ]
}
