use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum Province {
    #[default]
    Punjab,
    Sindh,
    #[serde(rename = "KP")]
    Kp,
    Balochistan,
    #[serde(rename = "GB")]
    Gb,
    #[serde(rename = "AJK")]
    Ajk,
    #[serde(rename = "ICT")]
    Ict,
}

impl Province {
    pub const ALL: [Province; 7] = [
        Province::Punjab,
        Province::Sindh,
        Province::Kp,
        Province::Balochistan,
        Province::Gb,
        Province::Ajk,
        Province::Ict,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Province::Punjab => "Punjab",
            Province::Sindh => "Sindh",
            Province::Kp => "KP",
            Province::Balochistan => "Balochistan",
            Province::Gb => "GB",
            Province::Ajk => "AJK",
            Province::Ict => "ICT",
        }
    }
}

impl fmt::Display for Province {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum IssueCategory {
    #[default]
    Infrastructure,
    Teachers,
    #[serde(rename = "WASH")]
    Wash,
    Security,
    Supplies,
}

impl IssueCategory {
    pub const ALL: [IssueCategory; 5] = [
        IssueCategory::Infrastructure,
        IssueCategory::Teachers,
        IssueCategory::Wash,
        IssueCategory::Security,
        IssueCategory::Supplies,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            IssueCategory::Infrastructure => "Infrastructure",
            IssueCategory::Teachers => "Teachers",
            IssueCategory::Wash => "WASH",
            IssueCategory::Security => "Security",
            IssueCategory::Supplies => "Supplies",
        }
    }
}

impl fmt::Display for IssueCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Severity tag on a report. Variants are declared from least to most
/// severe so the derived `Ord` follows severity.
#[derive(
    Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ToSchema,
)]
pub enum Urgency {
    Low,
    #[default]
    Medium,
    High,
    Critical,
}

impl Urgency {
    pub const ALL: [Urgency; 4] = [
        Urgency::Low,
        Urgency::Medium,
        Urgency::High,
        Urgency::Critical,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Urgency::Low => "Low",
            Urgency::Medium => "Medium",
            Urgency::High => "High",
            Urgency::Critical => "Critical",
        }
    }
}

impl fmt::Display for Urgency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum ReporterRole {
    #[default]
    Principal,
    Teacher,
    Parent,
    Student,
}

impl ReporterRole {
    pub fn as_str(self) -> &'static str {
        match self {
            ReporterRole::Principal => "Principal",
            ReporterRole::Teacher => "Teacher",
            ReporterRole::Parent => "Parent",
            ReporterRole::Student => "Student",
        }
    }
}

impl fmt::Display for ReporterRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SchoolReport {
    pub id: Uuid,
    pub school_name: String,
    pub emis_code: String,
    pub province: Province,
    pub district: String,
    pub category: IssueCategory,
    pub urgency: Urgency,
    pub description: String,
    pub reporter_name: String,
    pub role: ReporterRole,
    pub timestamp: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn province_wire_names_match_display() {
        for province in Province::ALL {
            let json = serde_json::to_value(province).unwrap();
            assert_eq!(json, province.as_str());
        }
    }

    #[test]
    fn category_wire_names_match_display() {
        for category in IssueCategory::ALL {
            let json = serde_json::to_value(category).unwrap();
            assert_eq!(json, category.as_str());
        }
    }

    #[test]
    fn wash_and_kp_use_upper_case_on_the_wire() {
        let category: IssueCategory = serde_json::from_str("\"WASH\"").unwrap();
        assert_eq!(category, IssueCategory::Wash);
        let province: Province = serde_json::from_str("\"KP\"").unwrap();
        assert_eq!(province, Province::Kp);
        assert!(serde_json::from_str::<IssueCategory>("\"Wash\"").is_err());
    }

    #[test]
    fn urgency_orders_by_severity() {
        assert!(Urgency::Low < Urgency::Medium);
        assert!(Urgency::High < Urgency::Critical);
        assert_eq!(Urgency::ALL.iter().max(), Some(&Urgency::Critical));
    }
}
