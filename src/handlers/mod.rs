pub mod dashboard;
pub mod document;
pub mod health;
pub mod insights;
pub mod report;

pub use health::health_check;
