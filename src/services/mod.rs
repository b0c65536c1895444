pub mod aggregation;
pub mod insights;
pub mod intake;
