//! Data models for the distributor
//!
//! Input rows as read from the CSV, and the per-row/run-level results
//! the service layer reports back to the entry point.

pub mod report;
pub mod reward;

// Re-export commonly used types for convenience
pub use report::{DistributionReport, RowOutcome};
pub use reward::RewardRow;
