pub mod models;
pub mod config;
pub mod scoring;
pub mod platforms;
pub mod analytics;
pub mod dashboard;
pub mod report;

pub use models::{CpScoreError, PerformanceScoreResult, Platform, Result, ScoreTier, UserMetrics};
pub use config::Settings;
pub use scoring::{calculate_score, validate_metrics};

// Re-export commonly used types
pub use dashboard::{Dashboard, SearchOutcome};
