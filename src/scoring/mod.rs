pub mod algorithm;
pub mod normalize;
pub mod validation;
pub mod weights;

pub use algorithm::calculate_score;
pub use normalize::{normalize, normalize_percentage};
pub use validation::validate_metrics;
pub use weights::{ScoringWeights, WEIGHTS};
