pub mod metrics;
pub mod score;
pub mod platform;
pub mod codeforces;
pub mod leetcode;
pub mod error;

pub use metrics::*;
pub use score::*;
pub use platform::*;
pub use error::*;
