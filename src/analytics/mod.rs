pub mod activity;
pub mod contests;
pub mod metrics;
pub mod problems;

pub use activity::longest_daily_streak;
pub use contests::{
    contest_summary, rating_chart, recent_contests, upcoming_contests, ContestSummary, RatingPoint, RecentContest,
    UpcomingContest,
};
pub use metrics::{metrics_from_codeforces, metrics_from_leetcode, upsolve_count};
pub use problems::{ProblemStats, TagCount};
