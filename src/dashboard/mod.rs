pub mod fetch;
pub mod slot;

pub use fetch::{fetch_codeforces, fetch_leetcode, fetch_upcoming_contests, CodeforcesSnapshot, LeetCodeSnapshot};
pub use slot::{SearchOutcome, SearchSlot, SearchTicket};

use std::sync::Arc;
use tracing::{info, warn};

use crate::{
    analytics::UpcomingContest,
    config::{ApiSettings, Settings},
    models::{ReferenceMaxima, Result},
    platforms::{ClientConfig, CodeforcesApi, CodeforcesClient, LeetCodeApi, LeetCodeClient},
};

/// Per-platform search orchestration with latest-search-wins state.
pub struct Dashboard {
    codeforces_client: Arc<dyn CodeforcesApi>,
    leetcode_client: Arc<dyn LeetCodeApi>,
    api: ApiSettings,
    maxima: ReferenceMaxima,
    codeforces: SearchSlot<CodeforcesSnapshot>,
    leetcode: SearchSlot<LeetCodeSnapshot>,
}

impl Dashboard {
    pub fn new(
        codeforces_client: Arc<dyn CodeforcesApi>,
        leetcode_client: Arc<dyn LeetCodeApi>,
        settings: &Settings,
    ) -> Self {
        Self {
            codeforces_client,
            leetcode_client,
            api: settings.api.clone(),
            maxima: settings.scoring.reference_maxima,
            codeforces: SearchSlot::new(),
            leetcode: SearchSlot::new(),
        }
    }

    /// Build a dashboard backed by the live HTTP clients.
    pub fn from_settings(settings: &Settings) -> Result<Self> {
        let codeforces = CodeforcesClient::new(ClientConfig::codeforces(&settings.api))?;
        let leetcode = LeetCodeClient::new(ClientConfig::leetcode(&settings.api))?;

        Ok(Self::new(Arc::new(codeforces), Arc::new(leetcode), settings))
    }

    pub async fn search_codeforces(&self, handle: &str) -> Result<SearchOutcome<CodeforcesSnapshot>> {
        let ticket = self.codeforces.begin();
        info!("Codeforces search #{} for {}", ticket.generation(), handle);

        let result = fetch_codeforces(self.codeforces_client.as_ref(), handle, &self.api, &self.maxima).await;
        Self::finish("Codeforces", &self.codeforces, ticket, result)
    }

    pub async fn search_leetcode(&self, username: &str) -> Result<SearchOutcome<LeetCodeSnapshot>> {
        let ticket = self.leetcode.begin();
        info!("LeetCode search #{} for {}", ticket.generation(), username);

        let result = fetch_leetcode(self.leetcode_client.as_ref(), username, &self.api, &self.maxima).await;
        Self::finish("LeetCode", &self.leetcode, ticket, result)
    }

    /// Upcoming Codeforces contests. Does not touch either search slot.
    pub async fn upcoming_contests(&self, limit: usize) -> Result<Vec<UpcomingContest>> {
        fetch_upcoming_contests(self.codeforces_client.as_ref(), limit).await
    }

    fn finish<T: Clone>(
        platform: &str,
        slot: &SearchSlot<T>,
        ticket: SearchTicket,
        result: Result<T>,
    ) -> Result<SearchOutcome<T>> {
        match slot.complete(ticket, result) {
            Ok(SearchOutcome::Superseded) => {
                info!("{} search #{} superseded, result dropped", platform, ticket.generation());
                Ok(SearchOutcome::Superseded)
            }
            Ok(applied) => {
                info!("{} search #{} completed", platform, ticket.generation());
                Ok(applied)
            }
            Err(e) => {
                warn!("{} search #{} failed: {}", platform, ticket.generation(), e);
                Err(e)
            }
        }
    }

    pub fn codeforces(&self) -> Option<CodeforcesSnapshot> {
        self.codeforces.snapshot()
    }

    pub fn leetcode(&self) -> Option<LeetCodeSnapshot> {
        self.leetcode.snapshot()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        codeforces::{CodeforcesUser, Contest, RatingChange, Submission},
        leetcode::{ContestRanking, LeetCodeProfile, LeetCodeStats, LeetCodeSubmission, LeetCodeUser},
        CpScoreError, Platform, ScoreTier,
    };
    use async_trait::async_trait;
    use mockall::mock;
    use tokio::sync::Notify;

    mock! {
        pub Codeforces {}

        #[async_trait]
        impl CodeforcesApi for Codeforces {
            async fn get_user_info(&self, handle: &str) -> Result<CodeforcesUser>;
            async fn get_user_rating(&self, handle: &str) -> Result<Vec<RatingChange>>;
            async fn get_user_submissions(&self, handle: &str, from: u32, count: u32) -> Result<Vec<Submission>>;
            async fn get_contest_list(&self) -> Result<Vec<Contest>>;
        }
    }

    mock! {
        pub LeetCode {}

        #[async_trait]
        impl LeetCodeApi for LeetCode {
            async fn get_user_profile(&self, username: &str) -> Result<LeetCodeProfile>;
            async fn get_user_contest_ranking(&self, username: &str) -> Result<Option<ContestRanking>>;
            async fn get_recent_submissions(&self, username: &str, limit: u32) -> Result<Vec<LeetCodeSubmission>>;
        }
    }

    fn cf_user() -> CodeforcesUser {
        serde_json::from_value(serde_json::json!({
            "handle": "tourist",
            "rank": "legendary grandmaster",
            "rating": 3500,
            "maxRank": "legendary grandmaster",
            "maxRating": 3979,
        }))
        .unwrap()
    }

    fn cf_history() -> Vec<RatingChange> {
        serde_json::from_value(serde_json::json!([
            {"contestId": 1, "contestName": "Round 1", "handle": "tourist", "rank": 1,
             "ratingUpdateTimeSeconds": 1_700_000_000, "oldRating": 0, "newRating": 3500}
        ]))
        .unwrap()
    }

    fn cf_submissions() -> Vec<Submission> {
        serde_json::from_value(serde_json::json!([
            {"id": 1, "contestId": 1, "creationTimeSeconds": 1_700_000_000,
             "problem": {"contestId": 1, "index": "A", "name": "A", "type": "PROGRAMMING",
                         "rating": 800, "tags": ["math"]},
             "author": {"contestId": 1, "members": [{"handle": "tourist"}], "participantType": "CONTESTANT"},
             "verdict": "OK"}
        ]))
        .unwrap()
    }

    fn lc_profile() -> LeetCodeProfile {
        LeetCodeProfile {
            user: LeetCodeUser {
                username: "lee215".to_string(),
                avatar: String::new(),
                ranking: 1,
                reputation: None,
            },
            stats: LeetCodeStats {
                total_solved: 1500,
                total_questions: 3000,
                easy_solved: 500,
                medium_solved: 700,
                hard_solved: 300,
                acceptance_rate: 50.0,
                ranking: 1,
            },
        }
    }

    fn healthy_codeforces() -> MockCodeforces {
        let mut mock = MockCodeforces::new();
        mock.expect_get_user_info()
            .withf(|handle: &str| handle == "tourist")
            .returning(|_| Ok(cf_user()));
        mock.expect_get_user_rating().returning(|_| Ok(cf_history()));
        mock.expect_get_user_submissions()
            .withf(|_: &str, from: &u32, count: &u32| *from == 1 && *count == 200)
            .returning(|_, _, _| Ok(cf_submissions()));
        mock
    }

    fn healthy_leetcode() -> MockLeetCode {
        let mut mock = MockLeetCode::new();
        mock.expect_get_user_profile().returning(|_| Ok(lc_profile()));
        mock.expect_get_user_contest_ranking().returning(|_| {
            Ok(Some(ContestRanking {
                rating: 3000.0,
                global_ranking: 1,
                attended_contests_count: 100,
                top_percentage: 0.0,
            }))
        });
        mock.expect_get_recent_submissions()
            .withf(|_: &str, limit: &u32| *limit == 20)
            .returning(|_, _| Ok(Vec::new()));
        mock
    }

    /// Holds the response for handle "old" until the gate is opened.
    struct GatedCodeforces {
        gate: Arc<Notify>,
    }

    #[async_trait]
    impl CodeforcesApi for GatedCodeforces {
        async fn get_user_info(&self, handle: &str) -> Result<CodeforcesUser> {
            if handle == "old" {
                self.gate.notified().await;
            }
            let mut user = cf_user();
            user.handle = handle.to_string();
            Ok(user)
        }

        async fn get_user_rating(&self, _handle: &str) -> Result<Vec<RatingChange>> {
            Ok(cf_history())
        }

        async fn get_user_submissions(&self, _handle: &str, _from: u32, _count: u32) -> Result<Vec<Submission>> {
            Ok(cf_submissions())
        }

        async fn get_contest_list(&self) -> Result<Vec<Contest>> {
            Ok(Vec::new())
        }
    }

    fn build_dashboard(codeforces: MockCodeforces, leetcode: MockLeetCode) -> Dashboard {
        Dashboard::new(Arc::new(codeforces), Arc::new(leetcode), &Settings::default())
    }

    #[tokio::test]
    async fn test_codeforces_search_populates_state() {
        let dashboard = build_dashboard(healthy_codeforces(), MockLeetCode::new());

        let snapshot = dashboard
            .search_codeforces("  tourist ")
            .await
            .unwrap()
            .applied()
            .unwrap();

        assert_eq!(snapshot.user.handle, "tourist");
        assert_eq!(snapshot.problem_stats.unique_solved, 1);
        assert_eq!(snapshot.recent_contests.len(), 1);
        assert_eq!(snapshot.metrics.rating, Some(3500.0));
        assert_eq!(snapshot.score.breakdown.rating, 25.0);

        let visible = dashboard.codeforces().unwrap();
        assert_eq!(visible.user.handle, "tourist");
        assert!(dashboard.leetcode().is_none());
    }

    #[tokio::test]
    async fn test_codeforces_failure_resets_state() {
        let mut codeforces = MockCodeforces::new();
        codeforces
            .expect_get_user_info()
            .times(2)
            .returning(|handle| {
                if handle == "tourist" {
                    Ok(cf_user())
                } else {
                    Err(CpScoreError::not_found(Platform::Codeforces, handle))
                }
            });
        codeforces.expect_get_user_rating().returning(|_| Ok(cf_history()));
        codeforces
            .expect_get_user_submissions()
            .returning(|_, _, _| Ok(cf_submissions()));
        let dashboard = build_dashboard(codeforces, MockLeetCode::new());

        dashboard.search_codeforces("tourist").await.unwrap();
        assert!(dashboard.codeforces().is_some());

        let err = dashboard.search_codeforces("ghost").await.unwrap_err();
        assert!(err.is_not_found());
        assert!(dashboard.codeforces().is_none());
    }

    #[tokio::test]
    async fn test_empty_handle_rejected() {
        let dashboard = build_dashboard(MockCodeforces::new(), MockLeetCode::new());

        let err = dashboard.search_codeforces("   ").await.unwrap_err();
        assert!(matches!(err, CpScoreError::InvalidInput(_)));
    }

    #[tokio::test]
    async fn test_leetcode_search_populates_state() {
        let dashboard = build_dashboard(MockCodeforces::new(), healthy_leetcode());

        let snapshot = dashboard
            .search_leetcode("lee215")
            .await
            .unwrap()
            .applied()
            .unwrap();

        assert_eq!(snapshot.metrics.total_problems, Some(1500.0));
        assert_eq!(snapshot.metrics.virtual_performance, Some(100.0));
        assert_eq!(snapshot.metrics.accuracy, None);
        assert!(snapshot.score.tier >= ScoreTier::Intermediate);
        assert!(dashboard.leetcode().is_some());
    }

    #[tokio::test]
    async fn test_leetcode_ranking_failure_still_applies() {
        let mut leetcode = MockLeetCode::new();
        leetcode.expect_get_user_profile().returning(|_| Ok(lc_profile()));
        leetcode
            .expect_get_user_contest_ranking()
            .returning(|_| Err(CpScoreError::api(Platform::LeetCode, "rate limited")));
        leetcode
            .expect_get_recent_submissions()
            .returning(|_, _| Err(CpScoreError::api(Platform::LeetCode, "timeout")));
        let dashboard = build_dashboard(MockCodeforces::new(), leetcode);

        let snapshot = dashboard
            .search_leetcode("lee215")
            .await
            .unwrap()
            .applied()
            .unwrap();

        assert!(snapshot.contest_ranking.is_none());
        assert!(snapshot.recent_submissions.is_empty());
        assert_eq!(snapshot.metrics.rating, None);
        assert_eq!(snapshot.metrics.contests_participated, None);
        assert_eq!(snapshot.metrics.total_problems, Some(1500.0));
        assert!(dashboard.leetcode().is_some());
    }

    #[tokio::test]
    async fn test_leetcode_profile_failure_fails_search() {
        let mut leetcode = MockLeetCode::new();
        leetcode
            .expect_get_user_profile()
            .returning(|_| Err(CpScoreError::api(Platform::LeetCode, "rate limited")));
        leetcode.expect_get_user_contest_ranking().returning(|_| Ok(None));
        leetcode.expect_get_recent_submissions().returning(|_, _| Ok(Vec::new()));
        let dashboard = build_dashboard(MockCodeforces::new(), leetcode);

        let err = dashboard.search_leetcode("lee215").await.unwrap_err();
        assert_eq!(err.to_string(), "leetcode API error: rate limited");
        assert!(dashboard.leetcode().is_none());
    }

    #[tokio::test]
    async fn test_slow_older_search_does_not_overwrite_newer() {
        let gate = Arc::new(Notify::new());
        let codeforces = GatedCodeforces { gate: gate.clone() };
        let dashboard = Dashboard::new(Arc::new(codeforces), Arc::new(MockLeetCode::new()), &Settings::default());

        let (old, new) = tokio::join!(dashboard.search_codeforces("old"), async {
            let outcome = dashboard.search_codeforces("new").await;
            gate.notify_one();
            outcome
        });

        assert!(old.unwrap().is_superseded());
        assert_eq!(new.unwrap().applied().unwrap().user.handle, "new");
        assert_eq!(dashboard.codeforces().unwrap().user.handle, "new");
    }

    #[tokio::test]
    async fn test_upcoming_contests_from_contest_list() {
        let mut codeforces = MockCodeforces::new();
        codeforces.expect_get_contest_list().times(1).returning(|| {
            Ok(serde_json::from_value(serde_json::json!([
                {"id": 2001, "name": "Round 2001", "type": "CF", "phase": "BEFORE",
                 "durationSeconds": 7200, "startTimeSeconds": 1_900_000_000},
                {"id": 2000, "name": "Round 2000", "type": "ICPC", "phase": "BEFORE",
                 "durationSeconds": 9000, "startTimeSeconds": 1_800_000_000},
                {"id": 1999, "name": "Round 1999", "type": "CF", "phase": "FINISHED",
                 "durationSeconds": 7200, "startTimeSeconds": 1_700_000_000}
            ]))
            .unwrap())
        });
        let dashboard = build_dashboard(codeforces, MockLeetCode::new());

        let upcoming = dashboard.upcoming_contests(5).await.unwrap();

        assert_eq!(upcoming.len(), 2);
        assert_eq!(upcoming[0].contest_id, 2000);
        assert_eq!(upcoming[0].duration_minutes, 150);
        assert!(dashboard.codeforces().is_none());
    }

    #[tokio::test]
    async fn test_upcoming_contests_propagates_api_error() {
        let mut codeforces = MockCodeforces::new();
        codeforces
            .expect_get_contest_list()
            .returning(|| Err(CpScoreError::api(Platform::Codeforces, "Call limit exceeded")));
        let dashboard = build_dashboard(codeforces, MockLeetCode::new());

        let err = dashboard.upcoming_contests(5).await.unwrap_err();
        assert_eq!(err.to_string(), "codeforces API error: Call limit exceeded");
    }
}
