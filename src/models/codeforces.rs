use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CodeforcesUser {
    pub handle: String,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub organization: Option<String>,
    #[serde(default)]
    pub contribution: i64,
    // Unrated accounts omit rank and rating entirely
    #[serde(default)]
    pub rank: Option<String>,
    #[serde(default)]
    pub rating: Option<i64>,
    #[serde(default)]
    pub max_rank: Option<String>,
    #[serde(default)]
    pub max_rating: Option<i64>,
    #[serde(default)]
    pub last_online_time_seconds: i64,
    #[serde(default)]
    pub registration_time_seconds: i64,
    #[serde(default)]
    pub friend_of_count: i64,
    #[serde(default)]
    pub avatar: String,
    #[serde(default)]
    pub title_photo: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RatingChange {
    pub contest_id: i64,
    pub contest_name: String,
    pub handle: String,
    pub rank: i64,
    pub rating_update_time_seconds: i64,
    pub old_rating: i64,
    pub new_rating: i64,
}

impl RatingChange {
    pub fn delta(&self) -> i64 {
        self.new_rating - self.old_rating
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Problem {
    #[serde(default)]
    pub contest_id: Option<i64>,
    #[serde(default)]
    pub problemset_name: Option<String>,
    pub index: String,
    pub name: String,
    #[serde(rename = "type", default)]
    pub problem_type: String,
    #[serde(default)]
    pub points: Option<f64>,
    #[serde(default)]
    pub rating: Option<i64>,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Problem {
    /// Identity of a problem across submissions: `"{contestId}-{index}"`.
    pub fn key(&self) -> String {
        match self.contest_id {
            Some(id) => format!("{}-{}", id, self.index),
            None => format!("{}-{}", self.problemset_name.as_deref().unwrap_or("_"), self.index),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    pub handle: String,
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Party {
    #[serde(default)]
    pub contest_id: Option<i64>,
    #[serde(default)]
    pub members: Vec<Member>,
    pub participant_type: String,
    #[serde(default)]
    pub ghost: bool,
    #[serde(default)]
    pub room: Option<i64>,
    #[serde(default)]
    pub start_time_seconds: Option<i64>,
}

impl Party {
    pub fn is_practice(&self) -> bool {
        self.participant_type == "PRACTICE"
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
    pub id: i64,
    #[serde(default)]
    pub contest_id: Option<i64>,
    pub creation_time_seconds: i64,
    #[serde(default)]
    pub relative_time_seconds: i64,
    pub problem: Problem,
    pub author: Party,
    #[serde(default)]
    pub programming_language: String,
    // Absent while the submission is still being judged
    #[serde(default)]
    pub verdict: Option<String>,
    #[serde(default)]
    pub testset: String,
    #[serde(default)]
    pub passed_test_count: i64,
    #[serde(default)]
    pub time_consumed_millis: i64,
    #[serde(default)]
    pub memory_consumed_bytes: i64,
    #[serde(default)]
    pub points: Option<f64>,
}

impl Submission {
    pub fn is_accepted(&self) -> bool {
        self.verdict.as_deref() == Some("OK")
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contest {
    pub id: i64,
    pub name: String,
    #[serde(rename = "type")]
    pub contest_type: String,
    pub phase: String,
    #[serde(default)]
    pub frozen: bool,
    pub duration_seconds: i64,
    #[serde(default)]
    pub start_time_seconds: Option<i64>,
    #[serde(default)]
    pub relative_time_seconds: Option<i64>,
    #[serde(default)]
    pub prepared_by: Option<String>,
    #[serde(default)]
    pub website_url: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub difficulty: Option<i64>,
    #[serde(default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub icpc_region: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub season: Option<String>,
}

/// Display class of a Codeforces rank title.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RankClass {
    Newbie,
    Pupil,
    Specialist,
    Expert,
    CandidateMaster,
    Master,
    Grandmaster,
}

impl RankClass {
    /// Map a rank title to its class. Unknown titles fall back to newbie.
    pub fn from_rank(rank: &str) -> Self {
        match rank.trim().to_lowercase().as_str() {
            "pupil" => RankClass::Pupil,
            "specialist" => RankClass::Specialist,
            "expert" => RankClass::Expert,
            "candidate master" => RankClass::CandidateMaster,
            "master" | "international master" => RankClass::Master,
            "grandmaster" | "international grandmaster" | "legendary grandmaster" => {
                RankClass::Grandmaster
            }
            _ => RankClass::Newbie,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RankClass::Newbie => "cf-newbie",
            RankClass::Pupil => "cf-pupil",
            RankClass::Specialist => "cf-specialist",
            RankClass::Expert => "cf-expert",
            RankClass::CandidateMaster => "cf-candidate-master",
            RankClass::Master => "cf-master",
            RankClass::Grandmaster => "cf-grandmaster",
        }
    }
}
