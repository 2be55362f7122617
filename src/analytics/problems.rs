use std::collections::{HashMap, HashSet};

use serde::Serialize;

use crate::models::codeforces::{Problem, Submission};

const TOP_TAGS: usize = 10;

/// Difficulty bands used for the solved-problem histogram. Bounds are
/// inclusive; ratings outside every band are not counted.
const DIFFICULTY_BUCKETS: [(&str, i64, i64); 6] = [
    ("800-1000", 800, 1000),
    ("1100-1300", 1100, 1300),
    ("1400-1600", 1400, 1600),
    ("1700-1900", 1700, 1900),
    ("2000-2200", 2000, 2200),
    ("2300+", 2300, 9999),
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TagCount {
    pub tag: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DifficultyCount {
    pub range: &'static str,
    pub count: usize,
}

/// Aggregates over a Codeforces submission list.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProblemStats {
    pub total_submissions: usize,
    pub accepted_submissions: usize,
    pub unique_solved: usize,
    /// Accepted share of all submissions, as a percentage.
    pub acceptance_rate: f64,
    /// Number of distinct tags across solved problems.
    pub distinct_tags: usize,
    /// Most common tags across solved problems, at most ten.
    pub tag_distribution: Vec<TagCount>,
    pub difficulty_distribution: Vec<DifficultyCount>,
}

impl ProblemStats {
    pub fn from_submissions(submissions: &[Submission]) -> Self {
        let solved = unique_solved_problems(submissions);
        let accepted = submissions.iter().filter(|s| s.is_accepted()).count();

        let acceptance_rate = if submissions.is_empty() {
            0.0
        } else {
            accepted as f64 / submissions.len() as f64 * 100.0
        };

        let tags = tag_counts(&solved);
        let distinct_tags = tags.len();

        Self {
            total_submissions: submissions.len(),
            accepted_submissions: accepted,
            unique_solved: solved.len(),
            acceptance_rate,
            distinct_tags,
            tag_distribution: tags.into_iter().take(TOP_TAGS).collect(),
            difficulty_distribution: difficulty_counts(&solved),
        }
    }
}

/// Accepted problems, deduplicated by key. The first occurrence wins.
pub fn unique_solved_problems(submissions: &[Submission]) -> Vec<&Problem> {
    let mut seen = HashSet::new();
    submissions
        .iter()
        .filter(|s| s.is_accepted())
        .filter(|s| seen.insert(s.problem.key()))
        .map(|s| &s.problem)
        .collect()
}

fn tag_counts(problems: &[&Problem]) -> Vec<TagCount> {
    let mut order: Vec<&str> = Vec::new();
    let mut counts: HashMap<&str, usize> = HashMap::new();

    for tag in problems.iter().flat_map(|p| p.tags.iter()) {
        let entry = counts.entry(tag.as_str()).or_insert_with(|| {
            order.push(tag.as_str());
            0
        });
        *entry += 1;
    }

    let mut tags: Vec<TagCount> = order
        .into_iter()
        .map(|tag| TagCount {
            tag: tag.to_string(),
            count: counts[tag],
        })
        .collect();

    // sort_by is stable, so ties keep first-seen order
    tags.sort_by(|a, b| b.count.cmp(&a.count));
    tags
}

fn difficulty_counts(problems: &[&Problem]) -> Vec<DifficultyCount> {
    let mut counts = [0usize; DIFFICULTY_BUCKETS.len()];

    for rating in problems.iter().filter_map(|p| p.rating) {
        if let Some(i) = DIFFICULTY_BUCKETS
            .iter()
            .position(|(_, lo, hi)| (*lo..=*hi).contains(&rating))
        {
            counts[i] += 1;
        }
    }

    DIFFICULTY_BUCKETS
        .iter()
        .zip(counts)
        .filter(|(_, count)| *count > 0)
        .map(|(&(range, _, _), count)| DifficultyCount { range, count })
        .collect()
}
