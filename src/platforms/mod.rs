pub mod client;
pub mod codeforces;
pub mod leetcode;

pub use client::{ClientConfig, CodeforcesApi, LeetCodeApi};
pub use codeforces::CodeforcesClient;
pub use leetcode::LeetCodeClient;
