use serde::{Deserialize, Serialize};
use config::{Config, ConfigError, File};
use std::path::Path;

use crate::models::ReferenceMaxima;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub app: AppSettings,
    pub api: ApiSettings,
    pub scoring: ScoringSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppSettings {
    pub name: String,
    pub version: String,
    pub log_level: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiSettings {
    pub codeforces_base_url: String,
    pub leetcode_graphql_url: String,
    pub timeout_seconds: u64,
    /// Codeforces submissions fetched per search.
    pub submission_count: u32,
    /// LeetCode recent submissions fetched per search.
    pub recent_submission_limit: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoringSettings {
    pub reference_maxima: ReferenceMaxima,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            app: AppSettings {
                name: "CP Scorer".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                log_level: "info".to_string(),
            },
            api: ApiSettings::default(),
            scoring: ScoringSettings {
                reference_maxima: ReferenceMaxima::default(),
            },
        }
    }
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            codeforces_base_url: "https://codeforces.com/api".to_string(),
            leetcode_graphql_url: "https://leetcode.com/graphql".to_string(),
            timeout_seconds: 30,
            submission_count: 200,
            recent_submission_limit: 20,
        }
    }
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        let s = Config::builder()
            .add_source(Config::try_from(&Settings::default())?)
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            .add_source(config::Environment::with_prefix("CP_SCORER").separator("__"))
            .build()?;

        s.try_deserialize()
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let s = Config::builder()
            .add_source(Config::try_from(&Settings::default())?)
            .add_source(File::from(path.as_ref()))
            .add_source(config::Environment::with_prefix("CP_SCORER").separator("__"))
            .build()?;

        s.try_deserialize()
    }

    pub fn validate(&self) -> Result<(), String> {
        let api = &self.api;
        for (name, url) in [
            ("api.codeforces_base_url", &api.codeforces_base_url),
            ("api.leetcode_graphql_url", &api.leetcode_graphql_url),
        ] {
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                return Err(format!("{} must be an http(s) URL, got '{}'", name, url));
            }
        }

        if api.timeout_seconds == 0 {
            return Err("api.timeout_seconds must be greater than 0".to_string());
        }
        if api.submission_count == 0 {
            return Err("api.submission_count must be greater than 0".to_string());
        }
        if api.recent_submission_limit == 0 {
            return Err("api.recent_submission_limit must be greater than 0".to_string());
        }

        self.scoring
            .reference_maxima
            .validate()
            .map_err(|e| format!("scoring.reference_maxima: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DEFAULT_MAX_VALUES;

    #[test]
    fn test_default_settings_are_valid() {
        let settings = Settings::default();
        assert!(settings.validate().is_ok());
        assert_eq!(settings.api.submission_count, 200);
        assert_eq!(settings.scoring.reference_maxima, DEFAULT_MAX_VALUES);
    }

    #[test]
    fn test_rejects_bad_url() {
        let mut settings = Settings::default();
        settings.api.codeforces_base_url = "codeforces.com/api".to_string();
        let err = settings.validate().unwrap_err();
        assert!(err.contains("api.codeforces_base_url"));
    }

    #[test]
    fn test_rejects_zero_counts() {
        let mut settings = Settings::default();
        settings.api.submission_count = 0;
        assert!(settings.validate().is_err());

        let mut settings = Settings::default();
        settings.api.timeout_seconds = 0;
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_rejects_non_positive_maxima() {
        let mut settings = Settings::default();
        settings.scoring.reference_maxima.max_rating = -1.0;
        let err = settings.validate().unwrap_err();
        assert!(err.starts_with("scoring.reference_maxima"));
    }

    #[test]
    fn test_from_file_overrides_defaults() {
        let dir = std::env::temp_dir().join(format!("cp_scorer_settings_{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("settings.json");
        std::fs::write(
            &path,
            r#"{"api": {"submission_count": 500}, "scoring": {"reference_maxima": {"max_topics": 60.0}}}"#,
        )
        .unwrap();

        let settings = Settings::from_file(&path).unwrap();
        assert_eq!(settings.api.submission_count, 500);
        assert_eq!(settings.api.timeout_seconds, 30);
        assert_eq!(settings.scoring.reference_maxima.max_topics, 60.0);
        assert_eq!(settings.scoring.reference_maxima.max_rating, 3500.0);

        std::fs::remove_dir_all(&dir).ok();
    }
}
