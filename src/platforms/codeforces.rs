use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::{
    models::{
        codeforces::{CodeforcesUser, Contest, RatingChange, Submission},
        CpScoreError, Platform, Result,
    },
    platforms::{client::ClientConfig, CodeforcesApi},
};

/// Codeforces REST client. One request per call; failures are returned as-is.
pub struct CodeforcesClient {
    http_client: reqwest::Client,
    base_url: String,
}

#[derive(Deserialize)]
struct ApiEnvelope<T> {
    status: String,
    #[serde(default)]
    comment: Option<String>,
    result: Option<T>,
}

impl CodeforcesClient {
    pub fn new(config: ClientConfig) -> Result<Self> {
        Ok(Self {
            http_client: config.http_client()?,
            base_url: config.base_url,
        })
    }

    async fn call<T: DeserializeOwned>(
        &self,
        method: &str,
        query: &[(&str, String)],
        handle: Option<&str>,
        fallback: &str,
    ) -> Result<T> {
        let url = format!("{}/{}", self.base_url, method);
        debug!("GET {} {:?}", url, query);

        let response = self.http_client.get(&url).query(query).send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;

        decode_envelope(status, &body, handle, fallback)
    }
}

/// Decode a Codeforces `{status, comment, result}` envelope.
///
/// The API answers failed calls with HTTP 400 and a FAILED envelope, so the
/// body is decoded before the HTTP status is considered.
pub(crate) fn decode_envelope<T: DeserializeOwned>(
    http_status: u16,
    body: &str,
    handle: Option<&str>,
    fallback: &str,
) -> Result<T> {
    let envelope: ApiEnvelope<T> = match serde_json::from_str(body) {
        Ok(envelope) => envelope,
        Err(_) if !(200..300).contains(&http_status) => {
            return Err(CpScoreError::api(
                Platform::Codeforces,
                format!("{} (HTTP {})", fallback, http_status),
            ));
        }
        Err(e) => return Err(e.into()),
    };

    if envelope.status != "OK" {
        let comment = envelope
            .comment
            .filter(|c| !c.trim().is_empty())
            .unwrap_or_else(|| fallback.to_string());

        if let Some(handle) = handle {
            if comment.contains("not found") {
                return Err(CpScoreError::not_found(Platform::Codeforces, handle));
            }
        }
        warn!("Codeforces call failed: {}", comment);
        return Err(CpScoreError::api(Platform::Codeforces, comment));
    }

    envelope
        .result
        .ok_or_else(|| CpScoreError::api(Platform::Codeforces, format!("{}: empty result", fallback)))
}

#[async_trait]
impl CodeforcesApi for CodeforcesClient {
    async fn get_user_info(&self, handle: &str) -> Result<CodeforcesUser> {
        let users: Vec<CodeforcesUser> = self
            .call(
                "user.info",
                &[("handles", handle.to_string())],
                Some(handle),
                "Failed to fetch user info",
            )
            .await?;

        users
            .into_iter()
            .next()
            .ok_or_else(|| CpScoreError::not_found(Platform::Codeforces, handle))
    }

    async fn get_user_rating(&self, handle: &str) -> Result<Vec<RatingChange>> {
        self.call(
            "user.rating",
            &[("handle", handle.to_string())],
            Some(handle),
            "Failed to fetch user rating",
        )
        .await
    }

    async fn get_user_submissions(&self, handle: &str, from: u32, count: u32) -> Result<Vec<Submission>> {
        self.call(
            "user.status",
            &[
                ("handle", handle.to_string()),
                ("from", from.to_string()),
                ("count", count.to_string()),
            ],
            Some(handle),
            "Failed to fetch user submissions",
        )
        .await
    }

    async fn get_contest_list(&self) -> Result<Vec<Contest>> {
        self.call(
            "contest.list",
            &[("gym", "false".to_string())],
            None,
            "Failed to fetch contest list",
        )
        .await
    }
}
