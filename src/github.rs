use crate::error::{FeedError, Result};
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;
use url::Url;

const API_BASE_URL: &str = "https://api.github.com";

pub struct GitHubClient {
    client: Client,
}

impl GitHubClient {
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .user_agent("portfolio-feed/0.1.0")
            .timeout(Duration::from_secs(30))
            .build()?;

        Ok(GitHubClient { client })
    }

    /// Endpoint for a user's repositories, most-recently-updated first.
    /// The username lands in a path segment, so `Url` percent-encodes it.
    pub fn repos_url(username: &str, count: u32) -> Result<Url> {
        let mut url = Url::parse(API_BASE_URL)?;
        url.path_segments_mut()
            .expect("base URL cannot be a relative base")
            .push("users")
            .push(username)
            .push("repos");
        url.query_pairs_mut()
            .append_pair("sort", "updated")
            .append_pair("per_page", &count.to_string());
        Ok(url)
    }

    /// Fetch up to `count` repositories for `username` as raw JSON.
    ///
    /// A single request, no retries. Non-2xx responses fail with the status
    /// code and the response body (or the canonical reason if the body cannot
    /// be read). The payload is returned as a `Value` rather than a typed
    /// list; whether it is actually an array is the caller's concern.
    pub async fn fetch_user_repos(&self, username: &str, count: u32) -> Result<Value> {
        let url = Self::repos_url(username, count)?;

        let response = self
            .client
            .get(url)
            .header("Accept", "application/vnd.github.v3+json")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = match response.text().await {
                Ok(body) if !body.is_empty() => body,
                _ => status.canonical_reason().unwrap_or("Unknown error").to_string(),
            };
            return Err(FeedError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body = response.text().await?;
        let repos: Value = serde_json::from_str(&body)?;
        Ok(repos)
    }
}
