// MediaWiki Action API client — unauthenticated GETs against /w/api.php.
//
// Every request asks for `format=json&formatversion=2`. The API reports
// errors inside a 200 response (`{"error": {...}}`), so responses are checked
// for an error object before being deserialized into the caller's type.

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::debug;

use super::rate_limiter::RateLimiter;

/// Default request rate against the API.
pub const DEFAULT_REQUESTS_PER_SECOND: f64 = 5.0;

/// Default API endpoint for a language edition.
pub fn default_api_url(language: &str) -> String {
    format!("https://{language}.wikipedia.org/w/api.php")
}

/// Thin reqwest wrapper for MediaWiki API queries.
pub struct WikipediaClient {
    client: reqwest::Client,
    api_url: String,
    rate_limiter: RateLimiter,
    /// Search for the best-matching title before fetching a page
    pub auto_suggest: bool,
}

impl WikipediaClient {
    /// Create a client pointing at the given `api.php` URL.
    pub fn new(api_url: &str, requests_per_second: f64, auto_suggest: bool) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(concat!(
                "fuse/",
                env!("CARGO_PKG_VERSION"),
                " (concept relation discovery)"
            ))
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            api_url: api_url.to_string(),
            rate_limiter: RateLimiter::new(requests_per_second)?,
            auto_suggest,
        })
    }

    /// Run an API query and deserialize the response.
    ///
    /// `params` are query string pairs; the format parameters are added here.
    pub async fn api_get<T: DeserializeOwned>(&self, params: &[(&str, &str)]) -> Result<T> {
        self.rate_limiter.acquire().await;

        debug!(?params, "MediaWiki API request");

        let response = self
            .client
            .get(&self.api_url)
            .query(&[("format", "json"), ("formatversion", "2")])
            .query(params)
            .send()
            .await
            .with_context(|| format!("MediaWiki request failed: {}", self.api_url))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("MediaWiki API returned {status}: {body}");
        }

        let body: serde_json::Value = response
            .json()
            .await
            .context("Failed to parse MediaWiki response")?;

        parse_api_response(body)
    }
}

/// Surface an API-level error, otherwise deserialize the body.
pub fn parse_api_response<T: DeserializeOwned>(body: serde_json::Value) -> Result<T> {
    if let Some(error) = body.get("error") {
        let error: ApiError =
            serde_json::from_value(error.clone()).context("Failed to parse MediaWiki error")?;
        anyhow::bail!("MediaWiki API error {}: {}", error.code, error.info);
    }

    serde_json::from_value(body).context("Unexpected MediaWiki response shape")
}

#[derive(Debug, Deserialize)]
struct ApiError {
    code: String,
    #[serde(default)]
    info: String,
}
