// src/client.rs
use std::time::Duration;

use anyhow::{anyhow, Context, Result};
use async_trait::async_trait;
use metrics::{counter, describe_counter};
use once_cell::sync::OnceCell;

use crate::config::Settings;
use crate::types::{Source, Topic, TopicQuery};

/// One-time metrics registration (so series show up on whatever exporter the
/// embedding app wires).
fn ensure_metrics_described() {
    static ONCE: OnceCell<()> = OnceCell::new();
    ONCE.get_or_init(|| {
        describe_counter!("topics_fetch_total", "Outbound hot-topics fetch attempts.");
        describe_counter!(
            "topics_fetch_errors_total",
            "Hot-topics fetches that failed (transport, status, or decode)."
        );
    });
}

/// Data-access seam the store (and tests) program against.
#[async_trait]
pub trait TopicsApi: Send + Sync {
    /// Fetch the combined trending list, optionally filtered.
    async fn fetch_all(&self, query: Option<TopicQuery>) -> Result<Vec<Topic>>;

    /// Fetch one origin's trending list.
    async fn fetch_by_source(&self, source: Source, limit: Option<u32>) -> Result<Vec<Topic>>;
}

/// Reqwest-backed client for the hot-topics HTTP API.
///
/// One outbound GET per call, no retries, no caching. Non-2xx statuses are
/// reported as errors with the status code in the message; the response body
/// is trusted to be a JSON array of topic objects.
pub struct HttpTopicsClient {
    http: reqwest::Client,
    base_url: String,
}

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

impl HttpTopicsClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_timeout(base_url, DEFAULT_TIMEOUT)
    }

    pub fn with_timeout(base_url: impl Into<String>, timeout: Duration) -> Self {
        let http = reqwest::Client::builder()
            .user_agent("hot-topics-client/0.1")
            .connect_timeout(Duration::from_secs(4).min(timeout))
            .timeout(timeout)
            .build()
            .expect("reqwest client");
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self { http, base_url }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::with_timeout(
            settings.api_base_url.clone(),
            Duration::from_secs(settings.request_timeout_secs),
        )
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get_topics(&self, url: &str, req: reqwest::RequestBuilder) -> Result<Vec<Topic>> {
        ensure_metrics_described();
        counter!("topics_fetch_total").increment(1);

        let resp = match req.send().await.with_context(|| format!("GET {url}")) {
            Ok(resp) => resp,
            Err(e) => {
                counter!("topics_fetch_errors_total").increment(1);
                return Err(e);
            }
        };

        let status = resp.status();
        if !status.is_success() {
            counter!("topics_fetch_errors_total").increment(1);
            return Err(anyhow!("hot-topics request failed: status {status} for {url}"));
        }

        let topics: Vec<Topic> = match resp
            .json()
            .await
            .with_context(|| format!("decoding hot-topics body from {url}"))
        {
            Ok(topics) => topics,
            Err(e) => {
                counter!("topics_fetch_errors_total").increment(1);
                return Err(e);
            }
        };

        tracing::debug!(count = topics.len(), url, "fetched hot topics");
        Ok(topics)
    }
}

#[async_trait]
impl TopicsApi for HttpTopicsClient {
    async fn fetch_all(&self, query: Option<TopicQuery>) -> Result<Vec<Topic>> {
        let url = format!("{}/hot-topics", self.base_url);
        let mut req = self.http.get(&url);
        if let Some(q) = &query {
            req = req.query(q);
        }
        self.get_topics(&url, req).await
    }

    async fn fetch_by_source(&self, source: Source, limit: Option<u32>) -> Result<Vec<Topic>> {
        let url = format!("{}/hot-topics/{}", self.base_url, source);
        let mut req = self.http.get(&url);
        if let Some(n) = limit {
            req = req.query(&[("limit", n)]);
        }
        self.get_topics(&url, req).await
    }
}
