//! Disaster news panel
//!
//! Fetches a fixed-size page of placeholder posts over HTTP and cosmetically
//! relabels them as disaster alerts. Deliberately a stand-in for a real news
//! integration: the endpoint is configurable so one can be pointed at later,
//! but nothing here is genuine news data.
//!
//! The only external failure path in the demo lives here; failures surface
//! one static user-facing message and a manual refresh re-invokes the fetch.

use crate::errors::{Result, SiteError};
use chrono::{DateTime, Duration as ChronoDuration, Utc};
use rand::Rng;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default placeholder endpoint (JSONPlaceholder posts)
pub const DEFAULT_NEWS_URL: &str = "https://jsonplaceholder.typicode.com/posts";

/// Fixed page size
pub const DEFAULT_PAGE_SIZE: usize = 6;

/// Static user-facing message for any fetch failure
pub const FETCH_ERROR_MESSAGE: &str =
    "Unable to fetch latest news. Please check your internet connection and try again.";

/// Request timeout
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Title preview length (chars)
const TITLE_PREVIEW_LEN: usize = 50;

/// Description preview length (chars)
const BODY_PREVIEW_LEN: usize = 120;

/// Source labels, alternated by article position
const SOURCE_LABELS: [&str; 2] = ["Emergency Alert System", "Disaster Response Network"];

/// Randomized publish window: within the last 24 hours
const PUBLISH_WINDOW_MS: i64 = 86_400_000;

/// Raw placeholder post as served by the endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct PlaceholderPost {
    pub id: u64,
    pub title: String,
    pub body: String,
}

/// Pseudo-article synthesized for display
#[derive(Debug, Clone, Serialize)]
pub struct NewsArticle {
    pub id: u64,
    pub title: String,
    pub description: String,
    pub url: String,
    pub source: String,
    pub published_at: DateTime<Utc>,
}

/// News fetch client
#[derive(Debug, Clone)]
pub struct NewsClient {
    client: Client,
    endpoint: String,
    page_size: usize,
}

impl NewsClient {
    /// Create a client against the default placeholder endpoint
    pub fn new() -> Result<Self> {
        Self::with_config(DEFAULT_NEWS_URL, DEFAULT_PAGE_SIZE)
    }

    /// Create a client with a custom endpoint and page size
    pub fn with_config(endpoint: &str, page_size: usize) -> Result<Self> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(SiteError::HttpError)?;

        Ok(NewsClient {
            client,
            endpoint: endpoint.to_string(),
            page_size,
        })
    }

    /// Fetch one page of posts and relabel them as disaster alerts
    ///
    /// No automatic retry: callers re-invoke on user-triggered refresh.
    pub async fn fetch_articles(&self) -> Result<Vec<NewsArticle>> {
        let response = self
            .client
            .get(&self.endpoint)
            .query(&[("_limit", self.page_size)])
            .send()
            .await
            .map_err(|e| SiteError::NewsApiError(format!("Failed to send request: {}", e)))?;

        if !response.status().is_success() {
            return Err(SiteError::NewsApiError(format!(
                "HTTP {}",
                response.status()
            )));
        }

        let posts: Vec<PlaceholderPost> = response
            .json()
            .await
            .map_err(|e| SiteError::NewsApiError(format!("Failed to parse posts: {}", e)))?;

        Ok(relabel_posts(posts, Utc::now(), &mut rand::thread_rng()))
    }

    /// Configured endpoint
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Configured page size
    pub fn page_size(&self) -> usize {
        self.page_size
    }
}

/// Relabel placeholder posts into pseudo-articles
///
/// Pure transform: title prefixed and truncated, body truncated, source
/// alternated by position, publish time randomized within the last 24h.
pub fn relabel_posts<R: Rng>(
    posts: Vec<PlaceholderPost>,
    now: DateTime<Utc>,
    rng: &mut R,
) -> Vec<NewsArticle> {
    posts
        .into_iter()
        .enumerate()
        .map(|(index, post)| {
            let age_ms = rng.gen_range(0..PUBLISH_WINDOW_MS);
            NewsArticle {
                id: post.id,
                title: format!("Disaster Alert: {}...", preview(&post.title, TITLE_PREVIEW_LEN)),
                description: format!("{}...", preview(&post.body, BODY_PREVIEW_LEN)),
                url: format!("#news-{}", post.id),
                source: SOURCE_LABELS[index % 2].to_string(),
                published_at: now - ChronoDuration::milliseconds(age_ms),
            }
        })
        .collect()
}

/// First `max` chars of `text` (char-boundary safe)
fn preview(text: &str, max: usize) -> String {
    text.chars().take(max).collect()
}
