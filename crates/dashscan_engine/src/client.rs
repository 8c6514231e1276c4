use std::time::Duration;

use dashscan_core::{Item, SubmissionId};
use engine_logging::{engine_debug, engine_info, engine_warn};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use url::Url;

use crate::{FailureKind, FetchError, SearchError};

pub const DEFAULT_BASE_URL: &str = "https://hacker-news.firebaseio.com/v0/";

#[derive(Debug, Clone)]
pub struct ClientSettings {
    pub base_url: String,
    pub user_agent: String,
    /// `None` leaves timeouts to reqwest's defaults.
    pub request_timeout: Option<Duration>,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: concat!("dashscan/", env!("CARGO_PKG_VERSION")).to_string(),
            request_timeout: None,
        }
    }
}

/// Resolves a username to its submission ids, oldest first.
#[async_trait::async_trait]
pub trait SubmissionLister: Send + Sync {
    async fn list_submissions(&self, username: &str) -> Result<Vec<SubmissionId>, SearchError>;
}

/// Best-effort lookup of a single item.
#[async_trait::async_trait]
pub trait ItemFetcher: Send + Sync {
    async fn fetch_item(&self, id: SubmissionId) -> Result<Item, FetchError>;
}

#[derive(Deserialize)]
struct UserRecord {
    #[serde(default)]
    submitted: Vec<SubmissionId>,
}

/// Read-only client for the Hacker News Firebase API.
#[derive(Debug, Clone)]
pub struct HackerNewsClient {
    client: reqwest::Client,
    base_url: Url,
}

impl HackerNewsClient {
    pub fn new(settings: ClientSettings) -> Result<Self, FetchError> {
        let base_url = parse_base_url(&settings.base_url)?;
        let mut builder = reqwest::Client::builder().user_agent(settings.user_agent);
        if let Some(timeout) = settings.request_timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|err| FetchError::new(FailureKind::Network, err.to_string()))?;
        Ok(Self { client, base_url })
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, FetchError> {
        let url = self
            .base_url
            .join(path)
            .map_err(|err| FetchError::new(FailureKind::InvalidUrl, err.to_string()))?;

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::new(
                FailureKind::HttpStatus(status.as_u16()),
                status.to_string(),
            ));
        }

        let body = response.bytes().await.map_err(map_reqwest_error)?;
        // The API answers `null` rather than 404 for unknown ids.
        let payload: Option<T> = serde_json::from_slice(&body)
            .map_err(|err| FetchError::new(FailureKind::Malformed, err.to_string()))?;
        payload.ok_or_else(|| FetchError::new(FailureKind::Missing, "null payload"))
    }
}

#[async_trait::async_trait]
impl SubmissionLister for HackerNewsClient {
    async fn list_submissions(&self, username: &str) -> Result<Vec<SubmissionId>, SearchError> {
        let record: UserRecord = self
            .get_json(&format!("user/{username}.json"))
            .await
            .map_err(|err| {
                engine_warn!("User lookup for {} failed: {}", username, err);
                SearchError::user_not_found(username, err.to_string())
            })?;

        let mut ids = record.submitted;
        // Served newest first.
        ids.reverse();
        engine_info!("User {} has {} submissions", username, ids.len());
        Ok(ids)
    }
}

#[async_trait::async_trait]
impl ItemFetcher for HackerNewsClient {
    async fn fetch_item(&self, id: SubmissionId) -> Result<Item, FetchError> {
        let item: Item = self.get_json(&format!("item/{id}.json")).await?;
        engine_debug!("Fetched item {} ({})", id, item.kind);
        Ok(item)
    }
}

fn parse_base_url(raw: &str) -> Result<Url, FetchError> {
    let mut normalized = raw.trim().to_string();
    // `Url::join` drops the last segment unless the base ends with a slash.
    if !normalized.ends_with('/') {
        normalized.push('/');
    }
    Url::parse(&normalized).map_err(|err| FetchError::new(FailureKind::InvalidUrl, err.to_string()))
}

fn map_reqwest_error(err: reqwest::Error) -> FetchError {
    if err.is_timeout() {
        return FetchError::new(FailureKind::Timeout, err.to_string());
    }
    if err.is_decode() {
        return FetchError::new(FailureKind::Malformed, err.to_string());
    }
    FetchError::new(FailureKind::Network, err.to_string())
}
