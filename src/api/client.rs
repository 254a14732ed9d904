//! HTTP client for the health backend.
//!
//! One logical operation maps to exactly one request:
//! build URL → send → check status → parse JSON → (unwrap envelope) → return.
//! Failures are logged here and handed back unchanged.

use std::time::Duration;

use log::{debug, error, info};
use reqwest::Method;
use reqwest::header::CONTENT_TYPE;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::endpoints;
use super::error::ApiError;
use super::types::{Listing, NewsItem};
use crate::core::config::ResolvedConfig;

pub const JSON_CONTENT_TYPE: &str = "application/json";

/// Client for the health news REST API.
pub struct HealthApi {
    base_url: String,
    client: reqwest::Client,
    timeout: Option<Duration>,
}

impl HealthApi {
    /// Creates a client for `base_url`. A trailing `/` is dropped so endpoint
    /// paths can be appended verbatim.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            client: reqwest::Client::new(),
            timeout: None,
        }
    }

    /// Builds a client from resolved config. The request timeout is attached
    /// only when `enforce_timeout` is set.
    pub fn from_config(config: &ResolvedConfig) -> Self {
        let api = Self::new(config.base_url.clone());
        if config.enforce_timeout {
            api.with_timeout(config.timeout)
        } else {
            api
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url, endpoint)
    }

    async fn make_request<T: DeserializeOwned>(
        &self,
        method: Method,
        endpoint: &str,
        body: Option<String>,
    ) -> Result<T, ApiError> {
        let result = self.send(method, endpoint, body).await;
        if let Err(ref e) = result {
            error!("API request failed: {e}");
        }
        result
    }

    async fn send<T: DeserializeOwned>(
        &self,
        method: Method,
        endpoint: &str,
        body: Option<String>,
    ) -> Result<T, ApiError> {
        let url = self.url(endpoint);
        info!("{method} {url}");

        let mut request = self
            .client
            .request(method, &url)
            .header(CONTENT_TYPE, JSON_CONTENT_TYPE);
        if let Some(timeout) = self.timeout {
            request = request.timeout(timeout);
        }
        if let Some(body) = body {
            request = request.body(body);
        }

        let response = request.send().await?;
        debug!("Response status for {url}: {}", response.status());

        if !response.status().is_success() {
            return Err(ApiError::Http {
                status: response.status().as_u16(),
            });
        }

        let text = response.text().await?;
        Ok(serde_json::from_str(&text)?)
    }

    // News endpoints

    /// Lists news, accepting both the paginated envelope and a bare array.
    pub async fn get_news(&self) -> Result<Vec<NewsItem>, ApiError> {
        let raw: Value = self.make_request(Method::GET, endpoints::NEWS, None).await?;
        let listing: Listing<NewsItem> = serde_json::from_value(raw.clone()).map_err(|e| {
            // untagged decoding hides which field failed
            debug!("Unexpected news payload: {raw}");
            error!("API request failed: {e}");
            ApiError::Parse(e)
        })?;
        let items = listing.into_items();
        debug!("Decoded {} news items", items.len());
        Ok(items)
    }

    pub async fn get_news_by_id(&self, id: &str) -> Result<NewsItem, ApiError> {
        self.make_request(Method::GET, &endpoints::news_detail(id), None)
            .await
    }

    // Health content endpoints

    pub async fn get_health_categories(&self) -> Result<Value, ApiError> {
        self.make_request(Method::GET, endpoints::CATEGORIES, None).await
    }

    pub async fn get_media_content(&self) -> Result<Value, ApiError> {
        self.make_request(Method::GET, endpoints::CONTENT, None).await
    }

    // Complaints endpoints

    pub async fn get_complaints(&self) -> Result<Value, ApiError> {
        self.make_request(Method::GET, endpoints::COMPLAINTS, None).await
    }

    /// Posts `payload` as-is, serialized to JSON.
    pub async fn create_complaint<P>(&self, payload: &P) -> Result<Value, ApiError>
    where
        P: Serialize + ?Sized,
    {
        let body = serde_json::to_string(payload).map_err(|e| {
            error!("API request failed: {e}");
            ApiError::Parse(e)
        })?;
        self.make_request(Method::POST, endpoints::COMPLAINTS, Some(body))
            .await
    }

    // Notifications

    pub async fn get_notifications(&self) -> Result<Value, ApiError> {
        self.make_request(Method::GET, endpoints::NOTIFICATIONS, None)
            .await
    }
}
