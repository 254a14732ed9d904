//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use serde_json::Value;

use crate::api::{ApiError, NewsItem, NewsSource};

/// An in-memory `NewsSource`. Missing data answers with HTTP 500.
#[derive(Default)]
pub struct StubSource {
    news: Option<Vec<NewsItem>>,
    detail: Option<NewsItem>,
    notifications: Option<Value>,
    failures_remaining: AtomicUsize,
    news_calls: AtomicUsize,
    requested_ids: Mutex<Vec<String>>,
}

impl StubSource {
    /// Every call fails.
    pub fn failing() -> Self {
        Self::default()
    }

    pub fn with_news(news: Vec<NewsItem>) -> Self {
        Self {
            news: Some(news),
            ..Default::default()
        }
    }

    pub fn with_detail(item: NewsItem) -> Self {
        Self {
            detail: Some(item),
            ..Default::default()
        }
    }

    pub fn with_notifications(value: Value) -> Self {
        Self {
            notifications: Some(value),
            ..Default::default()
        }
    }

    /// The first `n` calls fail regardless of configured data.
    pub fn failing_times(self, n: usize) -> Self {
        self.failures_remaining.store(n, Ordering::SeqCst);
        self
    }

    pub fn news_calls(&self) -> usize {
        self.news_calls.load(Ordering::SeqCst)
    }

    pub fn requested_ids(&self) -> Vec<String> {
        self.requested_ids.lock().unwrap().clone()
    }

    fn respond<T: Clone>(&self, data: &Option<T>) -> Result<T, ApiError> {
        let forced = self
            .failures_remaining
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
            .is_ok();
        match data {
            Some(d) if !forced => Ok(d.clone()),
            _ => Err(ApiError::Http { status: 500 }),
        }
    }
}

#[async_trait]
impl NewsSource for StubSource {
    async fn get_news(&self) -> Result<Vec<NewsItem>, ApiError> {
        self.news_calls.fetch_add(1, Ordering::SeqCst);
        self.respond(&self.news)
    }

    async fn get_news_by_id(&self, id: &str) -> Result<NewsItem, ApiError> {
        self.requested_ids.lock().unwrap().push(id.to_string());
        self.respond(&self.detail)
    }

    async fn get_notifications(&self) -> Result<Value, ApiError> {
        self.respond(&self.notifications)
    }
}

/// A minimal news item with no content, image or labels.
pub fn sample_item(id: &str, title: &str) -> NewsItem {
    NewsItem {
        id: id.to_string(),
        title: title.to_string(),
        content: None,
        published_at: "2024-07-17T09:21:53Z".to_string(),
        image: None,
        tags: Vec::new(),
        category: Vec::new(),
    }
}
