use async_trait::async_trait;
use serde_json::Value;

use super::client::HealthApi;
use super::error::ApiError;
use super::types::NewsItem;

/// The reads a screen performs when it mounts.
#[async_trait]
pub trait NewsSource: Send + Sync {
    async fn get_news(&self) -> Result<Vec<NewsItem>, ApiError>;

    async fn get_news_by_id(&self, id: &str) -> Result<NewsItem, ApiError>;

    async fn get_notifications(&self) -> Result<Value, ApiError>;
}

#[async_trait]
impl NewsSource for HealthApi {
    async fn get_news(&self) -> Result<Vec<NewsItem>, ApiError> {
        HealthApi::get_news(self).await
    }

    async fn get_news_by_id(&self, id: &str) -> Result<NewsItem, ApiError> {
        HealthApi::get_news_by_id(self, id).await
    }

    async fn get_notifications(&self) -> Result<Value, ApiError> {
        HealthApi::get_notifications(self).await
    }
}
