//! # News List Screen
//!
//! Fetches the news feed once on mount. When the API is unreachable the
//! screen still shows something useful: two bundled sample stories, plus
//! the error and a retry hint.

use std::fmt::Write;

use async_trait::async_trait;
use log::{info, warn};

use super::{RenderContext, Screen, wrap_lines};
use crate::api::{NewsItem, NewsSource};
use crate::core::action::{Action, update};
use crate::core::dates::short_date;
use crate::core::media::{PLACEHOLDER_IMAGE, format_image_url};
use crate::core::state::ScreenState;

pub const LOAD_ERROR: &str = "Failed to load news. Please check your connection.";

pub struct NewsListScreen {
    pub state: ScreenState<Vec<NewsItem>>,
}

impl Default for NewsListScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl NewsListScreen {
    pub fn new() -> Self {
        Self {
            state: ScreenState::new(),
        }
    }

    /// The "Retry" button: identical to the initial load.
    pub async fn retry(&mut self, source: &dyn NewsSource) {
        self.load(source).await;
    }

    pub fn items(&self) -> &[NewsItem] {
        self.state.data.as_deref().unwrap_or_default()
    }
}

#[async_trait]
impl Screen for NewsListScreen {
    async fn load(&mut self, source: &dyn NewsSource) {
        update(&mut self.state, Action::Load);
        match source.get_news().await {
            Ok(news) => {
                info!("News list loaded: {} items", news.len());
                update(&mut self.state, Action::Loaded(news));
            }
            Err(e) => {
                warn!("Failed to load news: {e}");
                update(
                    &mut self.state,
                    Action::Failed {
                        message: LOAD_ERROR.to_string(),
                        fallback: Some(fallback_news()),
                    },
                );
            }
        }
    }

    fn render(&self, ctx: &RenderContext<'_>) -> String {
        if self.state.loading {
            return "Loading news...".to_string();
        }

        let mut out = String::from("Latest News\n");

        if let Some(ref error) = self.state.error {
            let _ = writeln!(out, "\n! {error}");
            let _ = writeln!(out, "  Retry");
        }

        let preview_width = ctx.width.saturating_sub(4);
        for item in self.items() {
            let _ = writeln!(out, "\n• {}", item.title);
            let content = item
                .content
                .as_deref()
                .filter(|c| !c.is_empty())
                .unwrap_or("No description available");
            for line in wrap_lines(content, preview_width, Some(2)) {
                let _ = writeln!(out, "  {line}");
            }
            let _ = writeln!(out, "  {}", short_date(&item.published_at));
            let image = format_image_url(item.image.as_deref(), ctx.media_host)
                .unwrap_or_else(|| PLACEHOLDER_IMAGE.to_string());
            let _ = writeln!(out, "  {image}");
            let _ = writeln!(out, "  → healthnews show --id {}", item.id);
        }

        out
    }
}

/// Sample stories shown when the feed cannot be fetched.
pub fn fallback_news() -> Vec<NewsItem> {
    vec![
        NewsItem {
            id: "1".to_string(),
            title: "Burn Ward of Bir Hospital to Be Fully Operational".to_string(),
            content: Some(
                "Bir Hospital is set to fully open its burn ward next week with upgraded facilities and treatment units."
                    .to_string(),
            ),
            published_at: "2024-07-17T09:21:53Z".to_string(),
            image: Some(
                "https://republicaimg.nagariknewscdn.com/shared/web/uploads/media/birhospital-1200x560_20240717092153.jpeg"
                    .to_string(),
            ),
            tags: Vec::new(),
            category: Vec::new(),
        },
        NewsItem {
            id: "2".to_string(),
            title: "Dengue Spreads Across Koshi Province".to_string(),
            content: Some(
                "Dengue outbreak spreads to all 14 districts of Koshi Province, with 3 fatalities reported so far."
                    .to_string(),
            ),
            published_at: "2024-05-15T10:30:00Z".to_string(),
            image: Some(
                "https://english.makalukhabar.com/wp-content/uploads/2024/05/MOSQUITO-MK-scaled.jpg".to_string(),
            ),
            tags: Vec::new(),
            category: Vec::new(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{StubSource, sample_item};

    #[test]
    fn test_renders_loading_before_mount() {
        let screen = NewsListScreen::new();
        assert_eq!(screen.render(&RenderContext::default()), "Loading news...");
    }

    #[test]
    fn test_load_success() {
        let source = StubSource::with_news(vec![sample_item("10", "Clinic opens")]);
        let mut screen = NewsListScreen::new();
        tokio_test::block_on(screen.load(&source));

        assert!(!screen.state.loading);
        assert!(screen.state.error.is_none());
        assert_eq!(screen.items().len(), 1);
        assert_eq!(screen.items()[0].id, "10");
    }

    #[test]
    fn test_load_failure_falls_back_to_two_samples() {
        let source = StubSource::failing();
        let mut screen = NewsListScreen::new();
        tokio_test::block_on(screen.load(&source));

        assert_eq!(screen.state.error.as_deref(), Some(LOAD_ERROR));
        let ids: Vec<&str> = screen.items().iter().map(|n| n.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2"]);

        let rendered = screen.render(&RenderContext::default());
        assert!(rendered.contains(LOAD_ERROR));
        assert!(rendered.contains("Retry"));
        assert!(rendered.contains("Dengue Spreads Across Koshi Province"));
    }

    #[test]
    fn test_retry_recovers() {
        let source = StubSource::with_news(vec![sample_item("5", "Fresh")]).failing_times(1);
        let mut screen = NewsListScreen::new();
        tokio_test::block_on(screen.load(&source));
        assert!(screen.state.error.is_some());

        tokio_test::block_on(screen.retry(&source));
        assert!(screen.state.error.is_none());
        assert_eq!(screen.items()[0].title, "Fresh");
        assert_eq!(source.news_calls(), 2);
    }

    #[test]
    fn test_render_rewrites_media_and_uses_placeholder() {
        let mut with_image = sample_item("1", "Has image");
        with_image.image = Some("/media/news/a.jpg".to_string());
        let without_image = sample_item("2", "No image");
        let source = StubSource::with_news(vec![with_image, without_image]);

        let mut screen = NewsListScreen::new();
        tokio_test::block_on(screen.load(&source));
        let rendered = screen.render(&RenderContext::default());

        assert!(rendered.contains("http://127.0.0.1:8000/media/news/a.jpg"));
        assert!(rendered.contains(PLACEHOLDER_IMAGE));
        assert!(rendered.contains("No description available"));
    }

    #[test]
    fn test_render_short_date() {
        let source = StubSource::with_news(vec![sample_item("1", "Dated")]);
        let mut screen = NewsListScreen::new();
        tokio_test::block_on(screen.load(&source));
        assert!(screen.render(&RenderContext::default()).contains("7/17/2024"));
    }
}
