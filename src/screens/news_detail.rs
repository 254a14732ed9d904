//! # News Detail Screen
//!
//! Opened with an article id. Older links carried a plain `url` instead;
//! those are shown as a link without contacting the API.

use std::fmt::Write;

use async_trait::async_trait;
use log::{info, warn};

use super::{RenderContext, Screen, wrap_lines};
use crate::api::{NewsItem, NewsSource};
use crate::core::action::{Action, update};
use crate::core::dates::long_date_time;
use crate::core::media::format_image_url;
use crate::core::state::ScreenState;

pub const LOAD_ERROR: &str = "Failed to load news details.";

pub struct NewsDetailScreen {
    id: Option<String>,
    url: Option<String>,
    pub state: ScreenState<NewsItem>,
}

impl NewsDetailScreen {
    pub fn new(id: Option<String>, url: Option<String>) -> Self {
        Self {
            id,
            url,
            state: ScreenState::new(),
        }
    }

    pub fn item(&self) -> Option<&NewsItem> {
        self.state.data.as_ref()
    }
}

#[async_trait]
impl Screen for NewsDetailScreen {
    async fn load(&mut self, source: &dyn NewsSource) {
        let Some(id) = self.id.clone().filter(|id| !id.is_empty()) else {
            update(&mut self.state, Action::Idle);
            return;
        };

        update(&mut self.state, Action::Load);
        match source.get_news_by_id(&id).await {
            Ok(item) => {
                info!("News detail loaded: {}", item.id);
                update(&mut self.state, Action::Loaded(item));
            }
            Err(e) => {
                warn!("Failed to load news detail {id}: {e}");
                update(
                    &mut self.state,
                    Action::Failed {
                        message: LOAD_ERROR.to_string(),
                        fallback: None,
                    },
                );
            }
        }
    }

    fn render(&self, ctx: &RenderContext<'_>) -> String {
        if self.state.loading {
            return "Loading news details...".to_string();
        }
        if let Some(ref error) = self.state.error {
            return error.clone();
        }

        let Some(item) = self.item() else {
            return match self.url {
                Some(ref url) => format!("Open in browser: {url}"),
                None => "No news details available.".to_string(),
            };
        };

        let mut out = String::new();
        let _ = writeln!(out, "{}", item.title);
        let _ = writeln!(out, "{}", long_date_time(&item.published_at));

        if let Some(image) = format_image_url(item.image.as_deref(), ctx.media_host) {
            let _ = writeln!(out, "\n[image] {image}");
        }

        if !item.category.is_empty() {
            let chips: Vec<String> = item.category.iter().map(|c| format!("[{}]", c.name)).collect();
            let _ = writeln!(out, "\n{}", chips.join(" "));
        }

        let content = item
            .content
            .as_deref()
            .filter(|c| !c.is_empty())
            .unwrap_or("No content available for this news item.");
        out.push('\n');
        for line in wrap_lines(content, ctx.width, None) {
            let _ = writeln!(out, "{line}");
        }

        if !item.tags.is_empty() {
            let tags: Vec<String> = item.tags.iter().map(|t| format!("#{}", t.name)).collect();
            let _ = writeln!(out, "\nTags:\n{}", tags.join(" "));
        }

        out
    }
}
