//! # Screens
//!
//! Plain-text renditions of the app's three screens.
//!
//! Each screen follows the same lifecycle:
//!
//! ```text
//! new() ──▶ load(source) ──▶ render(ctx)
//!  (loading)   (one request)    (loading / error / data)
//! ```
//!
//! A screen issues at most one request per `load`. A manual retry is just
//! another `load`. State transitions go through `core::action::update`.
//!
//! Screens receive everything they render from as "props" (`RenderContext`)
//! rather than reaching for global config.

use async_trait::async_trait;

use crate::api::NewsSource;
use crate::core::config::DEFAULT_MEDIA_HOST;

pub mod news_detail;
pub mod news_list;
pub mod notifications;

pub use news_detail::NewsDetailScreen;
pub use news_list::NewsListScreen;
pub use notifications::NotificationsScreen;

/// Presentation inputs shared by all screens.
#[derive(Debug, Clone)]
pub struct RenderContext<'a> {
    pub media_host: &'a str,
    /// Column budget for wrapped text.
    pub width: usize,
}

impl Default for RenderContext<'_> {
    fn default() -> Self {
        Self {
            media_host: DEFAULT_MEDIA_HOST,
            width: 80,
        }
    }
}

#[async_trait]
pub trait Screen: Send {
    /// Fetch whatever this screen shows. Errors are absorbed into screen state.
    async fn load(&mut self, source: &dyn NewsSource);

    /// Render the current state.
    fn render(&self, ctx: &RenderContext<'_>) -> String;
}

/// Wraps `text` to `width` columns, keeping at most `max_lines` lines.
/// A truncated result ends with `...`.
pub(crate) fn wrap_lines(text: &str, width: usize, max_lines: Option<usize>) -> Vec<String> {
    let mut lines: Vec<String> = textwrap::wrap(text, width.max(10))
        .into_iter()
        .map(|l| l.into_owned())
        .collect();
    if let Some(max) = max_lines
        && lines.len() > max
    {
        lines.truncate(max);
        if let Some(last) = lines.last_mut() {
            last.push_str("...");
        }
    }
    lines
}
