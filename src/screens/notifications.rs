//! # Notifications Screen

use std::fmt::Write;

use async_trait::async_trait;
use log::{info, warn};
use serde::Deserialize;

use super::{RenderContext, Screen, wrap_lines};
use crate::api::{ApiError, Listing, NewsSource};
use crate::core::action::{Action, update};
use crate::core::dates::short_date;
use crate::core::state::ScreenState;

pub const LOAD_ERROR: &str = "Failed to load notifications.";

/// The notification payload is loosely specified server-side; every field is optional.
#[derive(Deserialize, Debug, Clone, PartialEq, Default)]
pub struct Notification {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

pub struct NotificationsScreen {
    pub state: ScreenState<Vec<Notification>>,
}

impl Default for NotificationsScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl NotificationsScreen {
    pub fn new() -> Self {
        Self {
            state: ScreenState::new(),
        }
    }
}

async fn fetch(source: &dyn NewsSource) -> Result<Vec<Notification>, ApiError> {
    let value = source.get_notifications().await?;
    let listing: Listing<Notification> = serde_json::from_value(value)?;
    Ok(listing.into_items())
}

#[async_trait]
impl Screen for NotificationsScreen {
    async fn load(&mut self, source: &dyn NewsSource) {
        update(&mut self.state, Action::Load);
        match fetch(source).await {
            Ok(items) => {
                info!("Notifications loaded: {} items", items.len());
                update(&mut self.state, Action::Loaded(items));
            }
            Err(e) => {
                warn!("Failed to load notifications: {e}");
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
            return "Loading notifications...".to_string();
        }
        if let Some(ref error) = self.state.error {
            return error.clone();
        }

        let items = self.state.data.as_deref().unwrap_or_default();
        if items.is_empty() {
            return "No notifications yet.".to_string();
        }

        let mut out = String::from("Notifications\n");
        for n in items {
            let _ = writeln!(out, "\n• {}", n.title.as_deref().unwrap_or("Notification"));
            if let Some(ref message) = n.message {
                for line in wrap_lines(message, ctx.width.saturating_sub(2), None) {
                    let _ = writeln!(out, "  {line}");
                }
            }
            if let Some(ref created_at) = n.created_at {
                let _ = writeln!(out, "  {}", short_date(created_at));
            }
        }
        out
    }
}
