//! Fixed endpoint paths on the health backend.

pub const NEWS: &str = "/api/news/";
pub const CATEGORIES: &str = "/api/categories/";
pub const CONTENT: &str = "/api/content/";
pub const COMPLAINTS: &str = "/api/complains/";
pub const NOTIFICATIONS: &str = "/api/notifications/";

/// Detail path for a single news item, e.g. `/api/news/42/`.
pub fn news_detail(id: &str) -> String {
    format!("{NEWS}{id}/")
}
