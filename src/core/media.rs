//! Image URL normalization.
//!
//! The backend serves uploaded images as server-relative `/media/...` paths.
//! Those need the host prepended before anything can fetch them.

pub const MEDIA_PREFIX: &str = "/media/";

/// Shown in the news list when an item has no image.
pub const PLACEHOLDER_IMAGE: &str = "https://via.placeholder.com/100x80?text=No+Image";

/// Rewrites `/media/` paths onto `media_host`; every other value passes through.
pub fn format_image_url(image: Option<&str>, media_host: &str) -> Option<String> {
    let image = image?;
    if image.is_empty() {
        return None;
    }
    if image.starts_with(MEDIA_PREFIX) {
        return Some(format!("{}{}", media_host.trim_end_matches('/'), image));
    }
    Some(image.to_string())
}
