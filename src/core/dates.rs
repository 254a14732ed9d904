//! Display formatting for `published_at` timestamps.
//! Times are shown in the offset the server sent; unparseable values are shown raw.

use chrono::DateTime;

/// Short form used in lists, e.g. `7/17/2024`.
pub fn short_date(timestamp: &str) -> String {
    format_or_raw(timestamp, "%-m/%-d/%Y")
}

/// Long form used on the detail screen, e.g. `July 17, 2024, 09:21 AM`.
pub fn long_date_time(timestamp: &str) -> String {
    format_or_raw(timestamp, "%B %-d, %Y, %I:%M %p")
}

fn format_or_raw(timestamp: &str, fmt: &str) -> String {
    match DateTime::parse_from_rfc3339(timestamp) {
        Ok(dt) => dt.format(fmt).to_string(),
        Err(_) => timestamp.to_string(),
    }
}
