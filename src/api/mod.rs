pub mod client;
pub mod endpoints;
pub mod error;
pub mod source;
pub mod types;

pub use client::HealthApi;
pub use error::ApiError;
pub use source::NewsSource;
pub use types::{ApiResponse, Label, Listing, NewsItem};
