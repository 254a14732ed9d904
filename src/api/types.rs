use serde::{Deserialize, Deserializer, Serialize};

/// A tag or category attached to a news item.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Label {
    pub id: u64,
    pub name: String,
}

/// A single health news article as served by `/api/news/`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct NewsItem {
    #[serde(deserialize_with = "opaque_id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub content: Option<String>,
    pub published_at: String,
    /// Absolute URL or a server-relative path such as `/media/x.jpg`.
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default, deserialize_with = "nullable_list")]
    pub tags: Vec<Label>,
    #[serde(default, deserialize_with = "nullable_list")]
    pub category: Vec<Label>,
}

/// Paginated envelope returned by list endpoints.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ApiResponse<T> {
    pub results: Vec<T>,
    #[serde(default)]
    pub count: u64,
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default)]
    pub previous: Option<String>,
}

/// A list endpoint body: either the paginated envelope or a bare array.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum Listing<T> {
    Envelope(ApiResponse<T>),
    Bare(Vec<T>),
}

impl<T> Listing<T> {
    /// Flattens either shape into the list of items, in server order.
    pub fn into_items(self) -> Vec<T> {
        match self {
            Listing::Envelope(page) => page.results,
            Listing::Bare(items) => items,
        }
    }
}

/// Identifiers arrive as strings or integers depending on the backend serializer.
fn opaque_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Number(i64),
    }

    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(s) => s,
        RawId::Number(n) => n.to_string(),
    })
}

fn nullable_list<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_news_item_minimal_fields() {
        let json = r#"{"id": "7", "title": "Clinic opens", "published_at": "2024-07-17T09:21:53Z"}"#;
        let item: NewsItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.id, "7");
        assert!(item.content.is_none());
        assert!(item.image.is_none());
        assert!(item.tags.is_empty());
        assert!(item.category.is_empty());
    }

    #[test]
    fn test_news_item_numeric_id_kept_as_text() {
        let json = r#"{"id": 42, "title": "t", "published_at": "2024-01-01T00:00:00Z"}"#;
        let item: NewsItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.id, "42");
    }

    #[test]
    fn test_news_item_null_optionals() {
        let json = r#"{
            "id": "1", "title": "t", "content": null, "published_at": "x",
            "image": null, "tags": null, "category": null
        }"#;
        let item: NewsItem = serde_json::from_str(json).unwrap();
        assert!(item.image.is_none());
        assert!(item.tags.is_empty());
        assert!(item.category.is_empty());
    }

    #[test]
    fn test_news_item_labels_keep_order() {
        let json = r#"{
            "id": "1", "title": "t", "published_at": "x",
            "tags": [{"id": 3, "name": "dengue"}, {"id": 1, "name": "koshi"}],
            "category": [{"id": 9, "name": "Outbreaks"}]
        }"#;
        let item: NewsItem = serde_json::from_str(json).unwrap();
        let names: Vec<&str> = item.tags.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["dengue", "koshi"]);
        assert_eq!(item.category[0], Label { id: 9, name: "Outbreaks".to_string() });
    }

    #[test]
    fn test_listing_envelope() {
        let json = r#"{"count": 5, "next": "http://x/api/news/?page=2", "previous": null,
                       "results": [{"id": "1", "title": "a", "published_at": "x"}]}"#;
        let listing: Listing<NewsItem> = serde_json::from_str(json).unwrap();
        match &listing {
            Listing::Envelope(page) => {
                // count is not reconciled with the page length
                assert_eq!(page.count, 5);
                assert_eq!(page.next.as_deref(), Some("http://x/api/news/?page=2"));
                assert!(page.previous.is_none());
            }
            Listing::Bare(_) => panic!("expected envelope"),
        }
        assert_eq!(listing.into_items().len(), 1);
    }

    #[test]
    fn test_listing_envelope_without_count() {
        let json = r#"{"results": []}"#;
        let listing: Listing<NewsItem> = serde_json::from_str(json).unwrap();
        assert!(matches!(listing, Listing::Envelope(ApiResponse { count: 0, .. })));
    }

    #[test]
    fn test_listing_bare_array() {
        let json = r#"[{"id": "1", "title": "a", "published_at": "x"},
                       {"id": "2", "title": "b", "published_at": "y"}]"#;
        let listing: Listing<NewsItem> = serde_json::from_str(json).unwrap();
        let ids: Vec<String> = listing.into_items().into_iter().map(|n| n.id).collect();
        assert_eq!(ids, vec!["1", "2"]);
    }

    #[test]
    fn test_listing_rejects_other_shapes() {
        assert!(serde_json::from_str::<Listing<NewsItem>>(r#"{"detail": "nope"}"#).is_err());
        assert!(serde_json::from_str::<Listing<NewsItem>>("42").is_err());
    }
}
