use serde::{Deserialize, Serialize};

use crate::search::client::UpstreamItem;

#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub q: String,
}

/// One mapped upstream search hit.
#[derive(Debug, Serialize)]
pub struct SearchResult {
    pub title: String,
    pub link: String,
    pub snippet: String,
    #[serde(rename = "displayLink")]
    pub display_link: String,
}

/// Response envelope. `total` is only present when the upstream reported
/// items, matching the shape clients already parse.
#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub items: Vec<SearchResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<usize>,
}

impl From<UpstreamItem> for SearchResult {
    fn from(item: UpstreamItem) -> Self {
        Self {
            title: item.title,
            link: item.link,
            snippet: item.snippet,
            display_link: item.display_link,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_response_omits_total() {
        let response = SearchResponse {
            items: Vec::new(),
            total: None,
        };
        let json = serde_json::to_string(&response).unwrap();
        assert_eq!(json, r#"{"items":[]}"#);
    }

    #[test]
    fn mapped_item_keeps_upstream_field_names() {
        let response = SearchResponse {
            items: vec![SearchResult {
                title: "Cats".into(),
                link: "https://example.com/cats".into(),
                snippet: "About cats".into(),
                display_link: "example.com".into(),
            }],
            total: Some(1),
        };
        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains(r#""displayLink":"example.com""#));
        assert!(json.contains(r#""total":1"#));
    }
}
