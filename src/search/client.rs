use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use thiserror::Error;

use crate::config::SearchConfig;

#[derive(Debug, Error)]
pub enum SearchError {
    #[error("upstream request failed: {0}")]
    Request(#[source] reqwest::Error),
    #[error("upstream returned malformed body: {0}")]
    Decode(#[source] reqwest::Error),
}

/// Body returned by the hosted search API, reduced to the fields the proxy
/// reads. `items` is absent entirely when nothing matched.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpstreamResponse {
    pub items: Option<Vec<UpstreamItem>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpstreamItem {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub link: String,
    #[serde(default)]
    pub snippet: String,
    #[serde(default, rename = "displayLink")]
    pub display_link: String,
}

#[async_trait]
pub trait SearchClient: Send + Sync {
    async fn search(&self, query: &str) -> Result<UpstreamResponse, SearchError>;
}

/// reqwest-backed client for the hosted custom search endpoint.
pub struct CustomSearchClient {
    client: Client,
    config: SearchConfig,
}

impl CustomSearchClient {
    pub fn new(config: SearchConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }
}

#[async_trait]
impl SearchClient for CustomSearchClient {
    async fn search(&self, query: &str) -> Result<UpstreamResponse, SearchError> {
        let response = self
            .client
            .get(&self.config.base_url)
            .query(&[
                ("key", self.config.api_key.as_str()),
                ("cx", self.config.engine_id.as_str()),
                ("q", query),
            ])
            .send()
            .await
            .map_err(SearchError::Request)?;

        response
            .json::<UpstreamResponse>()
            .await
            .map_err(SearchError::Decode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn item_defaults_absent_fields_to_empty() {
        let item: UpstreamItem = serde_json::from_str(r#"{"title":"Cats"}"#).unwrap();
        assert_eq!(item.title, "Cats");
        assert_eq!(item.link, "");
        assert_eq!(item.snippet, "");
        assert_eq!(item.display_link, "");
    }

    #[test]
    fn display_link_uses_upstream_casing() {
        let item: UpstreamItem =
            serde_json::from_str(r#"{"displayLink":"example.com"}"#).unwrap();
        assert_eq!(item.display_link, "example.com");
    }

    #[test]
    fn response_without_items_decodes_to_none() {
        let body: UpstreamResponse =
            serde_json::from_str(r#"{"searchInformation":{"totalResults":"0"}}"#).unwrap();
        assert!(body.items.is_none());
    }
}
