use serde::Deserialize;

/// Upstream search API settings. Key and engine id are secrets and only ever
/// enter the process through the environment.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchConfig {
    pub api_key: String,
    pub engine_id: String,
    pub base_url: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub database_url: String,
    pub search: SearchConfig,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url = std::env::var("DATABASE_URL")?;
        let search = SearchConfig {
            api_key: std::env::var("SEARCH_API_KEY")?,
            engine_id: std::env::var("SEARCH_ENGINE_ID")?,
            base_url: std::env::var("SEARCH_API_URL")
                .unwrap_or_else(|_| "https://www.googleapis.com/customsearch/v1".into()),
        };
        Ok(Self {
            database_url,
            search,
        })
    }
}
