use crate::coincap::{AssetsQuery, DEFAULT_ASSETS_URL};
use serde::Deserialize;
use std::io::{Error, ErrorKind, Result};
use tokio::fs;
use tracing::debug;

fn default_base_url() -> String {
    DEFAULT_ASSETS_URL.to_string()
}

fn default_decimals() -> u8 {
    2
}

#[derive(Debug, Deserialize)]
pub struct Config {
    #[serde(default = "default_base_url")]
    pub base_url: String, // Assets endpoint, every query is sent here
    #[serde(default)]
    pub api_key: String, // Sent as a bearer token when not empty
    #[serde(default = "default_decimals")]
    pub decimals: u8, // Decimal places of prices in log output
    #[serde(default)]
    pub queries: Vec<QueryConfig>, // Queries to run, in order
}

#[derive(Debug, Deserialize)]
pub struct QueryConfig {
    pub label: String, // Shown in log lines for this query
    #[serde(default)]
    pub query: AssetsQuery, // Empty means the unfiltered listing
}

impl Config {
    pub async fn load(file_path: &str) -> Result<Config> {
        let config_string = fs::read_to_string(file_path).await?;
        let config = Config::from_json(&config_string)?;
        debug!(
            "Loaded {} queries for {} from {}",
            config.queries.len(),
            config.base_url,
            file_path
        );
        Ok(config)
    }

    pub fn from_json(json: &str) -> Result<Config> {
        let config: Config = serde_json::from_str(json)?;

        if !config.base_url.starts_with("http://") && !config.base_url.starts_with("https://") {
            return Err(Error::new(
                ErrorKind::InvalidData,
                format!("base_url must be an http(s) URL, got {:?}", config.base_url),
            ));
        }
        if let Some(index) = config.queries.iter().position(|q| q.label.trim().is_empty()) {
            return Err(Error::new(
                ErrorKind::InvalidData,
                format!("query #{} has an empty label", index),
            ));
        }

        Ok(config)
    }
}
