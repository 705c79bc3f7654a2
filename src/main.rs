use std::env;
use tracing::debug;
use tracing::error;
use tracing::info;
use tracing::instrument;
use tracing::warn;
use tracing_subscriber::EnvFilter;

use coincap_asset_check::coincap::{CoinCapClient, CoinCapResponse};
use coincap_asset_check::config::{Config, QueryConfig};
use coincap_asset_check::format::format_asset_line;

const DEFAULT_CONFIG_PATH: &str = "app_config.json";

#[instrument(skip_all, fields(query = %query_config.label))]
async fn run_query(client: &CoinCapClient, query_config: &QueryConfig, decimals: u8) -> bool {
    debug!("Running query {:?}", query_config.query);

    let response = match client.get_assets(&query_config.query).await {
        Ok(response) => response,
        Err(e) => {
            error!("Query {} failed: {}", query_config.label, e);
            return false;
        }
    };

    match response.body {
        CoinCapResponse::Assets(assets) => {
            info!(
                "Query {} returned {} assets (status {}, timestamp {})",
                query_config.label,
                assets.len(),
                response.status,
                assets.timestamp
            );
            for asset in &assets.data {
                debug!("{}", format_asset_line(asset, decimals));
            }
        }
        CoinCapResponse::Error(err) => {
            warn!(
                "Query {} was rejected (status {}, timestamp {}): {}",
                query_config.label, response.status, err.timestamp, err.error
            );
        }
    }

    true
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config_path = env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_CONFIG_PATH.to_string());

    let config = match Config::load(&config_path).await {
        Ok(config) => config,
        Err(error) => {
            error!("Error reading config file {}: {}", config_path, error);
            return;
        }
    };

    if config.queries.is_empty() {
        warn!("No queries configured in {}, nothing to do", config_path);
        return;
    }

    let client = CoinCapClient::with_api_key(config.base_url.as_str(), config.api_key.as_str());
    info!(
        "Running {} queries against {}",
        config.queries.len(),
        client.base_url()
    );

    let mut failed = 0;
    for query_config in &config.queries {
        if !run_query(&client, query_config, config.decimals).await {
            failed += 1;
        }
    }

    info!(
        "All queries finished, {} of {} failed.",
        failed,
        config.queries.len()
    );
}
