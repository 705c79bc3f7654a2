use crate::coincap::asset::CoinCapResponse;
use crate::coincap::error::ClientError;
use crate::coincap::parser::parse_response;
use crate::coincap::request::AssetsQuery;
use reqwest::header;
use serde_json::Value;
use tracing::{debug, instrument, warn};

pub const DEFAULT_ASSETS_URL: &str = "https://api.coincap.io/v2/assets";

/// Status code plus the parsed body of one assets request.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: CoinCapResponse,
}

#[derive(Clone, Debug)]
pub struct CoinCapClient {
    http_client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl CoinCapClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_api_key(base_url, "")
    }

    pub fn with_api_key(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            http_client: reqwest::Client::new(),
            base_url: base_url.into(),
            api_key: api_key.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Sends one `GET` for `query` and parses the answer. No retries.
    #[instrument(skip(self), fields(base_url = %self.base_url))]
    pub async fn get_assets(&self, query: &AssetsQuery) -> Result<ApiResponse, ClientError> {
        let mut http_req_build = self
            .http_client
            .get(&self.base_url)
            .query(&query.to_query_pairs())
            .header(header::CONTENT_ENCODING, "gzip")
            .header(header::CONTENT_TYPE, "application/json; charset=utf-8");

        if !self.api_key.is_empty() {
            http_req_build = http_req_build.bearer_auth(&self.api_key);
        }

        debug!("Sending assets request to CoinCap API");
        let response = match http_req_build.send().await {
            Ok(response) => response,
            Err(e) => {
                warn!("Error calling CoinCap API: {}", e);
                return Err(e.into());
            }
        };

        let status = response.status().as_u16();
        let text = response.text().await?;
        debug!("CoinCap API answered {} with {} bytes", status, text.len());

        // the parser rejects other codes, their bodies need not be JSON
        let body: Value = match status {
            200 | 400 => match serde_json::from_str(&text) {
                Ok(json) => json,
                Err(e) => {
                    tracing::error!("Error parsing JSON response from CoinCap API: {}", e);
                    return Err(e.into());
                }
            },
            _ => Value::Null,
        };

        let body = parse_response(status, &body)?;
        Ok(ApiResponse { status, body })
    }
}
