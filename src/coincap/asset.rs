use serde::Serialize;

/// A single asset record of the `/v2/assets` endpoint.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Asset {
    pub id: String,
    pub name: String,
    pub symbol: String,
    pub explorer: Option<String>,
    pub rank: u32,
    pub price_usd: Option<f64>,
    pub market_cap_usd: Option<f64>,
    #[serde(rename = "volumeUsd24Hr")]
    pub volume_usd_24hr: Option<f64>,
    #[serde(rename = "changePercent24Hr")]
    pub change_percent_24hr: Option<f64>,
    pub supply: Option<f64>,
    pub max_supply: Option<f64>,
    #[serde(rename = "vwap24Hr")]
    pub vwap_24hr: Option<f64>,
}

/// Body of a 200 response.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AssetsResponse {
    pub data: Vec<Asset>,
    pub timestamp: i64,
}

impl AssetsResponse {
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn find(&self, id: &str) -> Option<&Asset> {
        self.data.iter().find(|asset| asset.id == id)
    }
}

/// Body of a 400 response.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub timestamp: i64,
}

#[derive(Debug, Clone, PartialEq)]
pub enum CoinCapResponse {
    Assets(AssetsResponse),
    Error(ErrorResponse),
}
