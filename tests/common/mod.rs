use coincap_asset_check::coincap::{
    ApiResponse, AssetsQuery, AssetsResponse, CoinCapClient, CoinCapResponse, ErrorResponse,
    DEFAULT_ASSETS_URL,
};

pub fn base_url() -> String {
    std::env::var("COINCAP_ASSETS_URL").unwrap_or_else(|_| DEFAULT_ASSETS_URL.to_string())
}

pub fn client() -> CoinCapClient {
    let api_key = std::env::var("COINCAP_API_KEY").unwrap_or_default();
    CoinCapClient::with_api_key(base_url(), api_key)
}

pub async fn get(query: AssetsQuery) -> ApiResponse {
    match client().get_assets(&query).await {
        Ok(response) => response,
        Err(e) => panic!("request {:?} failed: {}", query, e),
    }
}

/// Runs `query` and asserts a 200 with a positive timestamp.
pub async fn get_assets(query: AssetsQuery) -> AssetsResponse {
    let response = get(query).await;
    assert_eq!(200, response.status);
    match response.body {
        CoinCapResponse::Assets(assets) => {
            assert!(
                assets.timestamp > 0,
                "timestamp should be positive, got {}",
                assets.timestamp
            );
            assets
        }
        other => panic!("expected assets, got {:?}", other),
    }
}

/// Runs `query` and asserts it was rejected with a 400.
pub async fn get_error(query: AssetsQuery) -> ErrorResponse {
    let response = get(query).await;
    assert_eq!(400, response.status);
    match response.body {
        CoinCapResponse::Error(error) => error,
        other => panic!("expected an error response, got {:?}", other),
    }
}
