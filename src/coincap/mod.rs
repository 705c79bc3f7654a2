pub mod asset;
pub mod client;
pub mod error;
pub mod parser;
pub mod request;

pub use asset::{Asset, AssetsResponse, CoinCapResponse, ErrorResponse};
pub use client::{ApiResponse, CoinCapClient, DEFAULT_ASSETS_URL};
pub use error::{ClientError, ParseError};
pub use parser::parse_response;
pub use request::AssetsQuery;
