use crate::coincap::Asset;
use bigdecimal::{BigDecimal, RoundingMode};
use std::str::FromStr;

const NOT_AVAILABLE: &str = "N/A";

/// Renders a USD price rounded half-even to `decimals` places. Prices with
/// fewer fractional digits are printed as they are.
pub fn format_usd(price: Option<f64>, decimals: u8) -> String {
    // NaN and infinities have no decimal form
    let price = match price.map(|p| BigDecimal::from_str(&p.to_string())) {
        Some(Ok(price)) => price,
        _ => return NOT_AVAILABLE.to_string(),
    };

    if price.fractional_digit_count() > i64::from(decimals) {
        return format!(
            "${}",
            price.with_scale_round(decimals.into(), RoundingMode::HalfEven)
        );
    }
    format!("${}", price)
}

pub fn format_change_24h(change: Option<f64>) -> String {
    match change {
        Some(change) if change.is_finite() => format!("{:+.2}%", change),
        _ => NOT_AVAILABLE.to_string(),
    }
}

/// One log line per asset, e.g. `#1 Bitcoin (BTC): $6929.82, 24h -0.81%`.
pub fn format_asset_line(asset: &Asset, decimals: u8) -> String {
    format!(
        "#{} {} ({}): {}, 24h {}",
        asset.rank,
        asset.name,
        asset.symbol,
        format_usd(asset.price_usd, decimals),
        format_change_24h(asset.change_percent_24hr)
    )
}
