use crate::coincap::asset::{Asset, AssetsResponse, CoinCapResponse, ErrorResponse};
use crate::coincap::error::ParseError;
use serde_json::{Map, Value};
use tracing::{error, instrument, trace, warn};

type FieldResult<T> = Result<T, (&'static str, String)>;

/// Maps a response envelope to its typed shape.
///
/// The variant is chosen by `status` alone: 200 yields `Assets`, 400 yields
/// `Error`, and every other code is an `UnhandledStatus` error. Any item of a
/// 200 body that cannot be coerced into an `Asset` fails the whole parse.
#[instrument(skip(body))]
pub fn parse_response(status: u16, body: &Value) -> Result<CoinCapResponse, ParseError> {
    match status {
        200 => parse_assets(body).map(CoinCapResponse::Assets),
        400 => Ok(CoinCapResponse::Error(parse_error_body(body))),
        _ => {
            error!("Unexpected status code {} from the assets API", status);
            Err(ParseError::UnhandledStatus(status))
        }
    }
}

fn parse_assets(body: &Value) -> Result<AssetsResponse, ParseError> {
    let items: &[Value] = match body.get("data").and_then(Value::as_array) {
        Some(items) => items,
        None => &[],
    };
    let timestamp = timestamp_of(body);

    let mut data = Vec::with_capacity(items.len());
    for (index, item) in items.iter().enumerate() {
        match parse_asset(item) {
            Ok(asset) => data.push(asset),
            Err((field, reason)) => {
                let id = item.get("id").and_then(Value::as_str).map(str::to_string);
                warn!(
                    "Cannot parse asset at index {} (id {:?}), field `{}` {}",
                    index, id, field, reason
                );
                return Err(ParseError::MalformedAsset {
                    index,
                    id,
                    field,
                    reason,
                });
            }
        }
    }

    trace!("Parsed {} assets, timestamp {}", data.len(), timestamp);
    Ok(AssetsResponse { data, timestamp })
}

fn parse_error_body(body: &Value) -> ErrorResponse {
    let error = body
        .get("error")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();

    ErrorResponse {
        error,
        timestamp: timestamp_of(body),
    }
}

fn timestamp_of(body: &Value) -> i64 {
    body.get("timestamp").and_then(Value::as_i64).unwrap_or(0)
}

fn parse_asset(item: &Value) -> FieldResult<Asset> {
    let obj = match item.as_object() {
        Some(obj) => obj,
        None => return Err(("data", format!("item is not an object (found {})", kind_of(item)))),
    };

    Ok(Asset {
        id: string_field(obj, "id")?,
        name: string_field(obj, "name")?,
        symbol: string_field(obj, "symbol")?,
        explorer: explorer_field(obj)?,
        rank: rank_field(obj)?,
        price_usd: number_field(obj, "priceUsd")?,
        market_cap_usd: number_field(obj, "marketCapUsd")?,
        volume_usd_24hr: number_field(obj, "volumeUsd24Hr")?,
        change_percent_24hr: number_field(obj, "changePercent24Hr")?,
        supply: number_field(obj, "supply")?,
        max_supply: number_field(obj, "maxSupply")?,
        vwap_24hr: number_field(obj, "vwap24Hr")?,
    })
}

fn field<'a>(obj: &'a Map<String, Value>, name: &'static str) -> FieldResult<&'a Value> {
    obj.get(name).ok_or((name, "is missing".to_string()))
}

fn string_field(obj: &Map<String, Value>, name: &'static str) -> FieldResult<String> {
    match field(obj, name)? {
        Value::String(s) => Ok(s.clone()),
        other => Err((name, format!("is not a string (found {})", kind_of(other)))),
    }
}

// Some assets carry no block explorer and the API sends null for them.
fn explorer_field(obj: &Map<String, Value>) -> FieldResult<Option<String>> {
    match field(obj, "explorer")? {
        Value::Null => Ok(None),
        Value::String(s) => Ok(Some(s.clone())),
        other => Err(("explorer", format!("is not a string (found {})", kind_of(other)))),
    }
}

fn rank_field(obj: &Map<String, Value>) -> FieldResult<u32> {
    let rank = match field(obj, "rank")? {
        Value::String(s) => s
            .trim()
            .parse::<u32>()
            .map_err(|_| ("rank", format!("is not an integer: {:?}", s)))?,
        Value::Number(n) => n
            .as_u64()
            .and_then(|n| u32::try_from(n).ok())
            .ok_or(("rank", format!("is not an integer: {}", n)))?,
        other => return Err(("rank", format!("is not an integer (found {})", kind_of(other)))),
    };

    if rank < 1 {
        return Err(("rank", format!("must be at least 1, got {}", rank)));
    }
    Ok(rank)
}

fn number_field(obj: &Map<String, Value>, name: &'static str) -> FieldResult<Option<f64>> {
    match field(obj, name)? {
        Value::Null => Ok(None),
        // serde_json never yields a non-finite number, strings follow suit
        Value::String(s) => match s.trim().parse::<f64>() {
            Ok(v) if v.is_finite() => Ok(Some(v)),
            _ => Err((name, format!("is not a finite number: {:?}", s))),
        },
        Value::Number(n) => n
            .as_f64()
            .map(Some)
            .ok_or((name, format!("is not representable as f64: {}", n))),
        other => Err((name, format!("is not a number (found {})", kind_of(other)))),
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
