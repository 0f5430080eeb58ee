//! DEX types from the v4 endpoints.
//!
//! The v4 schema is still moving, so every type keeps fields it does not
//! model in `extra`.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Quote entry of a DEX pair. Unlike the v1/v2 endpoints these come as an
/// array, one entry per `convert_id`.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct DexQuote {
    pub convert_id: Option<String>,
    pub price: Option<f64>,
    pub price_by_quote_asset: Option<f64>,
    pub volume_24h: Option<f64>,
    pub liquidity: Option<f64>,
    pub percent_change_1h: Option<f64>,
    pub percent_change_24h: Option<f64>,
    pub fully_diluted_value: Option<f64>,
    pub last_updated: Option<String>,
    #[serde(flatten)]
    pub extra: HashMap<String, Value>,
}

/// A decentralized exchange from `/v4/dex/listings/info` or `/v4/dex/listings/quotes`.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Dex {
    pub id: i64,
    pub name: String,
    pub slug: Option<String>,
    pub logo: Option<String>,
    pub status: Option<String>,
    #[serde(rename = "type")]
    pub dex_type: Option<String>,
    pub num_market_pairs: Option<i64>,
    pub market_share: Option<f64>,
    #[serde(default)]
    pub quote: Vec<DexQuote>,
    #[serde(flatten)]
    pub extra: HashMap<String, Value>,
}

/// A chain from `/v4/dex/networks/list`.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct DexNetwork {
    pub id: i64,
    pub name: String,
    pub network_slug: Option<String>,
    pub cryptocurrency_id: Option<i64>,
    pub wrapped_token_id: Option<i64>,
    #[serde(flatten)]
    pub extra: HashMap<String, Value>,
}

/// A DEX trading pair from the spot-pairs and pair quote endpoints.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct DexPair {
    pub contract_address: String,
    pub name: Option<String>,
    pub base_asset_id: Option<String>,
    pub base_asset_ucid: Option<String>,
    pub base_asset_name: Option<String>,
    pub base_asset_symbol: Option<String>,
    pub base_asset_contract_address: Option<String>,
    pub quote_asset_id: Option<String>,
    pub quote_asset_ucid: Option<String>,
    pub quote_asset_name: Option<String>,
    pub quote_asset_symbol: Option<String>,
    pub quote_asset_contract_address: Option<String>,
    pub dex_id: Option<String>,
    pub dex_slug: Option<String>,
    pub network_id: Option<String>,
    pub network_slug: Option<String>,
    pub last_updated: Option<String>,
    pub created_at: Option<String>,
    pub num_transactions_24h: Option<i64>,
    #[serde(default)]
    pub quote: Vec<DexQuote>,
    /// Pagination cursor on spot-pairs responses.
    pub scroll_id: Option<String>,
    #[serde(flatten)]
    pub extra: HashMap<String, Value>,
}

/// One OHLCV bucket of a DEX pair.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct DexOhlcvPeriod {
    pub time_open: Option<String>,
    pub time_close: Option<String>,
    #[serde(default)]
    pub quote: Vec<DexOhlcvQuote>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct DexOhlcvQuote {
    pub convert_id: Option<String>,
    pub open: Option<f64>,
    pub high: Option<f64>,
    pub low: Option<f64>,
    pub close: Option<f64>,
    pub volume: Option<f64>,
    pub last_updated: Option<String>,
}

/// OHLCV series for a DEX pair. The latest endpoint returns a single bucket
/// in `quote` while the historical endpoint fills `quotes`.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct DexPairOhlcv {
    pub contract_address: String,
    pub name: Option<String>,
    pub time_open: Option<String>,
    pub time_close: Option<String>,
    pub network_id: Option<String>,
    pub network_slug: Option<String>,
    #[serde(default)]
    pub quote: Vec<DexOhlcvQuote>,
    #[serde(default)]
    pub quotes: Vec<DexOhlcvPeriod>,
    #[serde(flatten)]
    pub extra: HashMap<String, Value>,
}

/// A single swap on a DEX pair.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct DexTrade {
    pub date: Option<String>,
    /// `buy` or `sell`.
    #[serde(rename = "type")]
    pub side: Option<String>,
    pub transaction_hash: Option<String>,
    #[serde(default)]
    pub quote: Vec<DexTradeQuote>,
    #[serde(flatten)]
    pub extra: HashMap<String, Value>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct DexTradeQuote {
    pub convert_id: Option<String>,
    pub price: Option<f64>,
    pub total: Option<f64>,
    pub amount_base_asset: Option<f64>,
    pub amount_quote_asset: Option<f64>,
}

/// `/v4/dex/pairs/trade/latest`
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct DexPairTrades {
    pub contract_address: String,
    pub name: Option<String>,
    pub network_id: Option<String>,
    pub network_slug: Option<String>,
    #[serde(default)]
    pub trades: Vec<DexTrade>,
    #[serde(flatten)]
    pub extra: HashMap<String, Value>,
}
