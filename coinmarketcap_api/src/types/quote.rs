//! Market quote blocks shared across the cryptocurrency and exchange endpoints.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Quotes keyed by the convert currency symbol (or id when `convert_id` was used).
pub type Quotes<T = Quote> = HashMap<String, T>;

/// Market data for an asset in one convert currency.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct Quote {
    pub price: Option<f64>,
    pub volume_24h: Option<f64>,
    pub volume_change_24h: Option<f64>,
    pub volume_24h_reported: Option<f64>,
    pub volume_7d: Option<f64>,
    pub volume_30d: Option<f64>,
    pub percent_change_1h: Option<f64>,
    pub percent_change_24h: Option<f64>,
    pub percent_change_7d: Option<f64>,
    pub percent_change_30d: Option<f64>,
    pub percent_change_60d: Option<f64>,
    pub percent_change_90d: Option<f64>,
    pub market_cap: Option<f64>,
    pub market_cap_dominance: Option<f64>,
    pub fully_diluted_market_cap: Option<f64>,
    /// Only present on market pair quotes.
    pub effective_liquidity: Option<f64>,
    pub last_updated: Option<String>,
}

/// Reference to the platform (parent chain) a token lives on.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Platform {
    pub id: i64,
    pub name: String,
    pub symbol: Option<String>,
    pub slug: Option<String>,
    pub token_address: Option<String>,
}

/// OHLCV values for a single period in one convert currency.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct OhlcvQuote {
    pub open: Option<f64>,
    pub high: Option<f64>,
    pub low: Option<f64>,
    pub close: Option<f64>,
    pub volume: Option<f64>,
    pub market_cap: Option<f64>,
    pub timestamp: Option<String>,
    pub last_updated: Option<String>,
}
