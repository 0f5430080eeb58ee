//! Centralized exchange types.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::crypto::MarketPair;
use super::quote::Quotes;

/// Numeric CoinMarketCap identifier for an exchange.
pub type ExchangeID = i64;

/// Entry of `/v1/exchange/map`.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ExchangeMapItem {
    pub id: ExchangeID,
    pub name: String,
    pub slug: String,
    pub is_active: Option<i64>,
    pub first_historical_data: Option<String>,
    pub last_historical_data: Option<String>,
}

/// Static metadata from `/v1/exchange/info`.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ExchangeInfo {
    pub id: ExchangeID,
    pub name: String,
    pub slug: String,
    pub logo: Option<String>,
    pub description: Option<String>,
    pub date_launched: Option<String>,
    pub notice: Option<String>,
    pub countries: Option<Vec<String>>,
    pub fiats: Option<Vec<String>>,
    pub tags: Option<Vec<String>>,
    #[serde(rename = "type")]
    pub exchange_type: Option<String>,
    pub maker_fee: Option<f64>,
    pub taker_fee: Option<f64>,
    pub weekly_visits: Option<i64>,
    pub spot_volume_usd: Option<f64>,
    pub spot_volume_last_updated: Option<String>,
    pub urls: Option<HashMap<String, Vec<String>>>,
}

/// Volume figures for an exchange in one convert currency.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct ExchangeQuote {
    pub volume_24h: Option<f64>,
    pub volume_24h_adjusted: Option<f64>,
    pub volume_7d: Option<f64>,
    pub volume_30d: Option<f64>,
    pub percent_change_volume_24h: Option<f64>,
    pub percent_change_volume_7d: Option<f64>,
    pub percent_change_volume_30d: Option<f64>,
    pub effective_liquidity_24h: Option<f64>,
    pub derivative_volume_usd: Option<f64>,
    pub spot_volume_usd: Option<f64>,
    pub timestamp: Option<String>,
}

/// An exchange with market data, from the listings and quotes endpoints.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Exchange {
    pub id: ExchangeID,
    pub name: String,
    pub slug: String,
    pub num_market_pairs: Option<i64>,
    pub num_coins: Option<i64>,
    pub fiats: Option<Vec<String>>,
    pub traffic_score: Option<f64>,
    pub rank: Option<i64>,
    pub exchange_score: Option<f64>,
    pub liquidity_score: Option<f64>,
    pub date_launched: Option<String>,
    pub last_updated: Option<String>,
    #[serde(default)]
    pub quote: Quotes<ExchangeQuote>,
}

/// One point of `/v1/exchange/quotes/historical`.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ExchangeHistoricalQuote {
    pub timestamp: String,
    pub num_market_pairs: Option<i64>,
    #[serde(default)]
    pub quote: Quotes<ExchangeQuote>,
}

/// Historical quote series for one exchange.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ExchangeHistoricalQuotes {
    pub id: ExchangeID,
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub quotes: Vec<ExchangeHistoricalQuote>,
}

/// `/v1/exchange/market-pairs/latest`
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ExchangeMarketPairs {
    pub id: ExchangeID,
    pub name: String,
    pub slug: String,
    pub num_market_pairs: Option<i64>,
    #[serde(default)]
    pub market_pairs: Vec<MarketPair>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct AssetPlatform {
    pub crypto_id: Option<i64>,
    pub symbol: Option<String>,
    pub name: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct AssetCurrency {
    pub crypto_id: Option<i64>,
    pub price_usd: Option<f64>,
    pub symbol: Option<String>,
    pub name: Option<String>,
}

/// A wallet holding from `/v1/exchange/assets` (proof of reserves).
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ExchangeAsset {
    pub wallet_address: Option<String>,
    pub balance: Option<f64>,
    pub platform: Option<AssetPlatform>,
    pub currency: Option<AssetCurrency>,
}

impl ExchangeAsset {
    /// Balance valued in USD, when both figures are known.
    pub fn value_usd(&self) -> Option<f64> {
        let price = self.currency.as_ref()?.price_usd?;
        Some(self.balance? * price)
    }
}
