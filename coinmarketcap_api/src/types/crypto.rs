//! Cryptocurrency types: map entries, metadata, listings, categories, airdrops and OHLCV.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::quote::{OhlcvQuote, Platform, Quotes};

/// Numeric CoinMarketCap identifier for a cryptocurrency.
pub type CryptoID = i64;

/// Entry of `/v1/cryptocurrency/map`.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct CryptoMapItem {
    pub id: CryptoID,
    pub rank: Option<i64>,
    pub name: String,
    pub symbol: String,
    pub slug: String,
    /// 1 when active, 0 otherwise.
    pub is_active: Option<i64>,
    pub first_historical_data: Option<String>,
    pub last_historical_data: Option<String>,
    pub platform: Option<Platform>,
}

/// Static metadata from `/v2/cryptocurrency/info`.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct CryptoInfo {
    pub id: CryptoID,
    pub name: String,
    pub symbol: String,
    pub slug: Option<String>,
    /// `coin` or `token`.
    pub category: Option<String>,
    pub description: Option<String>,
    pub logo: Option<String>,
    pub subreddit: Option<String>,
    pub notice: Option<String>,
    pub tags: Option<Vec<String>>,
    pub platform: Option<Platform>,
    pub date_added: Option<String>,
    pub date_launched: Option<String>,
    pub twitter_username: Option<String>,
    pub is_hidden: Option<i64>,
    /// Link groups such as `website`, `explorer`, `source_code`.
    pub urls: Option<HashMap<String, Vec<String>>>,
}

/// A cryptocurrency with market data, as returned by the listings,
/// quotes, category and trending endpoints.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Cryptocurrency {
    pub id: CryptoID,
    pub name: String,
    pub symbol: String,
    pub slug: Option<String>,
    pub cmc_rank: Option<i64>,
    pub num_market_pairs: Option<i64>,
    pub circulating_supply: Option<f64>,
    pub total_supply: Option<f64>,
    pub max_supply: Option<f64>,
    pub infinite_supply: Option<bool>,
    pub is_active: Option<i64>,
    pub is_fiat: Option<i64>,
    pub self_reported_circulating_supply: Option<f64>,
    pub self_reported_market_cap: Option<f64>,
    pub date_added: Option<String>,
    pub last_updated: Option<String>,
    pub tags: Option<Vec<Value>>,
    pub platform: Option<Platform>,
    #[serde(default)]
    pub quote: Quotes,
}

impl Cryptocurrency {
    /// Shortcut for the price in the given convert currency.
    pub fn price_in(&self, currency: &str) -> Option<f64> {
        self.quote.get(currency).and_then(|q| q.price)
    }
}

/// One point of `/v3/cryptocurrency/quotes/historical`.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct HistoricalQuote {
    pub timestamp: String,
    #[serde(default)]
    pub quote: Quotes,
}

/// Historical quote series for one cryptocurrency.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct HistoricalQuotes {
    pub id: CryptoID,
    pub name: String,
    pub symbol: String,
    pub is_active: Option<i64>,
    pub is_fiat: Option<i64>,
    #[serde(default)]
    pub quotes: Vec<HistoricalQuote>,
}

/// Asset side of a market pair.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct PairAsset {
    pub currency_id: Option<i64>,
    pub currency_symbol: Option<String>,
    pub currency_type: Option<String>,
    pub exchange_symbol: Option<String>,
}

/// Exchange reference embedded in a market pair.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ExchangeRef {
    pub id: i64,
    pub name: String,
    pub slug: Option<String>,
}

/// A single trading pair on an exchange.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct MarketPair {
    /// Present on per-cryptocurrency listings, absent on per-exchange ones.
    pub exchange: Option<ExchangeRef>,
    pub market_id: Option<i64>,
    pub market_pair: String,
    /// `spot`, `derivatives`, `otc` or `perpetual`.
    pub category: Option<String>,
    pub fee_type: Option<String>,
    pub market_url: Option<String>,
    pub market_pair_base: Option<PairAsset>,
    pub market_pair_quote: Option<PairAsset>,
    #[serde(default)]
    pub quote: Quotes,
}

/// `/v2/cryptocurrency/market-pairs/latest`
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct CryptoMarketPairs {
    pub id: CryptoID,
    pub name: String,
    pub symbol: String,
    pub num_market_pairs: Option<i64>,
    #[serde(default)]
    pub market_pairs: Vec<MarketPair>,
}

/// Latest OHLCV for one cryptocurrency.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct OhlcvLatest {
    pub id: CryptoID,
    pub name: String,
    pub symbol: String,
    pub last_updated: Option<String>,
    pub time_open: Option<String>,
    pub time_close: Option<String>,
    pub time_high: Option<String>,
    pub time_low: Option<String>,
    #[serde(default)]
    pub quote: Quotes<OhlcvQuote>,
}

/// One period of an OHLCV series.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct OhlcvPeriod {
    pub time_open: String,
    pub time_close: Option<String>,
    pub time_high: Option<String>,
    pub time_low: Option<String>,
    #[serde(default)]
    pub quote: Quotes<OhlcvQuote>,
}

/// Historical OHLCV series for one cryptocurrency.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct OhlcvHistorical {
    pub id: CryptoID,
    pub name: String,
    pub symbol: String,
    #[serde(default)]
    pub quotes: Vec<OhlcvPeriod>,
}

/// Performance values for one period in one convert currency.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct PerformanceQuote {
    pub open: Option<f64>,
    pub high: Option<f64>,
    pub low: Option<f64>,
    pub close: Option<f64>,
    pub percent_change: Option<f64>,
    pub price_change: Option<f64>,
}

/// A performance window such as `all_time` or `24h`.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct PerformancePeriod {
    pub open_timestamp: Option<String>,
    pub high_timestamp: Option<String>,
    pub low_timestamp: Option<String>,
    pub close_timestamp: Option<String>,
    #[serde(default)]
    pub quote: Quotes<PerformanceQuote>,
}

/// `/v2/cryptocurrency/price-performance-stats/latest`
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct PricePerformance {
    pub id: CryptoID,
    pub name: String,
    pub symbol: String,
    pub slug: Option<String>,
    pub last_updated: Option<String>,
    #[serde(default)]
    pub periods: HashMap<String, PerformancePeriod>,
}

/// A category from `/v1/cryptocurrency/categories` or `/v1/cryptocurrency/category`.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Category {
    pub id: String,
    pub name: String,
    pub title: Option<String>,
    pub description: Option<String>,
    pub num_tokens: Option<i64>,
    pub avg_price_change: Option<f64>,
    pub market_cap: Option<f64>,
    pub market_cap_change: Option<f64>,
    pub volume: Option<f64>,
    pub volume_change: Option<f64>,
    pub last_updated: Option<String>,
    /// Only populated by the single-category endpoint.
    pub coins: Option<Vec<Cryptocurrency>>,
}

/// Coin reference embedded in an airdrop.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct AirdropCoin {
    pub id: CryptoID,
    pub name: String,
    pub slug: Option<String>,
    pub symbol: Option<String>,
}

/// An airdrop from `/v1/cryptocurrency/airdrops` or `/v1/cryptocurrency/airdrop`.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Airdrop {
    pub id: String,
    pub project_name: String,
    pub description: Option<String>,
    /// `UPCOMING`, `ONGOING` or `ENDED`.
    pub status: Option<String>,
    pub coin: Option<AirdropCoin>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub total_prize: Option<f64>,
    pub winner_count: Option<i64>,
    pub link: Option<String>,
}
