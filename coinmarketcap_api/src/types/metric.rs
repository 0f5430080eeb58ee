//! Global market metrics, fear & greed, the CMC100 index and blockchain statistics.

use serde::{Deserialize, Serialize};

use super::quote::Quotes;

/// Market totals for one convert currency.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct GlobalQuote {
    pub total_market_cap: Option<f64>,
    pub total_volume_24h: Option<f64>,
    pub total_volume_24h_reported: Option<f64>,
    pub altcoin_volume_24h: Option<f64>,
    pub altcoin_market_cap: Option<f64>,
    pub defi_volume_24h: Option<f64>,
    pub defi_market_cap: Option<f64>,
    pub stablecoin_volume_24h: Option<f64>,
    pub stablecoin_market_cap: Option<f64>,
    pub derivatives_volume_24h: Option<f64>,
    pub total_market_cap_yesterday_percentage_change: Option<f64>,
    pub total_volume_24h_yesterday_percentage_change: Option<f64>,
    pub last_updated: Option<String>,
    pub timestamp: Option<String>,
}

/// `/v1/global-metrics/quotes/latest`
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct GlobalMetrics {
    pub active_cryptocurrencies: Option<i64>,
    pub total_cryptocurrencies: Option<i64>,
    pub active_market_pairs: Option<i64>,
    pub active_exchanges: Option<i64>,
    pub total_exchanges: Option<i64>,
    pub eth_dominance: Option<f64>,
    pub btc_dominance: Option<f64>,
    pub eth_dominance_yesterday: Option<f64>,
    pub btc_dominance_yesterday: Option<f64>,
    pub defi_volume_24h: Option<f64>,
    pub defi_market_cap: Option<f64>,
    pub stablecoin_volume_24h: Option<f64>,
    pub stablecoin_market_cap: Option<f64>,
    pub derivatives_volume_24h: Option<f64>,
    pub last_updated: Option<String>,
    #[serde(default)]
    pub quote: Quotes<GlobalQuote>,
}

/// One point of `/v1/global-metrics/quotes/historical`.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct GlobalMetricsPoint {
    pub timestamp: String,
    pub btc_dominance: Option<f64>,
    pub eth_dominance: Option<f64>,
    pub active_cryptocurrencies: Option<i64>,
    pub active_exchanges: Option<i64>,
    pub active_market_pairs: Option<i64>,
    #[serde(default)]
    pub quote: Quotes<GlobalQuote>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct GlobalMetricsHistorical {
    #[serde(default)]
    pub quotes: Vec<GlobalMetricsPoint>,
}

/// A fear & greed index reading (0 = extreme fear, 100 = extreme greed).
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct FearAndGreed {
    pub value: i64,
    pub value_classification: String,
    /// Set on historical points (unix seconds as a string).
    pub timestamp: Option<String>,
    /// Set on the latest reading.
    pub update_time: Option<String>,
}

/// Weighted member of the CMC100 index.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Cmc100Constituent {
    pub id: i64,
    pub name: String,
    pub symbol: String,
    pub url: Option<String>,
    pub weight: Option<f64>,
}

/// `/v3/index/cmc100-latest`
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Cmc100Latest {
    pub value: f64,
    pub value_24h_percentage_change: Option<f64>,
    pub last_update: Option<String>,
    pub next_update: Option<String>,
    #[serde(default)]
    pub constituents: Vec<Cmc100Constituent>,
}

/// One point of `/v3/index/cmc100-historic`.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Cmc100Point {
    pub value: f64,
    pub update_time: Option<String>,
    #[serde(default)]
    pub constituents: Vec<Cmc100Constituent>,
}

/// `/v1/blockchain/statistics/latest`, keyed by id, symbol or slug.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct BlockchainStatistics {
    pub id: i64,
    pub slug: Option<String>,
    pub symbol: Option<String>,
    pub block_reward_static: Option<f64>,
    pub consensus_mechanism: Option<String>,
    pub difficulty: Option<String>,
    pub hashrate_24h: Option<String>,
    pub pending_transactions: Option<i64>,
    pub reduction_rate: Option<String>,
    pub total_blocks: Option<i64>,
    pub total_transactions: Option<String>,
    pub tps_24h: Option<f64>,
    pub first_block_timestamp: Option<String>,
}
