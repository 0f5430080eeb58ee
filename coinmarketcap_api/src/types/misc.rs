//! Fiat map, price conversion and API key usage types.

use serde::{Deserialize, Serialize};

use super::quote::Quotes;

/// Entry of `/v1/fiat/map`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Fiat {
    pub id: i64,
    pub name: String,
    pub sign: Option<String>,
    pub symbol: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct ConversionQuote {
    pub price: Option<f64>,
    pub last_updated: Option<String>,
}

/// `/v2/tools/price-conversion`
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct PriceConversion {
    pub id: i64,
    pub symbol: String,
    pub name: String,
    pub amount: f64,
    pub last_updated: Option<String>,
    #[serde(default)]
    pub quote: Quotes<ConversionQuote>,
}

/// Limits of the plan attached to the API key.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct KeyPlan {
    pub credit_limit_daily: Option<i64>,
    pub credit_limit_daily_reset: Option<String>,
    pub credit_limit_daily_reset_timestamp: Option<String>,
    pub credit_limit_monthly: Option<i64>,
    pub credit_limit_monthly_reset: Option<String>,
    pub credit_limit_monthly_reset_timestamp: Option<String>,
    pub rate_limit_minute: Option<i64>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct RequestUsage {
    pub requests_made: Option<i64>,
    pub requests_left: Option<i64>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct CreditUsage {
    pub credits_used: Option<i64>,
    pub credits_left: Option<i64>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct KeyUsage {
    #[serde(default)]
    pub current_minute: RequestUsage,
    #[serde(default)]
    pub current_day: CreditUsage,
    #[serde(default)]
    pub current_month: CreditUsage,
}

/// `/v1/key/info`
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct KeyInfo {
    #[serde(default)]
    pub plan: KeyPlan,
    #[serde(default)]
    pub usage: KeyUsage,
}
