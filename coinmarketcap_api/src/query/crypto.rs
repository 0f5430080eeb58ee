//! Query builders for the `/cryptocurrency` endpoints.

use std::fmt;
use std::str::FromStr;

use super::common::{
    Convert, ListingStatus, Pagination, ParamValue, Params, Query, SortDirection, TimeRange,
};

/// Sort field for `/v1/cryptocurrency/map`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CryptoMapSortBy {
    #[default]
    Id,
    CmcRank,
}

impl fmt::Display for CryptoMapSortBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                CryptoMapSortBy::Id => "id",
                CryptoMapSortBy::CmcRank => "cmc_rank",
            }
        )
    }
}

impl From<CryptoMapSortBy> for ParamValue {
    fn from(value: CryptoMapSortBy) -> Self {
        ParamValue::Text(value.to_string())
    }
}

/// Sort field for the listings endpoints.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ListingsSortBy {
    #[default]
    MarketCap,
    MarketCapStrict,
    Name,
    Symbol,
    DateAdded,
    Price,
    CirculatingSupply,
    TotalSupply,
    MaxSupply,
    NumMarketPairs,
    Volume24h,
    Volume7d,
    Volume30d,
    PercentChange1h,
    PercentChange24h,
    PercentChange7d,
}

impl fmt::Display for ListingsSortBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                ListingsSortBy::MarketCap => "market_cap",
                ListingsSortBy::MarketCapStrict => "market_cap_strict",
                ListingsSortBy::Name => "name",
                ListingsSortBy::Symbol => "symbol",
                ListingsSortBy::DateAdded => "date_added",
                ListingsSortBy::Price => "price",
                ListingsSortBy::CirculatingSupply => "circulating_supply",
                ListingsSortBy::TotalSupply => "total_supply",
                ListingsSortBy::MaxSupply => "max_supply",
                ListingsSortBy::NumMarketPairs => "num_market_pairs",
                ListingsSortBy::Volume24h => "volume_24h",
                ListingsSortBy::Volume7d => "volume_7d",
                ListingsSortBy::Volume30d => "volume_30d",
                ListingsSortBy::PercentChange1h => "percent_change_1h",
                ListingsSortBy::PercentChange24h => "percent_change_24h",
                ListingsSortBy::PercentChange7d => "percent_change_7d",
            }
        )
    }
}

impl FromStr for ListingsSortBy {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "market_cap" => Ok(ListingsSortBy::MarketCap),
            "market_cap_strict" => Ok(ListingsSortBy::MarketCapStrict),
            "name" => Ok(ListingsSortBy::Name),
            "symbol" => Ok(ListingsSortBy::Symbol),
            "date_added" => Ok(ListingsSortBy::DateAdded),
            "price" => Ok(ListingsSortBy::Price),
            "circulating_supply" => Ok(ListingsSortBy::CirculatingSupply),
            "total_supply" => Ok(ListingsSortBy::TotalSupply),
            "max_supply" => Ok(ListingsSortBy::MaxSupply),
            "num_market_pairs" => Ok(ListingsSortBy::NumMarketPairs),
            "volume_24h" => Ok(ListingsSortBy::Volume24h),
            "volume_7d" => Ok(ListingsSortBy::Volume7d),
            "volume_30d" => Ok(ListingsSortBy::Volume30d),
            "percent_change_1h" => Ok(ListingsSortBy::PercentChange1h),
            "percent_change_24h" => Ok(ListingsSortBy::PercentChange24h),
            "percent_change_7d" => Ok(ListingsSortBy::PercentChange7d),
            _ => Err(()),
        }
    }
}

impl From<ListingsSortBy> for ParamValue {
    fn from(value: ListingsSortBy) -> Self {
        ParamValue::Text(value.to_string())
    }
}

/// Restricts listings to coins, tokens, or both.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CryptocurrencyType {
    #[default]
    All,
    Coins,
    Tokens,
}

impl fmt::Display for CryptocurrencyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                CryptocurrencyType::All => "all",
                CryptocurrencyType::Coins => "coins",
                CryptocurrencyType::Tokens => "tokens",
            }
        )
    }
}

impl From<CryptocurrencyType> for ParamValue {
    fn from(value: CryptocurrencyType) -> Self {
        ParamValue::Text(value.to_string())
    }
}

/// `/v1/cryptocurrency/categories`
#[derive(Clone, Debug, Default)]
pub struct CategoriesQuery {
    pub pagination: Pagination,
    pub id: Vec<i64>,
    pub slug: Vec<String>,
    pub symbol: Vec<String>,
}

impl Query for CategoriesQuery {
    fn to_params(&self) -> Params {
        let mut params = Params::new();
        self.pagination.write(&mut params);
        params.insert("id", &self.id);
        params.insert("slug", &self.slug);
        params.insert("symbol", &self.symbol);
        params
    }
}

impl CategoriesQuery {
    pub fn with_start(mut self, start: i64) -> Self {
        self.pagination.start = Some(start);
        self
    }

    pub fn with_limit(mut self, limit: i64) -> Self {
        self.pagination.limit = Some(limit);
        self
    }

    pub fn with_symbol(mut self, symbol: &str) -> Self {
        self.symbol.push(symbol.to_string());
        self
    }
}

/// `/v1/cryptocurrency/category`
#[derive(Clone, Debug, Default)]
pub struct CategoryQuery {
    /// Category id as returned by the categories endpoint.
    pub id: String,
    pub pagination: Pagination,
    pub convert: Convert,
}

impl Query for CategoryQuery {
    fn to_params(&self) -> Params {
        let mut params = Params::new().with("id", &self.id);
        self.pagination.write(&mut params);
        self.convert.write(&mut params);
        params
    }
}

impl CategoryQuery {
    pub fn new(id: &str) -> Self {
        Self {
            id: id.to_string(),
            ..Default::default()
        }
    }

    pub fn with_limit(mut self, limit: i64) -> Self {
        self.pagination.limit = Some(limit);
        self
    }

    pub fn with_convert(mut self, convert: &str) -> Self {
        self.convert.convert.push(convert.to_string());
        self
    }
}

/// `/v1/cryptocurrency/map`
#[derive(Clone, Debug, Default)]
pub struct CryptoMapQuery {
    pub listing_status: Vec<ListingStatus>,
    pub pagination: Pagination,
    pub sort: Option<CryptoMapSortBy>,
    pub symbol: Vec<String>,
    pub aux: Vec<String>,
}

impl Query for CryptoMapQuery {
    fn to_params(&self) -> Params {
        let mut params = Params::new().with("listing_status", &self.listing_status);
        self.pagination.write(&mut params);
        params.insert("sort", self.sort);
        params.insert("symbol", &self.symbol);
        params.insert("aux", &self.aux);
        params
    }
}

impl CryptoMapQuery {
    pub fn with_listing_status(mut self, status: ListingStatus) -> Self {
        self.listing_status.push(status);
        self
    }

    pub fn with_start(mut self, start: i64) -> Self {
        self.pagination.start = Some(start);
        self
    }

    pub fn with_limit(mut self, limit: i64) -> Self {
        self.pagination.limit = Some(limit);
        self
    }

    pub fn with_sort_by(mut self, sort: CryptoMapSortBy) -> Self {
        self.sort = Some(sort);
        self
    }

    pub fn with_symbol(mut self, symbol: &str) -> Self {
        self.symbol.push(symbol.to_string());
        self
    }

    pub fn with_symbols(mut self, symbols: &[String]) -> Self {
        self.symbol.extend_from_slice(symbols);
        self
    }
}

/// `/v2/cryptocurrency/info`
#[derive(Clone, Debug, Default)]
pub struct CryptoInfoQuery {
    pub id: Vec<i64>,
    pub slug: Vec<String>,
    pub symbol: Vec<String>,
    /// Contract address of a token.
    pub address: Option<String>,
    pub skip_invalid: Option<bool>,
    pub aux: Vec<String>,
}

impl Query for CryptoInfoQuery {
    fn to_params(&self) -> Params {
        Params::new()
            .with("id", &self.id)
            .with("slug", &self.slug)
            .with("symbol", &self.symbol)
            .with("address", self.address.as_deref())
            .with("skip_invalid", self.skip_invalid)
            .with("aux", &self.aux)
    }
}

impl CryptoInfoQuery {
    pub fn with_id(mut self, id: i64) -> Self {
        self.id.push(id);
        self
    }

    pub fn with_ids(mut self, ids: &[i64]) -> Self {
        self.id.extend_from_slice(ids);
        self
    }

    pub fn with_slug(mut self, slug: &str) -> Self {
        self.slug.push(slug.to_string());
        self
    }

    pub fn with_symbol(mut self, symbol: &str) -> Self {
        self.symbol.push(symbol.to_string());
        self
    }

    pub fn with_address(mut self, address: &str) -> Self {
        self.address = Some(address.to_string());
        self
    }
}

/// `/v1/cryptocurrency/listings/latest`
#[derive(Clone, Debug, Default)]
pub struct ListingsLatestQuery {
    pub pagination: Pagination,
    pub price_min: Option<f64>,
    pub price_max: Option<f64>,
    pub market_cap_min: Option<f64>,
    pub market_cap_max: Option<f64>,
    pub volume_24h_min: Option<f64>,
    pub volume_24h_max: Option<f64>,
    pub circulating_supply_min: Option<f64>,
    pub circulating_supply_max: Option<f64>,
    pub percent_change_24h_min: Option<f64>,
    pub percent_change_24h_max: Option<f64>,
    pub convert: Convert,
    pub sort: Option<ListingsSortBy>,
    pub sort_dir: Option<SortDirection>,
    pub cryptocurrency_type: Option<CryptocurrencyType>,
    pub tag: Option<String>,
    pub aux: Vec<String>,
}

impl Query for ListingsLatestQuery {
    fn to_params(&self) -> Params {
        let mut params = Params::new();
        self.pagination.write(&mut params);
        params.insert("price_min", self.price_min);
        params.insert("price_max", self.price_max);
        params.insert("market_cap_min", self.market_cap_min);
        params.insert("market_cap_max", self.market_cap_max);
        params.insert("volume_24h_min", self.volume_24h_min);
        params.insert("volume_24h_max", self.volume_24h_max);
        params.insert("circulating_supply_min", self.circulating_supply_min);
        params.insert("circulating_supply_max", self.circulating_supply_max);
        params.insert("percent_change_24h_min", self.percent_change_24h_min);
        params.insert("percent_change_24h_max", self.percent_change_24h_max);
        self.convert.write(&mut params);
        params.insert("sort", self.sort);
        params.insert("sort_dir", self.sort_dir);
        params.insert("cryptocurrency_type", self.cryptocurrency_type);
        params.insert("tag", self.tag.as_deref());
        params.insert("aux", &self.aux);
        params
    }
}

impl ListingsLatestQuery {
    pub fn with_start(mut self, start: i64) -> Self {
        self.pagination.start = Some(start);
        self
    }

    pub fn with_limit(mut self, limit: i64) -> Self {
        self.pagination.limit = Some(limit);
        self
    }

    pub fn with_convert(mut self, convert: &str) -> Self {
        self.convert.convert.push(convert.to_string());
        self
    }

    pub fn with_sort_by(mut self, sort: ListingsSortBy) -> Self {
        self.sort = Some(sort);
        self
    }

    pub fn with_sort_direction(mut self, sort_dir: SortDirection) -> Self {
        self.sort_dir = Some(sort_dir);
        self
    }

    pub fn with_cryptocurrency_type(mut self, kind: CryptocurrencyType) -> Self {
        self.cryptocurrency_type = Some(kind);
        self
    }

    pub fn with_tag(mut self, tag: &str) -> Self {
        self.tag = Some(tag.to_string());
        self
    }
}

/// `/v1/cryptocurrency/listings/historical`
#[derive(Clone, Debug, Default)]
pub struct ListingsHistoricalQuery {
    /// Snapshot date, `YYYY-MM-DD` or unix seconds.
    pub date: String,
    pub pagination: Pagination,
    pub convert: Convert,
    pub sort: Option<ListingsSortBy>,
    pub sort_dir: Option<SortDirection>,
    pub cryptocurrency_type: Option<CryptocurrencyType>,
    pub aux: Vec<String>,
}

impl Query for ListingsHistoricalQuery {
    fn to_params(&self) -> Params {
        let mut params = Params::new().with("date", &self.date);
        self.pagination.write(&mut params);
        self.convert.write(&mut params);
        params.insert("sort", self.sort);
        params.insert("sort_dir", self.sort_dir);
        params.insert("cryptocurrency_type", self.cryptocurrency_type);
        params.insert("aux", &self.aux);
        params
    }
}

impl ListingsHistoricalQuery {
    pub fn new(date: &str) -> Self {
        Self {
            date: date.to_string(),
            ..Default::default()
        }
    }

    pub fn with_limit(mut self, limit: i64) -> Self {
        self.pagination.limit = Some(limit);
        self
    }
}

/// `/v1/cryptocurrency/listings/new`
#[derive(Clone, Debug, Default)]
pub struct ListingsNewQuery {
    pub pagination: Pagination,
    pub convert: Convert,
    pub sort_dir: Option<SortDirection>,
}

impl Query for ListingsNewQuery {
    fn to_params(&self) -> Params {
        let mut params = Params::new();
        self.pagination.write(&mut params);
        self.convert.write(&mut params);
        params.insert("sort_dir", self.sort_dir);
        params
    }
}

/// `/v2/cryptocurrency/quotes/latest`
#[derive(Clone, Debug, Default)]
pub struct QuotesLatestQuery {
    pub id: Vec<i64>,
    pub slug: Vec<String>,
    pub symbol: Vec<String>,
    pub convert: Convert,
    pub aux: Vec<String>,
    pub skip_invalid: Option<bool>,
}

impl Query for QuotesLatestQuery {
    fn to_params(&self) -> Params {
        let mut params = Params::new()
            .with("id", &self.id)
            .with("slug", &self.slug)
            .with("symbol", &self.symbol);
        self.convert.write(&mut params);
        params.insert("aux", &self.aux);
        params.insert("skip_invalid", self.skip_invalid);
        params
    }
}

impl QuotesLatestQuery {
    pub fn with_id(mut self, id: i64) -> Self {
        self.id.push(id);
        self
    }

    pub fn with_ids(mut self, ids: &[i64]) -> Self {
        self.id.extend_from_slice(ids);
        self
    }

    pub fn with_slug(mut self, slug: &str) -> Self {
        self.slug.push(slug.to_string());
        self
    }

    pub fn with_symbol(mut self, symbol: &str) -> Self {
        self.symbol.push(symbol.to_string());
        self
    }

    pub fn with_convert(mut self, convert: &str) -> Self {
        self.convert.convert.push(convert.to_string());
        self
    }
}

/// `/v3/cryptocurrency/quotes/historical`
#[derive(Clone, Debug, Default)]
pub struct QuotesHistoricalQuery {
    pub id: Vec<i64>,
    pub symbol: Vec<String>,
    pub time: TimeRange,
    pub convert: Convert,
    pub aux: Vec<String>,
    pub skip_invalid: Option<bool>,
}

impl Query for QuotesHistoricalQuery {
    fn to_params(&self) -> Params {
        let mut params = Params::new()
            .with("id", &self.id)
            .with("symbol", &self.symbol);
        self.time.write(&mut params);
        self.convert.write(&mut params);
        params.insert("aux", &self.aux);
        params.insert("skip_invalid", self.skip_invalid);
        params
    }
}

impl QuotesHistoricalQuery {
    pub fn with_id(mut self, id: i64) -> Self {
        self.id.push(id);
        self
    }

    pub fn with_time_start(mut self, time_start: &str) -> Self {
        self.time.time_start = Some(time_start.to_string());
        self
    }

    pub fn with_time_end(mut self, time_end: &str) -> Self {
        self.time.time_end = Some(time_end.to_string());
        self
    }

    pub fn with_count(mut self, count: i64) -> Self {
        self.time.count = Some(count);
        self
    }

    pub fn with_interval(mut self, interval: &str) -> Self {
        self.time.interval = Some(interval.to_string());
        self
    }
}

/// `/v2/cryptocurrency/market-pairs/latest`
#[derive(Clone, Debug, Default)]
pub struct CryptoMarketPairsQuery {
    pub id: Option<i64>,
    pub slug: Option<String>,
    pub symbol: Option<String>,
    pub pagination: Pagination,
    pub sort_dir: Option<SortDirection>,
    /// e.g. `volume_24h_strict`, `effective_liquidity`.
    pub sort: Option<String>,
    pub aux: Vec<String>,
    pub matched_id: Vec<i64>,
    pub matched_symbol: Vec<String>,
    /// `all`, `spot`, `derivatives`, `otc` or `perpetual`.
    pub category: Option<String>,
    pub fee_type: Option<String>,
    pub convert: Convert,
}

impl Query for CryptoMarketPairsQuery {
    fn to_params(&self) -> Params {
        let mut params = Params::new()
            .with("id", self.id)
            .with("slug", self.slug.as_deref())
            .with("symbol", self.symbol.as_deref());
        self.pagination.write(&mut params);
        params.insert("sort_dir", self.sort_dir);
        params.insert("sort", self.sort.as_deref());
        params.insert("aux", &self.aux);
        params.insert("matched_id", &self.matched_id);
        params.insert("matched_symbol", &self.matched_symbol);
        params.insert("category", self.category.as_deref());
        params.insert("fee_type", self.fee_type.as_deref());
        self.convert.write(&mut params);
        params
    }
}

impl CryptoMarketPairsQuery {
    pub fn with_id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }

    pub fn with_symbol(mut self, symbol: &str) -> Self {
        self.symbol = Some(symbol.to_string());
        self
    }

    pub fn with_limit(mut self, limit: i64) -> Self {
        self.pagination.limit = Some(limit);
        self
    }

    pub fn with_category(mut self, category: &str) -> Self {
        self.category = Some(category.to_string());
        self
    }
}

/// `/v2/cryptocurrency/ohlcv/latest`
#[derive(Clone, Debug, Default)]
pub struct OhlcvLatestQuery {
    pub id: Vec<i64>,
    pub symbol: Vec<String>,
    pub convert: Convert,
    pub skip_invalid: Option<bool>,
}

impl Query for OhlcvLatestQuery {
    fn to_params(&self) -> Params {
        let mut params = Params::new()
            .with("id", &self.id)
            .with("symbol", &self.symbol);
        self.convert.write(&mut params);
        params.insert("skip_invalid", self.skip_invalid);
        params
    }
}

impl OhlcvLatestQuery {
    pub fn with_id(mut self, id: i64) -> Self {
        self.id.push(id);
        self
    }

    pub fn with_symbol(mut self, symbol: &str) -> Self {
        self.symbol.push(symbol.to_string());
        self
    }
}

/// `/v2/cryptocurrency/ohlcv/historical`
#[derive(Clone, Debug, Default)]
pub struct OhlcvHistoricalQuery {
    pub id: Vec<i64>,
    pub slug: Vec<String>,
    pub symbol: Vec<String>,
    /// `daily`, `hourly`, or a shorter bucket such as `5m`.
    pub time_period: Option<String>,
    pub time: TimeRange,
    pub convert: Convert,
    pub skip_invalid: Option<bool>,
}

impl Query for OhlcvHistoricalQuery {
    fn to_params(&self) -> Params {
        let mut params = Params::new()
            .with("id", &self.id)
            .with("slug", &self.slug)
            .with("symbol", &self.symbol)
            .with("time_period", self.time_period.as_deref());
        self.time.write(&mut params);
        self.convert.write(&mut params);
        params.insert("skip_invalid", self.skip_invalid);
        params
    }
}

impl OhlcvHistoricalQuery {
    pub fn with_id(mut self, id: i64) -> Self {
        self.id.push(id);
        self
    }

    pub fn with_time_period(mut self, time_period: &str) -> Self {
        self.time_period = Some(time_period.to_string());
        self
    }

    pub fn with_count(mut self, count: i64) -> Self {
        self.time.count = Some(count);
        self
    }
}

/// `/v2/cryptocurrency/price-performance-stats/latest`
#[derive(Clone, Debug, Default)]
pub struct PricePerformanceQuery {
    pub id: Vec<i64>,
    pub slug: Vec<String>,
    pub symbol: Vec<String>,
    /// `all_time`, `yesterday`, `24h`, `7d`, `30d`, `90d`, `365d`.
    pub time_period: Vec<String>,
    pub convert: Convert,
    pub skip_invalid: Option<bool>,
}

impl Query for PricePerformanceQuery {
    fn to_params(&self) -> Params {
        let mut params = Params::new()
            .with("id", &self.id)
            .with("slug", &self.slug)
            .with("symbol", &self.symbol)
            .with("time_period", &self.time_period);
        self.convert.write(&mut params);
        params.insert("skip_invalid", self.skip_invalid);
        params
    }
}

impl PricePerformanceQuery {
    pub fn with_id(mut self, id: i64) -> Self {
        self.id.push(id);
        self
    }

    pub fn with_time_period(mut self, time_period: &str) -> Self {
        self.time_period.push(time_period.to_string());
        self
    }
}

/// `/v1/cryptocurrency/airdrops`
#[derive(Clone, Debug, Default)]
pub struct AirdropsQuery {
    pub pagination: Pagination,
    /// `ONGOING`, `ENDED` or `UPCOMING`.
    pub status: Option<String>,
    pub id: Option<i64>,
    pub slug: Option<String>,
    pub symbol: Option<String>,
}

impl Query for AirdropsQuery {
    fn to_params(&self) -> Params {
        let mut params = Params::new();
        self.pagination.write(&mut params);
        params.insert("status", self.status.as_deref());
        params.insert("id", self.id);
        params.insert("slug", self.slug.as_deref());
        params.insert("symbol", self.symbol.as_deref());
        params
    }
}

impl AirdropsQuery {
    pub fn with_status(mut self, status: &str) -> Self {
        self.status = Some(status.to_string());
        self
    }
}

/// `/v1/cryptocurrency/airdrop`
#[derive(Clone, Debug, Default)]
pub struct AirdropQuery {
    /// Airdrop id as returned by the airdrops endpoint.
    pub id: String,
}

impl Query for AirdropQuery {
    fn to_params(&self) -> Params {
        Params::new().with("id", &self.id)
    }
}

impl AirdropQuery {
    pub fn new(id: &str) -> Self {
        Self { id: id.to_string() }
    }
}

/// Shared by the three `/v1/cryptocurrency/trending/*` endpoints. `sort` and
/// `sort_dir` are only honored by gainers-losers.
#[derive(Clone, Debug, Default)]
pub struct TrendingQuery {
    pub pagination: Pagination,
    /// `24h`, `30d` or `7d`.
    pub time_period: Option<String>,
    pub convert: Convert,
    pub sort: Option<String>,
    pub sort_dir: Option<SortDirection>,
}

impl Query for TrendingQuery {
    fn to_params(&self) -> Params {
        let mut params = Params::new();
        self.pagination.write(&mut params);
        params.insert("time_period", self.time_period.as_deref());
        self.convert.write(&mut params);
        params.insert("sort", self.sort.as_deref());
        params.insert("sort_dir", self.sort_dir);
        params
    }
}

impl TrendingQuery {
    pub fn with_limit(mut self, limit: i64) -> Self {
        self.pagination.limit = Some(limit);
        self
    }

    pub fn with_time_period(mut self, time_period: &str) -> Self {
        self.time_period = Some(time_period.to_string());
        self
    }
}
