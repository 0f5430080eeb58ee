//! Query builders for the v4 `/dex` endpoints.

use super::common::{Pagination, Params, Query, SortDirection};

/// `/v4/dex/listings/info`
#[derive(Clone, Debug, Default)]
pub struct DexInfoQuery {
    pub id: Vec<i64>,
    pub aux: Vec<String>,
}

impl Query for DexInfoQuery {
    fn to_params(&self) -> Params {
        Params::new().with("id", &self.id).with("aux", &self.aux)
    }
}

impl DexInfoQuery {
    pub fn with_id(mut self, id: i64) -> Self {
        self.id.push(id);
        self
    }
}

/// `/v4/dex/listings/quotes`
#[derive(Clone, Debug, Default)]
pub struct DexListingsQuery {
    pub pagination: Pagination,
    /// `name`, `volume_24h`, `market_share` or `num_markets`.
    pub sort: Option<String>,
    pub sort_dir: Option<SortDirection>,
    /// `all`, `orderbook`, `swap` or `aggregator`.
    pub dex_type: Option<String>,
    pub aux: Vec<String>,
    pub convert_id: Vec<i64>,
}

impl Query for DexListingsQuery {
    fn to_params(&self) -> Params {
        let mut params = Params::new();
        self.pagination.write(&mut params);
        params.insert("sort", self.sort.as_deref());
        params.insert("sort_dir", self.sort_dir);
        params.insert("type", self.dex_type.as_deref());
        params.insert("aux", &self.aux);
        params.insert("convert_id", &self.convert_id);
        params
    }
}

impl DexListingsQuery {
    pub fn with_limit(mut self, limit: i64) -> Self {
        self.pagination.limit = Some(limit);
        self
    }

    pub fn with_type(mut self, dex_type: &str) -> Self {
        self.dex_type = Some(dex_type.to_string());
        self
    }
}

/// `/v4/dex/networks/list`
#[derive(Clone, Debug, Default)]
pub struct DexNetworksQuery {
    pub pagination: Pagination,
    pub sort: Option<String>,
    pub sort_dir: Option<SortDirection>,
    pub aux: Vec<String>,
}

impl Query for DexNetworksQuery {
    fn to_params(&self) -> Params {
        let mut params = Params::new();
        self.pagination.write(&mut params);
        params.insert("sort", self.sort.as_deref());
        params.insert("sort_dir", self.sort_dir);
        params.insert("aux", &self.aux);
        params
    }
}

/// `/v4/dex/spot-pairs/latest`
///
/// One of the network or dex selectors is required by the provider.
#[derive(Clone, Debug, Default)]
pub struct SpotPairsQuery {
    pub network_id: Option<i64>,
    pub network_slug: Option<String>,
    pub dex_id: Option<i64>,
    pub dex_slug: Option<String>,
    pub base_asset_id: Option<i64>,
    pub base_asset_symbol: Option<String>,
    pub base_asset_contract_address: Option<String>,
    pub base_asset_ucid: Option<i64>,
    pub quote_asset_id: Option<i64>,
    pub quote_asset_symbol: Option<String>,
    pub quote_asset_contract_address: Option<String>,
    pub quote_asset_ucid: Option<i64>,
    /// Cursor returned by the previous page.
    pub scroll_id: Option<String>,
    pub limit: Option<i64>,
    pub liquidity_min: Option<f64>,
    pub liquidity_max: Option<f64>,
    pub volume_24h_min: Option<f64>,
    pub volume_24h_max: Option<f64>,
    pub no_of_transactions_24h_min: Option<i64>,
    pub no_of_transactions_24h_max: Option<i64>,
    pub percent_change_24h_min: Option<f64>,
    pub percent_change_24h_max: Option<f64>,
    pub sort: Option<String>,
    pub sort_dir: Option<SortDirection>,
    pub aux: Vec<String>,
    pub reverse_order: Option<bool>,
    pub convert_id: Vec<i64>,
}

impl Query for SpotPairsQuery {
    fn to_params(&self) -> Params {
        Params::new()
            .with("network_id", self.network_id)
            .with("network_slug", self.network_slug.as_deref())
            .with("dex_id", self.dex_id)
            .with("dex_slug", self.dex_slug.as_deref())
            .with("base_asset_id", self.base_asset_id)
            .with("base_asset_symbol", self.base_asset_symbol.as_deref())
            .with(
                "base_asset_contract_address",
                self.base_asset_contract_address.as_deref(),
            )
            .with("base_asset_ucid", self.base_asset_ucid)
            .with("quote_asset_id", self.quote_asset_id)
            .with("quote_asset_symbol", self.quote_asset_symbol.as_deref())
            .with(
                "quote_asset_contract_address",
                self.quote_asset_contract_address.as_deref(),
            )
            .with("quote_asset_ucid", self.quote_asset_ucid)
            .with("scroll_id", self.scroll_id.as_deref())
            .with("limit", self.limit)
            .with("liquidity_min", self.liquidity_min)
            .with("liquidity_max", self.liquidity_max)
            .with("volume_24h_min", self.volume_24h_min)
            .with("volume_24h_max", self.volume_24h_max)
            .with("no_of_transactions_24h_min", self.no_of_transactions_24h_min)
            .with("no_of_transactions_24h_max", self.no_of_transactions_24h_max)
            .with("percent_change_24h_min", self.percent_change_24h_min)
            .with("percent_change_24h_max", self.percent_change_24h_max)
            .with("sort", self.sort.as_deref())
            .with("sort_dir", self.sort_dir)
            .with("aux", &self.aux)
            .with("reverse_order", self.reverse_order)
            .with("convert_id", &self.convert_id)
    }
}

impl SpotPairsQuery {
    pub fn with_network_slug(mut self, network_slug: &str) -> Self {
        self.network_slug = Some(network_slug.to_string());
        self
    }

    pub fn with_network_id(mut self, network_id: i64) -> Self {
        self.network_id = Some(network_id);
        self
    }

    pub fn with_dex_slug(mut self, dex_slug: &str) -> Self {
        self.dex_slug = Some(dex_slug.to_string());
        self
    }

    pub fn with_base_asset_symbol(mut self, symbol: &str) -> Self {
        self.base_asset_symbol = Some(symbol.to_string());
        self
    }

    pub fn with_scroll_id(mut self, scroll_id: &str) -> Self {
        self.scroll_id = Some(scroll_id.to_string());
        self
    }

    pub fn with_limit(mut self, limit: i64) -> Self {
        self.limit = Some(limit);
        self
    }
}

/// Pair selector shared by the `/v4/dex/pairs/*` endpoints.
#[derive(Clone, Debug, Default)]
pub struct DexPairQuery {
    /// One or more pair contract addresses.
    pub contract_address: Vec<String>,
    pub network_id: Option<i64>,
    pub network_slug: Option<String>,
    pub aux: Vec<String>,
    pub convert_id: Vec<i64>,
    pub skip_invalid: Option<bool>,
    pub reverse_order: Option<bool>,
}

impl Query for DexPairQuery {
    fn to_params(&self) -> Params {
        Params::new()
            .with("contract_address", &self.contract_address)
            .with("network_id", self.network_id)
            .with("network_slug", self.network_slug.as_deref())
            .with("aux", &self.aux)
            .with("convert_id", &self.convert_id)
            .with("skip_invalid", self.skip_invalid)
            .with("reverse_order", self.reverse_order)
    }
}

impl DexPairQuery {
    pub fn new(network_slug: &str, contract_address: &str) -> Self {
        Self {
            contract_address: vec![contract_address.to_string()],
            network_slug: Some(network_slug.to_string()),
            ..Default::default()
        }
    }

    pub fn with_contract_address(mut self, contract_address: &str) -> Self {
        self.contract_address.push(contract_address.to_string());
        self
    }

    pub fn with_reverse_order(mut self, reverse_order: bool) -> Self {
        self.reverse_order = Some(reverse_order);
        self
    }
}

/// `/v4/dex/pairs/ohlcv/historical`
#[derive(Clone, Debug, Default)]
pub struct DexOhlcvHistoricalQuery {
    pub pair: DexPairQuery,
    /// `1m` through `1d`, or `daily` / `hourly`.
    pub time_period: Option<String>,
    pub time_start: Option<String>,
    pub time_end: Option<String>,
    pub count: Option<i64>,
    pub interval: Option<String>,
}

impl Query for DexOhlcvHistoricalQuery {
    fn to_params(&self) -> Params {
        self.pair
            .to_params()
            .with("time_period", self.time_period.as_deref())
            .with("time_start", self.time_start.as_deref())
            .with("time_end", self.time_end.as_deref())
            .with("count", self.count)
            .with("interval", self.interval.as_deref())
    }
}

impl DexOhlcvHistoricalQuery {
    pub fn new(pair: DexPairQuery) -> Self {
        Self {
            pair,
            ..Default::default()
        }
    }

    pub fn with_time_period(mut self, time_period: &str) -> Self {
        self.time_period = Some(time_period.to_string());
        self
    }

    pub fn with_count(mut self, count: i64) -> Self {
        self.count = Some(count);
        self
    }

    pub fn with_interval(mut self, interval: &str) -> Self {
        self.interval = Some(interval.to_string());
        self
    }
}
