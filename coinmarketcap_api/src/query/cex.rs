//! Query builders for the `/exchange` endpoints.

use super::common::{Convert, ListingStatus, Pagination, Params, Query, SortDirection, TimeRange};

/// `/v1/exchange/map`
#[derive(Clone, Debug, Default)]
pub struct ExchangeMapQuery {
    pub listing_status: Vec<ListingStatus>,
    pub slug: Vec<String>,
    pub pagination: Pagination,
    /// `volume_24h` or `id`.
    pub sort: Option<String>,
    pub aux: Vec<String>,
    /// Only exchanges listing this cryptocurrency.
    pub crypto_id: Option<i64>,
}

impl Query for ExchangeMapQuery {
    fn to_params(&self) -> Params {
        let mut params = Params::new()
            .with("listing_status", &self.listing_status)
            .with("slug", &self.slug);
        self.pagination.write(&mut params);
        params.insert("sort", self.sort.as_deref());
        params.insert("aux", &self.aux);
        params.insert("crypto_id", self.crypto_id);
        params
    }
}

impl ExchangeMapQuery {
    pub fn with_slug(mut self, slug: &str) -> Self {
        self.slug.push(slug.to_string());
        self
    }

    pub fn with_limit(mut self, limit: i64) -> Self {
        self.pagination.limit = Some(limit);
        self
    }

    pub fn with_crypto_id(mut self, crypto_id: i64) -> Self {
        self.crypto_id = Some(crypto_id);
        self
    }
}

/// `/v1/exchange/info`
#[derive(Clone, Debug, Default)]
pub struct ExchangeInfoQuery {
    pub id: Vec<i64>,
    pub slug: Vec<String>,
    pub aux: Vec<String>,
}

impl Query for ExchangeInfoQuery {
    fn to_params(&self) -> Params {
        Params::new()
            .with("id", &self.id)
            .with("slug", &self.slug)
            .with("aux", &self.aux)
    }
}

impl ExchangeInfoQuery {
    pub fn with_id(mut self, id: i64) -> Self {
        self.id.push(id);
        self
    }

    pub fn with_slug(mut self, slug: &str) -> Self {
        self.slug.push(slug.to_string());
        self
    }
}

/// `/v1/exchange/listings/latest`
#[derive(Clone, Debug, Default)]
pub struct ExchangeListingsQuery {
    pub pagination: Pagination,
    /// `name`, `volume_24h`, `volume_24h_adjusted` or `exchange_score`.
    pub sort: Option<String>,
    pub sort_dir: Option<SortDirection>,
    /// `all`, `fees`, `no_fees`.
    pub market_type: Option<String>,
    /// `all`, `spot`, `derivatives`, `dex` or `lending`.
    pub category: Option<String>,
    pub aux: Vec<String>,
    pub convert: Convert,
}

impl Query for ExchangeListingsQuery {
    fn to_params(&self) -> Params {
        let mut params = Params::new();
        self.pagination.write(&mut params);
        params.insert("sort", self.sort.as_deref());
        params.insert("sort_dir", self.sort_dir);
        params.insert("market_type", self.market_type.as_deref());
        params.insert("category", self.category.as_deref());
        params.insert("aux", &self.aux);
        self.convert.write(&mut params);
        params
    }
}

impl ExchangeListingsQuery {
    pub fn with_limit(mut self, limit: i64) -> Self {
        self.pagination.limit = Some(limit);
        self
    }

    pub fn with_category(mut self, category: &str) -> Self {
        self.category = Some(category.to_string());
        self
    }
}

/// `/v1/exchange/quotes/latest`
#[derive(Clone, Debug, Default)]
pub struct ExchangeQuotesQuery {
    pub id: Vec<i64>,
    pub slug: Vec<String>,
    pub convert: Convert,
}

impl Query for ExchangeQuotesQuery {
    fn to_params(&self) -> Params {
        let mut params = Params::new().with("id", &self.id).with("slug", &self.slug);
        self.convert.write(&mut params);
        params
    }
}

impl ExchangeQuotesQuery {
    pub fn with_id(mut self, id: i64) -> Self {
        self.id.push(id);
        self
    }

    pub fn with_slug(mut self, slug: &str) -> Self {
        self.slug.push(slug.to_string());
        self
    }
}

/// `/v1/exchange/quotes/historical`
#[derive(Clone, Debug, Default)]
pub struct ExchangeQuotesHistoricalQuery {
    pub id: Vec<i64>,
    pub slug: Vec<String>,
    pub time: TimeRange,
    pub convert: Convert,
}

impl Query for ExchangeQuotesHistoricalQuery {
    fn to_params(&self) -> Params {
        let mut params = Params::new().with("id", &self.id).with("slug", &self.slug);
        self.time.write(&mut params);
        self.convert.write(&mut params);
        params
    }
}

impl ExchangeQuotesHistoricalQuery {
    pub fn with_id(mut self, id: i64) -> Self {
        self.id.push(id);
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

/// `/v1/exchange/market-pairs/latest`
#[derive(Clone, Debug, Default)]
pub struct ExchangeMarketPairsQuery {
    pub id: Option<i64>,
    pub slug: Option<String>,
    pub pagination: Pagination,
    pub aux: Vec<String>,
    pub matched_id: Vec<i64>,
    pub matched_symbol: Vec<String>,
    pub category: Option<String>,
    pub fee_type: Option<String>,
    pub convert: Convert,
}

impl Query for ExchangeMarketPairsQuery {
    fn to_params(&self) -> Params {
        let mut params = Params::new()
            .with("id", self.id)
            .with("slug", self.slug.as_deref());
        self.pagination.write(&mut params);
        params.insert("aux", &self.aux);
        params.insert("matched_id", &self.matched_id);
        params.insert("matched_symbol", &self.matched_symbol);
        params.insert("category", self.category.as_deref());
        params.insert("fee_type", self.fee_type.as_deref());
        self.convert.write(&mut params);
        params
    }
}

impl ExchangeMarketPairsQuery {
    pub fn with_id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }

    pub fn with_slug(mut self, slug: &str) -> Self {
        self.slug = Some(slug.to_string());
        self
    }

    pub fn with_matched_symbol(mut self, symbol: &str) -> Self {
        self.matched_symbol.push(symbol.to_string());
        self
    }
}

/// `/v1/exchange/assets`
#[derive(Clone, Debug, Default)]
pub struct ExchangeAssetsQuery {
    pub id: i64,
}

impl Query for ExchangeAssetsQuery {
    fn to_params(&self) -> Params {
        Params::new().with("id", self.id)
    }
}

impl ExchangeAssetsQuery {
    pub fn new(id: i64) -> Self {
        Self { id }
    }
}
