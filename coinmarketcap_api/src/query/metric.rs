//! Query builders for global metrics, fear & greed, the CMC100 index and blockchain statistics.

use super::common::{Convert, Pagination, Params, Query, TimeRange};

/// `/v1/global-metrics/quotes/latest`
#[derive(Clone, Debug, Default)]
pub struct GlobalMetricsQuery {
    pub convert: Convert,
}

impl Query for GlobalMetricsQuery {
    fn to_params(&self) -> Params {
        let mut params = Params::new();
        self.convert.write(&mut params);
        params
    }
}

impl GlobalMetricsQuery {
    pub fn with_convert(mut self, convert: &str) -> Self {
        self.convert.convert.push(convert.to_string());
        self
    }
}

/// `/v1/global-metrics/quotes/historical`
#[derive(Clone, Debug, Default)]
pub struct GlobalMetricsHistoricalQuery {
    pub time: TimeRange,
    pub convert: Convert,
    pub aux: Vec<String>,
}

impl Query for GlobalMetricsHistoricalQuery {
    fn to_params(&self) -> Params {
        let mut params = Params::new();
        self.time.write(&mut params);
        self.convert.write(&mut params);
        params.insert("aux", &self.aux);
        params
    }
}

impl GlobalMetricsHistoricalQuery {
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

/// `/v3/fear-and-greed/historical`
#[derive(Clone, Debug, Default)]
pub struct FearAndGreedHistoricalQuery {
    pub pagination: Pagination,
}

impl Query for FearAndGreedHistoricalQuery {
    fn to_params(&self) -> Params {
        let mut params = Params::new();
        self.pagination.write(&mut params);
        params
    }
}

impl FearAndGreedHistoricalQuery {
    pub fn with_start(mut self, start: i64) -> Self {
        self.pagination.start = Some(start);
        self
    }

    pub fn with_limit(mut self, limit: i64) -> Self {
        self.pagination.limit = Some(limit);
        self
    }
}

/// `/v3/index/cmc100-historic`
#[derive(Clone, Debug, Default)]
pub struct Cmc100HistoricalQuery {
    pub time: TimeRange,
}

impl Query for Cmc100HistoricalQuery {
    fn to_params(&self) -> Params {
        let mut params = Params::new();
        self.time.write(&mut params);
        params
    }
}

impl Cmc100HistoricalQuery {
    pub fn with_count(mut self, count: i64) -> Self {
        self.time.count = Some(count);
        self
    }

    pub fn with_interval(mut self, interval: &str) -> Self {
        self.time.interval = Some(interval.to_string());
        self
    }
}

/// `/v1/blockchain/statistics/latest`
#[derive(Clone, Debug, Default)]
pub struct BlockchainStatisticsQuery {
    pub id: Vec<i64>,
    pub symbol: Vec<String>,
    pub slug: Vec<String>,
}

impl Query for BlockchainStatisticsQuery {
    fn to_params(&self) -> Params {
        Params::new()
            .with("id", &self.id)
            .with("symbol", &self.symbol)
            .with("slug", &self.slug)
    }
}

impl BlockchainStatisticsQuery {
    pub fn with_id(mut self, id: i64) -> Self {
        self.id.push(id);
        self
    }

    pub fn with_symbol(mut self, symbol: &str) -> Self {
        self.symbol.push(symbol.to_string());
        self
    }

    pub fn with_slug(mut self, slug: &str) -> Self {
        self.slug.push(slug.to_string());
        self
    }
}
