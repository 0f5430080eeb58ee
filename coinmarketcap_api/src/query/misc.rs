//! Query builders for the fiat map and the tools endpoints.

use super::common::{Convert, Pagination, Params, Query};

/// `/v1/fiat/map`
#[derive(Clone, Debug, Default)]
pub struct FiatMapQuery {
    pub pagination: Pagination,
    /// `id` or `name`.
    pub sort: Option<String>,
    pub include_metals: Option<bool>,
}

impl Query for FiatMapQuery {
    fn to_params(&self) -> Params {
        let mut params = Params::new();
        self.pagination.write(&mut params);
        params.insert("sort", self.sort.as_deref());
        params.insert("include_metals", self.include_metals);
        params
    }
}

impl FiatMapQuery {
    pub fn with_start(mut self, start: i64) -> Self {
        self.pagination.start = Some(start);
        self
    }

    pub fn with_limit(mut self, limit: i64) -> Self {
        self.pagination.limit = Some(limit);
        self
    }

    pub fn with_sort(mut self, sort: &str) -> Self {
        self.sort = Some(sort.to_string());
        self
    }

    pub fn with_include_metals(mut self, include_metals: bool) -> Self {
        self.include_metals = Some(include_metals);
        self
    }
}

/// `/v2/tools/price-conversion`
///
/// Exactly one of `id` or `symbol` identifies the source currency.
#[derive(Clone, Debug, Default)]
pub struct PriceConversionQuery {
    pub amount: f64,
    pub id: Option<i64>,
    pub symbol: Option<String>,
    /// Historical conversion at this timestamp; latest when unset.
    pub time: Option<String>,
    pub convert: Convert,
}

impl Query for PriceConversionQuery {
    fn to_params(&self) -> Params {
        let mut params = Params::new()
            .with("amount", self.amount)
            .with("id", self.id)
            .with("symbol", self.symbol.as_deref())
            .with("time", self.time.as_deref());
        self.convert.write(&mut params);
        params
    }
}

impl PriceConversionQuery {
    pub fn from_id(amount: f64, id: i64) -> Self {
        Self {
            amount,
            id: Some(id),
            ..Default::default()
        }
    }

    pub fn from_symbol(amount: f64, symbol: &str) -> Self {
        Self {
            amount,
            symbol: Some(symbol.to_string()),
            ..Default::default()
        }
    }

    pub fn with_time(mut self, time: &str) -> Self {
        self.time = Some(time.to_string());
        self
    }

    pub fn with_convert(mut self, convert: &str) -> Self {
        self.convert.convert.push(convert.to_string());
        self
    }

    pub fn with_convert_id(mut self, convert_id: i64) -> Self {
        self.convert.convert_id.push(convert_id);
        self
    }
}

#[cfg(test)]
mod tests {
    use url::Url;

    use super::*;

    #[test]
    fn test_fiat_map_query() {
        let url = Url::parse("https://pro-api.coinmarketcap.com/v1/fiat/map").unwrap();

        insta::assert_snapshot!(FiatMapQuery::default()
            .with_limit(10)
            .with_start(1)
            .with_sort("id")
            .with_include_metals(false)
            .add_to_url(&url)
            .to_string(), @"https://pro-api.coinmarketcap.com/v1/fiat/map?start=1&limit=10&sort=id&include_metals=false");
    }

    #[test]
    fn price_conversion_sends_amount_and_source() {
        let pairs = PriceConversionQuery::from_symbol(1.5, "BTC")
            .with_convert("USD")
            .with_convert("EUR")
            .to_params()
            .query_pairs()
            .into_iter()
            .map(|(k, v)| (k.to_string(), v))
            .collect::<Vec<_>>();
        assert_eq!(
            pairs,
            vec![
                ("amount".to_string(), "1.5".to_string()),
                ("symbol".to_string(), "BTC".to_string()),
                ("convert".to_string(), "USD,EUR".to_string()),
            ]
        );
    }
}
