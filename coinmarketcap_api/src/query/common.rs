//! Shared query infrastructure: the [`Query`] trait, the [`Params`] map, and [`SortDirection`].

use std::fmt;
use std::str::FromStr;

use url::Url;

use crate::Error;

/// Trait implemented by all query builders. Provides URL serialization on top
/// of the parameter map each query produces.
pub trait Query {
    /// Returns the parameters of this query, in the order they should be sent.
    fn to_params(&self) -> Params;

    /// Appends this query's parameters to the given URL, returning the modified URL.
    fn add_to_url(&self, url: &Url) -> Url {
        self.to_params().add_to_url(url)
    }
}

/// A single query parameter value.
#[derive(Clone, Debug, PartialEq)]
pub enum ParamValue {
    Null,
    Text(String),
    Integer(i64),
    Number(f64),
    Bool(bool),
    List(Vec<String>),
}

impl ParamValue {
    /// The string sent on the wire, or `None` when the parameter must be omitted.
    ///
    /// Omitted: null, empty text, the literal strings `undefined` and `null`,
    /// non-finite numbers, and lists that join to an empty string. Zero and
    /// `false` are sent.
    pub fn to_query_value(&self) -> Option<String> {
        match self {
            ParamValue::Null => None,
            ParamValue::Text(s) => (!is_blank(s)).then(|| s.clone()),
            ParamValue::Integer(n) => Some(n.to_string()),
            ParamValue::Number(n) => n.is_finite().then(|| n.to_string()),
            ParamValue::Bool(b) => Some(b.to_string()),
            ParamValue::List(items) => {
                let joined = items.join(",");
                (!is_blank(&joined)).then_some(joined)
            }
        }
    }
}

fn is_blank(s: &str) -> bool {
    s.is_empty() || s == "undefined" || s == "null"
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        ParamValue::Text(value.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        ParamValue::Text(value)
    }
}

impl From<&String> for ParamValue {
    fn from(value: &String) -> Self {
        ParamValue::Text(value.clone())
    }
}

impl From<i64> for ParamValue {
    fn from(value: i64) -> Self {
        ParamValue::Integer(value)
    }
}

impl From<i32> for ParamValue {
    fn from(value: i32) -> Self {
        ParamValue::Integer(value.into())
    }
}

impl From<u32> for ParamValue {
    fn from(value: u32) -> Self {
        ParamValue::Integer(value.into())
    }
}

impl From<f64> for ParamValue {
    fn from(value: f64) -> Self {
        ParamValue::Number(value)
    }
}

impl From<bool> for ParamValue {
    fn from(value: bool) -> Self {
        ParamValue::Bool(value)
    }
}

impl<T: ToString> From<Vec<T>> for ParamValue {
    fn from(value: Vec<T>) -> Self {
        ParamValue::List(value.iter().map(ToString::to_string).collect())
    }
}

impl<T: ToString> From<&Vec<T>> for ParamValue {
    fn from(value: &Vec<T>) -> Self {
        ParamValue::List(value.iter().map(ToString::to_string).collect())
    }
}

impl<T: ToString> From<&[T]> for ParamValue {
    fn from(value: &[T]) -> Self {
        ParamValue::List(value.iter().map(ToString::to_string).collect())
    }
}

impl<T: Into<ParamValue>> From<Option<T>> for ParamValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(ParamValue::Null, Into::into)
    }
}

/// Ordered map from parameter name to value.
///
/// Inserting a key that is already present replaces its value in place,
/// so the original position is kept.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Params {
    pairs: Vec<(String, ParamValue)>,
}

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces `key`.
    pub fn insert(&mut self, key: &str, value: impl Into<ParamValue>) {
        let value = value.into();
        match self.pairs.iter_mut().find(|(k, _)| k == key) {
            Some((_, existing)) => *existing = value,
            None => self.pairs.push((key.to_string(), value)),
        }
    }

    /// Builder form of [`Params::insert`].
    pub fn with(mut self, key: &str, value: impl Into<ParamValue>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn get(&self, key: &str) -> Option<&ParamValue> {
        self.pairs.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// The `(name, value)` pairs that survive the omission rules, in order.
    pub fn query_pairs(&self) -> Vec<(&str, String)> {
        self.pairs
            .iter()
            .filter_map(|(k, v)| v.to_query_value().map(|v| (k.as_str(), v)))
            .collect()
    }

    /// Appends the surviving parameters to the URL. A URL with nothing to
    /// append is returned without a query string.
    pub fn add_to_url(&self, url: &Url) -> Url {
        let mut url = url.clone();
        let pairs = self.query_pairs();
        if !pairs.is_empty() {
            let mut serializer = url.query_pairs_mut();
            for (key, value) in pairs {
                serializer.append_pair(key, &value);
            }
        }
        url
    }
}

impl Query for Params {
    fn to_params(&self) -> Params {
        self.clone()
    }
}

/// Joins the base URL and the endpoint path, then applies the query.
pub fn build_url<Q>(base_url: &str, path: &str, query: Option<&Q>) -> Result<Url, Error>
where
    Q: Query + ?Sized,
{
    let url = Url::parse(format!("{}{}", base_url.trim_end_matches('/'), path).as_str())
        .map_err(|e| {
            tracing::error!("Invalid URL constructed: {}", e);
            Error::InvalidUrl(e)
        })?;
    Ok(match query {
        Some(query) => query.add_to_url(&url),
        None => url,
    })
}

/// Sort order for API results, sent as `sort_dir`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortDirection {
    /// Ascending order (oldest/smallest first).
    Asc,
    /// Descending order (newest/largest first). This is the provider default.
    #[default]
    Desc,
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                SortDirection::Asc => "asc",
                SortDirection::Desc => "desc",
            }
        )
    }
}

impl FromStr for SortDirection {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asc" => Ok(SortDirection::Asc),
            "desc" => Ok(SortDirection::Desc),
            _ => Err(()),
        }
    }
}

impl From<SortDirection> for ParamValue {
    fn from(value: SortDirection) -> Self {
        ParamValue::Text(value.to_string())
    }
}

/// Listing status filter used by the map endpoints.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ListingStatus {
    #[default]
    Active,
    Inactive,
    Untracked,
}

impl fmt::Display for ListingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                ListingStatus::Active => "active",
                ListingStatus::Inactive => "inactive",
                ListingStatus::Untracked => "untracked",
            }
        )
    }
}

impl From<ListingStatus> for ParamValue {
    fn from(value: ListingStatus) -> Self {
        ParamValue::Text(value.to_string())
    }
}

/// Fields shared by the paginated endpoints: `start` (1-based offset) and `limit`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Pagination {
    pub start: Option<i64>,
    pub limit: Option<i64>,
}

impl Pagination {
    pub(crate) fn write(&self, params: &mut Params) {
        params.insert("start", self.start);
        params.insert("limit", self.limit);
    }
}

/// Fields shared by the endpoints that accept quote currencies.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Convert {
    /// Currency symbols, e.g. `USD`, `BTC`.
    pub convert: Vec<String>,
    /// CoinMarketCap currency ids. Mutually exclusive with `convert`.
    pub convert_id: Vec<i64>,
}

impl Convert {
    pub(crate) fn write(&self, params: &mut Params) {
        params.insert("convert", &self.convert);
        params.insert("convert_id", &self.convert_id);
    }
}

/// Interval and time window fields used by the historical endpoints.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TimeRange {
    /// ISO 8601 timestamp or unix seconds.
    pub time_start: Option<String>,
    pub time_end: Option<String>,
    pub count: Option<i64>,
    /// e.g. `5m`, `hourly`, `daily`.
    pub interval: Option<String>,
}

impl TimeRange {
    pub(crate) fn write(&self, params: &mut Params) {
        params.insert("time_start", self.time_start.as_deref());
        params.insert("time_end", self.time_end.as_deref());
        params.insert("count", self.count);
        params.insert("interval", self.interval.as_deref());
    }
}
