use crate::{
    endpoints::crypto as paths,
    query::{
        AirdropQuery, AirdropsQuery, CategoriesQuery, CategoryQuery, CryptoInfoQuery,
        CryptoMapQuery, CryptoMarketPairsQuery, ListingsHistoricalQuery, ListingsLatestQuery,
        ListingsNewQuery, OhlcvHistoricalQuery, OhlcvLatestQuery, PricePerformanceQuery,
        QuotesHistoricalQuery, QuotesLatestQuery, TrendingQuery,
    },
    types::{
        Airdrop, Category, CryptoInfo, CryptoMapItem, CryptoMarketPairs, Cryptocurrency,
        HistoricalQuotes, Keyed, OhlcvHistorical, OhlcvLatest, PricePerformance, Response,
    },
    Client, Error,
};

/// Cryptocurrency endpoints.
#[derive(Clone, Copy)]
pub struct CryptoRepository<'a> {
    client: &'a Client,
}

impl<'a> CryptoRepository<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Fetches the list of cryptocurrency categories.
    pub async fn categories(
        &self,
        query: &CategoriesQuery,
    ) -> Result<Response<Vec<Category>>, Error> {
        self.client.send(paths::CATEGORIES, Some(query)).await
    }

    /// Fetches a single category with its member coins.
    pub async fn category(&self, query: &CategoryQuery) -> Result<Response<Category>, Error> {
        self.client.send(paths::CATEGORY, Some(query)).await
    }

    /// Fetches the id map of all cryptocurrencies.
    pub async fn map(&self, query: &CryptoMapQuery) -> Result<Response<Vec<CryptoMapItem>>, Error> {
        self.client.send(paths::MAP, Some(query)).await
    }

    /// Fetches static metadata (logo, description, links) for one or more cryptocurrencies.
    pub async fn info(&self, query: &CryptoInfoQuery) -> Result<Response<Keyed<CryptoInfo>>, Error> {
        self.client.send(paths::INFO, Some(query)).await
    }

    /// Fetches a ranked, paginated list of cryptocurrencies with latest market data.
    pub async fn listings_latest(
        &self,
        query: &ListingsLatestQuery,
    ) -> Result<Response<Vec<Cryptocurrency>>, Error> {
        self.client.send(paths::LISTINGS_LATEST, Some(query)).await
    }

    /// Fetches the ranked list as it stood on a past date.
    pub async fn listings_historical(
        &self,
        query: &ListingsHistoricalQuery,
    ) -> Result<Response<Vec<Cryptocurrency>>, Error> {
        self.client.send(paths::LISTINGS_HISTORICAL, Some(query)).await
    }

    /// Fetches the most recently added cryptocurrencies.
    pub async fn listings_new(
        &self,
        query: &ListingsNewQuery,
    ) -> Result<Response<Vec<Cryptocurrency>>, Error> {
        self.client.send(paths::LISTINGS_NEW, Some(query)).await
    }

    /// Fetches latest market quotes for one or more cryptocurrencies.
    pub async fn quotes_latest(
        &self,
        query: &QuotesLatestQuery,
    ) -> Result<Response<Keyed<Cryptocurrency>>, Error> {
        self.client.send(paths::QUOTES_LATEST, Some(query)).await
    }

    /// Fetches an interval of historical quotes.
    pub async fn quotes_historical(
        &self,
        query: &QuotesHistoricalQuery,
    ) -> Result<Response<Keyed<HistoricalQuotes>>, Error> {
        self.client.send(paths::QUOTES_HISTORICAL, Some(query)).await
    }

    /// Fetches active market pairs for a cryptocurrency.
    pub async fn market_pairs_latest(
        &self,
        query: &CryptoMarketPairsQuery,
    ) -> Result<Response<CryptoMarketPairs>, Error> {
        self.client
            .send(paths::MARKET_PAIRS_LATEST, Some(query))
            .await
    }

    /// Fetches the current day's OHLCV.
    pub async fn ohlcv_latest(
        &self,
        query: &OhlcvLatestQuery,
    ) -> Result<Response<Keyed<OhlcvLatest>>, Error> {
        self.client.send(paths::OHLCV_LATEST, Some(query)).await
    }

    /// Fetches historical OHLCV.
    ///
    /// A single id or slug returns one series object. Several ids return a
    /// map keyed by id, which is not covered by this method's return type;
    /// use [`Client::send`] with a map type for that case.
    pub async fn ohlcv_historical(
        &self,
        query: &OhlcvHistoricalQuery,
    ) -> Result<Response<OhlcvHistorical>, Error> {
        self.client.send(paths::OHLCV_HISTORICAL, Some(query)).await
    }

    /// Fetches price performance statistics per time period.
    pub async fn price_performance_stats(
        &self,
        query: &PricePerformanceQuery,
    ) -> Result<Response<Keyed<PricePerformance>>, Error> {
        self.client
            .send(paths::PRICE_PERFORMANCE_STATS, Some(query))
            .await
    }

    /// Fetches the list of past, present and upcoming airdrops.
    pub async fn airdrops(&self, query: &AirdropsQuery) -> Result<Response<Vec<Airdrop>>, Error> {
        self.client.send(paths::AIRDROPS, Some(query)).await
    }

    /// Fetches a single airdrop.
    pub async fn airdrop(&self, query: &AirdropQuery) -> Result<Response<Airdrop>, Error> {
        self.client.send(paths::AIRDROP, Some(query)).await
    }

    /// Fetches the cryptocurrencies trending in search.
    pub async fn trending_latest(
        &self,
        query: &TrendingQuery,
    ) -> Result<Response<Vec<Cryptocurrency>>, Error> {
        self.client.send(paths::TRENDING_LATEST, Some(query)).await
    }

    /// Fetches the most visited cryptocurrency pages.
    pub async fn trending_most_visited(
        &self,
        query: &TrendingQuery,
    ) -> Result<Response<Vec<Cryptocurrency>>, Error> {
        self.client
            .send(paths::TRENDING_MOST_VISITED, Some(query))
            .await
    }

    /// Fetches the biggest gainers and losers over the period.
    pub async fn trending_gainers_losers(
        &self,
        query: &TrendingQuery,
    ) -> Result<Response<Vec<Cryptocurrency>>, Error> {
        self.client
            .send(paths::TRENDING_GAINERS_LOSERS, Some(query))
            .await
    }
}
