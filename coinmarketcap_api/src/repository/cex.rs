use crate::{
    endpoints::cex as paths,
    query::{
        ExchangeAssetsQuery, ExchangeInfoQuery, ExchangeListingsQuery, ExchangeMapQuery,
        ExchangeMarketPairsQuery, ExchangeQuotesHistoricalQuery, ExchangeQuotesQuery,
    },
    types::{
        Exchange, ExchangeAsset, ExchangeHistoricalQuotes, ExchangeInfo, ExchangeMapItem,
        ExchangeMarketPairs, Keyed, Response,
    },
    Client, Error,
};

/// Centralized exchange endpoints.
#[derive(Clone, Copy)]
pub struct CexRepository<'a> {
    client: &'a Client,
}

impl<'a> CexRepository<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Fetches the id map of all exchanges.
    pub async fn map(
        &self,
        query: &ExchangeMapQuery,
    ) -> Result<Response<Vec<ExchangeMapItem>>, Error> {
        self.client.send(paths::MAP, Some(query)).await
    }

    /// Fetches static metadata for one or more exchanges.
    pub async fn info(
        &self,
        query: &ExchangeInfoQuery,
    ) -> Result<Response<Keyed<ExchangeInfo>>, Error> {
        self.client.send(paths::INFO, Some(query)).await
    }

    /// Fetches a paginated list of exchanges with latest volume.
    pub async fn listings_latest(
        &self,
        query: &ExchangeListingsQuery,
    ) -> Result<Response<Vec<Exchange>>, Error> {
        self.client.send(paths::LISTINGS_LATEST, Some(query)).await
    }

    pub async fn quotes_latest(
        &self,
        query: &ExchangeQuotesQuery,
    ) -> Result<Response<Keyed<Exchange>>, Error> {
        self.client.send(paths::QUOTES_LATEST, Some(query)).await
    }

    pub async fn quotes_historical(
        &self,
        query: &ExchangeQuotesHistoricalQuery,
    ) -> Result<Response<Keyed<ExchangeHistoricalQuotes>>, Error> {
        self.client.send(paths::QUOTES_HISTORICAL, Some(query)).await
    }

    /// Fetches active market pairs on an exchange.
    pub async fn market_pairs_latest(
        &self,
        query: &ExchangeMarketPairsQuery,
    ) -> Result<Response<ExchangeMarketPairs>, Error> {
        self.client
            .send(paths::MARKET_PAIRS_LATEST, Some(query))
            .await
    }

    /// Fetches the wallet holdings an exchange has disclosed.
    pub async fn assets(
        &self,
        query: &ExchangeAssetsQuery,
    ) -> Result<Response<Vec<ExchangeAsset>>, Error> {
        self.client.send(paths::ASSETS, Some(query)).await
    }
}
