use crate::{
    endpoints::dex as paths,
    query::{
        DexInfoQuery, DexListingsQuery, DexNetworksQuery, DexOhlcvHistoricalQuery, DexPairQuery,
        SpotPairsQuery,
    },
    types::{Dex, DexNetwork, DexPair, DexPairOhlcv, DexPairTrades, Response},
    Client, Error,
};

/// Decentralized exchange endpoints (v4).
#[derive(Clone, Copy)]
pub struct DexRepository<'a> {
    client: &'a Client,
}

impl<'a> DexRepository<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Fetches static metadata for one or more DEXes.
    pub async fn listings_info(&self, query: &DexInfoQuery) -> Result<Response<Vec<Dex>>, Error> {
        self.client.send(paths::LISTINGS_INFO, Some(query)).await
    }

    /// Fetches a paginated list of DEXes with volume and market share.
    pub async fn listings_quotes(
        &self,
        query: &DexListingsQuery,
    ) -> Result<Response<Vec<Dex>>, Error> {
        self.client.send(paths::LISTINGS_QUOTES, Some(query)).await
    }

    /// Fetches the list of supported networks.
    pub async fn networks(
        &self,
        query: &DexNetworksQuery,
    ) -> Result<Response<Vec<DexNetwork>>, Error> {
        self.client.send(paths::NETWORKS, Some(query)).await
    }

    /// Fetches the latest spot pairs on a network or DEX.
    pub async fn spot_pairs_latest(
        &self,
        query: &SpotPairsQuery,
    ) -> Result<Response<Vec<DexPair>>, Error> {
        self.client.send(paths::SPOT_PAIRS_LATEST, Some(query)).await
    }

    /// Fetches latest quotes for one or more pair contracts.
    pub async fn pairs_quotes_latest(
        &self,
        query: &DexPairQuery,
    ) -> Result<Response<Vec<DexPair>>, Error> {
        self.client
            .send(paths::PAIRS_QUOTES_LATEST, Some(query))
            .await
    }

    pub async fn pairs_ohlcv_latest(
        &self,
        query: &DexPairQuery,
    ) -> Result<Response<Vec<DexPairOhlcv>>, Error> {
        self.client.send(paths::PAIRS_OHLCV_LATEST, Some(query)).await
    }

    pub async fn pairs_ohlcv_historical(
        &self,
        query: &DexOhlcvHistoricalQuery,
    ) -> Result<Response<Vec<DexPairOhlcv>>, Error> {
        self.client
            .send(paths::PAIRS_OHLCV_HISTORICAL, Some(query))
            .await
    }

    /// Fetches the most recent swaps on one or more pairs.
    pub async fn pairs_trades_latest(
        &self,
        query: &DexPairQuery,
    ) -> Result<Response<Vec<DexPairTrades>>, Error> {
        self.client
            .send(paths::PAIRS_TRADES_LATEST, Some(query))
            .await
    }
}
