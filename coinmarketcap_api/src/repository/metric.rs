use crate::{
    endpoints::metric as paths,
    query::{
        BlockchainStatisticsQuery, Cmc100HistoricalQuery, FearAndGreedHistoricalQuery,
        GlobalMetricsHistoricalQuery, GlobalMetricsQuery, Params,
    },
    types::{
        BlockchainStatistics, Cmc100Latest, Cmc100Point, FearAndGreed, GlobalMetrics,
        GlobalMetricsHistorical, Keyed, Response,
    },
    Client, Error,
};

/// Global market metrics and index endpoints.
#[derive(Clone, Copy)]
pub struct MetricRepository<'a> {
    client: &'a Client,
}

impl<'a> MetricRepository<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Fetches the latest total market cap, volume and dominance figures.
    pub async fn quotes_latest(
        &self,
        query: &GlobalMetricsQuery,
    ) -> Result<Response<GlobalMetrics>, Error> {
        self.client.send(paths::QUOTES_LATEST, Some(query)).await
    }

    pub async fn quotes_historical(
        &self,
        query: &GlobalMetricsHistoricalQuery,
    ) -> Result<Response<GlobalMetricsHistorical>, Error> {
        self.client.send(paths::QUOTES_HISTORICAL, Some(query)).await
    }

    /// Fetches the current fear & greed reading.
    pub async fn fear_and_greed_latest(&self) -> Result<Response<FearAndGreed>, Error> {
        self.client
            .send(paths::FEAR_AND_GREED_LATEST, None::<&Params>)
            .await
    }

    pub async fn fear_and_greed_historical(
        &self,
        query: &FearAndGreedHistoricalQuery,
    ) -> Result<Response<Vec<FearAndGreed>>, Error> {
        self.client
            .send(paths::FEAR_AND_GREED_HISTORICAL, Some(query))
            .await
    }

    /// Fetches the current CMC100 index value and constituents.
    pub async fn cmc100_latest(&self) -> Result<Response<Cmc100Latest>, Error> {
        self.client.send(paths::CMC100_LATEST, None::<&Params>).await
    }

    pub async fn cmc100_historical(
        &self,
        query: &Cmc100HistoricalQuery,
    ) -> Result<Response<Vec<Cmc100Point>>, Error> {
        self.client.send(paths::CMC100_HISTORICAL, Some(query)).await
    }

    /// Fetches block and transaction statistics for one or more chains.
    pub async fn blockchain_statistics(
        &self,
        query: &BlockchainStatisticsQuery,
    ) -> Result<Response<Keyed<BlockchainStatistics>>, Error> {
        self.client
            .send(paths::BLOCKCHAIN_STATISTICS, Some(query))
            .await
    }
}
