mod common;
pub use self::common::{
    build_url, Convert, ListingStatus, Pagination, ParamValue, Params, Query, SortDirection,
    TimeRange,
};

mod crypto;
pub use self::crypto::{
    AirdropQuery, AirdropsQuery, CategoriesQuery, CategoryQuery, CryptoInfoQuery,
    CryptoMapQuery, CryptoMapSortBy, CryptoMarketPairsQuery, CryptocurrencyType,
    ListingsHistoricalQuery, ListingsLatestQuery, ListingsNewQuery, ListingsSortBy,
    OhlcvHistoricalQuery, OhlcvLatestQuery, PricePerformanceQuery, QuotesHistoricalQuery,
    QuotesLatestQuery, TrendingQuery,
};

mod dex;
pub use self::dex::{
    DexInfoQuery, DexListingsQuery, DexNetworksQuery, DexOhlcvHistoricalQuery, DexPairQuery,
    SpotPairsQuery,
};

mod cex;
pub use self::cex::{
    ExchangeAssetsQuery, ExchangeInfoQuery, ExchangeListingsQuery, ExchangeMapQuery,
    ExchangeMarketPairsQuery, ExchangeQuotesHistoricalQuery, ExchangeQuotesQuery,
};

mod metric;
pub use self::metric::{
    BlockchainStatisticsQuery, Cmc100HistoricalQuery, FearAndGreedHistoricalQuery,
    GlobalMetricsHistoricalQuery, GlobalMetricsQuery,
};

mod community;
pub use self::community::{CommentsQuery, CommunityTrendingQuery, ContentLatestQuery, PostsQuery};

mod misc;
pub use self::misc::{FiatMapQuery, PriceConversionQuery};
