mod meta;
pub use self::meta::{Keyed, OneOrMany, Response, Status};

mod quote;
pub use self::quote::{OhlcvQuote, Platform, Quote, Quotes};

mod crypto;
pub use self::crypto::{
    Airdrop, AirdropCoin, Category, CryptoID, CryptoInfo, CryptoMapItem, CryptoMarketPairs,
    Cryptocurrency, ExchangeRef, HistoricalQuote, HistoricalQuotes, MarketPair, OhlcvHistorical,
    OhlcvLatest, OhlcvPeriod, PairAsset, PerformancePeriod, PerformanceQuote, PricePerformance,
};

mod dex;
pub use self::dex::{
    Dex, DexNetwork, DexOhlcvPeriod, DexOhlcvQuote, DexPair, DexPairOhlcv, DexPairTrades,
    DexQuote, DexTrade, DexTradeQuote,
};

mod cex;
pub use self::cex::{
    AssetCurrency, AssetPlatform, Exchange, ExchangeAsset, ExchangeHistoricalQuote,
    ExchangeHistoricalQuotes, ExchangeID, ExchangeInfo, ExchangeMapItem, ExchangeMarketPairs,
    ExchangeQuote,
};

mod metric;
pub use self::metric::{
    BlockchainStatistics, Cmc100Constituent, Cmc100Latest, Cmc100Point, FearAndGreed,
    GlobalMetrics, GlobalMetricsHistorical, GlobalMetricsPoint, GlobalQuote,
};

mod community;
pub use self::community::{
    ContentAsset, ContentItem, Post, PostList, PostOwner, TrendingToken, TrendingTopic,
};

mod misc;
pub use self::misc::{
    ConversionQuote, CreditUsage, Fiat, KeyInfo, KeyPlan, KeyUsage, PriceConversion,
    RequestUsage,
};
