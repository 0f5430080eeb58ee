//! Endpoint path table, grouped the same way as the repositories.

pub mod crypto {
    pub const CATEGORIES: &str = "/v1/cryptocurrency/categories";
    pub const CATEGORY: &str = "/v1/cryptocurrency/category";
    pub const MAP: &str = "/v1/cryptocurrency/map";
    pub const INFO: &str = "/v2/cryptocurrency/info";
    pub const LISTINGS_LATEST: &str = "/v1/cryptocurrency/listings/latest";
    pub const LISTINGS_HISTORICAL: &str = "/v1/cryptocurrency/listings/historical";
    pub const LISTINGS_NEW: &str = "/v1/cryptocurrency/listings/new";
    pub const QUOTES_LATEST: &str = "/v2/cryptocurrency/quotes/latest";
    pub const QUOTES_HISTORICAL: &str = "/v3/cryptocurrency/quotes/historical";
    pub const MARKET_PAIRS_LATEST: &str = "/v2/cryptocurrency/market-pairs/latest";
    pub const OHLCV_LATEST: &str = "/v2/cryptocurrency/ohlcv/latest";
    pub const OHLCV_HISTORICAL: &str = "/v2/cryptocurrency/ohlcv/historical";
    pub const PRICE_PERFORMANCE_STATS: &str = "/v2/cryptocurrency/price-performance-stats/latest";
    pub const AIRDROPS: &str = "/v1/cryptocurrency/airdrops";
    pub const AIRDROP: &str = "/v1/cryptocurrency/airdrop";
    pub const TRENDING_LATEST: &str = "/v1/cryptocurrency/trending/latest";
    pub const TRENDING_MOST_VISITED: &str = "/v1/cryptocurrency/trending/most-visited";
    pub const TRENDING_GAINERS_LOSERS: &str = "/v1/cryptocurrency/trending/gainers-losers";
}

pub mod dex {
    pub const LISTINGS_INFO: &str = "/v4/dex/listings/info";
    pub const LISTINGS_QUOTES: &str = "/v4/dex/listings/quotes";
    pub const NETWORKS: &str = "/v4/dex/networks/list";
    pub const SPOT_PAIRS_LATEST: &str = "/v4/dex/spot-pairs/latest";
    pub const PAIRS_QUOTES_LATEST: &str = "/v4/dex/pairs/quotes/latest";
    pub const PAIRS_OHLCV_LATEST: &str = "/v4/dex/pairs/ohlcv/latest";
    pub const PAIRS_OHLCV_HISTORICAL: &str = "/v4/dex/pairs/ohlcv/historical";
    pub const PAIRS_TRADES_LATEST: &str = "/v4/dex/pairs/trade/latest";
}

pub mod cex {
    pub const MAP: &str = "/v1/exchange/map";
    pub const INFO: &str = "/v1/exchange/info";
    pub const LISTINGS_LATEST: &str = "/v1/exchange/listings/latest";
    pub const QUOTES_LATEST: &str = "/v1/exchange/quotes/latest";
    pub const QUOTES_HISTORICAL: &str = "/v1/exchange/quotes/historical";
    pub const MARKET_PAIRS_LATEST: &str = "/v1/exchange/market-pairs/latest";
    pub const ASSETS: &str = "/v1/exchange/assets";
}

pub mod metric {
    pub const QUOTES_LATEST: &str = "/v1/global-metrics/quotes/latest";
    pub const QUOTES_HISTORICAL: &str = "/v1/global-metrics/quotes/historical";
    pub const FEAR_AND_GREED_LATEST: &str = "/v3/fear-and-greed/latest";
    pub const FEAR_AND_GREED_HISTORICAL: &str = "/v3/fear-and-greed/historical";
    pub const CMC100_LATEST: &str = "/v3/index/cmc100-latest";
    pub const CMC100_HISTORICAL: &str = "/v3/index/cmc100-historic";
    pub const BLOCKCHAIN_STATISTICS: &str = "/v1/blockchain/statistics/latest";
}

pub mod community {
    pub const CONTENT_LATEST: &str = "/v1/content/latest";
    pub const POSTS_TOP: &str = "/v1/content/posts/top";
    pub const POSTS_LATEST: &str = "/v1/content/posts/latest";
    pub const POSTS_COMMENTS: &str = "/v1/content/posts/comments";
    pub const TRENDING_TOPICS: &str = "/v1/community/trending/topic";
    pub const TRENDING_TOKENS: &str = "/v1/community/trending/token";
}

pub mod misc {
    pub const FIAT_MAP: &str = "/v1/fiat/map";
    pub const PRICE_CONVERSION: &str = "/v2/tools/price-conversion";
    pub const KEY_INFO: &str = "/v1/key/info";
    /// Returns a Postman collection, not an envelope.
    pub const POSTMAN: &str = "/v2/tools/postman";
}

/// Every path in the table, as `(group, path)`.
pub const ALL: &[(&str, &str)] = &[
    ("crypto", crypto::CATEGORIES),
    ("crypto", crypto::CATEGORY),
    ("crypto", crypto::MAP),
    ("crypto", crypto::INFO),
    ("crypto", crypto::LISTINGS_LATEST),
    ("crypto", crypto::LISTINGS_HISTORICAL),
    ("crypto", crypto::LISTINGS_NEW),
    ("crypto", crypto::QUOTES_LATEST),
    ("crypto", crypto::QUOTES_HISTORICAL),
    ("crypto", crypto::MARKET_PAIRS_LATEST),
    ("crypto", crypto::OHLCV_LATEST),
    ("crypto", crypto::OHLCV_HISTORICAL),
    ("crypto", crypto::PRICE_PERFORMANCE_STATS),
    ("crypto", crypto::AIRDROPS),
    ("crypto", crypto::AIRDROP),
    ("crypto", crypto::TRENDING_LATEST),
    ("crypto", crypto::TRENDING_MOST_VISITED),
    ("crypto", crypto::TRENDING_GAINERS_LOSERS),
    ("dex", dex::LISTINGS_INFO),
    ("dex", dex::LISTINGS_QUOTES),
    ("dex", dex::NETWORKS),
    ("dex", dex::SPOT_PAIRS_LATEST),
    ("dex", dex::PAIRS_QUOTES_LATEST),
    ("dex", dex::PAIRS_OHLCV_LATEST),
    ("dex", dex::PAIRS_OHLCV_HISTORICAL),
    ("dex", dex::PAIRS_TRADES_LATEST),
    ("cex", cex::MAP),
    ("cex", cex::INFO),
    ("cex", cex::LISTINGS_LATEST),
    ("cex", cex::QUOTES_LATEST),
    ("cex", cex::QUOTES_HISTORICAL),
    ("cex", cex::MARKET_PAIRS_LATEST),
    ("cex", cex::ASSETS),
    ("metric", metric::QUOTES_LATEST),
    ("metric", metric::QUOTES_HISTORICAL),
    ("metric", metric::FEAR_AND_GREED_LATEST),
    ("metric", metric::FEAR_AND_GREED_HISTORICAL),
    ("metric", metric::CMC100_LATEST),
    ("metric", metric::CMC100_HISTORICAL),
    ("metric", metric::BLOCKCHAIN_STATISTICS),
    ("community", community::CONTENT_LATEST),
    ("community", community::POSTS_TOP),
    ("community", community::POSTS_LATEST),
    ("community", community::POSTS_COMMENTS),
    ("community", community::TRENDING_TOPICS),
    ("community", community::TRENDING_TOKENS),
    ("misc", misc::FIAT_MAP),
    ("misc", misc::PRICE_CONVERSION),
    ("misc", misc::KEY_INFO),
    ("misc", misc::POSTMAN),
];
