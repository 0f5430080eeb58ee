use coinmarketcap_api::endpoints;
use coinmarketcap_api::types::OneOrMany;
use coinmarketcap_api::{
    AirdropQuery, AirdropsQuery, BlockchainStatisticsQuery, CategoriesQuery, CategoryQuery,
    Client, Cmc100HistoricalQuery, CommentsQuery, CommunityTrendingQuery, ContentLatestQuery,
    CryptoInfoQuery, CryptoMapQuery, CryptoMarketPairsQuery, DexInfoQuery, DexListingsQuery,
    DexNetworksQuery, DexOhlcvHistoricalQuery, DexPairQuery, ExchangeAssetsQuery,
    ExchangeInfoQuery, ExchangeListingsQuery, ExchangeMapQuery, ExchangeMarketPairsQuery,
    ExchangeQuotesHistoricalQuery, ExchangeQuotesQuery, FearAndGreedHistoricalQuery,
    GlobalMetricsHistoricalQuery, GlobalMetricsQuery, ListingsHistoricalQuery,
    ListingsLatestQuery, ListingsNewQuery, OhlcvHistoricalQuery, OhlcvLatestQuery, PostsQuery,
    PriceConversionQuery, PricePerformanceQuery, QuotesHistoricalQuery, QuotesLatestQuery,
    SpotPairsQuery, TrendingQuery,
};
use serde_json::{json, Value};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn ok(data: Value) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({
        "status": { "error_code": 0, "credit_count": 1 },
        "data": data
    }))
}

async fn mount(server: &MockServer, route: &str, data: Value) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ok(data))
        .expect(1)
        .mount(server)
        .await;
}

async fn setup() -> (MockServer, Client) {
    let server = MockServer::start().await;
    let client = Client::with_base_url(&server.uri(), "test-key").unwrap();
    (server, client)
}

fn coin(id: i64, symbol: &str) -> Value {
    json!({ "id": id, "name": symbol, "symbol": symbol, "quote": { "USD": { "price": 1.0 } } })
}

#[tokio::test]
async fn crypto_listings_and_quotes() {
    let (server, client) = setup().await;
    use endpoints::crypto as p;
    mount(&server, p::LISTINGS_LATEST, json!([coin(1, "BTC")])).await;
    mount(&server, p::LISTINGS_HISTORICAL, json!([coin(1, "BTC")])).await;
    mount(&server, p::LISTINGS_NEW, json!([coin(9, "NEW")])).await;
    mount(&server, p::QUOTES_LATEST, json!({ "1": coin(1, "BTC") })).await;
    mount(
        &server,
        p::QUOTES_HISTORICAL,
        json!({ "1": { "id": 1, "name": "Bitcoin", "symbol": "BTC", "quotes": [
            { "timestamp": "2024-01-01T00:00:00.000Z", "quote": { "USD": { "price": 42000.0 } } }
        ] } }),
    )
    .await;

    let crypto = client.crypto();
    let latest = crypto
        .listings_latest(&ListingsLatestQuery::default())
        .await
        .unwrap();
    assert_eq!(latest.data[0].price_in("USD"), Some(1.0));
    crypto
        .listings_historical(&ListingsHistoricalQuery::new("2024-01-01"))
        .await
        .unwrap();
    let new = crypto
        .listings_new(&ListingsNewQuery::default())
        .await
        .unwrap();
    assert_eq!(new.data[0].symbol, "NEW");

    let quotes = crypto
        .quotes_latest(&QuotesLatestQuery::default().with_id(1))
        .await
        .unwrap();
    assert!(matches!(quotes.data["1"], OneOrMany::One(_)));

    let history = crypto
        .quotes_historical(&QuotesHistoricalQuery::default().with_id(1))
        .await
        .unwrap();
    let series = history.data["1"].first().unwrap();
    assert_eq!(series.quotes[0].quote["USD"].price, Some(42000.0));
}

#[tokio::test]
async fn crypto_reference_data() {
    let (server, client) = setup().await;
    use endpoints::crypto as p;
    mount(
        &server,
        p::MAP,
        json!([{ "id": 1, "name": "Bitcoin", "symbol": "BTC", "slug": "bitcoin", "rank": 1 }]),
    )
    .await;
    mount(
        &server,
        p::INFO,
        json!({ "1": { "id": 1, "name": "Bitcoin", "symbol": "BTC",
            "urls": { "website": ["https://bitcoin.org/"] } } }),
    )
    .await;
    mount(
        &server,
        p::CATEGORIES,
        json!([{ "id": "605e2ce9d41eae1066535f7c", "name": "A16Z Portfolio", "num_tokens": 12 }]),
    )
    .await;
    mount(
        &server,
        p::CATEGORY,
        json!({ "id": "605e2ce9d41eae1066535f7c", "name": "A16Z Portfolio",
            "coins": [coin(1027, "ETH")] }),
    )
    .await;

    let crypto = client.crypto();
    let map = crypto.map(&CryptoMapQuery::default()).await.unwrap();
    assert_eq!(map.data[0].slug, "bitcoin");

    let info = crypto
        .info(&CryptoInfoQuery::default().with_id(1))
        .await
        .unwrap();
    let btc = info.data["1"].first().unwrap();
    assert_eq!(btc.urls.as_ref().unwrap()["website"][0], "https://bitcoin.org/");

    let categories = crypto
        .categories(&CategoriesQuery::default())
        .await
        .unwrap();
    assert_eq!(categories.data[0].num_tokens, Some(12));

    let category = crypto
        .category(&CategoryQuery::new("605e2ce9d41eae1066535f7c"))
        .await
        .unwrap();
    assert_eq!(category.data.coins.unwrap()[0].symbol, "ETH");
}

#[tokio::test]
async fn crypto_market_data() {
    let (server, client) = setup().await;
    use endpoints::crypto as p;
    mount(
        &server,
        p::MARKET_PAIRS_LATEST,
        json!({ "id": 1, "name": "Bitcoin", "symbol": "BTC", "num_market_pairs": 1,
            "market_pairs": [{ "exchange": { "id": 270, "name": "Binance", "slug": "binance" },
                "market_pair": "BTC/USDT", "quote": { "USD": { "price": 58000.0 } } }] }),
    )
    .await;
    mount(
        &server,
        p::OHLCV_LATEST,
        json!({ "1": { "id": 1, "name": "Bitcoin", "symbol": "BTC",
            "quote": { "USD": { "open": 1.0, "high": 2.0, "low": 0.5, "close": 1.5 } } } }),
    )
    .await;
    mount(
        &server,
        p::OHLCV_HISTORICAL,
        json!({ "id": 1, "name": "Bitcoin", "symbol": "BTC", "quotes": [
            { "time_open": "2024-01-01T00:00:00.000Z", "quote": { "USD": { "close": 42000.0 } } }
        ] }),
    )
    .await;
    mount(
        &server,
        p::PRICE_PERFORMANCE_STATS,
        json!({ "1": { "id": 1, "name": "Bitcoin", "symbol": "BTC",
            "periods": { "all_time": { "quote": { "USD": { "percent_change": 12.5 } } } } } }),
    )
    .await;

    let crypto = client.crypto();
    let pairs = crypto
        .market_pairs_latest(&CryptoMarketPairsQuery::default().with_id(1))
        .await
        .unwrap();
    assert_eq!(pairs.data.market_pairs[0].exchange.as_ref().unwrap().name, "Binance");

    let ohlcv = crypto
        .ohlcv_latest(&OhlcvLatestQuery::default().with_id(1))
        .await
        .unwrap();
    assert_eq!(ohlcv.data["1"].first().unwrap().quote["USD"].high, Some(2.0));

    let history = crypto
        .ohlcv_historical(&OhlcvHistoricalQuery::default().with_id(1))
        .await
        .unwrap();
    assert_eq!(history.data.quotes[0].quote["USD"].close, Some(42000.0));

    let perf = crypto
        .price_performance_stats(&PricePerformanceQuery::default().with_id(1))
        .await
        .unwrap();
    let periods = &perf.data["1"].first().unwrap().periods;
    assert_eq!(periods["all_time"].quote["USD"].percent_change, Some(12.5));
}

#[tokio::test]
async fn crypto_airdrops_and_trending() {
    let (server, client) = setup().await;
    use endpoints::crypto as p;
    let airdrop = json!({ "id": "60e59ed3cb5a9f6d1b3c7e2f", "project_name": "DeFi Land",
        "status": "ENDED", "coin": { "id": 10495, "name": "DeFi Land", "symbol": "DFL" } });
    mount(&server, p::AIRDROPS, json!([airdrop.clone()])).await;
    mount(&server, p::AIRDROP, airdrop).await;
    mount(&server, p::TRENDING_LATEST, json!([coin(1, "BTC")])).await;
    mount(&server, p::TRENDING_MOST_VISITED, json!([coin(2, "LTC")])).await;
    mount(&server, p::TRENDING_GAINERS_LOSERS, json!([coin(3, "NMC")])).await;

    let crypto = client.crypto();
    let list = crypto.airdrops(&AirdropsQuery::default()).await.unwrap();
    assert_eq!(list.data[0].status.as_deref(), Some("ENDED"));
    let single = crypto
        .airdrop(&AirdropQuery::new("60e59ed3cb5a9f6d1b3c7e2f"))
        .await
        .unwrap();
    assert_eq!(single.data.coin.unwrap().symbol.as_deref(), Some("DFL"));

    let query = TrendingQuery::default().with_limit(10);
    assert_eq!(crypto.trending_latest(&query).await.unwrap().data[0].id, 1);
    assert_eq!(crypto.trending_most_visited(&query).await.unwrap().data[0].id, 2);
    assert_eq!(crypto.trending_gainers_losers(&query).await.unwrap().data[0].id, 3);
}

#[tokio::test]
async fn dex_endpoints() {
    let (server, client) = setup().await;
    use endpoints::dex as p;
    let dex = json!({ "id": 1348, "name": "Uniswap v3", "type": "swap",
        "quote": [{ "convert_id": "2781", "volume_24h": 1.0 }] });
    let pair = json!({ "contract_address": "0xabc", "network_slug": "ethereum",
        "quote": [{ "convert_id": "2781", "price": 2.0 }] });
    let ohlcv = json!({ "contract_address": "0xabc",
        "quotes": [{ "time_open": "2024-01-01T00:00:00.000Z", "quote": [{ "close": 3.0 }] }] });
    mount(&server, p::LISTINGS_INFO, json!([dex.clone()])).await;
    mount(&server, p::LISTINGS_QUOTES, json!([dex])).await;
    mount(
        &server,
        p::NETWORKS,
        json!([{ "id": 1, "name": "Ethereum", "network_slug": "Ethereum", "cryptocurrency_id": 1027 }]),
    )
    .await;
    mount(&server, p::SPOT_PAIRS_LATEST, json!([pair.clone()])).await;
    mount(&server, p::PAIRS_QUOTES_LATEST, json!([pair])).await;
    mount(&server, p::PAIRS_OHLCV_LATEST, json!([{ "contract_address": "0xabc",
        "quote": [{ "close": 3.0 }] }])).await;
    mount(&server, p::PAIRS_OHLCV_HISTORICAL, json!([ohlcv])).await;
    mount(
        &server,
        p::PAIRS_TRADES_LATEST,
        json!([{ "contract_address": "0xabc", "trades": [
            { "date": "2024-01-01T00:00:00.000Z", "type": "buy", "quote": [{ "total": 99.0 }] }
        ] }]),
    )
    .await;

    let repo = client.dex();
    let info = repo.listings_info(&DexInfoQuery::default().with_id(1348)).await.unwrap();
    assert_eq!(info.data[0].dex_type.as_deref(), Some("swap"));
    let quotes = repo.listings_quotes(&DexListingsQuery::default()).await.unwrap();
    assert_eq!(quotes.data[0].quote[0].volume_24h, Some(1.0));
    let networks = repo.networks(&DexNetworksQuery::default()).await.unwrap();
    assert_eq!(networks.data[0].cryptocurrency_id, Some(1027));

    let spot = repo
        .spot_pairs_latest(&SpotPairsQuery::default().with_network_slug("ethereum"))
        .await
        .unwrap();
    assert_eq!(spot.data[0].quote[0].price, Some(2.0));

    let selector = DexPairQuery::new("ethereum", "0xabc");
    repo.pairs_quotes_latest(&selector).await.unwrap();
    let latest = repo.pairs_ohlcv_latest(&selector).await.unwrap();
    assert_eq!(latest.data[0].quote[0].close, Some(3.0));
    let history = repo
        .pairs_ohlcv_historical(&DexOhlcvHistoricalQuery::new(selector.clone()))
        .await
        .unwrap();
    assert_eq!(history.data[0].quotes[0].quote[0].close, Some(3.0));
    let trades = repo.pairs_trades_latest(&selector).await.unwrap();
    assert_eq!(trades.data[0].trades[0].side.as_deref(), Some("buy"));
}

#[tokio::test]
async fn cex_endpoints() {
    let (server, client) = setup().await;
    use endpoints::cex as p;
    let exchange = json!({ "id": 270, "name": "Binance", "slug": "binance",
        "quote": { "USD": { "volume_24h": 1000.0 } } });
    mount(&server, p::MAP, json!([{ "id": 270, "name": "Binance", "slug": "binance" }])).await;
    mount(
        &server,
        p::INFO,
        json!({ "270": { "id": 270, "name": "Binance", "slug": "binance", "type": "",
            "maker_fee": 0.02 } }),
    )
    .await;
    mount(&server, p::LISTINGS_LATEST, json!([exchange.clone()])).await;
    mount(&server, p::QUOTES_LATEST, json!({ "270": exchange })).await;
    mount(
        &server,
        p::QUOTES_HISTORICAL,
        json!({ "270": { "id": 270, "name": "Binance", "slug": "binance", "quotes": [
            { "timestamp": "2024-01-01T00:00:00.000Z", "num_market_pairs": 1500,
              "quote": { "USD": { "volume_24h": 5.0 } } }
        ] } }),
    )
    .await;
    mount(
        &server,
        p::MARKET_PAIRS_LATEST,
        json!({ "id": 270, "name": "Binance", "slug": "binance", "num_market_pairs": 1,
            "market_pairs": [{ "market_pair": "ETH/BTC" }] }),
    )
    .await;
    Mock::given(method("GET"))
        .and(path(p::ASSETS))
        .and(query_param("id", "270"))
        .respond_with(ok(json!([{ "balance": 2.0,
            "currency": { "crypto_id": 1, "price_usd": 100.0, "symbol": "BTC" } }])))
        .expect(1)
        .mount(&server)
        .await;

    let repo = client.cex();
    let map = repo.map(&ExchangeMapQuery::default()).await.unwrap();
    assert_eq!(map.data[0].slug, "binance");
    let info = repo.info(&ExchangeInfoQuery::default().with_id(270)).await.unwrap();
    assert_eq!(info.data["270"].first().unwrap().maker_fee, Some(0.02));
    let listings = repo.listings_latest(&ExchangeListingsQuery::default()).await.unwrap();
    assert_eq!(listings.data[0].quote["USD"].volume_24h, Some(1000.0));
    repo.quotes_latest(&ExchangeQuotesQuery::default().with_id(270))
        .await
        .unwrap();
    let history = repo
        .quotes_historical(&ExchangeQuotesHistoricalQuery::default().with_id(270))
        .await
        .unwrap();
    assert_eq!(
        history.data["270"].first().unwrap().quotes[0].num_market_pairs,
        Some(1500)
    );
    let pairs = repo
        .market_pairs_latest(&ExchangeMarketPairsQuery::default().with_id(270))
        .await
        .unwrap();
    assert_eq!(pairs.data.market_pairs[0].market_pair, "ETH/BTC");
    let assets = repo.assets(&ExchangeAssetsQuery::new(270)).await.unwrap();
    assert_eq!(assets.data[0].value_usd(), Some(200.0));
}

#[tokio::test]
async fn metric_endpoints() {
    let (server, client) = setup().await;
    use endpoints::metric as p;
    mount(
        &server,
        p::QUOTES_LATEST,
        json!({ "btc_dominance": 56.1, "quote": { "USD": { "total_market_cap": 2.1e12 } } }),
    )
    .await;
    mount(
        &server,
        p::QUOTES_HISTORICAL,
        json!({ "quotes": [{ "timestamp": "2024-01-01T00:00:00.000Z", "btc_dominance": 51.0 }] }),
    )
    .await;
    mount(
        &server,
        p::FEAR_AND_GREED_LATEST,
        json!({ "value": 55, "value_classification": "Neutral" }),
    )
    .await;
    mount(
        &server,
        p::FEAR_AND_GREED_HISTORICAL,
        json!([{ "timestamp": "1725235200", "value": 26, "value_classification": "Fear" }]),
    )
    .await;
    mount(
        &server,
        p::CMC100_LATEST,
        json!({ "value": 190.5, "constituents": [
            { "id": 1, "name": "Bitcoin", "symbol": "BTC", "weight": 0.55 }
        ] }),
    )
    .await;
    mount(&server, p::CMC100_HISTORICAL, json!([{ "value": 180.0 }])).await;
    mount(
        &server,
        p::BLOCKCHAIN_STATISTICS,
        json!({ "1": { "id": 1, "slug": "bitcoin", "symbol": "BTC", "total_blocks": 860000 } }),
    )
    .await;

    let repo = client.metric();
    let latest = repo.quotes_latest(&GlobalMetricsQuery::default()).await.unwrap();
    assert_eq!(latest.data.btc_dominance, Some(56.1));
    assert_eq!(latest.data.quote["USD"].total_market_cap, Some(2.1e12));
    let history = repo
        .quotes_historical(&GlobalMetricsHistoricalQuery::default())
        .await
        .unwrap();
    assert_eq!(history.data.quotes[0].btc_dominance, Some(51.0));
    assert_eq!(repo.fear_and_greed_latest().await.unwrap().data.value, 55);
    let fng = repo
        .fear_and_greed_historical(&FearAndGreedHistoricalQuery::default())
        .await
        .unwrap();
    assert_eq!(fng.data[0].value_classification, "Fear");
    let cmc100 = repo.cmc100_latest().await.unwrap();
    assert_eq!(cmc100.data.constituents[0].weight, Some(0.55));
    let points = repo
        .cmc100_historical(&Cmc100HistoricalQuery::default())
        .await
        .unwrap();
    assert_eq!(points.data[0].value, 180.0);
    let stats = repo
        .blockchain_statistics(&BlockchainStatisticsQuery::default().with_id(1))
        .await
        .unwrap();
    assert_eq!(stats.data["1"].first().unwrap().total_blocks, Some(860000));
}

#[tokio::test]
async fn community_endpoints() {
    let (server, client) = setup().await;
    use endpoints::community as p;
    let post = json!({ "post_id": "1", "text_content": "gm", "comment_count": "0" });
    mount(
        &server,
        p::CONTENT_LATEST,
        json!([{ "title": "Bitcoin ETF flows", "type": "news", "assets": [{ "id": 1, "symbol": "BTC" }] }]),
    )
    .await;
    mount(&server, p::POSTS_TOP, json!({ "list": [post.clone()], "last_score": "9" })).await;
    mount(&server, p::POSTS_LATEST, json!({ "list": [] })).await;
    mount(&server, p::POSTS_COMMENTS, json!([post])).await;
    mount(&server, p::TRENDING_TOPICS, json!([{ "rank": 1, "topic": "#ETF" }])).await;
    mount(
        &server,
        p::TRENDING_TOKENS,
        json!([{ "id": 1, "name": "Bitcoin", "symbol": "BTC", "rank": 1 }]),
    )
    .await;

    let repo = client.community();
    let content = repo.content_latest(&ContentLatestQuery::default()).await.unwrap();
    assert_eq!(content.data[0].content_type.as_deref(), Some("news"));
    assert_eq!(content.data[0].assets[0].symbol.as_deref(), Some("BTC"));
    let top = repo.posts_top(&PostsQuery::default()).await.unwrap();
    assert_eq!(top.data.last_score.as_deref(), Some("9"));
    let latest = repo.posts_latest(&PostsQuery::default()).await.unwrap();
    assert!(latest.data.list.is_empty());
    let comments = repo.posts_comments(&CommentsQuery::new("1")).await.unwrap();
    assert_eq!(comments.data[0].text_content.as_deref(), Some("gm"));
    let query = CommunityTrendingQuery::default().with_limit(5);
    assert_eq!(repo.trending_topics(&query).await.unwrap().data[0].topic, "#ETF");
    assert_eq!(repo.trending_tokens(&query).await.unwrap().data[0].name, "Bitcoin");
}

#[tokio::test]
async fn misc_price_conversion_by_id() {
    let (server, client) = setup().await;
    Mock::given(method("GET"))
        .and(path(endpoints::misc::PRICE_CONVERSION))
        .and(query_param("amount", "2"))
        .and(query_param("id", "1"))
        .and(query_param("convert", "EUR"))
        .respond_with(ok(json!({ "id": 1, "symbol": "BTC", "name": "Bitcoin", "amount": 2,
            "quote": { "EUR": { "price": 100000.0 } } })))
        .expect(1)
        .mount(&server)
        .await;

    let resp = client
        .misc()
        .price_conversion(&PriceConversionQuery::from_id(2.0, 1).with_convert("EUR"))
        .await
        .unwrap();
    let conversion = resp.data.first().unwrap();
    assert_eq!(conversion.quote["EUR"].price, Some(100000.0));
}

#[test]
fn endpoint_table_covers_every_group() {
    for group in ["crypto", "dex", "cex", "metric", "community", "misc"] {
        assert!(endpoints::ALL.iter().any(|(g, _)| *g == group));
    }
}
