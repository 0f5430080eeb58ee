use coinmarketcap_api::{
    CryptoMapQuery, CryptoMapSortBy, CryptocurrencyType, DexOhlcvHistoricalQuery, DexPairQuery,
    ExchangeMapQuery, FiatMapQuery, ListingStatus, ListingsHistoricalQuery, ListingsLatestQuery,
    ListingsSortBy, Params, PriceConversionQuery, Query, QuotesLatestQuery, SortDirection,
    SpotPairsQuery,
};
use url::Url;

fn base_url() -> Url {
    Url::parse("https://example.com").unwrap()
}

#[test]
fn empty_queries_add_no_query_string() {
    let url = ListingsLatestQuery::default().add_to_url(&base_url());
    assert_eq!(url.query(), None);
    assert_eq!(url.as_str(), "https://example.com/");

    let url = FiatMapQuery::default().add_to_url(&base_url());
    assert_eq!(url.query(), None);
}

#[test]
fn listings_latest_full() {
    let url = ListingsLatestQuery::default()
        .with_start(101)
        .with_limit(50)
        .with_convert("EUR")
        .with_sort_by(ListingsSortBy::PercentChange24h)
        .with_sort_direction(SortDirection::Desc)
        .with_cryptocurrency_type(CryptocurrencyType::Coins)
        .with_tag("defi")
        .add_to_url(&base_url());
    assert_eq!(
        url.query(),
        Some("start=101&limit=50&convert=EUR&sort=percent_change_24h&sort_dir=desc&cryptocurrency_type=coins&tag=defi")
    );
}

#[test]
fn listings_price_bounds_keep_zero() {
    let query = ListingsLatestQuery {
        price_min: Some(0.0),
        price_max: Some(1.5),
        ..Default::default()
    };
    let url = query.add_to_url(&base_url());
    assert_eq!(url.query(), Some("price_min=0&price_max=1.5"));
}

#[test]
fn listings_historical_date_first() {
    let url = ListingsHistoricalQuery::new("2024-01-01")
        .with_limit(5)
        .add_to_url(&base_url());
    assert_eq!(url.query(), Some("date=2024-01-01&limit=5"));
}

#[test]
fn crypto_map_statuses_are_joined() {
    let url = CryptoMapQuery::default()
        .with_listing_status(ListingStatus::Active)
        .with_listing_status(ListingStatus::Untracked)
        .with_sort_by(CryptoMapSortBy::CmcRank)
        .with_symbols(&["BTC".to_string(), "ETH".to_string()])
        .add_to_url(&base_url());
    let query = url.query().unwrap();
    assert!(query.contains("listing_status=active%2Cuntracked"));
    assert!(query.contains("sort=cmc_rank"));
    assert!(query.contains("symbol=BTC%2CETH"));
}

#[test]
fn quotes_latest_ids_are_joined() {
    let url = QuotesLatestQuery::default()
        .with_ids(&[1, 1027])
        .with_id(5426)
        .with_convert("USD")
        .with_convert("BTC")
        .add_to_url(&base_url());
    assert_eq!(url.query(), Some("id=1%2C1027%2C5426&convert=USD%2CBTC"));
}

#[test]
fn quotes_latest_symbol_only() {
    let url = QuotesLatestQuery::default()
        .with_symbol("BTC")
        .add_to_url(&base_url());
    assert_eq!(url.query(), Some("symbol=BTC"));
}

#[test]
fn spot_pairs_filters() {
    let url = SpotPairsQuery::default()
        .with_network_slug("Ethereum")
        .with_dex_slug("uniswap-v3")
        .with_base_asset_symbol("WETH")
        .with_limit(25)
        .add_to_url(&base_url());
    let query = url.query().unwrap();
    assert!(query.contains("network_slug=Ethereum"));
    assert!(query.contains("dex_slug=uniswap-v3"));
    assert!(query.contains("base_asset_symbol=WETH"));
    assert!(query.contains("limit=25"));
    assert!(!query.contains("scroll_id"));
}

#[test]
fn dex_ohlcv_historical_extends_pair_selector() {
    let pair = DexPairQuery::new("ethereum", "0xabc").with_contract_address("0xdef");
    let url = DexOhlcvHistoricalQuery::new(pair)
        .with_time_period("hourly")
        .with_count(24)
        .add_to_url(&base_url());
    assert_eq!(
        url.query(),
        Some("contract_address=0xabc%2C0xdef&network_slug=ethereum&time_period=hourly&count=24")
    );
}

#[test]
fn dex_pair_reverse_order_false_is_sent() {
    let url = DexPairQuery::new("solana", "addr")
        .with_reverse_order(false)
        .add_to_url(&base_url());
    assert!(url.query().unwrap().ends_with("reverse_order=false"));
}

#[test]
fn exchange_map_by_crypto() {
    let url = ExchangeMapQuery::default()
        .with_crypto_id(1)
        .with_limit(3)
        .add_to_url(&base_url());
    assert_eq!(url.query(), Some("limit=3&crypto_id=1"));
}

#[test]
fn price_conversion_by_symbol() {
    let url = PriceConversionQuery::from_symbol(1.5, "BTC")
        .with_convert("EUR")
        .with_convert("JPY")
        .add_to_url(&base_url());
    assert_eq!(url.query(), Some("amount=1.5&symbol=BTC&convert=EUR%2CJPY"));
}

#[test]
fn price_conversion_historical_by_id() {
    let url = PriceConversionQuery::from_id(10.0, 1)
        .with_time("2024-01-01T00:00:00Z")
        .with_convert_id(2781)
        .add_to_url(&base_url());
    let query = url.query().unwrap();
    assert!(query.starts_with("amount=10&id=1&time=2024-01-01T00%3A00%3A00Z"));
    assert!(query.ends_with("convert_id=2781"));
}

#[test]
fn raw_params_follow_the_omission_rules() {
    let params = Params::new()
        .with("a", "")
        .with("b", "null")
        .with("c", 0i64)
        .with("d", false)
        .with("e", None::<i64>)
        .with("f", vec![1, 2, 3]);
    let url = params.add_to_url(&base_url());
    assert_eq!(url.query(), Some("c=0&d=false&f=1%2C2%2C3"));
}

#[test]
fn params_insert_replaces_in_place() {
    let mut params = Params::new().with("limit", 1i64).with("start", 1i64);
    params.insert("limit", 5i64);
    assert_eq!(params.len(), 2);
    let url = params.add_to_url(&base_url());
    assert_eq!(url.query(), Some("limit=5&start=1"));
}

#[test]
fn sort_direction_round_trips_text() {
    assert_eq!(SortDirection::Asc.to_string(), "asc");
    assert_eq!("desc".parse::<SortDirection>(), Ok(SortDirection::Desc));
    assert_eq!("market_cap".parse::<ListingsSortBy>(), Ok(ListingsSortBy::MarketCap));
    assert!("sideways".parse::<SortDirection>().is_err());
}
