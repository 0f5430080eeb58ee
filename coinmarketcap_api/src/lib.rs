//! Async client for the CoinMarketCap Pro REST API.
//!
//! ```no_run
//! use coinmarketcap_api::{Client, FiatMapQuery};
//!
//! # async fn run() -> Result<(), coinmarketcap_api::Error> {
//! let client = Client::new_sandbox()?;
//! let fiats = client.misc().fiat_map(&FiatMapQuery::default().with_limit(10)).await?;
//! println!("{} fiats, {:?} credits", fiats.data.len(), fiats.status.credit_count);
//! # Ok(())
//! # }
//! ```

mod client;
pub mod config;
pub mod endpoints;
mod envelope;
mod errors;
mod query;
pub mod repository;
pub mod types;

pub use self::client::{Client, API_KEY_HEADER};
pub use self::config::{Config, DEFAULT_TIMEOUT, PRODUCTION_URL, SANDBOX_API_KEY, SANDBOX_URL};
pub use self::errors::{ApiError, ApiErrorKind, Error, ErrorCategory};
pub use self::query::*;
