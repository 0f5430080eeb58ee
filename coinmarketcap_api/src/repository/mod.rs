//! Endpoint groups. Each repository borrows the [`Client`](crate::Client),
//! turns a typed query into parameters and forwards it to the shared pipeline.

mod cex;
mod community;
mod crypto;
mod dex;
mod metric;
mod misc;

pub use self::cex::CexRepository;
pub use self::community::CommunityRepository;
pub use self::crypto::CryptoRepository;
pub use self::dex::DexRepository;
pub use self::metric::MetricRepository;
pub use self::misc::MiscRepository;
