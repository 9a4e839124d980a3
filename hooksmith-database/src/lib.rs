pub mod database;
pub mod error;
pub mod impls;
pub mod model;

pub use database::{Database, MIGRATOR};
pub use error::{QuotaError, StoreError};
pub use impls::rate_limit::RateLimiter;

#[cfg(test)]
pub(crate) mod test_support;
