use thiserror::Error;

/// Usage-store failures.
///
/// `Conflict` and `NotFound` guard against caller misuse and are not shown to
/// end users; `Unavailable` covers driver and pool failures, including the
/// bounded acquire timeout.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("quota record already exists for user {user_id}")]
    Conflict { user_id: u64 },
    #[error("no quota record for user {user_id}")]
    NotFound { user_id: u64 },
    #[error("value for {field} is outside the storable range")]
    OutOfRange { field: &'static str },
    #[error("storage unavailable")]
    Unavailable(#[from] sqlx::Error),
}

/// Outcome of a failed quota check.
///
/// `LimitExceeded` is an expected, user-recoverable outcome and carries the
/// reset timestamp for presentation; it only ever originates from
/// `RateLimiter::check_and_consume`.
#[derive(Debug, Error)]
pub enum QuotaError {
    #[error("rate limit exceeded")]
    LimitExceeded { reset_at_ms: u64 },
    #[error(transparent)]
    Store(#[from] StoreError),
}
