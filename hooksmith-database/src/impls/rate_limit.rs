use tracing::{debug, warn};

use crate::{
    database::Database,
    error::QuotaError,
    error::StoreError,
    impls::quota::{get_quota, insert_quota, now_unix_millis, update_quota},
    model::quota::QuotaResult,
};

const MILLIS_PER_HOUR: u64 = 60 * 60 * 1_000;

/// Fixed-window admission policy: at most `max_requests` per user per
/// epoch-aligned window of `window_ms`.
///
/// Windows are aligned to the epoch, so a user can issue N requests near the
/// end of one window and N more right after rollover. That coarse-grained
/// tradeoff matches the stored `window_start` semantics and is intentional.
#[derive(Clone, Copy, Debug)]
pub struct RateLimiter {
    max_requests: u32,
    window_ms: u64,
}

impl RateLimiter {
    /// A zero `window_hours` is clamped to one hour; the window math divides
    /// by the width.
    pub fn new(max_requests: u32, window_hours: u32) -> Self {
        Self {
            max_requests,
            window_ms: u64::from(window_hours.max(1)) * MILLIS_PER_HOUR,
        }
    }

    pub fn max_requests(&self) -> u32 {
        self.max_requests
    }

    pub fn window_ms(&self) -> u64 {
        self.window_ms
    }

    /// Admit or deny one request for `user_id`, consuming a quota unit on
    /// admission. A consumed unit is not refunded even if the downstream
    /// generation step later fails.
    pub async fn check_and_consume(
        &self,
        db: &Database,
        user_id: u64,
    ) -> Result<QuotaResult, QuotaError> {
        self.check_and_consume_at(db, user_id, now_unix_millis())
            .await
    }

    /// Clock-injected variant of `check_and_consume`.
    ///
    /// The user's mutex is held across the whole read-then-write sequence so
    /// concurrent duplicate submissions cannot both observe `count < max`.
    pub async fn check_and_consume_at(
        &self,
        db: &Database,
        user_id: u64,
        now_ms: u64,
    ) -> Result<QuotaResult, QuotaError> {
        let lock = db.user_locks().for_user(user_id);
        let _guard = lock.lock().await;

        let window_start = self.window_floor(now_ms);

        match get_quota(db, user_id).await? {
            None => {
                insert_quota(db, user_id, 1, window_start).await?;
                debug!(user_id, "first request recorded");
                Ok(self.admitted(1, window_start))
            }
            Some(record) if record.window_start < window_start => {
                // Rollover: the count becomes the count of this request, not
                // a pre-increment zero.
                update_quota(db, user_id, 1, window_start).await?;
                debug!(user_id, "quota window rolled over");
                Ok(self.admitted(1, window_start))
            }
            Some(record) if record.request_count >= self.max_requests => {
                let reset_at_ms = record.window_start + self.window_ms;
                warn!(
                    user_id,
                    request_count = record.request_count,
                    max_requests = self.max_requests,
                    "rate limit exceeded"
                );
                Err(QuotaError::LimitExceeded { reset_at_ms })
            }
            Some(record) => {
                let new_count = record.request_count + 1;
                update_quota(db, user_id, new_count, record.window_start).await?;
                debug!(
                    user_id,
                    request_count = new_count,
                    max_requests = self.max_requests,
                    "request admitted"
                );
                Ok(self.admitted(new_count, record.window_start))
            }
        }
    }

    /// Read-only usage view for status display. An expired window reports as
    /// reset without mutating the store, unlike `check_and_consume`.
    pub async fn peek_usage(
        &self,
        db: &Database,
        user_id: u64,
    ) -> Result<QuotaResult, StoreError> {
        self.peek_usage_at(db, user_id, now_unix_millis()).await
    }

    /// Clock-injected variant of `peek_usage`.
    pub async fn peek_usage_at(
        &self,
        db: &Database,
        user_id: u64,
        now_ms: u64,
    ) -> Result<QuotaResult, StoreError> {
        let window_start = self.window_floor(now_ms);

        match get_quota(db, user_id).await? {
            Some(record) if record.window_start >= window_start => Ok(QuotaResult {
                request_count: record.request_count,
                remaining: self.max_requests.saturating_sub(record.request_count),
                reset_at_ms: record.window_start + self.window_ms,
            }),
            _ => Ok(QuotaResult {
                request_count: 0,
                remaining: self.max_requests,
                reset_at_ms: window_start + self.window_ms,
            }),
        }
    }

    fn window_floor(&self, now_ms: u64) -> u64 {
        now_ms - now_ms % self.window_ms
    }

    fn admitted(&self, request_count: u32, window_start: u64) -> QuotaResult {
        QuotaResult {
            request_count,
            remaining: self.max_requests.saturating_sub(request_count),
            reset_at_ms: window_start + self.window_ms,
        }
    }
}

#[cfg(test)]
mod tests {
    use tokio::task::JoinSet;

    use super::RateLimiter;
    use crate::error::QuotaError;
    use crate::impls::quota::get_quota;
    use crate::test_support::test_db;

    const HOUR_MS: u64 = 60 * 60 * 1_000;
    const DAY_MS: u64 = 24 * HOUR_MS;

    // A timestamp two hours into a 24h epoch-aligned window (mid 2025).
    const NOW: u64 = 20_254 * DAY_MS + 2 * HOUR_MS;

    #[tokio::test]
    async fn admits_up_to_the_limit_then_denies_with_reset_time() {
        let db = test_db().await;
        let limiter = RateLimiter::new(3, 24);
        let window_start = NOW - NOW % DAY_MS;

        for expected_remaining in [2, 1, 0] {
            let result = limiter.check_and_consume_at(&db, 10, NOW).await.unwrap();
            assert_eq!(result.remaining, expected_remaining);
            assert_eq!(result.request_count, 3 - expected_remaining);
            assert_eq!(result.reset_at_ms, window_start + DAY_MS);
        }

        let err = limiter
            .check_and_consume_at(&db, 10, NOW + HOUR_MS)
            .await
            .unwrap_err();
        match err {
            QuotaError::LimitExceeded { reset_at_ms } => {
                assert_eq!(reset_at_ms, window_start + DAY_MS);
            }
            other => panic!("expected LimitExceeded, got {other:?}"),
        }

        // Denial does not mutate the record.
        let record = get_quota(&db, 10).await.unwrap().unwrap();
        assert_eq!(record.request_count, 3);
    }

    #[tokio::test]
    async fn rollover_readmits_with_count_one() {
        let db = test_db().await;
        let limiter = RateLimiter::new(3, 24);

        for _ in 0..3 {
            limiter.check_and_consume_at(&db, 11, NOW).await.unwrap();
        }
        assert!(limiter.check_and_consume_at(&db, 11, NOW).await.is_err());

        let later = NOW + DAY_MS;
        let result = limiter.check_and_consume_at(&db, 11, later).await.unwrap();
        assert_eq!(result.request_count, 1);
        assert_eq!(result.remaining, 2);
        assert_eq!(result.reset_at_ms, (later - later % DAY_MS) + DAY_MS);
    }

    #[tokio::test]
    async fn peek_never_mutates_even_across_rollover() {
        let db = test_db().await;
        let limiter = RateLimiter::new(3, 24);

        limiter.check_and_consume_at(&db, 12, NOW).await.unwrap();
        let before = get_quota(&db, 12).await.unwrap().unwrap();

        let usage = limiter.peek_usage_at(&db, 12, NOW).await.unwrap();
        assert_eq!(usage.request_count, 1);
        assert_eq!(usage.remaining, 2);

        // Window expired: peek reports as reset but writes nothing.
        let usage = limiter.peek_usage_at(&db, 12, NOW + DAY_MS).await.unwrap();
        assert_eq!(usage.request_count, 0);
        assert_eq!(usage.remaining, 3);

        let after = get_quota(&db, 12).await.unwrap().unwrap();
        assert_eq!(after.request_count, before.request_count);
        assert_eq!(after.window_start, before.window_start);
        assert_eq!(after.updated_at, before.updated_at);
    }

    #[tokio::test]
    async fn peek_for_unknown_user_reports_full_allowance() {
        let db = test_db().await;
        let limiter = RateLimiter::new(3, 24);

        let usage = limiter.peek_usage_at(&db, 13, NOW).await.unwrap();
        assert_eq!(usage.request_count, 0);
        assert_eq!(usage.remaining, 3);
        assert_eq!(usage.reset_at_ms, NOW - NOW % DAY_MS + DAY_MS);
        assert!(get_quota(&db, 13).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn concurrent_bursts_admit_exactly_the_limit() {
        let db = test_db().await;
        let limiter = RateLimiter::new(3, 24);

        let mut tasks = JoinSet::new();
        for _ in 0..8 {
            let db = db.clone();
            tasks.spawn(async move { limiter.check_and_consume_at(&db, 14, NOW).await });
        }

        let mut admitted = 0;
        let mut denied = 0;
        while let Some(joined) = tasks.join_next().await {
            match joined.expect("task panicked") {
                Ok(_) => admitted += 1,
                Err(QuotaError::LimitExceeded { .. }) => denied += 1,
                Err(other) => panic!("unexpected error: {other:?}"),
            }
        }

        assert_eq!(admitted, 3);
        assert_eq!(denied, 5);

        let record = get_quota(&db, 14).await.unwrap().unwrap();
        assert_eq!(record.request_count, 3);
    }

    #[tokio::test]
    async fn distinct_users_have_independent_quotas() {
        let db = test_db().await;
        let limiter = RateLimiter::new(1, 24);

        limiter.check_and_consume_at(&db, 20, NOW).await.unwrap();
        assert!(limiter.check_and_consume_at(&db, 20, NOW).await.is_err());

        let result = limiter.check_and_consume_at(&db, 21, NOW).await.unwrap();
        assert_eq!(result.request_count, 1);
    }

    #[tokio::test]
    async fn zero_window_hours_clamps_to_one_hour() {
        let db = test_db().await;
        let limiter = RateLimiter::new(3, 0);
        assert_eq!(limiter.window_ms(), HOUR_MS);

        let result = limiter.check_and_consume_at(&db, 15, NOW).await.unwrap();
        assert_eq!(result.request_count, 1);
        assert_eq!(result.reset_at_ms, NOW - NOW % HOUR_MS + HOUR_MS);
    }

    #[tokio::test]
    async fn full_scenario_three_per_day() {
        let db = test_db().await;
        let limiter = RateLimiter::new(3, 24);

        let mut remaining = Vec::new();
        for _ in 0..3 {
            remaining.push(
                limiter
                    .check_and_consume_at(&db, 30, NOW)
                    .await
                    .unwrap()
                    .remaining,
            );
        }
        assert_eq!(remaining, vec![2, 1, 0]);

        assert!(matches!(
            limiter.check_and_consume_at(&db, 30, NOW).await,
            Err(QuotaError::LimitExceeded { .. })
        ));

        let result = limiter
            .check_and_consume_at(&db, 30, NOW + DAY_MS)
            .await
            .unwrap();
        assert_eq!(result.request_count, 1);
    }
}
