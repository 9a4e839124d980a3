use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use sqlx::{SqlitePool, migrate::Migrator};

/// Compile-time discovered SQLx migrations for the `hooksmith-database` crate.
pub static MIGRATOR: Migrator = sqlx::migrate!();

/// Shared database handle passed across crates.
#[derive(Clone, Debug)]
pub struct Database {
    pool: SqlitePool,
    user_locks: UserLocks,
}

impl Database {
    /// Create a database handle from an existing pool.
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            pool,
            user_locks: UserLocks::default(),
        }
    }

    /// Expose the underlying pool for query modules.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Expose the per-user lock registry for the rate limiter.
    pub fn user_locks(&self) -> &UserLocks {
        &self.user_locks
    }
}

/// Registry of per-user async mutexes.
///
/// The rate limiter holds a user's mutex across its read-then-write sequence
/// so that duplicate submissions from one user serialize. Distinct users
/// never contend.
#[derive(Clone, Debug, Default)]
pub struct UserLocks {
    inner: Arc<Mutex<HashMap<u64, Arc<tokio::sync::Mutex<()>>>>>,
}

/// Registry size at which idle entries are dropped.
const EVICTION_THRESHOLD: usize = 1_024;

impl UserLocks {
    /// Return the mutex for a user, creating it on first use.
    ///
    /// Once the registry reaches [`EVICTION_THRESHOLD`] entries, locks no
    /// task currently holds a reference to are dropped, keeping the map
    /// bounded by the number of in-flight requests.
    pub fn for_user(&self, user_id: u64) -> Arc<tokio::sync::Mutex<()>> {
        let mut map = self
            .inner
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        if map.len() >= EVICTION_THRESHOLD {
            map.retain(|id, lock| *id == user_id || Arc::strong_count(lock) > 1);
        }
        map.entry(user_id).or_default().clone()
    }

    #[cfg(test)]
    fn tracked_users(&self) -> usize {
        self.inner
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .len()
    }
}

#[cfg(test)]
mod tests {
    use super::{EVICTION_THRESHOLD, UserLocks};

    #[test]
    fn idle_locks_are_evicted_once_the_registry_fills() {
        let locks = UserLocks::default();
        for user_id in 0..EVICTION_THRESHOLD as u64 {
            locks.for_user(user_id);
        }
        assert_eq!(locks.tracked_users(), EVICTION_THRESHOLD);

        locks.for_user(u64::MAX);
        assert_eq!(locks.tracked_users(), 1);
    }

    #[test]
    fn held_locks_survive_eviction() {
        let locks = UserLocks::default();
        let held = locks.for_user(7);
        for user_id in 100..100 + (EVICTION_THRESHOLD as u64 - 1) {
            locks.for_user(user_id);
        }
        assert_eq!(locks.tracked_users(), EVICTION_THRESHOLD);

        locks.for_user(u64::MAX);
        assert_eq!(locks.tracked_users(), 2);
        drop(held);
    }
}
