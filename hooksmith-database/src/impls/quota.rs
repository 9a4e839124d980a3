use std::time::{SystemTime, UNIX_EPOCH};

use crate::{database::Database, error::StoreError, model::quota::UserQuotaRecord};

#[derive(sqlx::FromRow)]
struct QuotaRow {
    request_count: i64,
    window_start: i64,
    updated_at: i64,
}

/// Fetch a user's quota record, if one exists.
pub async fn get_quota(
    db: &Database,
    user_id: u64,
) -> Result<Option<UserQuotaRecord>, StoreError> {
    let user_id_i64 = user_id_to_i64(user_id)?;

    let row: Option<QuotaRow> = sqlx::query_as(
        "SELECT request_count, window_start, updated_at FROM user_quota WHERE user_id = ?",
    )
    .bind(user_id_i64)
    .fetch_optional(db.pool())
    .await?;

    let Some(row) = row else {
        return Ok(None);
    };

    Ok(Some(UserQuotaRecord {
        user_id,
        request_count: column_u32(row.request_count, "request_count")?,
        window_start: column_u64(row.window_start, "window_start")?,
        updated_at: column_u64(row.updated_at, "updated_at")?,
    }))
}

/// Insert a fresh quota record. Fails with `Conflict` if one already exists;
/// callers branch on `get_quota` first.
pub async fn insert_quota(
    db: &Database,
    user_id: u64,
    request_count: u32,
    window_start: u64,
) -> Result<(), StoreError> {
    let user_id_i64 = user_id_to_i64(user_id)?;
    let window_start_i64 = timestamp_to_i64(window_start, "window_start")?;
    let updated_at_i64 = timestamp_to_i64(now_unix_millis(), "updated_at")?;

    sqlx::query(
        "INSERT INTO user_quota (user_id, request_count, window_start, updated_at)
         VALUES (?, ?, ?, ?)",
    )
    .bind(user_id_i64)
    .bind(i64::from(request_count))
    .bind(window_start_i64)
    .bind(updated_at_i64)
    .execute(db.pool())
    .await
    .map_err(|err| match err.as_database_error() {
        Some(db_err) if db_err.is_unique_violation() => StoreError::Conflict { user_id },
        _ => StoreError::Unavailable(err),
    })?;

    Ok(())
}

/// Overwrite an existing quota record. Fails with `NotFound` if the user has
/// no record yet. `updated_at` is set by the store on every write.
pub async fn update_quota(
    db: &Database,
    user_id: u64,
    request_count: u32,
    window_start: u64,
) -> Result<(), StoreError> {
    let user_id_i64 = user_id_to_i64(user_id)?;
    let window_start_i64 = timestamp_to_i64(window_start, "window_start")?;
    let updated_at_i64 = timestamp_to_i64(now_unix_millis(), "updated_at")?;

    let updated = sqlx::query(
        "UPDATE user_quota SET request_count = ?, window_start = ?, updated_at = ?
         WHERE user_id = ?",
    )
    .bind(i64::from(request_count))
    .bind(window_start_i64)
    .bind(updated_at_i64)
    .bind(user_id_i64)
    .execute(db.pool())
    .await?
    .rows_affected();

    if updated == 0 {
        return Err(StoreError::NotFound { user_id });
    }

    Ok(())
}

pub(crate) fn user_id_to_i64(user_id: u64) -> Result<i64, StoreError> {
    i64::try_from(user_id).map_err(|_| StoreError::OutOfRange { field: "user_id" })
}

pub(crate) fn timestamp_to_i64(value: u64, field: &'static str) -> Result<i64, StoreError> {
    i64::try_from(value).map_err(|_| StoreError::OutOfRange { field })
}

pub(crate) fn column_u64(value: i64, field: &'static str) -> Result<u64, StoreError> {
    u64::try_from(value).map_err(|_| StoreError::OutOfRange { field })
}

pub(crate) fn column_u32(value: i64, field: &'static str) -> Result<u32, StoreError> {
    u32::try_from(value).map_err(|_| StoreError::OutOfRange { field })
}

pub(crate) fn now_unix_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |duration| duration.as_millis() as u64)
}

#[cfg(test)]
mod tests {
    use super::{get_quota, insert_quota, update_quota};
    use crate::error::StoreError;
    use crate::test_support::test_db;

    #[tokio::test]
    async fn round_trips_a_quota_record() {
        let db = test_db().await;

        assert!(get_quota(&db, 42).await.unwrap().is_none());

        insert_quota(&db, 42, 1, 86_400_000).await.unwrap();
        let record = get_quota(&db, 42).await.unwrap().unwrap();
        assert_eq!(record.user_id, 42);
        assert_eq!(record.request_count, 1);
        assert_eq!(record.window_start, 86_400_000);
        assert!(record.updated_at > 0);

        update_quota(&db, 42, 2, 86_400_000).await.unwrap();
        let record = get_quota(&db, 42).await.unwrap().unwrap();
        assert_eq!(record.request_count, 2);
    }

    #[tokio::test]
    async fn duplicate_insert_is_a_conflict() {
        let db = test_db().await;

        insert_quota(&db, 7, 1, 0).await.unwrap();
        let err = insert_quota(&db, 7, 1, 0).await.unwrap_err();
        assert!(matches!(err, StoreError::Conflict { user_id: 7 }));
    }

    #[tokio::test]
    async fn update_without_record_is_not_found() {
        let db = test_db().await;

        let err = update_quota(&db, 9, 1, 0).await.unwrap_err();
        assert!(matches!(err, StoreError::NotFound { user_id: 9 }));
    }

    #[tokio::test]
    async fn user_id_beyond_i64_is_rejected() {
        let db = test_db().await;

        let err = get_quota(&db, u64::MAX).await.unwrap_err();
        assert!(matches!(err, StoreError::OutOfRange { field: "user_id" }));
    }
}
