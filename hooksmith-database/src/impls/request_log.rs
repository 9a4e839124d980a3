use crate::{
    database::Database,
    error::StoreError,
    impls::quota::{column_u32, column_u64, now_unix_millis, timestamp_to_i64, user_id_to_i64},
    model::request_log::{RequestLogEntry, UserStats},
};

/// Maximum characters of the raw topic kept in `input_summary`.
const MAX_SUMMARY_CHARS: usize = 500;

const MILLIS_PER_DAY: u64 = 24 * 60 * 60 * 1_000;

#[derive(sqlx::FromRow)]
struct LogRow {
    id: i64,
    user_id: i64,
    input_summary: String,
    result_count: i64,
    success: bool,
    error_message: Option<String>,
    execution_time_ms: i64,
    created_at: i64,
}

/// Append one audit row for a concluded generation attempt.
///
/// Callers that have already produced a user-facing response swallow the
/// error and warn instead of failing the interaction.
pub async fn append_log(
    db: &Database,
    user_id: u64,
    input_summary: &str,
    result_count: u32,
    success: bool,
    error_message: Option<&str>,
    execution_time_ms: u64,
) -> Result<(), StoreError> {
    let user_id_i64 = user_id_to_i64(user_id)?;
    let created_at_i64 = timestamp_to_i64(now_unix_millis(), "created_at")?;
    let execution_time_i64 = timestamp_to_i64(execution_time_ms, "execution_time_ms")?;
    let summary: String = input_summary.chars().take(MAX_SUMMARY_CHARS).collect();

    sqlx::query(
        "INSERT INTO request_log
             (user_id, input_summary, result_count, success, error_message, execution_time_ms, created_at)
         VALUES (?, ?, ?, ?, ?, ?, ?)",
    )
    .bind(user_id_i64)
    .bind(summary)
    .bind(i64::from(result_count))
    .bind(success)
    .bind(error_message)
    .bind(execution_time_i64)
    .bind(created_at_i64)
    .execute(db.pool())
    .await?;

    Ok(())
}

/// Aggregate a user's lifetime request statistics. Zero rows yields zeros and
/// a `None` average.
pub async fn aggregate_stats(db: &Database, user_id: u64) -> Result<UserStats, StoreError> {
    let user_id_i64 = user_id_to_i64(user_id)?;

    let (total, successful, avg): (i64, i64, Option<f64>) = sqlx::query_as(
        "SELECT
             COUNT(*),
             COALESCE(SUM(CASE WHEN success = 1 THEN 1 ELSE 0 END), 0),
             AVG(execution_time_ms)
         FROM request_log
         WHERE user_id = ?",
    )
    .bind(user_id_i64)
    .fetch_one(db.pool())
    .await?;

    Ok(UserStats {
        total_requests: column_u64(total, "total_requests")?,
        successful_requests: column_u64(successful, "successful_requests")?,
        avg_execution_time_ms: avg,
    })
}

/// Return a user's most recent log rows, newest first, for the `/status`
/// recent-activity display.
pub async fn recent_logs(
    db: &Database,
    user_id: u64,
    limit: u32,
) -> Result<Vec<RequestLogEntry>, StoreError> {
    let user_id_i64 = user_id_to_i64(user_id)?;

    let rows: Vec<LogRow> = sqlx::query_as(
        "SELECT id, user_id, input_summary, result_count, success, error_message,
                execution_time_ms, created_at
         FROM request_log
         WHERE user_id = ?
         ORDER BY created_at DESC, id DESC
         LIMIT ?",
    )
    .bind(user_id_i64)
    .bind(i64::from(limit))
    .fetch_all(db.pool())
    .await?;

    let mut entries = Vec::with_capacity(rows.len());
    for row in rows {
        entries.push(RequestLogEntry {
            id: column_u64(row.id, "id")?,
            user_id: column_u64(row.user_id, "user_id")?,
            input_summary: row.input_summary,
            result_count: column_u32(row.result_count, "result_count")?,
            success: row.success,
            error_message: row.error_message,
            execution_time_ms: column_u64(row.execution_time_ms, "execution_time_ms")?,
            created_at: column_u64(row.created_at, "created_at")?,
        });
    }

    Ok(entries)
}

/// Delete log rows older than `cutoff_ms` and return the number removed.
pub async fn purge_logs_before(db: &Database, cutoff_ms: u64) -> Result<u64, StoreError> {
    let cutoff_i64 = timestamp_to_i64(cutoff_ms, "cutoff")?;

    let deleted = sqlx::query("DELETE FROM request_log WHERE created_at < ?")
        .bind(cutoff_i64)
        .execute(db.pool())
        .await?
        .rows_affected();

    Ok(deleted)
}

/// Purge log rows older than the retention age, measured from `now_ms`.
pub async fn run_retention_sweep(
    db: &Database,
    retention_days: u32,
    now_ms: u64,
) -> Result<u64, StoreError> {
    let cutoff_ms = now_ms.saturating_sub(u64::from(retention_days) * MILLIS_PER_DAY);
    purge_logs_before(db, cutoff_ms).await
}
