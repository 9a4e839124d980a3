use serde::Serialize;

/// One append-only audit row per attempted generation, successful or not.
#[derive(Clone, Debug, Serialize)]
pub struct RequestLogEntry {
    pub id: u64,
    pub user_id: u64,
    pub input_summary: String,
    pub result_count: u32,
    pub success: bool,
    pub error_message: Option<String>,
    pub execution_time_ms: u64,
    pub created_at: u64,
}

/// Per-user lifetime aggregation over the request log.
///
/// A user with no log rows gets zeros and a `None` average, never an error.
#[derive(Clone, Copy, Debug, Default, Serialize)]
pub struct UserStats {
    pub total_requests: u64,
    pub successful_requests: u64,
    pub avg_execution_time_ms: Option<f64>,
}
