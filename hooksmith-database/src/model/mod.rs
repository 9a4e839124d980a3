pub mod quota;
pub mod request_log;
