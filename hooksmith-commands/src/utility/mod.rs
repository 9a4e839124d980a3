pub mod help;
pub mod ping;
pub mod status;
