/// Generic embed builders shared across commands.
pub mod embed;
/// Single source of truth for the message-command prefix.
pub const COMMAND_PREFIX: char = '!';
/// Shared time helpers (epoch clock, reset countdown, sweep schedule).
pub mod time;
