use std::time::{SystemTime, UNIX_EPOCH};

pub const MILLIS_PER_SECOND: u64 = 1_000;
pub const MILLIS_PER_MINUTE: u64 = 60 * MILLIS_PER_SECOND;
pub const MILLIS_PER_HOUR: u64 = 60 * MILLIS_PER_MINUTE;
pub const MILLIS_PER_DAY: u64 = 24 * MILLIS_PER_HOUR;

/// Return the current unix timestamp in milliseconds.
pub fn now_unix_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |duration| duration.as_millis() as u64)
}

/// Format the time remaining until a reset timestamp as `"{h}h {m}m"` when at
/// least an hour remains, `"{m}m"` below that, and `"now"` for timestamps in
/// the past or present.
pub fn format_time_until_reset(reset_at_ms: u64, now_ms: u64) -> String {
    if reset_at_ms <= now_ms {
        return "now".to_owned();
    }

    let diff = reset_at_ms - now_ms;
    let hours = diff / MILLIS_PER_HOUR;
    let minutes = (diff % MILLIS_PER_HOUR) / MILLIS_PER_MINUTE;

    if hours > 0 {
        format!("{}h {}m", hours, minutes)
    } else {
        format!("{}m", minutes)
    }
}

/// Milliseconds from `now_ms` until the next daily tick at `hour_utc:00` UTC.
///
/// A tick exactly at `now_ms` is treated as already passed, so the result is
/// always in `1..=MILLIS_PER_DAY`.
pub fn millis_until_daily_tick(now_ms: u64, hour_utc: u64) -> u64 {
    let tick_offset = (hour_utc % 24) * MILLIS_PER_HOUR;
    let day_start = now_ms - now_ms % MILLIS_PER_DAY;
    let today_tick = day_start + tick_offset;

    if today_tick > now_ms {
        today_tick - now_ms
    } else {
        today_tick + MILLIS_PER_DAY - now_ms
    }
}

#[cfg(test)]
mod tests {
    use super::{
        MILLIS_PER_DAY, MILLIS_PER_HOUR, MILLIS_PER_MINUTE, MILLIS_PER_SECOND,
        format_time_until_reset, millis_until_daily_tick,
    };

    const NOW: u64 = 1_750_000_000_000;

    #[test]
    fn formats_hours_and_minutes() {
        assert_eq!(
            format_time_until_reset(NOW + 90 * MILLIS_PER_MINUTE, NOW),
            "1h 30m"
        );
        assert_eq!(
            format_time_until_reset(NOW + 24 * MILLIS_PER_HOUR, NOW),
            "24h 0m"
        );
    }

    #[test]
    fn formats_minutes_only_below_an_hour() {
        assert_eq!(
            format_time_until_reset(NOW + 45 * MILLIS_PER_MINUTE, NOW),
            "45m"
        );
        assert_eq!(format_time_until_reset(NOW + MILLIS_PER_SECOND, NOW), "0m");
    }

    #[test]
    fn past_or_present_reset_is_now() {
        assert_eq!(format_time_until_reset(NOW - 5 * MILLIS_PER_SECOND, NOW), "now");
        assert_eq!(format_time_until_reset(NOW, NOW), "now");
    }

    #[test]
    fn daily_tick_before_and_after_the_hour() {
        let midnight = NOW - NOW % MILLIS_PER_DAY;

        let one_am = midnight + MILLIS_PER_HOUR;
        assert_eq!(millis_until_daily_tick(one_am, 2), MILLIS_PER_HOUR);

        let three_am = midnight + 3 * MILLIS_PER_HOUR;
        assert_eq!(millis_until_daily_tick(three_am, 2), 23 * MILLIS_PER_HOUR);
    }

    #[test]
    fn daily_tick_exactly_on_the_hour_waits_a_full_day() {
        let midnight = NOW - NOW % MILLIS_PER_DAY;
        let two_am = midnight + 2 * MILLIS_PER_HOUR;
        assert_eq!(millis_until_daily_tick(two_am, 2), MILLIS_PER_DAY);
    }
}
