//! Epoch-millisecond time helpers.
//!
//! Timestamps are stored as `i64` Unix milliseconds everywhere; this keeps
//! stored rows compact and comparison logic trivial.

use chrono::Utc;

/// Current time as Unix milliseconds.
#[inline]
pub fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}

/// Current time plus the given number of minutes, as Unix milliseconds.
#[inline]
pub fn millis_after_minutes(minutes: i64) -> i64 {
    (Utc::now() + chrono::Duration::minutes(minutes)).timestamp_millis()
}

/// Current time plus the given number of days, as Unix milliseconds.
#[inline]
pub fn millis_after_days(days: i64) -> i64 {
    (Utc::now() + chrono::Duration::days(days)).timestamp_millis()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_now_is_positive() {
        assert!(now_millis() > 0);
    }

    #[test]
    fn test_offsets_are_ordered() {
        let now = now_millis();
        let in_minutes = millis_after_minutes(15);
        let in_days = millis_after_days(7);
        assert!(now < in_minutes);
        assert!(in_minutes < in_days);
    }
}
