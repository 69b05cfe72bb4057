/// Render a ledger age in coarse buckets. The hour and day buckets drop
/// the remainder entirely and the unit label is never singularized, so
/// 60 minutes renders as "1 hours". This matches what the rest of the
/// dashboard has always displayed.
pub fn format_time_from_minutes(age_in_minutes: u64) -> String {
    if age_in_minutes < 60 {
        format!("{} minutes", age_in_minutes)
    } else if age_in_minutes < 1440 {
        format!("{} hours", age_in_minutes / 60)
    } else {
        format!("{} days", age_in_minutes / 1440)
    }
}

/// Render an elapsed duration in milliseconds as a rough "ago" string.
/// Sub-second durations collapse to "1 second ago".
pub fn format_time_diff(time_millis: u64) -> String {
    if time_millis < 1000 {
        return "1 second ago".to_string();
    }
    let seconds = time_millis.div_ceil(1000);
    if seconds == 1 {
        return "1 second ago".to_string();
    }
    if seconds < 60 {
        return format!("{} seconds ago", seconds);
    }
    let minutes = seconds.div_ceil(60);
    if minutes == 1 {
        "1 minute ago".to_string()
    } else {
        format!("{} minutes ago", minutes)
    }
}
