const UNITS: [&str; 9] = ["Bytes", "KB", "MB", "GB", "TB", "PB", "EB", "ZB", "YB"];

/// Format a raw byte count as a human readable string using binary
/// (1024-based) units. Zero is always rendered as "0 Bytes".
///
/// Trailing zeros after the decimal point are dropped, so 1024 bytes
/// with two decimals renders as "1 KB" rather than "1.00 KB". Midpoints
/// round away from zero: 1152 bytes with two decimals is "1.13 KB".
pub fn format_bytes(bytes: u64, decimals: i32) -> String {
    if bytes == 0 {
        return "0 Bytes".to_string();
    }
    let dm = if decimals < 0 { 0 } else { decimals as usize };
    let unit = ((bytes as f64).ln() / 1024f64.ln()).floor() as usize;
    let scaled = bytes as f64 / 1024f64.powi(unit as i32);
    let factor = 10f64.powi(dm as i32);
    let rounded = (scaled * factor).round() / factor;
    let formatted = format!("{:.*}", dm, rounded);
    let value = trim_trailing_zeros(&formatted);
    format!("{} {}", value, UNITS[unit])
}

fn trim_trailing_zeros(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trim_trailing_zeros_keeps_integer_digits() {
        assert_eq!(trim_trailing_zeros("100"), "100");
        assert_eq!(trim_trailing_zeros("1.50"), "1.5");
        assert_eq!(trim_trailing_zeros("2.00"), "2");
    }
}
