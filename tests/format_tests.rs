use std::collections::HashMap;

use bkvm::utils::{
    format_bytes, format_percent, format_time_diff, format_time_from_minutes,
    replace_placeholders,
};

#[test]
fn test_format_bytes_zero() {
    assert_eq!(format_bytes(0, 2), "0 Bytes");
    // decimals are irrelevant for zero
    assert_eq!(format_bytes(0, 0), "0 Bytes");
}

#[test]
fn test_format_bytes_exact_unit_boundary() {
    assert_eq!(format_bytes(1024, 2), "1 KB");
    assert_eq!(format_bytes(1024 * 1024, 2), "1 MB");
}

#[test]
fn test_format_bytes_drops_trailing_zeros() {
    assert_eq!(format_bytes(1536, 2), "1.5 KB");
}

#[test]
fn test_format_bytes_gb_scale() {
    assert_eq!(format_bytes(12433813504, 2), "11.58 GB");
}

#[test]
fn test_format_bytes_sub_kilobyte() {
    assert_eq!(format_bytes(512, 2), "512 Bytes");
}

#[test]
fn test_format_bytes_negative_decimals_treated_as_zero() {
    assert_eq!(format_bytes(1536, -1), "2 KB");
}

#[test]
fn test_format_percent_zero_denominator() {
    assert_eq!(format_percent(50.0, 0.0, 2), "N/A");
    assert_eq!(format_percent(0.0, 0.0, 2), "N/A");
}

#[test]
fn test_format_percent_keeps_fixed_decimals() {
    assert_eq!(format_percent(50.0, 100.0, 2), "50.00");
    assert_eq!(format_percent(1.0, 3.0, 2), "33.33");
}

#[test]
fn test_format_time_from_minutes_buckets() {
    assert_eq!(format_time_from_minutes(30), "30 minutes");
    assert_eq!(format_time_from_minutes(59), "59 minutes");
    assert_eq!(format_time_from_minutes(60), "1 hours");
    assert_eq!(format_time_from_minutes(122), "2 hours");
    assert_eq!(format_time_from_minutes(1439), "23 hours");
    assert_eq!(format_time_from_minutes(1500), "1 days");
}

#[test]
fn test_format_time_diff_sub_second() {
    assert_eq!(format_time_diff(500), "1 second ago");
    assert_eq!(format_time_diff(0), "1 second ago");
    assert_eq!(format_time_diff(1000), "1 second ago");
}

#[test]
fn test_format_time_diff_seconds() {
    assert_eq!(format_time_diff(1001), "2 seconds ago");
    assert_eq!(format_time_diff(59000), "59 seconds ago");
}

#[test]
fn test_format_time_diff_minutes() {
    assert_eq!(format_time_diff(60000), "1 minute ago");
    assert_eq!(format_time_diff(60001), "2 minutes ago");
    assert_eq!(format_time_diff(120000), "2 minutes ago");
}

#[test]
fn test_replace_placeholders_fills_known_keys() {
    let mut map = HashMap::new();
    map.insert("bookieId".to_string(), "bk-1:3181".to_string());
    map.insert("clusterId".to_string(), "1".to_string());
    assert_eq!(
        replace_placeholders("Bookie ledgers: ${bookieId}", &map),
        "Bookie ledgers: bk-1:3181"
    );
}

#[test]
fn test_replace_placeholders_ignores_unused_keys() {
    let mut map = HashMap::new();
    map.insert("unused".to_string(), "x".to_string());
    assert_eq!(replace_placeholders("Ledgers", &map), "Ledgers");
}

#[test]
fn test_format_percent_midpoint_rounds_up() {
    // 9 / 800 is exactly 1.125%; toFixed-style rounding gives 1.13
    assert_eq!(format_percent(9.0, 800.0, 2), "1.13");
    assert_eq!(format_percent(1.25, 100.0, 1), "1.3");
}

#[test]
fn test_format_bytes_midpoint_rounds_up() {
    // 1152 bytes is exactly 1.125 KB
    assert_eq!(format_bytes(1152, 2), "1.13 KB");
}
