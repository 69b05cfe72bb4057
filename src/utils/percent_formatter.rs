/// Format `a` as a percentage of `b` with a fixed number of decimals.
/// A zero denominator renders as "N/A" instead of dividing. Midpoints
/// round away from zero (1.125 with two decimals is "1.13", not "1.12").
pub fn format_percent(a: f64, b: f64, decimals: usize) -> String {
    if b == 0.0 {
        return "N/A".to_string();
    }
    format!("{:.*}", decimals, round_half_up(a * 100.0 / b, decimals))
}

fn round_half_up(value: f64, decimals: usize) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}
