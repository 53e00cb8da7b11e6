//! Number formatting shared by the server-side page composer and the browser.

/// Marker shown in place of a mean over an empty selection.
pub const UNDEFINED_MARKER: &str = "NaN";

/// Rounds `value` to `decimals` places, resolving ties to the even neighbour.
///
/// ```
/// use contracts::shared::format::round_half_even;
/// assert_eq!(round_half_even(2.5, 0), 2.0);
/// assert_eq!(round_half_even(3.5, 0), 4.0);
/// assert_eq!(round_half_even(6.97, 1), 7.0);
/// ```
pub fn round_half_even(value: f64, decimals: u32) -> f64 {
    if !value.is_finite() {
        return value;
    }
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round_ties_even() / factor
}

/// Formats an integer with `,` between thousands groups.
///
/// ```
/// use contracts::shared::format::format_thousands;
/// assert_eq!(format_thousands(322966), "322,966");
/// assert_eq!(format_thousands(-1234567), "-1,234,567");
/// ```
pub fn format_thousands(n: i64) -> String {
    let digits = n.unsigned_abs().to_string();
    let mut result = String::new();
    for (i, ch) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(ch);
    }
    if n < 0 {
        result.push('-');
    }
    result.chars().rev().collect()
}

/// Formats an optional mean with a fixed number of decimals, or the undefined marker.
pub fn format_mean(value: Option<f64>, decimals: usize) -> String {
    match value {
        Some(v) if v.is_finite() => format!("{:.prec$}", v, prec = decimals),
        _ => UNDEFINED_MARKER.to_string(),
    }
}
