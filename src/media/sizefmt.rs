const UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];

/// Format a byte count as a human-readable size.
///
/// Picks the largest unit in Bytes/KB/MB/GB whose value is >= 1, rounds to
/// two decimal places, and trims trailing zeros ("10 MB", not "10.00 MB").
/// Inputs past the table clamp to GB.
pub fn format_size(bytes: u64) -> String {
    if bytes == 0 {
        return "0 Bytes".to_string();
    }

    let exponent = ((bytes as f64).ln() / 1024f64.ln()).floor() as usize;
    let exponent = exponent.min(UNITS.len() - 1);
    let value = bytes as f64 / 1024f64.powi(exponent as i32);
    let rounded = (value * 100.0).round() / 100.0;

    let mut number = format!("{rounded:.2}");
    while number.ends_with('0') {
        number.pop();
    }
    if number.ends_with('.') {
        number.pop();
    }

    format!("{number} {}", UNITS[exponent])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_is_literal() {
        assert_eq!(format_size(0), "0 Bytes");
    }

    #[test]
    fn sub_kilobyte_counts_stay_in_bytes() {
        assert_eq!(format_size(1), "1 Bytes");
        assert_eq!(format_size(1023), "1023 Bytes");
    }

    #[test]
    fn unit_boundaries() {
        assert_eq!(format_size(1024), "1 KB");
        assert_eq!(format_size(1024 * 1024), "1 MB");
        assert_eq!(format_size(1024 * 1024 * 1024), "1 GB");
    }

    #[test]
    fn trailing_zeros_are_trimmed() {
        assert_eq!(format_size(1536), "1.5 KB");
        assert_eq!(format_size(10 * 1024 * 1024), "10 MB");
    }

    #[test]
    fn rounds_to_two_decimals() {
        assert_eq!(format_size(500_000), "488.28 KB");
        assert_eq!(format_size(1_234_567), "1.18 MB");
    }

    #[test]
    fn clamps_beyond_gigabytes() {
        assert_eq!(format_size(5 * 1024 * 1024 * 1024 * 1024), "5120 GB");
    }

    #[test]
    fn formatted_value_round_trips_within_one_percent() {
        let multipliers: [u64; 4] = [1, 1024, 1024 * 1024, 1024 * 1024 * 1024];
        for bytes in [
            1u64, 17, 999, 1024, 1536, 500_000, 1_234_567, 10 * 1024 * 1024, 3_987_654_321,
        ] {
            let formatted = format_size(bytes);
            let (number, unit) = formatted.split_once(' ').unwrap();
            let index = UNITS.iter().position(|u| *u == unit).unwrap();
            let reconstructed = number.parse::<f64>().unwrap() * multipliers[index] as f64;
            let drift = (reconstructed - bytes as f64).abs() / bytes as f64;
            assert!(drift < 0.01, "{formatted} drifts {drift} from {bytes}");
        }
    }
}
