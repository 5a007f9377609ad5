//! Fixed-precision helpers shared by every panel.

/// Decimals used for liters everywhere.
pub const LITERS_DECIMALS: usize = 2;
/// Decimals used for grams everywhere.
pub const GRAMS_DECIMALS: usize = 2;
/// Decimals used for milliliters everywhere.
pub const MILLILITERS_DECIMALS: usize = 0;

/// Rounds half away from zero to `decimals` places. Values too large to
/// scale have no fractional digits left and come back unchanged.
pub fn round_to(value: f64, decimals: usize) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    let scaled = value * factor;
    if !scaled.is_finite() {
        return value;
    }
    scaled.round() / factor
}

/// `-0.0` prints as `0`, never `-0`.
pub fn fixed(value: f64, decimals: usize) -> String {
    format!("{:.*}", decimals, value + 0.0)
}

pub fn liters(value: f64) -> String {
    fixed(value, LITERS_DECIMALS)
}

pub fn grams(value: f64) -> String {
    fixed(value, GRAMS_DECIMALS)
}

pub fn milliliters(value: f64) -> String {
    fixed(value, MILLILITERS_DECIMALS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_to_two_decimals() {
        assert_eq!(round_to(0.1, 2), 0.1);
        assert_eq!(round_to(0.123, 2), 0.12);
        assert_eq!(round_to(0.125_1, 2), 0.13);
        assert_eq!(round_to(5.000_000_000_000_1, 2), 5.0);
    }

    #[test]
    fn test_round_to_huge_values_stay_finite() {
        assert_eq!(round_to(1e307, 2), 1e307);
        assert_eq!(round_to(f64::MAX, 0), f64::MAX);
    }

    #[test]
    fn test_fixed_formatting() {
        assert_eq!(liters(1.0), "1.00");
        assert_eq!(grams(70.0), "70.00");
        assert_eq!(milliliters(100.0), "100");
        assert_eq!(milliliters(123.6), "124");
        assert_eq!(liters(-0.0), "0.00");
        assert_eq!(milliliters(-0.0), "0");
    }
}
