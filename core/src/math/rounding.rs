/// Rounds to `digits` decimal places.
///
/// Rounding is done on the exact binary value with ties to even, the same
/// result a decimal formatter produces. Scaling by a power of ten first would
/// introduce its own representation error. Non-finite input is returned as-is.
pub fn round_to(value: f64, digits: usize) -> f64 {
    if !value.is_finite() {
        return value;
    }
    format!("{:.*}", digits, value)
        .parse::<f64>()
        .unwrap_or(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_to_requested_places() {
        assert_eq!(round_to(0.123_456_7, 4), 0.1235);
        assert_eq!(round_to(-97.277_777_8, 6), -97.277778);
        assert_eq!(round_to(12.0, 2), 12.0);
    }

    #[test]
    fn exact_binary_value_decides_ties() {
        // 2.675 is stored slightly below the midpoint.
        assert_eq!(round_to(2.675, 2), 2.67);
        assert_eq!(round_to(0.125, 2), 0.12);
        assert_eq!(round_to(0.375, 2), 0.38);
    }

    #[test]
    fn float32_inputs_round_cleanly() {
        assert_eq!(round_to(f64::from(0.1_f32), 4), 0.1);
        assert_eq!(round_to(f64::from(359.5_f32), 2), 359.5);
    }

    #[test]
    fn non_finite_passes_through() {
        assert!(round_to(f64::NAN, 2).is_nan());
        assert_eq!(round_to(f64::INFINITY, 2), f64::INFINITY);
    }
}
