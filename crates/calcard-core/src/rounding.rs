//! Rounding policy for layout positions.
//!
//! Every fractional position on the card goes through [`round_half_even`]. Ties
//! resolve to the nearest even integer (banker's rounding), so `2.5 -> 2` and
//! `3.5 -> 4`. Changing this moves text by one pixel on some pitches.

/// Round to the nearest integer, ties to even.
pub fn round_half_even(value: f64) -> i64 {
    value.round_ties_even() as i64
}

/// `round_half_even(value * factor)` for integer inputs.
pub fn scale(value: i64, factor: f64) -> i64 {
    round_half_even(value as f64 * factor)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ties_go_to_even() {
        assert_eq!(round_half_even(0.5), 0);
        assert_eq!(round_half_even(1.5), 2);
        assert_eq!(round_half_even(2.5), 2);
        assert_eq!(round_half_even(3.5), 4);
        assert_eq!(round_half_even(4.5), 4);
        assert_eq!(round_half_even(7.5), 8);
        assert_eq!(round_half_even(-2.5), -2);
    }

    #[test]
    fn test_non_ties_round_to_nearest() {
        assert_eq!(round_half_even(2.4), 2);
        assert_eq!(round_half_even(2.6), 3);
        assert_eq!(round_half_even(-1.2), -1);
    }

    #[test]
    fn test_scale_matches_layout_factors() {
        // xpitch * 0.75
        assert_eq!(scale(40, 0.75), 30);
        assert_eq!(scale(50, 0.75), 38); // 37.5
        assert_eq!(scale(6, 0.75), 4); // 4.5
        // ypitch * 1.5
        assert_eq!(scale(30, 1.5), 45);
        assert_eq!(scale(35, 1.5), 52); // 52.5
        assert_eq!(scale(33, 1.5), 50); // 49.5
        // ypitch * 2.5
        assert_eq!(scale(35, 2.5), 88); // 87.5
        assert_eq!(scale(5, 2.5), 12); // 12.5
    }
}
