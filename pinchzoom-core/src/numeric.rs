//! Scalar helpers shared by the geometry and reconciliation layers.

/// Clamp `value` into `[min, max]`.
///
/// The caller must ensure `min <= max`; inverted bounds are not defended against.
pub fn clamp(min: f64, max: f64, value: f64) -> f64 {
    max.min(min.max(value))
}

/// Sign flip, used to turn drag directions into content offsets.
pub fn negate(value: f64) -> f64 {
    -value
}

/// Returns `target` when `current` is strictly closer than `threshold`, else `current`.
///
/// This is a binary decision, never an interpolation.
pub fn snap_to_target(current: f64, target: f64, threshold: f64) -> f64 {
    if (target - current).abs() < threshold {
        target
    } else {
        current
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_below_range_returns_min() {
        assert_eq!(clamp(0.0, 10.0, -5.0), 0.0);
    }

    #[test]
    fn clamp_above_range_returns_max() {
        assert_eq!(clamp(0.0, 10.0, 15.0), 10.0);
    }

    #[test]
    fn clamp_inside_range_is_identity() {
        assert_eq!(clamp(0.0, 10.0, 4.0), 4.0);
        assert_eq!(clamp(0.0, 10.0, 0.0), 0.0);
        assert_eq!(clamp(0.0, 10.0, 10.0), 10.0);
    }

    #[test]
    fn clamp_stays_in_range_for_many_values() {
        for i in -50..50 {
            let v = i as f64 * 0.37;
            let c = clamp(-3.0, 7.5, v);
            assert!((-3.0..=7.5).contains(&c), "clamp({v}) = {c}");
        }
    }

    #[test]
    fn negate_flips_sign() {
        assert_eq!(negate(3.5), -3.5);
        assert_eq!(negate(-2.0), 2.0);
    }

    #[test]
    fn snap_within_threshold_returns_target() {
        assert_eq!(snap_to_target(9.8, 10.0, 0.5), 10.0);
        assert_eq!(snap_to_target(10.3, 10.0, 0.5), 10.0);
    }

    #[test]
    fn snap_outside_threshold_returns_current() {
        assert_eq!(snap_to_target(9.0, 10.0, 0.5), 9.0);
        // Exactly at the threshold does not snap
        assert_eq!(snap_to_target(9.5, 10.0, 0.5), 9.5);
    }
}
