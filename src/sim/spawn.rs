//! Turning a pointer hold into a new shape's size

use crate::consts::{HOLD_MS_PER_PIXEL, MAX_SHAPE_RADIUS, MIN_SHAPE_RADIUS};

/// Radius for a press held `held_ms` milliseconds: grows 1px per 10ms,
/// from 10 up to 100
pub fn radius_for_hold(held_ms: f64) -> f32 {
    if held_ms.is_nan() {
        return MIN_SHAPE_RADIUS;
    }
    let r = MIN_SHAPE_RADIUS as f64 + held_ms / HOLD_MS_PER_PIXEL;
    r.clamp(MIN_SHAPE_RADIUS as f64, MAX_SHAPE_RADIUS as f64) as f32
}

/// How a newly spawned shape gets its radius
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum SizePolicy {
    /// Radius grows with how long the pointer was held
    #[default]
    HoldDuration,
    Fixed(f32),
}

impl SizePolicy {
    pub fn radius(&self, held_ms: f64) -> f32 {
        match *self {
            SizePolicy::HoldDuration => radius_for_hold(held_ms),
            SizePolicy::Fixed(r) => r,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_tap_and_long_hold() {
        assert_eq!(radius_for_hold(0.0), 10.0);
        assert_eq!(radius_for_hold(250.0), 35.0);
        assert_eq!(radius_for_hold(900.0), 100.0);
        assert_eq!(radius_for_hold(f64::INFINITY), 100.0);
        assert_eq!(radius_for_hold(f64::NAN), 10.0);
    }

    #[test]
    fn test_fixed_size_overrides_hold() {
        let policy = SizePolicy::Fixed(5.0);
        assert_eq!(policy.radius(0.0), 5.0);
        assert_eq!(policy.radius(5000.0), 5.0);
        assert_eq!(SizePolicy::HoldDuration.radius(100.0), 20.0);
    }

    proptest! {
        #[test]
        fn non_positive_hold_gives_min_radius(d in -1.0e6f64..=0.0) {
            prop_assert_eq!(radius_for_hold(d), MIN_SHAPE_RADIUS);
        }

        #[test]
        fn long_hold_gives_max_radius(d in 900.0f64..1.0e7) {
            prop_assert_eq!(radius_for_hold(d), MAX_SHAPE_RADIUS);
        }

        #[test]
        fn radius_is_monotonic(a in 0.0f64..900.0, b in 0.0f64..900.0) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(radius_for_hold(lo) <= radius_for_hold(hi));
        }
    }
}
