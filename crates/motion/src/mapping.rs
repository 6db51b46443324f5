//! Mapping normalized coordinates onto screen pixels.

use serialpoint_platform_core::{ScreenPoint, ScreenSize};

use crate::command::NormalizedCoordinate;

/// Clamp `value` into `[lo, hi]`.
///
/// NaN is treated as out of range and maps to `lo`. Unlike [`f64::clamp`]
/// this never panics; `lo <= hi` is assumed.
pub fn clamp(value: f64, lo: f64, hi: f64) -> f64 {
    if value.is_nan() || value < lo {
        lo
    } else if value > hi {
        hi
    } else {
        value
    }
}

/// Screen area the cursor is allowed to reach.
///
/// Each axis is limited to `[margin, dim - 1 - margin]`. When the margin
/// leaves no room on an axis, that axis collapses to its centre pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MotionBounds {
    screen: ScreenSize,
    x_range: (i32, i32),
    y_range: (i32, i32),
}

impl MotionBounds {
    pub fn new(screen: ScreenSize, margin: u32) -> Self {
        Self {
            screen,
            x_range: axis_range(screen.width, margin),
            y_range: axis_range(screen.height, margin),
        }
    }

    /// Inclusive `(min, max)` pixel range on the x axis.
    pub fn x_range(&self) -> (i32, i32) {
        self.x_range
    }

    /// Inclusive `(min, max)` pixel range on the y axis.
    pub fn y_range(&self) -> (i32, i32) {
        self.y_range
    }

    pub fn contains(&self, point: ScreenPoint) -> bool {
        (self.x_range.0..=self.x_range.1).contains(&point.x)
            && (self.y_range.0..=self.y_range.1).contains(&point.y)
    }

    /// Pull an arbitrary pixel position inside the bounds.
    pub fn clamp_point(&self, point: ScreenPoint) -> ScreenPoint {
        ScreenPoint::new(
            point.x.clamp(self.x_range.0, self.x_range.1),
            point.y.clamp(self.y_range.0, self.y_range.1),
        )
    }

    /// Target pixel for a device coordinate.
    ///
    /// Clamps to `[0, 1]`, scales by `dim - 1`, truncates, then applies the margin.
    pub fn target_for(&self, coord: NormalizedCoordinate) -> ScreenPoint {
        ScreenPoint::new(
            scale_axis(coord.x, self.screen.width, self.x_range),
            scale_axis(coord.y, self.screen.height, self.y_range),
        )
    }
}

fn axis_range(dim: u32, margin: u32) -> (i32, i32) {
    let last = i64::from(dim.max(1)) - 1;
    let lo = i64::from(margin);
    let hi = last - lo;
    if lo <= hi {
        (saturate(lo), saturate(hi))
    } else {
        let mid = saturate(last / 2);
        (mid, mid)
    }
}

/// Pixel coordinates are `i32`; larger values pin to `i32::MAX`.
fn saturate(value: i64) -> i32 {
    i32::try_from(value).unwrap_or(i32::MAX)
}

fn scale_axis(norm: f64, dim: u32, (lo, hi): (i32, i32)) -> i32 {
    let span = f64::from(dim.max(1) - 1);
    let pixel = (clamp(norm, 0.0, 1.0) * span) as i32;
    pixel.clamp(lo, hi)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn full_hd() -> MotionBounds {
        MotionBounds::new(ScreenSize::new(1920, 1080), 5)
    }

    #[test]
    fn test_clamp_inside_is_identity() {
        assert_eq!(clamp(0.3, 0.0, 1.0), 0.3);
        assert_eq!(clamp(0.0, 0.0, 1.0), 0.0);
        assert_eq!(clamp(1.0, 0.0, 1.0), 1.0);
    }

    #[test]
    fn test_clamp_outside_hits_bounds() {
        assert_eq!(clamp(-3.0, 0.0, 1.0), 0.0);
        assert_eq!(clamp(7.0, 0.0, 1.0), 1.0);
        assert_eq!(clamp(f64::INFINITY, 0.0, 1.0), 1.0);
        assert_eq!(clamp(f64::NEG_INFINITY, 0.0, 1.0), 0.0);
    }

    #[test]
    fn test_clamp_nan_maps_to_lo() {
        assert_eq!(clamp(f64::NAN, 0.25, 1.0), 0.25);
    }

    #[test]
    fn test_full_hd_ranges() {
        let bounds = full_hd();
        assert_eq!(bounds.x_range(), (5, 1914));
        assert_eq!(bounds.y_range(), (5, 1074));
    }

    #[test]
    fn test_centre_maps_to_middle_pixel() {
        let target = full_hd().target_for(NormalizedCoordinate::new(0.5, 0.5));
        assert_eq!(target, ScreenPoint::new(959, 539));
    }

    #[test]
    fn test_out_of_range_maps_inside_margin() {
        let bounds = full_hd();
        assert_eq!(
            bounds.target_for(NormalizedCoordinate::new(2.0, 2.0)),
            ScreenPoint::new(1914, 1074)
        );
        assert_eq!(
            bounds.target_for(NormalizedCoordinate::new(-1.0, 0.0)),
            ScreenPoint::new(5, 5)
        );
        assert_eq!(
            bounds.target_for(NormalizedCoordinate::new(f64::NAN, f64::INFINITY)),
            ScreenPoint::new(5, 1074)
        );
    }

    #[test]
    fn test_oversized_margin_collapses_to_centre() {
        let bounds = MotionBounds::new(ScreenSize::new(10, 1080), 5);
        assert_eq!(bounds.x_range(), (4, 4));
        assert_eq!(
            bounds.target_for(NormalizedCoordinate::new(1.0, 0.0)),
            ScreenPoint::new(4, 5)
        );
    }

    #[test]
    fn test_zero_sized_screen_does_not_panic() {
        let bounds = MotionBounds::new(ScreenSize::new(0, 0), 0);
        assert_eq!(
            bounds.target_for(NormalizedCoordinate::new(0.7, 0.7)),
            ScreenPoint::new(0, 0)
        );
    }

    #[test]
    fn test_huge_screen_saturates_instead_of_panicking() {
        let bounds = MotionBounds::new(ScreenSize::new(u32::MAX, u32::MAX), 5);
        assert_eq!(bounds.x_range(), (5, i32::MAX));
        assert_eq!(
            bounds.target_for(NormalizedCoordinate::new(1.0, 0.0)),
            ScreenPoint::new(i32::MAX, 5)
        );
        assert_eq!(
            bounds.clamp_point(ScreenPoint::new(i32::MIN, i32::MAX)),
            ScreenPoint::new(5, i32::MAX)
        );

        let all_margin = MotionBounds::new(ScreenSize::new(u32::MAX, 10), u32::MAX);
        assert_eq!(all_margin.x_range(), (i32::MAX, i32::MAX));
    }

    #[test]
    fn test_clamp_point() {
        let bounds = full_hd();
        assert_eq!(
            bounds.clamp_point(ScreenPoint::new(0, 5000)),
            ScreenPoint::new(5, 1074)
        );
        assert!(bounds.contains(ScreenPoint::new(100, 100)));
        assert!(!bounds.contains(ScreenPoint::new(1915, 100)));
    }

    proptest! {
        #[test]
        fn prop_clamp_is_idempotent(
            v in proptest::num::f64::ANY,
            lo in -100.0f64..100.0,
            span in 0.0f64..100.0,
        ) {
            let hi = lo + span;
            let once = clamp(v, lo, hi);
            prop_assert_eq!(clamp(once, lo, hi), once);
            prop_assert!(once >= lo && once <= hi);
        }

        #[test]
        fn prop_targets_stay_in_bounds(
            x in proptest::num::f64::ANY,
            y in proptest::num::f64::ANY,
            width in prop_oneof![1u32..8000, Just(u32::MAX)],
            height in 1u32..8000,
            margin in prop_oneof![0u32..50, Just(u32::MAX)],
        ) {
            let bounds = MotionBounds::new(ScreenSize::new(width, height), margin);
            let target = bounds.target_for(NormalizedCoordinate::new(x, y));
            prop_assert!(bounds.contains(target));
        }
    }
}
