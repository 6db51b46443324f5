//! Cursor motion smoothing.
//!
//! The cursor chases the latest device target with an exponential approach:
//! each update closes a fixed fraction `alpha` of the remaining gap on both
//! axes. Jitter in the device signal is damped while steady targets are
//! reached geometrically fast.

use serialpoint_common::error::{SerialpointError, SerialpointResult};
use serialpoint_platform_core::ScreenPoint;

use crate::command::NormalizedCoordinate;
use crate::mapping::MotionBounds;

/// Fraction of the remaining distance closed per update, in `(0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SmoothingFactor(f64);

impl SmoothingFactor {
    /// Default responsiveness.
    pub const DEFAULT: SmoothingFactor = SmoothingFactor(0.25);

    /// Validate and wrap `alpha`.
    pub fn new(alpha: f64) -> SerialpointResult<Self> {
        if alpha > 0.0 && alpha <= 1.0 {
            Ok(Self(alpha))
        } else {
            Err(SerialpointError::config(format!(
                "smoothing factor must be in (0, 1], got {alpha}"
            )))
        }
    }

    pub fn get(self) -> f64 {
        self.0
    }
}

impl Default for SmoothingFactor {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Sub-pixel cursor position carried from one update to the next.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SmoothedPosition {
    pub x: f64,
    pub y: f64,
}

impl SmoothedPosition {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn from_point(point: ScreenPoint) -> Self {
        Self::new(f64::from(point.x), f64::from(point.y))
    }

    /// One exponential step toward `target`.
    ///
    /// `next = current + (target - current) * alpha` per axis. The result is
    /// kept between `current` and `target` so rounding can never overshoot.
    #[must_use]
    pub fn step(self, target: ScreenPoint, alpha: SmoothingFactor) -> Self {
        Self {
            x: approach(self.x, f64::from(target.x), alpha.get()),
            y: approach(self.y, f64::from(target.y), alpha.get()),
        }
    }

    /// Pixel the cursor is placed on (truncated toward zero).
    pub fn to_pixel(self) -> ScreenPoint {
        ScreenPoint::new(self.x as i32, self.y as i32)
    }
}

fn approach(current: f64, target: f64, alpha: f64) -> f64 {
    let next = current + (target - current) * alpha;
    if target >= current {
        next.clamp(current, target)
    } else {
        next.clamp(target, current)
    }
}

/// Smoothing state owned by the read loop.
///
/// Starts from the cursor's current location (pulled inside the bounds) and
/// moves toward each new device target.
#[derive(Debug, Clone)]
pub struct MotionSmoother {
    bounds: MotionBounds,
    alpha: SmoothingFactor,
    position: SmoothedPosition,
}

impl MotionSmoother {
    pub fn new(bounds: MotionBounds, alpha: SmoothingFactor, start: ScreenPoint) -> Self {
        Self {
            bounds,
            alpha,
            position: SmoothedPosition::from_point(bounds.clamp_point(start)),
        }
    }

    /// Feed one device coordinate; returns the pixel to move the cursor to.
    pub fn advance(&mut self, coord: NormalizedCoordinate) -> ScreenPoint {
        let target = self.bounds.target_for(coord);
        self.position = self.position.step(target, self.alpha);
        self.position.to_pixel()
    }

    pub fn position(&self) -> SmoothedPosition {
        self.position
    }
}
