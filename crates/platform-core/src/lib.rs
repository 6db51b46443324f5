//! SerialPoint platform core contracts.
//!
//! This crate contains the screen/cursor data structures and the
//! [`CursorActuator`] seam used by the motion and serial crates without
//! coupling to a concrete OS input backend.

use serde::{Deserialize, Serialize};

use serialpoint_common::error::SerialpointResult;

/// Screen resolution in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScreenSize {
    pub width: u32,
    pub height: u32,
}

impl ScreenSize {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

impl Default for ScreenSize {
    fn default() -> Self {
        Self::new(1920, 1080)
    }
}

/// Absolute pixel position on the screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScreenPoint {
    pub x: i32,
    pub y: i32,
}

impl ScreenPoint {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl std::fmt::Display for ScreenPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Something that can report and move the system cursor.
pub trait CursorActuator {
    /// Size of the screen the cursor moves on.
    fn screen_size(&mut self) -> SerialpointResult<ScreenSize>;

    /// Current cursor location.
    fn position(&mut self) -> SerialpointResult<ScreenPoint>;

    /// Move the cursor to an absolute position.
    fn move_to(&mut self, point: ScreenPoint) -> SerialpointResult<()>;

    /// Backend name for logging.
    fn name(&self) -> &str;
}

/// Actuator that records moves instead of touching the OS cursor.
///
/// Backs `--dry-run`, file replay, and tests.
#[derive(Debug, Clone)]
pub struct DryRunActuator {
    screen: ScreenSize,
    position: ScreenPoint,
    moves: Vec<ScreenPoint>,
}

impl DryRunActuator {
    /// Create an actuator for `screen` with the cursor at its centre.
    pub fn new(screen: ScreenSize) -> Self {
        let position = ScreenPoint::new((screen.width / 2) as i32, (screen.height / 2) as i32);
        Self::with_position(screen, position)
    }

    /// Create an actuator with a known starting cursor location.
    pub fn with_position(screen: ScreenSize, position: ScreenPoint) -> Self {
        Self {
            screen,
            position,
            moves: Vec::new(),
        }
    }

    /// Every position the cursor was moved to, in order.
    pub fn moves(&self) -> &[ScreenPoint] {
        &self.moves
    }
}

impl CursorActuator for DryRunActuator {
    fn screen_size(&mut self) -> SerialpointResult<ScreenSize> {
        Ok(self.screen)
    }

    fn position(&mut self) -> SerialpointResult<ScreenPoint> {
        Ok(self.position)
    }

    fn move_to(&mut self, point: ScreenPoint) -> SerialpointResult<()> {
        tracing::trace!(x = point.x, y = point.y, "dry-run cursor move");
        self.position = point;
        self.moves.push(point);
        Ok(())
    }

    fn name(&self) -> &str {
        "dry-run"
    }
}

impl<A: CursorActuator + ?Sized> CursorActuator for Box<A> {
    fn screen_size(&mut self) -> SerialpointResult<ScreenSize> {
        (**self).screen_size()
    }

    fn position(&mut self) -> SerialpointResult<ScreenPoint> {
        (**self).position()
    }

    fn move_to(&mut self, point: ScreenPoint) -> SerialpointResult<()> {
        (**self).move_to(point)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}
