//! SerialPoint desktop integration
//!
//! Moves the real system cursor through `enigo`, which talks to X11 on
//! Linux, `SendInput` on Windows, and Quartz events on macOS.

use enigo::{Coordinate, Enigo, Mouse, Settings};

use serialpoint_common::error::{SerialpointError, SerialpointResult};
use serialpoint_platform_core::{CursorActuator, ScreenPoint, ScreenSize};

/// Cursor actuator backed by the OS input subsystem.
pub struct EnigoActuator {
    enigo: Enigo,
}

impl EnigoActuator {
    /// Connect to the platform input subsystem.
    pub fn new() -> SerialpointResult<Self> {
        let enigo = Enigo::new(&Settings::default()).map_err(|e| {
            SerialpointError::platform(format!("Failed to connect to input subsystem: {e}"))
        })?;
        tracing::debug!("Connected to desktop input subsystem");
        Ok(Self { enigo })
    }
}

impl CursorActuator for EnigoActuator {
    fn screen_size(&mut self) -> SerialpointResult<ScreenSize> {
        let (width, height) = self
            .enigo
            .main_display()
            .map_err(|e| SerialpointError::platform(format!("Failed to query display: {e}")))?;

        if width <= 0 || height <= 0 {
            return Err(SerialpointError::platform(format!(
                "Display reported invalid size {width}x{height}"
            )));
        }
        Ok(ScreenSize::new(width as u32, height as u32))
    }

    fn position(&mut self) -> SerialpointResult<ScreenPoint> {
        let (x, y) = self.enigo.location().map_err(|e| {
            SerialpointError::actuator(format!("Failed to read cursor location: {e}"))
        })?;
        Ok(ScreenPoint::new(x, y))
    }

    fn move_to(&mut self, point: ScreenPoint) -> SerialpointResult<()> {
        self.enigo
            .move_mouse(point.x, point.y, Coordinate::Abs)
            .map_err(|e| SerialpointError::actuator(format!("Failed to move cursor: {e}")))
    }

    fn name(&self) -> &str {
        "enigo"
    }
}
