//! The read → parse → map → smooth → move loop.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use serialpoint_common::error::SerialpointResult;
use serialpoint_motion::{parse_goto, MotionBounds, MotionSmoother, SmoothingFactor};
use serialpoint_platform_core::{CursorActuator, ScreenPoint};

use crate::reader::LineSource;

/// Counters reported when the loop ends.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BridgeStats {
    /// Non-empty lines received.
    pub lines_read: u64,
    /// Lines that were not a valid `GOTO` command.
    pub lines_rejected: u64,
    /// Cursor moves issued successfully.
    pub moves: u64,
    /// Cursor moves the actuator refused.
    pub move_failures: u64,
}

/// Drives the cursor from a line source.
pub struct PointerBridge<A> {
    source: Box<dyn LineSource>,
    actuator: A,
    smoother: MotionSmoother,
    stop_flag: Arc<AtomicBool>,
    stats: BridgeStats,
}

impl<A: CursorActuator> PointerBridge<A> {
    /// Create a bridge, reading screen size and cursor location from `actuator`.
    pub fn new(
        source: Box<dyn LineSource>,
        mut actuator: A,
        alpha: SmoothingFactor,
        safe_margin: u32,
    ) -> SerialpointResult<Self> {
        let screen = actuator.screen_size()?;
        let bounds = MotionBounds::new(screen, safe_margin);

        let start = actuator.position().unwrap_or_else(|e| {
            tracing::warn!(error = %e, "Cursor location unknown, starting from screen centre");
            ScreenPoint::new((screen.width / 2) as i32, (screen.height / 2) as i32)
        });

        tracing::debug!(
            width = screen.width,
            height = screen.height,
            margin = safe_margin,
            alpha = alpha.get(),
            start = %start,
            "Pointer bridge configured"
        );

        Ok(Self {
            source,
            actuator,
            smoother: MotionSmoother::new(bounds, alpha, start),
            stop_flag: Arc::new(AtomicBool::new(false)),
            stats: BridgeStats::default(),
        })
    }

    /// Share an existing stop flag instead of the bridge's own.
    pub fn with_stop_flag(mut self, stop_flag: Arc<AtomicBool>) -> Self {
        self.stop_flag = stop_flag;
        self
    }

    /// Handle one line. Returns the pixel the cursor was moved to, if any.
    pub fn process_line(&mut self, line: &str) -> Option<ScreenPoint> {
        let Some(coord) = parse_goto(line) else {
            self.stats.lines_rejected += 1;
            tracing::debug!(line, "Ignoring unrecognized line");
            return None;
        };

        let pixel = self.smoother.advance(coord);
        match self.actuator.move_to(pixel) {
            Ok(()) => {
                self.stats.moves += 1;
                tracing::trace!(x = pixel.x, y = pixel.y, "Cursor moved");
                Some(pixel)
            }
            Err(e) => {
                self.stats.move_failures += 1;
                tracing::warn!(error = %e, "Cursor move failed");
                None
            }
        }
    }

    /// Run until the stop flag is set or the source ends.
    ///
    /// Read errors other than timeouts end the loop with an error.
    pub fn run(&mut self) -> SerialpointResult<BridgeStats> {
        tracing::info!(actuator = %self.actuator.name(), "Pointer bridge started");

        while !self.stop_flag.load(Ordering::Relaxed) {
            match self.source.read_line()? {
                Some(line) => {
                    self.stats.lines_read += 1;
                    self.process_line(&line);
                }
                None if self.source.is_exhausted() => break,
                None => {}
            }
        }

        tracing::info!(
            lines = self.stats.lines_read,
            rejected = self.stats.lines_rejected,
            moves = self.stats.moves,
            "Pointer bridge stopped"
        );
        Ok(self.stats)
    }

    /// Set the stop flag.
    pub fn stop(&self) {
        self.stop_flag.store(true, Ordering::SeqCst);
    }

    /// Get the stop flag for external coordination (signal handlers).
    pub fn stop_flag(&self) -> Arc<AtomicBool> {
        self.stop_flag.clone()
    }

    pub fn stats(&self) -> BridgeStats {
        self.stats
    }

    pub fn smoother(&self) -> &MotionSmoother {
        &self.smoother
    }

    pub fn actuator(&self) -> &A {
        &self.actuator
    }
}
