//! SerialPoint Motion Core
//!
//! Turns device commands into cursor positions:
//! - **Command parsing:** `GOTO x y` lines into normalized coordinates
//! - **Screen mapping:** clamp, scale, and keep a safety margin from edges
//! - **Smoothing:** exponential approach toward the latest target
//!
//! This crate is pure computation with no I/O or platform dependencies.
//! All inputs are data; all outputs are data.

pub mod command;
pub mod mapping;
pub mod smoothing;

pub use command::{parse_goto, NormalizedCoordinate};
pub use mapping::{clamp, MotionBounds};
pub use smoothing::{MotionSmoother, SmoothedPosition, SmoothingFactor};
