//! SerialPoint Serial Link
//!
//! Connects a pointing device on a serial port to the system cursor:
//!
//! - **Locator:** picks the device's port among the system's serial ports
//! - **Reader:** turns the byte stream into command lines, tolerating timeouts
//! - **Bridge:** the read → parse → map → smooth → move loop
//!
//! Port enumeration, line input, and cursor output all sit behind traits so
//! the loop can be driven by synthetic sources in tests.

pub mod bridge;
pub mod locator;
pub mod reader;

pub use bridge::{BridgeStats, PointerBridge};
pub use locator::{
    locate_port, matching_hint, select_port, PortDescriptor, PortEnumerator, SystemPortEnumerator,
};
pub use reader::{LineSource, SerialLineReader, TextLineSource};
