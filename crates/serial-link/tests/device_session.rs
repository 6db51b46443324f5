use std::collections::VecDeque;
use std::io::{ErrorKind, Read};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use serialpoint_motion::SmoothingFactor;
use serialpoint_platform_core::{DryRunActuator, ScreenPoint, ScreenSize};
use serialpoint_serial_link::{PointerBridge, SerialLineReader};

/// Fake device: emits scripted chunks with read timeouts in between, then
/// raises the stop flag the way a Ctrl+C handler would.
struct FakeDevice {
    chunks: VecDeque<Option<&'static [u8]>>,
    stop_flag: Arc<AtomicBool>,
}

impl Read for FakeDevice {
    fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        match self.chunks.pop_front() {
            Some(Some(bytes)) => {
                buf[..bytes.len()].copy_from_slice(bytes);
                Ok(bytes.len())
            }
            Some(None) => Err(ErrorKind::TimedOut.into()),
            None => {
                self.stop_flag.store(true, Ordering::SeqCst);
                Err(ErrorKind::TimedOut.into())
            }
        }
    }
}

fn chunk(bytes: &'static [u8]) -> Option<&'static [u8]> {
    Some(bytes)
}

fn run_session(chunks: Vec<Option<&'static [u8]>>, alpha: f64) -> (Vec<ScreenPoint>, u64) {
    let stop_flag = Arc::new(AtomicBool::new(false));
    let device = FakeDevice {
        chunks: chunks.into(),
        stop_flag: stop_flag.clone(),
    };

    let actuator =
        DryRunActuator::with_position(ScreenSize::new(1920, 1080), ScreenPoint::new(0, 0));
    let mut bridge = PointerBridge::new(
        Box::new(SerialLineReader::new(device)),
        actuator,
        SmoothingFactor::new(alpha).expect("valid alpha"),
        5,
    )
    .expect("bridge should start")
    .with_stop_flag(stop_flag);

    let stats = bridge.run().expect("session should end cleanly");
    (bridge.actuator().moves().to_vec(), stats.lines_rejected)
}

#[test]
fn split_and_delayed_commands_still_move_cursor() {
    let (moves, rejected) = run_session(
        vec![
            chunk(b"GOTO 0."),
            None,
            chunk(b"5 0.5\r\nGOTO 0.5"),
            None,
            chunk(b" 0.5\n"),
        ],
        1.0,
    );

    assert_eq!(rejected, 0);
    assert_eq!(
        moves,
        vec![ScreenPoint::new(959, 539), ScreenPoint::new(959, 539)]
    );
}

#[test]
fn garbage_between_commands_is_ignored() {
    let (moves, rejected) = run_session(
        vec![
            chunk(b"boot: esp32 ready\n"),
            chunk(b"GOTO 2 2\n"),
            chunk(b"MOVE 1 2\n"),
            chunk(b"GOTO nan\n"),
        ],
        1.0,
    );

    assert_eq!(rejected, 3);
    assert_eq!(moves, vec![ScreenPoint::new(1914, 1074)]);
}

#[test]
fn smoothing_starts_from_clamped_cursor_location() {
    let (moves, _) = run_session(vec![chunk(b"GOTO 1 1\n")], 0.25);

    // Start (0, 0) is pulled to (5, 5); a quarter of the gap to (1914, 1074).
    assert_eq!(moves, vec![ScreenPoint::new(482, 272)]);
}
