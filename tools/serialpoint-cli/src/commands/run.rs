//! Follow cursor commands from the serial device.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use serialpoint_common::config::AppConfig;
use serialpoint_motion::SmoothingFactor;
use serialpoint_platform_core::{CursorActuator, DryRunActuator, ScreenSize};
use serialpoint_platform_desktop::EnigoActuator;
use serialpoint_serial_link::{locate_port, PointerBridge, SerialLineReader, SystemPortEnumerator};

use crate::RunArgs;

pub fn run(mut config: AppConfig, args: RunArgs) -> anyhow::Result<()> {
    if let Some(port) = args.port {
        config.serial.port = Some(port);
    }
    if let Some(baud) = args.baud {
        config.serial.baud_rate = baud;
    }
    if let Some(alpha) = args.alpha {
        config.motion.alpha = alpha;
    }
    if let Some(margin) = args.margin {
        config.motion.safe_margin = margin;
    }
    config.validate()?;
    let alpha = SmoothingFactor::new(config.motion.alpha)?;

    let device = match config.serial.port.clone() {
        Some(device) => device,
        None => match locate_port(&SystemPortEnumerator, &config.serial.port_hints)? {
            Some(port) => port.device,
            None => {
                println!("No serial ports found. Connect the device and try again.");
                return Ok(());
            }
        },
    };

    println!("Opening port: {device} @ {}", config.serial.baud_rate);
    let reader = SerialLineReader::open(
        &device,
        config.serial.baud_rate,
        Duration::from_millis(config.serial.timeout_ms),
    )?;

    let actuator: Box<dyn CursorActuator> = if args.dry_run {
        Box::new(DryRunActuator::new(ScreenSize::default()))
    } else {
        Box::new(EnigoActuator::new()?)
    };

    let stop_flag = Arc::new(AtomicBool::new(false));
    let handler_flag = stop_flag.clone();
    ctrlc::set_handler(move || {
        handler_flag.store(true, Ordering::SeqCst);
    })?;

    let margin = config.motion.safe_margin;
    let mut bridge =
        PointerBridge::new(Box::new(reader), actuator, alpha, margin)?.with_stop_flag(stop_flag);

    println!("Listening for 'GOTO x y'. Press Ctrl+C to exit.");
    let result = bridge.run();
    println!("\nExit.");

    let stats = result?;
    tracing::debug!(
        lines = stats.lines_read,
        rejected = stats.lines_rejected,
        moves = stats.moves,
        failures = stats.move_failures,
        "Session summary"
    );
    Ok(())
}
