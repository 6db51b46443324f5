//! Replay captured device output against a virtual screen.

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

use anyhow::Context;
use serialpoint_common::config::AppConfig;
use serialpoint_motion::SmoothingFactor;
use serialpoint_platform_core::{DryRunActuator, ScreenSize};
use serialpoint_serial_link::{LineSource, PointerBridge, TextLineSource};

pub fn run(
    config: AppConfig,
    path: PathBuf,
    width: u32,
    height: u32,
    alpha: Option<f64>,
    margin: Option<u32>,
) -> anyhow::Result<()> {
    let alpha = SmoothingFactor::new(alpha.unwrap_or(config.motion.alpha))?;
    let margin = margin.unwrap_or(config.motion.safe_margin);

    let source: Box<dyn LineSource> = if path.as_os_str() == "-" {
        Box::new(TextLineSource::new(std::io::stdin().lock()))
    } else {
        let file = File::open(&path).with_context(|| format!("Failed to open {:?}", path))?;
        Box::new(TextLineSource::new(BufReader::new(file)))
    };

    let screen = ScreenSize::new(width, height);
    let mut bridge = PointerBridge::new(source, DryRunActuator::new(screen), alpha, margin)?;
    let stats = bridge.run()?;

    for (i, point) in bridge.actuator().moves().iter().enumerate() {
        println!("{:>6}  {}", i + 1, point);
    }

    println!();
    println!("Screen: {}x{} (margin {margin}, alpha {})", width, height, alpha.get());
    println!(
        "Lines: {}  rejected: {}  moves: {}",
        stats.lines_read, stats.lines_rejected, stats.moves
    );
    Ok(())
}
