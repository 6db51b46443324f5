//! List serial ports and the one auto-detection would pick.

use serialpoint_common::config::AppConfig;
use serialpoint_serial_link::{matching_hint, select_port, PortEnumerator, SystemPortEnumerator};

pub fn run(config: &AppConfig, json: bool) -> anyhow::Result<()> {
    let ports = SystemPortEnumerator.ports()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&ports)?);
        return Ok(());
    }

    println!("Serial ports");
    println!("{}", "=".repeat(50));

    if ports.is_empty() {
        println!("No serial ports found. Connect the device and try again.");
        return Ok(());
    }

    let hints = &config.serial.port_hints;
    let selected = select_port(&ports, hints).map(|p| p.device.clone());

    for port in &ports {
        let marker = if selected.as_deref() == Some(port.device.as_str()) {
            "*"
        } else {
            " "
        };
        println!("{marker} {:<20} {}", port.device, port.description);
        if let Some(ref hwid) = port.hardware_id {
            println!("    {hwid}");
        }
        if let Some(hint) = matching_hint(&port.description, hints) {
            println!("    matches hint \"{hint}\"");
        }
    }

    println!();
    match config.serial.port {
        Some(ref explicit) => println!("Configured port overrides detection: {explicit}"),
        None => println!("* = port used when none is configured"),
    }
    Ok(())
}
