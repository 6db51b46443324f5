//! Serial port discovery.
//!
//! The device is usually an ESP32 behind a USB-serial bridge chip. Ports are
//! ranked by their OS-provided description: the first one mentioning a known
//! bridge/board hint wins, otherwise the first port is used.

use serde::{Deserialize, Serialize};
use serialport::SerialPortType;

use serialpoint_common::error::{SerialpointError, SerialpointResult};

/// A serial port as reported by the OS.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortDescriptor {
    /// Path or name used to open the port (`/dev/ttyUSB0`, `COM3`).
    pub device: String,

    /// Human-readable description, matched against hints.
    pub description: String,

    /// USB vendor/product ids, when the port is USB-backed.
    pub hardware_id: Option<String>,
}

impl PortDescriptor {
    pub fn new(device: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            device: device.into(),
            description: description.into(),
            hardware_id: None,
        }
    }
}

/// Source of the system's serial ports.
pub trait PortEnumerator {
    /// List available ports in OS enumeration order.
    fn ports(&self) -> SerialpointResult<Vec<PortDescriptor>>;
}

/// Enumerates real ports through `serialport`.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemPortEnumerator;

impl PortEnumerator for SystemPortEnumerator {
    fn ports(&self) -> SerialpointResult<Vec<PortDescriptor>> {
        let ports = serialport::available_ports()
            .map_err(|e| SerialpointError::serial(format!("Failed to enumerate ports: {e}")))?;

        Ok(ports
            .into_iter()
            .map(|info| {
                let (description, hardware_id) = match info.port_type {
                    SerialPortType::UsbPort(usb) => {
                        let description = [usb.manufacturer, usb.product]
                            .into_iter()
                            .flatten()
                            .collect::<Vec<_>>()
                            .join(" ");
                        let description = if description.is_empty() {
                            "n/a".to_string()
                        } else {
                            description
                        };
                        (
                            description,
                            Some(format!("USB VID:PID={:04X}:{:04X}", usb.vid, usb.pid)),
                        )
                    }
                    SerialPortType::PciPort => ("PCI serial port".to_string(), None),
                    SerialPortType::BluetoothPort => ("Bluetooth serial port".to_string(), None),
                    SerialPortType::Unknown => ("n/a".to_string(), None),
                };
                PortDescriptor {
                    device: info.port_name,
                    description,
                    hardware_id,
                }
            })
            .collect())
    }
}

/// First hint found in `description`, compared case-insensitively.
pub fn matching_hint<'h>(description: &str, hints: &'h [String]) -> Option<&'h str> {
    let description = description.to_lowercase();
    hints
        .iter()
        .map(String::as_str)
        .filter(|hint| !hint.is_empty())
        .find(|hint| description.contains(&hint.to_lowercase()))
}

/// Pick the device port from `ports`.
///
/// The first port whose description matches any hint wins, in enumeration
/// order. Without a match the first port is returned; `None` only when
/// `ports` is empty.
pub fn select_port<'a>(
    ports: &'a [PortDescriptor],
    hints: &[String],
) -> Option<&'a PortDescriptor> {
    ports
        .iter()
        .find(|port| matching_hint(&port.description, hints).is_some())
        .or_else(|| ports.first())
}

/// Enumerate ports and select the device port.
pub fn locate_port(
    enumerator: &dyn PortEnumerator,
    hints: &[String],
) -> SerialpointResult<Option<PortDescriptor>> {
    let ports = enumerator.ports()?;
    tracing::debug!(count = ports.len(), "Enumerated serial ports");

    let selected = select_port(&ports, hints).cloned();
    if let Some(ref port) = selected {
        tracing::debug!(
            device = %port.device,
            description = %port.description,
            "Selected serial port"
        );
    }
    Ok(selected)
}
