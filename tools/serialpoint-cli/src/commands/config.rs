//! Show or write the effective configuration.

use serialpoint_common::config::{config_file_path, AppConfig};

pub fn run(config: &AppConfig, write: bool) -> anyhow::Result<()> {
    if write {
        let path = config.save()?;
        println!("Configuration written to {}", path.display());
        return Ok(());
    }

    let path = config_file_path();
    let origin = if !path.exists() {
        " (not present, defaults shown)"
    } else if AppConfig::load_from(&path).is_err() {
        " (unreadable, defaults shown)"
    } else {
        ""
    };
    println!("Config file: {}{origin}", path.display());
    println!("{}", serde_json::to_string_pretty(config)?);
    Ok(())
}
