mod config;

pub use config::{Config, InputsConfig, ModelConfig, UiConfig};

use std::path::PathBuf;

/// Returns `~/.config/bedtime[-dev]/` based on BEDTIME_ENV.
///
/// Set BEDTIME_ENV=dev to use the development data directory.
///
/// # Errors
/// Returns an error if the config directory cannot be created.
pub fn data_dir() -> Result<PathBuf, std::io::Error> {
    let base_dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config");

    let env = std::env::var("BEDTIME_ENV").unwrap_or_else(|_| "production".to_string());

    let dir = if env == "dev" {
        base_dir.join("bedtime-dev")
    } else {
        base_dir.join("bedtime")
    };

    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}
