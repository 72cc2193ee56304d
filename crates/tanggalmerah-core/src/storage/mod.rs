//! Configuration storage.

mod config;

pub use config::{ApiConfig, Config, PlannerConfig};

use std::path::PathBuf;

/// Returns `~/.config/tanggalmerah[-dev]/` based on TANGGALMERAH_ENV.
///
/// Set TANGGALMERAH_ENV=dev to use a separate development directory.
///
/// # Errors
/// Returns an error if the directory cannot be created.
pub fn data_dir() -> std::io::Result<PathBuf> {
    let base_dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config");

    let env = std::env::var("TANGGALMERAH_ENV").unwrap_or_else(|_| "production".to_string());

    let dir = if env == "dev" {
        base_dir.join("tanggalmerah-dev")
    } else {
        base_dir.join("tanggalmerah")
    };

    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}
