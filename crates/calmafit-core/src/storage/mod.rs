mod blob;
mod config;
pub mod store;

pub use blob::{FileBlob, MemoryBlob, StorageBlob};
pub use config::{ChatConfig, Config, ReminderConfig};
pub use store::{ProfileStore, RecordPatch};

use std::path::PathBuf;

use crate::error::StoreError;

/// Returns `~/.config/calmafit[-dev]/` based on CALMAFIT_ENV.
///
/// Set CALMAFIT_ENV=dev to use the development data directory.
///
/// # Errors
/// Returns an error if creating the data directory fails.
pub fn data_dir() -> Result<PathBuf, StoreError> {
    let base_dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config");

    let env = std::env::var("CALMAFIT_ENV").unwrap_or_else(|_| "production".to_string());

    let dir = if env == "dev" {
        base_dir.join("calmafit-dev")
    } else {
        base_dir.join("calmafit")
    };

    std::fs::create_dir_all(&dir).map_err(|source| StoreError::DataDir {
        path: dir.clone(),
        source,
    })?;
    Ok(dir)
}
