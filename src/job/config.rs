use crate::job::types::JobStore;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Config directory not found")]
    ConfigDirNotFound,
}

pub type Result<T> = std::result::Result<T, StoreError>;

pub fn get_store_path() -> Result<PathBuf> {
    let config_dir = dirs::config_dir()
        .or_else(dirs::data_local_dir)
        .ok_or(StoreError::ConfigDirNotFound)?;

    let app_config_dir = config_dir.join("index-console");
    Ok(app_config_dir.join("jobs.json"))
}

pub fn ensure_store_dir() -> Result<PathBuf> {
    let store_path = get_store_path()?;
    if let Some(parent) = store_path.parent() {
        fs::create_dir_all(parent)?;
    }
    Ok(store_path)
}

pub fn load_store() -> Result<JobStore> {
    let store_path = get_store_path()?;

    if !store_path.exists() {
        return Ok(JobStore::new());
    }

    read_store(&store_path)
}

pub fn save_store(store: &JobStore) -> Result<()> {
    let store_path = ensure_store_dir()?;
    write_store(&store_path, store)
}

fn read_store(path: &Path) -> Result<JobStore> {
    let content = fs::read_to_string(path)?;
    let store: JobStore = serde_json::from_str(&content)?;
    Ok(store)
}

fn write_store(path: &Path, store: &JobStore) -> Result<()> {
    let json = serde_json::to_string_pretty(store)?;
    fs::write(path, json)?;
    Ok(())
}
