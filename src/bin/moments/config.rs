//! Data-directory resolution for the CLI.

use std::env;
use std::fs;
use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::Deserialize;

const CONFIG_FILE: &str = "moments.toml";
const DATA_DIR_ENV: &str = "MOMENTS_DATA_DIR";
const DEFAULT_DATA_DIR: &str = ".moments";

#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    storage: StorageSection,
}

#[derive(Debug, Default, Deserialize)]
struct StorageSection {
    data_dir: Option<PathBuf>,
}

/// Resolution order: `--data-dir` flag, `MOMENTS_DATA_DIR`, `moments.toml`
/// in the working directory, then the default `./.moments`.
pub fn resolve_data_dir(flag: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(dir) = flag {
        return Ok(dir);
    }
    if let Ok(dir) = env::var(DATA_DIR_ENV)
        && !dir.is_empty()
    {
        return Ok(PathBuf::from(dir));
    }
    if let Some(dir) = config_file_data_dir()? {
        return Ok(dir);
    }
    Ok(PathBuf::from(DEFAULT_DATA_DIR))
}

fn config_file_data_dir() -> Result<Option<PathBuf>> {
    let raw = match fs::read_to_string(CONFIG_FILE) {
        Ok(raw) => raw,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(err) => return Err(err).context("reading moments.toml"),
    };
    let config: ConfigFile = toml::from_str(&raw).context("parsing moments.toml")?;
    Ok(config.storage.data_dir)
}
