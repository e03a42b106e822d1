//! Configuration backup download

use std::fs;
use std::path::{Path, PathBuf};

use bytes::Bytes;

use crate::config::Config;
use crate::error::Result;
use crate::network::{Session, Transport};
use super::queries::CONFIG_BACKUP_PATH;

/// Fetch the encrypted configuration image as-is
pub fn download_config_backup<T: Transport>(session: &Session<T>) -> Result<Bytes> {
    let body = session.get(CONFIG_BACKUP_PATH)?;
    tracing::debug!("Downloaded configuration backup ({} bytes)", body.len());
    Ok(body)
}

/// Download the backup and write it into `dir` (current directory if `None`)
///
/// Returns the path of the written file.
pub fn save_config_backup<T: Transport>(
    session: &Session<T>,
    config: &Config,
    dir: Option<&Path>,
) -> Result<PathBuf> {
    let path = match dir {
        Some(dir) => dir.join(&config.backup_file_name),
        None => PathBuf::from(&config.backup_file_name),
    };

    let body = download_config_backup(session)?;
    fs::write(&path, &body)?;

    tracing::info!("Configuration backup saved to {}", path.display());
    Ok(path)
}
