//! Model persistence: one pretty-printed JSON document per model file.
//!
//! The file is the durable source of truth between CLI invocations and
//! is meant to be diffable and hand-editable. Writes go through a
//! temporary sibling and a rename so a crash mid-write never leaves a
//! torn document behind.

use crate::model::AllocationModel;
use std::ffi::OsString;
use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

/// Read a model from `path`.
pub fn load_model(path: impl AsRef<Path>) -> Result<AllocationModel, StoreError> {
    let path = path.as_ref();
    let bytes =
        fs::read(path).map_err(|e| StoreError::Io(format!("{}: {e}", path.display())))?;
    parse_model(path, &bytes)
}

/// Read a model from `path`, treating a missing file as an empty model.
/// Every other failure still surfaces.
pub fn load_model_or_default(path: impl AsRef<Path>) -> Result<AllocationModel, StoreError> {
    let path = path.as_ref();
    match fs::read(path) {
        Ok(bytes) => parse_model(path, &bytes),
        Err(error) if error.kind() == io::ErrorKind::NotFound => Ok(AllocationModel::default()),
        Err(error) => Err(StoreError::Io(format!("{}: {error}", path.display()))),
    }
}

/// Write `model` to `path`, creating parent directories as needed.
pub fn save_model(path: impl AsRef<Path>, model: &AllocationModel) -> Result<(), StoreError> {
    let path = path.as_ref();
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)
            .map_err(|e| StoreError::Io(format!("{}: {e}", parent.display())))?;
    }

    let mut document = serde_json::to_vec_pretty(model)
        .map_err(|e| StoreError::Serialize(e.to_string()))?;
    document.push(b'\n');

    let tmp_path = tmp_write_path(path);
    let write_result = (|| -> Result<(), StoreError> {
        let mut file = File::create(&tmp_path)
            .map_err(|e| StoreError::Io(format!("{}: {e}", tmp_path.display())))?;
        file.write_all(&document)
            .map_err(|e| StoreError::Io(format!("{}: {e}", tmp_path.display())))?;
        file.sync_all()
            .map_err(|e| StoreError::Io(format!("{}: {e}", tmp_path.display())))?;
        Ok(())
    })();

    if let Err(error) = write_result {
        let _ = fs::remove_file(&tmp_path);
        return Err(error);
    }

    fs::rename(&tmp_path, path).map_err(|e| {
        let _ = fs::remove_file(&tmp_path);
        StoreError::Io(format!(
            "{} -> {}: {e}",
            tmp_path.display(),
            path.display()
        ))
    })?;

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        let dir = File::open(parent)
            .map_err(|e| StoreError::Io(format!("{}: {e}", parent.display())))?;
        dir.sync_all()
            .map_err(|e| StoreError::Io(format!("{}: {e}", parent.display())))?;
    }

    Ok(())
}

fn parse_model(path: &Path, bytes: &[u8]) -> Result<AllocationModel, StoreError> {
    validate_document_bytes(path, bytes)?;
    serde_json::from_slice(bytes)
        .map_err(|e| StoreError::Parse(format!("{}: {e}", path.display())))
}

fn validate_document_bytes(path: &Path, bytes: &[u8]) -> Result<(), StoreError> {
    if bytes.contains(&0) {
        return Err(StoreError::Corrupt(format!(
            "{}: contains NUL byte(s)",
            path.display()
        )));
    }
    if std::str::from_utf8(bytes).is_err() {
        return Err(StoreError::Corrupt(format!(
            "{}: contains non-UTF-8 byte sequence(s)",
            path.display()
        )));
    }
    Ok(())
}

fn tmp_write_path(path: &Path) -> PathBuf {
    let unique = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos();
    let mut tmp: OsString = path.as_os_str().to_os_string();
    tmp.push(format!(".tmp.{}.{}", std::process::id(), unique));
    PathBuf::from(tmp)
}

/// Errors from model file operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(String),

    #[error("parse error: {0}")]
    Parse(String),

    #[error("serialization error: {0}")]
    Serialize(String),

    #[error("corrupted model file: {0}")]
    Corrupt(String),
}
