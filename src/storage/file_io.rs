//! Reading and writing the expense data file
//!
//! Writes go to a sibling temp file that is synced and renamed over the
//! target, so a crash leaves either the old or the new document.

use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::error::ExpenseError;
use crate::models::ExpenseItem;

/// Read the expense array, `None` when the file does not exist
///
/// A file that exists but does not parse is an `ExpenseError::Json`.
pub fn read_expenses(path: &Path) -> Result<Option<Vec<ExpenseItem>>, ExpenseError> {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(e) => {
            return Err(ExpenseError::Storage(format!(
                "Failed to read {}: {}",
                path.display(),
                e
            )))
        }
    };

    serde_json::from_str(&contents)
        .map(Some)
        .map_err(|e| ExpenseError::Json(format!("Failed to parse {}: {}", path.display(), e)))
}

/// Replace the data file with `items` as a pretty-printed JSON array
pub fn write_expenses(path: &Path, items: &[ExpenseItem]) -> Result<(), ExpenseError> {
    let document = serde_json::to_string_pretty(items)?;

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let tmp = tmp_path(path);
    if let Err(e) = write_synced(&tmp, document.as_bytes()).and_then(|_| fs::rename(&tmp, path)) {
        let _ = fs::remove_file(&tmp);
        return Err(ExpenseError::Storage(format!(
            "Failed to write {}: {}",
            path.display(),
            e
        )));
    }

    Ok(())
}

/// Move an unreadable data file out of the way
///
/// The file is renamed to `<name>.corrupt-<timestamp>` next to the original,
/// so the next load finds no file instead of the same bad one. Returns the
/// new location.
pub fn quarantine(path: &Path) -> Result<PathBuf, ExpenseError> {
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "expenses.json".to_string());
    let stamp = chrono::Utc::now().format("%Y%m%d%H%M%S");

    let mut target = path.with_file_name(format!("{}.corrupt-{}", file_name, stamp));
    let mut attempt = 1;
    while target.exists() {
        target = path.with_file_name(format!("{}.corrupt-{}-{}", file_name, stamp, attempt));
        attempt += 1;
    }

    fs::rename(path, &target).map_err(|e| {
        ExpenseError::Storage(format!(
            "Failed to move {} to {}: {}",
            path.display(),
            target.display(),
            e
        ))
    })?;

    Ok(target)
}

fn tmp_path(path: &Path) -> PathBuf {
    path.with_extension("json.tmp")
}

fn write_synced(path: &Path, bytes: &[u8]) -> io::Result<()> {
    let mut file = File::create(path)?;
    file.write_all(bytes)?;
    file.sync_all()
}
