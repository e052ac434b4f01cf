//! JSON output writing.
//!
//! The issues document is rendered with four-space indentation and written
//! through a temporary file in the destination directory, then renamed into
//! place. A failed write leaves any previous document untouched.

use crate::error::PersistError;
use crate::models::IssueRecord;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::debug;

/// Contents of the last-update stamp file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LastUpdate {
    /// When the issues document was last written.
    pub last_updated: DateTime<Utc>,
    /// Number of issues in that document.
    pub issue_count: usize,
}

/// Render a value as pretty JSON with four-space indentation.
///
/// Non-ASCII text is written as-is, never `\u` escaped.
fn render_pretty<T: Serialize + ?Sized>(value: &T) -> Result<Vec<u8>, PersistError> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut serializer)?;
    buf.push(b'\n');
    Ok(buf)
}

/// Render the issues document as UTF-8 bytes.
pub fn render_issues(records: &[IssueRecord]) -> Result<Vec<u8>, PersistError> {
    render_pretty(records)
}

/// Write `contents` to `path`, creating missing parent directories.
pub fn write_atomic(path: &Path, contents: &[u8]) -> Result<(), PersistError> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };

    fs::create_dir_all(&parent).map_err(|source| PersistError::CreateDir {
        path: parent.clone(),
        source,
    })?;

    let write_err = |source| PersistError::Write {
        path: path.to_path_buf(),
        source,
    };

    let mut tmp = NamedTempFile::new_in(&parent).map_err(write_err)?;
    tmp.write_all(contents).map_err(write_err)?;
    tmp.as_file().sync_all().map_err(write_err)?;

    // Temp files are created owner-only. A replaced file keeps its mode.
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let permissions = match fs::metadata(path) {
            Ok(existing) if existing.is_file() => existing.permissions(),
            _ => fs::Permissions::from_mode(0o644),
        };
        tmp.as_file().set_permissions(permissions).map_err(write_err)?;
    }

    debug!("Renaming {} -> {}", tmp.path().display(), path.display());
    tmp.persist(path).map_err(|e| write_err(e.error))?;

    Ok(())
}

/// Render and write the issues document.
pub fn write_issues(path: &Path, records: &[IssueRecord]) -> Result<(), PersistError> {
    let content = render_issues(records)?;
    write_atomic(path, &content)
}

/// Write the last-update stamp.
pub fn write_last_update(
    path: &Path,
    issue_count: usize,
    now: DateTime<Utc>,
) -> Result<(), PersistError> {
    let stamp = LastUpdate {
        last_updated: now,
        issue_count,
    };
    let content = render_pretty(&stamp)?;
    write_atomic(path, &content)
}
