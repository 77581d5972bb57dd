//! Writing trace exports to disk and reading them back.

use std::fs;
use std::path::{Path, PathBuf};

use zhesi_core::{ExportDocument, ThoughtEngine, export_json, import_json};

use crate::error::{Result, StoreError};

/// Outcome of a successful export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportSummary {
    pub record_count: usize,
    pub destination: PathBuf,
}

/// Export the engine's session metadata and full trace to `destination`.
///
/// Refuses an empty trace. The parent directory must already exist; a
/// failed write leaves the engine untouched so the caller can fix the
/// destination and retry.
pub fn export_all(engine: &ThoughtEngine, destination: &Path) -> Result<ExportSummary> {
    let doc = ExportDocument::from_engine(engine)?;
    write_document(&doc, destination)?;

    tracing::info!(
        "exported {} records from {} to {}",
        doc.session.record_count,
        doc.session.session_id,
        destination.display()
    );
    Ok(ExportSummary {
        record_count: doc.session.record_count,
        destination: destination.to_path_buf(),
    })
}

/// Serialize `doc` as UTF-8 JSON at `path`, replacing any existing file.
pub fn write_document(doc: &ExportDocument, path: &Path) -> Result<()> {
    let json = export_json(doc)
        .map_err(|e| StoreError::InvalidData(format!("JSON export failed: {e}")))?;
    fs::write(path, json).map_err(|e| StoreError::io(path, e))
}

/// Read and parse an export file.
pub fn load_export(path: &Path) -> Result<ExportDocument> {
    let json = fs::read_to_string(path).map_err(|e| StoreError::io(path, e))?;
    let doc = import_json(&json)
        .map_err(|e| StoreError::InvalidData(format!("{}: {e}", path.display())))?;

    if doc.session.record_count != doc.records.len() {
        tracing::warn!(
            "{}: header says {} records, file holds {}",
            path.display(),
            doc.session.record_count,
            doc.records.len()
        );
    }
    Ok(doc)
}
