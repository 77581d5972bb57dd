//! JSON serde for the trace export document.
//!
//! The document has two top-level sections: `session` metadata and the
//! ordered `records`. Field names are camelCase and non-ASCII text is
//! written verbatim.

use serde::{Deserialize, Serialize};

use crate::engine::ThoughtEngine;
use crate::error::{EngineError, Result};
use crate::record::ThinkRecord;
use crate::time::{now_unix_secs, unix_to_iso8601};

pub const CURRENT_VERSION: &str = "1.0";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportDocument {
    pub version: String,
    pub session: SessionInfo,
    pub records: Vec<ThinkRecord>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionInfo {
    #[serde(rename = "sessionId")]
    pub session_id: String,
    #[serde(rename = "startedAt")]
    pub started_at: String,
    #[serde(rename = "exportedAt")]
    pub exported_at: String,
    #[serde(rename = "recordCount")]
    pub record_count: usize,
    #[serde(rename = "cognitiveDepth")]
    pub cognitive_depth: u64,
}

impl ExportDocument {
    /// Snapshot the engine's session metadata and full trace.
    /// Fails with [`EngineError::EmptyTrace`] when there is nothing to export.
    pub fn from_engine(engine: &ThoughtEngine) -> Result<Self> {
        Self::from_engine_at(engine, unix_to_iso8601(now_unix_secs()))
    }

    pub fn from_engine_at(engine: &ThoughtEngine, exported_at: String) -> Result<Self> {
        let records = engine.trace();
        if records.is_empty() {
            return Err(EngineError::EmptyTrace);
        }
        Ok(Self {
            version: CURRENT_VERSION.to_string(),
            session: SessionInfo {
                session_id: engine.session_id().to_string(),
                started_at: engine.started_at().to_string(),
                exported_at,
                record_count: records.len(),
                cognitive_depth: engine.cognitive_depth(),
            },
            records: records.to_vec(),
        })
    }
}

/// Serialize an export document as pretty-printed JSON.
pub fn export_json(doc: &ExportDocument) -> std::result::Result<String, serde_json::Error> {
    serde_json::to_string_pretty(doc)
}

/// Parse an export document.
pub fn import_json(json: &str) -> std::result::Result<ExportDocument, serde_json::Error> {
    serde_json::from_str(json)
}
