//! Philosophy "black box" thought engine.
//!
//! Questions pass a legality gate (blocklist before allowlist), receive a
//! canned answer chosen by domain and cognitive depth, and are appended to an
//! immutable trace that can be looked up by id or exported.
//!
//! Zero I/O: exports are built here as documents; writing them is the
//! store's job.

pub mod answer;
pub mod constants;
pub mod domain;
pub mod engine;
pub mod error;
pub mod export;
pub mod gate;
pub mod record;
pub mod time;

pub use answer::{generate_answer, rationale};
pub use constants::{BLOCKED_KEYWORDS, DEFAULT_EXPORT_FILE, RECORD_ID_PREFIX, SESSION_ID_PREFIX};
pub use domain::Domain;
pub use engine::{AskResult, ThoughtEngine};
pub use error::{EngineError, GateError};
pub use export::{CURRENT_VERSION, ExportDocument, SessionInfo, export_json, import_json};
pub use gate::check_legal;
pub use record::{ThinkRecord, is_well_formed_id};
pub use time::{now_unix_secs, unix_micros_to_iso8601, unix_to_iso8601};
