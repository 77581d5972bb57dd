use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::constants::RECORD_ID_PREFIX;
use crate::time::{now_unix_micros, unix_micros_to_iso8601};

/// One answered question, frozen at the moment it was recorded.
///
/// Records are only ever handed out by shared reference from the engine's
/// trace, so once appended they cannot change.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThinkRecord {
    #[serde(rename = "thinkId")]
    pub id: String,
    #[serde(rename = "createdAt")]
    pub created_at: String,
    pub question: String,
    pub answer: String,
    /// Cognitive depth right after this question incremented it.
    #[serde(rename = "cognitiveDepth")]
    pub depth: u64,
    pub rationale: String,
    #[serde(rename = "depthTransition")]
    pub depth_transition: String,
}

impl ThinkRecord {
    pub fn new(question: &str, answer: String, depth: u64, rationale: String) -> Self {
        let micros = now_unix_micros();
        Self {
            id: new_record_id(micros),
            created_at: unix_micros_to_iso8601(micros),
            question: question.to_string(),
            answer,
            depth,
            rationale,
            depth_transition: depth_transition(depth),
        }
    }
}

/// `think_<unix millis>_<random token>`. The millisecond part keeps ids
/// roughly ordered; the token keeps two ids minted in the same millisecond
/// apart.
pub fn new_record_id(unix_micros: u64) -> String {
    format!(
        "{RECORD_ID_PREFIX}{}_{}",
        unix_micros / 1000,
        Uuid::new_v4().simple()
    )
}

/// Whether `id` has the shape of a record id: the fixed prefix followed by a
/// non-empty suffix. The suffix is opaque; its characters are not checked.
pub fn is_well_formed_id(id: &str) -> bool {
    id.strip_prefix(RECORD_ID_PREFIX)
        .is_some_and(|suffix| !suffix.is_empty())
}

fn depth_transition(depth: u64) -> String {
    format!("认知深度从{}提升至{}", depth.saturating_sub(1), depth)
}
