use crate::answer::{generate_answer, rationale};
use crate::constants::SESSION_ID_PREFIX;
use crate::error::{EngineError, Result};
use crate::gate::check_legal;
use crate::record::{ThinkRecord, is_well_formed_id};
use crate::time::{now_unix_secs, unix_to_iso8601};

/// What a successful `ask` hands back to the caller.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AskResult {
    pub question: String,
    pub answer: String,
    pub depth: u64,
    pub rationale: String,
    pub record_id: String,
}

/// Output of the thinking step, before it is recorded.
struct Thought {
    answer: String,
    depth: u64,
    rationale: String,
}

/// Stateful answer engine with an append-only trace.
///
/// Every successful [`ask`](Self::ask) bumps the cognitive depth by one and
/// appends exactly one [`ThinkRecord`]; a failed call changes nothing.
/// Resetting the depth leaves the trace alone.
#[derive(Debug)]
pub struct ThoughtEngine {
    session_id: String,
    started_at: String,
    recording: bool,
    depth: u64,
    trace: Vec<ThinkRecord>,
}

impl ThoughtEngine {
    pub fn new() -> Self {
        let secs = now_unix_secs();
        Self {
            session_id: format!("{SESSION_ID_PREFIX}{secs}"),
            started_at: unix_to_iso8601(secs),
            recording: true,
            depth: 0,
            trace: Vec::new(),
        }
    }

    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    pub fn started_at(&self) -> &str {
        &self.started_at
    }

    pub fn is_recording(&self) -> bool {
        self.recording
    }

    pub fn cognitive_depth(&self) -> u64 {
        self.depth
    }

    /// All records, oldest first.
    pub fn trace(&self) -> &[ThinkRecord] {
        &self.trace
    }

    /// Validate, think, record. All checks run before the first mutation.
    pub fn ask(&mut self, question: &str) -> Result<AskResult> {
        let q = check_legal(question)?;
        if !self.recording {
            return Err(EngineError::RecordingPaused);
        }

        let thought = self.think(q);
        let record = self.record_think(q, thought);

        Ok(AskResult {
            question: record.question.clone(),
            answer: record.answer.clone(),
            depth: record.depth,
            rationale: record.rationale.clone(),
            record_id: record.id.clone(),
        })
    }

    fn think(&mut self, question: &str) -> Thought {
        self.depth += 1;
        Thought {
            answer: generate_answer(question, self.depth),
            depth: self.depth,
            rationale: rationale(self.depth),
        }
    }

    fn record_think(&mut self, question: &str, thought: Thought) -> &ThinkRecord {
        let record = ThinkRecord::new(question, thought.answer, thought.depth, thought.rationale);
        self.trace.push(record);
        &self.trace[self.trace.len() - 1]
    }

    /// Look up a record by id. Scans in insertion order.
    pub fn trace_by_id(&self, id: &str) -> Result<&ThinkRecord> {
        if !is_well_formed_id(id) {
            return Err(EngineError::MalformedId(id.to_string()));
        }
        self.trace
            .iter()
            .find(|r| r.id == id)
            .ok_or_else(|| EngineError::NotFound(id.to_string()))
    }

    pub fn reset_cognitive_depth(&mut self) {
        self.depth = 0;
    }

    pub fn pause_recording(&mut self) {
        self.recording = false;
    }

    pub fn resume_recording(&mut self) {
        self.recording = true;
    }
}

impl Default for ThoughtEngine {
    fn default() -> Self {
        Self::new()
    }
}
