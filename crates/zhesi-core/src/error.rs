use std::fmt;

/// Why the legality gate turned a question away.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GateError {
    /// Nothing left after trimming whitespace.
    EmptyInput,
    /// The question touches a mathematical proof or open problem.
    BlockedTopic { keyword: &'static str },
    /// The question mentions none of the supported domains.
    UnsupportedDomain,
}

impl fmt::Display for GateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GateError::EmptyInput => write!(f, "question is empty"),
            GateError::BlockedTopic { keyword } => {
                write!(f, "blocked topic: questions about [{keyword}] are refused")
            }
            GateError::UnsupportedDomain => write!(
                f,
                "unsupported domain: the question must mention one of {}",
                crate::domain::Domain::keyword_list()
            ),
        }
    }
}

impl std::error::Error for GateError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    Rejected(GateError),
    RecordingPaused,
    MalformedId(String),
    NotFound(String),
    EmptyTrace,
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineError::Rejected(e) => write!(f, "{e}"),
            EngineError::RecordingPaused => {
                write!(f, "recording is paused; resume it before asking")
            }
            EngineError::MalformedId(id) => write!(
                f,
                "malformed record id [{id}]: expected {}<suffix>",
                crate::constants::RECORD_ID_PREFIX
            ),
            EngineError::NotFound(id) => write!(f, "no record with id [{id}]"),
            EngineError::EmptyTrace => write!(f, "trace is empty, nothing to export"),
        }
    }
}

impl std::error::Error for EngineError {}

impl From<GateError> for EngineError {
    fn from(e: GateError) -> Self {
        EngineError::Rejected(e)
    }
}

pub type Result<T> = std::result::Result<T, EngineError>;
