/// Prefix of every think record identifier.
pub const RECORD_ID_PREFIX: &str = "think_";

/// Prefix of the session identifier; the creation time in Unix seconds follows.
pub const SESSION_ID_PREFIX: &str = "zhesi_blackbox_";

/// Keywords that close the engine to mathematical proofs and open problems.
/// Order matters: the first match is the one reported.
pub const BLOCKED_KEYWORDS: [&str; 17] = [
    "黎曼猜想",
    "哥德巴赫猜想",
    "NP完全问题",
    "霍奇猜想",
    "BSD猜想",
    "纳维-斯托克斯",
    "杨-米尔斯",
    "庞加莱猜想",
    "数学难题",
    "数学猜想",
    "证明",
    "推导",
    "证伪",
    "公理",
    "定理",
    "公式推导",
    "数学求解",
];

/// Default file name for trace exports.
pub const DEFAULT_EXPORT_FILE: &str = "zhesi_blackbox_records.json";
