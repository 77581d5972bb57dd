//! Legality gate: blocklist first, then allowlist.
//!
//! A blocked keyword wins even when the question also names a supported
//! domain, so a proof request cannot slip through by mentioning 存在.

use crate::constants::BLOCKED_KEYWORDS;
use crate::domain::Domain;
use crate::error::GateError;

/// Check whether `question` may be answered. On success returns the trimmed
/// text the rest of the pipeline works with.
pub fn check_legal(question: &str) -> Result<&str, GateError> {
    let q = question.trim();
    if q.is_empty() {
        return Err(GateError::EmptyInput);
    }

    if let Some(keyword) = blocked_keyword(q) {
        return Err(GateError::BlockedTopic { keyword });
    }

    if Domain::first_match(&Domain::ALL, q).is_none() {
        return Err(GateError::UnsupportedDomain);
    }

    Ok(q)
}

/// First blocked keyword contained in `text`, in blocklist order.
pub fn blocked_keyword(text: &str) -> Option<&'static str> {
    BLOCKED_KEYWORDS.iter().copied().find(|kw| text.contains(kw))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_and_whitespace() {
        assert_eq!(check_legal(""), Err(GateError::EmptyInput));
        assert_eq!(check_legal("  \t\n "), Err(GateError::EmptyInput));
    }

    #[test]
    fn test_returns_trimmed() {
        assert_eq!(check_legal("  人为什么存在？ \n"), Ok("人为什么存在？"));
    }

    #[test]
    fn test_blocklist_precedence() {
        let err = check_legal("黎曼猜想的证明是什么？存在的意义是什么？").unwrap_err();
        assert_eq!(err, GateError::BlockedTopic { keyword: "黎曼猜想" });
    }

    #[test]
    fn test_reports_first_keyword_in_list_order() {
        // 定理 comes first in the text, 证明 comes first in the blocklist.
        let err = check_legal("定理和证明").unwrap_err();
        assert_eq!(err, GateError::BlockedTopic { keyword: "证明" });
    }

    #[test]
    fn test_blocked_without_domain() {
        let err = check_legal("哥德巴赫猜想").unwrap_err();
        assert_eq!(err, GateError::BlockedTopic { keyword: "哥德巴赫猜想" });
    }

    #[test]
    fn test_unsupported_domain() {
        assert_eq!(check_legal("今天吃什么？"), Err(GateError::UnsupportedDomain));
    }

    #[test]
    fn test_every_domain_is_admitted() {
        for d in Domain::ALL {
            let q = format!("什么是{}？", d.keyword());
            assert!(check_legal(&q).is_ok(), "{q} should be admitted");
        }
    }

    #[test]
    fn test_substring_match_not_word_match() {
        // "公理" is a substring of the longer phrase and is still caught.
        assert_eq!(blocked_keyword("存在公理化"), Some("公理"));
    }
}
