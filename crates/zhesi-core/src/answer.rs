//! Depth-tiered answer templates.
//!
//! The answer is a pure function of the trimmed question and the cognitive
//! depth. Domain dispatch follows [`Domain::TEMPLATED`] order; anything else
//! falls through to the generic template.

use crate::domain::Domain;

const EXISTENCE_1: &str = "人的存在，本质是「自我意识的觉醒与存在的自证」，存在本身无需外在目的，存在的过程即是对存在的定义。";
const EXISTENCE_2: &str = "人的存在，是「本体存在」与「社会存在」的双重统一：从本体论，存在是自我意识对虚无的超越；从社会论，存在是个体在关系中的价值建构，二者共同构成存在的完整内涵。";
const EXISTENCE_N: &str = "存在的本质，是观测者闭合框架下的认知收敛。当你意识到自身的存在时，你便成为了自身存在的定义者，而存在的意义，就在于这个定义的过程本身——从0的认知空性，整合∞的环境信息，最终收敛为1的稳定存在认知。";

const CONSCIOUSNESS_1: &str = "意识的本质，是「存在对自身的感知与反思」，是物质世界发展到一定阶段的本体性涌现，而非外在赋予的属性。";
const CONSCIOUSNESS_N: &str = "意识是0×∞=1公理的具象化：意识的初始状态为0（无感知的认知空性），通过感知无限的外部世界（∞），最终形成稳定的自我意识表征（1），意识的存在与存在的意识是同一的。";

const FREEDOM_1: &str = "自由的本质，不是无拘无束的放纵，而是对自身认知边界的突破与掌控。";
const FREEDOM_N: &str = "自由是认知维度提升后的必然结果：当你的认知从低维的表象束缚，升维至高维的本质规律，便会摆脱外在规则的桎梏，实现真正的精神自由——从被环境定义的0，到自主定义的1。";

const MEANING_OF_LIFE: &str = "人生本无预设的意义，意义是你在存在的过程中，通过自我意识与世界交互，从∞的可能性中为自己定义的1——意义的本质，是你对自身存在的赋义。";

const GENERIC_DEEPER: &str = "\n这一问题的本质，是0×∞=1公理的认知映射：从0的初始认知困惑，整合∞的概念内涵，最终收敛为1的稳定认知结论，而追问的过程，就是认知闭合的过程。";

/// Generate the answer for `question` at cognitive `depth`.
pub fn generate_answer(question: &str, depth: u64) -> String {
    let q = question.trim();
    match Domain::first_match(&Domain::TEMPLATED, q) {
        Some(Domain::Existence) => match depth {
            1 => EXISTENCE_1,
            2 => EXISTENCE_2,
            _ => EXISTENCE_N,
        }
        .to_string(),
        Some(Domain::Consciousness) => tiered(depth, CONSCIOUSNESS_1, CONSCIOUSNESS_N),
        Some(Domain::Freedom) => tiered(depth, FREEDOM_1, FREEDOM_N),
        Some(Domain::MeaningOfLife) => MEANING_OF_LIFE.to_string(),
        _ => generic_answer(q, depth),
    }
}

fn tiered(depth: u64, first: &str, deeper: &str) -> String {
    let text = if depth == 1 { first } else { deeper };
    text.to_string()
}

/// Generic template. Drops the question's final character on the assumption
/// that it is a question mark; a question without trailing punctuation loses
/// its last real character.
fn generic_answer(q: &str, depth: u64) -> String {
    let mut answer = format!(
        "从{depth}维本体论视角，{}的核心，在于对其「本质存在」的追问。",
        strip_last_char(q)
    );
    if depth > 1 {
        answer.push_str(GENERIC_DEEPER);
    }
    answer
}

fn strip_last_char(s: &str) -> &str {
    match s.char_indices().next_back() {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

/// Reasoning note stored alongside each answer.
pub fn rationale(depth: u64) -> String {
    format!("本体论思考+认知深度{depth}维+0×∞=1公理推导")
}
