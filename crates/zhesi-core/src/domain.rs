/// Philosophical topic labels. A question must mention at least one to be
/// admitted, and the first few also select a dedicated answer template.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Domain {
    Existence,
    Consciousness,
    Truth,
    Freedom,
    Value,
    MeaningOfLife,
    Causality,
    SpaceTime,
    Selfhood,
    TrueNature,
}

impl Domain {
    /// Every domain, in admission-listing order.
    pub const ALL: [Domain; 10] = [
        Self::Existence,
        Self::Consciousness,
        Self::Truth,
        Self::Freedom,
        Self::Value,
        Self::MeaningOfLife,
        Self::Causality,
        Self::SpaceTime,
        Self::Selfhood,
        Self::TrueNature,
    ];

    /// Domains with their own answer template, in dispatch priority order.
    pub const TEMPLATED: [Domain; 4] = [
        Self::Existence,
        Self::Consciousness,
        Self::Freedom,
        Self::MeaningOfLife,
    ];

    /// The literal substring that marks a question as touching this domain.
    pub fn keyword(&self) -> &'static str {
        match self {
            Self::Existence => "存在",
            Self::Consciousness => "意识",
            Self::Truth => "真理",
            Self::Freedom => "自由",
            Self::Value => "价值",
            Self::MeaningOfLife => "人生意义",
            Self::Causality => "因果",
            Self::SpaceTime => "时空",
            Self::Selfhood => "自我",
            Self::TrueNature => "本心",
        }
    }

    pub fn mentioned_in(&self, text: &str) -> bool {
        text.contains(self.keyword())
    }

    /// First domain in `candidates` whose keyword occurs in `text`.
    pub fn first_match(candidates: &[Domain], text: &str) -> Option<Domain> {
        candidates.iter().copied().find(|d| d.mentioned_in(text))
    }

    /// Comma-separated keyword list for user-facing messages.
    pub fn keyword_list() -> String {
        Self::ALL
            .iter()
            .map(|d| d.keyword())
            .collect::<Vec<_>>()
            .join(", ")
    }
}
