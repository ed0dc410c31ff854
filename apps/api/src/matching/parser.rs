//! Response Parser — turns free-text model output into structured records.
//!
//! Question lists are read with a small state machine: a difficulty header
//! (`Easy:`, `Medium:`, `Hard:`) switches the running section, and every
//! other non-blank line becomes a question tagged with that section. Lines
//! seen before any header carry no difficulty.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Score reported when the matching text has no `NN%` figure.
pub const SCORE_NOT_AVAILABLE: &str = "N/A";

static PERCENTAGE: Lazy<Regex> = Lazy::new(|| {
    // Literal pattern, always valid.
    Regex::new(r"(\d{1,3})\s*%").expect("percentage pattern compiles")
});

/// Characters stripped from the start of a question line.
const BULLET_CHARS: &[char] = &['-', '•', ' '];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// Recognises a header line (already trimmed), case-insensitively.
    fn from_header(line: &str) -> Option<Self> {
        if line.eq_ignore_ascii_case("easy:") {
            Some(Difficulty::Easy)
        } else if line.eq_ignore_ascii_case("medium:") {
            Some(Difficulty::Medium)
        } else if line.eq_ignore_ascii_case("hard:") {
            Some(Difficulty::Hard)
        } else {
            None
        }
    }
}

/// One generated interview question.
/// `difficulty` serializes as `null` when no header preceded the line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterviewQuestion {
    pub question: String,
    pub difficulty: Option<Difficulty>,
}

/// Parser state: which header, if any, was seen most recently.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Section {
    #[default]
    NoSection,
    Easy,
    Medium,
    Hard,
}

impl Section {
    fn difficulty(self) -> Option<Difficulty> {
        match self {
            Section::NoSection => None,
            Section::Easy => Some(Difficulty::Easy),
            Section::Medium => Some(Difficulty::Medium),
            Section::Hard => Some(Difficulty::Hard),
        }
    }
}

impl From<Difficulty> for Section {
    fn from(difficulty: Difficulty) -> Self {
        match difficulty {
            Difficulty::Easy => Section::Easy,
            Difficulty::Medium => Section::Medium,
            Difficulty::Hard => Section::Hard,
        }
    }
}

/// Advances the parser by one raw line. Pure and total.
pub fn step(state: Section, line: &str) -> (Section, Option<InterviewQuestion>) {
    let line = line.trim();
    if line.is_empty() {
        return (state, None);
    }

    if let Some(difficulty) = Difficulty::from_header(line) {
        return (difficulty.into(), None);
    }

    // Any other `Something:` line is a label, not a question.
    if line.ends_with(':') {
        return (state, None);
    }

    let question = line.trim_start_matches(BULLET_CHARS).trim_end();
    if question.is_empty() {
        return (state, None);
    }

    (
        state,
        Some(InterviewQuestion {
            question: question.to_string(),
            difficulty: state.difficulty(),
        }),
    )
}

/// Parses a difficulty-tagged question list, preserving model order.
/// No count is enforced; whatever the model returned is emitted.
pub fn parse_questions(text: &str) -> Vec<InterviewQuestion> {
    let mut state = Section::NoSection;
    let mut questions = Vec::new();

    for line in text.lines() {
        let (next, question) = step(state, line);
        state = next;
        questions.extend(question);
    }

    questions
}

/// Extracts the first `NN%` figure as text, or `"N/A"`.
pub fn extract_match_percentage(text: &str) -> String {
    PERCENTAGE
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .unwrap_or_else(|| SCORE_NOT_AVAILABLE.to_string())
}

/// Splits an untagged question block into lines, bullets stripped from both ends.
pub fn split_question_lines(text: &str) -> Vec<String> {
    text.lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| line.trim_matches(BULLET_CHARS).to_string())
        .collect()
}
