// Shared prompt fragments.
// Each service that needs LLM calls defines its own prompts.rs alongside it.
// This file contains cross-cutting fragments.

/// The three difficulty tiers requested from the model, with their one-line briefs.
/// `lead` prefixes every line, e.g. `"Generate "` or `""`.
pub fn difficulty_tiers(lead: &str) -> String {
    format!(
        "{lead}2 Easy questions: Basic concepts and fundamentals\n\
         {lead}2 Medium questions: Intermediate concepts and practical applications\n\
         {lead}1 Hard question: Advanced concepts and complex problem-solving"
    )
}

/// Output layout understood by `matching::parser::parse_questions`.
/// Header lines must stay exactly `Easy:`, `Medium:` and `Hard:`.
pub const QUESTION_FORMAT: &str = "\
Easy:
First easy question
Second easy question

Medium:
First medium question
Second medium question

Hard:
Hard question";
