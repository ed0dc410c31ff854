// All LLM prompt templates for the Matching module.
// Placeholders are `{name}` and are filled by `render` in a single pass before sending.
// Reuses the question-format fragments from llm_client::prompts.

/// Stage 1. Replace `{resume_text}`.
pub const RESUME_ANALYSIS_TEMPLATE: &str = "\
Extract the following from this resume:
- Key Skills
- Experience Summary
- Education
- Certifications

Resume:
{resume_text}
";

/// Stage 2. Replace `{job_description_text}`.
pub const JOB_ANALYSIS_TEMPLATE: &str = "\
Extract the following from this job description:
- Required Skills
- Experience Requirements
- Education Requirements

Job Description:
{job_description_text}
";

/// Stage 3. Replace `{resume_data}`, `{job_data}`.
pub const MATCHING_TEMPLATE: &str = "\
Compare the following resume and job description and provide:
- Match Score (0-100%)
- Missing Skills
- Overqualified Skills
- Compatibility Analysis in around 5 bulleted sentences.

Resume Data:
{resume_data}

Job Description Data:
{job_data}
";

/// Stage 4. Replace `{match_score}`, `{resume_data}`, `{job_data}`.
pub const QUESTION_GENERATION_TEMPLATE: &str = "\
Based on the resume and job description below, and a match score of {match_score}, generate 5 relevant interview questions.

Resume Data:
{resume_data}

Job Description Data:
{job_data}
";

/// Difficulty-tiered questions for `/api/match`.
/// Replace `{tiers}`, `{format}`, `{resume_text}`, `{job_description_text}`.
pub const TIERED_QUESTIONS_TEMPLATE: &str = "\
Based on the resume and job description, generate interview questions in three difficulty levels:
{tiers}

Format your response exactly like this:
{format}

Resume: {resume_text}
Job Description: {job_description_text}
";

/// Fresh questions for `/api/more-questions`.
/// Replace `{tiers}`, `{format}`, `{resume_text}`, `{job_description_text}`.
pub const MORE_QUESTIONS_TEMPLATE: &str = "\
Generate exactly 5 new interview questions with specific difficulty levels:
{tiers}

Format your response EXACTLY like this:
{format}

Note: Make these questions unique and different from typical questions.
Base questions on this context:

Resume: {resume_text}
Job Description: {job_description_text}
";

/// Answer feedback for `/api/evaluate`. Replace `{question}`, `{answer}`.
pub const EVALUATION_TEMPLATE: &str = "\
Evaluate this interview answer and provide feedback in this exact format:

Overall Score: [Give a score out of 10]

Strengths:
• [Key strength point 1]
• [Key strength point 2]

Areas for Improvement:
• [Improvement point 1]
• [Improvement point 2]

Quick Tip: [One short, actionable improvement tip]

Question: {question}
Answer: {answer}

Base your evaluation on:
- Relevance to the question
- Completeness of response
- Technical accuracy
- Communication clarity
";

/// Fills `{name}` placeholders in a single pass.
///
/// Substituted values are never re-scanned, so resume or job text that
/// happens to contain `{job_description_text}` is sent verbatim. Unknown
/// placeholders are left in place.
pub fn render(template: &str, vars: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after_open = &rest[open + 1..];
        let Some(close) = after_open.find('}') else {
            out.push_str(&rest[open..]);
            rest = "";
            break;
        };
        let key = &after_open[..close];
        match vars.iter().find(|(name, _)| *name == key) {
            Some((_, value)) => out.push_str(value),
            None => out.push_str(&rest[open..open + close + 2]),
        }
        rest = &after_open[close + 1..];
    }

    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_fills_every_placeholder() {
        let prompt = render(
            MATCHING_TEMPLATE,
            &[("resume_data", "Rust, Go"), ("job_data", "Rust required")],
        );
        assert!(prompt.contains("Resume Data:\nRust, Go"));
        assert!(prompt.contains("Job Description Data:\nRust required"));
        assert!(!prompt.contains("{resume_data}"));
        assert!(!prompt.contains("{job_data}"));
    }

    #[test]
    fn test_render_does_not_rescan_substituted_text() {
        let prompt = render(
            "R: {resume_text} J: {job_description_text}",
            &[
                ("resume_text", "see {job_description_text}"),
                ("job_description_text", "Backend role"),
            ],
        );
        assert_eq!(prompt, "R: see {job_description_text} J: Backend role");
    }

    #[test]
    fn test_render_keeps_unknown_and_unclosed_braces() {
        assert_eq!(render("a {unknown} b", &[]), "a {unknown} b");
        assert_eq!(render("fn main() {", &[]), "fn main() {");
    }

    #[test]
    fn test_evaluation_template_names_feedback_sections() {
        for section in ["Overall Score", "Strengths", "Areas for Improvement", "Quick Tip"] {
            assert!(EVALUATION_TEMPLATE.contains(section), "missing {section}");
        }
    }
}
