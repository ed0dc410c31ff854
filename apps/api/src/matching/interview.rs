//! Interview operations — the units of work behind each API endpoint.
//!
//! Each function takes the injected model client and a request body and
//! returns a typed result; HTTP status mapping happens in `AppError`.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::{debug, info};

use crate::errors::AppError;
use crate::llm_client::prompts::{difficulty_tiers, QUESTION_FORMAT};
use crate::llm_client::GenerativeClient;
use crate::matching::parser::{parse_questions, InterviewQuestion};
use crate::matching::pipeline::MatchPipeline;
use crate::matching::prompts::{
    render, EVALUATION_TEMPLATE, MORE_QUESTIONS_TEMPLATE, TIERED_QUESTIONS_TEMPLATE,
};

// ────────────────────────────────────────────────────────────────────────────
// Data models
// ────────────────────────────────────────────────────────────────────────────

/// Body of `/api/match` and `/api/more-questions`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchRequest {
    pub resume_text: String,
    pub job_description_text: String,
    /// Accepted for client compatibility and never inspected; prompts always
    /// ask for 2/2/1. Any JSON value is taken as-is.
    #[allow(dead_code)]
    #[serde(default = "default_question_count")]
    pub question_count: Option<Value>,
}

fn default_question_count() -> Option<Value> {
    Some(json!({"easy": 2, "medium": 2, "hard": 1}))
}

/// Body of `/api/evaluate`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluationRequest {
    pub question: String,
    pub answer: String,
    /// Accepted but not sent to the model; feedback is judged on the answer alone.
    #[allow(dead_code)]
    pub resume_text: String,
    #[allow(dead_code)]
    pub job_description_text: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct MatchResult {
    /// Full raw text of the matching stage.
    pub match_score: String,
    pub interview_questions: Vec<InterviewQuestion>,
}

#[derive(Debug, Clone, Serialize)]
pub struct MoreQuestionsResult {
    pub additional_questions: Vec<InterviewQuestion>,
}

#[derive(Debug, Clone, Serialize)]
pub struct EvaluationResult {
    pub evaluation: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Operations
// ────────────────────────────────────────────────────────────────────────────

/// Runs the full match pipeline, then asks separately for difficulty-tiered
/// questions. The pipeline's own question list is discarded.
pub async fn match_resume_job(
    llm: &dyn GenerativeClient,
    request: &MatchRequest,
) -> Result<MatchResult, AppError> {
    let pipeline_output = MatchPipeline::new(llm)
        .run(&request.resume_text, &request.job_description_text)
        .await?;
    debug!(
        "Discarding {} untagged pipeline questions",
        pipeline_output.interview_questions.len()
    );

    let tiers = difficulty_tiers("Generate ");
    let prompt = render(
        TIERED_QUESTIONS_TEMPLATE,
        &[
            ("tiers", tiers.as_str()),
            ("format", QUESTION_FORMAT),
            ("resume_text", request.resume_text.as_str()),
            ("job_description_text", request.job_description_text.as_str()),
        ],
    );
    let raw = llm.generate(&prompt).await?;
    let interview_questions = parse_questions(&raw);

    info!(
        "Match complete: score {}, {} tiered questions",
        pipeline_output.extracted_score,
        interview_questions.len()
    );

    Ok(MatchResult {
        match_score: pipeline_output.match_score,
        interview_questions,
    })
}

/// One model call for five fresh questions. Uniqueness is only requested in
/// the prompt; nothing tracks previously returned questions.
pub async fn generate_more_questions(
    llm: &dyn GenerativeClient,
    request: &MatchRequest,
) -> Result<MoreQuestionsResult, AppError> {
    let tiers = difficulty_tiers("");
    let prompt = render(
        MORE_QUESTIONS_TEMPLATE,
        &[
            ("tiers", tiers.as_str()),
            ("format", QUESTION_FORMAT),
            ("resume_text", request.resume_text.as_str()),
            ("job_description_text", request.job_description_text.as_str()),
        ],
    );
    let raw = llm.generate(&prompt).await?;
    let additional_questions = parse_questions(&raw);

    info!("Generated {} additional questions", additional_questions.len());

    Ok(MoreQuestionsResult {
        additional_questions,
    })
}

/// Returns the model's feedback text as-is.
pub async fn evaluate_answer(
    llm: &dyn GenerativeClient,
    request: &EvaluationRequest,
) -> Result<EvaluationResult, AppError> {
    let prompt = render(
        EVALUATION_TEMPLATE,
        &[
            ("question", request.question.as_str()),
            ("answer", request.answer.as_str()),
        ],
    );
    let evaluation = llm.generate(&prompt).await?;

    info!("Evaluated answer ({} chars of feedback)", evaluation.len());

    Ok(EvaluationResult { evaluation })
}
