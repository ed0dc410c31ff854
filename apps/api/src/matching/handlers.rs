//! Axum route handlers for the Matching API.

use axum::{extract::State, Json};

use crate::errors::AppError;
use crate::matching::interview::{
    self, EvaluationRequest, EvaluationResult, MatchRequest, MatchResult, MoreQuestionsResult,
};
use crate::state::AppState;

/// POST /api/match
///
/// Runs the four-stage match pipeline and returns the raw match analysis
/// together with 2 easy / 2 medium / 1 hard tagged questions.
pub async fn handle_match(
    State(state): State<AppState>,
    Json(request): Json<MatchRequest>,
) -> Result<Json<MatchResult>, AppError> {
    let result = interview::match_resume_job(state.llm.as_ref(), &request).await?;
    Ok(Json(result))
}

/// POST /api/more-questions
pub async fn handle_more_questions(
    State(state): State<AppState>,
    Json(request): Json<MatchRequest>,
) -> Result<Json<MoreQuestionsResult>, AppError> {
    let result = interview::generate_more_questions(state.llm.as_ref(), &request).await?;
    Ok(Json(result))
}

/// POST /api/evaluate
///
/// Returns the model's feedback on a single answer, unparsed.
pub async fn handle_evaluate(
    State(state): State<AppState>,
    Json(request): Json<EvaluationRequest>,
) -> Result<Json<EvaluationResult>, AppError> {
    let result = interview::evaluate_answer(state.llm.as_ref(), &request).await?;
    Ok(Json(result))
}
