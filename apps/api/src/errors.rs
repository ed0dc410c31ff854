use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::llm_client::LlmError;
use crate::matching::pipeline::PipelineError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// Every variant maps to a 500 whose `detail` is the error's message; callers
/// get no distinction between transient and permanent failures.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Llm(#[from] LlmError),

    #[error("{0}")]
    Pipeline(#[from] PipelineError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let detail = self.to_string();

        match &self {
            AppError::Llm(_) => tracing::error!("LLM error: {detail}"),
            AppError::Pipeline(_) => tracing::error!("Pipeline error: {detail}"),
        }

        let body = Json(json!({ "detail": detail }));

        (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matching::pipeline::Stage;

    #[tokio::test]
    async fn test_llm_error_becomes_500_with_detail() {
        let response = AppError::from(LlmError::Api {
            status: 403,
            message: "API key not valid".to_string(),
        })
        .into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["detail"], "API error (status 403): API key not valid");
    }

    #[test]
    fn test_pipeline_error_message_names_stage() {
        let err = AppError::from(PipelineError::Stage {
            stage: Stage::Matching,
            source: LlmError::EmptyContent,
        });
        assert_eq!(
            err.to_string(),
            "matching stage failed: LLM returned empty content"
        );
    }
}
