//! Match Pipeline — chains the four analysis agents.
//!
//! Flow: resume analysis → job analysis → matching → question generation.
//! Each stage's prompt embeds the raw text produced by earlier stages, so the
//! stages are awaited strictly in order. The first failing stage aborts the
//! run and discards everything produced before it.

use std::fmt;

use thiserror::Error;
use tracing::{debug, info};

use crate::llm_client::{GenerativeClient, LlmError};
use crate::matching::parser::{extract_match_percentage, split_question_lines};
use crate::matching::prompts::{
    render, JOB_ANALYSIS_TEMPLATE, MATCHING_TEMPLATE, QUESTION_GENERATION_TEMPLATE,
    RESUME_ANALYSIS_TEMPLATE,
};

/// The four agent roles, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    ResumeAnalysis,
    JobAnalysis,
    Matching,
    QuestionGeneration,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::ResumeAnalysis => "resume analysis",
            Stage::JobAnalysis => "job description analysis",
            Stage::Matching => "matching",
            Stage::QuestionGeneration => "question generation",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("{stage} stage failed: {source}")]
    Stage {
        stage: Stage,
        #[source]
        source: LlmError,
    },
}

/// Result of a full pipeline run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineOutput {
    /// Raw matching-stage text, returned to callers unparsed.
    pub match_score: String,
    /// Percentage pulled out of `match_score`, or `"N/A"`.
    pub extracted_score: String,
    pub interview_questions: Vec<String>,
}

/// A single pipeline run over an injected model client.
/// Built per request; holds no state between runs.
pub struct MatchPipeline<'a> {
    llm: &'a dyn GenerativeClient,
}

impl<'a> MatchPipeline<'a> {
    pub fn new(llm: &'a dyn GenerativeClient) -> Self {
        Self { llm }
    }

    pub async fn run(
        &self,
        resume_text: &str,
        job_description_text: &str,
    ) -> Result<PipelineOutput, PipelineError> {
        let resume_data = self.analyze_resume(resume_text).await?;
        let job_data = self.analyze_job(job_description_text).await?;
        let match_result = self.match_profiles(&resume_data, &job_data).await?;

        let extracted_score = extract_match_percentage(&match_result);
        info!("Match stage complete: extracted score {extracted_score}");

        let questions_raw = self
            .generate_questions(&resume_data, &job_data, &extracted_score)
            .await?;

        Ok(PipelineOutput {
            match_score: match_result,
            extracted_score,
            interview_questions: split_question_lines(&questions_raw),
        })
    }

    async fn analyze_resume(&self, resume_text: &str) -> Result<String, PipelineError> {
        let prompt = render(RESUME_ANALYSIS_TEMPLATE, &[("resume_text", resume_text)]);
        self.call(Stage::ResumeAnalysis, &prompt).await
    }

    async fn analyze_job(&self, job_description_text: &str) -> Result<String, PipelineError> {
        let prompt = render(
            JOB_ANALYSIS_TEMPLATE,
            &[("job_description_text", job_description_text)],
        );
        self.call(Stage::JobAnalysis, &prompt).await
    }

    async fn match_profiles(
        &self,
        resume_data: &str,
        job_data: &str,
    ) -> Result<String, PipelineError> {
        let prompt = render(
            MATCHING_TEMPLATE,
            &[("resume_data", resume_data), ("job_data", job_data)],
        );
        self.call(Stage::Matching, &prompt).await
    }

    async fn generate_questions(
        &self,
        resume_data: &str,
        job_data: &str,
        match_score: &str,
    ) -> Result<String, PipelineError> {
        let prompt = render(
            QUESTION_GENERATION_TEMPLATE,
            &[
                ("match_score", match_score),
                ("resume_data", resume_data),
                ("job_data", job_data),
            ],
        );
        self.call(Stage::QuestionGeneration, &prompt).await
    }

    async fn call(&self, stage: Stage, prompt: &str) -> Result<String, PipelineError> {
        debug!("Running {stage} stage ({} char prompt)", prompt.len());
        let output = self
            .llm
            .generate(prompt)
            .await
            .map_err(|source| PipelineError::Stage { stage, source })?;
        debug!("{stage} stage returned {} chars", output.len());
        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::ScriptedClient;

    const RESUME: &str = "Jane Doe. 6 years Rust, Kubernetes. BSc Computer Science.";
    const JOB: &str = "Senior Rust engineer. Requires Rust, AWS. BSc preferred.";

    fn happy_script() -> ScriptedClient {
        ScriptedClient::new(vec![
            Ok("Skills: Rust, Kubernetes".to_string()),
            Ok("Required: Rust, AWS".to_string()),
            Ok("Match Score: 78%\nMissing Skills: AWS".to_string()),
            Ok("1. Describe a Rust service you built.\n- How do you use Kubernetes?".to_string()),
        ])
    }

    #[tokio::test]
    async fn test_run_threads_outputs_through_stages() {
        let llm = happy_script();
        let output = MatchPipeline::new(&llm).run(RESUME, JOB).await.unwrap();

        assert_eq!(output.match_score, "Match Score: 78%\nMissing Skills: AWS");
        assert_eq!(output.extracted_score, "78");
        assert_eq!(
            output.interview_questions,
            vec![
                "1. Describe a Rust service you built.".to_string(),
                "How do you use Kubernetes?".to_string(),
            ]
        );

        let prompts = llm.prompts();
        assert_eq!(prompts.len(), 4);
        assert!(prompts[0].contains(RESUME));
        assert!(prompts[1].contains(JOB));
        assert!(prompts[2].contains("Skills: Rust, Kubernetes"));
        assert!(prompts[2].contains("Required: Rust, AWS"));
        assert!(prompts[3].contains("a match score of 78,"));
        assert!(prompts[3].contains("Skills: Rust, Kubernetes"));
    }

    #[tokio::test]
    async fn test_missing_percentage_passes_not_available_to_question_stage() {
        let llm = ScriptedClient::new(vec![
            Ok("resume".to_string()),
            Ok("job".to_string()),
            Ok("Strong fit overall".to_string()),
            Ok("Q1".to_string()),
        ]);
        let output = MatchPipeline::new(&llm).run(RESUME, JOB).await.unwrap();

        assert_eq!(output.extracted_score, "N/A");
        assert_eq!(output.match_score, "Strong fit overall");
        assert!(llm.prompts()[3].contains("a match score of N/A,"));
    }

    #[tokio::test]
    async fn test_failure_aborts_remaining_stages() {
        let llm = ScriptedClient::new(vec![
            Ok("resume".to_string()),
            Err(LlmError::Api {
                status: 503,
                message: "model overloaded".to_string(),
            }),
        ]);
        let err = MatchPipeline::new(&llm).run(RESUME, JOB).await.unwrap_err();

        let PipelineError::Stage { stage, .. } = &err;
        assert_eq!(*stage, Stage::JobAnalysis);
        assert_eq!(
            err.to_string(),
            "job description analysis stage failed: API error (status 503): model overloaded"
        );
        assert_eq!(llm.prompts().len(), 2);
    }

    #[tokio::test]
    async fn test_empty_response_in_last_stage_fails_the_run() {
        let llm = ScriptedClient::new(vec![
            Ok("resume".to_string()),
            Ok("job".to_string()),
            Ok("Match Score: 50%".to_string()),
            Err(LlmError::EmptyContent),
        ]);
        let err = MatchPipeline::new(&llm).run(RESUME, JOB).await.unwrap_err();
        assert!(matches!(
            err,
            PipelineError::Stage {
                stage: Stage::QuestionGeneration,
                source: LlmError::EmptyContent
            }
        ));
    }
}
