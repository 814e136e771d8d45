//! HTTP Handlers

use axum::extract::{Path, State};
use kernel::error::app_error::{AppResult, ResultExt};
use kernel::extract::ValidJson;
use kernel::id::SubmissionId;
use kernel::{Envelope, Principal};
use std::sync::Arc;

use crate::application::config::AssessmentConfig;
use crate::application::{
    ListQuestionsUseCase, SampleQuestionsUseCase, SeedQuestionsUseCase, SubmitAnswersInput,
    SubmitAnswersUseCase,
};
use crate::domain::repository::{QuestionRepository, SubmissionRepository};
use crate::presentation::dto::{
    ExamQuestionsResponse, SampleResponse, SeedResponse, SubmissionResponse, SubmitRequest,
};

/// Shared state for assessment handlers
#[derive(Clone)]
pub struct AssessmentAppState<R>
where
    R: QuestionRepository + SubmissionRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub config: Arc<AssessmentConfig>,
}

/// POST /api/admin/seed-questions
pub async fn seed_questions<R>(
    State(state): State<AssessmentAppState<R>>,
) -> AppResult<Envelope<SeedResponse>>
where
    R: QuestionRepository + SubmissionRepository + Clone + Send + Sync + 'static,
{
    let count = SeedQuestionsUseCase::new(state.repo.clone())
        .execute()
        .await
        .or_fail("Failed to seed questions")?;

    Ok(Envelope::ok("Questions seeded", SeedResponse { count }))
}

/// GET /api/debug/sample-questions
pub async fn sample_questions<R>(
    State(state): State<AssessmentAppState<R>>,
) -> AppResult<Envelope<SampleResponse>>
where
    R: QuestionRepository + SubmissionRepository + Clone + Send + Sync + 'static,
{
    let questions = SampleQuestionsUseCase::new(state.repo.clone(), state.config.clone())
        .execute()
        .await
        .or_fail("Failed to fetch sample questions")?;

    Ok(Envelope::ok(
        "Sample questions",
        SampleResponse {
            questions: questions.into_iter().map(Into::into).collect(),
        },
    ))
}

/// GET /api/assessments/{assessmentId}/questions
pub async fn list_questions<R>(
    State(state): State<AssessmentAppState<R>>,
    Path(assessment_id): Path<String>,
) -> AppResult<Envelope<ExamQuestionsResponse>>
where
    R: QuestionRepository + SubmissionRepository + Clone + Send + Sync + 'static,
{
    let (step, questions) = ListQuestionsUseCase::new(state.repo.clone())
        .execute(&assessment_id)
        .await
        .or_fail("Failed to fetch questions")?;

    Ok(Envelope::ok(
        "Questions fetched",
        ExamQuestionsResponse {
            assessment_id: step.to_string(),
            questions: questions.into_iter().map(Into::into).collect(),
        },
    ))
}

/// POST /api/assessments/{assessmentId}/submissions
pub async fn submit_answers<R>(
    State(state): State<AssessmentAppState<R>>,
    principal: Principal,
    Path(assessment_id): Path<String>,
    ValidJson(req): ValidJson<SubmitRequest>,
) -> AppResult<Envelope<SubmissionResponse>>
where
    R: QuestionRepository + SubmissionRepository + Clone + Send + Sync + 'static,
{
    let use_case = SubmitAnswersUseCase::new(state.repo.clone(), state.repo.clone());

    let input = SubmitAnswersInput {
        submission_id: SubmissionId::from_uuid(req.submission_id),
        answers: req.answers,
    };

    let submission = use_case
        .execute(&principal, &assessment_id, input)
        .await
        .or_fail("Failed to submit answers")?;

    Ok(Envelope::ok("Answers submitted", submission.into()))
}
