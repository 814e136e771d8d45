//! Submit Answers Use Case
//!
//! Grades a candidate's answers and stores the result once per
//! submission id. A repeated id from the same candidate and step returns
//! the stored result unchanged.

use std::sync::Arc;

use chrono::Utc;
use kernel::Principal;
use kernel::id::SubmissionId;

use crate::domain::entities::{AnswerEntry, Submission};
use crate::domain::repository::{QuestionRepository, SubmissionRepository};
use crate::domain::services::grade;
use crate::domain::value_objects::Step;
use crate::error::{AssessmentError, AssessmentResult};

pub struct SubmitAnswersInput {
    pub submission_id: SubmissionId,
    pub answers: Vec<AnswerEntry>,
}

pub struct SubmitAnswersUseCase<Q, S>
where
    Q: QuestionRepository,
    S: SubmissionRepository,
{
    question_repo: Arc<Q>,
    submission_repo: Arc<S>,
}

impl<Q, S> SubmitAnswersUseCase<Q, S>
where
    Q: QuestionRepository,
    S: SubmissionRepository,
{
    pub fn new(question_repo: Arc<Q>, submission_repo: Arc<S>) -> Self {
        Self {
            question_repo,
            submission_repo,
        }
    }

    pub async fn execute(
        &self,
        principal: &Principal,
        assessment_id: &str,
        input: SubmitAnswersInput,
    ) -> AssessmentResult<Submission> {
        let step = Step::parse(assessment_id)?;

        if let Some(existing) = self.submission_repo.find(&input.submission_id).await? {
            return Self::replay(existing, principal, step);
        }

        let questions = self.question_repo.find_by_step(step).await?;
        if questions.is_empty() {
            return Err(AssessmentError::EmptyAssessment);
        }
        let (correct_count, total_count) = grade(&questions, &input.answers)?;

        let submission = Submission {
            submission_id: input.submission_id,
            user_id: principal.user_id,
            step,
            answers: input.answers,
            correct_count,
            total_count,
            submitted_at: Utc::now(),
        };

        if self.submission_repo.insert_if_absent(&submission).await? {
            tracing::info!(
                submission_id = %submission.submission_id,
                user_id = %submission.user_id,
                step = %step,
                correct = correct_count,
                total = total_count,
                "Stored submission"
            );
            return Ok(submission);
        }

        // A concurrent retry inserted first
        let existing = self
            .submission_repo
            .find(&submission.submission_id)
            .await?
            .ok_or_else(|| AssessmentError::Internal("submission vanished after conflict".into()))?;
        Self::replay(existing, principal, step)
    }

    fn replay(existing: Submission, principal: &Principal, step: Step) -> AssessmentResult<Submission> {
        if existing.user_id != principal.user_id || existing.step != step {
            return Err(AssessmentError::SubmissionConflict);
        }
        tracing::debug!(submission_id = %existing.submission_id, "Replayed stored submission");
        Ok(existing)
    }
}
