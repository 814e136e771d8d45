//! Exam Session
//!
//! Drives one assessment from question fetch to graded submission.
//!
//! ```text
//! NotStarted --start--> InProgress --submit--> Submitting --+--> Completed
//!                                                  ^         |
//!                                                  +-retry---+--> SubmitFailed
//! ```
//!
//! The submission id is fixed when the session is created and sent with
//! every attempt, so a retry after a lost response cannot create a second
//! stored submission.

use std::collections::HashMap;
use std::time::Duration;

use tokio::time::{Instant, sleep, timeout};
use uuid::Uuid;

use crate::api::{AnswerPayload, ExamApi, ExamQuestion, SubmissionPayload, SubmissionReceipt};
use crate::error::{ClientError, ClientResult};

#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Upper bound for one submit attempt
    pub submit_timeout: Duration,
    /// Attempts made by `submit_with_retry`, first one included
    pub max_submit_attempts: u32,
    /// Pause between attempts
    pub retry_backoff: Duration,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            submit_timeout: Duration::from_secs(15),
            max_submit_attempts: 3,
            retry_backoff: Duration::from_secs(2),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStatus {
    NotStarted,
    InProgress,
    Submitting,
    Completed,
    SubmitFailed,
}

pub struct ExamSession<A> {
    api: A,
    assessment_id: String,
    submission_id: Uuid,
    config: SessionConfig,
    status: SessionStatus,
    questions: Vec<ExamQuestion>,
    answers: HashMap<String, String>,
    position: usize,
    started_at: Option<Instant>,
    frozen_elapsed: Option<Duration>,
    receipt: Option<SubmissionReceipt>,
    submit_attempts: u32,
}

impl<A: ExamApi> ExamSession<A> {
    pub fn new(api: A, assessment_id: impl Into<String>, config: SessionConfig) -> Self {
        Self {
            api,
            assessment_id: assessment_id.into(),
            submission_id: Uuid::new_v4(),
            config,
            status: SessionStatus::NotStarted,
            questions: Vec::new(),
            answers: HashMap::new(),
            position: 0,
            started_at: None,
            frozen_elapsed: None,
            receipt: None,
            submit_attempts: 0,
        }
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    pub fn status(&self) -> SessionStatus {
        self.status
    }

    pub fn assessment_id(&self) -> &str {
        &self.assessment_id
    }

    pub fn submission_id(&self) -> Uuid {
        self.submission_id
    }

    pub fn questions(&self) -> &[ExamQuestion] {
        &self.questions
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn current(&self) -> Option<&ExamQuestion> {
        self.questions.get(self.position)
    }

    pub fn answer_for(&self, question_id: &str) -> Option<&str> {
        self.answers.get(question_id).map(String::as_str)
    }

    pub fn answered_count(&self) -> usize {
        self.answers.len()
    }

    pub fn unanswered(&self) -> Vec<&ExamQuestion> {
        self.questions
            .iter()
            .filter(|q| !self.answers.contains_key(&q.question_id))
            .collect()
    }

    pub fn receipt(&self) -> Option<&SubmissionReceipt> {
        self.receipt.as_ref()
    }

    pub fn submit_attempts(&self) -> u32 {
        self.submit_attempts
    }

    /// Time since `start`, frozen once submission begins
    pub fn elapsed(&self) -> Duration {
        match (self.frozen_elapsed, self.started_at) {
            (Some(frozen), _) => frozen,
            (None, Some(started)) => started.elapsed(),
            (None, None) => Duration::ZERO,
        }
    }

    // ------------------------------------------------------------------
    // Lifecycle
    // ------------------------------------------------------------------

    pub async fn start(&mut self) -> ClientResult<()> {
        self.require_status(SessionStatus::NotStarted, "start")?;

        let questions = self.api.fetch_questions(&self.assessment_id).await?;
        if questions.is_empty() {
            return Err(ClientError::EmptyAssessment);
        }

        tracing::debug!(
            assessment_id = %self.assessment_id,
            questions = questions.len(),
            "Exam session started"
        );

        self.questions = questions;
        self.position = 0;
        self.started_at = Some(Instant::now());
        self.status = SessionStatus::InProgress;
        Ok(())
    }

    /// Send all answers once
    pub async fn submit(&mut self) -> ClientResult<&SubmissionReceipt> {
        if self.status == SessionStatus::Completed {
            return Err(ClientError::AlreadySubmitted);
        }
        self.require_status(SessionStatus::InProgress, "submit")?;

        self.frozen_elapsed = Some(self.elapsed());
        self.attempt().await
    }

    /// Resend after a failed attempt, keeping questions and answers
    pub async fn retry(&mut self) -> ClientResult<&SubmissionReceipt> {
        if self.status == SessionStatus::Completed {
            return Err(ClientError::AlreadySubmitted);
        }
        self.require_status(SessionStatus::SubmitFailed, "retry")?;
        self.attempt().await
    }

    /// `submit`, then `retry` with backoff while the failure is retryable
    pub async fn submit_with_retry(&mut self) -> ClientResult<&SubmissionReceipt> {
        let mut outcome = self.submit().await.map(|_| ());
        let mut attempts = 1;

        while let Err(err) = &outcome {
            if attempts >= self.config.max_submit_attempts
                || !err.is_retryable()
                || self.status != SessionStatus::SubmitFailed
            {
                break;
            }
            tracing::warn!(
                error = %err,
                attempt = attempts,
                submission_id = %self.submission_id,
                "Submit failed, retrying"
            );
            sleep(self.config.retry_backoff).await;
            outcome = self.retry().await.map(|_| ());
            attempts += 1;
        }

        outcome?;
        self.receipt.as_ref().ok_or(ClientError::InvalidTransition {
            from: self.status,
            action: "read receipt",
        })
    }

    async fn attempt(&mut self) -> ClientResult<&SubmissionReceipt> {
        self.submit_attempts += 1;
        let payload = self.payload();

        // Dropping this future mid-request leaves the session in SubmitFailed
        let mut in_flight = InFlight::begin(&mut self.status);
        let result = timeout(
            self.config.submit_timeout,
            self.api.submit_answers(&self.assessment_id, &payload),
        )
        .await
        .unwrap_or(Err(ClientError::Timeout));

        match result {
            Ok(receipt) => {
                in_flight.finish(SessionStatus::Completed);
                tracing::info!(
                    submission_id = %self.submission_id,
                    score = receipt.score_percent,
                    "Exam submitted"
                );
                Ok(self.receipt.insert(receipt))
            }
            Err(err) => {
                in_flight.finish(SessionStatus::SubmitFailed);
                tracing::warn!(error = %err, submission_id = %self.submission_id, "Exam submit failed");
                Err(err)
            }
        }
    }

    fn payload(&self) -> SubmissionPayload {
        SubmissionPayload {
            submission_id: self.submission_id,
            answers: self
                .questions
                .iter()
                .filter_map(|q| {
                    self.answers.get(&q.question_id).map(|answer| AnswerPayload {
                        question_id: q.question_id.clone(),
                        answer: answer.clone(),
                    })
                })
                .collect(),
        }
    }

    // ------------------------------------------------------------------
    // Navigation and answers
    // ------------------------------------------------------------------

    /// Move forward; stays on the last question
    pub fn next(&mut self) -> ClientResult<usize> {
        self.require_status(SessionStatus::InProgress, "navigate")?;
        if self.position + 1 < self.questions.len() {
            self.position += 1;
        }
        Ok(self.position)
    }

    /// Move back; stays on the first question
    pub fn previous(&mut self) -> ClientResult<usize> {
        self.require_status(SessionStatus::InProgress, "navigate")?;
        self.position = self.position.saturating_sub(1);
        Ok(self.position)
    }

    pub fn go_to(&mut self, index: usize) -> ClientResult<usize> {
        self.require_status(SessionStatus::InProgress, "navigate")?;
        if index >= self.questions.len() {
            return Err(ClientError::OutOfRange(index));
        }
        self.position = index;
        Ok(self.position)
    }

    /// Record (or replace) the answer to a question
    pub fn answer(&mut self, question_id: &str, answer: impl Into<String>) -> ClientResult<()> {
        self.require_status(SessionStatus::InProgress, "answer")?;
        if !self.questions.iter().any(|q| q.question_id == question_id) {
            return Err(ClientError::UnknownQuestion(question_id.to_owned()));
        }
        self.answers.insert(question_id.to_owned(), answer.into());
        Ok(())
    }

    pub fn answer_current(&mut self, answer: impl Into<String>) -> ClientResult<()> {
        let question_id = self
            .current()
            .map(|q| q.question_id.clone())
            .ok_or(ClientError::InvalidTransition {
                from: self.status,
                action: "answer",
            })?;
        self.answer(&question_id, answer)
    }

    pub fn clear_answer(&mut self, question_id: &str) -> ClientResult<()> {
        self.require_status(SessionStatus::InProgress, "answer")?;
        self.answers.remove(question_id);
        Ok(())
    }

    fn require_status(&self, status: SessionStatus, action: &'static str) -> ClientResult<()> {
        if self.status == status {
            Ok(())
        } else {
            Err(ClientError::InvalidTransition {
                from: self.status,
                action,
            })
        }
    }
}

/// Holds the session in `Submitting` for one attempt
struct InFlight<'a> {
    status: &'a mut SessionStatus,
}

impl<'a> InFlight<'a> {
    fn begin(status: &'a mut SessionStatus) -> Self {
        *status = SessionStatus::Submitting;
        Self { status }
    }

    fn finish(&mut self, outcome: SessionStatus) {
        *self.status = outcome;
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        if *self.status == SessionStatus::Submitting {
            *self.status = SessionStatus::SubmitFailed;
        }
    }
}
