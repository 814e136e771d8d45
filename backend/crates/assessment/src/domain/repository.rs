//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use kernel::id::SubmissionId;

use crate::domain::entities::{Question, Submission};
use crate::domain::value_objects::Step;
use crate::error::AssessmentResult;

/// Question repository trait
#[trait_variant::make(QuestionRepository: Send)]
pub trait LocalQuestionRepository {
    /// Insert or replace by question id; returns the number written
    async fn upsert_many(&self, questions: &[Question]) -> AssessmentResult<u64>;

    /// Questions of one step, ordered by level then id
    async fn find_by_step(&self, step: Step) -> AssessmentResult<Vec<Question>>;

    /// First `limit` questions across all steps
    async fn sample(&self, limit: usize) -> AssessmentResult<Vec<Question>>;

    async fn count(&self) -> AssessmentResult<u64>;
}

/// Submission repository trait
#[trait_variant::make(SubmissionRepository: Send)]
pub trait LocalSubmissionRepository {
    /// Store unless the id exists; returns whether this call inserted
    async fn insert_if_absent(&self, submission: &Submission) -> AssessmentResult<bool>;

    async fn find(&self, submission_id: &SubmissionId) -> AssessmentResult<Option<Submission>>;
}
