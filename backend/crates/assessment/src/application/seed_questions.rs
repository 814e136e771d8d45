//! Seed Questions Use Case
//!
//! Upserts the built-in catalogue. Running it again rewrites the same rows,
//! so the stored question count does not grow.

use std::sync::Arc;

use crate::domain::catalogue;
use crate::domain::repository::QuestionRepository;
use crate::error::AssessmentResult;

pub struct SeedQuestionsUseCase<Q>
where
    Q: QuestionRepository,
{
    repo: Arc<Q>,
}

impl<Q> SeedQuestionsUseCase<Q>
where
    Q: QuestionRepository,
{
    pub fn new(repo: Arc<Q>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self) -> AssessmentResult<u64> {
        let questions = catalogue::questions();
        let written = self.repo.upsert_many(&questions).await?;

        tracing::info!(count = written, "Seeded question catalogue");

        Ok(written)
    }
}
