//! Sample Questions Use Case (debug)

use std::sync::Arc;

use crate::application::config::AssessmentConfig;
use crate::domain::entities::Question;
use crate::domain::repository::QuestionRepository;
use crate::error::AssessmentResult;

pub struct SampleQuestionsUseCase<Q>
where
    Q: QuestionRepository,
{
    repo: Arc<Q>,
    config: Arc<AssessmentConfig>,
}

impl<Q> SampleQuestionsUseCase<Q>
where
    Q: QuestionRepository,
{
    pub fn new(repo: Arc<Q>, config: Arc<AssessmentConfig>) -> Self {
        Self { repo, config }
    }

    pub async fn execute(&self) -> AssessmentResult<Vec<Question>> {
        self.repo.sample(self.config.sample_size).await
    }
}
