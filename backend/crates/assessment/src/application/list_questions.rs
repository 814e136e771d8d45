//! List Questions Use Case
//!
//! Questions of one assessment in exam order.

use std::sync::Arc;

use crate::domain::entities::Question;
use crate::domain::repository::QuestionRepository;
use crate::domain::value_objects::Step;
use crate::error::AssessmentResult;

pub struct ListQuestionsUseCase<Q>
where
    Q: QuestionRepository,
{
    repo: Arc<Q>,
}

impl<Q> ListQuestionsUseCase<Q>
where
    Q: QuestionRepository,
{
    pub fn new(repo: Arc<Q>) -> Self {
        Self { repo }
    }

    /// An unseeded step yields an empty list, not an error
    pub async fn execute(&self, assessment_id: &str) -> AssessmentResult<(Step, Vec<Question>)> {
        let step = Step::parse(assessment_id)?;
        let questions = self.repo.find_by_step(step).await?;
        Ok((step, questions))
    }
}
