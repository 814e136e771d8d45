//! In-memory Repository
//!
//! Process-local question and submission store for tests and
//! database-less local runs.

use std::collections::{BTreeMap, HashMap};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};

use kernel::id::SubmissionId;

use crate::domain::entities::{Question, Submission};
use crate::domain::repository::{QuestionRepository, SubmissionRepository};
use crate::domain::services::sort_for_exam;
use crate::domain::value_objects::{QuestionId, Step};
use crate::error::{AssessmentError, AssessmentResult};

#[derive(Default)]
struct Store {
    questions: BTreeMap<QuestionId, Question>,
    submissions: HashMap<SubmissionId, Submission>,
}

#[derive(Clone, Default)]
pub struct InMemoryAssessmentRepository {
    store: Arc<Mutex<Store>>,
    unavailable: Arc<AtomicBool>,
}

impl InMemoryAssessmentRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent call fail as if the database were down
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    pub fn submission_count(&self) -> usize {
        self.store.lock().map(|s| s.submissions.len()).unwrap_or(0)
    }

    fn store(&self) -> AssessmentResult<MutexGuard<'_, Store>> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(AssessmentError::Database(sqlx::Error::PoolTimedOut));
        }
        self.store
            .lock()
            .map_err(|_| AssessmentError::Internal("assessment store poisoned".into()))
    }
}

impl QuestionRepository for InMemoryAssessmentRepository {
    async fn upsert_many(&self, questions: &[Question]) -> AssessmentResult<u64> {
        let mut store = self.store()?;
        for q in questions {
            store.questions.insert(q.question_id.clone(), q.clone());
        }
        Ok(questions.len() as u64)
    }

    async fn find_by_step(&self, step: Step) -> AssessmentResult<Vec<Question>> {
        let mut questions: Vec<Question> = self
            .store()?
            .questions
            .values()
            .filter(|q| q.step == step)
            .cloned()
            .collect();
        sort_for_exam(&mut questions);
        Ok(questions)
    }

    async fn sample(&self, limit: usize) -> AssessmentResult<Vec<Question>> {
        let mut questions: Vec<Question> = self.store()?.questions.values().cloned().collect();
        questions.sort_by(|a, b| {
            (a.step, a.level, &a.question_id).cmp(&(b.step, b.level, &b.question_id))
        });
        questions.truncate(limit);
        Ok(questions)
    }

    async fn count(&self) -> AssessmentResult<u64> {
        Ok(self.store()?.questions.len() as u64)
    }
}

impl SubmissionRepository for InMemoryAssessmentRepository {
    async fn insert_if_absent(&self, submission: &Submission) -> AssessmentResult<bool> {
        let mut store = self.store()?;
        if store.submissions.contains_key(&submission.submission_id) {
            return Ok(false);
        }
        store
            .submissions
            .insert(submission.submission_id, submission.clone());
        Ok(true)
    }

    async fn find(&self, submission_id: &SubmissionId) -> AssessmentResult<Option<Submission>> {
        Ok(self.store()?.submissions.get(submission_id).cloned())
    }
}
