//! PostgreSQL Repository Implementations

use chrono::{DateTime, Utc};
use kernel::id::{SubmissionId, UserId};
use sqlx::PgPool;
use sqlx::types::Json;
use uuid::Uuid;

use crate::domain::entities::{AnswerEntry, Question, Submission};
use crate::domain::repository::{QuestionRepository, SubmissionRepository};
use crate::domain::value_objects::{Level, QuestionId, Step};
use crate::error::{AssessmentError, AssessmentResult};

/// PostgreSQL-backed repository
#[derive(Clone)]
pub struct PgAssessmentRepository {
    pool: PgPool,
}

impl PgAssessmentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl QuestionRepository for PgAssessmentRepository {
    async fn upsert_many(&self, questions: &[Question]) -> AssessmentResult<u64> {
        let mut tx = self.pool.begin().await?;
        let mut written = 0u64;

        for q in questions {
            written += sqlx::query(
                r#"
                INSERT INTO questions (question_id, text, options, correct_answer, level, step)
                VALUES ($1, $2, $3, $4, $5, $6)
                ON CONFLICT (question_id) DO UPDATE SET
                    text = EXCLUDED.text,
                    options = EXCLUDED.options,
                    correct_answer = EXCLUDED.correct_answer,
                    level = EXCLUDED.level,
                    step = EXCLUDED.step
                "#,
            )
            .bind(q.question_id.as_str())
            .bind(&q.text)
            .bind(&q.options)
            .bind(&q.correct_answer)
            .bind(q.level.rank())
            .bind(q.step.as_i16())
            .execute(&mut *tx)
            .await?
            .rows_affected();
        }

        tx.commit().await?;
        Ok(written)
    }

    async fn find_by_step(&self, step: Step) -> AssessmentResult<Vec<Question>> {
        let rows = sqlx::query_as::<_, QuestionRow>(
            r#"
            SELECT question_id, text, options, correct_answer, level, step
            FROM questions
            WHERE step = $1
            ORDER BY level, question_id
            "#,
        )
        .bind(step.as_i16())
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(QuestionRow::into_question).collect()
    }

    async fn sample(&self, limit: usize) -> AssessmentResult<Vec<Question>> {
        let rows = sqlx::query_as::<_, QuestionRow>(
            r#"
            SELECT question_id, text, options, correct_answer, level, step
            FROM questions
            ORDER BY step, level, question_id
            LIMIT $1
            "#,
        )
        .bind(i64::try_from(limit).unwrap_or(i64::MAX))
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(QuestionRow::into_question).collect()
    }

    async fn count(&self) -> AssessmentResult<u64> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM questions")
            .fetch_one(&self.pool)
            .await?;
        Ok(count.max(0) as u64)
    }
}

impl SubmissionRepository for PgAssessmentRepository {
    async fn insert_if_absent(&self, submission: &Submission) -> AssessmentResult<bool> {
        let inserted = sqlx::query(
            r#"
            INSERT INTO submissions (
                submission_id,
                user_id,
                step,
                answers,
                correct_count,
                total_count,
                submitted_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7)
            ON CONFLICT (submission_id) DO NOTHING
            "#,
        )
        .bind(*submission.submission_id.as_uuid())
        .bind(*submission.user_id.as_uuid())
        .bind(submission.step.as_i16())
        .bind(Json(&submission.answers))
        .bind(submission.correct_count as i32)
        .bind(submission.total_count as i32)
        .bind(submission.submitted_at)
        .execute(&self.pool)
        .await?
        .rows_affected();

        Ok(inserted == 1)
    }

    async fn find(&self, submission_id: &SubmissionId) -> AssessmentResult<Option<Submission>> {
        let row = sqlx::query_as::<_, SubmissionRow>(
            r#"
            SELECT submission_id, user_id, step, answers, correct_count, total_count, submitted_at
            FROM submissions
            WHERE submission_id = $1
            "#,
        )
        .bind(*submission_id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        row.map(SubmissionRow::into_submission).transpose()
    }
}

#[derive(sqlx::FromRow)]
struct QuestionRow {
    question_id: String,
    text: String,
    options: Vec<String>,
    correct_answer: String,
    level: i16,
    step: i16,
}

impl QuestionRow {
    fn into_question(self) -> AssessmentResult<Question> {
        Ok(Question {
            question_id: QuestionId::new(self.question_id),
            text: self.text,
            options: self.options,
            correct_answer: self.correct_answer,
            level: Level::from_rank(self.level)
                .ok_or_else(|| AssessmentError::Internal(format!("Invalid level: {}", self.level)))?,
            step: step_from_db(self.step)?,
        })
    }
}

#[derive(sqlx::FromRow)]
struct SubmissionRow {
    submission_id: Uuid,
    user_id: Uuid,
    step: i16,
    answers: Json<Vec<AnswerEntry>>,
    correct_count: i32,
    total_count: i32,
    submitted_at: DateTime<Utc>,
}

impl SubmissionRow {
    fn into_submission(self) -> AssessmentResult<Submission> {
        Ok(Submission {
            submission_id: SubmissionId::from_uuid(self.submission_id),
            user_id: UserId::from_uuid(self.user_id),
            step: step_from_db(self.step)?,
            answers: self.answers.0,
            correct_count: self.correct_count.max(0) as u32,
            total_count: self.total_count.max(0) as u32,
            submitted_at: self.submitted_at,
        })
    }
}

fn step_from_db(step: i16) -> AssessmentResult<Step> {
    u8::try_from(step)
        .ok()
        .and_then(Step::new)
        .ok_or_else(|| AssessmentError::Internal(format!("Invalid step: {}", step)))
}
