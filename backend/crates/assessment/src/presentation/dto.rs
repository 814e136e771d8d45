//! API DTOs (Data Transfer Objects)

use serde::{Deserialize, Serialize};

use crate::domain::entities::{AnswerEntry, Question, Submission};

// ============================================================================
// Admin / debug
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedResponse {
    pub count: u64,
}

/// Full question, correct answer included (debug only)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionDetail {
    pub question_id: String,
    pub text: String,
    pub options: Vec<String>,
    pub correct_answer: String,
    pub level: String,
    pub step: u8,
}

impl From<Question> for QuestionDetail {
    fn from(q: Question) -> Self {
        Self {
            question_id: q.question_id.to_string(),
            text: q.text,
            options: q.options,
            correct_answer: q.correct_answer,
            level: q.level.code().to_owned(),
            step: q.step.number(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SampleResponse {
    pub questions: Vec<QuestionDetail>,
}

// ============================================================================
// Exam
// ============================================================================

/// Question as shown to a candidate
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExamQuestion {
    pub question_id: String,
    pub text: String,
    pub options: Vec<String>,
    pub level: String,
}

impl From<Question> for ExamQuestion {
    fn from(q: Question) -> Self {
        Self {
            question_id: q.question_id.to_string(),
            text: q.text,
            options: q.options,
            level: q.level.code().to_owned(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExamQuestionsResponse {
    pub assessment_id: String,
    pub questions: Vec<ExamQuestion>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitRequest {
    pub submission_id: uuid::Uuid,
    pub answers: Vec<AnswerEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionResponse {
    pub submission_id: String,
    pub correct_count: u32,
    pub total_count: u32,
    pub score_percent: u32,
    pub submitted_at: String,
}

impl From<Submission> for SubmissionResponse {
    fn from(s: Submission) -> Self {
        Self {
            submission_id: s.submission_id.to_string(),
            correct_count: s.correct_count,
            total_count: s.total_count,
            score_percent: s.score_percent(),
            submitted_at: s.submitted_at.to_rfc3339(),
        }
    }
}
