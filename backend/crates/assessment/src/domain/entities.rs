//! Domain Entities
//!
//! Core business entities for the assessment domain.

use chrono::{DateTime, Utc};
use kernel::id::{SubmissionId, UserId};
use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{Level, QuestionId, Step};

/// Catalogue question, including its correct answer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub question_id: QuestionId,
    pub text: String,
    pub options: Vec<String>,
    pub correct_answer: String,
    pub level: Level,
    pub step: Step,
}

impl Question {
    pub fn is_correct(&self, answer: &str) -> bool {
        self.correct_answer == answer
    }
}

/// One candidate answer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnswerEntry {
    pub question_id: QuestionId,
    pub answer: String,
}

/// Graded, stored submission
#[derive(Debug, Clone, PartialEq)]
pub struct Submission {
    pub submission_id: SubmissionId,
    pub user_id: UserId,
    pub step: Step,
    pub answers: Vec<AnswerEntry>,
    pub correct_count: u32,
    pub total_count: u32,
    pub submitted_at: DateTime<Utc>,
}

impl Submission {
    /// Whole-number percentage, rounded down
    pub fn score_percent(&self) -> u32 {
        if self.total_count == 0 {
            0
        } else {
            self.correct_count * 100 / self.total_count
        }
    }
}
