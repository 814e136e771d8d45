//! Domain Services
//!
//! Question ordering and grading.

use std::collections::HashSet;

use crate::domain::entities::{AnswerEntry, Question};
use crate::error::{AssessmentError, AssessmentResult};

/// Exam order: level, then identifier
pub fn sort_for_exam(questions: &mut [Question]) {
    questions.sort_by(|a, b| {
        a.level
            .cmp(&b.level)
            .then_with(|| a.question_id.cmp(&b.question_id))
    });
}

/// Count correct answers against the step's questions
///
/// Returns `(correct, total)` where `total` is the number of questions in
/// the step, so unanswered questions count as wrong.
pub fn grade(questions: &[Question], answers: &[AnswerEntry]) -> AssessmentResult<(u32, u32)> {
    let mut seen = HashSet::with_capacity(answers.len());
    let mut correct = 0u32;

    for entry in answers {
        if !seen.insert(&entry.question_id) {
            return Err(AssessmentError::DuplicateAnswer(entry.question_id.to_string()));
        }
        let question = questions
            .iter()
            .find(|q| q.question_id == entry.question_id)
            .ok_or_else(|| AssessmentError::UnknownQuestion(entry.question_id.to_string()))?;
        if question.is_correct(&entry.answer) {
            correct += 1;
        }
    }

    Ok((correct, questions.len() as u32))
}
