//! Domain Value Objects
//!
//! Immutable value types for the assessment domain.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{AssessmentError, AssessmentResult};

/// CEFR proficiency level; ordering follows the scale
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(i16)]
pub enum Level {
    A1 = 1,
    A2 = 2,
    B1 = 3,
    B2 = 4,
    C1 = 5,
    C2 = 6,
}

impl Level {
    pub const ALL: [Level; 6] = [Level::A1, Level::A2, Level::B1, Level::B2, Level::C1, Level::C2];

    #[inline]
    pub const fn rank(&self) -> i16 {
        *self as i16
    }

    #[inline]
    pub const fn code(&self) -> &'static str {
        match self {
            Level::A1 => "A1",
            Level::A2 => "A2",
            Level::B1 => "B1",
            Level::B2 => "B2",
            Level::C1 => "C1",
            Level::C2 => "C2",
        }
    }

    pub fn from_rank(rank: i16) -> Option<Self> {
        Self::ALL.into_iter().find(|l| l.rank() == rank)
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Exam step; the public assessment id is its number
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Step(u8);

impl Step {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 3;

    pub const ONE: Step = Step(1);
    pub const TWO: Step = Step(2);
    pub const THREE: Step = Step(3);

    pub fn new(n: u8) -> Option<Self> {
        (Self::MIN..=Self::MAX).contains(&n).then_some(Self(n))
    }

    /// Interpret an assessment id from the URL
    pub fn parse(assessment_id: &str) -> AssessmentResult<Self> {
        assessment_id
            .trim()
            .parse::<u8>()
            .ok()
            .and_then(Self::new)
            .ok_or_else(|| AssessmentError::UnknownAssessment(assessment_id.to_owned()))
    }

    pub fn number(&self) -> u8 {
        self.0
    }

    pub fn as_i16(&self) -> i16 {
        i16::from(self.0)
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Stable question identifier, the upsert key of the catalogue
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuestionId(String);

impl QuestionId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_parse() {
        assert_eq!(Step::parse("1").unwrap().number(), 1);
        assert_eq!(Step::parse(" 3 ").unwrap().number(), 3);
        for bad in ["0", "4", "step-1", "", "-1", "300"] {
            assert!(matches!(
                Step::parse(bad),
                Err(AssessmentError::UnknownAssessment(_))
            ));
        }
    }

    #[test]
    fn test_level_order_and_rank() {
        assert!(Level::A1 < Level::B2);
        assert!(Level::C1 < Level::C2);
        for level in Level::ALL {
            assert_eq!(Level::from_rank(level.rank()), Some(level));
        }
        assert_eq!(Level::from_rank(0), None);
        assert_eq!(serde_json::to_string(&Level::B1).unwrap(), "\"B1\"");
    }
}
