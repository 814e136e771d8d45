//! Application Layer - Use Cases
//!
//! This layer orchestrates domain logic and infrastructure.

pub mod config;
pub mod list_questions;
pub mod sample_questions;
pub mod seed_questions;
pub mod submit_answers;

pub use config::AssessmentConfig;
pub use list_questions::ListQuestionsUseCase;
pub use sample_questions::SampleQuestionsUseCase;
pub use seed_questions::SeedQuestionsUseCase;
pub use submit_answers::{SubmitAnswersInput, SubmitAnswersUseCase};
