//! Infrastructure Layer
//!
//! Database implementations.

pub mod memory;
pub mod postgres;

pub use memory::InMemoryAssessmentRepository;
pub use postgres::PgAssessmentRepository;
