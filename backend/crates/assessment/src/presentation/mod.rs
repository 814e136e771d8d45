//! Presentation Layer
//!
//! HTTP handlers, DTOs, and routers.

pub mod dto;
pub mod handlers;
pub mod router;

pub use handlers::AssessmentAppState;
pub use router::{admin_router, debug_router, exam_router};
