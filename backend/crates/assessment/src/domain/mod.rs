//! Domain Layer
//!
//! Entities, value objects, grading, and repository traits.

pub mod catalogue;
pub mod entities;
pub mod repository;
pub mod services;
pub mod value_objects;
