//! Exam Client
//!
//! Client-side session layer for the exam API:
//! - `storage` / `token_store` - persisted credentials (`accessToken`, `refreshToken`)
//! - `auth_context` - one-time bootstrap from storage, published over a watch channel
//! - `route_guard` - render / redirect / loading decision before protected content
//! - `api` - exam API seam and its HTTP implementation
//! - `session` - question-by-question exam flow with bounded, retryable submit
//!
//! Nothing here performs network I/O except [`api::HttpExamApi`].

pub mod api;
pub mod auth_context;
pub mod error;
pub mod route_guard;
pub mod session;
pub mod storage;
pub mod token_store;

pub use api::{ExamApi, HttpExamApi};
pub use auth_context::{AuthContext, AuthState};
pub use error::{ClientError, ClientResult};
pub use route_guard::{GuardDecision, Guarded, RouteGuard};
pub use session::{ExamSession, SessionConfig, SessionStatus};
pub use storage::{FileStorage, KeyValueStorage, MemoryStorage, StorageError};
pub use token_store::{SessionCredential, TokenStore};
