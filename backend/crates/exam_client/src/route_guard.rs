//! Route Guard
//!
//! Capability check run before protected content is produced. Content is
//! only built for an authenticated state; an undetermined state yields
//! `Loading`, never a transient render.

use crate::auth_context::{AuthContext, AuthState};
use crate::token_store::SessionCredential;

pub const DEFAULT_LOGIN_PATH: &str = "/login";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardDecision {
    Render,
    Redirect { to: String },
    Loading,
}

/// Outcome of a guarded render
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Guarded<T> {
    Content(T),
    Redirect(String),
    Loading,
}

impl<T> Guarded<T> {
    pub fn content(self) -> Option<T> {
        match self {
            Guarded::Content(value) => Some(value),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct RouteGuard {
    login_path: String,
}

impl Default for RouteGuard {
    fn default() -> Self {
        Self::new(DEFAULT_LOGIN_PATH)
    }
}

impl RouteGuard {
    pub fn new(login_path: impl Into<String>) -> Self {
        Self {
            login_path: login_path.into(),
        }
    }

    pub fn login_path(&self) -> &str {
        &self.login_path
    }

    pub fn decide(&self, state: &AuthState) -> GuardDecision {
        match state {
            AuthState::Authenticated(_) => GuardDecision::Render,
            AuthState::Unauthenticated => GuardDecision::Redirect {
                to: self.login_path.clone(),
            },
            AuthState::Checking => GuardDecision::Loading,
        }
    }

    /// Build protected content only when the state allows it
    pub fn render<T, F>(&self, state: &AuthState, content: F) -> Guarded<T>
    where
        F: FnOnce(&SessionCredential) -> T,
    {
        match state {
            AuthState::Authenticated(credential) => Guarded::Content(content(credential)),
            AuthState::Unauthenticated => Guarded::Redirect(self.login_path.clone()),
            AuthState::Checking => Guarded::Loading,
        }
    }

    /// Wait for bootstrap, then render
    pub async fn resolve<T, F>(&self, context: &AuthContext, content: F) -> Guarded<T>
    where
        F: FnOnce(&SessionCredential) -> T,
    {
        let state = context.wait_until_resolved().await;
        self.render(&state, content)
    }
}
