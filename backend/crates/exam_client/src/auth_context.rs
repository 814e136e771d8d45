//! Auth Context
//!
//! Reads the token store once on start and publishes whether a session is
//! active. Consumers hold a clone of the context (or a watch receiver);
//! there is no process-global auth state. No network calls are made here:
//! token validity is the server's concern.

use std::sync::Arc;

use tokio::sync::watch;

use crate::error::ClientResult;
use crate::storage::KeyValueStorage;
use crate::token_store::{SessionCredential, TokenStore};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthState {
    /// Storage not read yet
    Checking,
    Authenticated(SessionCredential),
    Unauthenticated,
}

impl AuthState {
    pub fn is_resolved(&self) -> bool {
        !matches!(self, AuthState::Checking)
    }

    pub fn credential(&self) -> Option<&SessionCredential> {
        match self {
            AuthState::Authenticated(credential) => Some(credential),
            _ => None,
        }
    }
}

#[derive(Clone)]
pub struct AuthContext {
    state: Arc<watch::Sender<AuthState>>,
}

impl AuthContext {
    fn with_state(state: AuthState) -> Self {
        let (tx, _rx) = watch::channel(state);
        Self {
            state: Arc::new(tx),
        }
    }

    /// Read storage synchronously and resolve immediately
    pub fn bootstrap<S: KeyValueStorage>(store: &TokenStore<S>) -> Self {
        Self::with_state(read_state(store))
    }

    /// Start in `Checking` and resolve once a blocking read of storage
    /// finishes. Must be called within a Tokio runtime.
    pub fn bootstrap_in_background<S>(store: Arc<TokenStore<S>>) -> Self
    where
        S: KeyValueStorage + 'static,
    {
        let context = Self::with_state(AuthState::Checking);
        let publisher = context.clone();

        tokio::spawn(async move {
            let state = match tokio::task::spawn_blocking(move || read_state(&store)).await {
                Ok(state) => state,
                Err(e) => {
                    tracing::warn!(error = %e, "Credential read task failed");
                    AuthState::Unauthenticated
                }
            };
            publisher.publish(state);
        });

        context
    }

    pub fn state(&self) -> AuthState {
        self.state.borrow().clone()
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(*self.state.borrow(), AuthState::Authenticated(_))
    }

    pub fn subscribe(&self) -> watch::Receiver<AuthState> {
        self.state.subscribe()
    }

    /// Wait until the state is no longer `Checking`
    pub async fn wait_until_resolved(&self) -> AuthState {
        let mut rx = self.subscribe();
        // The sender lives in `self`, so the channel cannot close while waiting
        match rx.wait_for(AuthState::is_resolved).await {
            Ok(state) => state.clone(),
            Err(_) => self.state(),
        }
    }

    /// Re-read storage, e.g. after another component changed it
    pub fn reload<S: KeyValueStorage>(&self, store: &TokenStore<S>) {
        self.publish(read_state(store));
    }

    /// Persist a fresh credential and mark the session active
    pub fn sign_in<S: KeyValueStorage>(
        &self,
        store: &TokenStore<S>,
        credential: SessionCredential,
    ) -> ClientResult<()> {
        store.save(&credential)?;
        self.publish(AuthState::Authenticated(credential));
        Ok(())
    }

    /// Drop the session; the state becomes `Unauthenticated` even when
    /// clearing storage fails
    pub fn invalidate<S: KeyValueStorage>(&self, store: &TokenStore<S>) -> ClientResult<()> {
        let cleared = store.clear();
        self.publish(AuthState::Unauthenticated);
        cleared.map_err(Into::into)
    }

    fn publish(&self, state: AuthState) {
        tracing::debug!(authenticated = matches!(state, AuthState::Authenticated(_)), "Auth state published");
        self.state.send_replace(state);
    }
}

fn read_state<S: KeyValueStorage>(store: &TokenStore<S>) -> AuthState {
    match store.load() {
        Ok(Some(credential)) => AuthState::Authenticated(credential),
        Ok(None) => AuthState::Unauthenticated,
        Err(e) => {
            tracing::warn!(error = %e, "Credential storage unreadable, treating as signed out");
            AuthState::Unauthenticated
        }
    }
}
