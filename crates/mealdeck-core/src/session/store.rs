//! Observable session store.
//!
//! `SessionStore` owns the in-memory session and its persisted copy. It is
//! the only writer of both; the UI consumes read-only watch subscriptions.
//!
//! ## State machine
//!
//! A session starts as `{token: None, status: Initializing}`. `restore`
//! reads the persisted token once and transitions to `Ready` exactly once
//! per process, whatever the storage did. Once `Ready`, `login`/`logout`
//! may change the token but the status never reverts. Consumers must not
//! make navigation decisions while `Initializing`.
//!
//! ## Failure policy
//!
//! Storage faults are logged and recovered locally: a failed read restores
//! to logged-out, a failed write leaves the in-memory session authenticated
//! for this run only. Availability outranks session continuity; nothing
//! here can crash the app over a missing or corrupt token.

use std::sync::Arc;

use anyhow::Result;
use tokio::sync::watch;

use super::secrets::TokenStore;

/// Session initialization status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStatus {
    /// The persisted token has not been read yet.
    Initializing,
    /// The in-memory token is authoritative.
    Ready,
}

/// The in-memory record of whether a user is authenticated.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    /// Opaque auth token. None means unauthenticated.
    pub token: Option<String>,
    pub status: SessionStatus,
}

impl Session {
    /// Returns true once restore has completed with a token present.
    pub fn is_authenticated(&self) -> bool {
        self.status == SessionStatus::Ready && self.token.is_some()
    }
}

/// Single authoritative, observable holder of the session.
///
/// Cheap to clone; all clones share the same current-value slot and
/// storage collaborator. Constructed once at startup and injected into
/// whatever composes the navigation root.
#[derive(Clone)]
pub struct SessionStore {
    state: watch::Sender<Session>,
    secrets: Arc<dyn TokenStore>,
}

impl SessionStore {
    /// Creates a store over the given secret storage.
    ///
    /// The session starts `Initializing`; call [`restore`](Self::restore)
    /// once before trusting the token.
    pub fn new(secrets: Arc<dyn TokenStore>) -> Self {
        let (state, _) = watch::channel(Session {
            token: None,
            status: SessionStatus::Initializing,
        });
        Self { state, secrets }
    }

    /// Returns the current session snapshot. Never blocks, never does I/O.
    pub fn current(&self) -> Session {
        self.state.borrow().clone()
    }

    /// Returns a read-only subscription to session changes.
    ///
    /// The receiver holds the current value immediately; changes are
    /// delivered after each in-memory write.
    pub fn subscribe(&self) -> watch::Receiver<Session> {
        self.state.subscribe()
    }

    /// Reads the persisted token and transitions to `Ready`.
    ///
    /// Called once at startup. Absence and storage faults both restore to
    /// logged-out; the transition to `Ready` happens unconditionally and
    /// exactly once. A repeat call is a logged no-op.
    pub async fn restore(&self) {
        if self.current().status == SessionStatus::Ready {
            tracing::warn!("session restore called after Ready; ignoring");
            return;
        }

        let secrets = Arc::clone(&self.secrets);
        let read = tokio::task::spawn_blocking(move || secrets.get()).await;

        let token = match read {
            Ok(Ok(Some(token))) if !token.is_empty() => Some(token),
            Ok(Ok(_)) => None,
            Ok(Err(err)) => {
                tracing::warn!("failed to read stored session token: {err:#}");
                None
            }
            Err(err) => {
                tracing::warn!("session token read task failed: {err}");
                None
            }
        };

        // Token and Ready land in one write so subscribers never observe
        // a Ready session that still carries the placeholder token.
        self.state.send_modify(|session| {
            session.token = token;
            session.status = SessionStatus::Ready;
        });
        tracing::debug!(
            authenticated = self.current().token.is_some(),
            "session restore complete"
        );
    }

    /// Persists the token best-effort, then authenticates in memory.
    ///
    /// A persistence fault is logged and swallowed: the session is
    /// authenticated for this run but will not survive a restart.
    /// Subscribers are notified after the in-memory write.
    ///
    /// # Errors
    /// Returns an error if `token` is empty or blank; storage is not
    /// touched in that case.
    pub async fn login(&self, token: &str) -> Result<()> {
        if token.trim().is_empty() {
            anyhow::bail!("login token must not be empty");
        }

        let secrets = Arc::clone(&self.secrets);
        let owned = token.to_string();
        match tokio::task::spawn_blocking(move || secrets.set(&owned)).await {
            Ok(Ok(())) => {}
            Ok(Err(err)) => {
                tracing::warn!("failed to persist session token; login is in-memory only: {err:#}");
            }
            Err(err) => {
                tracing::warn!("session token write task failed: {err}");
            }
        }

        self.state
            .send_modify(|session| session.token = Some(token.to_string()));
        Ok(())
    }

    /// Deletes the persisted token best-effort, then logs out in memory.
    ///
    /// Idempotent: logging out while logged out is a no-op.
    pub async fn logout(&self) {
        let secrets = Arc::clone(&self.secrets);
        match tokio::task::spawn_blocking(move || secrets.delete()).await {
            Ok(Ok(())) => {}
            Ok(Err(err)) => {
                tracing::warn!("failed to delete stored session token: {err:#}");
            }
            Err(err) => {
                tracing::warn!("session token delete task failed: {err}");
            }
        }

        self.state.send_modify(|session| session.token = None);
    }
}
