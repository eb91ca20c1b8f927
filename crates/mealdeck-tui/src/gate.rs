//! Root navigation gate.
//!
//! A pure function of the session deciding which screen stack is mounted.
//! Exactly one of the three outputs is ever rendered; in particular the
//! auth stack can never flash while the session is still restoring.

use mealdeck_core::session::{Session, SessionStatus};

/// Which top-level surface the app shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gate {
    /// Session restore has not completed; a blocking indicator only.
    Loading,
    /// Restore completed with no token; the auth stack.
    Unauthenticated,
    /// Restore completed with a token; the main tabs.
    Authenticated,
}

impl Gate {
    /// Maps a session to the surface it mounts.
    pub fn for_session(session: &Session) -> Self {
        match session.status {
            SessionStatus::Initializing => Gate::Loading,
            SessionStatus::Ready => {
                if session.token.is_some() {
                    Gate::Authenticated
                } else {
                    Gate::Unauthenticated
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(token: Option<&str>, status: SessionStatus) -> Session {
        Session {
            token: token.map(str::to_string),
            status,
        }
    }

    /// Test: initializing always maps to Loading, token or not.
    #[test]
    fn test_initializing_is_loading() {
        assert_eq!(
            Gate::for_session(&session(None, SessionStatus::Initializing)),
            Gate::Loading
        );
        // A token written before restore completes still may not mount a stack.
        assert_eq!(
            Gate::for_session(&session(Some("abc"), SessionStatus::Initializing)),
            Gate::Loading
        );
    }

    /// Test: ready without a token mounts the auth stack.
    #[test]
    fn test_ready_without_token_is_unauthenticated() {
        assert_eq!(
            Gate::for_session(&session(None, SessionStatus::Ready)),
            Gate::Unauthenticated
        );
    }

    /// Test: ready with a token mounts the main stack.
    #[test]
    fn test_ready_with_token_is_authenticated() {
        assert_eq!(
            Gate::for_session(&session(Some("abc"), SessionStatus::Ready)),
            Gate::Authenticated
        );
    }
}
