//! Application state composition.
//!
//! ```text
//! AppState
//! ├── session: Session          (read-only snapshot from the store)
//! ├── auth: AuthStackState      (login/register/forgot forms)
//! ├── main: MainState           (tabs, cursors, sample data)
//! └── spinner_frame             (loading indicator animation)
//! ```
//!
//! The session snapshot is only ever replaced by `UiEvent::Session`; the
//! reducer never fabricates one. Which of `auth`/`main` is live is decided
//! by the gate, a pure function of the snapshot.

use mealdeck_core::config::Config;
use mealdeck_core::session::Session;

use crate::features::auth::AuthStackState;
use crate::features::tabs::MainState;
use crate::gate::Gate;

/// Top-level TUI state.
pub struct AppState {
    /// Flag indicating the app should quit.
    pub should_quit: bool,
    pub config: Config,
    /// Latest session snapshot delivered by the store subscription.
    pub session: Session,
    /// Unauthenticated stack state.
    pub auth: AuthStackState,
    /// Authenticated stack state.
    pub main: MainState,
    /// Spinner animation frame counter (loading screen).
    pub spinner_frame: usize,
}

impl AppState {
    /// Creates the initial state from the store's current session.
    pub fn new(config: Config, session: Session) -> Self {
        let main = MainState::new(&config);
        Self {
            should_quit: false,
            config,
            session,
            auth: AuthStackState::new(),
            main,
            spinner_frame: 0,
        }
    }

    /// The surface currently mounted.
    pub fn gate(&self) -> Gate {
        Gate::for_session(&self.session)
    }
}
