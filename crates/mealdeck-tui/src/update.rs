//! TUI reducer (update function).
//!
//! All state mutations happen here. The runtime calls `update(state, event)`
//! and executes the returned effects.
//!
//! Input routing follows the gate: while the session is restoring no key
//! reaches either stack, so neither stack can act before the session is
//! decidable.

use crossterm::event::{Event, KeyEvent, KeyEventKind, KeyModifiers};
use mealdeck_core::session::Session;

use crate::effects::UiEffect;
use crate::events::UiEvent;
use crate::features::tabs::MainState;
use crate::gate::Gate;
use crate::state::AppState;
use crate::{auth, tabs};

/// The main reducer function.
pub fn update(state: &mut AppState, event: UiEvent) -> Vec<UiEffect> {
    match event {
        UiEvent::Tick => {
            state.spinner_frame = state.spinner_frame.wrapping_add(1);
            vec![]
        }
        UiEvent::Session(session) => apply_session(state, session),
        UiEvent::Terminal(Event::Key(key)) if key.kind == KeyEventKind::Press => {
            handle_key(state, key)
        }
        UiEvent::Terminal(_) => vec![],
    }
}

fn handle_key(state: &mut AppState, key: KeyEvent) -> Vec<UiEffect> {
    // Ctrl+C quits from anywhere, including the loading screen.
    if let crossterm::event::KeyCode::Char('c') = key.code
        && key.modifiers.contains(KeyModifiers::CONTROL)
    {
        return vec![UiEffect::Quit];
    }

    match state.gate() {
        Gate::Loading => vec![],
        Gate::Unauthenticated => auth::handle_key(&mut state.auth, key),
        Gate::Authenticated => tabs::handle_key(&mut state.main, key),
    }
}

/// Applies a session snapshot and resets stack state on gate transitions.
fn apply_session(state: &mut AppState, session: Session) -> Vec<UiEffect> {
    let previous = state.gate();
    state.session = session;
    let current = state.gate();

    if previous != current {
        match current {
            Gate::Authenticated => {
                // Fresh main stack; drop typed credentials from memory.
                state.main = MainState::new(&state.config);
                state.auth.reset();
            }
            Gate::Unauthenticated => state.auth.reset(),
            Gate::Loading => {}
        }
    } else {
        // A session write that did not move the gate (e.g. a re-login)
        // still ends any outstanding submit.
        state.auth.submitting = false;
    }

    vec![]
}

#[cfg(test)]
mod tests {
    use crossterm::event::KeyCode;
    use mealdeck_core::config::Config;
    use mealdeck_core::sample;
    use mealdeck_core::session::SessionStatus;

    use super::*;

    fn initial_state() -> AppState {
        AppState::new(
            Config::default(),
            Session {
                token: None,
                status: SessionStatus::Initializing,
            },
        )
    }

    fn key_event(code: KeyCode) -> UiEvent {
        UiEvent::Terminal(Event::Key(KeyEvent::new(code, KeyModifiers::NONE)))
    }

    fn session_event(token: Option<&str>) -> UiEvent {
        UiEvent::Session(Session {
            token: token.map(str::to_string),
            status: SessionStatus::Ready,
        })
    }

    /// Test: no key reaches either stack while the session is restoring.
    #[test]
    fn test_loading_swallows_input() {
        let mut state = initial_state();
        assert_eq!(state.gate(), Gate::Loading);

        let effects = update(&mut state, key_event(KeyCode::Char('x')));
        assert!(effects.is_empty());
        assert_eq!(state.auth.login.email.value, "");
        assert_eq!(state.gate(), Gate::Loading);
    }

    /// Test: a restored token moves the gate straight to Authenticated.
    #[test]
    fn test_restore_with_token_mounts_main_stack() {
        let mut state = initial_state();
        update(&mut state, session_event(Some("mock-jwt-token-abc123")));
        assert_eq!(state.gate(), Gate::Authenticated);
    }

    /// Test: a restore without a token mounts the auth stack.
    #[test]
    fn test_restore_without_token_mounts_auth_stack() {
        let mut state = initial_state();
        update(&mut state, session_event(None));
        assert_eq!(state.gate(), Gate::Unauthenticated);
    }

    /// Test: the full login round trip through the reducer.
    #[test]
    fn test_login_round_trip() {
        let mut state = initial_state();
        update(&mut state, session_event(None));

        for c in sample::DEMO_EMAIL.chars() {
            update(&mut state, key_event(KeyCode::Char(c)));
        }
        update(&mut state, key_event(KeyCode::Tab));
        for c in sample::DEMO_PASSWORD.chars() {
            update(&mut state, key_event(KeyCode::Char(c)));
        }

        let effects = update(&mut state, key_event(KeyCode::Enter));
        assert_eq!(
            effects,
            vec![UiEffect::Login {
                token: sample::MOCK_TOKEN.to_string()
            }]
        );
        assert!(state.auth.submitting);

        // The store answers with an authenticated session.
        update(&mut state, session_event(Some(sample::MOCK_TOKEN)));
        assert_eq!(state.gate(), Gate::Authenticated);
        // Credentials are gone from the form state.
        assert_eq!(state.auth.login.password.value, "");
        assert!(!state.auth.submitting);
    }

    /// Test: logout resets the auth stack to a fresh login screen.
    #[test]
    fn test_logout_resets_auth_stack() {
        let mut state = initial_state();
        update(&mut state, session_event(Some(sample::MOCK_TOKEN)));

        state.main.tab = crate::tabs::MainTab::Profile;
        state.main.profile_cursor = MainState::LOGOUT_ENTRY;
        let effects = update(&mut state, key_event(KeyCode::Enter));
        assert_eq!(effects, vec![UiEffect::Logout]);

        update(&mut state, session_event(None));
        assert_eq!(state.gate(), Gate::Unauthenticated);
        assert_eq!(
            state.auth.route,
            crate::auth::AuthRoute::Login
        );
    }

    /// Test: Ctrl+C quits from the loading screen.
    #[test]
    fn test_ctrl_c_quits_anywhere() {
        let mut state = initial_state();
        let effects = update(
            &mut state,
            UiEvent::Terminal(Event::Key(KeyEvent::new(
                KeyCode::Char('c'),
                KeyModifiers::CONTROL,
            ))),
        );
        assert_eq!(effects, vec![UiEffect::Quit]);
    }

    /// Test: ticks only animate the spinner.
    #[test]
    fn test_tick_advances_spinner() {
        let mut state = initial_state();
        let frame = state.spinner_frame;
        assert!(update(&mut state, UiEvent::Tick).is_empty());
        assert_eq!(state.spinner_frame, frame + 1);
    }
}
