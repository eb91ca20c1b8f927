//! Auth stack reducer.
//!
//! Screen navigation, field editing, local validation, and the mocked
//! backend calls. A successful check emits `UiEffect::Login` with the
//! fixed literal token; nothing here talks to storage directly.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use mealdeck_core::sample;

use super::state::{AuthRoute, AuthStackState};
use crate::effects::UiEffect;

/// Handles a key press routed to the auth stack.
pub fn handle_key(auth: &mut AuthStackState, key: KeyEvent) -> Vec<UiEffect> {
    // Controls are disabled while a login call is outstanding.
    if auth.submitting {
        return vec![];
    }

    match auth.route {
        AuthRoute::Login => handle_login_key(auth, key),
        AuthRoute::Register => handle_register_key(auth, key),
        AuthRoute::ForgotPassword => handle_forgot_key(auth, key),
    }
}

fn is_text_input(key: KeyEvent) -> Option<char> {
    if key.modifiers.contains(KeyModifiers::CONTROL) || key.modifiers.contains(KeyModifiers::ALT) {
        return None;
    }
    match key.code {
        KeyCode::Char(c) => Some(c),
        _ => None,
    }
}

fn handle_login_key(auth: &mut AuthStackState, key: KeyEvent) -> Vec<UiEffect> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let form = &mut auth.login;

    match key.code {
        KeyCode::Char('r') if ctrl => {
            auth.route = AuthRoute::Register;
            vec![]
        }
        KeyCode::Char('f') if ctrl => {
            auth.route = AuthRoute::ForgotPassword;
            vec![]
        }
        KeyCode::Tab | KeyCode::Down => {
            form.focus = (form.focus + 1) % super::state::LoginForm::FIELDS;
            vec![]
        }
        KeyCode::BackTab | KeyCode::Up => {
            form.focus =
                (form.focus + super::state::LoginForm::FIELDS - 1) % super::state::LoginForm::FIELDS;
            vec![]
        }
        KeyCode::Backspace => {
            form.focused_field_mut().backspace();
            vec![]
        }
        KeyCode::Esc => {
            form.error = None;
            vec![]
        }
        KeyCode::Enter => submit_login(auth),
        _ => {
            if let Some(c) = is_text_input(key) {
                form.focused_field_mut().push(c);
            }
            vec![]
        }
    }
}

fn submit_login(auth: &mut AuthStackState) -> Vec<UiEffect> {
    let email = auth.login.email.value.trim().to_string();
    let password = auth.login.password.value.clone();

    if email.is_empty() || password.is_empty() {
        auth.login.error = Some("Please enter both email and password.".to_string());
        return vec![];
    }

    // Mocked backend call.
    if sample::check_credentials(&email, &password) {
        auth.login.error = None;
        auth.submitting = true;
        vec![UiEffect::Login {
            token: sample::MOCK_TOKEN.to_string(),
        }]
    } else {
        auth.login.error = Some("Invalid credentials.".to_string());
        vec![]
    }
}

fn handle_register_key(auth: &mut AuthStackState, key: KeyEvent) -> Vec<UiEffect> {
    let form = &mut auth.register;

    match key.code {
        KeyCode::Esc => {
            auth.route = AuthRoute::Login;
            vec![]
        }
        KeyCode::Tab | KeyCode::Down => {
            form.focus = (form.focus + 1) % super::state::RegisterForm::FIELDS;
            vec![]
        }
        KeyCode::BackTab | KeyCode::Up => {
            form.focus = (form.focus + super::state::RegisterForm::FIELDS - 1)
                % super::state::RegisterForm::FIELDS;
            vec![]
        }
        KeyCode::Backspace => {
            form.focused_field_mut().backspace();
            vec![]
        }
        KeyCode::Enter => submit_register(auth),
        _ => {
            if let Some(c) = is_text_input(key) {
                form.focused_field_mut().push(c);
            }
            vec![]
        }
    }
}

fn submit_register(auth: &mut AuthStackState) -> Vec<UiEffect> {
    let form = &mut auth.register;
    let name = form.name.value.trim();
    let email = form.email.value.trim();
    let password = &form.password.value;
    let confirm = &form.confirm.value;

    if name.is_empty() || email.is_empty() || password.is_empty() || confirm.is_empty() {
        form.error = Some("Please fill in all fields.".to_string());
        return vec![];
    }
    if password != confirm {
        form.error = Some("Passwords do not match.".to_string());
        return vec![];
    }
    if password.chars().count() < 6 {
        form.error = Some("Password should be at least 6 characters.".to_string());
        return vec![];
    }

    // Mocked backend call: registration always succeeds locally.
    form.error = None;
    auth.submitting = true;
    vec![UiEffect::Login {
        token: sample::MOCK_TOKEN.to_string(),
    }]
}

fn handle_forgot_key(auth: &mut AuthStackState, key: KeyEvent) -> Vec<UiEffect> {
    let form = &mut auth.forgot;

    match key.code {
        KeyCode::Esc => {
            auth.route = AuthRoute::Login;
            vec![]
        }
        KeyCode::Backspace => {
            form.email.backspace();
            vec![]
        }
        KeyCode::Enter => {
            let email = form.email.value.trim();
            if email.is_empty() {
                form.error = Some("Please enter your email address.".to_string());
                form.notice = None;
            } else if !email.contains('@') {
                form.error = Some("Please enter a valid email address.".to_string());
                form.notice = None;
            } else {
                form.error = None;
                form.notice = Some(
                    "If an account exists with this email, you will receive password reset \
                     instructions."
                        .to_string(),
                );
            }
            vec![]
        }
        _ => {
            if let Some(c) = is_text_input(key) {
                form.email.push(c);
            }
            vec![]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn type_text(auth: &mut AuthStackState, text: &str) {
        for c in text.chars() {
            handle_key(auth, key(KeyCode::Char(c)));
        }
    }

    /// Test: typing edits the focused field and Tab cycles focus.
    #[test]
    fn test_focus_and_editing() {
        let mut auth = AuthStackState::new();
        type_text(&mut auth, "me@x.io");
        assert_eq!(auth.login.email.value, "me@x.io");

        handle_key(&mut auth, key(KeyCode::Tab));
        type_text(&mut auth, "hunter2");
        assert_eq!(auth.login.password.value, "hunter2");

        handle_key(&mut auth, key(KeyCode::Backspace));
        assert_eq!(auth.login.password.value, "hunter");
    }

    /// Test: submitting with a missing field is an inline error, no effect.
    #[test]
    fn test_login_missing_fields() {
        let mut auth = AuthStackState::new();
        type_text(&mut auth, "me@x.io");

        let effects = handle_key(&mut auth, key(KeyCode::Enter));
        assert!(effects.is_empty());
        assert_eq!(
            auth.login.error.as_deref(),
            Some("Please enter both email and password.")
        );
        assert!(!auth.submitting);
    }

    /// Test: wrong credentials fail locally without an effect.
    #[test]
    fn test_login_invalid_credentials() {
        let mut auth = AuthStackState::new();
        type_text(&mut auth, "me@x.io");
        handle_key(&mut auth, key(KeyCode::Tab));
        type_text(&mut auth, "nope");

        let effects = handle_key(&mut auth, key(KeyCode::Enter));
        assert!(effects.is_empty());
        assert_eq!(auth.login.error.as_deref(), Some("Invalid credentials."));
    }

    /// Test: demo credentials emit a login effect with the mock token.
    #[test]
    fn test_login_success() {
        let mut auth = AuthStackState::new();
        type_text(&mut auth, sample::DEMO_EMAIL);
        handle_key(&mut auth, key(KeyCode::Tab));
        type_text(&mut auth, sample::DEMO_PASSWORD);

        let effects = handle_key(&mut auth, key(KeyCode::Enter));
        assert_eq!(
            effects,
            vec![UiEffect::Login {
                token: sample::MOCK_TOKEN.to_string()
            }]
        );
        assert!(auth.submitting);
        assert!(auth.login.error.is_none());
    }

    /// Test: input is ignored while a login call is outstanding.
    #[test]
    fn test_keys_disabled_while_submitting() {
        let mut auth = AuthStackState::new();
        auth.submitting = true;

        let effects = handle_key(&mut auth, key(KeyCode::Enter));
        assert!(effects.is_empty());
        type_text(&mut auth, "ignored");
        assert_eq!(auth.login.email.value, "");
    }

    /// Test: register screen validations run in the original's order.
    #[test]
    fn test_register_validation_order() {
        let mut auth = AuthStackState::new();
        handle_key(&mut auth, ctrl('r'));
        assert_eq!(auth.route, AuthRoute::Register);

        let effects = handle_key(&mut auth, key(KeyCode::Enter));
        assert!(effects.is_empty());
        assert_eq!(
            auth.register.error.as_deref(),
            Some("Please fill in all fields.")
        );

        type_text(&mut auth, "Alex");
        handle_key(&mut auth, key(KeyCode::Tab));
        type_text(&mut auth, "alex@x.io");
        handle_key(&mut auth, key(KeyCode::Tab));
        type_text(&mut auth, "secret1");
        handle_key(&mut auth, key(KeyCode::Tab));
        type_text(&mut auth, "secret2");
        handle_key(&mut auth, key(KeyCode::Enter));
        assert_eq!(
            auth.register.error.as_deref(),
            Some("Passwords do not match.")
        );

        // Shorten both passwords below the minimum.
        auth.register.password.value = "abc".to_string();
        auth.register.confirm.value = "abc".to_string();
        handle_key(&mut auth, key(KeyCode::Enter));
        assert_eq!(
            auth.register.error.as_deref(),
            Some("Password should be at least 6 characters.")
        );

        auth.register.password.value = "secret1".to_string();
        auth.register.confirm.value = "secret1".to_string();
        let effects = handle_key(&mut auth, key(KeyCode::Enter));
        assert_eq!(
            effects,
            vec![UiEffect::Login {
                token: sample::MOCK_TOKEN.to_string()
            }]
        );
    }

    /// Test: forgot-password flow validates and confirms without effects.
    #[test]
    fn test_forgot_password_flow() {
        let mut auth = AuthStackState::new();
        handle_key(&mut auth, ctrl('f'));
        assert_eq!(auth.route, AuthRoute::ForgotPassword);

        handle_key(&mut auth, key(KeyCode::Enter));
        assert_eq!(
            auth.forgot.error.as_deref(),
            Some("Please enter your email address.")
        );

        type_text(&mut auth, "not-an-email");
        handle_key(&mut auth, key(KeyCode::Enter));
        assert_eq!(
            auth.forgot.error.as_deref(),
            Some("Please enter a valid email address.")
        );

        auth.forgot.email.value = "me@x.io".to_string();
        let effects = handle_key(&mut auth, key(KeyCode::Enter));
        assert!(effects.is_empty());
        assert!(auth.forgot.error.is_none());
        assert!(auth.forgot.notice.as_deref().unwrap().starts_with("If an account exists"));

        handle_key(&mut auth, key(KeyCode::Esc));
        assert_eq!(auth.route, AuthRoute::Login);
    }
}
