//! Auth stack state.
//!
//! Form contents live here; validation and submission are in `update`.

/// Which auth screen is on top of the stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthRoute {
    #[default]
    Login,
    Register,
    ForgotPassword,
}

/// A single-line text input.
#[derive(Debug, Clone)]
pub struct TextField {
    pub label: &'static str,
    pub value: String,
    /// Render as bullets (passwords).
    pub masked: bool,
}

impl TextField {
    pub fn new(label: &'static str, masked: bool) -> Self {
        Self {
            label,
            value: String::new(),
            masked,
        }
    }

    /// The string shown in the UI (masked fields render as bullets).
    pub fn display(&self) -> String {
        if self.masked {
            "\u{2022}".repeat(self.value.chars().count())
        } else {
            self.value.clone()
        }
    }

    pub fn push(&mut self, ch: char) {
        self.value.push(ch);
    }

    pub fn backspace(&mut self) {
        self.value.pop();
    }
}

/// Login screen form.
#[derive(Debug, Clone)]
pub struct LoginForm {
    pub email: TextField,
    pub password: TextField,
    pub focus: usize,
    pub error: Option<String>,
}

impl LoginForm {
    pub const FIELDS: usize = 2;

    pub fn new() -> Self {
        Self {
            email: TextField::new("Email", false),
            password: TextField::new("Password", true),
            focus: 0,
            error: None,
        }
    }

    pub fn focused_field_mut(&mut self) -> &mut TextField {
        match self.focus {
            0 => &mut self.email,
            _ => &mut self.password,
        }
    }
}

/// Register screen form.
#[derive(Debug, Clone)]
pub struct RegisterForm {
    pub name: TextField,
    pub email: TextField,
    pub password: TextField,
    pub confirm: TextField,
    pub focus: usize,
    pub error: Option<String>,
}

impl RegisterForm {
    pub const FIELDS: usize = 4;

    pub fn new() -> Self {
        Self {
            name: TextField::new("Full name", false),
            email: TextField::new("Email", false),
            password: TextField::new("Password", true),
            confirm: TextField::new("Confirm password", true),
            focus: 0,
            error: None,
        }
    }

    pub fn focused_field_mut(&mut self) -> &mut TextField {
        match self.focus {
            0 => &mut self.name,
            1 => &mut self.email,
            2 => &mut self.password,
            _ => &mut self.confirm,
        }
    }
}

/// Forgot-password screen form.
#[derive(Debug, Clone)]
pub struct ForgotForm {
    pub email: TextField,
    pub error: Option<String>,
    /// Confirmation line after a submitted request.
    pub notice: Option<String>,
}

impl ForgotForm {
    pub fn new() -> Self {
        Self {
            email: TextField::new("Email address", false),
            error: None,
            notice: None,
        }
    }
}

/// State for the whole unauthenticated stack.
#[derive(Debug, Clone)]
pub struct AuthStackState {
    pub route: AuthRoute,
    pub login: LoginForm,
    pub register: RegisterForm,
    pub forgot: ForgotForm,
    /// True while a login call is outstanding; input is disabled so a
    /// double-tap cannot race two logins.
    pub submitting: bool,
}

impl Default for AuthStackState {
    fn default() -> Self {
        Self::new()
    }
}

impl AuthStackState {
    pub fn new() -> Self {
        Self {
            route: AuthRoute::Login,
            login: LoginForm::new(),
            register: RegisterForm::new(),
            forgot: ForgotForm::new(),
            submitting: false,
        }
    }

    /// Clears all forms and returns to the login screen (used on logout).
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}
