//! UI effect types.
//!
//! Effects are commands returned by the reducer that the runtime executes.
//! The reducer stays pure: it mutates state and returns effects, never
//! calls the session store or spawns tasks directly.

/// Effects returned by the reducer for the runtime to execute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEffect {
    /// Quit the application.
    Quit,

    /// Authenticate with the given token (mock backend already vetted it).
    Login { token: String },

    /// Clear the session, in memory and on disk.
    Logout,
}
