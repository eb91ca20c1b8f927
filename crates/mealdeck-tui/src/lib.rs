//! Full-screen TUI implementation for mealdeck.

pub mod common;
pub mod effects;
pub mod events;
pub mod features;
pub mod gate;
pub mod render;
pub mod runtime;
pub mod state;
pub mod terminal;
pub mod update;

use std::io::{IsTerminal, stderr};

use anyhow::Result;
pub use features::{auth, tabs};
use mealdeck_core::config::Config;
use mealdeck_core::session::SessionStore;
pub use runtime::TuiRuntime;

/// Runs the interactive meal-planning client.
///
/// The session store is constructed by the caller and injected here; the
/// runtime kicks off the one-time session restore and gates navigation on
/// its outcome.
pub async fn run(config: &Config, store: SessionStore) -> Result<()> {
    if !stderr().is_terminal() {
        anyhow::bail!("mealdeck is an interactive terminal app and requires a terminal.");
    }

    let mut runtime = TuiRuntime::new(config.clone(), store)?;
    runtime.run()
}
