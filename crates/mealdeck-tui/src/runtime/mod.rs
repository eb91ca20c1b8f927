//! TUI runtime - owns terminal, runs event loop, executes effects.
//!
//! This is the "Elm runtime" boundary: all side effects happen here.
//! The reducer stays pure and produces effects; this module executes them.
//!
//! The runtime also owns the injected `SessionStore`. It kicks off the
//! one-time `restore` at startup and forwards every store change from the
//! watch subscription into the reducer as `UiEvent::Session`; the gate
//! therefore reacts to the subscription, it never polls storage.

use std::io::Stdout;

use anyhow::{Context, Result};
use crossterm::event;
use mealdeck_core::config::Config;
use mealdeck_core::session::{Session, SessionStore};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tokio::sync::watch;

use crate::effects::UiEffect;
use crate::events::UiEvent;
use crate::state::AppState;
use crate::{render, terminal, update};

/// Target frame rate while animating (spinner, pending login).
pub const FRAME_DURATION: std::time::Duration = std::time::Duration::from_millis(16);

/// Poll duration when idle. Longer timeout reduces CPU usage when nothing
/// is happening.
pub const IDLE_POLL_DURATION: std::time::Duration = std::time::Duration::from_millis(100);

/// Full-screen TUI runtime.
///
/// Owns the terminal, the state, and the session store. Runs the event
/// loop and executes effects.
pub struct TuiRuntime {
    /// Terminal instance.
    terminal: Terminal<CrosstermBackend<Stdout>>,
    /// Application state.
    pub state: AppState,
    /// The injected session store; the runtime is its only mutator.
    store: SessionStore,
    /// Read-only session subscription drained each loop iteration.
    session_rx: watch::Receiver<Session>,
    /// Last time a Tick event was emitted.
    last_tick: std::time::Instant,
    /// Last time a terminal event was received (for fast tick during interaction).
    last_terminal_event: std::time::Instant,
}

impl TuiRuntime {
    /// Creates a new TUI runtime over an injected session store.
    pub fn new(config: Config, store: SessionStore) -> Result<Self> {
        // Set up panic hook BEFORE entering alternate screen
        terminal::install_panic_hook();

        let terminal = terminal::setup_terminal().context("Failed to setup terminal")?;

        let session_rx = store.subscribe();
        let state = AppState::new(config, store.current());

        let now = std::time::Instant::now();
        Ok(Self {
            terminal,
            state,
            store,
            session_rx,
            last_tick: now,
            last_terminal_event: now,
        })
    }

    /// Runs the main event loop.
    pub fn run(&mut self) -> Result<()> {
        // One-time session restore; the gate shows Loading until it lands.
        let store = self.store.clone();
        tokio::spawn(async move { store.restore().await });

        let result = self.event_loop();

        let _ = terminal::restore_terminal();
        result
    }

    fn event_loop(&mut self) -> Result<()> {
        let mut dirty = true; // Start dirty to ensure initial render

        while !self.state.should_quit {
            let events = self.collect_events()?;

            for event in events {
                if matches!(&event, UiEvent::Terminal(_)) {
                    self.last_terminal_event = std::time::Instant::now();
                }

                // Ticks cap the render rate; session changes render at once
                // so the mounted stack always matches the session.
                if matches!(&event, UiEvent::Tick | UiEvent::Session(_)) {
                    dirty = true;
                }

                let effects = update::update(&mut self.state, event);
                self.execute_effects(effects);
            }

            if dirty {
                self.terminal.draw(|frame| {
                    render::render(&self.state, frame);
                })?;
                dirty = false;
            }
        }

        Ok(())
    }

    /// Collects events from the session subscription and the terminal.
    fn collect_events(&mut self) -> Result<Vec<UiEvent>> {
        let mut events = Vec::new();

        // Session subscription first: a pending gate change should not sit
        // behind buffered keystrokes.
        if self.session_rx.has_changed().unwrap_or(false) {
            events.push(UiEvent::Session(
                self.session_rx.borrow_and_update().clone(),
            ));
        }

        // Fast polling while the spinner animates, a login is outstanding,
        // or the user is actively typing; slow otherwise.
        let recent_terminal_activity = self.last_terminal_event.elapsed() < IDLE_POLL_DURATION;
        let needs_fast_poll = self.state.gate() == crate::gate::Gate::Loading
            || self.state.auth.submitting
            || recent_terminal_activity;
        let tick_interval = if needs_fast_poll {
            FRAME_DURATION
        } else {
            IDLE_POLL_DURATION
        };

        let time_until_tick = tick_interval.saturating_sub(self.last_tick.elapsed());
        let poll_duration = if events.is_empty() {
            time_until_tick
        } else {
            std::time::Duration::ZERO
        };

        if event::poll(poll_duration)? {
            events.push(UiEvent::Terminal(event::read()?));
            // Drain any buffered burst without waiting.
            while event::poll(std::time::Duration::ZERO)? {
                events.push(UiEvent::Terminal(event::read()?));
            }
        }

        if self.last_tick.elapsed() >= tick_interval {
            events.push(UiEvent::Tick);
            self.last_tick = std::time::Instant::now();
        }

        Ok(events)
    }

    /// Executes reducer effects. Store calls are spawned so the loop keeps
    /// rendering while storage I/O is in flight.
    fn execute_effects(&mut self, effects: Vec<UiEffect>) {
        for effect in effects {
            match effect {
                UiEffect::Quit => self.state.should_quit = true,
                UiEffect::Login { token } => {
                    let store = self.store.clone();
                    tokio::spawn(async move {
                        // The mock backend only hands out non-empty tokens;
                        // a rejection here is a programming error worth a log.
                        if let Err(err) = store.login(&token).await {
                            tracing::warn!("login rejected: {err:#}");
                        }
                    });
                }
                UiEffect::Logout => {
                    let store = self.store.clone();
                    tokio::spawn(async move { store.logout().await });
                }
            }
        }
    }
}
