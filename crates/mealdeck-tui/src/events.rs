//! UI event types.
//!
//! Everything the reducer reacts to arrives as one of these. Session
//! changes are delivered through the store's watch subscription and
//! re-enter the loop as `UiEvent::Session`.

use mealdeck_core::session::Session;

/// Events consumed by the reducer.
#[derive(Debug, Clone)]
pub enum UiEvent {
    /// Periodic tick; drives the spinner and caps the render rate.
    Tick,
    /// Raw terminal input.
    Terminal(crossterm::event::Event),
    /// A new session snapshot from the store subscription.
    Session(Session),
}
