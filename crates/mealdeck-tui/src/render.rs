//! Top-level render dispatch.
//!
//! Exactly one surface renders per frame, decided by the gate. The loading
//! surface is an indicator only; neither stack is mounted until the
//! session is decidable.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::common::centered_rect;
use crate::gate::Gate;
use crate::state::AppState;
use crate::{auth, tabs};

const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Renders the whole frame from state.
pub fn render(state: &AppState, frame: &mut Frame) {
    let area = frame.area();
    match state.gate() {
        Gate::Loading => render_loading(state, frame, area),
        Gate::Unauthenticated => auth::render(&state.auth, frame, area),
        Gate::Authenticated => tabs::render(&state.main, frame, area),
    }
}

fn render_loading(state: &AppState, frame: &mut Frame, area: Rect) {
    let spinner = SPINNER_FRAMES[state.spinner_frame % SPINNER_FRAMES.len()];
    let panel = centered_rect(area, 30, 3);
    let lines = vec![
        Line::from(Span::styled(
            "mealdeck",
            Style::default().fg(Color::Cyan),
        ))
        .centered(),
        Line::from(""),
        Line::from(Span::styled(
            format!("{spinner} Restoring session..."),
            Style::default().fg(Color::Gray),
        ))
        .centered(),
    ];
    frame.render_widget(Paragraph::new(lines), panel);
}
