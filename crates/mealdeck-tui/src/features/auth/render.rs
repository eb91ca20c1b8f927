//! Auth stack view.
//!
//! Rendering functions for the login, register, and forgot-password
//! screens.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use super::state::{AuthRoute, AuthStackState, TextField};
use crate::common::centered_rect;

const PANEL_WIDTH: u16 = 64;

/// Renders whichever auth screen is on top of the stack.
pub fn render(auth: &AuthStackState, frame: &mut Frame, area: Rect) {
    let (title, height) = match auth.route {
        AuthRoute::Login => ("mealdeck - Sign in", 14),
        AuthRoute::Register => ("mealdeck - Create account", 17),
        AuthRoute::ForgotPassword => ("mealdeck - Reset password", 13),
    };

    let panel = centered_rect(area, PANEL_WIDTH, height);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .title(title);
    let inner = block.inner(panel);
    frame.render_widget(block, panel);

    let lines = match auth.route {
        AuthRoute::Login => login_lines(auth),
        AuthRoute::Register => register_lines(auth),
        AuthRoute::ForgotPassword => forgot_lines(auth),
    };

    frame.render_widget(Paragraph::new(lines), inner);
}

fn field_line(field: &TextField, focused: bool) -> Line<'static> {
    let label_style = if focused {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray)
    };
    let mut value = field.display();
    if focused {
        value.push('_');
    }
    Line::from(vec![
        Span::styled(format!("{:<18}", field.label), label_style),
        Span::styled(value, Style::default().fg(Color::White)),
    ])
}

fn error_line(error: &str) -> Line<'static> {
    Line::from(Span::styled(
        error.to_string(),
        Style::default().fg(Color::Red),
    ))
}

fn hint_line(hint: &'static str) -> Line<'static> {
    Line::from(Span::styled(hint, Style::default().fg(Color::DarkGray)))
}

fn login_lines(auth: &AuthStackState) -> Vec<Line<'static>> {
    let form = &auth.login;
    let mut lines = vec![
        Line::from(Span::styled(
            "Plan your week. Eat well.",
            Style::default().fg(Color::Gray),
        )),
        Line::from(""),
        field_line(&form.email, form.focus == 0),
        field_line(&form.password, form.focus == 1),
        Line::from(""),
    ];

    if auth.submitting {
        lines.push(Line::from(Span::styled(
            "Signing in...",
            Style::default().fg(Color::Yellow),
        )));
    } else if let Some(error) = &form.error {
        lines.push(error_line(error));
    } else {
        lines.push(Line::from(""));
    }

    lines.push(Line::from(""));
    lines.push(hint_line("Enter to sign in, Tab to switch fields"));
    lines.push(hint_line("Ctrl+R create account, Ctrl+F forgot password"));
    lines
}

fn register_lines(auth: &AuthStackState) -> Vec<Line<'static>> {
    let form = &auth.register;
    let mut lines = vec![
        Line::from(""),
        field_line(&form.name, form.focus == 0),
        field_line(&form.email, form.focus == 1),
        field_line(&form.password, form.focus == 2),
        field_line(&form.confirm, form.focus == 3),
        Line::from(""),
    ];

    if auth.submitting {
        lines.push(Line::from(Span::styled(
            "Creating account...",
            Style::default().fg(Color::Yellow),
        )));
    } else if let Some(error) = &form.error {
        lines.push(error_line(error));
    } else {
        lines.push(Line::from(""));
    }

    lines.push(Line::from(""));
    lines.push(hint_line("Enter to register, Tab to switch fields"));
    lines.push(hint_line("Esc back to sign in"));
    lines
}

fn forgot_lines(auth: &AuthStackState) -> Vec<Line<'static>> {
    let form = &auth.forgot;
    let mut lines = vec![
        Line::from(Span::styled(
            "We'll send reset instructions to your email.",
            Style::default().fg(Color::Gray),
        )),
        Line::from(""),
        field_line(&form.email, true),
        Line::from(""),
    ];

    if let Some(error) = &form.error {
        lines.push(error_line(error));
    } else if let Some(notice) = &form.notice {
        lines.push(Line::from(Span::styled(
            notice.clone(),
            Style::default().fg(Color::Green),
        )));
    } else {
        lines.push(Line::from(""));
    }

    lines.push(Line::from(""));
    lines.push(hint_line("Enter to send, Esc back to sign in"));
    lines
}
