//! Pure view/render functions for the TUI.
//!
//! Functions here take `&AppState` by immutable reference and draw to a
//! ratatui frame. No mutations, no effects.

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::features::{auth, home};
use crate::state::{AppState, Screen};

/// Height of the status line at the bottom.
const STATUS_HEIGHT: u16 = 1;

/// Spinner frames for in-flight requests.
const SPINNER_FRAMES: &[&str] = &["◐", "◓", "◑", "◒"];

pub fn render(app: &AppState, frame: &mut Frame) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(STATUS_HEIGHT)])
        .split(frame.area());

    match &app.screen {
        Screen::Login(form) => auth::render_login(frame, chunks[0], form),
        Screen::Register(form) => auth::render_register(frame, chunks[0], form),
        Screen::Home => home::render_home(frame, chunks[0], app),
    }

    render_status_line(app, frame, chunks[1]);
}

fn render_status_line(app: &AppState, frame: &mut Frame, area: ratatui::layout::Rect) {
    let mut spans = Vec::new();

    if app.is_busy() {
        let spinner = SPINNER_FRAMES[app.spinner_frame % SPINNER_FRAMES.len()];
        spans.push(Span::styled(
            format!(" {spinner} "),
            Style::default().fg(Color::Cyan),
        ));
    } else {
        spans.push(Span::raw(" "));
    }

    let status = app.session.status_message();
    let color = status_color(status);
    spans.push(Span::styled(status.to_string(), Style::default().fg(color)));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Failures render red, successes green, everything else gray.
fn status_color(status: &str) -> Color {
    if status.contains("failed") || status.starts_with("Error") || status.starts_with("Network") {
        Color::Red
    } else if status.contains("successful") || status.contains("endpoint:") {
        Color::Green
    } else {
        Color::Gray
    }
}
