//! Rendering for the auth screens.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use super::state::{LoginForm, RegisterForm, TextField};

/// Centers a fixed-size box within `area`, clamped to fit.
fn centered_box(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

fn render_field(frame: &mut Frame, area: Rect, label: &str, field: &TextField, focused: bool) {
    let (prompt_style, text_style) = if focused {
        (
            Style::default().fg(Color::Cyan),
            Style::default().fg(Color::White),
        )
    } else {
        (
            Style::default().fg(Color::DarkGray),
            Style::default().fg(Color::Gray),
        )
    };

    let mut spans = vec![
        Span::styled(format!("{label:>9}: "), prompt_style),
        Span::styled(field.display(), text_style),
    ];
    if focused {
        spans.push(Span::styled("█", Style::default().fg(Color::Cyan)));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_hints(frame: &mut Frame, area: Rect, hints: &[(&str, &str)]) {
    let mut spans = Vec::new();
    for (i, (key, action)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled("  ", Style::default()));
        }
        spans.push(Span::styled(*key, Style::default().fg(Color::Cyan)));
        spans.push(Span::styled(
            format!(" {action}"),
            Style::default().fg(Color::DarkGray),
        ));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

pub fn render_login(frame: &mut Frame, area: Rect, form: &LoginForm) {
    let boxed = centered_box(area, 52, 12);
    let block = Block::default()
        .title(" TierCheck · Login ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let body = block.inner(boxed);
    frame.render_widget(block, boxed);

    let row = |offset: u16| Rect::new(body.x + 1, body.y + offset, body.width.saturating_sub(2), 1);

    render_field(frame, row(1), "Username", &form.username, form.focus == 0);
    render_field(frame, row(2), "Password", &form.password, form.focus == 1);

    if let Some(error) = &form.error {
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                error.clone(),
                Style::default().fg(Color::Red),
            ))),
            row(4),
        );
    }

    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            "Test accounts: testuser/password123, admin/admin123",
            Style::default().fg(Color::DarkGray),
        ))),
        row(6),
    );

    render_hints(
        frame,
        row(8),
        &[
            ("Enter", "login"),
            ("Tab", "next field"),
            ("Ctrl+R", "register"),
            ("Esc", "quit"),
        ],
    );
}

pub fn render_register(frame: &mut Frame, area: Rect, form: &RegisterForm) {
    let boxed = centered_box(area, 52, 12);
    let block = Block::default()
        .title(" TierCheck · Register ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));
    let body = block.inner(boxed);
    frame.render_widget(block, boxed);

    let row = |offset: u16| Rect::new(body.x + 1, body.y + offset, body.width.saturating_sub(2), 1);

    render_field(frame, row(1), "Username", &form.username, form.focus == 0);
    render_field(frame, row(2), "Password", &form.password, form.focus == 1);
    render_field(frame, row(3), "Email", &form.email, form.focus == 2);

    if let Some(error) = &form.error {
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                error.clone(),
                Style::default().fg(Color::Red),
            ))),
            row(5),
        );
    }

    render_hints(
        frame,
        row(7),
        &[
            ("Enter", "register"),
            ("Tab", "next field"),
            ("Esc", "back to login"),
        ],
    );
}
