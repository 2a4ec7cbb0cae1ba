//! Rendering for the home screen.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use tiercheck_core::gateway::ProbeTier;

use crate::state::AppState;

const PROBES: &[(char, ProbeTier, &str)] = &[
    ('1', ProbeTier::Public, "no authentication"),
    ('2', ProbeTier::Secured, "any authenticated user"),
    ('3', ProbeTier::Admin, "admin role required"),
];

pub fn render_home(frame: &mut Frame, area: Rect, app: &AppState) {
    let username = app
        .session
        .identity()
        .map_or("(unknown)", |identity| identity.username.as_str());

    let block = Block::default()
        .title(" TierCheck ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let body = block.inner(area);
    frame.render_widget(block, area);

    let row = |offset: u16| Rect::new(body.x + 1, body.y + offset, body.width.saturating_sub(2), 1);

    frame.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled("Logged in as ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                username,
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
        ])),
        row(1),
    );

    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            "Probe an endpoint:",
            Style::default().fg(Color::Gray),
        ))),
        row(3),
    );

    for (i, (key, tier, note)) in PROBES.iter().enumerate() {
        let line = Line::from(vec![
            Span::styled(format!("  [{key}] "), Style::default().fg(Color::Cyan)),
            Span::styled(
                format!("{:<8}", tier.label()),
                Style::default().fg(Color::White),
            ),
            Span::styled(
                format!("{}  ({note})", tier.path()),
                Style::default().fg(Color::DarkGray),
            ),
        ]);
        frame.render_widget(Paragraph::new(line), row(4 + i as u16));
    }

    let hints = Line::from(vec![
        Span::styled("l", Style::default().fg(Color::Cyan)),
        Span::styled(" logout  ", Style::default().fg(Color::DarkGray)),
        Span::styled("q", Style::default().fg(Color::Cyan)),
        Span::styled(" quit", Style::default().fg(Color::DarkGray)),
    ]);
    frame.render_widget(Paragraph::new(hints), row(8));
}
