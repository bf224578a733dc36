// Status bar widget: dataset counts, active page, and the last status message.

use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::tui::ViewState;

/// Render the one-row status bar.
pub fn render(frame: &mut Frame, area: Rect, state: &ViewState) {
    let mut spans = vec![
        Span::styled(
            " Scout Desk ",
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!(
                " {} agents | {} players | {} contracts ",
                state.dataset.agents.len(),
                state.dataset.players.len(),
                state.dataset.contracts.len()
            ),
            Style::default().fg(Color::White),
        ),
        Span::styled(
            format!("| {} ", state.page.title()),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
    ];

    if let Some(ref message) = state.status_message {
        spans.push(Span::styled(
            format!("| {message} "),
            Style::default().fg(Color::Green),
        ));
    }

    let paragraph =
        Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(paragraph, area);
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
