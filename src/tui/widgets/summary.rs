// Agent summary widget: signed vs. expected contract totals per agent.
//
// Scrollable table: Agent, Total Signed, Expected, Difference.
// Difference is green when the agent beat expectations, red otherwise.

use ratatui::layout::{Constraint, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, Cell, Row, Table};
use ratatui::Frame;

use crate::analysis::summary::AgentSummary;
use crate::tui::ViewState;

/// Render the agent summary table into the given area.
pub fn render(frame: &mut Frame, area: Rect, state: &ViewState) {
    let header = Row::new(vec![
        Cell::from("Agent"),
        Cell::from("Total Signed ($MM)"),
        Cell::from("Expected ($MM)"),
        Cell::from("Difference ($MM)"),
    ])
    .style(
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    );

    // Visible row count: borders plus the header row.
    let visible_rows = (area.height as usize).saturating_sub(3);
    let total = state.summary.len();
    let max_offset = total.saturating_sub(visible_rows);
    let scroll_offset = state
        .scroll_offset
        .get("summary")
        .copied()
        .unwrap_or(0)
        .min(max_offset);

    let rows: Vec<Row> = state
        .summary
        .iter()
        .skip(scroll_offset)
        .take(visible_rows.max(1))
        .map(summary_row)
        .collect();

    let widths = [
        Constraint::Min(12),
        Constraint::Length(20),
        Constraint::Length(18),
        Constraint::Length(18),
    ];

    let table = Table::new(rows, widths).header(header).block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!("Agent Summary ({total})")),
    );

    frame.render_widget(table, area);
}

fn summary_row(summary: &AgentSummary) -> Row<'_> {
    let diff_style = if summary.difference >= 0.0 {
        Style::default().fg(Color::Green)
    } else {
        Style::default().fg(Color::Red)
    };

    Row::new(vec![
        Cell::from(summary.agent_name.clone()),
        Cell::from(format!("{:.2}", summary.total_signed)),
        Cell::from(format!("{:.2}", summary.expected_signed)),
        Cell::from(format!("{:+.2}", summary.difference)).style(diff_style),
    ])
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::tests::test_state;

    #[test]
    fn render_does_not_panic() {
        let backend = ratatui::backend::TestBackend::new(100, 30);
        let mut terminal = ratatui::Terminal::new(backend).unwrap();
        let state = test_state();
        terminal
            .draw(|frame| render(frame, frame.area(), &state))
            .unwrap();
    }

    #[test]
    fn render_does_not_panic_when_scrolled_past_end() {
        let backend = ratatui::backend::TestBackend::new(100, 10);
        let mut terminal = ratatui::Terminal::new(backend).unwrap();
        let mut state = test_state();
        state.scroll_offset.insert("summary".to_string(), 10_000);
        terminal
            .draw(|frame| render(frame, frame.area(), &state))
            .unwrap();
    }

    #[test]
    fn render_does_not_panic_with_empty_summary() {
        let backend = ratatui::backend::TestBackend::new(100, 30);
        let mut terminal = ratatui::Terminal::new(backend).unwrap();
        let mut state = test_state();
        state.summary.clear();
        terminal
            .draw(|frame| render(frame, frame.area(), &state))
            .unwrap();
    }

    #[test]
    fn render_does_not_panic_in_tiny_area() {
        let backend = ratatui::backend::TestBackend::new(20, 3);
        let mut terminal = ratatui::Terminal::new(backend).unwrap();
        let state = test_state();
        terminal
            .draw(|frame| render(frame, frame.area(), &state))
            .unwrap();
    }
}
