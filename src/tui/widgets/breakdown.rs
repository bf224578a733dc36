// Position analysis widget: grouped bar chart of per-agent draft-class
// client counts for the selected position.
//
// One bar group per agent, one bar per draft year. The title carries the
// selected position and a year color legend.

use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Bar, BarChart, BarGroup, Block, Borders, Paragraph};
use ratatui::Frame;

use crate::analysis::breakdown::BreakdownRow;
use crate::tui::ViewState;

/// Bar colors per draft-year index.
const YEAR_COLORS: &[Color] = &[Color::Cyan, Color::Yellow, Color::Green];

/// Render the position breakdown chart into the given area.
pub fn render(frame: &mut Frame, area: Rect, state: &ViewState) {
    let draft_years = &state.config.dataset.draft_years;
    let title = build_title(state.selected_position.label(), draft_years);

    if state.breakdown.is_empty() {
        let paragraph = Paragraph::new("  No players at this position.")
            .style(Style::default().fg(Color::DarkGray))
            .block(Block::default().borders(Borders::ALL).title(title));
        frame.render_widget(paragraph, area);
        return;
    }

    let mut chart = BarChart::default()
        .block(Block::default().borders(Borders::ALL).title(title))
        .bar_width(4)
        .bar_gap(1)
        .group_gap(2);

    for row in &state.breakdown {
        chart = chart.data(bar_group(row, draft_years));
    }

    frame.render_widget(chart, area);
}

/// Build one bar group for an agent, one bar per draft year.
fn bar_group(row: &BreakdownRow, draft_years: &[u16]) -> BarGroup<'static> {
    let bars: Vec<Bar> = row
        .counts
        .iter()
        .enumerate()
        .map(|(i, &count)| {
            let color = YEAR_COLORS[i % YEAR_COLORS.len()];
            let year_label = draft_years
                .get(i)
                .map(|y| format!("'{:02}", y % 100))
                .unwrap_or_default();
            Bar::default()
                .value(count)
                .label(Line::from(year_label))
                .style(Style::default().fg(color))
        })
        .collect();

    BarGroup::default()
        .label(Line::from(short_agent_label(&row.agent_name)))
        .bars(&bars)
}

/// Compact agent label for the x axis ("Agent 12" -> "A12").
pub fn short_agent_label(agent_name: &str) -> String {
    match agent_name.strip_prefix("Agent ") {
        Some(number) => format!("A{number}"),
        None => agent_name.to_string(),
    }
}

/// Chart title with the selected position and a year color legend.
fn build_title(position_label: &str, draft_years: &[u16]) -> Line<'static> {
    let mut spans = vec![Span::raw(format!("Position Analysis: {position_label}  "))];
    for (i, year) in draft_years.iter().enumerate() {
        let color = YEAR_COLORS[i % YEAR_COLORS.len()];
        spans.push(Span::styled(
            format!("■{year} "),
            Style::default().fg(color),
        ));
    }
    Line::from(spans)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::tests::test_state;

    #[test]
    fn short_agent_label_compacts_known_prefix() {
        assert_eq!(short_agent_label("Agent 1"), "A1");
        assert_eq!(short_agent_label("Agent 12"), "A12");
    }

    #[test]
    fn short_agent_label_passes_through_other_names() {
        assert_eq!(short_agent_label("Boras Corp"), "Boras Corp");
    }

    #[test]
    fn render_does_not_panic() {
        let backend = ratatui::backend::TestBackend::new(120, 30);
        let mut terminal = ratatui::Terminal::new(backend).unwrap();
        let state = test_state();
        terminal
            .draw(|frame| render(frame, frame.area(), &state))
            .unwrap();
    }

    #[test]
    fn render_does_not_panic_with_empty_breakdown() {
        let backend = ratatui::backend::TestBackend::new(120, 30);
        let mut terminal = ratatui::Terminal::new(backend).unwrap();
        let mut state = test_state();
        state.breakdown.clear();
        terminal
            .draw(|frame| render(frame, frame.area(), &state))
            .unwrap();
    }

    #[test]
    fn render_does_not_panic_in_tiny_area() {
        let backend = ratatui::backend::TestBackend::new(10, 4);
        let mut terminal = ratatui::Terminal::new(backend).unwrap();
        let state = test_state();
        terminal
            .draw(|frame| render(frame, frame.area(), &state))
            .unwrap();
    }
}
