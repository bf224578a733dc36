// Similarity score widget: per-agent score table with a small gauge.
//
// One row per agent, score gauge scaled to the number of enabled criteria.
// Empty state prompts the user to compute scores first.

use ratatui::layout::{Margin, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{
    Block, Borders, List, ListItem, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState,
};
use ratatui::Frame;

use crate::analysis::similarity::AgentScore;
use crate::tui::ViewState;

/// Render the similarity score list into the given area.
pub fn render(frame: &mut Frame, area: Rect, state: &ViewState) {
    let Some(ref scores) = state.questionnaire.scores else {
        let paragraph = Paragraph::new("  Answer the questionnaire and press Enter.")
            .style(Style::default().fg(Color::DarkGray))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title("Similarity Scores"),
            );
        frame.render_widget(paragraph, area);
        return;
    };

    let max_score = state.questionnaire.criteria.max_score();

    let visible_rows = (area.height as usize).saturating_sub(2);
    let total = scores.len();
    let max_offset = total.saturating_sub(visible_rows);
    let scroll_offset = state
        .scroll_offset
        .get("scores")
        .copied()
        .unwrap_or(0)
        .min(max_offset);

    let items: Vec<ListItem> = scores
        .iter()
        .skip(scroll_offset)
        .take(visible_rows.max(1))
        .map(|score| score_item(score, max_score))
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!("Similarity Scores ({total})")),
    );
    frame.render_widget(list, area);

    if total > visible_rows {
        let mut scrollbar_state =
            ScrollbarState::new(total.saturating_sub(visible_rows)).position(scroll_offset);
        frame.render_stateful_widget(
            Scrollbar::new(ScrollbarOrientation::VerticalRight),
            area.inner(Margin {
                vertical: 1,
                horizontal: 0,
            }),
            &mut scrollbar_state,
        );
    }
}

/// Format one agent's score as a ListItem with a gauge.
fn score_item<'a>(score: &AgentScore, max_score: u8) -> ListItem<'a> {
    let color = score_color(score.score, max_score);
    let spans = vec![
        Span::styled(
            format!(" {:<10}", score.agent_name),
            Style::default().fg(Color::White),
        ),
        Span::styled(score_bar(score.score, max_score), Style::default().fg(color)),
        Span::styled(
            format!(" {}/{}", score.score, max_score),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ),
    ];
    ListItem::new(Line::from(spans))
}

/// Gauge string for a score out of the enabled criteria count.
pub fn score_bar(score: u8, max_score: u8) -> String {
    let filled = score.min(max_score) as usize;
    let empty = max_score.saturating_sub(score) as usize;
    format!("[{}{}]", "#".repeat(filled), "-".repeat(empty))
}

/// Color for a score relative to the attainable maximum.
pub fn score_color(score: u8, max_score: u8) -> Color {
    if max_score == 0 || score == 0 {
        Color::DarkGray
    } else if score == max_score {
        Color::Green
    } else {
        Color::Yellow
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::similarity::Criteria;
    use crate::tui::tests::test_state;

    #[test]
    fn score_bar_shapes() {
        assert_eq!(score_bar(0, 3), "[---]");
        assert_eq!(score_bar(2, 3), "[##-]");
        assert_eq!(score_bar(3, 3), "[###]");
        assert_eq!(score_bar(0, 0), "[]");
    }

    #[test]
    fn score_bar_clamps_overflow() {
        assert_eq!(score_bar(5, 3), "[###]");
    }

    #[test]
    fn score_colors() {
        assert_eq!(score_color(0, 3), Color::DarkGray);
        assert_eq!(score_color(1, 3), Color::Yellow);
        assert_eq!(score_color(3, 3), Color::Green);
        assert_eq!(score_color(0, 0), Color::DarkGray);
    }

    #[test]
    fn render_does_not_panic_without_scores() {
        let backend = ratatui::backend::TestBackend::new(60, 20);
        let mut terminal = ratatui::Terminal::new(backend).unwrap();
        let state = test_state();
        terminal
            .draw(|frame| render(frame, frame.area(), &state))
            .unwrap();
    }

    #[test]
    fn render_does_not_panic_with_scores() {
        let backend = ratatui::backend::TestBackend::new(60, 20);
        let mut terminal = ratatui::Terminal::new(backend).unwrap();
        let mut state = test_state();
        state.questionnaire.criteria = Criteria {
            same_region: true,
            draft_class_volume: true,
            position_volume: true,
        };
        state.compute_scores();
        terminal
            .draw(|frame| render(frame, frame.area(), &state))
            .unwrap();
    }

    #[test]
    fn render_does_not_panic_when_scrolled_past_end() {
        let backend = ratatui::backend::TestBackend::new(60, 6);
        let mut terminal = ratatui::Terminal::new(backend).unwrap();
        let mut state = test_state();
        state.compute_scores();
        state.scroll_offset.insert("scores".to_string(), 10_000);
        terminal
            .draw(|frame| render(frame, frame.area(), &state))
            .unwrap();
    }
}
