// Help bar widget: per-page keyboard shortcut hints.

use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::tui::{Page, ViewState};

/// Shortcut hints for the active page.
pub fn hint_text(page: Page) -> &'static str {
    match page {
        Page::Summary => " q:Quit | 1-3:Pages | j/k:Scroll | e:Export",
        Page::Positions => " q:Quit | 1-3:Pages | p/←/→:Position | e:Export",
        Page::Questionnaire => {
            " q:Quit | 1-3:Pages | ↑/↓:Field | ←/→/Space:Edit | Enter:Score | e:Export"
        }
    }
}

/// Render the one-row help bar.
pub fn render(frame: &mut Frame, area: Rect, state: &ViewState) {
    let paragraph = Paragraph::new(Line::from(vec![Span::styled(
        hint_text(state.page),
        Style::default().fg(Color::White).add_modifier(Modifier::DIM),
    )]))
    .style(Style::default().bg(Color::DarkGray));
    frame.render_widget(paragraph, area);
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::tests::test_state;

    #[test]
    fn hints_mention_page_keys() {
        assert!(hint_text(Page::Summary).contains("Scroll"));
        assert!(hint_text(Page::Positions).contains("Position"));
        assert!(hint_text(Page::Questionnaire).contains("Enter:Score"));
        for page in [Page::Summary, Page::Positions, Page::Questionnaire] {
            assert!(hint_text(page).contains("q:Quit"));
            assert!(hint_text(page).contains("e:Export"));
        }
    }

    #[test]
    fn render_does_not_panic() {
        let backend = ratatui::backend::TestBackend::new(120, 1);
        let mut terminal = ratatui::Terminal::new(backend).unwrap();
        let mut state = test_state();
        for page in [Page::Summary, Page::Positions, Page::Questionnaire] {
            state.page = page;
            terminal
                .draw(|frame| render(frame, frame.area(), &state))
                .unwrap();
        }
    }
}
