// Questionnaire form widget: prospect answers and matching criteria.
//
// Six rows: three selection fields cycled with Left/Right and three
// criterion checkboxes toggled with Space. The focused row is highlighted.

use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, Paragraph};
use ratatui::Frame;

use crate::tui::{QuestionnaireState, ViewState};

/// Render the questionnaire form into the given area.
pub fn render(frame: &mut Frame, area: Rect, state: &ViewState) {
    let q = &state.questionnaire;
    let draft_year = state.selected_draft_year();

    let items: Vec<ListItem> = form_lines(q, draft_year)
        .into_iter()
        .enumerate()
        .map(|(i, line)| {
            let style = if i == q.cursor {
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            ListItem::new(Line::from(line)).style(style)
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Agent Questionnaire"),
    );
    frame.render_widget(list, area);

    // Hint line pinned under the form when there is room for it.
    if area.height > 9 {
        let hint_area = Rect {
            x: area.x + 1,
            y: area.y + area.height - 2,
            width: area.width.saturating_sub(2),
            height: 1,
        };
        let hint = Paragraph::new(Span::styled(
            "Enter: calculate similarity scores",
            Style::default().fg(Color::DarkGray),
        ));
        frame.render_widget(hint, hint_area);
    }
}

/// The six form rows as plain strings, cursor-independent.
pub fn form_lines(q: &QuestionnaireState, draft_year: u16) -> Vec<String> {
    vec![
        format!(" Position:    < {} >", q.position),
        format!(" Draft class: < {draft_year} >"),
        format!(" Region:      < {} >", q.region),
        format!(" {} Agent in my region", checkbox(q.criteria.same_region)),
        format!(
            " {} Agent with volume in my draft class",
            checkbox(q.criteria.draft_class_volume)
        ),
        format!(
            " {} Agent with volume at my position",
            checkbox(q.criteria.position_volume)
        ),
    ]
}

fn checkbox(checked: bool) -> &'static str {
    if checked {
        "[x]"
    } else {
        "[ ]"
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
