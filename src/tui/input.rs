// Keyboard input handling.
//
// Translates crossterm key events into local ViewState mutations (page
// switching, form edits, scrolling, recomputation) or a UserCommand for
// the event loop (quit).

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::data::{ALL_POSITIONS, ALL_REGIONS};
use crate::export;

use super::{Page, UserCommand, ViewState, QUESTIONNAIRE_FIELDS};

/// Handle a keyboard event.
///
/// Returns `Some(UserCommand)` when the key press should be forwarded to
/// the event loop (quit). Returns `None` when the key press was handled
/// locally by mutating `ViewState`.
pub fn handle_key(key_event: KeyEvent, state: &mut ViewState) -> Option<UserCommand> {
    // Only process key press events. On Windows, crossterm emits both
    // Press and Release events for each physical keypress; ignoring
    // non-Press events prevents double-processing.
    if key_event.kind != KeyEventKind::Press {
        return None;
    }

    // Ctrl+C always quits (escape hatch).
    if key_event.modifiers.contains(KeyModifiers::CONTROL)
        && key_event.code == KeyCode::Char('c')
    {
        return Some(UserCommand::Quit);
    }

    match key_event.code {
        KeyCode::Char('q') => return Some(UserCommand::Quit),

        // Page switching
        KeyCode::Char('1') => {
            switch_page(state, Page::Summary);
            return None;
        }
        KeyCode::Char('2') => {
            switch_page(state, Page::Positions);
            return None;
        }
        KeyCode::Char('3') => {
            switch_page(state, Page::Questionnaire);
            return None;
        }

        // Export the active page's table
        KeyCode::Char('e') => {
            export_current(state);
            return None;
        }

        _ => {}
    }

    match state.page {
        Page::Summary => handle_summary_key(key_event, state),
        Page::Positions => handle_positions_key(key_event, state),
        Page::Questionnaire => handle_questionnaire_key(key_event, state),
    }

    None
}

fn switch_page(state: &mut ViewState, page: Page) {
    state.page = page;
    state.status_message = None;
}

// ---------------------------------------------------------------------------
// Per-page key handling
// ---------------------------------------------------------------------------

fn handle_summary_key(key_event: KeyEvent, state: &mut ViewState) {
    match key_event.code {
        KeyCode::Up | KeyCode::Char('k') => scroll_up(state, "summary", 1),
        KeyCode::Down | KeyCode::Char('j') => scroll_down(state, "summary", 1),
        KeyCode::PageUp => scroll_up(state, "summary", 10),
        KeyCode::PageDown => scroll_down(state, "summary", 10),
        _ => {}
    }
}

fn handle_positions_key(key_event: KeyEvent, state: &mut ViewState) {
    match key_event.code {
        KeyCode::Char('p') | KeyCode::Right => {
            state.selected_position = cycle(ALL_POSITIONS, state.selected_position, 1);
            state.recompute_breakdown();
        }
        KeyCode::Left => {
            state.selected_position = cycle(ALL_POSITIONS, state.selected_position, -1);
            state.recompute_breakdown();
        }
        _ => {}
    }
}

fn handle_questionnaire_key(key_event: KeyEvent, state: &mut ViewState) {
    match key_event.code {
        KeyCode::Up => {
            let q = &mut state.questionnaire;
            q.cursor = q.cursor.checked_sub(1).unwrap_or(QUESTIONNAIRE_FIELDS - 1);
        }
        KeyCode::Down => {
            let q = &mut state.questionnaire;
            q.cursor = (q.cursor + 1) % QUESTIONNAIRE_FIELDS;
        }
        KeyCode::Left => edit_focused_field(state, -1),
        KeyCode::Right | KeyCode::Char(' ') => edit_focused_field(state, 1),
        KeyCode::Enter => state.compute_scores(),
        KeyCode::Char('k') => scroll_up(state, "scores", 1),
        KeyCode::Char('j') => scroll_down(state, "scores", 1),
        _ => {}
    }
}

/// Change the value of the focused questionnaire field. Selection fields
/// cycle through their options; criterion fields toggle.
fn edit_focused_field(state: &mut ViewState, direction: i32) {
    let years = state.config.dataset.draft_years.len();
    let q = &mut state.questionnaire;
    match q.cursor {
        0 => q.position = cycle(ALL_POSITIONS, q.position, direction),
        1 => {
            q.draft_year_idx =
                (q.draft_year_idx as i32 + direction).rem_euclid(years as i32) as usize;
        }
        2 => q.region = cycle(ALL_REGIONS, q.region, direction),
        3 => q.criteria.same_region = !q.criteria.same_region,
        4 => q.criteria.draft_class_volume = !q.criteria.draft_class_volume,
        5 => q.criteria.position_volume = !q.criteria.position_volume,
        _ => {}
    }
}

// ---------------------------------------------------------------------------
// Export
// ---------------------------------------------------------------------------

/// Export the active page's table and record the outcome in the status bar.
fn export_current(state: &mut ViewState) {
    let dir = std::path::PathBuf::from(&state.config.export.dir);
    let result = match state.page {
        Page::Summary => export::export_summary(&dir, &state.summary),
        Page::Positions => export::export_breakdown(
            &dir,
            state.selected_position,
            &state.config.dataset.draft_years,
            &state.breakdown,
        ),
        Page::Questionnaire => match &state.questionnaire.scores {
            Some(scores) => export::export_scores(&dir, scores),
            None => {
                state.status_message =
                    Some("Nothing to export: press Enter to compute scores first".to_string());
                return;
            }
        },
    };

    state.status_message = Some(match result {
        Ok(path) => format!("Exported {}", path.display()),
        Err(e) => format!("Export failed: {e}"),
    });
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Step through a fixed option list, wrapping at both ends.
fn cycle<T: Copy + PartialEq>(options: &[T], current: T, direction: i32) -> T {
    let len = options.len() as i32;
    let idx = options
        .iter()
        .position(|o| *o == current)
        .unwrap_or(0) as i32;
    options[(idx + direction).rem_euclid(len) as usize]
}

fn scroll_up(state: &mut ViewState, key: &str, lines: usize) {
    let offset = state.scroll_offset.entry(key.to_string()).or_insert(0);
    *offset = offset.saturating_sub(lines);
}

fn scroll_down(state: &mut ViewState, key: &str, lines: usize) {
    let offset = state.scroll_offset.entry(key.to_string()).or_insert(0);
    *offset = offset.saturating_add(lines);
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{Position, Region};
    use crate::tui::tests::test_state;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn q_quits() {
        let mut state = test_state();
        assert_eq!(
            handle_key(key(KeyCode::Char('q')), &mut state),
            Some(UserCommand::Quit)
        );
    }

    #[test]
    fn ctrl_c_quits() {
        let mut state = test_state();
        let event = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(handle_key(event, &mut state), Some(UserCommand::Quit));
    }

    #[test]
    fn number_keys_switch_pages() {
        let mut state = test_state();
        assert!(handle_key(key(KeyCode::Char('2')), &mut state).is_none());
        assert_eq!(state.page, Page::Positions);
        handle_key(key(KeyCode::Char('3')), &mut state);
        assert_eq!(state.page, Page::Questionnaire);
        handle_key(key(KeyCode::Char('1')), &mut state);
        assert_eq!(state.page, Page::Summary);
    }

    #[test]
    fn page_switch_clears_status_message() {
        let mut state = test_state();
        state.status_message = Some("old".to_string());
        handle_key(key(KeyCode::Char('2')), &mut state);
        assert!(state.status_message.is_none());
    }

    #[test]
    fn summary_scrolls() {
        let mut state = test_state();
        handle_key(key(KeyCode::Down), &mut state);
        handle_key(key(KeyCode::Char('j')), &mut state);
        assert_eq!(state.scroll_offset.get("summary"), Some(&2));
        handle_key(key(KeyCode::Up), &mut state);
        assert_eq!(state.scroll_offset.get("summary"), Some(&1));
        // Scrolling above the top saturates at zero
        handle_key(key(KeyCode::Up), &mut state);
        handle_key(key(KeyCode::Up), &mut state);
        assert_eq!(state.scroll_offset.get("summary"), Some(&0));
    }

    #[test]
    fn positions_page_cycles_position() {
        let mut state = test_state();
        handle_key(key(KeyCode::Char('2')), &mut state);
        assert_eq!(state.selected_position, Position::Pitcher);
        handle_key(key(KeyCode::Char('p')), &mut state);
        assert_eq!(state.selected_position, Position::Catcher);
        handle_key(key(KeyCode::Left), &mut state);
        assert_eq!(state.selected_position, Position::Pitcher);
        // Wrap backwards from the first position
        handle_key(key(KeyCode::Left), &mut state);
        assert_eq!(state.selected_position, Position::Outfielder);
    }

    #[test]
    fn questionnaire_cursor_wraps() {
        let mut state = test_state();
        handle_key(key(KeyCode::Char('3')), &mut state);
        assert_eq!(state.questionnaire.cursor, 0);
        handle_key(key(KeyCode::Up), &mut state);
        assert_eq!(state.questionnaire.cursor, QUESTIONNAIRE_FIELDS - 1);
        handle_key(key(KeyCode::Down), &mut state);
        assert_eq!(state.questionnaire.cursor, 0);
    }

    #[test]
    fn questionnaire_edits_selection_fields() {
        let mut state = test_state();
        handle_key(key(KeyCode::Char('3')), &mut state);

        // Field 0: position
        handle_key(key(KeyCode::Right), &mut state);
        assert_eq!(state.questionnaire.position, Position::Catcher);
        handle_key(key(KeyCode::Left), &mut state);
        assert_eq!(state.questionnaire.position, Position::Pitcher);

        // Field 1: draft year
        handle_key(key(KeyCode::Down), &mut state);
        handle_key(key(KeyCode::Right), &mut state);
        assert_eq!(state.selected_draft_year(), 2026);
        handle_key(key(KeyCode::Left), &mut state);
        handle_key(key(KeyCode::Left), &mut state);
        assert_eq!(state.selected_draft_year(), 2027);

        // Field 2: region
        handle_key(key(KeyCode::Down), &mut state);
        handle_key(key(KeyCode::Right), &mut state);
        assert_eq!(state.questionnaire.region, Region::Southwest);
    }

    #[test]
    fn questionnaire_space_toggles_criteria() {
        let mut state = test_state();
        handle_key(key(KeyCode::Char('3')), &mut state);
        for _ in 0..3 {
            handle_key(key(KeyCode::Down), &mut state);
        }
        assert!(!state.questionnaire.criteria.same_region);
        handle_key(key(KeyCode::Char(' ')), &mut state);
        assert!(state.questionnaire.criteria.same_region);
        handle_key(key(KeyCode::Char(' ')), &mut state);
        assert!(!state.questionnaire.criteria.same_region);
    }

    #[test]
    fn questionnaire_enter_computes_scores() {
        let mut state = test_state();
        handle_key(key(KeyCode::Char('3')), &mut state);
        assert!(state.questionnaire.scores.is_none());
        handle_key(key(KeyCode::Enter), &mut state);
        assert!(state.questionnaire.scores.is_some());
    }

    #[test]
    fn export_without_scores_sets_message() {
        let mut state = test_state();
        handle_key(key(KeyCode::Char('3')), &mut state);
        handle_key(key(KeyCode::Char('e')), &mut state);
        let message = state.status_message.as_deref().unwrap();
        assert!(message.contains("Nothing to export"), "got: {message}");
    }

    #[test]
    fn export_summary_reports_path() {
        let mut state = test_state();
        let dir = std::env::temp_dir().join("scoutdesk_input_export");
        let _ = std::fs::remove_dir_all(&dir);
        state.config.export.dir = dir.to_str().unwrap().to_string();

        handle_key(key(KeyCode::Char('e')), &mut state);
        let message = state.status_message.as_deref().unwrap();
        assert!(message.starts_with("Exported "), "got: {message}");

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn release_events_ignored() {
        let mut state = test_state();
        let mut event = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE);
        event.kind = KeyEventKind::Release;
        assert!(handle_key(event, &mut state).is_none());
    }

    #[test]
    fn cycle_wraps_both_directions() {
        let options = [1, 2, 3];
        assert_eq!(cycle(&options, 3, 1), 1);
        assert_eq!(cycle(&options, 1, -1), 3);
        assert_eq!(cycle(&options, 2, 1), 3);
    }
}
