// TUI dashboard: layout, input handling, and widget rendering.
//
// The TUI owns a `ViewState` holding the read-only dataset plus everything
// derived from it for display. Input mutates the view state (page switches,
// questionnaire edits, recomputed tables) and the loop re-renders at ~30 fps.

pub mod input;
pub mod layout;
pub mod widgets;

use std::collections::HashMap;
use std::time::Duration;

use crossterm::event::{Event, EventStream};
use futures_util::StreamExt;
use ratatui::Frame;
use tokio::sync::mpsc;
use tracing::info;

use crate::analysis::breakdown::{position_breakdown, BreakdownRow};
use crate::analysis::similarity::{similarity_scores, AgentScore, Answers, Criteria};
use crate::analysis::summary::{agent_summary, AgentSummary};
use crate::config::Config;
use crate::data::{Dataset, Position, Region, ALL_POSITIONS, ALL_REGIONS};

use layout::build_layout;

// ---------------------------------------------------------------------------
// Pages and commands
// ---------------------------------------------------------------------------

/// The three dashboard pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Summary,
    Positions,
    Questionnaire,
}

impl Page {
    /// Page title for the status bar.
    pub fn title(&self) -> &'static str {
        match self {
            Page::Summary => "Agent Summary",
            Page::Positions => "Position Analysis",
            Page::Questionnaire => "Questionnaire",
        }
    }
}

/// Commands the input handler forwards to the event loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserCommand {
    Quit,
}

// ---------------------------------------------------------------------------
// Questionnaire state
// ---------------------------------------------------------------------------

/// Number of questionnaire form fields (three answers, three criteria).
pub const QUESTIONNAIRE_FIELDS: usize = 6;

/// Form state for the questionnaire page.
#[derive(Debug, Clone)]
pub struct QuestionnaireState {
    /// Focused form field, 0..QUESTIONNAIRE_FIELDS.
    pub cursor: usize,
    pub position: Position,
    /// Index into the configured draft years.
    pub draft_year_idx: usize,
    pub region: Region,
    pub criteria: Criteria,
    /// Computed scores; None until the user presses Enter.
    pub scores: Option<Vec<AgentScore>>,
}

impl Default for QuestionnaireState {
    fn default() -> Self {
        QuestionnaireState {
            cursor: 0,
            position: ALL_POSITIONS[0],
            draft_year_idx: 0,
            region: ALL_REGIONS[0],
            criteria: Criteria::default(),
            scores: None,
        }
    }
}

// ---------------------------------------------------------------------------
// ViewState
// ---------------------------------------------------------------------------

/// All state the dashboard needs to render: the generated tables plus the
/// derived rows for each page.
pub struct ViewState {
    pub dataset: Dataset,
    pub config: Config,
    /// Which page is active.
    pub page: Page,
    /// Agent summary rows (computed once; the tables never change).
    pub summary: Vec<AgentSummary>,
    /// Selected position on the analysis page.
    pub selected_position: Position,
    /// Breakdown rows for the selected position.
    pub breakdown: Vec<BreakdownRow>,
    /// Questionnaire form state and results.
    pub questionnaire: QuestionnaireState,
    /// Per-widget scroll offsets (keyed by widget name).
    pub scroll_offset: HashMap<String, usize>,
    /// One-line status message (export results, errors).
    pub status_message: Option<String>,
}

impl ViewState {
    /// Build the view state and precompute the page tables.
    pub fn new(dataset: Dataset, config: Config) -> Self {
        let summary = agent_summary(&dataset.contracts);
        let selected_position = ALL_POSITIONS[0];
        let breakdown = position_breakdown(
            &dataset.players,
            selected_position,
            &config.dataset.draft_years,
        );
        ViewState {
            dataset,
            config,
            page: Page::Summary,
            summary,
            selected_position,
            breakdown,
            questionnaire: QuestionnaireState::default(),
            scroll_offset: HashMap::new(),
            status_message: None,
        }
    }

    /// Recompute the breakdown rows after the selected position changed.
    pub fn recompute_breakdown(&mut self) {
        self.breakdown = position_breakdown(
            &self.dataset.players,
            self.selected_position,
            &self.config.dataset.draft_years,
        );
        self.scroll_offset.remove("breakdown");
    }

    /// The draft year currently selected on the questionnaire form.
    pub fn selected_draft_year(&self) -> u16 {
        self.config.dataset.draft_years[self.questionnaire.draft_year_idx]
    }

    /// Run the similarity scoring with the current form values.
    pub fn compute_scores(&mut self) {
        let answers = Answers {
            position: self.questionnaire.position,
            draft_year: self.selected_draft_year(),
            region: self.questionnaire.region,
        };
        let scores = similarity_scores(
            &self.dataset.players,
            answers,
            self.questionnaire.criteria,
            &self.config.scoring,
        );
        info!(
            position = %answers.position,
            draft_year = answers.draft_year,
            region = %answers.region,
            agents = scores.len(),
            "computed similarity scores"
        );
        self.questionnaire.scores = Some(scores);
        self.scroll_offset.remove("scores");
    }
}

// ---------------------------------------------------------------------------
// Render frame
// ---------------------------------------------------------------------------

/// Render the complete dashboard frame.
fn render_frame(frame: &mut Frame, state: &ViewState) {
    let app_layout = build_layout(frame.area());

    widgets::status_bar::render(frame, app_layout.status_bar, state);
    match state.page {
        Page::Summary => {
            widgets::summary::render(frame, app_layout.main_panel, state);
        }
        Page::Positions => {
            widgets::breakdown::render(frame, app_layout.main_panel, state);
        }
        Page::Questionnaire => {
            let (form, results) = layout::split_questionnaire(app_layout.main_panel);
            widgets::questionnaire::render(frame, form, state);
            widgets::scores::render(frame, results, state);
        }
    }
    widgets::help_bar::render(frame, app_layout.help_bar, state);
}

// ---------------------------------------------------------------------------
// Main TUI loop
// ---------------------------------------------------------------------------

/// Run the TUI event loop until the user quits.
///
/// 1. Initializes the terminal (raw mode, alternate screen).
/// 2. Installs a panic hook to restore the terminal on crash.
/// 3. Runs an async select loop: keyboard input and render ticks.
/// 4. Restores the terminal on clean exit.
pub async fn run(dataset: Dataset, config: Config) -> anyhow::Result<()> {
    let mut terminal = ratatui::init();

    // Restore the terminal on panic; chain the original hook after ours.
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = ratatui::restore();
        original_hook(panic_info);
    }));

    let mut view_state = ViewState::new(dataset, config);

    // Internal command channel: the input handler is synchronous, the
    // channel keeps the loop shape uniform if async producers are added.
    let (cmd_tx, mut cmd_rx) = mpsc::channel::<UserCommand>(16);

    let mut event_stream = EventStream::new();

    let mut render_tick = tokio::time::interval(Duration::from_millis(33));
    render_tick.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

    loop {
        tokio::select! {
            command = cmd_rx.recv() => {
                match command {
                    Some(UserCommand::Quit) | None => break,
                }
            }

            maybe_event = event_stream.next() => {
                match maybe_event {
                    Some(Ok(Event::Key(key_event))) => {
                        if let Some(command) = input::handle_key(key_event, &mut view_state) {
                            let _ = cmd_tx.send(command).await;
                        }
                    }
                    Some(Ok(_)) => {
                        // Mouse / resize events: the next render tick picks
                        // up the new size.
                    }
                    Some(Err(_)) | None => break,
                }
            }

            _ = render_tick.tick() => {
                terminal.draw(|frame| render_frame(frame, &view_state))?;
            }
        }
    }

    ratatui::restore();

    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
