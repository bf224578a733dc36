// Agent similarity scoring for the questionnaire page.
//
// Walks the distinct agents in the players table and evaluates up to three
// independent criteria against the prospect's answers, accumulating an
// integer score 0..=3 per agent.

use std::collections::BTreeMap;

use crate::config::ScoringConfig;
use crate::data::{Player, Position, Region};

// ---------------------------------------------------------------------------
// Questionnaire inputs
// ---------------------------------------------------------------------------

/// The prospect's answers: who they are and where they expect to be drafted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Answers {
    pub position: Position,
    pub draft_year: u16,
    pub region: Region,
}

/// Which criteria the prospect cares about. Each enabled criterion can
/// contribute at most one point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Criteria {
    /// The agent should represent players in the prospect's region.
    pub same_region: bool,
    /// The agent should already have volume in the prospect's draft class.
    pub draft_class_volume: bool,
    /// The agent should have volume at the prospect's position within the
    /// draft class.
    pub position_volume: bool,
}

impl Criteria {
    /// Number of enabled criteria, the maximum attainable score.
    pub fn max_score(&self) -> u8 {
        self.same_region as u8 + self.draft_class_volume as u8 + self.position_volume as u8
    }
}

/// Similarity result for a single agent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgentScore {
    pub agent_name: String,
    pub score: u8,
}

// ---------------------------------------------------------------------------
// Core computation
// ---------------------------------------------------------------------------

/// Per-agent tallies accumulated in one pass over the players table.
#[derive(Debug, Default)]
struct AgentTally {
    region_match: bool,
    draft_class_clients: usize,
    position_class_clients: usize,
}

/// Score every agent appearing in the players table against the answers.
///
/// Criteria (each +1 when enabled and satisfied):
/// 1. Some client of the agent is in the answer region.
/// 2. The agent has strictly more than `scoring.min_draft_class_players`
///    clients in the answer draft class.
/// 3. The agent has strictly more than `scoring.min_position_players`
///    clients at the answer position within the draft class.
///
/// Results are sorted by score descending, ties by agent name ascending.
/// With no criteria enabled every agent scores 0; an empty players table
/// yields an empty result.
pub fn similarity_scores(
    players: &[Player],
    answers: Answers,
    criteria: Criteria,
    scoring: &ScoringConfig,
) -> Vec<AgentScore> {
    let mut tallies: BTreeMap<&str, AgentTally> = BTreeMap::new();

    for player in players {
        let tally = tallies.entry(player.agent_name.as_str()).or_default();
        if player.region == answers.region {
            tally.region_match = true;
        }
        if player.draft_year == answers.draft_year {
            tally.draft_class_clients += 1;
            if player.position == answers.position {
                tally.position_class_clients += 1;
            }
        }
    }

    let mut scores: Vec<AgentScore> = tallies
        .into_iter()
        .map(|(agent_name, tally)| {
            let mut score = 0u8;
            if criteria.same_region && tally.region_match {
                score += 1;
            }
            if criteria.draft_class_volume
                && tally.draft_class_clients > scoring.min_draft_class_players
            {
                score += 1;
            }
            if criteria.position_volume
                && tally.position_class_clients > scoring.min_position_players
            {
                score += 1;
            }
            AgentScore {
                agent_name: agent_name.to_string(),
                score,
            }
        })
        .collect();

    scores.sort_by(|a, b| {
        b.score
            .cmp(&a.score)
            .then_with(|| a.agent_name.cmp(&b.agent_name))
    });

    scores
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
