// Position breakdown: per-agent, per-draft-year client counts for one
// position. Drives the Position Analysis bar chart.

use std::collections::BTreeMap;

use crate::data::{Player, Position};

/// Client counts for one agent at the selected position, one count per
/// configured draft year (same order as `draft_years`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BreakdownRow {
    pub agent_name: String,
    pub counts: Vec<u64>,
}

impl BreakdownRow {
    /// Total clients at the position across all draft years.
    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }
}

/// Count players at `position` per (agent, draft year).
///
/// Returns one row per agent that has at least one client at the position,
/// sorted by agent name. A draft year outside `draft_years` is ignored
/// (cannot happen for generated data, the generator draws from the same
/// list).
pub fn position_breakdown(
    players: &[Player],
    position: Position,
    draft_years: &[u16],
) -> Vec<BreakdownRow> {
    let mut counts: BTreeMap<&str, Vec<u64>> = BTreeMap::new();

    for player in players {
        if player.position != position {
            continue;
        }
        let Some(year_idx) = draft_years.iter().position(|&y| y == player.draft_year) else {
            continue;
        };
        counts
            .entry(player.agent_name.as_str())
            .or_insert_with(|| vec![0; draft_years.len()])[year_idx] += 1;
    }

    counts
        .into_iter()
        .map(|(agent_name, counts)| BreakdownRow {
            agent_name: agent_name.to_string(),
            counts,
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
