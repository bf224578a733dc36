// Agent contract summary: signed vs. expected totals per agent.

use std::collections::BTreeMap;

use crate::data::Contract;

/// Aggregated contract performance for a single agent.
#[derive(Debug, Clone, PartialEq)]
pub struct AgentSummary {
    pub agent_name: String,
    /// Sum of signed contract value across the agent's contracts, $MM.
    pub total_signed: f64,
    /// Sum of pre-signing expectations, $MM.
    pub expected_signed: f64,
    /// total_signed - expected_signed. Positive means the agent beat
    /// expectations in aggregate.
    pub difference: f64,
}

/// Group contracts by agent and sum signed/expected value.
///
/// Rows are sorted by total signed descending; ties break by agent name
/// ascending so the table order is fully deterministic. Agents with no
/// contracts do not appear.
pub fn agent_summary(contracts: &[Contract]) -> Vec<AgentSummary> {
    let mut totals: BTreeMap<&str, (f64, f64)> = BTreeMap::new();
    for contract in contracts {
        let entry = totals.entry(contract.agent_name.as_str()).or_insert((0.0, 0.0));
        entry.0 += contract.total_signed;
        entry.1 += contract.expected_signed;
    }

    let mut rows: Vec<AgentSummary> = totals
        .into_iter()
        .map(|(agent_name, (total_signed, expected_signed))| AgentSummary {
            agent_name: agent_name.to_string(),
            total_signed,
            expected_signed,
            difference: total_signed - expected_signed,
        })
        .collect();

    rows.sort_by(|a, b| {
        b.total_signed
            .total_cmp(&a.total_signed)
            .then_with(|| a.agent_name.cmp(&b.agent_name))
    });

    rows
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
