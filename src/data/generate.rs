// Synthetic dataset generation.
//
// Fabricates the three tables from a seeded RNG so the same seed always
// reproduces the same session. Players inherit their agent's region, which
// keeps the referential linkage player -> agent -> region coherent.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::info;

use crate::config::DatasetConfig;
use crate::data::{Agent, Contract, Dataset, Player, ALL_POSITIONS, ALL_REGIONS};

/// Signed amounts are uniform in [1, 50) $MM.
const TOTAL_SIGNED_RANGE: std::ops::Range<f64> = 1.0..50.0;
/// Expectation offset relative to the signed amount, in $MM.
const EXPECTED_OFFSET_RANGE: std::ops::Range<f64> = -5.0..10.0;

/// Generate a full dataset from the configured table sizes.
///
/// When `config.seed` is absent a fresh seed is drawn and logged, so any
/// session can be reproduced from its log file.
pub fn generate(config: &DatasetConfig) -> Dataset {
    let seed = config.seed.unwrap_or_else(|| rand::rng().random());
    info!(seed, "generating synthetic dataset");
    generate_seeded(config, seed)
}

/// Generate a dataset from an explicit seed.
pub fn generate_seeded(config: &DatasetConfig, seed: u64) -> Dataset {
    let mut rng = StdRng::seed_from_u64(seed);

    // Agents first: players and contracts reference them by name.
    let agents: Vec<Agent> = (1..=config.agents)
        .map(|i| Agent {
            name: format!("Agent {i}"),
            region: ALL_REGIONS[rng.random_range(0..ALL_REGIONS.len())],
        })
        .collect();

    let players: Vec<Player> = (1..=config.players)
        .map(|i| {
            let agent = &agents[rng.random_range(0..agents.len())];
            Player {
                name: format!("Player {i}"),
                position: ALL_POSITIONS[rng.random_range(0..ALL_POSITIONS.len())],
                draft_year: config.draft_years[rng.random_range(0..config.draft_years.len())],
                agent_name: agent.name.clone(),
                region: agent.region,
            }
        })
        .collect();

    // Contract clients continue the player numbering; they are veterans
    // outside the prospect table.
    let contracts: Vec<Contract> = (1..=config.contracts)
        .map(|i| {
            let agent = &agents[rng.random_range(0..agents.len())];
            let total_signed = round_cents(rng.random_range(TOTAL_SIGNED_RANGE));
            let expected_signed =
                round_cents(total_signed + rng.random_range(EXPECTED_OFFSET_RANGE));
            Contract {
                player_name: format!("Player {}", config.players + i),
                agent_name: agent.name.clone(),
                total_signed,
                expected_signed,
            }
        })
        .collect();

    info!(
        agents = agents.len(),
        players = players.len(),
        contracts = contracts.len(),
        "dataset generated"
    );

    Dataset {
        agents,
        players,
        contracts,
    }
}

/// Round a dollar amount to cents.
fn round_cents(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
