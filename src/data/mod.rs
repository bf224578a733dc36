// Core record types: players, agents, contracts.
//
// All three tables are generated once at startup (see `generate`) and held
// in memory, read-only, for the lifetime of the session.

pub mod generate;

use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// Position
// ---------------------------------------------------------------------------

/// Player positions tracked by the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Position {
    Pitcher,
    Catcher,
    Infielder,
    Outfielder,
}

/// All positions, in display/cycle order.
pub const ALL_POSITIONS: &[Position] = &[
    Position::Pitcher,
    Position::Catcher,
    Position::Infielder,
    Position::Outfielder,
];

impl Position {
    /// Parse a position label (case-insensitive).
    pub fn from_label(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "pitcher" => Some(Position::Pitcher),
            "catcher" => Some(Position::Catcher),
            "infielder" => Some(Position::Infielder),
            "outfielder" => Some(Position::Outfielder),
            _ => None,
        }
    }

    /// Return the display label for this position.
    pub fn label(&self) -> &'static str {
        match self {
            Position::Pitcher => "Pitcher",
            Position::Catcher => "Catcher",
            Position::Infielder => "Infielder",
            Position::Outfielder => "Outfielder",
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

// ---------------------------------------------------------------------------
// Region
// ---------------------------------------------------------------------------

/// Geographic regions an agent operates in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Region {
    Northwest,
    Southwest,
    Midwest,
    Northeast,
    Southeast,
}

/// All regions, in display/cycle order.
pub const ALL_REGIONS: &[Region] = &[
    Region::Northwest,
    Region::Southwest,
    Region::Midwest,
    Region::Northeast,
    Region::Southeast,
];

impl Region {
    /// Parse a region label (case-insensitive).
    pub fn from_label(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "northwest" => Some(Region::Northwest),
            "southwest" => Some(Region::Southwest),
            "midwest" => Some(Region::Midwest),
            "northeast" => Some(Region::Northeast),
            "southeast" => Some(Region::Southeast),
            _ => None,
        }
    }

    /// Return the display label for this region.
    pub fn label(&self) -> &'static str {
        match self {
            Region::Northwest => "Northwest",
            Region::Southwest => "Southwest",
            Region::Midwest => "Midwest",
            Region::Northeast => "Northeast",
            Region::Southeast => "Southeast",
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

// ---------------------------------------------------------------------------
// Records
// ---------------------------------------------------------------------------

/// A represented player (a prospect client of an agent).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    /// Unique display name ("Player 17").
    pub name: String,
    pub position: Position,
    /// Draft class year (one of the configured years).
    pub draft_year: u16,
    /// Foreign key into the agents table.
    pub agent_name: String,
    /// The player's region; inherited from the agent at generation time.
    pub region: Region,
}

/// An agent representing players.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Agent {
    /// Unique display name ("Agent 4").
    pub name: String,
    pub region: Region,
}

/// A signed contract, compared against its pre-signing expectation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Contract {
    /// Client name. Contract clients use their own numbering range and
    /// need not appear in the players table.
    pub player_name: String,
    /// Foreign key into the agents table.
    pub agent_name: String,
    /// Total signed amount in $MM, rounded to cents.
    pub total_signed: f64,
    /// Expected signed amount in $MM, rounded to cents.
    pub expected_signed: f64,
}

/// The complete in-memory dataset for one session.
#[derive(Debug, Clone)]
pub struct Dataset {
    pub agents: Vec<Agent>,
    pub players: Vec<Player>,
    pub contracts: Vec<Contract>,
}

impl Dataset {
    /// Look up an agent's region by name.
    pub fn agent_region(&self, agent_name: &str) -> Option<Region> {
        self.agents
            .iter()
            .find(|a| a.name == agent_name)
            .map(|a| a.region)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
