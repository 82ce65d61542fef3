// ═══════════════════════════════════════════════════════════════════════
// Agent Trait — interface for anything that drives the player
//
// Agents receive a `GameView` (a read-only snapshot), never the mutable
// GameState. They answer with one direction per call; the runner feeds
// it to the engine and asks again until the game is won or the agent
// gives up.
// ═══════════════════════════════════════════════════════════════════════

use crate::random::RandomAgent;
use crate::solver::SolverAgent;
use serde::{Deserialize, Serialize};
use sotelo_engine::visibility::GameView;
use sotelo_engine::{Direction, GameError};
use std::fmt;
use std::str::FromStr;

pub trait Agent: Send {
    /// Human-readable name for this agent (e.g. "Solver", "Random").
    fn name(&self) -> &str;

    /// Next direction to move in. `Ok(None)` means the agent has nothing
    /// more to play; an error ends the game as a failure.
    fn next_move(&mut self, view: &GameView) -> Result<Option<Direction>, GameError>;
}

/// Built-in automated agents, selectable by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AgentKind {
    Solver,
    Random,
}

impl AgentKind {
    /// Build a fresh agent. `seed` only matters for randomized agents.
    pub fn build(self, seed: u64) -> Box<dyn Agent> {
        match self {
            AgentKind::Solver => Box::new(SolverAgent::new()),
            AgentKind::Random => Box::new(RandomAgent::new(seed)),
        }
    }
}

impl fmt::Display for AgentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AgentKind::Solver => write!(f, "solver"),
            AgentKind::Random => write!(f, "random"),
        }
    }
}

impl FromStr for AgentKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "solver" | "bot" => Ok(AgentKind::Solver),
            "random" => Ok(AgentKind::Random),
            other => Err(format!("unknown agent {:?} (expected solver or random)", other)),
        }
    }
}
