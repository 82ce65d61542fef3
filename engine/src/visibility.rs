// ═══════════════════════════════════════════════════════════════════════
// Visibility — the read-only snapshot handed to agents
//
// Agents never get the mutable GameState. They receive a GameView copy
// with the board, the player position and the goal, and answer with a
// direction that the runner feeds back into the engine.
// ═══════════════════════════════════════════════════════════════════════

use crate::grid::Grid;
use crate::types::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameView {
    pub grid: Grid,
    pub player: Position,
    pub goal: Position,
    pub move_count: u32,
    pub won: bool,
}

impl GameView {
    pub fn size(&self) -> usize {
        self.grid.size()
    }
}

/// Snapshot the current state for an agent.
pub fn game_view(state: &GameState) -> GameView {
    GameView {
        grid: state.grid().clone(),
        player: state.player(),
        goal: state.goal(),
        move_count: state.move_count(),
        won: state.is_won(),
    }
}
