// ═══════════════════════════════════════════════════════════════════════
// Game Runner — plays one complete headless game with an agent
// ═══════════════════════════════════════════════════════════════════════

use serde::{Deserialize, Serialize};
use sotelo_agents::Agent;
use sotelo_engine::engine;
use sotelo_engine::navigation::shortest_distance;
use sotelo_engine::setup::create_game;
use sotelo_engine::visibility::game_view;
use sotelo_engine::BoardConfig;
use tracing::debug;

/// Result of a completed game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameResult {
    pub seed: u64,
    pub agent_name: String,
    pub won: bool,
    pub moves: u32,
    /// Shortest possible route length on this board.
    pub optimal_moves: u32,
    /// Boards drawn before a solvable one came up.
    pub board_attempts: u32,
}

impl GameResult {
    /// Won in the minimum possible number of moves.
    pub fn is_optimal(&self) -> bool {
        self.won && self.moves == self.optimal_moves
    }
}

/// Run a complete game on a fresh board generated from `seed`.
///
/// The agent is asked for moves until it wins or stops. A move the
/// engine refuses is treated as an agent fault.
pub fn run_game(
    agent: &mut dyn Agent,
    config: BoardConfig,
    seed: u64,
    max_moves: u32, // safety limit against agents that never arrive
) -> Result<GameResult, String> {
    let mut state = create_game(config, seed).map_err(|e| e.to_string())?;
    let optimal = shortest_distance(state.grid(), state.start(), state.goal())
        .ok_or_else(|| format!("seed {}: generated board has no route", seed))?;

    while !state.is_won() {
        if state.move_count() >= max_moves {
            return Err(format!(
                "{} exceeded {} moves without reaching the goal (seed {})",
                agent.name(),
                max_moves,
                seed
            ));
        }

        let view = game_view(&state);
        let direction = match agent.next_move(&view).map_err(|e| e.to_string())? {
            Some(d) => d,
            None => break,
        };

        let outcome = engine::apply_move(&mut state, direction);
        if !outcome.accepted {
            return Err(format!(
                "{} move {} from {} rejected (seed {})",
                agent.name(),
                direction,
                state.player(),
                seed
            ));
        }
    }

    debug!(seed, won = state.is_won(), moves = state.move_count(), "game finished");
    Ok(GameResult {
        seed,
        agent_name: agent.name().to_string(),
        won: state.is_won(),
        moves: state.move_count(),
        optimal_moves: optimal as u32,
        board_attempts: state.board_attempts(),
    })
}
