// ═══════════════════════════════════════════════════════════════════════
// Game Engine — move application and win detection
//
// The engine is a pure state machine. It never does I/O or talks to
// agents: the runner asks an agent (or the keyboard) for a direction and
// feeds it in through `apply_move`. A rejected move leaves the state
// exactly as it was.
// ═══════════════════════════════════════════════════════════════════════

use crate::error::GameError;
use crate::types::*;
use tracing::{debug, trace};

/// Move the player one cell in `direction`.
///
/// Rejected (no state change) when the target is off the board or an
/// obstacle, or when the game is already won. Otherwise the marker moves,
/// the move counter goes up by one and `won` reports whether the goal
/// was reached.
pub fn apply_move(state: &mut GameState, direction: Direction) -> MoveOutcome {
    if state.won {
        return MoveOutcome::REJECTED;
    }

    let from = state.player;
    let to = match from.step(direction, state.grid.size()) {
        Some(to) if state.grid.is_open(to) => to,
        _ => {
            trace!(%from, %direction, "move rejected");
            return MoveOutcome::REJECTED;
        }
    };

    state.grid.move_player(from, to);
    state.player = to;
    state.move_count += 1;
    state.won = to == state.goal;

    if state.won {
        debug!(moves = state.move_count, "goal reached");
    }
    MoveOutcome { accepted: true, won: state.won }
}

/// Parse a raw input token and apply it. Unknown tokens are an error and
/// do not touch the state.
pub fn apply_token(state: &mut GameState, token: &str) -> Result<MoveOutcome, GameError> {
    let direction: Direction = token.parse()?;
    Ok(apply_move(state, direction))
}

/// Execute a precomputed route step by step, with no replanning.
///
/// A refused step means the route and the board disagree; that is fatal
/// and reported as `RouteRejected`. Returns the outcome of the last step
/// (a no-op `MoveOutcome` for an empty route).
pub fn play_route(state: &mut GameState, directions: &[Direction]) -> Result<MoveOutcome, GameError> {
    let mut last = MoveOutcome { accepted: true, won: state.won };
    for (step, &direction) in directions.iter().enumerate() {
        let at = state.player;
        last = apply_move(state, direction);
        if !last.accepted {
            return Err(GameError::RouteRejected { step, at });
        }
    }
    Ok(last)
}

/// Whether moving in `direction` would currently be accepted.
pub fn is_move_valid(state: &GameState, direction: Direction) -> bool {
    !state.won
        && state
            .player
            .step(direction, state.grid.size())
            .is_some_and(|to| state.grid.is_open(to))
}

/// All directions that `apply_move` would accept right now.
pub fn valid_moves(state: &GameState) -> Vec<Direction> {
    Direction::ALL
        .into_iter()
        .filter(|&d| is_move_valid(state, d))
        .collect()
}
