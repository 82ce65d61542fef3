// ═══════════════════════════════════════════════════════════════════════
// Errors — everything the engine can refuse to do
// ═══════════════════════════════════════════════════════════════════════

use crate::types::Position;
use derive_more::{Display, Error};

/// Errors raised by board setup, route translation and token parsing.
///
/// A move into a wall or off the board is *not* an error: it is reported
/// as a rejected `MoveOutcome` and the caller simply tries again.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum GameError {
    /// Board configuration cannot produce a playable board.
    #[display("invalid board config: {reason}")]
    InvalidConfig { reason: String },

    /// Obstacle sampling gave up after too many draws.
    #[display("obstacle sampling exhausted after {attempts} attempts ({placed}/{wanted} placed)")]
    SamplingExhausted { attempts: usize, placed: usize, wanted: usize },

    /// No solvable board was produced within the regeneration budget.
    #[display("no solvable board after {attempts} attempts")]
    Unsolvable { attempts: u32 },

    /// Input token is not one of up/down/left/right (or an alias).
    #[display("unrecognized direction token {token:?}")]
    MalformedDirection { token: String },

    /// The solver found no route from `start` to `goal`.
    #[display("no path from {start} to {goal}")]
    NoPath { start: Position, goal: Position },

    /// Two consecutive route positions are not orthogonal neighbours.
    #[display("route step {from} -> {to} is not a single orthogonal move")]
    NonAdjacentStep { from: Position, to: Position },

    /// The controller refused a step of a precomputed route.
    #[display("route step {step} rejected at {at}")]
    RouteRejected { step: usize, at: Position },
}
