// ═══════════════════════════════════════════════════════════════════════
// Batch — many seeded games in parallel, summarized
// ═══════════════════════════════════════════════════════════════════════

use crate::runner::{run_game, GameResult};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use sotelo_agents::AgentKind;
use sotelo_engine::BoardConfig;
use tracing::warn;

/// Aggregate over one batch of games.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchSummary {
    pub agent: AgentKind,
    pub config: BoardConfig,
    pub games: u32,
    pub wins: u32,
    /// Wins that used exactly the shortest possible number of moves.
    pub optimal: u32,
    pub errors: Vec<String>,
    pub mean_moves: f64,
    pub mean_board_attempts: f64,
    pub results: Vec<GameResult>,
}

/// Play one game per seed with a fresh `agent`, in parallel.
/// Every game owns its board and agent; nothing is shared between them.
pub fn run_batch(agent: AgentKind, config: BoardConfig, seeds: &[u64], max_moves: u32) -> BatchSummary {
    let outcomes: Vec<Result<GameResult, String>> = seeds
        .par_iter()
        .map(|&seed| {
            let mut a = agent.build(seed);
            run_game(a.as_mut(), config, seed, max_moves)
        })
        .collect();

    let mut results = Vec::new();
    let mut errors = Vec::new();
    for outcome in outcomes {
        match outcome {
            Ok(r) => results.push(r),
            Err(e) => {
                warn!(error = %e, "game failed");
                errors.push(e);
            }
        }
    }

    let finished = results.len().max(1) as f64;
    BatchSummary {
        agent,
        config,
        games: seeds.len() as u32,
        wins: results.iter().filter(|r| r.won).count() as u32,
        optimal: results.iter().filter(|r| r.is_optimal()).count() as u32,
        mean_moves: results.iter().map(|r| r.moves as f64).sum::<f64>() / finished,
        mean_board_attempts: results.iter().map(|r| r.board_attempts as f64).sum::<f64>() / finished,
        errors,
        results,
    }
}
