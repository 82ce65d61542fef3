// ═══════════════════════════════════════════════════════════════════════
// Game setup — builds a solvable initial GameState
//
// Obstacles are sampled as a whole; if the goal is not reachable the
// entire set is thrown away and drawn again. Unsolvable boards never
// leave this module.
// ═══════════════════════════════════════════════════════════════════════

use crate::error::GameError;
use crate::grid::{self, Grid, ObstacleSet};
use crate::navigation;
use crate::types::*;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info, warn};

/// Full-board regenerations allowed before setup gives up.
pub const MAX_BOARD_ATTEMPTS: u32 = 10_000;

/// Create a new game for `config`. Seed controls obstacle placement for
/// reproducibility.
pub fn create_game(config: BoardConfig, seed: u64) -> Result<GameState, GameError> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut state = create_game_with_rng(config, &mut rng)?;
    state.seed = Some(seed);
    Ok(state)
}

/// Like `create_game` but draws from a caller-supplied generator.
pub fn create_game_with_rng<R: Rng + ?Sized>(
    config: BoardConfig,
    rng: &mut R,
) -> Result<GameState, GameError> {
    config.validate()?;
    let start = config.start();
    let goal = config.goal();

    for attempt in 1..=MAX_BOARD_ATTEMPTS {
        let obstacles = grid::generate_obstacles(rng, config.size, config.obstacles, &[start, goal])?;
        let grid = Grid::new(config.size, start, goal, &obstacles);
        if navigation::is_solvable(&grid, start, goal) {
            info!(
                size = config.size,
                obstacles = config.obstacles,
                attempts = attempt,
                "board ready"
            );
            return Ok(build_state(config, grid, obstacles, attempt));
        }
        debug!(attempt, "generated board has no route to goal, regenerating");
    }

    warn!(size = config.size, obstacles = config.obstacles, "gave up generating a solvable board");
    Err(GameError::Unsolvable { attempts: MAX_BOARD_ATTEMPTS })
}

/// Build a game on a fixed obstacle layout instead of a random one.
///
/// The layout must be in bounds, avoid start and goal, and leave the goal
/// reachable. `config.obstacles` is taken from the layout.
pub fn create_game_from_obstacles(
    size: usize,
    obstacles: ObstacleSet,
) -> Result<GameState, GameError> {
    let config = BoardConfig::new(size, obstacles.len());
    config.validate()?;
    let start = config.start();
    let goal = config.goal();

    if let Some(bad) = obstacles.iter().find(|p| p.row >= size || p.col >= size) {
        return Err(GameError::InvalidConfig {
            reason: format!("obstacle {} is outside the {}x{} board", bad, size, size),
        });
    }
    if obstacles.contains(&start) || obstacles.contains(&goal) {
        return Err(GameError::InvalidConfig {
            reason: "obstacles may not cover the start or goal cell".to_string(),
        });
    }

    let grid = Grid::new(size, start, goal, &obstacles);
    if !navigation::is_solvable(&grid, start, goal) {
        return Err(GameError::Unsolvable { attempts: 1 });
    }
    Ok(build_state(config, grid, obstacles, 1))
}

fn build_state(config: BoardConfig, grid: Grid, obstacles: ObstacleSet, attempts: u32) -> GameState {
    GameState {
        config,
        seed: None,
        grid,
        obstacles,
        player: config.start(),
        goal: config.goal(),
        move_count: 0,
        won: false,
        board_attempts: attempts,
    }
}
