// ═══════════════════════════════════════════════════════════════════════
// Grid — cell storage, occupancy queries, obstacle sampling
// ═══════════════════════════════════════════════════════════════════════

use crate::error::GameError;
use crate::types::*;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Distinct obstacle coordinates. Ordered so boards print and compare
/// deterministically.
pub type ObstacleSet = BTreeSet<Position>;

/// Floor of the draw budget per `generate_obstacles` call.
pub const MAX_SAMPLE_ATTEMPTS: usize = 100_000;

/// Extra draws granted per board cell on top of the floor. Filling all
/// but one of n cells takes about n·ln(n) draws, so 32 covers any board
/// up to `MAX_BOARD_SIZE`.
pub const SAMPLE_ATTEMPTS_PER_CELL: usize = 32;

/// Draw budget for a board of `cells` cells.
pub fn sample_attempt_cap(cells: usize) -> usize {
    cells.saturating_mul(SAMPLE_ATTEMPTS_PER_CELL).max(MAX_SAMPLE_ATTEMPTS)
}

/// Square board of `size`×`size` cells, stored row-major.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    size: usize,
    cells: Vec<CellState>,
}

impl Grid {
    /// Build a board with the player marker at `player`, the goal at
    /// `goal` and every position in `obstacles` blocked.
    ///
    /// Callers guarantee all positions are in bounds and that obstacles
    /// avoid the two markers.
    pub fn new(size: usize, player: Position, goal: Position, obstacles: &ObstacleSet) -> Self {
        let mut grid = Grid {
            size,
            cells: vec![CellState::Empty; size * size],
        };
        for &pos in obstacles {
            grid.set(pos, CellState::Obstacle);
        }
        grid.set(goal, CellState::Goal);
        grid.set(player, CellState::Player);
        grid
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn in_bounds(&self, pos: Position) -> bool {
        pos.row < self.size && pos.col < self.size
    }

    /// Row-major index of an in-bounds position.
    pub fn index(&self, pos: Position) -> usize {
        pos.row * self.size + pos.col
    }

    pub fn cell(&self, pos: Position) -> Option<CellState> {
        self.in_bounds(pos).then(|| self.cells[self.index(pos)])
    }

    /// True for in-bounds cells that are not obstacles. This is the single
    /// occupancy test used by moves, validation and search.
    pub fn is_open(&self, pos: Position) -> bool {
        matches!(self.cell(pos), Some(c) if c != CellState::Obstacle)
    }

    /// Open orthogonal neighbours of `pos`.
    pub fn neighbors(&self, pos: Position) -> impl Iterator<Item = Position> + '_ {
        Direction::ALL
            .into_iter()
            .filter_map(move |d| pos.step(d, self.size))
            .filter(move |&p| self.is_open(p))
    }

    pub fn obstacle_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c == CellState::Obstacle).count()
    }

    /// First cell (row-major) holding `state`.
    pub fn find(&self, state: CellState) -> Option<Position> {
        self.cells
            .iter()
            .position(|&c| c == state)
            .map(|i| Position::new(i / self.size, i % self.size))
    }

    /// Move the player marker. The vacated cell becomes empty (the goal
    /// marker is not restored, matching the classic board display).
    pub(crate) fn move_player(&mut self, from: Position, to: Position) {
        self.set(from, CellState::Empty);
        self.set(to, CellState::Player);
    }

    fn set(&mut self, pos: Position, state: CellState) {
        let i = self.index(pos);
        self.cells[i] = state;
    }

    /// Symbol snapshot: '.' empty, 'P' player, 'G' goal, '#' obstacle.
    pub fn render(&self) -> Vec<Vec<char>> {
        self.cells
            .chunks(self.size)
            .map(|row| row.iter().map(|c| c.symbol()).collect())
            .collect()
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.size) {
            let line: Vec<String> = row.iter().map(|c| c.symbol().to_string()).collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}

/// Sample `count` distinct obstacle positions uniformly from a
/// `size`×`size` board, never using a position in `excluded`.
///
/// Fails fast when the request cannot be satisfied, and gives up after
/// `sample_attempt_cap` draws instead of spinning forever.
pub fn generate_obstacles<R: Rng + ?Sized>(
    rng: &mut R,
    size: usize,
    count: usize,
    excluded: &[Position],
) -> Result<ObstacleSet, GameError> {
    if size == 0 {
        return Err(GameError::InvalidConfig {
            reason: "board size must be positive".to_string(),
        });
    }
    let reserved: BTreeSet<Position> = excluded
        .iter()
        .copied()
        .filter(|p| p.row < size && p.col < size)
        .collect();
    let cells = size.checked_mul(size).ok_or_else(|| GameError::InvalidConfig {
        reason: format!("a {}x{} board is too large", size, size),
    })?;
    let free = cells - reserved.len();
    if count >= free {
        return Err(GameError::InvalidConfig {
            reason: format!(
                "{} obstacles requested but only {} non-reserved cells on a {}x{} board",
                count, free, size, size
            ),
        });
    }

    let cap = sample_attempt_cap(cells);
    let mut obstacles = ObstacleSet::new();
    let mut attempts = 0;
    while obstacles.len() < count {
        if attempts == cap {
            return Err(GameError::SamplingExhausted {
                attempts,
                placed: obstacles.len(),
                wanted: count,
            });
        }
        attempts += 1;
        let pos = Position::new(rng.gen_range(0..size), rng.gen_range(0..size));
        if !reserved.contains(&pos) {
            obstacles.insert(pos);
        }
    }
    Ok(obstacles)
}
