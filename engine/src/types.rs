// ═══════════════════════════════════════════════════════════════════════
// Core types — positions, directions, cells, board configuration
// ═══════════════════════════════════════════════════════════════════════

use crate::error::GameError;
use crate::grid::{Grid, ObstacleSet};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ── Position ───────────────────────────────────────────────────────────

/// A cell address, 0-indexed from the top-left corner.
///
/// Ordering is row-major, which is also the frontier tie-break order
/// used by the solver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub const fn new(row: usize, col: usize) -> Self {
        Position { row, col }
    }

    /// Manhattan distance: sum of absolute row and column differences.
    pub fn manhattan(self, other: Position) -> usize {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }

    /// The neighbour one step in `dir`, or None if it would leave a
    /// `size`×`size` board.
    pub fn step(self, dir: Direction, size: usize) -> Option<Position> {
        let (dr, dc) = dir.delta();
        let row = self.row.checked_add_signed(dr)?;
        let col = self.col.checked_add_signed(dc)?;
        (row < size && col < size).then_some(Position { row, col })
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<(usize, usize)> for Position {
    fn from((row, col): (usize, usize)) -> Self {
        Position { row, col }
    }
}

// ── Direction ──────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// (row delta, col delta). Rows grow downwards.
    pub const fn delta(self) -> (isize, isize) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }

    /// The direction that takes `from` to `to` in exactly one orthogonal
    /// step. None for diagonal, distant or identical positions.
    pub fn between(from: Position, to: Position) -> Option<Direction> {
        if from.manhattan(to) != 1 {
            return None;
        }
        Direction::ALL.into_iter().find(|d| {
            let (dr, dc) = d.delta();
            from.row.checked_add_signed(dr) == Some(to.row)
                && from.col.checked_add_signed(dc) == Some(to.col)
        })
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Up => write!(f, "up"),
            Direction::Down => write!(f, "down"),
            Direction::Left => write!(f, "left"),
            Direction::Right => write!(f, "right"),
        }
    }
}

/// Accepts the direction names, WASD keys and raw ANSI arrow-key
/// sequences (`ESC [ A` .. `ESC [ D`). Case and surrounding whitespace
/// are ignored for the word forms.
impl FromStr for Direction {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();
        match token {
            "\x1b[A" => return Ok(Direction::Up),
            "\x1b[B" => return Ok(Direction::Down),
            "\x1b[C" => return Ok(Direction::Right),
            "\x1b[D" => return Ok(Direction::Left),
            _ => {}
        }
        match token.to_ascii_lowercase().as_str() {
            "up" | "w" => Ok(Direction::Up),
            "down" | "s" => Ok(Direction::Down),
            "left" | "a" => Ok(Direction::Left),
            "right" | "d" => Ok(Direction::Right),
            _ => Err(GameError::MalformedDirection { token: s.to_string() }),
        }
    }
}

// ── Cell ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum CellState {
    #[default]
    Empty,
    Player,
    Goal,
    Obstacle,
}

impl CellState {
    pub const fn symbol(self) -> char {
        match self {
            CellState::Empty => '.',
            CellState::Player => 'P',
            CellState::Goal => 'G',
            CellState::Obstacle => '#',
        }
    }

    pub fn from_symbol(c: char) -> Option<CellState> {
        match c {
            '.' => Some(CellState::Empty),
            'P' => Some(CellState::Player),
            'G' => Some(CellState::Goal),
            '#' => Some(CellState::Obstacle),
            _ => None,
        }
    }
}

// ── Board configuration ────────────────────────────────────────────────

/// Largest accepted board side length.
pub const MAX_BOARD_SIZE: usize = 1_000;

/// Side length and obstacle count of a board. Start is always the
/// top-left corner and the goal the bottom-right one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BoardConfig {
    pub size: usize,
    pub obstacles: usize,
}

impl BoardConfig {
    pub const fn new(size: usize, obstacles: usize) -> Self {
        BoardConfig { size, obstacles }
    }

    pub const fn start(&self) -> Position {
        Position::new(0, 0)
    }

    pub const fn goal(&self) -> Position {
        Position::new(self.size - 1, self.size - 1)
    }

    /// Side length must be in `2..=MAX_BOARD_SIZE`, and at least one cell
    /// besides start and goal must stay free of obstacles.
    pub fn validate(&self) -> Result<(), GameError> {
        if self.size < 2 {
            return Err(GameError::InvalidConfig {
                reason: format!("size must be at least 2, got {}", self.size),
            });
        }
        if self.size > MAX_BOARD_SIZE {
            return Err(GameError::InvalidConfig {
                reason: format!("size must be at most {}, got {}", MAX_BOARD_SIZE, self.size),
            });
        }
        let cells = self.size * self.size;
        if self.obstacles >= cells - 2 {
            return Err(GameError::InvalidConfig {
                reason: format!(
                    "{} obstacles do not fit a {}x{} board (limit {})",
                    self.obstacles,
                    self.size,
                    self.size,
                    cells - 3
                ),
            });
        }
        Ok(())
    }
}

impl From<Difficulty> for BoardConfig {
    fn from(d: Difficulty) -> Self {
        d.config()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    pub const fn config(self) -> BoardConfig {
        match self {
            Difficulty::Easy => BoardConfig::new(5, 5),
            Difficulty::Medium => BoardConfig::new(7, 12),
            Difficulty::Hard => BoardConfig::new(10, 25),
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Difficulty::Easy => write!(f, "easy"),
            Difficulty::Medium => write!(f, "medium"),
            Difficulty::Hard => write!(f, "hard"),
        }
    }
}

impl FromStr for Difficulty {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            other => Err(GameError::InvalidConfig {
                reason: format!("unknown difficulty {:?} (expected easy, medium or hard)", other),
            }),
        }
    }
}

// ── Move outcome ───────────────────────────────────────────────────────

/// Result of one `apply_move` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MoveOutcome {
    pub accepted: bool,
    pub won: bool,
}

impl MoveOutcome {
    pub const REJECTED: MoveOutcome = MoveOutcome { accepted: false, won: false };
}

// ── Game State ─────────────────────────────────────────────────────────

/// The single mutable game record. Only the engine's move functions can
/// change the player position or the move counter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub(crate) config: BoardConfig,
    pub(crate) seed: Option<u64>,
    pub(crate) grid: Grid,
    pub(crate) obstacles: ObstacleSet,
    pub(crate) player: Position,
    pub(crate) goal: Position,
    pub(crate) move_count: u32,
    pub(crate) won: bool,
    /// Boards generated before a solvable one came up (1 = first try).
    pub(crate) board_attempts: u32,
}

impl GameState {
    pub fn config(&self) -> BoardConfig {
        self.config
    }

    /// Seed the board was generated from, None for hand-built boards.
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn obstacles(&self) -> &ObstacleSet {
        &self.obstacles
    }

    pub fn player(&self) -> Position {
        self.player
    }

    pub fn start(&self) -> Position {
        self.config.start()
    }

    pub fn goal(&self) -> Position {
        self.goal
    }

    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    pub fn is_won(&self) -> bool {
        self.won
    }

    pub fn board_attempts(&self) -> u32 {
        self.board_attempts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_tokens() {
        assert_eq!("up".parse::<Direction>().unwrap(), Direction::Up);
        assert_eq!(" LEFT ".parse::<Direction>().unwrap(), Direction::Left);
        assert_eq!("d".parse::<Direction>().unwrap(), Direction::Right);
        assert_eq!("\x1b[B".parse::<Direction>().unwrap(), Direction::Down);
        assert_eq!("\x1b[C".parse::<Direction>().unwrap(), Direction::Right);
        assert!(matches!(
            "north".parse::<Direction>(),
            Err(GameError::MalformedDirection { .. })
        ));
        assert!("".parse::<Direction>().is_err());
    }

    #[test]
    fn test_direction_between() {
        let p = Position::new(2, 2);
        for d in Direction::ALL {
            let q = p.step(d, 5).unwrap();
            assert_eq!(Direction::between(p, q), Some(d));
        }
        assert_eq!(Direction::between(p, Position::new(3, 3)), None);
        assert_eq!(Direction::between(p, Position::new(2, 4)), None);
        assert_eq!(Direction::between(p, p), None);
    }

    #[test]
    fn test_step_bounds() {
        let corner = Position::new(0, 0);
        assert_eq!(corner.step(Direction::Up, 5), None);
        assert_eq!(corner.step(Direction::Left, 5), None);
        assert_eq!(corner.step(Direction::Right, 5), Some(Position::new(0, 1)));
        let far = Position::new(4, 4);
        assert_eq!(far.step(Direction::Down, 5), None);
        assert_eq!(far.step(Direction::Right, 5), None);
    }

    #[test]
    fn test_difficulty_table() {
        assert_eq!(Difficulty::Easy.config(), BoardConfig::new(5, 5));
        assert_eq!(Difficulty::Medium.config(), BoardConfig::new(7, 12));
        assert_eq!(Difficulty::Hard.config(), BoardConfig::new(10, 25));
        assert_eq!("Hard".parse::<Difficulty>().unwrap(), Difficulty::Hard);
        assert!("nightmare".parse::<Difficulty>().is_err());
        for d in Difficulty::ALL {
            assert!(d.config().validate().is_ok());
        }
    }

    #[test]
    fn test_config_validation() {
        assert!(BoardConfig::new(1, 0).validate().is_err());
        assert!(BoardConfig::new(3, 7).validate().is_err());
        assert!(BoardConfig::new(3, 6).validate().is_ok());
        assert!(BoardConfig::new(2, 1).validate().is_ok());
    }

    #[test]
    fn test_config_rejects_oversized_boards() {
        for size in [MAX_BOARD_SIZE + 1, 100_000, usize::MAX / 2, usize::MAX] {
            assert!(matches!(
                BoardConfig::new(size, 0).validate(),
                Err(GameError::InvalidConfig { .. })
            ));
        }
        assert!(BoardConfig::new(MAX_BOARD_SIZE, 0).validate().is_ok());
    }

    #[test]
    fn test_symbols() {
        for c in [CellState::Empty, CellState::Player, CellState::Goal, CellState::Obstacle] {
            assert_eq!(CellState::from_symbol(c.symbol()), Some(c));
        }
        assert_eq!(CellState::from_symbol('x'), None);
    }
}
