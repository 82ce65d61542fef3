// ═══════════════════════════════════════════════════════════════════════
// Solver — A* route search over the open cells of a grid
//
// Edge cost is 1 per orthogonal step and the heuristic is the Manhattan
// distance to the goal, which is admissible and consistent on a
// 4-connected grid. The first time the goal leaves the frontier its
// route is therefore a shortest one.
//
// Frontier entries are ordered by (f, g, position), so among equally
// promising cells the one with the lower cost so far wins, then the
// row-major smaller position. Results are fully deterministic.
// ═══════════════════════════════════════════════════════════════════════

use crate::error::GameError;
use crate::grid::Grid;
use crate::types::*;
use std::cmp::Reverse;
use std::collections::BinaryHeap;
use tracing::debug;

/// One candidate on the frontier. Field order is the priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
struct FrontierEntry {
    f: usize,
    g: usize,
    position: Position,
}

/// Route plus bookkeeping from one search.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchResult {
    /// Positions after `start`, ending at `goal`. Empty when unreachable
    /// (or when start already is the goal).
    pub path: Vec<Position>,
    /// Cells taken off the frontier and expanded.
    pub expanded: usize,
    /// Frontier pushes, including the start entry.
    pub pushed: usize,
}

/// Shortest orthogonal route from `start` to `goal` avoiding obstacles.
///
/// The returned sequence excludes `start` and ends with `goal`. An empty
/// sequence means no route exists.
pub fn find_path(grid: &Grid, start: Position, goal: Position) -> Vec<Position> {
    search(grid, start, goal).path
}

/// Same as `find_path` but also reports how much work the search did.
pub fn search(grid: &Grid, start: Position, goal: Position) -> SearchResult {
    if start == goal || !grid.is_open(start) || !grid.is_open(goal) {
        return SearchResult::default();
    }

    let cells = grid.size() * grid.size();
    let mut best_g: Vec<Option<usize>> = vec![None; cells];
    let mut came_from: Vec<Option<Position>> = vec![None; cells];
    let mut closed = vec![false; cells];
    let mut frontier = BinaryHeap::new();

    best_g[grid.index(start)] = Some(0);
    frontier.push(Reverse(FrontierEntry {
        f: start.manhattan(goal),
        g: 0,
        position: start,
    }));

    let mut result = SearchResult { pushed: 1, ..SearchResult::default() };

    while let Some(Reverse(entry)) = frontier.pop() {
        let current = entry.position;
        if current == goal {
            result.path = reconstruct(grid, &came_from, start, goal);
            debug!(
                %start, %goal,
                length = result.path.len(),
                expanded = result.expanded,
                pushed = result.pushed,
                "route found"
            );
            return result;
        }

        let ci = grid.index(current);
        if closed[ci] {
            continue;
        }
        closed[ci] = true;
        result.expanded += 1;

        for next in grid.neighbors(current) {
            let ni = grid.index(next);
            if closed[ni] {
                continue;
            }
            let g = entry.g + 1;
            if best_g[ni].map_or(true, |known| g < known) {
                best_g[ni] = Some(g);
                came_from[ni] = Some(current);
                frontier.push(Reverse(FrontierEntry {
                    f: g + next.manhattan(goal),
                    g,
                    position: next,
                }));
                result.pushed += 1;
            }
        }
    }

    debug!(%start, %goal, expanded = result.expanded, "frontier exhausted, no route");
    result
}

/// Walk parent links back from `goal`, then flip into start→goal order.
fn reconstruct(
    grid: &Grid,
    came_from: &[Option<Position>],
    start: Position,
    goal: Position,
) -> Vec<Position> {
    let mut path = vec![goal];
    let mut current = goal;
    while let Some(prev) = came_from[grid.index(current)] {
        if prev == start {
            break;
        }
        path.push(prev);
        current = prev;
    }
    path.reverse();
    path
}

/// Translate a route into the moves that walk it from `start`.
///
/// Each consecutive pair must differ by exactly one orthogonal step.
pub fn path_to_directions(start: Position, path: &[Position]) -> Result<Vec<Direction>, GameError> {
    let mut directions = Vec::with_capacity(path.len());
    let mut current = start;
    for &next in path {
        let dir = Direction::between(current, next)
            .ok_or(GameError::NonAdjacentStep { from: current, to: next })?;
        directions.push(dir);
        current = next;
    }
    Ok(directions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::ObstacleSet;
    use crate::navigation::shortest_distance;

    fn board(size: usize, blocked: &[(usize, usize)]) -> Grid {
        let obstacles: ObstacleSet = blocked.iter().map(|&p| Position::from(p)).collect();
        Grid::new(size, Position::new(0, 0), Position::new(size - 1, size - 1), &obstacles)
    }

    fn assert_walkable(grid: &Grid, start: Position, path: &[Position]) {
        let mut current = start;
        for &p in path {
            assert!(grid.is_open(p), "route enters blocked cell {}", p);
            assert_eq!(current.manhattan(p), 1, "route jumps from {} to {}", current, p);
            current = p;
        }
    }

    #[test]
    fn test_open_board_route_is_manhattan() {
        let grid = board(5, &[]);
        let path = find_path(&grid, Position::new(0, 0), Position::new(4, 4));
        assert_eq!(path.len(), 8);
        assert_eq!(path.last(), Some(&Position::new(4, 4)));
        assert!(!path.contains(&Position::new(0, 0)));
        assert_walkable(&grid, Position::new(0, 0), &path);
    }

    #[test]
    fn test_wall_with_gap_route() {
        let grid = board(5, &[(0, 1), (1, 1), (2, 1), (3, 1)]);
        let start = Position::new(0, 0);
        let path = find_path(&grid, start, Position::new(4, 4));
        assert_eq!(path.len(), 8);
        assert_walkable(&grid, start, &path);
        // Only way past the wall is through its open end.
        assert!(path.contains(&Position::new(4, 1)));
    }

    #[test]
    fn test_detour_is_optimal() {
        let grid = board(5, &[(1, 0), (1, 1), (1, 2), (1, 3), (3, 1), (3, 2), (3, 3), (3, 4)]);
        let start = Position::new(0, 0);
        let goal = Position::new(4, 4);
        let path = find_path(&grid, start, goal);
        assert_eq!(Some(path.len()), shortest_distance(&grid, start, goal));
        assert_eq!(path.len(), 16);
        assert_walkable(&grid, start, &path);
    }

    #[test]
    fn test_no_route() {
        let grid = board(5, &[(3, 4), (4, 3)]);
        let result = search(&grid, Position::new(0, 0), Position::new(4, 4));
        assert!(result.path.is_empty());
        assert!(result.expanded > 0);
    }

    #[test]
    fn test_trivial_and_blocked_endpoints() {
        let grid = board(3, &[(1, 1)]);
        assert!(find_path(&grid, Position::new(0, 0), Position::new(0, 0)).is_empty());
        assert!(find_path(&grid, Position::new(0, 0), Position::new(1, 1)).is_empty());
        assert!(find_path(&grid, Position::new(0, 0), Position::new(3, 0)).is_empty());
        assert_eq!(find_path(&grid, Position::new(0, 0), Position::new(0, 1)), vec![Position::new(0, 1)]);
    }

    #[test]
    fn test_route_is_deterministic() {
        let grid = board(7, &[(2, 2), (3, 3), (4, 1)]);
        let a = find_path(&grid, Position::new(0, 0), Position::new(6, 6));
        let b = find_path(&grid, Position::new(0, 0), Position::new(6, 6));
        assert_eq!(a, b);
    }

    #[test]
    fn test_path_to_directions() {
        let start = Position::new(0, 0);
        let path = vec![Position::new(1, 0), Position::new(1, 1), Position::new(0, 1)];
        let dirs = path_to_directions(start, &path).unwrap();
        assert_eq!(dirs, vec![Direction::Down, Direction::Right, Direction::Up]);

        let bad = vec![Position::new(1, 1)];
        assert!(matches!(
            path_to_directions(start, &bad),
            Err(GameError::NonAdjacentStep { .. })
        ));
        assert!(path_to_directions(start, &[]).unwrap().is_empty());
    }
}
