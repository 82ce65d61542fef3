// ═══════════════════════════════════════════════════════════════════════
// Navigation — reachability and step distances over open cells
// ═══════════════════════════════════════════════════════════════════════

use crate::grid::Grid;
use crate::types::*;
use std::collections::VecDeque;

/// Check whether `goal` can be reached from `start` using orthogonal
/// steps through non-obstacle cells.
///
/// Depth-first with an explicit stack; each cell is visited at most once.
pub fn is_solvable(grid: &Grid, start: Position, goal: Position) -> bool {
    if !grid.is_open(start) || !grid.is_open(goal) {
        return false;
    }

    let mut visited = vec![false; grid.size() * grid.size()];
    let mut stack = vec![start];
    visited[grid.index(start)] = true;

    while let Some(current) = stack.pop() {
        if current == goal {
            return true;
        }
        for next in grid.neighbors(current) {
            let i = grid.index(next);
            if !visited[i] {
                visited[i] = true;
                stack.push(next);
            }
        }
    }

    false
}

/// Fewest orthogonal steps from `start` to `goal`, or None if unreachable.
/// Plain breadth-first search; used as the reference length for routes.
pub fn shortest_distance(grid: &Grid, start: Position, goal: Position) -> Option<usize> {
    if !grid.is_open(start) || !grid.is_open(goal) {
        return None;
    }

    let mut dist: Vec<Option<usize>> = vec![None; grid.size() * grid.size()];
    let mut queue: VecDeque<Position> = VecDeque::new();
    dist[grid.index(start)] = Some(0);
    queue.push_back(start);

    while let Some(current) = queue.pop_front() {
        let d = dist[grid.index(current)]?;
        if current == goal {
            return Some(d);
        }
        for next in grid.neighbors(current) {
            let i = grid.index(next);
            if dist[i].is_none() {
                dist[i] = Some(d + 1);
                queue.push_back(next);
            }
        }
    }

    None
}

/// Number of open cells reachable from `start` (including it).
pub fn reachable_count(grid: &Grid, start: Position) -> usize {
    if !grid.is_open(start) {
        return 0;
    }
    let mut visited = vec![false; grid.size() * grid.size()];
    let mut stack = vec![start];
    visited[grid.index(start)] = true;
    let mut count = 0;
    while let Some(current) = stack.pop() {
        count += 1;
        for next in grid.neighbors(current) {
            let i = grid.index(next);
            if !visited[i] {
                visited[i] = true;
                stack.push(next);
            }
        }
    }
    count
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::ObstacleSet;

    fn board(size: usize, blocked: &[(usize, usize)]) -> Grid {
        let obstacles: ObstacleSet = blocked.iter().map(|&p| Position::from(p)).collect();
        Grid::new(size, Position::new(0, 0), Position::new(size - 1, size - 1), &obstacles)
    }

    #[test]
    fn test_open_board_is_solvable() {
        let grid = board(5, &[]);
        assert!(is_solvable(&grid, Position::new(0, 0), Position::new(4, 4)));
        assert_eq!(shortest_distance(&grid, Position::new(0, 0), Position::new(4, 4)), Some(8));
        assert_eq!(reachable_count(&grid, Position::new(0, 0)), 25);
    }

    #[test]
    fn test_enclosed_goal_is_unsolvable() {
        let grid = board(5, &[(3, 4), (4, 3)]);
        assert!(!is_solvable(&grid, Position::new(0, 0), Position::new(4, 4)));
        assert_eq!(shortest_distance(&grid, Position::new(0, 0), Position::new(4, 4)), None);
    }

    #[test]
    fn test_enclosed_start_is_unsolvable() {
        let grid = board(5, &[(0, 1), (1, 0)]);
        assert!(!is_solvable(&grid, Position::new(0, 0), Position::new(4, 4)));
        assert_eq!(reachable_count(&grid, Position::new(0, 0)), 1);
    }

    #[test]
    fn test_wall_with_gap() {
        let grid = board(5, &[(0, 1), (1, 1), (2, 1), (3, 1)]);
        assert!(is_solvable(&grid, Position::new(0, 0), Position::new(4, 4)));
        assert_eq!(shortest_distance(&grid, Position::new(0, 0), Position::new(4, 4)), Some(8));

        let sealed = board(5, &[(0, 1), (1, 1), (2, 1), (3, 1), (4, 1)]);
        assert!(!is_solvable(&sealed, Position::new(0, 0), Position::new(4, 4)));
    }

    #[test]
    fn test_start_equals_goal() {
        let grid = board(3, &[]);
        let p = Position::new(1, 1);
        assert!(is_solvable(&grid, p, p));
        assert_eq!(shortest_distance(&grid, p, p), Some(0));
    }

    #[test]
    fn test_detour_distance() {
        // Horizontal wall across row 2 except the last column.
        let grid = board(5, &[(2, 0), (2, 1), (2, 2), (2, 3)]);
        assert_eq!(shortest_distance(&grid, Position::new(0, 0), Position::new(4, 0)), Some(12));
    }
}
