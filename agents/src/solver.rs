// ═══════════════════════════════════════════════════════════════════════
// Solver Agent — plans one shortest route, then walks it
//
// The route is computed once, from the position seen on the first call,
// and replayed step by step. There is no replanning: the board never
// changes under the agent, so a rejected step is an engine-side fault.
// ═══════════════════════════════════════════════════════════════════════

use crate::agent::Agent;
use sotelo_engine::solver::{path_to_directions, search};
use sotelo_engine::visibility::GameView;
use sotelo_engine::{Direction, GameError, Position};
use std::collections::VecDeque;
use tracing::{debug, info};

#[derive(Debug, Default)]
pub struct SolverAgent {
    /// Remaining moves; None until the first call plans the route.
    plan: Option<VecDeque<Direction>>,
    route: Vec<Position>,
}

impl SolverAgent {
    pub fn new() -> Self {
        SolverAgent::default()
    }

    /// The full planned route (positions after the start), empty before
    /// the first `next_move`.
    pub fn route(&self) -> &[Position] {
        &self.route
    }

    fn plan_route(&mut self, view: &GameView) -> Result<(), GameError> {
        let result = search(&view.grid, view.player, view.goal);
        if result.path.is_empty() && view.player != view.goal {
            return Err(GameError::NoPath { start: view.player, goal: view.goal });
        }
        info!(
            length = result.path.len(),
            expanded = result.expanded,
            "solver planned route"
        );
        let directions = path_to_directions(view.player, &result.path)?;
        self.route = result.path;
        self.plan = Some(directions.into());
        Ok(())
    }
}

impl Agent for SolverAgent {
    fn name(&self) -> &str {
        "Solver"
    }

    fn next_move(&mut self, view: &GameView) -> Result<Option<Direction>, GameError> {
        if self.plan.is_none() {
            self.plan_route(view)?;
        }
        let next = self.plan.as_mut().and_then(|p| p.pop_front());
        if let Some(d) = next {
            debug!(from = %view.player, direction = %d, "solver step");
        }
        Ok(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sotelo_engine::engine::apply_move;
    use sotelo_engine::setup::create_game_from_obstacles;
    use sotelo_engine::visibility::game_view;
    use sotelo_engine::ObstacleSet;

    fn layout(cells: &[(usize, usize)]) -> ObstacleSet {
        cells.iter().map(|&p| Position::from(p)).collect()
    }

    #[test]
    fn test_solver_walks_wall_board() {
        let mut state = create_game_from_obstacles(5, layout(&[(0, 1), (1, 1), (2, 1), (3, 1)])).unwrap();
        let mut agent = SolverAgent::new();
        let mut steps = 0;
        while let Some(d) = agent.next_move(&game_view(&state)).unwrap() {
            let outcome = apply_move(&mut state, d);
            assert!(outcome.accepted);
            steps += 1;
        }
        assert!(state.is_won());
        assert_eq!(steps, 8);
        assert_eq!(agent.route().len(), 8);
    }

    #[test]
    fn test_solver_does_not_replan() {
        let state = create_game_from_obstacles(5, layout(&[])).unwrap();
        let mut agent = SolverAgent::new();
        let view = game_view(&state);
        let first = agent.next_move(&view).unwrap();
        assert!(first.is_some());
        let planned = agent.route().to_vec();
        // Same stale view again: the agent keeps consuming its plan.
        agent.next_move(&view).unwrap();
        assert_eq!(agent.route(), planned.as_slice());
        let remaining = std::iter::from_fn(|| agent.next_move(&view).unwrap()).count();
        assert_eq!(remaining, 6);
    }

    #[test]
    fn test_solver_reports_no_path() {
        let state = create_game_from_obstacles(5, layout(&[])).unwrap();
        let mut view = game_view(&state);
        // Hand-crafted view where the goal is walled off.
        view.grid = sotelo_engine::Grid::new(
            5,
            Position::new(0, 0),
            Position::new(4, 4),
            &layout(&[(3, 4), (4, 3)]),
        );
        let mut agent = SolverAgent::new();
        assert!(matches!(agent.next_move(&view), Err(GameError::NoPath { .. })));
    }
}
