// ═══════════════════════════════════════════════════════════════════════
// Random Agent — wanders between open neighbours.
// Serves as a baseline for the solver and for engine stability tests.
// ═══════════════════════════════════════════════════════════════════════

use crate::agent::Agent;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use sotelo_engine::visibility::GameView;
use sotelo_engine::{Direction, GameError};

pub struct RandomAgent {
    rng: ChaCha8Rng,
}

impl RandomAgent {
    pub fn new(seed: u64) -> Self {
        RandomAgent {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

impl Agent for RandomAgent {
    fn name(&self) -> &str {
        "Random"
    }

    fn next_move(&mut self, view: &GameView) -> Result<Option<Direction>, GameError> {
        if view.won {
            return Ok(None);
        }
        let open: Vec<Direction> = Direction::ALL
            .into_iter()
            .filter(|&d| {
                view.player
                    .step(d, view.size())
                    .is_some_and(|p| view.grid.is_open(p))
            })
            .collect();
        Ok(open.choose(&mut self.rng).copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sotelo_engine::engine::apply_move;
    use sotelo_engine::setup::create_game;
    use sotelo_engine::visibility::game_view;
    use sotelo_engine::Difficulty;

    #[test]
    fn test_random_agent_only_picks_open_cells() {
        let mut state = create_game(Difficulty::Medium.config(), 5).unwrap();
        let mut agent = RandomAgent::new(5);
        for _ in 0..500 {
            match agent.next_move(&game_view(&state)).unwrap() {
                Some(d) => assert!(apply_move(&mut state, d).accepted),
                None => break,
            }
        }
    }

    #[test]
    fn test_random_agent_is_seeded() {
        let state = create_game(Difficulty::Easy.config(), 3).unwrap();
        let view = game_view(&state);
        let mut a = RandomAgent::new(11);
        let mut b = RandomAgent::new(11);
        for _ in 0..10 {
            assert_eq!(a.next_move(&view).unwrap(), b.next_move(&view).unwrap());
        }
    }
}
