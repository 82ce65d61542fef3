// ═══════════════════════════════════════════════════════════════════════
// Human Agent — reads one direction token per line
//
// Accepts up/down/left/right, WASD, or arrow-key escape sequences. Bad
// tokens are reported and read again; `q`, `quit` or end of input stops.
// ═══════════════════════════════════════════════════════════════════════

use sotelo_agents::Agent;
use sotelo_engine::visibility::GameView;
use sotelo_engine::{Direction, GameError};
use std::io::BufRead;
use tracing::debug;

pub struct HumanAgent<R> {
    input: R,
}

impl<R: BufRead> HumanAgent<R> {
    pub fn new(input: R) -> Self {
        HumanAgent { input }
    }

    fn read_token(&mut self) -> Option<String> {
        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) => None,
            Ok(_) => Some(line.trim().to_string()),
            Err(e) => {
                debug!(error = %e, "input read failed");
                None
            }
        }
    }
}

impl<R: BufRead + Send> Agent for HumanAgent<R> {
    fn name(&self) -> &str {
        "Human"
    }

    fn next_move(&mut self, _view: &GameView) -> Result<Option<Direction>, GameError> {
        loop {
            println!("Press an arrow key (or w/a/s/d) and Enter to move, q to quit:");
            let Some(token) = self.read_token() else {
                return Ok(None);
            };
            if token.eq_ignore_ascii_case("q") || token.eq_ignore_ascii_case("quit") {
                return Ok(None);
            }
            match token.parse::<Direction>() {
                Ok(d) => return Ok(Some(d)),
                Err(e) => {
                    debug!(error = %e, "ignored input");
                    println!("Invalid key. Use arrows or WASD.");
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sotelo_engine::setup::create_game;
    use sotelo_engine::visibility::game_view;
    use sotelo_engine::Difficulty;
    use std::io::Cursor;

    #[test]
    fn test_reads_tokens_and_skips_garbage() {
        let state = create_game(Difficulty::Easy.config(), 1).unwrap();
        let view = game_view(&state);
        let input = Cursor::new("d\nnope\n\x1b[B\nleft\nq\nup\n");
        let mut human = HumanAgent::new(input);
        assert_eq!(human.next_move(&view).unwrap(), Some(Direction::Right));
        assert_eq!(human.next_move(&view).unwrap(), Some(Direction::Down));
        assert_eq!(human.next_move(&view).unwrap(), Some(Direction::Left));
        assert_eq!(human.next_move(&view).unwrap(), None);
    }

    #[test]
    fn test_end_of_input_stops() {
        let state = create_game(Difficulty::Easy.config(), 1).unwrap();
        let mut human = HumanAgent::new(Cursor::new(""));
        assert_eq!(human.next_move(&game_view(&state)).unwrap(), None);
    }
}
