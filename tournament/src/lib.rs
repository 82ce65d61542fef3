pub mod runner;
pub mod batch;

pub use runner::{run_game, GameResult};
pub use batch::{run_batch, BatchSummary};
