pub mod error;
pub mod types;
pub mod grid;
pub mod navigation;
pub mod solver;
pub mod setup;
pub mod engine;
pub mod visibility;


pub use error::GameError;
pub use grid::{Grid, ObstacleSet};
pub use types::*;
