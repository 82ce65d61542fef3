pub mod agent;
pub mod random;
pub mod solver;

pub use agent::{Agent, AgentKind};
pub use random::RandomAgent;
pub use solver::SolverAgent;
