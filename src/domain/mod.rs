//! Domain layer: core search abstractions and data structures.

pub mod csp;
pub mod error;
pub mod problem;
pub mod solution;
pub mod tree;

pub use csp::{Assignment, Constraint, CspProblem};
pub use error::{PlanError, SearchError, SearchResult};
pub use problem::{Action, Problem, SearchState};
pub use solution::{SearchOutcome, Solution};
pub use tree::{SearchNode, SearchTree};
