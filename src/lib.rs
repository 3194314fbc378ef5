//! Symphony: a generic search framework.
//!
//! Define a [`domain::Problem`] (states, costed actions, a goal test, and
//! optionally a heuristic) and run any of the provided strategies against
//! it:
//!
//! - [`search::BreadthFirstSearch`]: FIFO graph search
//! - [`search::UniformCostSearch`]: best-first by path cost
//! - [`search::AStarSearch`]: best-first by path cost plus heuristic
//! - [`search::BeamSearch`]: bounded-frontier best-first
//! - [`search::BacktrackingSearch`]: depth-first CSP solving
//!
//! Four demo domains ship in [`problems`]: a grid maze, the two-room vacuum
//! world, a task scheduler, and a JSON-driven study planner.
//!
//! ```
//! use symphony::domain::SearchOutcome;
//! use symphony::problems::VacuumProblem;
//! use symphony::search::{BreadthFirstSearch, SearchStrategy};
//!
//! let problem = VacuumProblem::default();
//! let mut strategy = BreadthFirstSearch::new(10_000);
//! let outcome: SearchOutcome<_> = strategy.search(&problem).unwrap();
//! let solution = outcome.solution().expect("vacuum world is solvable");
//! assert_eq!(solution.to_string(), "Suck\nRight\nSuck\n");
//! ```

pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod problems;
pub mod search;
pub mod util;
