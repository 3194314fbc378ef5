//! Search strategies: uninformed, informed, and constraint-based.

pub mod backtracking;
pub mod beam;
pub mod best_first;
pub mod breadth_first;

pub use backtracking::BacktrackingSearch;
pub use beam::BeamSearch;
pub use best_first::{AStarSearch, UniformCostSearch};
pub use breadth_first::BreadthFirstSearch;

use crate::config::Settings;
use crate::domain::{Problem, SearchOutcome, SearchResult};

/// A search strategy over a problem domain.
///
/// An outcome with no solution means the frontier was exhausted without
/// reaching a goal; errors are reserved for aborted searches (expansion
/// limits, invalid configuration).
pub trait SearchStrategy<P: Problem> {
    fn search(&mut self, problem: &P) -> SearchResult<SearchOutcome<P::State>>;
}

/// The built-in search algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Algorithm {
    BreadthFirst,
    UniformCost,
    AStar,
    Beam,
}

/// Construct the strategy for `algorithm`, configured from `settings`.
pub fn create_strategy<P: Problem>(
    algorithm: Algorithm,
    settings: &Settings,
) -> Box<dyn SearchStrategy<P>> {
    match algorithm {
        Algorithm::BreadthFirst => Box::new(BreadthFirstSearch::new(settings.max_expansions)),
        Algorithm::UniformCost => Box::new(UniformCostSearch::new(settings.max_expansions)),
        Algorithm::AStar => Box::new(AStarSearch::new(settings.max_expansions)),
        Algorithm::Beam => Box::new(BeamSearch::new(settings.beam_width, settings.max_expansions)),
    }
}
