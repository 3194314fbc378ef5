//! Core search abstractions: states, actions, and the problem trait.

use std::fmt;
use std::hash::Hash;

/// Bounds every search state must satisfy.
///
/// `Eq + Hash` let strategies keep explored/visited sets keyed by value,
/// `Clone` lets the tree own its states, and `Display` drives solution and
/// tree rendering. Blanket-implemented, so domains only derive the pieces.
pub trait SearchState: Clone + fmt::Debug + fmt::Display + Eq + Hash {}

impl<T: Clone + fmt::Debug + fmt::Display + Eq + Hash> SearchState for T {}

/// A named, costed transition to a successor state.
#[derive(Debug, Clone)]
pub struct Action<S> {
    /// Human-readable name, printed in solutions
    pub name: String,
    /// Non-negative cost of taking this action
    pub cost: f64,
    /// State the action leads to
    pub effect: S,
}

impl<S> Action<S> {
    pub fn new(name: impl Into<String>, cost: f64, effect: S) -> Self {
        Self {
            name: name.into(),
            cost,
            effect,
        }
    }
}

/// A search problem: an initial state, a goal test, and the actions
/// available in a given state.
///
/// Strategies are generic over this trait, so a domain only describes its
/// transition model. `heuristic` defaults to zero, which keeps uninformed
/// domains honest when run under A* or beam search.
pub trait Problem {
    type State: SearchState;

    /// State the search starts from.
    fn initial_state(&self) -> Self::State;

    /// Whether `state` satisfies the goal.
    fn is_goal(&self, state: &Self::State) -> bool;

    /// Actions applicable in `state`, each carrying its successor.
    fn actions(&self, state: &Self::State) -> Vec<Action<Self::State>>;

    /// Estimated cost from `state` to the nearest goal. Zero by default.
    fn heuristic(&self, _state: &Self::State) -> f64 {
        0.0
    }
}
