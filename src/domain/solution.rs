//! Solution reconstruction and reporting.

use std::fmt;

use generational_arena::Index;

use crate::domain::problem::Action;
use crate::domain::tree::SearchTree;

/// The outcome of a successful search: the ordered actions from the initial
/// state to a goal state, plus the goal state itself and cost accounting.
#[derive(Debug)]
pub struct Solution<S> {
    /// Actions in execution order (root first)
    pub actions: Vec<Action<S>>,
    /// The goal state the search reached
    pub goal_state: S,
    /// Total path cost of the solution
    pub cost: f64,
    /// Nodes expanded by the strategy that produced this solution
    pub expanded: usize,
}

impl<S: Clone> Solution<S> {
    /// Reconstruct a solution by walking parent pointers from `goal` back
    /// to the root of `tree`, then reversing into execution order.
    pub fn from_tree(tree: &SearchTree<S>, goal: Index, expanded: usize) -> Option<Self> {
        let goal_node = tree.get(goal)?;
        let goal_state = goal_node.state.clone();
        let cost = goal_node.path_cost;

        let mut actions = Vec::new();
        let mut current = Some(goal);
        while let Some(idx) = current {
            let node = tree.get(idx)?;
            if let Some(action) = &node.action {
                actions.push(action.clone());
            }
            current = node.parent;
        }
        actions.reverse();

        Some(Self {
            actions,
            goal_state,
            cost,
            expanded,
        })
    }

    /// Number of actions in the solution.
    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }
}

/// What a strategy hands back: the solution (if any goal was reached) plus
/// the search tree it explored, for rendering and accounting.
#[derive(Debug)]
pub struct SearchOutcome<S> {
    pub solution: Option<Solution<S>>,
    pub tree: SearchTree<S>,
}

impl<S> SearchOutcome<S> {
    pub fn new(solution: Option<Solution<S>>, tree: SearchTree<S>) -> Self {
        Self { solution, tree }
    }

    pub fn solution(&self) -> Option<&Solution<S>> {
        self.solution.as_ref()
    }

    pub fn into_solution(self) -> Option<Solution<S>> {
        self.solution
    }
}

impl<S> fmt::Display for Solution<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for action in &self.actions {
            writeln!(f, "{}", action.name)?;
        }
        Ok(())
    }
}
