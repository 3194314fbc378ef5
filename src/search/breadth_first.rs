//! Breadth-first search: FIFO frontier, goal test on dequeue.

use std::collections::{HashSet, VecDeque};

use tracing::{debug, instrument};

use crate::domain::{Problem, SearchError, SearchOutcome, SearchResult, SearchTree, Solution};
use crate::search::SearchStrategy;

/// Breadth-first search.
///
/// Explores all states at the current depth before moving deeper. Duplicate
/// states are pruned with a visited set, so this is graph search; for
/// unit-cost domains the first goal dequeued is still a shortest path.
#[derive(Debug)]
pub struct BreadthFirstSearch {
    max_expansions: usize,
}

impl BreadthFirstSearch {
    pub fn new(max_expansions: usize) -> Self {
        Self { max_expansions }
    }
}

impl<P: Problem> SearchStrategy<P> for BreadthFirstSearch {
    #[instrument(level = "debug", skip_all)]
    fn search(&mut self, problem: &P) -> SearchResult<SearchOutcome<P::State>> {
        let mut tree = SearchTree::new();
        let initial = problem.initial_state();
        let h = problem.heuristic(&initial);

        let mut visited: HashSet<P::State> = HashSet::new();
        visited.insert(initial.clone());

        let root = tree.insert_root(initial, h);
        let mut frontier = VecDeque::new();
        frontier.push_back(root);

        let mut expanded = 0usize;
        while let Some(idx) = frontier.pop_front() {
            let state = match tree.get(idx) {
                Some(node) => node.state.clone(),
                None => {
                    return Err(SearchError::InternalError(
                        "frontier index missing from search tree".into(),
                    ))
                }
            };

            if problem.is_goal(&state) {
                debug!(expanded, tree_size = tree.len(), "goal reached");
                let solution = Solution::from_tree(&tree, idx, expanded);
                return Ok(SearchOutcome::new(solution, tree));
            }

            expanded += 1;
            if expanded > self.max_expansions {
                return Err(SearchError::ExpansionLimit {
                    limit: self.max_expansions,
                });
            }

            for action in problem.actions(&state) {
                if visited.contains(&action.effect) {
                    continue;
                }
                visited.insert(action.effect.clone());
                let h = problem.heuristic(&action.effect);
                if let Some(child) = tree.insert_child(idx, action, h) {
                    frontier.push_back(child);
                }
            }
        }

        debug!(expanded, "frontier exhausted without a goal");
        Ok(SearchOutcome::new(None, tree))
    }
}
