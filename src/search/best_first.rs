//! Best-first search: uniform-cost (g) and A* (g + h).

use std::cmp::{Ordering, Reverse};
use std::collections::{BinaryHeap, HashSet};

use generational_arena::Index;
use tracing::{debug, instrument};

use crate::domain::{Problem, SearchError, SearchOutcome, SearchResult, SearchTree, Solution};
use crate::search::SearchStrategy;

/// Frontier entry ordered by evaluation value.
///
/// Costs are finite f64s produced by summing action costs and heuristics;
/// `total_cmp` gives the total order `BinaryHeap` needs.
#[derive(Debug)]
pub(crate) struct FrontierEntry {
    pub f: f64,
    pub index: Index,
}

impl PartialEq for FrontierEntry {
    fn eq(&self, other: &Self) -> bool {
        self.f.total_cmp(&other.f) == Ordering::Equal
    }
}

impl Eq for FrontierEntry {}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.f.total_cmp(&other.f)
    }
}

/// Shared best-first loop: pop the lowest-f entry, goal test, expand.
///
/// With `use_heuristic` false, f degenerates to g and this is uniform-cost
/// search; with it true, A*. The explored set is keyed by state value, so
/// re-reaching a settled state is skipped regardless of path.
pub(crate) fn best_first<P: Problem>(
    problem: &P,
    use_heuristic: bool,
    max_expansions: usize,
) -> SearchResult<SearchOutcome<P::State>> {
    let mut tree = SearchTree::new();
    let initial = problem.initial_state();
    let h = if use_heuristic {
        problem.heuristic(&initial)
    } else {
        0.0
    };

    let root = tree.insert_root(initial, h);
    let mut frontier: BinaryHeap<Reverse<FrontierEntry>> = BinaryHeap::new();
    frontier.push(Reverse(FrontierEntry { f: h, index: root }));

    let mut explored: HashSet<P::State> = HashSet::new();
    let mut expanded = 0usize;

    while let Some(Reverse(entry)) = frontier.pop() {
        let (state, g) = match tree.get(entry.index) {
            Some(node) => (node.state.clone(), node.path_cost),
            None => {
                return Err(SearchError::InternalError(
                    "frontier index missing from search tree".into(),
                ))
            }
        };

        if problem.is_goal(&state) {
            debug!(expanded, cost = g, "goal reached");
            let solution = Solution::from_tree(&tree, entry.index, expanded);
            return Ok(SearchOutcome::new(solution, tree));
        }

        if explored.contains(&state) {
            continue;
        }
        explored.insert(state.clone());

        expanded += 1;
        if expanded > max_expansions {
            return Err(SearchError::ExpansionLimit {
                limit: max_expansions,
            });
        }

        for action in problem.actions(&state) {
            if explored.contains(&action.effect) {
                continue;
            }
            let h = if use_heuristic {
                problem.heuristic(&action.effect)
            } else {
                0.0
            };
            let f = g + action.cost + h;
            if let Some(child) = tree.insert_child(entry.index, action, h) {
                frontier.push(Reverse(FrontierEntry { f, index: child }));
            }
        }
    }

    debug!(expanded, "frontier exhausted without a goal");
    Ok(SearchOutcome::new(None, tree))
}

/// Uniform-cost search: best-first by accumulated path cost alone.
///
/// Optimal for any non-negative action costs, heuristic ignored.
#[derive(Debug)]
pub struct UniformCostSearch {
    max_expansions: usize,
}

impl UniformCostSearch {
    pub fn new(max_expansions: usize) -> Self {
        Self { max_expansions }
    }
}

impl<P: Problem> SearchStrategy<P> for UniformCostSearch {
    #[instrument(level = "debug", skip_all)]
    fn search(&mut self, problem: &P) -> SearchResult<SearchOutcome<P::State>> {
        best_first(problem, false, self.max_expansions)
    }
}

/// A* search: best-first by f = g + h.
///
/// Optimal when the problem's heuristic is admissible.
#[derive(Debug)]
pub struct AStarSearch {
    max_expansions: usize,
}

impl AStarSearch {
    pub fn new(max_expansions: usize) -> Self {
        Self { max_expansions }
    }
}

impl<P: Problem> SearchStrategy<P> for AStarSearch {
    #[instrument(level = "debug", skip_all)]
    fn search(&mut self, problem: &P) -> SearchResult<SearchOutcome<P::State>> {
        best_first(problem, true, self.max_expansions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frontier_orders_by_lowest_f_first() {
        let mut tree: SearchTree<i32> = SearchTree::new();
        let a = tree.insert_root(0, 0.0);

        let mut heap = BinaryHeap::new();
        heap.push(Reverse(FrontierEntry { f: 3.0, index: a }));
        heap.push(Reverse(FrontierEntry { f: 1.0, index: a }));
        heap.push(Reverse(FrontierEntry { f: 2.0, index: a }));

        let Reverse(first) = heap.pop().unwrap();
        assert_eq!(first.f, 1.0);
        let Reverse(second) = heap.pop().unwrap();
        assert_eq!(second.f, 2.0);
    }
}
