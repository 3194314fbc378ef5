//! Beam search: best-first with a bounded frontier.

use itertools::Itertools;
use tracing::{debug, instrument};

use crate::domain::{Problem, SearchError, SearchOutcome, SearchResult, SearchTree, Solution};
use crate::search::SearchStrategy;

/// Beam search.
///
/// Expands the frontier level by level, keeping only the `beam_width`
/// entries with the lowest f = g + h after each round. Bounds memory at the
/// price of completeness and optimality: pruning can discard every path to
/// a goal.
#[derive(Debug)]
pub struct BeamSearch {
    beam_width: usize,
    max_expansions: usize,
}

impl BeamSearch {
    pub fn new(beam_width: usize, max_expansions: usize) -> Self {
        Self {
            beam_width,
            max_expansions,
        }
    }
}

impl<P: Problem> SearchStrategy<P> for BeamSearch {
    #[instrument(level = "debug", skip_all, fields(beam_width = self.beam_width))]
    fn search(&mut self, problem: &P) -> SearchResult<SearchOutcome<P::State>> {
        if self.beam_width == 0 {
            return Err(SearchError::InvalidProblem(
                "beam width must be at least 1".into(),
            ));
        }

        let mut tree = SearchTree::new();
        let initial = problem.initial_state();
        let h = problem.heuristic(&initial);
        let root = tree.insert_root(initial, h);

        let mut beam = vec![root];
        let mut expanded = 0usize;

        while !beam.is_empty() {
            let mut candidates = Vec::new();

            for idx in beam {
                let state = match tree.get(idx) {
                    Some(node) => node.state.clone(),
                    None => {
                        return Err(SearchError::InternalError(
                            "beam index missing from search tree".into(),
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
                    let h = problem.heuristic(&action.effect);
                    if let Some(child) = tree.insert_child(idx, action, h) {
                        let f = tree
                            .get(child)
                            .map(|node| node.f_cost())
                            .unwrap_or(f64::INFINITY);
                        candidates.push((f, child));
                    }
                }
            }

            // Keep only the k best f(n) nodes for the next round.
            beam = candidates
                .into_iter()
                .sorted_by(|(a, _), (b, _)| a.total_cmp(b))
                .take(self.beam_width)
                .map(|(_, idx)| idx)
                .collect();
        }

        debug!(expanded, "beam emptied without a goal");
        Ok(SearchOutcome::new(None, tree))
    }
}
