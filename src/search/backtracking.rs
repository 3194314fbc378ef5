//! Backtracking search for constraint satisfaction problems.

use tracing::{debug, instrument};

use crate::domain::{Assignment, CspProblem};

/// Depth-first assignment with chronological backtracking.
///
/// Variables are assigned in name order; consistency is checked after every
/// tentative assignment, so constraints must tolerate partial assignments.
pub struct BacktrackingSearch<'a> {
    problem: &'a CspProblem,
}

impl<'a> BacktrackingSearch<'a> {
    pub fn new(problem: &'a CspProblem) -> Self {
        Self { problem }
    }

    /// Find a complete consistent assignment, or `None` if the problem is
    /// unsatisfiable.
    #[instrument(level = "debug", skip_all)]
    pub fn search(&self) -> Option<Assignment> {
        let variables: Vec<(&String, &Vec<i64>)> = self.problem.variables().iter().collect();
        let mut assignment = Assignment::new();
        if self.backtrack(&variables, 0, &mut assignment) {
            debug!(?assignment, "consistent assignment found");
            Some(assignment)
        } else {
            debug!("no consistent assignment exists");
            None
        }
    }

    fn backtrack(
        &self,
        variables: &[(&String, &Vec<i64>)],
        depth: usize,
        assignment: &mut Assignment,
    ) -> bool {
        if depth == variables.len() {
            return true;
        }
        let (name, domain) = variables[depth];
        for &value in domain.iter() {
            assignment.insert(name.clone(), value);
            if self.problem.is_consistent(assignment)
                && self.backtrack(variables, depth + 1, assignment)
            {
                return true;
            }
            assignment.remove(name);
        }
        false
    }
}
