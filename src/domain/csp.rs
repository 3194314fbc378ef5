//! Constraint satisfaction problems over finite integer domains.

use std::collections::BTreeMap;

use tracing::instrument;

/// A partial assignment of variables to values.
pub type Assignment = BTreeMap<String, i64>;

/// A boolean constraint over a (possibly partial) assignment.
///
/// Constraints must tolerate unassigned variables: return `true` when a
/// variable the constraint references is absent, so backtracking can check
/// consistency after every tentative assignment.
pub type Constraint = Box<dyn Fn(&Assignment) -> bool>;

/// A constraint satisfaction problem: named variables with finite integer
/// domains plus constraints over assignments.
#[derive(Default)]
pub struct CspProblem {
    variables: BTreeMap<String, Vec<i64>>,
    constraints: Vec<Constraint>,
}

impl CspProblem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a variable with its domain. Re-adding a variable replaces its
    /// domain.
    pub fn add_variable(&mut self, name: impl Into<String>, domain: Vec<i64>) {
        self.variables.insert(name.into(), domain);
    }

    /// Add a constraint. Constraints are checked in insertion order.
    pub fn add_constraint(
        &mut self,
        constraint: impl Fn(&Assignment) -> bool + 'static,
    ) {
        self.constraints.push(Box::new(constraint));
    }

    /// Variables and their domains, in name order.
    pub fn variables(&self) -> &BTreeMap<String, Vec<i64>> {
        &self.variables
    }

    /// Whether `assignment` violates no constraint.
    #[instrument(level = "trace", skip(self, assignment))]
    pub fn is_consistent(&self, assignment: &Assignment) -> bool {
        self.constraints.iter().all(|c| c(assignment))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// All-different over two variables, tolerant of partial assignments.
    fn not_equal(a: &'static str, b: &'static str) -> impl Fn(&Assignment) -> bool {
        move |assignment| match (assignment.get(a), assignment.get(b)) {
            (Some(x), Some(y)) => x != y,
            _ => true,
        }
    }

    #[test]
    fn add_variable_registers_domain() {
        let mut csp = CspProblem::new();
        csp.add_variable("X", vec![1, 2, 3]);
        assert_eq!(csp.variables().len(), 1);
        assert_eq!(csp.variables()["X"].len(), 3);
    }

    #[test]
    fn is_consistent_checks_all_constraints() {
        let mut csp = CspProblem::new();
        csp.add_variable("X", vec![1, 2, 3]);
        csp.add_variable("Y", vec![1, 2, 3]);
        csp.add_constraint(not_equal("X", "Y"));

        let ok: Assignment = [("X".to_string(), 1), ("Y".to_string(), 2)].into();
        assert!(csp.is_consistent(&ok));

        let bad: Assignment = [("X".to_string(), 1), ("Y".to_string(), 1)].into();
        assert!(!csp.is_consistent(&bad));
    }

    #[test]
    fn partial_assignment_is_consistent_when_constraints_tolerate_it() {
        let mut csp = CspProblem::new();
        csp.add_variable("X", vec![1, 2]);
        csp.add_variable("Y", vec![1, 2]);
        csp.add_constraint(not_equal("X", "Y"));

        let partial: Assignment = [("X".to_string(), 1)].into();
        assert!(csp.is_consistent(&partial));
    }
}
