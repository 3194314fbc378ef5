//! Constraint satisfaction: problem construction and backtracking search.

use symphony::domain::{Assignment, CspProblem};
use symphony::search::BacktrackingSearch;

fn not_equal(a: &'static str, b: &'static str) -> impl Fn(&Assignment) -> bool {
    move |assignment| match (assignment.get(a), assignment.get(b)) {
        (Some(x), Some(y)) => x != y,
        _ => true,
    }
}

#[test]
fn given_variable_when_added_then_domain_is_registered() {
    let mut csp = CspProblem::new();
    csp.add_variable("X", vec![1, 2, 3]);

    assert_eq!(csp.variables().len(), 1);
    assert_eq!(csp.variables()["X"].len(), 3);
}

#[test]
fn given_constraint_when_checking_assignments_then_violations_are_detected() {
    let mut csp = CspProblem::new();
    csp.add_variable("X", vec![1, 2, 3]);
    csp.add_variable("Y", vec![1, 2, 3]);
    csp.add_constraint(not_equal("X", "Y"));

    let distinct: Assignment = [("X".to_string(), 1), ("Y".to_string(), 2)].into();
    assert!(csp.is_consistent(&distinct));

    let equal: Assignment = [("X".to_string(), 1), ("Y".to_string(), 1)].into();
    assert!(!csp.is_consistent(&equal));
}

#[test]
fn given_all_different_problem_when_backtracking_then_assignment_is_distinct() {
    // Arrange: X, Y, Z over {1,2,3}, pairwise distinct.
    let mut csp = CspProblem::new();
    csp.add_variable("X", vec![1, 2, 3]);
    csp.add_variable("Y", vec![1, 2, 3]);
    csp.add_variable("Z", vec![1, 2, 3]);
    csp.add_constraint(not_equal("X", "Y"));
    csp.add_constraint(not_equal("Y", "Z"));
    csp.add_constraint(not_equal("X", "Z"));

    // Act
    let search = BacktrackingSearch::new(&csp);
    let solution = search.search().expect("a pairwise-distinct assignment exists");

    // Assert
    assert_eq!(solution.len(), 3);
    assert_ne!(solution["X"], solution["Y"]);
    assert_ne!(solution["Y"], solution["Z"]);
    assert_ne!(solution["X"], solution["Z"]);
}

#[test]
fn given_unsatisfiable_problem_when_backtracking_then_none_is_returned() {
    let mut csp = CspProblem::new();
    csp.add_variable("X", vec![1]);
    csp.add_variable("Y", vec![1]);
    csp.add_constraint(not_equal("X", "Y"));

    let search = BacktrackingSearch::new(&csp);
    assert!(search.search().is_none());
}

#[test]
fn given_empty_problem_when_backtracking_then_empty_assignment_is_returned() {
    let csp = CspProblem::new();
    let search = BacktrackingSearch::new(&csp);

    let solution = search.search().expect("vacuously satisfiable");
    assert!(solution.is_empty());
}
