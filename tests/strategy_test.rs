//! Strategy behavior on a minimal increment domain.

use rstest::rstest;

use symphony::config::Settings;
use symphony::domain::{Action, Problem, SearchError};
use symphony::search::{create_strategy, AStarSearch, Algorithm, SearchStrategy};
use symphony::util::testing;

/// Count from 0 toward a target by unit-cost increments.
struct IncrementProblem {
    target: i64,
    /// Values at or above this bound have no successors.
    bound: i64,
}

impl IncrementProblem {
    fn new(target: i64, bound: i64) -> Self {
        Self { target, bound }
    }
}

impl Problem for IncrementProblem {
    type State = i64;

    fn initial_state(&self) -> i64 {
        0
    }

    fn is_goal(&self, state: &i64) -> bool {
        *state == self.target
    }

    fn actions(&self, state: &i64) -> Vec<Action<i64>> {
        if *state >= self.bound {
            return Vec::new();
        }
        vec![Action::new("Increment", 1.0, state + 1)]
    }

    fn heuristic(&self, state: &i64) -> f64 {
        (self.target - state).max(0) as f64
    }
}

#[test]
fn given_increment_problem_when_astar_searches_then_target_is_reached() {
    testing::init_test_setup();
    let problem = IncrementProblem::new(10, 100);

    let mut strategy = AStarSearch::new(10_000);
    let outcome = strategy.search(&problem).unwrap();

    let solution = outcome.solution().expect("target is reachable");
    assert_eq!(solution.goal_state, 10);
    assert_eq!(solution.cost, 10.0);
    assert_eq!(solution.len(), 10);
}

#[rstest]
#[case(Algorithm::BreadthFirst)]
#[case(Algorithm::UniformCost)]
#[case(Algorithm::AStar)]
#[case(Algorithm::Beam)]
fn given_increment_problem_when_any_algorithm_searches_then_target_is_reached(
    #[case] algorithm: Algorithm,
) {
    let problem = IncrementProblem::new(10, 100);
    let settings = Settings::default();

    let mut strategy = create_strategy(algorithm, &settings);
    let outcome = strategy.search(&problem).unwrap();

    let solution = outcome.solution().expect("target is reachable");
    assert_eq!(solution.goal_state, 10);
    assert_eq!(solution.cost, 10.0);
}

#[test]
fn given_unreachable_goal_when_frontier_exhausts_then_no_solution_is_reported() {
    // Successors stop at 5, goal is 10: the frontier drains normally.
    let problem = IncrementProblem::new(10, 5);

    let mut strategy = AStarSearch::new(10_000);
    let outcome = strategy.search(&problem).unwrap();

    assert!(outcome.solution().is_none());
    // Every reached value is still in the tree: 0..=5.
    assert_eq!(outcome.tree.len(), 6);
}

#[rstest]
#[case(Algorithm::BreadthFirst)]
#[case(Algorithm::UniformCost)]
#[case(Algorithm::AStar)]
#[case(Algorithm::Beam)]
fn given_endless_problem_when_limit_is_hit_then_search_aborts(#[case] algorithm: Algorithm) {
    // No goal and no bound: only the expansion limit stops the search.
    let problem = IncrementProblem::new(-1, i64::MAX);
    let settings = Settings {
        max_expansions: 50,
        ..Settings::default()
    };

    let mut strategy = create_strategy(algorithm, &settings);
    let result = strategy.search(&problem);

    assert!(matches!(
        result,
        Err(SearchError::ExpansionLimit { limit: 50 })
    ));
}

#[test]
fn given_solution_when_displayed_then_action_names_are_line_separated() {
    let problem = IncrementProblem::new(3, 100);

    let mut strategy = AStarSearch::new(1_000);
    let outcome = strategy.search(&problem).unwrap();

    let solution = outcome.solution().unwrap();
    assert_eq!(solution.to_string(), "Increment\nIncrement\nIncrement\n");
}
