//! Vacuum world solved by every strategy.

use rstest::rstest;

use symphony::config::Settings;
use symphony::problems::{VacuumProblem, VacuumState};
use symphony::search::{create_strategy, Algorithm, BeamSearch, SearchStrategy};

#[rstest]
#[case(Algorithm::BreadthFirst)]
#[case(Algorithm::UniformCost)]
#[case(Algorithm::AStar)]
#[case(Algorithm::Beam)]
fn given_dirty_rooms_when_searching_then_three_step_plan_is_found(#[case] algorithm: Algorithm) {
    // Arrange
    let problem = VacuumProblem::default();
    let settings = Settings::default();

    // Act
    let mut strategy = create_strategy(algorithm, &settings);
    let outcome = strategy.search(&problem).unwrap();

    // Assert
    let solution = outcome.solution().expect("vacuum world is solvable");
    let names: Vec<&str> = solution.actions.iter().map(|a| a.name.as_str()).collect();
    assert_eq!(names, vec!["Suck", "Right", "Suck"]);
    assert_eq!(solution.cost, 3.0);
    assert_eq!(solution.goal_state.dirty, [false, false]);
}

#[test]
fn given_beam_width_one_when_searching_then_plan_is_still_found() {
    // Branching factor is 1, so even the narrowest beam cannot prune the
    // only path.
    let problem = VacuumProblem::default();

    let mut strategy = BeamSearch::new(1, 10_000);
    let outcome = strategy.search(&problem).unwrap();

    assert!(outcome.solution().is_some());
}

#[test]
fn given_already_clean_rooms_when_searching_then_solution_is_empty() {
    let problem = VacuumProblem::new(VacuumState::new(0, [false, false]));
    let settings = Settings::default();

    let mut strategy = create_strategy(Algorithm::BreadthFirst, &settings);
    let solution = strategy.search(&problem).unwrap().into_solution().unwrap();

    assert!(solution.is_empty());
    assert_eq!(solution.cost, 0.0);
    assert_eq!(solution.expanded, 0);
}
