//! Command dispatch: wire parsed arguments to problems and strategies.

use colored::Colorize;
use tracing::{debug, instrument};

use crate::cli::args::{AlgorithmArg, Cli, Commands};
use crate::cli::error::CliResult;
use crate::config::Settings;
use crate::domain::{CspProblem, Problem, SearchOutcome};
use crate::problems::{MazeProblem, StudyPlan, StudyProblem, TaskSchedulerProblem, VacuumProblem};
use crate::search::{create_strategy, Algorithm, BacktrackingSearch, BeamSearch, SearchStrategy};

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    let settings = Settings::load()?;
    debug!(?settings, "settings loaded");

    match &cli.command {
        Some(Commands::Maze {
            algorithm,
            show_tree,
        }) => maze(*algorithm, *show_tree, &settings),
        Some(Commands::Vacuum { algorithm }) => vacuum(*algorithm, &settings),
        Some(Commands::Tasks { algorithm }) => tasks(*algorithm, &settings),
        Some(Commands::Study { plan, beam_width }) => study(plan, *beam_width, &settings),
        Some(Commands::Csp) => csp(),
        // Completion is handled in main before dispatch.
        Some(Commands::Completion { .. }) | None => Ok(()),
    }
}

fn run<P: Problem>(
    problem: &P,
    algorithm: AlgorithmArg,
    settings: &Settings,
) -> CliResult<SearchOutcome<P::State>> {
    let mut strategy = create_strategy::<P>(Algorithm::from(algorithm), settings);
    Ok(strategy.search(problem)?)
}

#[instrument(skip(settings))]
fn maze(algorithm: AlgorithmArg, show_tree: bool, settings: &Settings) -> CliResult<()> {
    let problem = MazeProblem::default();
    let outcome = run(&problem, algorithm, settings)?;

    if show_tree {
        if let Some(tree) = outcome.tree.render() {
            println!("{}", tree);
        }
    }

    match outcome.solution() {
        Some(solution) => {
            println!("Solution found!");
            println!("{}", solution.goal_state);
            print!("{}", solution);
            println!(
                "{}",
                format!(
                    "cost: {}, expanded: {} nodes",
                    solution.cost, solution.expanded
                )
                .dimmed()
            );
        }
        None => println!("Solution not found!"),
    }
    Ok(())
}

#[instrument(skip(settings))]
fn vacuum(algorithm: AlgorithmArg, settings: &Settings) -> CliResult<()> {
    let problem = VacuumProblem::default();
    let outcome = run(&problem, algorithm, settings)?;

    match outcome.solution() {
        Some(solution) => {
            println!("Solution found!");
            println!("{}", solution.goal_state);
            print!("{}", solution);
        }
        None => println!("Solution not found!"),
    }
    Ok(())
}

#[instrument(skip(settings))]
fn tasks(algorithm: AlgorithmArg, settings: &Settings) -> CliResult<()> {
    let problem = TaskSchedulerProblem::default();
    let outcome = run(&problem, algorithm, settings)?;

    match outcome.solution() {
        Some(solution) => {
            println!("Solution found!");
            print!("{}", solution);
        }
        None => println!("Solution not found!"),
    }
    Ok(())
}

#[instrument(skip(settings))]
fn study(
    plan_path: &std::path::Path,
    beam_width: Option<usize>,
    settings: &Settings,
) -> CliResult<()> {
    let plan = StudyPlan::load(plan_path)?;
    let problem = StudyProblem::from(plan);

    let width = beam_width.unwrap_or(settings.beam_width);
    let mut strategy = BeamSearch::new(width, settings.max_expansions);
    let outcome = strategy.search(&problem)?;

    match outcome.solution() {
        Some(solution) => {
            println!("Optimal study plan:");
            for action in &solution.actions {
                println!("Study {} for {} hours", action.name, action.cost);
            }
        }
        None => println!("No solution found within the given time."),
    }
    Ok(())
}

#[instrument]
fn csp() -> CliResult<()> {
    let mut problem = CspProblem::new();
    problem.add_variable("X", vec![1, 2, 3]);
    problem.add_variable("Y", vec![1, 2, 3]);
    problem.add_variable("Z", vec![1, 2, 3]);

    let pairs = [("X", "Y"), ("Y", "Z"), ("X", "Z")];
    for (a, b) in pairs {
        problem.add_constraint(move |assignment| {
            match (assignment.get(a), assignment.get(b)) {
                (Some(x), Some(y)) => x != y,
                _ => true,
            }
        });
    }

    let search = BacktrackingSearch::new(&problem);
    match search.search() {
        Some(assignment) => {
            println!("Solution found:");
            for (name, value) in &assignment {
                println!("{} = {}", name, value);
            }
        }
        None => println!("No solution found."),
    }
    Ok(())
}
