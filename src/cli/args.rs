//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum, ValueHint};

use crate::search::Algorithm;

/// Generic search framework: classical search strategies over pluggable problem domains
#[derive(Parser, Debug)]
#[command(name = "symphony")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase verbosity (-d: info, -dd: debug, -ddd: trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub debug: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Solve the built-in 5x5 maze
    Maze {
        /// Search algorithm to use
        #[arg(short, long, value_enum, default_value = "astar")]
        algorithm: AlgorithmArg,

        /// Print the explored search tree
        #[arg(long)]
        show_tree: bool,
    },

    /// Solve the two-room vacuum cleaner world
    Vacuum {
        /// Search algorithm to use
        #[arg(short, long, value_enum, default_value = "bfs")]
        algorithm: AlgorithmArg,
    },

    /// Schedule the built-in task list
    Tasks {
        /// Search algorithm to use
        #[arg(short, long, value_enum, default_value = "astar")]
        algorithm: AlgorithmArg,
    },

    /// Compute a study plan from a JSON plan file
    Study {
        /// Plan file (mastery_levels, dependencies, synergies, time)
        #[arg(value_hint = ValueHint::FilePath)]
        plan: PathBuf,

        /// Frontier bound for beam search
        #[arg(short, long)]
        beam_width: Option<usize>,
    },

    /// Run the all-different constraint satisfaction demo
    Csp,

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

/// Algorithm selection on the command line.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlgorithmArg {
    /// Breadth-first search
    Bfs,
    /// Uniform-cost search
    Ucs,
    /// A* search
    Astar,
    /// Beam search
    Beam,
}

impl From<AlgorithmArg> for Algorithm {
    fn from(arg: AlgorithmArg) -> Self {
        match arg {
            AlgorithmArg::Bfs => Algorithm::BreadthFirst,
            AlgorithmArg::Ucs => Algorithm::UniformCost,
            AlgorithmArg::Astar => Algorithm::AStar,
            AlgorithmArg::Beam => Algorithm::Beam,
        }
    }
}
