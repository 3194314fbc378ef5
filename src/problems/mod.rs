//! Built-in problem domains.

pub mod maze;
pub mod study;
pub mod tasks;
pub mod vacuum;

pub use maze::{MazeProblem, MazeState};
pub use study::{StudyPlan, StudyProblem, StudyState};
pub use tasks::{Task, TaskSchedulerProblem, TaskSchedulerState};
pub use vacuum::{VacuumProblem, VacuumState};
