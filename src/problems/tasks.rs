//! Task scheduling domain: complete every task on the list.

use std::fmt;

use crate::domain::{Action, Problem};

/// A unit of work with scheduling metadata.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Task {
    pub name: String,
    pub priority: i32,
    pub deadline: i32,
}

impl Task {
    pub fn new(name: impl Into<String>, priority: i32, deadline: i32) -> Self {
        Self {
            name: name.into(),
            priority,
            deadline,
        }
    }
}

/// Remaining tasks, in list order.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TaskSchedulerState {
    pub tasks: Vec<Task>,
}

impl TaskSchedulerState {
    pub fn new(tasks: Vec<Task>) -> Self {
        Self { tasks }
    }
}

impl Default for TaskSchedulerState {
    fn default() -> Self {
        Self::new(vec![
            Task::new("Task 1", 3, 5),
            Task::new("Task 2", 2, 3),
            Task::new("Task 3", 5, 10),
        ])
    }
}

impl fmt::Display for TaskSchedulerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for task in &self.tasks {
            writeln!(
                f,
                "Task: {}, Priority: {}, Deadline: {}",
                task.name, task.priority, task.deadline
            )?;
        }
        Ok(())
    }
}

/// Complete all tasks, one per step.
#[derive(Debug, Default)]
pub struct TaskSchedulerProblem {
    initial: TaskSchedulerState,
}

impl TaskSchedulerProblem {
    pub fn new(initial: TaskSchedulerState) -> Self {
        Self { initial }
    }
}

impl Problem for TaskSchedulerProblem {
    type State = TaskSchedulerState;

    fn initial_state(&self) -> TaskSchedulerState {
        self.initial.clone()
    }

    fn is_goal(&self, state: &TaskSchedulerState) -> bool {
        state.tasks.is_empty()
    }

    fn actions(&self, state: &TaskSchedulerState) -> Vec<Action<TaskSchedulerState>> {
        state
            .tasks
            .iter()
            .enumerate()
            .map(|(i, task)| {
                let mut remaining = state.tasks.clone();
                remaining.remove(i);
                Action::new(
                    format!("Complete {}", task.name),
                    1.0,
                    TaskSchedulerState::new(remaining),
                )
            })
            .collect()
    }

    /// Sum of remaining priorities.
    fn heuristic(&self, state: &TaskSchedulerState) -> f64 {
        state.tasks.iter().map(|t| t.priority as f64).sum()
    }
}
