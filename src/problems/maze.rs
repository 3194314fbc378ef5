//! Grid maze domain: navigate from a start cell to the goal cell.

use std::fmt;

use crate::domain::{Action, Problem};

/// Cell values: 0 open, 1 wall, -1 goal.
pub type Grid = [[i8; 5]; 5];

pub const OPEN: i8 = 0;
pub const WALL: i8 = 1;
pub const GOAL: i8 = -1;

const DEFAULT_GRID: Grid = [
    [0, 0, 0, 0, 0],
    [0, 1, 1, 1, 0],
    [0, 1, -1, 0, 0],
    [0, 1, 1, 1, 0],
    [0, 0, 0, 0, 0],
];

/// Position of the agent within a fixed maze grid.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MazeState {
    pub grid: Grid,
    pub x: usize,
    pub y: usize,
}

impl MazeState {
    pub fn new(grid: Grid, x: usize, y: usize) -> Self {
        Self { grid, x, y }
    }

    /// Coordinates of the goal cell, if the grid has one.
    pub fn goal_position(&self) -> Option<(usize, usize)> {
        for (x, row) in self.grid.iter().enumerate() {
            for (y, &cell) in row.iter().enumerate() {
                if cell == GOAL {
                    return Some((x, y));
                }
            }
        }
        None
    }
}

impl Default for MazeState {
    fn default() -> Self {
        Self::new(DEFAULT_GRID, 1, 1)
    }
}

impl fmt::Display for MazeState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (x, row) in self.grid.iter().enumerate() {
            for (y, &cell) in row.iter().enumerate() {
                let glyph = if (x, y) == (self.x, self.y) {
                    'V'
                } else {
                    match cell {
                        WALL => '#',
                        GOAL => 'X',
                        _ => ' ',
                    }
                };
                write!(f, "{}", glyph)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// The maze problem: reach the goal cell from the start position.
#[derive(Debug, Default)]
pub struct MazeProblem {
    initial: MazeState,
}

impl MazeProblem {
    pub fn new(initial: MazeState) -> Self {
        Self { initial }
    }
}

impl Problem for MazeProblem {
    type State = MazeState;

    fn initial_state(&self) -> MazeState {
        self.initial.clone()
    }

    fn is_goal(&self, state: &MazeState) -> bool {
        state.grid[state.x][state.y] == GOAL
    }

    fn actions(&self, state: &MazeState) -> Vec<Action<MazeState>> {
        let mut actions = Vec::new();
        let step = |x: usize, y: usize| MazeState::new(state.grid, x, y);

        if state.x > 0 && state.grid[state.x - 1][state.y] != WALL {
            actions.push(Action::new("Up", 1.0, step(state.x - 1, state.y)));
        }
        if state.x < state.grid.len() - 1 && state.grid[state.x + 1][state.y] != WALL {
            actions.push(Action::new("Down", 1.0, step(state.x + 1, state.y)));
        }
        if state.y > 0 && state.grid[state.x][state.y - 1] != WALL {
            actions.push(Action::new("Left", 1.0, step(state.x, state.y - 1)));
        }
        if state.y < state.grid[0].len() - 1 && state.grid[state.x][state.y + 1] != WALL {
            actions.push(Action::new("Right", 1.0, step(state.x, state.y + 1)));
        }

        actions
    }

    /// Manhattan distance to the goal cell in the grid.
    fn heuristic(&self, state: &MazeState) -> f64 {
        match state.goal_position() {
            Some((gx, gy)) => {
                (state.x.abs_diff(gx) + state.y.abs_diff(gy)) as f64
            }
            None => 0.0,
        }
    }
}
