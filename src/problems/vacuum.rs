//! Two-room vacuum cleaner world.

use std::fmt;

use crate::domain::{Action, Problem};

/// Agent position and per-room dirt flags.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VacuumState {
    /// Room the agent occupies: 0 or 1
    pub position: usize,
    /// Dirt flags for rooms 0 and 1
    pub dirty: [bool; 2],
}

impl VacuumState {
    pub fn new(position: usize, dirty: [bool; 2]) -> Self {
        Self { position, dirty }
    }
}

impl Default for VacuumState {
    fn default() -> Self {
        Self::new(0, [true, true])
    }
}

impl fmt::Display for VacuumState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "VacuumState({}, {}, {})",
            self.position, self.dirty[0], self.dirty[1]
        )
    }
}

/// Clean both rooms. The agent sucks when its room is dirty and otherwise
/// moves to the other room, so the branching factor is 1.
#[derive(Debug, Default)]
pub struct VacuumProblem {
    initial: VacuumState,
}

impl VacuumProblem {
    pub fn new(initial: VacuumState) -> Self {
        Self { initial }
    }
}

impl Problem for VacuumProblem {
    type State = VacuumState;

    fn initial_state(&self) -> VacuumState {
        self.initial.clone()
    }

    fn is_goal(&self, state: &VacuumState) -> bool {
        !state.dirty[0] && !state.dirty[1]
    }

    fn actions(&self, state: &VacuumState) -> Vec<Action<VacuumState>> {
        let here = state.position;
        let there = 1 - here;

        if state.dirty[here] {
            let mut dirty = state.dirty;
            dirty[here] = false;
            vec![Action::new("Suck", 1.0, VacuumState::new(here, dirty))]
        } else {
            let name = if here == 0 { "Right" } else { "Left" };
            vec![Action::new(name, 1.0, VacuumState::new(there, state.dirty))]
        }
    }

    /// Number of dirty rooms.
    fn heuristic(&self, state: &VacuumState) -> f64 {
        state.dirty.iter().filter(|&&d| d).count() as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dirty_room_offers_suck_only() {
        let problem = VacuumProblem::default();
        let actions = problem.actions(&problem.initial_state());
        assert_eq!(actions.len(), 1);
        assert_eq!(actions[0].name, "Suck");
        assert_eq!(actions[0].effect.dirty, [false, true]);
    }

    #[test]
    fn clean_room_offers_move_to_other_room() {
        let problem = VacuumProblem::default();
        let state = VacuumState::new(0, [false, true]);
        let actions = problem.actions(&state);
        assert_eq!(actions.len(), 1);
        assert_eq!(actions[0].name, "Right");
        assert_eq!(actions[0].effect.position, 1);
    }

    #[test]
    fn goal_requires_both_rooms_clean() {
        let problem = VacuumProblem::default();
        assert!(!problem.is_goal(&VacuumState::new(1, [false, true])));
        assert!(problem.is_goal(&VacuumState::new(1, [false, false])));
    }

    #[test]
    fn heuristic_counts_dirty_rooms() {
        let problem = VacuumProblem::default();
        assert_eq!(problem.heuristic(&VacuumState::default()), 2.0);
        assert_eq!(problem.heuristic(&VacuumState::new(0, [false, true])), 1.0);
    }
}
