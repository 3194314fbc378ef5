//! Study planning domain: schedule study sessions to master every topic
//! before time runs out.

use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::hash::{Hash, Hasher};
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::domain::{Action, PlanError, Problem};

/// Mastery level treated as "done".
pub const FULL_MASTERY: f64 = 100.0;

/// Mastery gained per one-hour session, before synergy bonuses.
pub const SESSION_GAIN: f64 = 10.0;

/// Study plan file schema.
///
/// ```json
/// {
///   "mastery_levels": {"algebra": 40.0, "calculus": 0.0},
///   "dependencies": {"calculus": ["algebra"]},
///   "synergies": {"algebra": 2.5},
///   "time": 21.0
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StudyPlan {
    /// Topic -> current mastery percentage
    pub mastery_levels: BTreeMap<String, f64>,
    /// Topic -> prerequisite topics that must reach full mastery first
    #[serde(default)]
    pub dependencies: BTreeMap<String, Vec<String>>,
    /// Topic -> bonus mastery added per session
    #[serde(default)]
    pub synergies: BTreeMap<String, f64>,
    /// Available study time in hours
    pub time: f64,
}

impl StudyPlan {
    /// Load and validate a plan from a JSON file.
    #[instrument(level = "debug")]
    pub fn load(path: &Path) -> Result<Self, PlanError> {
        if !path.exists() {
            return Err(PlanError::FileNotFound(path.to_path_buf()));
        }
        let content = fs::read_to_string(path).map_err(|source| PlanError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let plan: StudyPlan =
            serde_json::from_str(&content).map_err(|source| PlanError::InvalidFormat {
                path: path.to_path_buf(),
                source,
            })?;
        plan.validate()?;
        Ok(plan)
    }

    /// Every dependency must reference a topic present in `mastery_levels`.
    pub fn validate(&self) -> Result<(), PlanError> {
        for (topic, prerequisites) in &self.dependencies {
            if !self.mastery_levels.contains_key(topic) {
                return Err(PlanError::UnknownTopic(topic.clone()));
            }
            for prerequisite in prerequisites {
                if !self.mastery_levels.contains_key(prerequisite) {
                    return Err(PlanError::UnknownTopic(prerequisite.clone()));
                }
            }
        }
        Ok(())
    }
}

/// Topic mastery map plus remaining study time.
#[derive(Debug, Clone, PartialEq)]
pub struct StudyState {
    /// Topic -> mastery percentage
    pub mastery: BTreeMap<String, f64>,
    /// Hours left
    pub remaining_time: f64,
}

impl StudyState {
    pub fn new(mastery: BTreeMap<String, f64>, remaining_time: f64) -> Self {
        Self {
            mastery,
            remaining_time,
        }
    }
}

// Mastery values are sums of plan constants, never NaN, so bitwise
// equality and hashing agree with PartialEq.
impl Eq for StudyState {}

impl Hash for StudyState {
    fn hash<H: Hasher>(&self, state: &mut H) {
        for (topic, mastery) in &self.mastery {
            topic.hash(state);
            mastery.to_bits().hash(state);
        }
        self.remaining_time.to_bits().hash(state);
    }
}

impl fmt::Display for StudyState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (topic, mastery) in &self.mastery {
            writeln!(f, "{}: {}%", topic, mastery)?;
        }
        writeln!(f, "Time left: {} hours", self.remaining_time)
    }
}

/// Master every topic within the available time.
///
/// One action studies one topic for one hour: mastery rises by
/// [`SESSION_GAIN`] (capped at full) plus the topic's synergy bonus. Topics
/// whose prerequisites are not yet at full mastery are not offered.
#[derive(Debug)]
pub struct StudyProblem {
    initial: StudyState,
    dependencies: BTreeMap<String, Vec<String>>,
    synergies: BTreeMap<String, f64>,
}

impl StudyProblem {
    pub fn new(
        initial: StudyState,
        dependencies: BTreeMap<String, Vec<String>>,
        synergies: BTreeMap<String, f64>,
    ) -> Self {
        Self {
            initial,
            dependencies,
            synergies,
        }
    }

    fn prerequisites_met(&self, state: &StudyState, topic: &str) -> bool {
        self.dependencies
            .get(topic)
            .map(|prerequisites| {
                prerequisites.iter().all(|p| {
                    state
                        .mastery
                        .get(p)
                        .is_some_and(|&m| m >= FULL_MASTERY)
                })
            })
            .unwrap_or(true)
    }
}

impl From<StudyPlan> for StudyProblem {
    fn from(plan: StudyPlan) -> Self {
        let initial = StudyState::new(plan.mastery_levels, plan.time);
        Self::new(initial, plan.dependencies, plan.synergies)
    }
}

impl Problem for StudyProblem {
    type State = StudyState;

    fn initial_state(&self) -> StudyState {
        self.initial.clone()
    }

    fn is_goal(&self, state: &StudyState) -> bool {
        state.mastery.values().all(|&m| m >= FULL_MASTERY)
    }

    fn actions(&self, state: &StudyState) -> Vec<Action<StudyState>> {
        if state.remaining_time <= 0.0 {
            return Vec::new();
        }

        let mut actions = Vec::new();
        for (topic, &mastery) in &state.mastery {
            if mastery >= FULL_MASTERY || !self.prerequisites_met(state, topic) {
                continue;
            }

            let cost = 1.0; // one hour per session
            let gain = SESSION_GAIN.min(FULL_MASTERY - mastery);
            let bonus = self.synergies.get(topic).copied().unwrap_or(0.0);

            let mut new_mastery = state.mastery.clone();
            if let Some(level) = new_mastery.get_mut(topic) {
                *level += gain + bonus;
            }
            let effect = StudyState::new(new_mastery, state.remaining_time - cost);
            actions.push(Action::new(topic.clone(), cost, effect));
        }

        debug!(count = actions.len(), "study actions generated");
        actions
    }

    /// Total mastery gap divided by remaining time: the fewer hours left,
    /// the more urgent an unmastered topic looks.
    fn heuristic(&self, state: &StudyState) -> f64 {
        let total_gap: f64 = state
            .mastery
            .values()
            .map(|&m| (FULL_MASTERY - m).max(0.0))
            .sum();
        if total_gap <= 0.0 {
            0.0
        } else if state.remaining_time <= 0.0 {
            f64::INFINITY
        } else {
            total_gap / state.remaining_time
        }
    }
}
