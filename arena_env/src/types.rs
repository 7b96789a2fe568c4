//! Common types shared by the arena and its drivers.

use crate::error::ArenaError;
use serde::{Deserialize, Serialize};

/// Identity of one of the two arena agents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AgentId {
    Agent1,
    Agent2,
}

impl AgentId {
    /// Returns the key used for this agent in dictionary-style input.
    pub fn name(&self) -> &'static str {
        match self {
            AgentId::Agent1 => "agent1",
            AgentId::Agent2 => "agent2",
        }
    }
}

impl std::fmt::Display for AgentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl std::str::FromStr for AgentId {
    type Err = ArenaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "agent1" => Ok(AgentId::Agent1),
            "agent2" => Ok(AgentId::Agent2),
            _ => Err(ArenaError::invalid_input(format!("Unknown agent: {}", s))),
        }
    }
}

/// A single-cell move on the grid.
///
/// Discriminants match the discrete action indices `0=up, 1=right, 2=down, 3=left`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    Up = 0,
    Right = 1,
    Down = 2,
    Left = 3,
}

impl Action {
    /// All actions in index order.
    pub const ALL: [Action; 4] = [Action::Up, Action::Right, Action::Down, Action::Left];

    /// Returns the action for a discrete index.
    pub fn from_index(index: usize) -> Result<Self, ArenaError> {
        Self::ALL.get(index).copied().ok_or_else(|| {
            ArenaError::invalid_input(format!("Action index {} out of range [0, 4)", index))
        })
    }

    /// Returns the discrete index of this action.
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Row/column delta. Each action moves along exactly one axis.
    #[inline]
    pub fn delta(&self) -> (isize, isize) {
        match self {
            Action::Up => (-1, 0),
            Action::Right => (0, 1),
            Action::Down => (1, 0),
            Action::Left => (0, -1),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Action::Up => "up",
            Action::Right => "right",
            Action::Down => "down",
            Action::Left => "left",
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl std::str::FromStr for Action {
    type Err = ArenaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "up" | "0" => Ok(Action::Up),
            "right" | "1" => Ok(Action::Right),
            "down" | "2" => Ok(Action::Down),
            "left" | "3" => Ok(Action::Left),
            _ => Err(ArenaError::invalid_input(format!("Unknown action: {}", s))),
        }
    }
}

/// A grid cell as (row, column), row-major.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {}]", self.row, self.col)
    }
}

/// Per-agent observation: `[own code, other agent's code]`.
pub type Observation = [usize; 2];

/// A value for each of the two agents.
///
/// Replaces string-keyed per-agent dictionaries: both slots always exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AgentPair<T> {
    pub agent1: T,
    pub agent2: T,
}

impl<T> AgentPair<T> {
    pub fn new(agent1: T, agent2: T) -> Self {
        Self { agent1, agent2 }
    }

    /// Builds a pair from string-keyed entries.
    ///
    /// Exactly one entry per agent is required; missing, duplicate or unknown
    /// keys are rejected.
    pub fn from_entries<K, I>(entries: I) -> Result<Self, ArenaError>
    where
        K: AsRef<str>,
        I: IntoIterator<Item = (K, T)>,
    {
        let mut agent1 = None;
        let mut agent2 = None;

        for (key, value) in entries {
            let slot = match key.as_ref().parse::<AgentId>()? {
                AgentId::Agent1 => &mut agent1,
                AgentId::Agent2 => &mut agent2,
            };
            if slot.replace(value).is_some() {
                return Err(ArenaError::invalid_input(format!(
                    "Duplicate entry for {}",
                    key.as_ref()
                )));
            }
        }

        match (agent1, agent2) {
            (Some(agent1), Some(agent2)) => Ok(Self { agent1, agent2 }),
            (None, _) => Err(ArenaError::invalid_input("Missing entry for agent1")),
            (_, None) => Err(ArenaError::invalid_input("Missing entry for agent2")),
        }
    }

    pub fn get(&self, agent: AgentId) -> &T {
        match agent {
            AgentId::Agent1 => &self.agent1,
            AgentId::Agent2 => &self.agent2,
        }
    }

    pub fn get_mut(&mut self, agent: AgentId) -> &mut T {
        match agent {
            AgentId::Agent1 => &mut self.agent1,
            AgentId::Agent2 => &mut self.agent2,
        }
    }

    /// Applies `f` to each slot, agent1 first.
    pub fn map<U>(self, mut f: impl FnMut(AgentId, T) -> U) -> AgentPair<U> {
        AgentPair {
            agent1: f(AgentId::Agent1, self.agent1),
            agent2: f(AgentId::Agent2, self.agent2),
        }
    }
}

impl<T: Clone> AgentPair<T> {
    /// Same value in both slots.
    pub fn splat(value: T) -> Self {
        Self {
            agent1: value.clone(),
            agent2: value,
        }
    }
}
