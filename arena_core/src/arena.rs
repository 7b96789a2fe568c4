//! The Arena - two agents on a grid, one chasing new cells, one chasing collisions.
//!
//! Each step resolves agent2's move first (against agent1's pre-step cell),
//! then agent1's move (against agent2's updated cell). Rewards are derived
//! once from the union of both moves' events:
//!
//! | Event set                 | agent1 | agent2 |
//! |---------------------------|--------|--------|
//! | collision                 | -1.0   | +1.0   |
//! | agent1_new_field only     | +1.0   | -0.1   |
//! | none                      | -0.5   | -0.1   |

use crate::config::ArenaConfig;
use crate::grid::{GridDimensions, VisitedFields};
use crate::movement::{resolve_move, StepEvents};
use crate::observation;
use crate::render::ArenaSnapshot;

use arena_env::{Action, AgentId, AgentPair, ArenaError, Discrete, MultiDiscrete, Observation, Position};
use serde::{Deserialize, Serialize};

/// Agent1 reward when a collision occurred.
pub const AGENT1_COLLISION_REWARD: f64 = -1.0;
/// Agent1 reward for reaching an unvisited cell.
pub const AGENT1_NEW_FIELD_REWARD: f64 = 1.0;
/// Agent1 reward for revisiting a known cell.
pub const AGENT1_REVISIT_REWARD: f64 = -0.5;
/// Agent2 reward when a collision occurred.
pub const AGENT2_COLLISION_REWARD: f64 = 1.0;
/// Agent2 reward otherwise.
pub const AGENT2_IDLE_REWARD: f64 = -0.1;

/// Per-agent and aggregate episode termination flags.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dones {
    pub agent1: bool,
    pub agent2: bool,

    /// Episode is over for all agents
    #[serde(rename = "__all__")]
    pub all: bool,
}

impl Dones {
    fn uniform(done: bool) -> Self {
        Self {
            agent1: done,
            agent2: done,
            all: done,
        }
    }
}

/// Auxiliary per-step payload. Always empty.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepInfo {}

/// Everything a single `step` returns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StepResult {
    pub observations: AgentPair<Observation>,
    pub rewards: AgentPair<f64>,
    pub dones: Dones,
    pub info: StepInfo,
}

/// Maps a step's combined events to both agents' rewards.
pub fn rewards_for(events: StepEvents) -> AgentPair<f64> {
    let agent1 = if events.collision {
        AGENT1_COLLISION_REWARD
    } else if events.agent1_new_field {
        AGENT1_NEW_FIELD_REWARD
    } else {
        AGENT1_REVISIT_REWARD
    };
    let agent2 = if events.collision {
        AGENT2_COLLISION_REWARD
    } else {
        AGENT2_IDLE_REWARD
    };
    AgentPair::new(agent1, agent2)
}

/// The two-agent grid environment.
#[derive(Debug, Clone)]
pub struct Arena {
    /// Configuration
    config: ArenaConfig,

    /// Grid size (fixed for the arena's lifetime)
    dims: GridDimensions,

    /// Current cell of each agent
    positions: AgentPair<Position>,

    /// Cells agent1 has covered this episode
    visited: VisitedFields,

    /// Steps taken this episode
    timesteps: u64,

    /// Whether the most recent step had a collision
    collision: bool,

    /// Collisions this episode
    num_collisions: u64,

    /// Accumulated rewards this episode
    returns: AgentPair<f64>,
}

impl Arena {
    /// Creates an arena and resets it, so it is immediately ready to step.
    pub fn new(config: ArenaConfig) -> Result<Self, ArenaError> {
        config.validate()?;
        let dims = GridDimensions::new(config.width, config.height);

        let mut arena = Self {
            config,
            dims,
            positions: AgentPair::new(Position::new(0, 0), dims.bottom_right()),
            visited: VisitedFields::new(dims),
            timesteps: 0,
            collision: false,
            num_collisions: 0,
            returns: AgentPair::splat(0.0),
        };
        arena.reset();
        Ok(arena)
    }

    /// Starts a new episode and returns its initial observations.
    ///
    /// Agent1 starts in the upper-left corner, agent2 in the lower-right.
    pub fn reset(&mut self) -> AgentPair<Observation> {
        self.positions = AgentPair::new(Position::new(0, 0), self.dims.bottom_right());
        self.visited.reset_to(self.positions.agent1);
        self.timesteps = 0;
        self.collision = false;
        self.num_collisions = 0;
        self.returns = AgentPair::splat(0.0);

        self.observations()
    }

    /// Advances the episode by one step.
    ///
    /// Stepping past the limit is allowed; `dones` stays true.
    pub fn step(&mut self, actions: AgentPair<Action>) -> StepResult {
        self.timesteps += 1;
        let is_done = self.timesteps >= self.config.timestep_limit;

        let mut events = StepEvents::default();

        // Agent2 always moves first.
        let agent1_before = self.positions.agent1;
        events.record(resolve_move(
            self.dims,
            &mut self.positions.agent2,
            AgentId::Agent2,
            actions.agent2,
            agent1_before,
            &mut self.visited,
        ));

        let agent2_after = self.positions.agent2;
        events.record(resolve_move(
            self.dims,
            &mut self.positions.agent1,
            AgentId::Agent1,
            actions.agent1,
            agent2_after,
            &mut self.visited,
        ));

        let rewards = rewards_for(events);

        self.returns.agent1 += rewards.agent1;
        self.returns.agent2 += rewards.agent2;
        self.collision = events.collision;
        if self.collision {
            self.num_collisions += 1;
        }

        StepResult {
            observations: self.observations(),
            rewards,
            dones: Dones::uniform(is_done),
            info: StepInfo::default(),
        }
    }

    /// Advances the episode from string-keyed actions (`"agent1"`, `"agent2"`).
    ///
    /// Fails without touching any state if an agent is missing, duplicated or
    /// unknown.
    pub fn step_dict<K, I>(&mut self, entries: I) -> Result<StepResult, ArenaError>
    where
        K: AsRef<str>,
        I: IntoIterator<Item = (K, Action)>,
    {
        let actions = AgentPair::from_entries(entries)?;
        Ok(self.step(actions))
    }

    /// Current observations of both agents.
    pub fn observations(&self) -> AgentPair<Observation> {
        observation::encode(self.dims, &self.positions)
    }

    /// Each agent picks one of four moves.
    pub fn action_space(&self) -> AgentPair<Discrete> {
        AgentPair::splat(Discrete::new(Action::ALL.len()))
    }

    /// Each agent sees two cell codes over `[0, width * height)`.
    pub fn observation_space(&self) -> AgentPair<MultiDiscrete> {
        let size = self.dims.cell_count();
        AgentPair::splat(MultiDiscrete::new(vec![size, size]))
    }

    /// Read-only view for renderers and exporters.
    pub fn snapshot(&self) -> ArenaSnapshot<'_> {
        ArenaSnapshot {
            dims: self.dims,
            positions: self.positions,
            visited: &self.visited,
            returns: self.returns,
            collision: self.collision,
            num_collisions: self.num_collisions,
            timesteps: self.timesteps,
        }
    }

    pub fn config(&self) -> &ArenaConfig {
        &self.config
    }

    pub fn dims(&self) -> GridDimensions {
        self.dims
    }

    pub fn positions(&self) -> AgentPair<Position> {
        self.positions
    }

    pub fn visited_fields(&self) -> &VisitedFields {
        &self.visited
    }

    pub fn timesteps(&self) -> u64 {
        self.timesteps
    }

    pub fn collision(&self) -> bool {
        self.collision
    }

    pub fn num_collisions(&self) -> u64 {
        self.num_collisions
    }

    /// Accumulated rewards this episode.
    pub fn returns(&self) -> AgentPair<f64> {
        self.returns
    }
}
