//! Action and observation space metadata.
//!
//! Spaces describe the shape of what a policy may send to the arena and what
//! it gets back. The arena itself never consults them.

use crate::error::ArenaError;
use crate::types::{Action, Observation};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// A single discrete choice over `[0, n)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Discrete {
    pub n: usize,
}

impl Discrete {
    pub fn new(n: usize) -> Self {
        Self { n }
    }

    pub fn contains(&self, value: usize) -> bool {
        value < self.n
    }

    /// Draws a uniform sample.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> usize {
        rng.gen_range(0..self.n)
    }

    /// Draws a uniform sample and maps it onto an [`Action`].
    ///
    /// Fails unless the space is the 4-way movement space.
    pub fn sample_action<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Action, ArenaError> {
        if self.n != Action::ALL.len() {
            return Err(ArenaError::invalid_input(format!(
                "Space of size {} is not an action space",
                self.n
            )));
        }
        Action::from_index(self.sample(rng))
    }
}

/// Several independent discrete choices, each over `[0, nvec[i])`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MultiDiscrete {
    pub nvec: Vec<usize>,
}

impl MultiDiscrete {
    pub fn new(nvec: Vec<usize>) -> Self {
        Self { nvec }
    }

    pub fn contains(&self, values: &[usize]) -> bool {
        values.len() == self.nvec.len()
            && values.iter().zip(&self.nvec).all(|(v, n)| v < n)
    }

    /// Returns true if the observation fits this space.
    pub fn contains_observation(&self, obs: &Observation) -> bool {
        self.contains(obs)
    }

    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<usize> {
        self.nvec.iter().map(|&n| rng.gen_range(0..n)).collect()
    }
}
