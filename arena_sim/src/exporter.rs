//! JSON exporter for episode replays.

use crate::error::SimError;
use crate::runner::EpisodeResult;

use arena_core::ArenaConfig;
use arena_env::{Action, AgentPair, Position};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Write;

/// A single step of an episode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StepFrame {
    /// Timestep after the step was applied
    pub timestep: u64,

    /// Actions both agents submitted
    pub actions: AgentPair<Action>,

    /// Positions after the step
    pub positions: AgentPair<Position>,

    /// Rewards for this step
    pub rewards: AgentPair<f64>,

    /// Whether the step had a collision
    pub collision: bool,
}

/// Complete episode export.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EpisodeExport {
    /// Arena configuration
    pub config: ArenaConfig,

    /// Seed used for the policy
    pub seed: u64,

    pub timesteps: u64,
    pub returns: AgentPair<f64>,
    pub num_collisions: u64,
    pub visited_fields: usize,

    /// All frames
    pub frames: Vec<StepFrame>,
}

impl EpisodeExport {
    /// Builds an export from a finished episode.
    pub fn new(config: &ArenaConfig, result: &EpisodeResult) -> Self {
        Self {
            config: config.clone(),
            seed: result.seed,
            timesteps: result.timesteps,
            returns: result.returns,
            num_collisions: result.num_collisions,
            visited_fields: result.visited_fields,
            frames: result.frames.clone(),
        }
    }

    pub fn to_json(&self) -> Result<String, SimError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Writes to a JSON file.
    pub fn write_to_file(&self, path: &str) -> Result<(), SimError> {
        let json = self.to_json()?;
        let mut file = File::create(path)?;
        file.write_all(json.as_bytes())?;
        Ok(())
    }
}

/// One line of the run summary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EpisodeSummary {
    pub seed: u64,
    pub timesteps: u64,
    pub return_agent1: f64,
    pub return_agent2: f64,
    pub collisions: u64,
    pub visited_fields: usize,
}

/// Aggregate over a batch of episodes, printed by `--json`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunSummary {
    pub episodes: usize,
    pub mean_return_agent1: f64,
    pub mean_return_agent2: f64,
    pub total_collisions: u64,
    pub results: Vec<EpisodeSummary>,
}

impl RunSummary {
    pub fn from_results(results: &[EpisodeResult]) -> Self {
        let count = results.len().max(1) as f64;
        Self {
            episodes: results.len(),
            mean_return_agent1: results.iter().map(|r| r.returns.agent1).sum::<f64>() / count,
            mean_return_agent2: results.iter().map(|r| r.returns.agent2).sum::<f64>() / count,
            total_collisions: results.iter().map(|r| r.num_collisions).sum(),
            results: results
                .iter()
                .map(|r| EpisodeSummary {
                    seed: r.seed,
                    timesteps: r.timesteps,
                    return_agent1: r.returns.agent1,
                    return_agent2: r.returns.agent2,
                    collisions: r.num_collisions,
                    visited_fields: r.visited_fields,
                })
                .collect(),
        }
    }

    pub fn to_json(&self) -> Result<String, SimError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::policy::ScriptedPolicy;
    use crate::runner::{play_one_episode, EpisodeRunner};
    use arena_core::{Arena, NoopRenderer};

    #[test]
    fn test_export_json_shape() {
        let config = ArenaConfig::default().with_size(3, 3).with_timestep_limit(2);
        let mut arena = Arena::new(config.clone()).unwrap();
        let mut policy = ScriptedPolicy::new(vec![Action::Right], vec![Action::Left]).unwrap();
        let result = play_one_episode(&mut arena, &mut policy, &mut NoopRenderer, 5, true).unwrap();

        let export = EpisodeExport::new(&config, &result);
        let value: serde_json::Value = serde_json::from_str(&export.to_json().unwrap()).unwrap();

        assert_eq!(value["seed"], 5);
        assert_eq!(value["config"]["width"], 3);
        assert_eq!(value["frames"].as_array().unwrap().len(), 2);
        assert_eq!(value["frames"][0]["actions"]["agent1"], "right");
        assert_eq!(value["frames"][0]["positions"]["agent2"]["col"], 1);
    }

    #[test]
    fn test_run_summary_is_parseable_json() {
        let config = ArenaConfig::default().with_timestep_limit(5);
        let results = EpisodeRunner::new(config, 42)
            .unwrap()
            .run(2, &mut NoopRenderer)
            .unwrap();

        let text = RunSummary::from_results(&results).to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();

        assert_eq!(value["episodes"], 2);
        assert_eq!(value["results"][1]["seed"], 43);
        assert_eq!(value["results"][0]["timesteps"], 5);
        let mean = value["mean_return_agent1"].as_f64().unwrap();
        let expected = (results[0].returns.agent1 + results[1].returns.agent1) / 2.0;
        assert!((mean - expected).abs() < 1e-9);
    }

    #[test]
    fn test_run_summary_empty() {
        let summary = RunSummary::from_results(&[]);
        assert_eq!(summary.episodes, 0);
        assert_eq!(summary.mean_return_agent1, 0.0);
    }
}
