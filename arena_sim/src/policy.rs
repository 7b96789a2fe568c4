//! Action sources for the episode driver.

use arena_env::{Action, AgentId, AgentPair, ArenaError, Discrete, Observation};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Maps an agent's observation to its next action.
pub trait Policy {
    fn compute_action(&mut self, agent: AgentId, obs: &Observation) -> Result<Action, ArenaError>;

    /// Computes actions for both agents (agent1 first).
    fn compute_actions(
        &mut self,
        obs: &AgentPair<Observation>,
    ) -> Result<AgentPair<Action>, ArenaError> {
        let actions = obs.map(|agent, o| self.compute_action(agent, &o));
        Ok(AgentPair::new(actions.agent1?, actions.agent2?))
    }
}

/// Samples uniformly from each agent's action space.
pub struct RandomPolicy {
    spaces: AgentPair<Discrete>,
    rng: ChaCha8Rng,
}

impl RandomPolicy {
    /// Creates a sampler over the given action spaces with a fixed seed.
    pub fn new(spaces: AgentPair<Discrete>, seed: u64) -> Self {
        Self {
            spaces,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

impl Policy for RandomPolicy {
    fn compute_action(&mut self, agent: AgentId, _obs: &Observation) -> Result<Action, ArenaError> {
        self.spaces.get(agent).sample_action(&mut self.rng)
    }
}

/// Replays fixed per-agent action sequences, wrapping around at the end.
#[derive(Debug, Clone)]
pub struct ScriptedPolicy {
    scripts: AgentPair<Vec<Action>>,
    cursors: AgentPair<usize>,
}

impl ScriptedPolicy {
    pub fn new(agent1: Vec<Action>, agent2: Vec<Action>) -> Result<Self, ArenaError> {
        for (agent, script) in [(AgentId::Agent1, &agent1), (AgentId::Agent2, &agent2)] {
            if script.is_empty() {
                return Err(ArenaError::invalid_input(format!("Empty script for {}", agent)));
            }
        }
        Ok(Self {
            scripts: AgentPair::new(agent1, agent2),
            cursors: AgentPair::default(),
        })
    }
}

impl Policy for ScriptedPolicy {
    fn compute_action(&mut self, agent: AgentId, _obs: &Observation) -> Result<Action, ArenaError> {
        let script = self.scripts.get(agent);
        let cursor = self.cursors.get_mut(agent);
        let action = script[*cursor % script.len()];
        *cursor += 1;
        Ok(action)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_policy_reproducible() {
        let spaces = AgentPair::splat(Discrete::new(4));
        let mut a = RandomPolicy::new(spaces, 9);
        let mut b = RandomPolicy::new(spaces, 9);
        let obs = AgentPair::splat([0, 0]);

        for _ in 0..32 {
            assert_eq!(a.compute_actions(&obs).unwrap(), b.compute_actions(&obs).unwrap());
        }
    }

    #[test]
    fn test_random_policy_rejects_foreign_space() {
        let mut policy = RandomPolicy::new(AgentPair::splat(Discrete::new(2)), 1);
        assert!(policy.compute_action(AgentId::Agent1, &[0, 0]).is_err());
    }

    #[test]
    fn test_scripted_policy_cycles() {
        let mut policy =
            ScriptedPolicy::new(vec![Action::Right, Action::Down], vec![Action::Left]).unwrap();
        let obs = AgentPair::splat([0, 0]);

        let seen: Vec<AgentPair<Action>> =
            (0..3).map(|_| policy.compute_actions(&obs).unwrap()).collect();
        assert_eq!(seen[0], AgentPair::new(Action::Right, Action::Left));
        assert_eq!(seen[1], AgentPair::new(Action::Down, Action::Left));
        assert_eq!(seen[2], AgentPair::new(Action::Right, Action::Left));
    }

    #[test]
    fn test_scripted_policy_empty_script() {
        assert!(ScriptedPolicy::new(vec![], vec![Action::Up]).is_err());
    }
}
