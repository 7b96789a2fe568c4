//! Episode runner - drives the arena with a policy until the episode ends.

use crate::error::SimError;
use crate::exporter::StepFrame;
use crate::policy::{Policy, RandomPolicy};

use arena_core::{Arena, ArenaConfig, Renderer};
use arena_env::AgentPair;
use tracing::{debug, info};

/// Results from running one episode.
#[derive(Debug, Clone)]
pub struct EpisodeResult {
    /// Seed the policy was created with
    pub seed: u64,

    /// Steps taken until done
    pub timesteps: u64,

    /// Accumulated rewards per agent
    pub returns: AgentPair<f64>,

    /// Collisions during the episode
    pub num_collisions: u64,

    /// Distinct cells agent1 covered (start cell included)
    pub visited_fields: usize,

    /// Per-step frames, empty unless recording was requested
    pub frames: Vec<StepFrame>,
}

/// Plays a single episode: reset, then step until agent1 is done.
///
/// The renderer sees the reset state and every stepped state.
pub fn play_one_episode<P, R>(
    arena: &mut Arena,
    policy: &mut P,
    renderer: &mut R,
    seed: u64,
    record_frames: bool,
) -> Result<EpisodeResult, SimError>
where
    P: Policy + ?Sized,
    R: Renderer + ?Sized,
{
    let mut obs = arena.reset();
    renderer.render(&arena.snapshot())?;

    let mut frames = Vec::new();
    loop {
        let actions = policy.compute_actions(&obs)?;
        let result = arena.step(actions);
        renderer.render(&arena.snapshot())?;

        debug!(
            "  t={} | a1={} a2={} | r1={:+.1} r2={:+.1}{}",
            arena.timesteps(),
            actions.agent1,
            actions.agent2,
            result.rewards.agent1,
            result.rewards.agent2,
            if arena.collision() { " | collision" } else { "" }
        );

        if record_frames {
            frames.push(StepFrame {
                timestep: arena.timesteps(),
                actions,
                positions: arena.positions(),
                rewards: result.rewards,
                collision: arena.collision(),
            });
        }

        obs = result.observations;
        if result.dones.agent1 {
            break;
        }
    }

    Ok(EpisodeResult {
        seed,
        timesteps: arena.timesteps(),
        returns: arena.returns(),
        num_collisions: arena.num_collisions(),
        visited_fields: arena.visited_fields().len(),
        frames,
    })
}

/// Plays episodes on one arena, with a caller-supplied or random policy.
pub struct EpisodeRunner {
    /// Arena reused across episodes
    arena: Arena,

    /// Base seed; episode `i` uses `seed + i`
    seed: u64,

    /// Keep per-step frames in results
    record_frames: bool,

    /// Episodes finished so far
    episodes_played: u64,
}

impl EpisodeRunner {
    /// Creates a new episode runner.
    pub fn new(config: ArenaConfig, seed: u64) -> Result<Self, SimError> {
        Ok(Self {
            arena: Arena::new(config)?,
            seed,
            record_frames: false,
            episodes_played: 0,
        })
    }

    /// Enables per-step frame recording.
    pub fn with_frames(mut self, record: bool) -> Self {
        self.record_frames = record;
        self
    }

    pub fn config(&self) -> &ArenaConfig {
        self.arena.config()
    }

    pub fn episodes_played(&self) -> u64 {
        self.episodes_played
    }

    /// Seed of the next episode to be played.
    pub fn next_seed(&self) -> u64 {
        self.seed.wrapping_add(self.episodes_played)
    }

    /// Plays one episode with the given policy.
    pub fn run_episode<P, R>(&mut self, policy: &mut P, renderer: &mut R) -> Result<EpisodeResult, SimError>
    where
        P: Policy + ?Sized,
        R: Renderer + ?Sized,
    {
        let episode = self.episodes_played;
        let seed = self.next_seed();
        let result = play_one_episode(&mut self.arena, policy, renderer, seed, self.record_frames)?;
        self.episodes_played += 1;

        info!(
            "Episode {} (seed={}): R1={:.1} R2={:.1} | {} collisions | {} fields visited",
            episode,
            seed,
            result.returns.agent1,
            result.returns.agent2,
            result.num_collisions,
            result.visited_fields
        );
        Ok(result)
    }

    /// Plays `episodes` random-policy episodes and returns their results in order.
    pub fn run<R: Renderer + ?Sized>(
        &mut self,
        episodes: usize,
        renderer: &mut R,
    ) -> Result<Vec<EpisodeResult>, SimError> {
        let mut results = Vec::with_capacity(episodes);
        for _ in 0..episodes {
            let mut policy = RandomPolicy::new(self.arena.action_space(), self.next_seed());
            results.push(self.run_episode(&mut policy, renderer)?);
        }
        Ok(results)
    }
}
