//! Multi-Agent Arena episode driver
//!
//! Plays episodes of the two-agent arena with pluggable policies:
//! - **Policies**: seeded random sampling or scripted replays
//! - **Runner**: reset, step until done, optional rendering between steps
//! - **Export**: per-step frames as JSON for offline inspection
//!
//! # Usage
//!
//! ```
//! use arena_core::{ArenaConfig, NoopRenderer};
//! use arena_sim::EpisodeRunner;
//!
//! let config = ArenaConfig::default().with_timestep_limit(10);
//! let mut runner = EpisodeRunner::new(config, 42).unwrap();
//! let results = runner.run(1, &mut NoopRenderer).unwrap();
//! assert_eq!(results[0].timesteps, 10);
//! ```

mod error;
mod exporter;
mod policy;
mod runner;

pub use error::SimError;
pub use exporter::{EpisodeExport, EpisodeSummary, RunSummary, StepFrame};
pub use policy::{Policy, RandomPolicy, ScriptedPolicy};
pub use runner::{play_one_episode, EpisodeResult, EpisodeRunner};
