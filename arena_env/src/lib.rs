//! Multi-Agent Arena shared vocabulary
//!
//! Types that both the arena state machine and its drivers speak:
//! - **Agents**: exactly two, addressed through the fixed-slot [`AgentPair`]
//! - **Actions**: the 4-way movement choice `0=up, 1=right, 2=down, 3=left`
//! - **Spaces**: action/observation metadata for policies
//! - **Errors**: contract violations surface as [`ArenaError`]
//!
//! # Example
//!
//! ```
//! use arena_env::{Action, AgentPair};
//!
//! let actions = AgentPair::from_entries([("agent1", Action::Right), ("agent2", Action::Left)])
//!     .unwrap();
//! assert_eq!(actions.agent1, Action::Right);
//! ```

mod error;
mod spaces;
mod types;

pub use error::ArenaError;
pub use spaces::{Discrete, MultiDiscrete};
pub use types::{Action, AgentId, AgentPair, Observation, Position};
