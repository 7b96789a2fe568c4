//! Multi-Agent Arena Core - a two-agent grid world
//!
//! Agent1 is rewarded for exploring cells it has not visited this episode;
//! agent2 is rewarded for running into agent1. The crate provides:
//! 1. **Arena**: the episode state machine (`reset` / `step`)
//! 2. **Movement**: collision-first, then wall-clamped moves
//! 3. **Observations**: row-major cell codes, self first
//! 4. **Rendering**: text frames from read-only snapshots

pub mod arena;
pub mod config;
pub mod grid;
pub mod movement;
pub mod observation;
pub mod render;

// Re-export key types for convenience
pub use arena::{Arena, Dones, StepInfo, StepResult};
pub use config::{ArenaConfig, MAX_CELLS};
pub use grid::{GridDimensions, VisitedFields};
pub use movement::{MoveEvent, StepEvents};
pub use render::{ArenaSnapshot, FrameRecorder, NoopRenderer, Renderer, WriterRenderer};
