//! Text rendering of arena state.
//!
//! Renderers only ever see an [`ArenaSnapshot`]; the arena does not know
//! whether anyone is watching.
//!
//! ```text
//! ____
//! |1.|
//! | 2|
//! ‾‾‾‾
//!
//! R1= 0.5
//! R2=-0.2 (0 collisions)
//! ```

use crate::grid::{GridDimensions, VisitedFields};
use arena_env::{AgentPair, Position};
use std::fmt::Write as _;
use std::io::{self, Write};
use std::time::Duration;

/// Read-only view of an arena's state.
#[derive(Debug, Clone, Copy)]
pub struct ArenaSnapshot<'a> {
    pub dims: GridDimensions,
    pub positions: AgentPair<Position>,
    pub visited: &'a VisitedFields,
    pub returns: AgentPair<f64>,
    pub collision: bool,
    pub num_collisions: u64,
    pub timesteps: u64,
}

/// Something that can depict an arena frame.
pub trait Renderer {
    fn render(&mut self, snapshot: &ArenaSnapshot<'_>) -> io::Result<()>;
}

/// Formats with an explicit leading space for non-negative values.
fn signed(value: f64) -> String {
    if value.is_sign_negative() {
        format!("{:.1}", value)
    } else {
        format!(" {:.1}", value)
    }
}

/// Renders a full frame as text.
pub fn render_to_string(snapshot: &ArenaSnapshot<'_>) -> String {
    let width = snapshot.dims.width;
    let mut out = String::new();

    out.push_str(&"_".repeat(width + 2));
    out.push('\n');
    for row in 0..snapshot.dims.height {
        out.push('|');
        for col in 0..width {
            let cell = Position::new(row, col);
            let glyph = if snapshot.positions.agent1 == cell {
                '1'
            } else if snapshot.positions.agent2 == cell {
                '2'
            } else if snapshot.visited.contains(cell) {
                '.'
            } else {
                ' '
            };
            out.push(glyph);
        }
        out.push_str("|\n");
    }
    out.push_str(&"‾".repeat(width + 2));
    out.push('\n');

    // Writing into a String cannot fail.
    let _ = writeln!(out, "{}", if snapshot.collision { "!!Collision!!" } else { "" });
    let _ = writeln!(out, "R1={}", signed(snapshot.returns.agent1));
    let _ = writeln!(
        out,
        "R2={} ({} collisions)",
        signed(snapshot.returns.agent2),
        snapshot.num_collisions
    );
    let _ = writeln!(out, "Agent1's x/y position={}", snapshot.positions.agent1);
    let _ = writeln!(out, "Agent2's x/y position={}", snapshot.positions.agent2);
    let _ = writeln!(out, "Env timesteps={}", snapshot.timesteps);
    out
}

/// Writes text frames to any writer, optionally pausing after each one.
pub struct WriterRenderer<W: Write> {
    out: W,
    delay: Duration,
}

impl<W: Write> WriterRenderer<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            delay: Duration::ZERO,
        }
    }

    /// Sets the pause between frames.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl WriterRenderer<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> Renderer for WriterRenderer<W> {
    fn render(&mut self, snapshot: &ArenaSnapshot<'_>) -> io::Result<()> {
        writeln!(self.out, "{}", render_to_string(snapshot))?;
        self.out.flush()?;
        if !self.delay.is_zero() {
            std::thread::sleep(self.delay);
        }
        Ok(())
    }
}

/// Renders nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopRenderer;

impl Renderer for NoopRenderer {
    fn render(&mut self, _snapshot: &ArenaSnapshot<'_>) -> io::Result<()> {
        Ok(())
    }
}

/// Keeps every rendered frame in memory.
#[derive(Debug, Default)]
pub struct FrameRecorder {
    pub frames: Vec<String>,
}

impl Renderer for FrameRecorder {
    fn render(&mut self, snapshot: &ArenaSnapshot<'_>) -> io::Result<()> {
        self.frames.push(render_to_string(snapshot));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Arena, ArenaConfig};
    use arena_env::Action;

    #[test]
    fn test_render_initial_board() {
        let arena = Arena::new(ArenaConfig::default().with_size(3, 2)).unwrap();
        let frame = render_to_string(&arena.snapshot());
        let lines: Vec<&str> = frame.lines().collect();

        assert_eq!(lines[0], "_____");
        assert_eq!(lines[1], "|1  |");
        assert_eq!(lines[2], "|  2|");
        assert_eq!(lines[3], "‾‾‾‾‾");
        assert_eq!(lines[4], "");
        assert_eq!(lines[5], "R1= 0.0");
        assert_eq!(lines[6], "R2= 0.0 (0 collisions)");
        assert_eq!(lines[7], "Agent1's x/y position=[0, 0]");
        assert_eq!(lines[8], "Agent2's x/y position=[1, 2]");
        assert_eq!(lines[9], "Env timesteps=0");
    }

    #[test]
    fn test_render_trail_and_collision() {
        let mut arena = Arena::new(ArenaConfig::default().with_size(3, 1)).unwrap();
        arena.step(AgentPair::new(Action::Right, Action::Left));

        let frame = render_to_string(&arena.snapshot());
        let lines: Vec<&str> = frame.lines().collect();
        assert_eq!(lines[1], "|12 |");
        assert_eq!(lines[3], "!!Collision!!");
        assert_eq!(lines[4], "R1=-1.0");
        assert_eq!(lines[5], "R2= 1.0 (1 collisions)");
    }

    #[test]
    fn test_writer_renderer_writes_frames() {
        let arena = Arena::new(ArenaConfig::default().with_size(2, 2)).unwrap();
        let mut renderer = WriterRenderer::new(Vec::new());
        renderer.render(&arena.snapshot()).unwrap();
        renderer.render(&arena.snapshot()).unwrap();

        let text = String::from_utf8(renderer.into_inner()).unwrap();
        assert_eq!(text.matches("Env timesteps=0").count(), 2);
    }

    #[test]
    fn test_visited_cells_drawn() {
        let mut arena = Arena::new(ArenaConfig::default().with_size(3, 3)).unwrap();
        arena.step(AgentPair::new(Action::Right, Action::Up));

        let mut recorder = FrameRecorder::default();
        recorder.render(&arena.snapshot()).unwrap();
        assert!(recorder.frames[0].starts_with("_____\n|.1 |\n"));
    }
}
