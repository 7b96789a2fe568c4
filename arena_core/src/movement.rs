//! Movement resolver.
//!
//! Applies one agent's action against the grid and the other agent's current
//! cell. Order of checks:
//! 1. Candidate cell from the action delta
//! 2. Collision with the other agent (blocks the move, skips everything else)
//! 3. Wall clamping per axis
//! 4. Visited-field bookkeeping (agent1 only)

use crate::grid::{GridDimensions, VisitedFields};
use arena_env::{Action, AgentId, Position};
use serde::{Deserialize, Serialize};

/// Event produced by a single resolved move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MoveEvent {
    /// The mover tried to enter the other agent's cell and was blocked.
    Collision,
    /// Agent1 landed on a cell it had not visited this episode.
    Agent1NewField,
}

/// Union of the events produced by both moves of a step.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepEvents {
    pub collision: bool,
    pub agent1_new_field: bool,
}

impl StepEvents {
    pub fn record(&mut self, event: Option<MoveEvent>) {
        match event {
            Some(MoveEvent::Collision) => self.collision = true,
            Some(MoveEvent::Agent1NewField) => self.agent1_new_field = true,
            None => {}
        }
    }
}

/// Resolves one agent's move in place and returns the event it produced.
///
/// `other` must be the other agent's position at the time this move is
/// resolved (already updated if the other agent moved first).
pub fn resolve_move(
    dims: GridDimensions,
    mover: &mut Position,
    mover_id: AgentId,
    action: Action,
    other: Position,
    visited: &mut VisitedFields,
) -> Option<MoveEvent> {
    let (dr, dc) = action.delta();
    let row = mover.row as isize + dr;
    let col = mover.col as isize + dc;

    // Blocked by the other agent: stay put, no clamping, no bookkeeping.
    if row == other.row as isize && col == other.col as isize {
        return Some(MoveEvent::Collision);
    }

    *mover = dims.clamp(row, col);

    if mover_id == AgentId::Agent1 && visited.insert(*mover) {
        return Some(MoveEvent::Agent1NewField);
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup(width: usize, height: usize) -> (GridDimensions, VisitedFields) {
        let dims = GridDimensions::new(width, height);
        let mut visited = VisitedFields::new(dims);
        visited.reset_to(Position::new(0, 0));
        (dims, visited)
    }

    #[test]
    fn test_edges_clamp_outward_moves() {
        let (dims, mut visited) = setup(3, 3);
        let far = Position::new(1, 1);
        let cases = [
            (Position::new(0, 1), Action::Up),
            (Position::new(2, 1), Action::Down),
            (Position::new(1, 0), Action::Left),
            (Position::new(1, 2), Action::Right),
        ];

        for (start, action) in cases {
            let mut pos = start;
            let event = resolve_move(dims, &mut pos, AgentId::Agent2, action, far, &mut visited);
            assert_eq!(pos, start, "{} from {} should be clamped", action, start);
            assert_eq!(event, None);
        }
    }

    #[test]
    fn test_collision_blocks_move() {
        let (dims, mut visited) = setup(3, 3);
        let mut pos = Position::new(0, 0);
        let event = resolve_move(
            dims,
            &mut pos,
            AgentId::Agent1,
            Action::Right,
            Position::new(0, 1),
            &mut visited,
        );

        assert_eq!(event, Some(MoveEvent::Collision));
        assert_eq!(pos, Position::new(0, 0));
        assert!(!visited.contains(Position::new(0, 1)));
    }

    #[test]
    fn test_out_of_grid_candidate_is_not_a_collision() {
        // Clamping would land on the mover's own cell, never on the other agent.
        let (dims, mut visited) = setup(2, 1);
        let mut pos = Position::new(0, 0);
        let event = resolve_move(
            dims,
            &mut pos,
            AgentId::Agent1,
            Action::Up,
            Position::new(0, 1),
            &mut visited,
        );
        assert_eq!(event, None);
        assert_eq!(pos, Position::new(0, 0));
    }

    #[test]
    fn test_agent1_new_field_once() {
        let (dims, mut visited) = setup(3, 3);
        let other = Position::new(2, 2);
        let mut pos = Position::new(0, 0);

        let first = resolve_move(dims, &mut pos, AgentId::Agent1, Action::Down, other, &mut visited);
        assert_eq!(first, Some(MoveEvent::Agent1NewField));
        assert_eq!(pos, Position::new(1, 0));

        let back = resolve_move(dims, &mut pos, AgentId::Agent1, Action::Up, other, &mut visited);
        assert_eq!(back, None);
        assert_eq!(visited.len(), 2);
    }

    #[test]
    fn test_agent2_never_marks_fields() {
        let (dims, mut visited) = setup(3, 3);
        let mut pos = Position::new(2, 2);
        let event = resolve_move(
            dims,
            &mut pos,
            AgentId::Agent2,
            Action::Left,
            Position::new(0, 0),
            &mut visited,
        );

        assert_eq!(event, None);
        assert_eq!(pos, Position::new(2, 1));
        assert_eq!(visited.len(), 1);
    }

    #[test]
    fn test_step_events_union() {
        let mut events = StepEvents::default();
        events.record(None);
        events.record(Some(MoveEvent::Collision));
        events.record(Some(MoveEvent::Agent1NewField));
        assert!(events.collision && events.agent1_new_field);
    }
}
