//! Observation encoder: each agent sees itself first, then the other agent.

use crate::grid::GridDimensions;
use arena_env::{AgentPair, Observation, Position};

/// Discrete code of a cell, `row * width + column`.
#[inline]
pub fn encode_position(dims: GridDimensions, pos: Position) -> usize {
    dims.index(pos)
}

/// Builds both agents' observations from their current positions.
pub fn encode(dims: GridDimensions, positions: &AgentPair<Position>) -> AgentPair<Observation> {
    let ag1 = encode_position(dims, positions.agent1);
    let ag2 = encode_position(dims, positions.agent2);
    AgentPair::new([ag1, ag2], [ag2, ag1])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_row_major() {
        let dims = GridDimensions::new(4, 3);
        assert_eq!(encode_position(dims, Position::new(0, 0)), 0);
        assert_eq!(encode_position(dims, Position::new(1, 0)), 4);
        assert_eq!(encode_position(dims, Position::new(2, 3)), 11);
    }

    #[test]
    fn test_encode_self_first() {
        let dims = GridDimensions::new(10, 10);
        let positions = AgentPair::new(Position::new(0, 0), Position::new(9, 9));
        let obs = encode(dims, &positions);

        assert_eq!(obs.agent1, [0, 99]);
        assert_eq!(obs.agent2, [99, 0]);
    }
}
