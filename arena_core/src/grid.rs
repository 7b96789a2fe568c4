//! Grid geometry and agent1's visited-field set.

use arena_env::Position;
use serde::{Deserialize, Serialize};

/// Fixed grid size of an arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridDimensions {
    pub width: usize,
    pub height: usize,
}

impl GridDimensions {
    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }

    /// Total number of cells.
    pub fn cell_count(&self) -> usize {
        self.width * self.height
    }

    pub fn contains(&self, pos: Position) -> bool {
        pos.row < self.height && pos.col < self.width
    }

    /// Clamps a signed candidate cell into the grid, each axis independently.
    pub fn clamp(&self, row: isize, col: isize) -> Position {
        Position::new(
            row.clamp(0, self.height as isize - 1) as usize,
            col.clamp(0, self.width as isize - 1) as usize,
        )
    }

    /// The lower-right corner.
    pub fn bottom_right(&self) -> Position {
        Position::new(self.height - 1, self.width - 1)
    }

    /// Row-major index of a cell.
    #[inline]
    pub fn index(&self, pos: Position) -> usize {
        pos.row * self.width + pos.col
    }

    /// Inverse of [`GridDimensions::index`].
    #[inline]
    pub fn position(&self, index: usize) -> Position {
        Position::new(index / self.width, index % self.width)
    }
}

/// Distinct cells agent1 has occupied during the current episode.
///
/// Stored as a row-major bitset sized `width * height`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisitedFields {
    dims: GridDimensions,
    cells: Vec<bool>,
    count: usize,
}

impl VisitedFields {
    /// Creates an empty set for the given grid.
    pub fn new(dims: GridDimensions) -> Self {
        Self {
            dims,
            cells: vec![false; dims.cell_count()],
            count: 0,
        }
    }

    /// Clears the set down to a single starting cell.
    pub fn reset_to(&mut self, start: Position) {
        self.cells.iter_mut().for_each(|c| *c = false);
        self.count = 0;
        self.insert(start);
    }

    /// Marks a cell as visited. Returns true if it was not visited before.
    pub fn insert(&mut self, pos: Position) -> bool {
        let cell = &mut self.cells[self.dims.index(pos)];
        if *cell {
            return false;
        }
        *cell = true;
        self.count += 1;
        true
    }

    pub fn contains(&self, pos: Position) -> bool {
        self.dims.contains(pos) && self.cells[self.dims.index(pos)]
    }

    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Visited cells in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = Position> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, visited)| **visited)
            .map(|(i, _)| self.dims.position(i))
    }
}
