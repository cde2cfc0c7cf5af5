use crate::coord::Coord;

/// Occupancy grid of a map, `true` marking a blocked cell
///
/// Stored row by row so that `rows()[y][x]` addresses the cell at `(x, y)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    cells: Vec<Vec<bool>>,
}

impl Grid {
    /// Creates a grid of the given size with every cell free
    pub fn new(width: usize, height: usize) -> Self {
        Grid {
            width,
            cells: vec![vec![false; width]; height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.cells.len()
    }

    pub fn rows(&self) -> &[Vec<bool>] {
        &self.cells
    }

    /// Marks a cell as blocked. Cells outside the grid are ignored.
    pub fn block(&mut self, x: Coord, y: Coord) {
        if let Some(cell) = self.cells.get_mut(y).and_then(|row| row.get_mut(x)) {
            *cell = true;
        }
    }

    /// Cells outside the grid count as free; callers bound-check first
    pub fn is_blocked(&self, x: Coord, y: Coord) -> bool {
        self.cells
            .get(y)
            .and_then(|row| row.get(x))
            .copied()
            .unwrap_or(false)
    }
}

impl From<Vec<Vec<bool>>> for Grid {
    fn from(cells: Vec<Vec<bool>>) -> Self {
        let width = cells.first().map(Vec::len).unwrap_or(0);
        Grid { width, cells }
    }
}
