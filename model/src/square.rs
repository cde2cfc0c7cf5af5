use serde::{Deserialize, Serialize};

use crate::coord::{Coord, Coordinate};

/// An axis-aligned square of free cells, anchored at its top-left corner
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Square {
    pub start: Coordinate,
    pub size: usize,
}

impl Square {
    pub fn new(x: Coord, y: Coord, size: usize) -> Self {
        Square {
            start: Coordinate::new(x, y),
            size,
        }
    }

    /// Bottom-right cell of the square
    ///
    /// Only meaningful for squares with `size >= 1`
    pub fn end(&self) -> Coordinate {
        Coordinate::new(self.start.x + self.size - 1, self.start.y + self.size - 1)
    }

    pub fn contains(&self, x: Coord, y: Coord) -> bool {
        (self.start.x..self.start.x + self.size).contains(&x)
            && (self.start.y..self.start.y + self.size).contains(&y)
    }
}
