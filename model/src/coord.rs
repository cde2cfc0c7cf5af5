use serde::{Deserialize, Serialize};

pub type Coord = usize;

/// A cell position on a map, `x` counting columns from the left and `y` rows from the top
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coordinate {
    pub x: Coord,
    pub y: Coord,
}

/// A blocked cell
pub type Obstacle = Coordinate;

impl Coordinate {
    pub fn new(x: Coord, y: Coord) -> Self {
        Coordinate { x, y }
    }
}
