use std::fmt::{Display, Write};

use crate::{
    coord::{Coord, Obstacle},
    grid::Grid,
    square::Square,
};

/// A parsed map document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Map {
    pub width: usize,
    pub height: usize,
    pub empty: char,
    pub obstacle: char,
    pub full: char,
    pub obstacles: Vec<Obstacle>,
}

impl Map {
    /// Creates a map without any obstacles. The width is fixed once the first row is read.
    pub fn new(height: usize, empty: char, obstacle: char, full: char) -> Self {
        Map {
            width: 0,
            height,
            empty,
            obstacle,
            full,
            obstacles: Vec::new(),
        }
    }

    pub fn add_obstacle(&mut self, x: Coord, y: Coord) {
        self.obstacles.push(Obstacle::new(x, y));
    }

    /// Builds the occupancy grid of this map
    pub fn obstacle_grid(&self) -> Grid {
        let mut grid = Grid::new(self.width, self.height);
        for obstacle in self.obstacles.iter() {
            grid.block(obstacle.x, obstacle.y);
        }
        grid
    }

    /// Writes the map row by row, drawing `square` (if any) with the full character
    ///
    /// Obstacles take precedence over the square.
    pub fn render<W: Write>(&self, square: Option<&Square>, out: &mut W) -> std::fmt::Result {
        let grid = self.obstacle_grid();
        for (y, row) in grid.rows().iter().enumerate() {
            for (x, &blocked) in row.iter().enumerate() {
                let c = if blocked {
                    self.obstacle
                } else if square.map_or(false, |square| square.contains(x, y)) {
                    self.full
                } else {
                    self.empty
                };
                out.write_char(c)?;
            }
            out.write_char('\n')?;
        }

        Ok(())
    }
}

impl Display for Map {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.render(None, f)
    }
}
