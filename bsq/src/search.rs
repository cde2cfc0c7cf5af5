//! Search for the largest square of free cells on an occupancy grid

use model::{grid::Grid, square::Square};

/// Finds the largest square without obstacles
///
/// Every free cell is tried as the top-left corner of a square which is grown one step at a
/// time for as long as it stays free. Cells are visited row by row, and only a strictly larger
/// square replaces the current best, so on ties the square found first wins.
///
/// Returns `None` if the grid has no free cell.
pub fn find_largest_square(grid: &Grid) -> Option<Square> {
    let mut best: Option<Square> = None;

    for (y, row) in grid.rows().iter().enumerate() {
        for (x, &blocked) in row.iter().enumerate() {
            // a blocked corner has size 0 and can never improve on anything
            if blocked {
                continue;
            }

            let mut square = Square::new(x, y, 1);
            while is_expandable(&square, grid) {
                square.size += 1;
            }

            if square.size > best.map_or(0, |best| best.size) {
                best = Some(square);
            }
        }
    }

    best
}

/// Checks whether `square` can grow by one row and one column
///
/// Only the new bottom-right cell, the new right column and the new bottom row are inspected;
/// the cells already covered by `square` are assumed to be free.
pub fn is_expandable(square: &Square, grid: &Grid) -> bool {
    let x = square.start.x + square.size;
    let y = square.start.y + square.size;

    if x >= grid.width() || y >= grid.height() {
        return false;
    }
    if grid.is_blocked(x, y) {
        return false;
    }

    let right_column_free = (square.start.y..y).all(|cy| !grid.is_blocked(x, cy));
    let bottom_row_free = (square.start.x..x).all(|cx| !grid.is_blocked(cx, y));

    right_column_free && bottom_row_free
}
