pub mod coord;
pub mod error;
pub mod grid;
pub mod input;
pub mod map;
pub mod solution;
pub mod square;
