use std::fmt::Display;

use serde_json;

use crate::{map::Map, square::Square};

/// A map together with the largest square found on it
#[derive(Debug, Clone, Copy)]
pub struct Solution<'a> {
    pub map: &'a Map,
    pub square: Option<Square>,
}

impl<'a> Solution<'a> {
    pub fn new(map: &'a Map, square: Option<Square>) -> Self {
        Solution { map, square }
    }

    /// Serializes only the square, `null` if the map has no free cell
    pub fn to_json_string(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.square)
    }
}

impl Display for Solution<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.map.render(self.square.as_ref(), f)
    }
}
