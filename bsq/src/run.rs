//! Higher level runner functions connecting input sources, the search and the output sinks

use std::{
    fs::File,
    io::{self, BufRead, BufReader, Write},
    path::PathBuf,
};

use clap::ValueEnum;
use common::{debug, warn};
use model::{input::parse_map, map::Map, solution::Solution, square::Square};

use crate::search::find_largest_square;

/// The single line written to the diagnostics sink for any rejected map
pub const MAP_ERROR: &str = "map error";

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// The map with the largest square drawn in
    #[default]
    Map,
    /// The largest square as a JSON line
    Square,
}

/// Finds the largest free square of a parsed map
pub fn solve(map: &Map) -> Option<Square> {
    find_largest_square(&map.obstacle_grid())
}

/// Solves a single map read from `input`, rendering it to `out`
///
/// A map that cannot be parsed produces one `map error` line on `err` and nothing on `out`.
/// Only failures writing to the sinks are returned.
pub fn bsq<R, O, E>(input: R, out: &mut O, err: &mut E) -> io::Result<()>
where
    R: BufRead,
    O: Write,
    E: Write,
{
    run_bsq(input, out, err, OutputFormat::Map)
}

pub fn run_bsq<R, O, E>(input: R, out: &mut O, err: &mut E, format: OutputFormat) -> io::Result<()>
where
    R: BufRead,
    O: Write,
    E: Write,
{
    let map = match parse_map(input) {
        Ok(map) => map,
        Err(e) => {
            warn!("rejecting map: {}", e);
            return writeln!(err, "{}", MAP_ERROR);
        }
    };

    let square = solve(&map);
    match square {
        Some(square) => debug!(
            "largest square at ({}, {}) with size {}",
            square.start.x,
            square.start.y,
            square.size
        ),
        None => debug!("map has no free cell"),
    }

    let solution = Solution::new(&map, square);
    match format {
        OutputFormat::Map => write!(out, "{}", solution),
        OutputFormat::Square => writeln!(out, "{}", solution.to_json_string()?),
    }
}

/// Solves every map file in order
///
/// A file that cannot be opened is reported on `err` and skipped; it never stops the
/// remaining files from being processed.
pub fn run_files<O, E>(
    paths: &[PathBuf],
    out: &mut O,
    err: &mut E,
    format: OutputFormat,
) -> io::Result<()>
where
    O: Write,
    E: Write,
{
    for path in paths {
        match File::open(path) {
            Ok(file) => run_bsq(BufReader::new(file), out, err, format)?,
            Err(e) => writeln!(err, "{}: {}", path.display(), e)?,
        }
    }

    Ok(())
}
