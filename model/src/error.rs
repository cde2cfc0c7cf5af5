use std::num::ParseIntError;

use thiserror::Error;

/// Reasons a map document is rejected. Every variant aborts the whole map.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error(transparent)]
    InvalidHeader(#[from] HeaderError),
    #[error("no map data")]
    NoMapData,
    #[error("line length is not {expected} on row {row}: {line}")]
    InvalidLineLength {
        expected: usize,
        row: usize,
        line: String,
    },
    #[error("full character is not allowed as input: {line}")]
    FullCharacterInInput { line: String },
    #[error("invalid map character {found}, candidates: [{empty}, {obstacle}, {full}]")]
    InvalidMapCharacter {
        found: char,
        empty: char,
        obstacle: char,
        full: char,
    },
    #[error("cannot read map: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Error)]
pub enum HeaderError {
    #[error("invalid header: {0}")]
    TooShort(String),
    #[error("invalid header row count {digits:?}: {source}")]
    RowCount {
        digits: String,
        #[source]
        source: ParseIntError,
    },
}
