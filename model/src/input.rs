//! Parser for the line based map format
//!
//! ```text
//! <rows><empty><obstacle><full>
//! <row 0>
//! ...
//! ```

use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
    str::FromStr,
};

use common::debug;

use crate::{
    error::{HeaderError, ParseError},
    map::Map,
};

pub fn read_map_from_file<P: AsRef<Path>>(file_path: P) -> Result<Map, ParseError> {
    let file = File::open(file_path)?;
    parse_map(BufReader::new(file))
}

/// Reads one map from `reader`
///
/// Consumes the header plus exactly as many rows as the header declares. Anything after the
/// last row is left unread.
pub fn parse_map<R: BufRead>(reader: R) -> Result<Map, ParseError> {
    let mut lines = reader.lines();

    let header = lines.next().ok_or(ParseError::NoMapData)??;
    let mut map = parse_header(&header)?;
    debug!(
        "header declares {} rows (empty {:?}, obstacle {:?}, full {:?})",
        map.height,
        map.empty,
        map.obstacle,
        map.full
    );

    for row in 0..map.height {
        let line = lines.next().ok_or(ParseError::NoMapData)??;
        parse_row(&mut map, row, &line)?;
    }

    Ok(map)
}

/// The row count is everything in front of the last three characters
fn parse_header(line: &str) -> Result<Map, HeaderError> {
    let chars: Vec<char> = line.chars().collect();
    if chars.len() < 4 {
        return Err(HeaderError::TooShort(line.to_string()));
    }

    let (digits, symbols) = chars.split_at(chars.len() - 3);
    let digits: String = digits.iter().collect();
    let height = match digits.parse::<usize>() {
        Ok(height) => height,
        Err(source) => return Err(HeaderError::RowCount { digits, source }),
    };

    Ok(Map::new(height, symbols[0], symbols[1], symbols[2]))
}

fn parse_row(map: &mut Map, row: usize, line: &str) -> Result<(), ParseError> {
    let length = line.chars().count();
    if row == 0 {
        map.width = length;
    } else if length != map.width {
        return Err(ParseError::InvalidLineLength {
            expected: map.width,
            row,
            line: line.to_string(),
        });
    }

    for (x, c) in line.chars().enumerate() {
        match c {
            c if c == map.empty => {}
            c if c == map.obstacle => map.add_obstacle(x, row),
            c if c == map.full => {
                return Err(ParseError::FullCharacterInInput {
                    line: line.to_string(),
                })
            }
            found => {
                return Err(ParseError::InvalidMapCharacter {
                    found,
                    empty: map.empty,
                    obstacle: map.obstacle,
                    full: map.full,
                })
            }
        }
    }

    Ok(())
}

impl FromStr for Map {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_map(s.as_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coord::Obstacle;

    macro_rules! parse_fixture {
        ($name: expr) => {
            read_map_from_file(concat!(env!("CARGO_MANIFEST_DIR"), "/../inputs/", $name))
        };
    }

    macro_rules! assert_parse_error {
        ($name: expr, $message: expr) => {{
            let err = parse_fixture!($name).expect_err("map must be rejected");
            assert_eq!($message, err.to_string());
            err
        }};
    }

    #[test]
    fn test_parse_example() {
        let map = parse_fixture!("example.map").unwrap();
        assert_eq!(27, map.width);
        assert_eq!(9, map.height);
        assert_eq!('.', map.empty);
        assert_eq!('o', map.obstacle);
        assert_eq!('x', map.full);
        assert_eq!(
            vec![
                Obstacle::new(4, 1),
                Obstacle::new(12, 2),
                Obstacle::new(4, 4),
                Obstacle::new(15, 5),
                Obstacle::new(6, 7),
                Obstacle::new(21, 7),
                Obstacle::new(2, 8),
                Obstacle::new(10, 8),
            ],
            map.obstacles
        );
    }

    #[test]
    fn test_display_reproduces_body() {
        let input = std::fs::read_to_string(concat!(
            env!("CARGO_MANIFEST_DIR"),
            "/../inputs/example.map"
        ))
        .unwrap();
        let map: Map = input.parse().unwrap();
        let body = input.split_once('\n').unwrap().1;
        assert_eq!(body, map.to_string());
    }

    #[test]
    fn test_trailing_lines_are_ignored() {
        let map = parse_fixture!("trailing_lines.map").unwrap();
        assert_eq!(parse_fixture!("example.map").unwrap(), map);
    }

    #[test]
    fn test_invalid_header_too_short() {
        let err = assert_parse_error!("invalid_header_short.map", "invalid header: 9.o");
        assert!(matches!(
            err,
            ParseError::InvalidHeader(HeaderError::TooShort(_))
        ));
    }

    #[test]
    fn test_invalid_header_row_count() {
        let err = assert_parse_error!(
            "invalid_header_count.map",
            "invalid header row count \"........................\": invalid digit found in string"
        );
        assert!(matches!(
            err,
            ParseError::InvalidHeader(HeaderError::RowCount { .. })
        ));
    }

    #[test]
    fn test_invalid_line_length() {
        let err = assert_parse_error!(
            "invalid_line_length.map",
            "line length is not 27 on row 3: .........................."
        );
        assert!(matches!(
            err,
            ParseError::InvalidLineLength {
                expected: 27,
                row: 3,
                ..
            }
        ));
    }

    #[test]
    fn test_full_character_in_input() {
        assert_parse_error!(
            "full_character.map",
            "full character is not allowed as input: xx........................."
        );
    }

    #[test]
    fn test_invalid_map_character() {
        let err = assert_parse_error!(
            "invalid_character.map",
            "invalid map character a, candidates: [., o, x]"
        );
        assert!(matches!(
            err,
            ParseError::InvalidMapCharacter { found: 'a', .. }
        ));
    }

    #[test]
    fn test_lacked_data() {
        let err = assert_parse_error!("lacked_data.map", "no map data");
        assert!(matches!(err, ParseError::NoMapData));
    }

    #[test]
    fn test_empty_input() {
        assert!(matches!("".parse::<Map>(), Err(ParseError::NoMapData)));
    }

    #[test]
    fn test_missing_file() {
        assert!(matches!(
            parse_fixture!("does_not_exist.map"),
            Err(ParseError::Io(_))
        ));
    }

    #[test]
    fn test_zero_rows() {
        let map: Map = "0.ox\n".parse().unwrap();
        assert_eq!(0, map.height);
        assert_eq!(0, map.width);
        assert_eq!("", map.to_string());
    }

    #[test]
    fn test_multi_digit_row_count_and_crlf() {
        let input = format!("12-#+\r\n{}", "-#-\r\n".repeat(12));
        let map: Map = input.parse().unwrap();
        assert_eq!(12, map.height);
        assert_eq!(3, map.width);
        assert_eq!(12, map.obstacles.len());
        assert!(map.obstacles.iter().all(|o| o.x == 1));
    }

    #[test]
    fn test_negative_row_count_is_rejected() {
        assert!(matches!(
            "-1.ox\n...\n".parse::<Map>(),
            Err(ParseError::InvalidHeader(HeaderError::RowCount { .. }))
        ));
    }
}
