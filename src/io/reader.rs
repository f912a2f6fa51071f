//! Instance reader.

use std::collections::HashSet;
use std::fmt;
use std::io::BufRead;

use crate::models::{City, TspInstance};

/// Failure to parse an instance source.
///
/// All variants are fatal; there is no recovery from a malformed
/// instance. Line numbers are 1-based and count the declaration line.
#[derive(Debug)]
pub enum ParseError {
    /// Underlying read failure.
    Io(std::io::Error),
    /// The source is empty; no city count line.
    MissingCount,
    /// The first line is not a non-negative integer.
    InvalidCount(String),
    /// The source ended before the declared number of records.
    MissingRecords {
        /// Count declared on the first line.
        declared: usize,
        /// Records actually present.
        found: usize,
    },
    /// A record does not decompose into exactly three integers.
    InvalidRecord {
        /// 1-based line number of the offending record.
        line: usize,
        /// The offending record text.
        content: String,
    },
    /// Two records share a city identifier.
    DuplicateId {
        /// 1-based line number of the second occurrence.
        line: usize,
        /// The repeated identifier.
        id: usize,
    },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::Io(e) => write!(f, "read failure: {e}"),
            ParseError::MissingCount => write!(f, "empty source: expected a city count line"),
            ParseError::InvalidCount(text) => {
                write!(f, "invalid city count: '{text}'")
            }
            ParseError::MissingRecords { declared, found } => {
                write!(f, "declared {declared} cities but found {found} records")
            }
            ParseError::InvalidRecord { line, content } => {
                write!(f, "line {line}: expected 'id x y' integers, got '{content}'")
            }
            ParseError::DuplicateId { line, id } => {
                write!(f, "line {line}: duplicate city id {id}")
            }
        }
    }
}

impl std::error::Error for ParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ParseError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for ParseError {
    fn from(e: std::io::Error) -> Self {
        ParseError::Io(e)
    }
}

/// Reads an instance from a buffered source.
///
/// Expects a city count on the first line, then exactly that many
/// `id x y` lines of whitespace-separated integers. Content past the
/// declared records is ignored.
///
/// # Examples
///
/// ```
/// use std::io::BufReader;
/// use tsp_construct::io::read_instance;
///
/// let text = "3\n1 0 0\n2 0 3\n3 4 0\n";
/// let instance = read_instance(BufReader::new(text.as_bytes())).unwrap();
/// assert_eq!(instance.len(), 3);
/// ```
pub fn read_instance<R: BufRead>(reader: R) -> Result<TspInstance, ParseError> {
    let mut lines = reader.lines();

    let count_line = lines.next().ok_or(ParseError::MissingCount)??;
    let declared: usize = count_line
        .trim()
        .parse()
        .map_err(|_| ParseError::InvalidCount(count_line.trim().to_string()))?;

    let mut cities = Vec::with_capacity(declared);
    let mut seen = HashSet::with_capacity(declared);

    for i in 0..declared {
        let line = match lines.next() {
            Some(line) => line?,
            None => {
                return Err(ParseError::MissingRecords {
                    declared,
                    found: i,
                })
            }
        };
        let line_no = i + 2;
        let city = parse_record(&line).ok_or_else(|| ParseError::InvalidRecord {
            line: line_no,
            content: line.trim().to_string(),
        })?;
        if !seen.insert(city.id()) {
            return Err(ParseError::DuplicateId {
                line: line_no,
                id: city.id(),
            });
        }
        cities.push(city);
    }

    Ok(TspInstance::new(cities).expect("ids checked unique"))
}

/// Parses an instance from an in-memory string.
pub fn parse_instance(text: &str) -> Result<TspInstance, ParseError> {
    read_instance(text.as_bytes())
}

fn parse_record(line: &str) -> Option<City> {
    let mut tokens = line.split_whitespace();
    let id: usize = tokens.next()?.parse().ok()?;
    let x: i64 = tokens.next()?.parse().ok()?;
    let y: i64 = tokens.next()?.parse().ok()?;
    if tokens.next().is_some() {
        return None;
    }
    Some(City::new(id, x, y))
}
