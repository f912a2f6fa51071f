//! Instance file parsing and solution output.
//!
//! The instance format is a city count on the first line followed by
//! that many `id x y` records. The solution format is the tour cost on
//! the first line followed by one city identifier per line in visit
//! order. All file handling stays with the caller; this module works
//! over [`std::io::BufRead`] and [`std::io::Write`].

mod reader;
mod writer;

pub use reader::{parse_instance, read_instance, ParseError};
pub use writer::{solution_to_string, write_solution};
