//! Solution writer.

use std::io::Write;

use crate::models::Tour;

/// Writes a tour in solution format: the total cost on the first line,
/// then one city identifier per line in visit order.
///
/// # Examples
///
/// ```
/// use tsp_construct::io::write_solution;
/// use tsp_construct::models::Tour;
///
/// let tour = Tour::new(vec![2, 1, 3], 12);
/// let mut out = Vec::new();
/// write_solution(&mut out, &tour).unwrap();
/// assert_eq!(String::from_utf8(out).unwrap(), "12\n2\n1\n3\n");
/// ```
pub fn write_solution<W: Write>(writer: &mut W, tour: &Tour) -> std::io::Result<()> {
    writeln!(writer, "{}", tour.cost())?;
    for id in tour.cities() {
        writeln!(writer, "{id}")?;
    }
    Ok(())
}

/// Renders a tour to a solution-format string.
pub fn solution_to_string(tour: &Tour) -> String {
    let mut out = Vec::new();
    write_solution(&mut out, tour).expect("writing to a Vec cannot fail");
    String::from_utf8(out).expect("output is ASCII")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_solution() {
        let tour = Tour::new(vec![5, 3, 9], 42);
        assert_eq!(solution_to_string(&tour), "42\n5\n3\n9\n");
    }

    #[test]
    fn test_write_empty_tour() {
        let tour = Tour::new(Vec::new(), 0);
        assert_eq!(solution_to_string(&tour), "0\n");
    }
}
