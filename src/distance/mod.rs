//! Rounded Euclidean distance.

/// Euclidean distance between two integer points, rounded to the
/// nearest integer.
///
/// Halfway cases round to even (banker's rounding), so costs are
/// reproducible across platforms. The distance is symmetric and zero
/// for identical points.
///
/// # Examples
///
/// ```
/// use tsp_construct::distance::euclidean;
///
/// assert_eq!(euclidean((0, 0), (3, 4)), 5);
/// assert_eq!(euclidean((0, 0), (0, 0)), 0);
/// assert_eq!(euclidean((2, 7), (2, 7)), 0);
/// ```
pub fn euclidean(a: (i64, i64), b: (i64, i64)) -> u64 {
    let dx = (a.0 - b.0) as f64;
    let dy = (a.1 - b.1) as f64;
    (dx * dx + dy * dy).sqrt().round_ties_even() as u64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pythagorean_triple() {
        assert_eq!(euclidean((0, 0), (3, 4)), 5);
        assert_eq!(euclidean((0, 0), (0, 3)), 3);
        assert_eq!(euclidean((0, 3), (4, 0)), 5);
    }

    #[test]
    fn test_symmetric() {
        assert_eq!(euclidean((1, 2), (-4, 9)), euclidean((-4, 9), (1, 2)));
    }

    #[test]
    fn test_rounding() {
        // sqrt(2) = 1.414... rounds down
        assert_eq!(euclidean((0, 0), (1, 1)), 1);
        // sqrt(8) = 2.828... rounds up
        assert_eq!(euclidean((0, 0), (2, 2)), 3);
    }

    #[test]
    fn test_identical_points() {
        assert_eq!(euclidean((-5, 12), (-5, 12)), 0);
    }

    #[test]
    fn test_negative_coordinates() {
        assert_eq!(euclidean((-3, 0), (0, -4)), 5);
    }
}
