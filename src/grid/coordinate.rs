use crate::Cost;
use std::fmt;

/// A position on the Grid.
///
/// Coordinates have no identity beyond their values: two Coordinates with the same `row` and
/// `col` are the same position, which is also how they are hashed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coordinate {
    /// the row, counted from the top
    pub row: usize,
    /// the column, counted from the left
    pub col: usize,
}

impl Coordinate {
    /// Creates a new Coordinate
    pub const fn new(row: usize, col: usize) -> Coordinate {
        Coordinate { row, col }
    }

    /// Structural equality, the same as `==`
    pub fn same_as(self, other: Coordinate) -> bool {
        self == other
    }

    /// The [Manhattan Distance](https://en.wikipedia.org/wiki/Taxicab_geometry) to `other`
    /// ## Examples
    /// ```
    /// # use trace_pathfinding::Coordinate;
    /// let a = Coordinate::new(3, 1);
    /// assert_eq!(a.manhattan(Coordinate::new(0, 0)), 4);
    /// assert_eq!(a.manhattan(a), 0);
    /// ```
    pub fn manhattan(self, other: Coordinate) -> Cost {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }
}

impl From<(usize, usize)> for Coordinate {
    fn from((row, col): (usize, usize)) -> Coordinate {
        Coordinate { row, col }
    }
}

impl From<Coordinate> for (usize, usize) {
    fn from(coord: Coordinate) -> (usize, usize) {
        (coord.row, coord.col)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        write!(fmt, "({}, {})", self.row, self.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equality_is_by_value() {
        let a = Coordinate::new(2, 7);
        let b: Coordinate = (2, 7).into();
        assert!(a.same_as(b));
        assert!(!a.same_as(Coordinate::new(7, 2)));
    }

    #[test]
    fn display() {
        assert_eq!(Coordinate::new(4, 0).to_string(), "(4, 0)");
    }
}
