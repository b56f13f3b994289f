use crate::Coordinate;
use thiserror::Error;

/// Errors when building or editing a [`Grid`](crate::Grid)
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// A Grid needs at least one row and one column
    #[error("a grid needs at least one row and one column")]
    Empty,
    /// A row has a different length than the first row
    #[error("row {row} has {found} cells, expected {expected}")]
    Ragged {
        /// index of the offending row
        row: usize,
        /// length of the first row
        expected: usize,
        /// length of the offending row
        found: usize,
    },
    /// The Coordinate lies outside of the Grid
    #[error("{0} is outside of the grid")]
    OutOfBounds(Coordinate),
    /// The number of Cells doesn't match the size of the Grid
    #[error("a {rows}x{cols} grid needs {} cells, found {found}", .rows * .cols)]
    CellCount {
        /// number of rows
        rows: usize,
        /// number of columns
        cols: usize,
        /// number of Cells given
        found: usize,
    },
    /// Cells must cost at least 1 to enter
    #[error("weight must be at least 1")]
    ZeroWeight,
    /// The start or end tag can't be painted over
    #[error("{0} holds the start or end and can't be changed")]
    Endpoint(Coordinate),
    /// A map character that doesn't describe a Cell
    #[error("unknown cell '{symbol}' at {at}")]
    UnknownSymbol {
        /// the character that was read
        symbol: char,
        /// where it was read
        at: Coordinate,
    },
}

/// Returned when parsing an id that doesn't name one of the [`Algorithm`](crate::Algorithm)s
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown algorithm id '{0}'")]
pub struct ParseAlgorithmError(pub String);
