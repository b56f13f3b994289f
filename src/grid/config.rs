use crate::{Coordinate, Cost};

/// Options for creating a [`Grid`](crate::Grid) with [`Grid::from_config`](crate::Grid::from_config)
///
/// Default options:
/// ```
/// # use trace_pathfinding::GridConfig;
/// assert_eq!(
///     GridConfig {
///         rows: 22,
///         cols: 55,
///         weight_cost: 5,
///     },
///     Default::default()
/// );
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridConfig {
    /// The number of rows (defaults to `22`)
    pub rows: usize,
    /// The number of columns (defaults to `55`)
    pub cols: usize,
    /// What a Cell costs to enter once it is painted as a [`Weight`](crate::CellType::Weight)
    /// with [`Grid::paint_weight`](crate::Grid::paint_weight) (defaults to `5`)
    pub weight_cost: Cost,
}

impl GridConfig {
    /// The default options as a constant
    pub const DEFAULT: GridConfig = GridConfig {
        rows: 22,
        cols: 55,
        weight_cost: 5,
    };

    /// The default options with a different size
    /// ```
    /// # use trace_pathfinding::GridConfig;
    /// let config = GridConfig::with_size(5, 8);
    /// assert_eq!((config.rows, config.cols, config.weight_cost), (5, 8, 5));
    /// ```
    pub fn with_size(rows: usize, cols: usize) -> GridConfig {
        GridConfig {
            rows,
            cols,
            ..GridConfig::DEFAULT
        }
    }

    /// Where the start is placed on a fresh Grid: halfway down, a quarter from the left
    /// ```
    /// # use trace_pathfinding::{Coordinate, GridConfig};
    /// assert_eq!(GridConfig::DEFAULT.default_start(), Coordinate::new(11, 13));
    /// ```
    pub fn default_start(&self) -> Coordinate {
        Coordinate::new(self.rows / 2, self.cols / 4)
    }

    /// Where the end is placed on a fresh Grid: halfway down, a quarter from the right
    /// ```
    /// # use trace_pathfinding::{Coordinate, GridConfig};
    /// assert_eq!(GridConfig::DEFAULT.default_end(), Coordinate::new(11, 41));
    /// ```
    pub fn default_end(&self) -> Coordinate {
        Coordinate::new(self.rows / 2, self.cols * 3 / 4)
    }
}

impl Default for GridConfig {
    fn default() -> GridConfig {
        GridConfig::DEFAULT
    }
}
