//! A Module with the most common Neighborhoods

use crate::{utils::Dir, Coordinate, Cost};
use std::fmt::Debug;

/// Defines how a Path can move along the Grid.
///
/// This Trait provides a function to query all neighboring Points of an existing Point and a
/// Heuristic for how long it might take to reach a goal from a Point.
///
/// The most common implementations of this Trait are already provided by this Module:
/// - [`ManhattanNeighborhood`] for Agents that can move
/// up, down, left or right
/// - [`MooreNeighborhood`] for Agents that can move
/// up, down, left, right, as well as the 4 diagonals (up-left, ...)
///
/// The searches in this crate all use the [`ManhattanNeighborhood`].
pub trait Neighborhood: Clone + Debug {
    /// Appends all Neighbors of a Point to `target`, in a fixed order.
    ///
    /// Note that it is not necessary to check weather the Tile at a Point is solid or not.
    /// That check is done later.
    fn get_all_neighbors(&self, point: Coordinate, target: &mut Vec<Coordinate>);
    /// Gives a Heuristic for how long it takes to reach `goal` from `point`.
    ///
    /// This is usually the Distance between the two Points in the Metric of your Neighborhood.
    /// It must never overestimate, or A* loses its guarantee to find the shortest Path.
    fn heuristic(&self, point: Coordinate, goal: Coordinate) -> Cost;
}

/// A Neighborhood for Agents moving along the 4 cardinal directions.
///
/// Also known as [Von Neumann Neighborhood](https://en.wikipedia.org/wiki/Von_Neumann_neighborhood),
/// Manhattan Metric or [Taxicab Geometry](https://en.wikipedia.org/wiki/Taxicab_geometry).
///
/// Neighbors are listed up, down, left, right.
///
/// ```no_code
/// A: Agent, o: reachable in one step
///   o
///   |
/// o-A-o
///   |
///   o
/// ```
#[derive(Clone, Copy, Debug)]
pub struct ManhattanNeighborhood {
    rows: usize,
    cols: usize,
}

impl ManhattanNeighborhood {
    /// Creates a new ManhattanNeighborhood.
    ///
    /// `rows` and `cols` are the size of the Grid to move on.
    pub fn new(rows: usize, cols: usize) -> ManhattanNeighborhood {
        ManhattanNeighborhood { rows, cols }
    }
}

impl Neighborhood for ManhattanNeighborhood {
    fn get_all_neighbors(&self, point: Coordinate, target: &mut Vec<Coordinate>) {
        let size = (self.rows, self.cols);
        target.extend(Dir::all().filter_map(|dir| crate::utils::get_in_dir(point, dir, size)));
    }
    fn heuristic(&self, point: Coordinate, goal: Coordinate) -> Cost {
        point.manhattan(goal)
    }
}

/// A Neighborhood for Agents moving along the 4 cardinal directions and the 4 diagonals.
///
/// Also known as [Moore Neighborhood](https://en.wikipedia.org/wiki/Moore_neighborhood),
/// [Maximum Metric](https://en.wikipedia.org/wiki/Chebyshev_distance) or Chebyshev Metric.
///
/// Neighbors are listed up, down, left, right, then up-left, up-right, down-left, down-right.
///
/// ```no_code
/// A: Agent, o: reachable in one step
/// o o o
///  \|/
/// o-A-o
///  /|\
/// o o o
/// ```
#[derive(Clone, Copy, Debug)]
pub struct MooreNeighborhood {
    rows: usize,
    cols: usize,
}

impl MooreNeighborhood {
    /// Creates a new MooreNeighborhood.
    ///
    /// `rows` and `cols` are the size of the Grid to move on.
    pub fn new(rows: usize, cols: usize) -> MooreNeighborhood {
        MooreNeighborhood { rows, cols }
    }
}

const DIAGONALS: [(isize, isize); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

impl Neighborhood for MooreNeighborhood {
    fn get_all_neighbors(&self, point: Coordinate, target: &mut Vec<Coordinate>) {
        let size = (self.rows, self.cols);
        ManhattanNeighborhood::new(self.rows, self.cols).get_all_neighbors(point, target);
        target.extend(
            DIAGONALS
                .iter()
                .filter_map(|&diff| crate::utils::offset_within(point, diff, size)),
        );
    }
    fn heuristic(&self, point: Coordinate, goal: Coordinate) -> Cost {
        point.row.abs_diff(goal.row).max(point.col.abs_diff(goal.col))
    }
}
