//! The eight searches and the dispatcher that selects one of them.
//!
//! Every search is a plain function `fn(&Grid, Coordinate, Coordinate) -> AlgorithmResult` that
//! can be called directly. They all expect `start` and `end` to be walkable Cells inside the Grid;
//! [`run`] checks that first and returns an empty result otherwise.

mod a_star;
mod bellman_ford;
mod bfs;
mod bidirectional_bfs;
mod dfs;
mod dijkstra;
mod greedy_best_first;
mod jump_point;

pub use self::a_star::a_star_search;
pub use self::bellman_ford::bellman_ford_search;
pub use self::bfs::breadth_first_search;
pub use self::bidirectional_bfs::bidirectional_bfs;
pub use self::dfs::depth_first_search;
pub use self::dijkstra::dijkstra_search;
pub use self::greedy_best_first::greedy_best_first_search;
pub use self::jump_point::jump_point_search;

use crate::{AlgorithmResult, Coordinate, Grid, ParseAlgorithmError};
use std::{
    fmt,
    str::FromStr,
    time::{Duration, Instant},
};

/// Selects one of the searches of this crate.
///
/// The ids used by [`FromStr`] and [`Display`](fmt::Display) are `dijkstra`, `astar`, `bfs`,
/// `dfs`, `bellman-ford`, `bidirectional-bfs`, `jps` and `greedy-bfs`.
///
/// ## Examples
/// ```
/// # use trace_pathfinding::Algorithm;
/// let algorithm: Algorithm = "bellman-ford".parse().unwrap();
/// assert_eq!(algorithm, Algorithm::BellmanFord);
/// assert_eq!(algorithm.to_string(), "bellman-ford");
///
/// let info = algorithm.info();
/// assert_eq!(info.name, "Bellman-Ford");
/// assert!(info.weighted && info.guaranteed);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Algorithm {
    /// [`dijkstra_search`]
    #[cfg_attr(feature = "serde", serde(rename = "dijkstra"))]
    Dijkstra,
    /// [`a_star_search`]
    #[cfg_attr(feature = "serde", serde(rename = "astar"))]
    AStar,
    /// [`breadth_first_search`]
    #[cfg_attr(feature = "serde", serde(rename = "bfs"))]
    Bfs,
    /// [`depth_first_search`]
    #[cfg_attr(feature = "serde", serde(rename = "dfs"))]
    Dfs,
    /// [`bellman_ford_search`]
    #[cfg_attr(feature = "serde", serde(rename = "bellman-ford"))]
    BellmanFord,
    /// [`bidirectional_bfs`]
    #[cfg_attr(feature = "serde", serde(rename = "bidirectional-bfs"))]
    BidirectionalBfs,
    /// [`jump_point_search`]
    #[cfg_attr(feature = "serde", serde(rename = "jps"))]
    Jps,
    /// [`greedy_best_first_search`]
    #[cfg_attr(feature = "serde", serde(rename = "greedy-bfs"))]
    GreedyBfs,
}

/// Display information about an [`Algorithm`]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct AlgorithmInfo {
    /// the id used to select the Algorithm
    pub id: &'static str,
    /// a human readable name
    pub name: &'static str,
    /// a one-line description
    pub description: &'static str,
    /// `true` if the Algorithm honors the weights of the Cells
    pub weighted: bool,
    /// `true` if the Algorithm always finds a shortest Path, in Cost if `weighted` is set and
    /// in steps otherwise
    pub guaranteed: bool,
}

impl Algorithm {
    /// Every Algorithm, in the order a menu lists them
    pub const ALL: [Algorithm; 8] = [
        Algorithm::Dijkstra,
        Algorithm::AStar,
        Algorithm::Bfs,
        Algorithm::Dfs,
        Algorithm::BellmanFord,
        Algorithm::BidirectionalBfs,
        Algorithm::Jps,
        Algorithm::GreedyBfs,
    ];

    /// The id of this Algorithm, as accepted by [`FromStr`]
    pub fn id(self) -> &'static str {
        match self {
            Algorithm::Dijkstra => "dijkstra",
            Algorithm::AStar => "astar",
            Algorithm::Bfs => "bfs",
            Algorithm::Dfs => "dfs",
            Algorithm::BellmanFord => "bellman-ford",
            Algorithm::BidirectionalBfs => "bidirectional-bfs",
            Algorithm::Jps => "jps",
            Algorithm::GreedyBfs => "greedy-bfs",
        }
    }

    /// Name, description and guarantees of this Algorithm
    pub fn info(self) -> AlgorithmInfo {
        let (name, description, weighted, guaranteed) = match self {
            Algorithm::Dijkstra => (
                "Dijkstra",
                "Guarantees the cheapest path on a weighted grid",
                true,
                true,
            ),
            Algorithm::AStar => (
                "A* Search",
                "Uses a heuristic to find the cheapest path efficiently",
                true,
                true,
            ),
            Algorithm::Bfs => (
                "Breadth-First Search",
                "Guarantees the shortest path on an unweighted grid",
                false,
                true,
            ),
            Algorithm::Dfs => (
                "Depth-First Search",
                "Explores as deep as possible; the path is not the shortest",
                false,
                false,
            ),
            Algorithm::BellmanFord => (
                "Bellman-Ford",
                "Relaxes every cell repeatedly until no cost improves",
                true,
                true,
            ),
            Algorithm::BidirectionalBfs => (
                "Bidirectional BFS",
                "Searches from start and end at the same time",
                false,
                true,
            ),
            Algorithm::Jps => (
                "Jump Point Search",
                "A variant of A* that jumps over straight runs of the grid",
                false,
                true,
            ),
            Algorithm::GreedyBfs => (
                "Greedy Best-First Search",
                "Follows the heuristic only; the path is not the shortest",
                false,
                false,
            ),
        };
        AlgorithmInfo {
            id: self.id(),
            name,
            description,
            weighted,
            guaranteed,
        }
    }

    /// Runs this Algorithm from `start` to `end`.
    ///
    /// Returns an empty, not found result if `start` or `end` is outside the Grid or a wall.
    pub fn run(self, grid: &Grid, start: Coordinate, end: Coordinate) -> AlgorithmResult {
        for (name, coord) in [("start", start), ("end", end)] {
            if !grid.is_walkable(coord) {
                log_warn!(
                    "{}: {} {} is not a walkable Cell of the {}x{} Grid",
                    self,
                    name,
                    coord,
                    grid.rows(),
                    grid.cols()
                );
                return AlgorithmResult::not_found();
            }
        }

        let search: fn(&Grid, Coordinate, Coordinate) -> AlgorithmResult = match self {
            Algorithm::Dijkstra => dijkstra_search,
            Algorithm::AStar => a_star_search,
            Algorithm::Bfs => breadth_first_search,
            Algorithm::Dfs => depth_first_search,
            Algorithm::BellmanFord => bellman_ford_search,
            Algorithm::BidirectionalBfs => bidirectional_bfs,
            Algorithm::Jps => jump_point_search,
            Algorithm::GreedyBfs => greedy_best_first_search,
        };
        timed!(self.id(), search(grid, start, end))
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        fmt.write_str(self.id())
    }
}

impl FromStr for Algorithm {
    type Err = ParseAlgorithmError;
    fn from_str(s: &str) -> Result<Algorithm, ParseAlgorithmError> {
        Algorithm::ALL
            .into_iter()
            .find(|algorithm| algorithm.id() == s)
            .ok_or_else(|| ParseAlgorithmError(s.to_owned()))
    }
}

/// Runs `algorithm` from `start` to `end`. See [`Algorithm::run`]
pub fn run(
    algorithm: Algorithm,
    grid: &Grid,
    start: Coordinate,
    end: Coordinate,
) -> AlgorithmResult {
    algorithm.run(grid, start, end)
}

/// Like [`run`], but also measures how long the search took
pub fn run_timed(
    algorithm: Algorithm,
    grid: &Grid,
    start: Coordinate,
    end: Coordinate,
) -> (AlgorithmResult, Duration) {
    let timer = Instant::now();
    let result = algorithm.run(grid, start, end);
    (result, timer.elapsed())
}

/// Runs every Algorithm on the same Grid, in the order of [`Algorithm::ALL`].
///
/// With the `parallel` feature the searches run concurrently on rayon's thread pool. The results
/// are the same either way.
pub fn run_all(
    grid: &Grid,
    start: Coordinate,
    end: Coordinate,
) -> Vec<(Algorithm, AlgorithmResult)> {
    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        Algorithm::ALL
            .par_iter()
            .map(|&algorithm| (algorithm, algorithm.run(grid, start, end)))
            .collect()
    }
    #[cfg(not(feature = "parallel"))]
    {
        Algorithm::ALL
            .iter()
            .map(|&algorithm| (algorithm, algorithm.run(grid, start, end)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CellType;

    #[test]
    fn ids_round_trip() {
        for algorithm in Algorithm::ALL {
            assert_eq!(algorithm.id().parse::<Algorithm>(), Ok(algorithm));
            assert_eq!(algorithm.info().id, algorithm.id());
        }
        assert_eq!(
            "a-star".parse::<Algorithm>(),
            Err(ParseAlgorithmError("a-star".to_owned()))
        );
    }

    #[test]
    fn guarantees() {
        let unguaranteed: Vec<_> = Algorithm::ALL
            .into_iter()
            .filter(|algorithm| !algorithm.info().guaranteed)
            .collect();
        assert_eq!(unguaranteed, vec![Algorithm::Dfs, Algorithm::GreedyBfs]);

        let weighted: Vec<_> = Algorithm::ALL
            .into_iter()
            .filter(|algorithm| algorithm.info().weighted)
            .collect();
        assert_eq!(
            weighted,
            vec![Algorithm::Dijkstra, Algorithm::AStar, Algorithm::BellmanFord]
        );
    }

    #[test]
    fn rejects_bad_endpoints() {
        let mut grid = Grid::new(3, 3);
        grid.set_cell_type(Coordinate::new(1, 1), CellType::Wall).unwrap();

        for algorithm in Algorithm::ALL {
            let outside = run(algorithm, &grid, Coordinate::new(0, 0), Coordinate::new(3, 0));
            assert_eq!(outside, AlgorithmResult::not_found());

            let walled = run(algorithm, &grid, Coordinate::new(1, 1), Coordinate::new(2, 2));
            assert_eq!(walled, AlgorithmResult::not_found());
        }
    }

    #[test]
    fn run_all_keeps_menu_order() {
        let grid = Grid::new(4, 6);
        let results = run_all(&grid, Coordinate::new(0, 0), Coordinate::new(3, 5));

        let order: Vec<_> = results.iter().map(|(algorithm, _)| *algorithm).collect();
        assert_eq!(order, Algorithm::ALL.to_vec());
        for (algorithm, result) in results {
            let expected = algorithm.run(&grid, Coordinate::new(0, 0), Coordinate::new(3, 5));
            assert_eq!(result, expected);
        }
    }

    #[test]
    fn timed_run_matches_run() {
        let grid = Grid::new(5, 5);
        let (result, _elapsed) = run_timed(
            Algorithm::AStar,
            &grid,
            Coordinate::new(0, 0),
            Coordinate::new(4, 4),
        );
        assert_eq!(result.path_length, 9);
    }
}
