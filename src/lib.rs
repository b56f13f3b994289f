#![warn(
    missing_docs,
    missing_debug_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unstable_features,
    unused_import_braces,
    unused_qualifications
)]

//! A crate to search Paths on a weighted Grid and record how the search got there.
//!
//! ## Introduction
//! Every search in this crate runs to completion on an immutable snapshot of a [`Grid`] and
//! returns an [`AlgorithmResult`]: the final Path (if any) together with an ordered list of
//! [`AlgorithmStep`]s. The steps first list every Cell the algorithm settled, in the order it
//! settled them, followed by every Cell of the Path from start to end. Replaying those steps on a
//! timer is all a renderer needs to animate the search.
//!
//! Eight algorithms are provided, selected through the closed [`Algorithm`] enum:
//!
//! | Algorithm | Honors weights | Shortest Path |
//! |---|---|---|
//! | Dijkstra | yes | yes |
//! | A* | yes | yes |
//! | Breadth-First Search | no | yes (in steps) |
//! | Depth-First Search | no | no |
//! | Bellman-Ford | yes | yes |
//! | Bidirectional BFS | no | yes (in steps) |
//! | Jump Point Search | no | yes (in steps) |
//! | Greedy Best-First Search | no | no |
//!
//! All searches move in the 4 cardinal directions. Walls can't be entered, and entering any other
//! Cell costs that Cell's weight.
//!
//! ## Examples
//! ```
//! use trace_pathfinding::prelude::*;
//!
//! // S = start, E = end, # = wall, 5 = a Cell that costs 5 to enter
//! let grid: Grid = "
//!     S . . . .
//!     . # # 5 .
//!     . # . . .
//!     . # . # .
//!     . . . # E
//! "
//! .parse()
//! .unwrap();
//!
//! let start = grid.find_start().unwrap();
//! let end = grid.find_end().unwrap();
//!
//! let result = run(Algorithm::Dijkstra, &grid, start, end);
//!
//! assert!(result.found);
//! assert_eq!(result.path.first(), Some(&start));
//! assert_eq!(result.path.last(), Some(&end));
//! assert_eq!(result.path_length, result.path.len());
//!
//! // Dijkstra walks around the expensive Cell
//! assert!(!result.path.contains(&Coordinate::new(1, 3)));
//! assert_eq!(result.path_cost(&grid), 8);
//! ```
//!
//! The Algorithm can also be selected by its id, for example when it comes from a menu:
//! ```
//! # use trace_pathfinding::prelude::*;
//! let grid = Grid::new(5, 5);
//! let algorithm: Algorithm = "bidirectional-bfs".parse().unwrap();
//!
//! let result = algorithm.run(&grid, Coordinate::new(0, 0), Coordinate::new(4, 4));
//! assert_eq!(result.path_length, 9);
//!
//! assert!("teleport".parse::<Algorithm>().is_err());
//! ```
//!
//! ## Features
//! - `parallel` (default): [`algorithms::run_all`] runs every algorithm concurrently using rayon.
//! - `log`: logs internal timings at `trace` level and rejected inputs at `warn` level.
//! - `serde`: implements `Serialize` and `Deserialize` for the data model.

#[cfg(feature = "log")]
macro_rules! timed {
    ($name: expr, $body: expr) => {{
        let timer = std::time::Instant::now();
        let res = $body;
        log::trace!("{}: {:?}", $name, timer.elapsed());
        res
    }};
}
#[cfg(not(feature = "log"))]
macro_rules! timed {
    ($name: expr, $body: expr) => {
        $body
    };
}

#[cfg(feature = "log")]
macro_rules! log_warn {
    ($($arg: tt)*) => {
        log::warn!($($arg)*)
    };
}
#[cfg(not(feature = "log"))]
macro_rules! log_warn {
    ($($arg: tt)*) => {{
        let _ = format_args!($($arg)*);
    }};
}

/// A Type to represent the Cost of entering a Cell, or of a whole Path
pub type Cost = usize;

/// A [`HashMap`](hashbrown::HashMap) keyed by Grid positions
pub type PointMap<V> = hashbrown::HashMap<Coordinate, V>;
/// A [`HashSet`](hashbrown::HashSet) of Grid positions
pub type PointSet = hashbrown::HashSet<Coordinate>;

mod error;
pub use self::error::{GridError, ParseAlgorithmError};

mod grid;
pub use self::grid::{Cell, CellType, Coordinate, Grid, GridConfig};

pub mod neighbors;

mod priority_queue;
pub use self::priority_queue::PriorityQueue;

mod path;
pub use self::path::{path_cost, reconstruct_path};

mod trace;
pub use self::trace::{build_result, AlgorithmResult, AlgorithmStep, StepKind};

pub mod algorithms;
pub use self::algorithms::{run, Algorithm, AlgorithmInfo};

mod utils;

/// The most commonly used Types and Functions of this crate
pub mod prelude {
    pub use crate::{
        algorithms::{run, run_timed, Algorithm},
        neighbors::{ManhattanNeighborhood, MooreNeighborhood, Neighborhood},
        AlgorithmResult, AlgorithmStep, Cell, CellType, Coordinate, Cost, Grid, GridConfig,
        StepKind,
    };
}
