//! The Grid model that every search reads from.

mod cell;
pub use self::cell::{Cell, CellType};

mod config;
pub use self::config::GridConfig;

mod coordinate;
pub use self::coordinate::Coordinate;

use crate::{
    neighbors::{ManhattanNeighborhood, MooreNeighborhood, Neighborhood},
    AlgorithmStep, Cost, GridError, StepKind,
};
use std::{
    fmt,
    ops::{Index, IndexMut},
    str::FromStr,
};

/// A rectangular Grid of [`Cell`]s.
///
/// The searches only ever borrow a Grid immutably, so one snapshot can be shared between any
/// number of searches, including concurrent ones.
///
/// ## Examples
/// ```
/// # use trace_pathfinding::prelude::*;
/// let mut grid = Grid::new(3, 4);
/// grid.set_cell_type(Coordinate::new(1, 1), CellType::Wall).unwrap();
/// grid.set_weight(Coordinate::new(1, 2), 7).unwrap();
///
/// assert_eq!(grid.size(), (3, 4));
/// assert!(!grid.is_walkable(Coordinate::new(1, 1)));
/// assert_eq!(grid.weight(Coordinate::new(1, 2)), 7);
/// assert_eq!(grid[Coordinate::new(1, 2)].kind, CellType::Weight);
///
/// // up, down, left, right - minus the wall on the left
/// assert_eq!(
///     grid.neighbors(Coordinate::new(1, 2), false),
///     vec![Coordinate::new(0, 2), Coordinate::new(2, 2), Coordinate::new(1, 3)],
/// );
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawGrid"))]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
    weight_cost: Cost,
}

impl Grid {
    /// Creates a Grid of empty Cells with weight 1
    pub fn new(rows: usize, cols: usize) -> Grid {
        Grid {
            rows,
            cols,
            cells: vec![Cell::EMPTY; rows * cols],
            weight_cost: GridConfig::DEFAULT.weight_cost,
        }
    }

    /// Creates an empty Grid with the start and end placed on their default positions
    /// ```
    /// # use trace_pathfinding::prelude::*;
    /// let grid = Grid::from_config(&GridConfig::default());
    /// assert_eq!(grid.size(), (22, 55));
    /// assert_eq!(grid.find_start(), Some(Coordinate::new(11, 13)));
    /// assert_eq!(grid.find_end(), Some(Coordinate::new(11, 41)));
    /// ```
    pub fn from_config(config: &GridConfig) -> Grid {
        let mut grid = Grid::new(config.rows, config.cols);
        grid.weight_cost = config.weight_cost;
        let (start, end) = (config.default_start(), config.default_end());
        if start != end && grid.contains(start) && grid.contains(end) {
            grid[start] = Cell::new(CellType::Start);
            grid[end] = Cell::new(CellType::End);
        }
        grid
    }

    /// Creates a Grid from a list of rows, which must all have the same length
    /// ```
    /// # use trace_pathfinding::prelude::*;
    /// # use trace_pathfinding::GridError;
    /// let ragged = vec![vec![Cell::EMPTY; 3], vec![Cell::EMPTY; 2]];
    /// assert_eq!(
    ///     Grid::from_rows(ragged),
    ///     Err(GridError::Ragged { row: 1, expected: 3, found: 2 }),
    /// );
    /// ```
    pub fn from_rows(rows: Vec<Vec<Cell>>) -> Result<Grid, GridError> {
        let cols = rows.first().map_or(0, Vec::len);
        if cols == 0 {
            return Err(GridError::Empty);
        }
        let height = rows.len();
        let mut cells = Vec::with_capacity(height * cols);
        for (row, line) in rows.into_iter().enumerate() {
            if line.len() != cols {
                return Err(GridError::Ragged {
                    row,
                    expected: cols,
                    found: line.len(),
                });
            }
            if line.iter().any(|cell| cell.weight == 0) {
                return Err(GridError::ZeroWeight);
            }
            cells.extend(line);
        }
        Ok(Grid {
            rows: height,
            cols,
            cells,
            weight_cost: GridConfig::DEFAULT.weight_cost,
        })
    }

    /// The number of rows
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// The number of columns
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// `(rows, cols)`
    pub fn size(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// `true` if `coord` lies inside the Grid
    pub fn contains(&self, coord: Coordinate) -> bool {
        coord.row < self.rows && coord.col < self.cols
    }

    /// A collision-free index for `coord`: `row * cols + col`.
    ///
    /// Only meaningful for Coordinates inside the Grid.
    pub fn key(&self, coord: Coordinate) -> usize {
        coord.row * self.cols + coord.col
    }

    /// The inverse of [`key`](Grid::key)
    pub fn coordinate_of(&self, key: usize) -> Coordinate {
        Coordinate::new(key / self.cols, key % self.cols)
    }

    /// The Cell at `coord`, or `None` if it is outside the Grid
    pub fn get(&self, coord: Coordinate) -> Option<&Cell> {
        if self.contains(coord) {
            Some(&self.cells[self.key(coord)])
        } else {
            None
        }
    }

    fn get_mut(&mut self, coord: Coordinate) -> Result<&mut Cell, GridError> {
        if self.contains(coord) {
            let key = self.key(coord);
            Ok(&mut self.cells[key])
        } else {
            Err(GridError::OutOfBounds(coord))
        }
    }

    /// `true` if `coord` is inside the Grid and not a wall
    pub fn is_walkable(&self, coord: Coordinate) -> bool {
        self.get(coord).map_or(false, |cell| !cell.is_wall())
    }

    /// What it costs to enter the Cell at `coord`
    ///
    /// ## Panics
    /// if `coord` is outside the Grid
    pub fn weight(&self, coord: Coordinate) -> Cost {
        self[coord].weight
    }

    /// All walkable neighbors of `coord`.
    ///
    /// The order is always up, down, left, right, followed by up-left, up-right, down-left,
    /// down-right if `allow_diagonal` is set. Searches break ties in this order.
    pub fn neighbors(&self, coord: Coordinate, allow_diagonal: bool) -> Vec<Coordinate> {
        let mut neighbors = Vec::with_capacity(8);
        if allow_diagonal {
            let neighborhood = MooreNeighborhood::new(self.rows, self.cols);
            self.walkable_neighbors(&neighborhood, coord, &mut neighbors);
        } else {
            let neighborhood = ManhattanNeighborhood::new(self.rows, self.cols);
            self.walkable_neighbors(&neighborhood, coord, &mut neighbors);
        }
        neighbors
    }

    /// Replaces the content of `target` with the walkable neighbors of `coord` in `neighborhood`
    pub fn walkable_neighbors<N: Neighborhood>(
        &self,
        neighborhood: &N,
        coord: Coordinate,
        target: &mut Vec<Coordinate>,
    ) {
        target.clear();
        neighborhood.get_all_neighbors(coord, target);
        target.retain(|&other| self.is_walkable(other));
    }

    /// The position of the Cell tagged [`Start`](CellType::Start)
    pub fn find_start(&self) -> Option<Coordinate> {
        self.find(CellType::Start)
    }

    /// The position of the Cell tagged [`End`](CellType::End)
    pub fn find_end(&self) -> Option<Coordinate> {
        self.find(CellType::End)
    }

    fn find(&self, kind: CellType) -> Option<Coordinate> {
        self.cells
            .iter()
            .position(|cell| cell.kind == kind)
            .map(|key| self.coordinate_of(key))
    }

    /// Changes the tag of the Cell at `coord`.
    ///
    /// [`Start`](CellType::Start) and [`End`](CellType::End) move the respective endpoint there,
    /// [`Weight`](CellType::Weight) paints the configured weight cost, and every other tag resets
    /// the weight to 1. The start and end themselves can't be painted over.
    pub fn set_cell_type(&mut self, coord: Coordinate, kind: CellType) -> Result<(), GridError> {
        match kind {
            CellType::Start | CellType::End => self.place_endpoint(coord, kind),
            CellType::Weight => self.paint_weight(coord),
            _ => {
                let cell = self.get_mut(coord)?;
                if cell.kind.is_endpoint() {
                    return Err(GridError::Endpoint(coord));
                }
                *cell = Cell::new(kind);
                Ok(())
            }
        }
    }

    /// Marks the Cell at `coord` as a [`Weight`](CellType::Weight) with the configured cost
    pub fn paint_weight(&mut self, coord: Coordinate) -> Result<(), GridError> {
        let weight_cost = self.weight_cost;
        self.set_weight(coord, weight_cost)
    }

    /// Sets the Cost of entering the Cell at `coord`.
    ///
    /// Cells with a weight above 1 are tagged [`Weight`](CellType::Weight), a weight of 1 turns
    /// them back into [`Empty`](CellType::Empty) Cells.
    pub fn set_weight(&mut self, coord: Coordinate, weight: Cost) -> Result<(), GridError> {
        if weight == 0 {
            return Err(GridError::ZeroWeight);
        }
        let cell = self.get_mut(coord)?;
        if cell.kind.is_endpoint() {
            return Err(GridError::Endpoint(coord));
        }
        *cell = if weight > 1 {
            Cell::weighted(weight)
        } else {
            Cell::EMPTY
        };
        Ok(())
    }

    /// Moves the start to `coord`
    pub fn place_start(&mut self, coord: Coordinate) -> Result<(), GridError> {
        self.place_endpoint(coord, CellType::Start)
    }

    /// Moves the end to `coord`
    pub fn place_end(&mut self, coord: Coordinate) -> Result<(), GridError> {
        self.place_endpoint(coord, CellType::End)
    }

    fn place_endpoint(&mut self, coord: Coordinate, kind: CellType) -> Result<(), GridError> {
        let target = *self.get(coord).ok_or(GridError::OutOfBounds(coord))?;
        if target.kind.is_endpoint() && target.kind != kind {
            return Err(GridError::Endpoint(coord));
        }
        if let Some(previous) = self.find(kind) {
            self[previous] = Cell::EMPTY;
        }
        self[coord] = Cell::new(kind);
        Ok(())
    }

    /// Removes all [`Visited`](CellType::Visited) and [`Path`](CellType::Path) tags, keeping
    /// walls, weights and endpoints
    pub fn clear_trace(&mut self) {
        for cell in self.cells.iter_mut().filter(|cell| cell.kind.is_trace()) {
            cell.kind = if cell.weight > 1 {
                CellType::Weight
            } else {
                CellType::Empty
            };
        }
    }

    /// Empties every Cell except the start and end
    pub fn clear(&mut self) {
        for cell in self.cells.iter_mut().filter(|cell| !cell.kind.is_endpoint()) {
            *cell = Cell::EMPTY;
        }
    }

    /// Tags the Cells of a replayed step as [`Visited`](CellType::Visited) or
    /// [`Path`](CellType::Path). The start and end keep their tags, as do Cells outside the Grid.
    /// ```
    /// # use trace_pathfinding::prelude::*;
    /// let mut grid: Grid = "S.E".parse().unwrap();
    /// let result = run(Algorithm::Bfs, &grid, Coordinate::new(0, 0), Coordinate::new(0, 2));
    /// for step in &result.steps {
    ///     grid.apply_step(step);
    /// }
    /// assert_eq!(grid.to_string(), "S*E\n");
    /// ```
    pub fn apply_step(&mut self, step: &AlgorithmStep) {
        let kind = match step.kind {
            StepKind::Visit => CellType::Visited,
            StepKind::Path => CellType::Path,
        };
        for &coord in &step.cells {
            if let Ok(cell) = self.get_mut(coord) {
                if !cell.kind.is_endpoint() {
                    cell.kind = kind;
                }
            }
        }
    }
}

impl Index<Coordinate> for Grid {
    type Output = Cell;
    #[track_caller]
    fn index(&self, coord: Coordinate) -> &Cell {
        assert!(self.contains(coord), "{} is outside of the grid", coord);
        &self.cells[self.key(coord)]
    }
}

impl IndexMut<Coordinate> for Grid {
    #[track_caller]
    fn index_mut(&mut self, coord: Coordinate) -> &mut Cell {
        assert!(self.contains(coord), "{} is outside of the grid", coord);
        let key = self.key(coord);
        &mut self.cells[key]
    }
}

/// Parses a Grid from a text map.
///
/// Every line is a row, and every non-whitespace character a Cell:
/// `.` empty, `#` wall, `S` start, `E` end, `v` visited, `*` path and the digits `1` to `9`
/// for the weight of the Cell. Blank lines are skipped.
impl FromStr for Grid {
    type Err = GridError;
    fn from_str(map: &str) -> Result<Grid, GridError> {
        let rows = map
            .lines()
            .map(|line| line.chars().filter(|c| !c.is_whitespace()).collect::<Vec<_>>())
            .filter(|line| !line.is_empty())
            .enumerate()
            .map(|(row, line)| {
                line.into_iter()
                    .enumerate()
                    .map(|(col, symbol)| parse_cell(symbol, Coordinate::new(row, col)))
                    .collect::<Result<Vec<_>, _>>()
            })
            .collect::<Result<Vec<_>, _>>()?;
        Grid::from_rows(rows)
    }
}

/// The serialized form of a [`Grid`], checked before it becomes one
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawGrid {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
    weight_cost: Cost,
}

#[cfg(feature = "serde")]
impl TryFrom<RawGrid> for Grid {
    type Error = GridError;
    fn try_from(raw: RawGrid) -> Result<Grid, GridError> {
        if raw.rows == 0 || raw.cols == 0 {
            return Err(GridError::Empty);
        }
        if raw.cells.len() != raw.rows * raw.cols {
            return Err(GridError::CellCount {
                rows: raw.rows,
                cols: raw.cols,
                found: raw.cells.len(),
            });
        }
        if raw.weight_cost == 0 || raw.cells.iter().any(|cell| cell.weight == 0) {
            return Err(GridError::ZeroWeight);
        }
        Ok(Grid {
            rows: raw.rows,
            cols: raw.cols,
            cells: raw.cells,
            weight_cost: raw.weight_cost,
        })
    }
}

fn parse_cell(symbol: char, at: Coordinate) -> Result<Cell, GridError> {
    let cell = match symbol {
        '.' => Cell::EMPTY,
        '#' => Cell::new(CellType::Wall),
        'S' => Cell::new(CellType::Start),
        'E' => Cell::new(CellType::End),
        'v' => Cell::new(CellType::Visited),
        '*' => Cell::new(CellType::Path),
        '1' => Cell::EMPTY,
        '2'..='9' => Cell::weighted((symbol as u8 - b'0') as Cost),
        _ => return Err(GridError::UnknownSymbol { symbol, at }),
    };
    Ok(cell)
}

/// Writes the Grid in the same format that [`FromStr`] reads.
///
/// The format only has one symbol per Cell, so it is lossy: weights above 9 are written as `+`,
/// and [`Visited`](CellType::Visited) or [`Path`](CellType::Path) Cells are written as `v` or
/// `*` without their weight. Call [`clear_trace`](Grid::clear_trace) first to keep the weights
/// of a replayed Grid.
impl fmt::Display for Grid {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        for line in self.cells.chunks(self.cols.max(1)) {
            for cell in line {
                let symbol = match cell.kind {
                    CellType::Wall => '#',
                    CellType::Start => 'S',
                    CellType::End => 'E',
                    CellType::Visited => 'v',
                    CellType::Path => '*',
                    CellType::Empty | CellType::Weight => match cell.weight {
                        0 | 1 => '.',
                        w @ 2..=9 => (b'0' + w as u8) as char,
                        _ => '+',
                    },
                };
                write!(fmt, "{}", symbol)?;
            }
            writeln!(fmt)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_and_display() {
        let map = "S.#\n.5E\n";
        let grid: Grid = map.parse().unwrap();
        assert_eq!(grid.size(), (2, 3));
        assert_eq!(grid[Coordinate::new(0, 2)].kind, CellType::Wall);
        assert_eq!(grid[Coordinate::new(1, 1)], Cell::weighted(5));
        assert_eq!(grid.find_start(), Some(Coordinate::new(0, 0)));
        assert_eq!(grid.find_end(), Some(Coordinate::new(1, 2)));
        assert_eq!(grid.to_string(), map);
    }

    #[test]
    fn parse_errors() {
        assert_eq!("".parse::<Grid>(), Err(GridError::Empty));
        assert_eq!(
            "...\n..".parse::<Grid>(),
            Err(GridError::Ragged {
                row: 1,
                expected: 3,
                found: 2
            })
        );
        assert_eq!(
            "..\n.x".parse::<Grid>(),
            Err(GridError::UnknownSymbol {
                symbol: 'x',
                at: Coordinate::new(1, 1)
            })
        );
    }

    #[test]
    fn key_is_collision_free() {
        let grid = Grid::new(7, 13);
        let mut seen = hashbrown::HashSet::new();
        for row in 0..7 {
            for col in 0..13 {
                let coord = Coordinate::new(row, col);
                let key = grid.key(coord);
                assert!(seen.insert(key));
                assert_eq!(grid.coordinate_of(key), coord);
            }
        }
    }

    #[test]
    fn neighbor_order() {
        let grid = Grid::new(3, 3);
        let center = Coordinate::new(1, 1);
        assert_eq!(
            grid.neighbors(center, false),
            vec![
                Coordinate::new(0, 1),
                Coordinate::new(2, 1),
                Coordinate::new(1, 0),
                Coordinate::new(1, 2),
            ]
        );
        assert_eq!(
            grid.neighbors(center, true),
            vec![
                Coordinate::new(0, 1),
                Coordinate::new(2, 1),
                Coordinate::new(1, 0),
                Coordinate::new(1, 2),
                Coordinate::new(0, 0),
                Coordinate::new(0, 2),
                Coordinate::new(2, 0),
                Coordinate::new(2, 2),
            ]
        );
    }

    #[test]
    fn neighbors_skip_walls_and_borders() {
        let grid: Grid = "..\n#.".parse().unwrap();
        assert_eq!(
            grid.neighbors(Coordinate::new(0, 0), false),
            vec![Coordinate::new(0, 1)]
        );
        assert_eq!(
            grid.neighbors(Coordinate::new(0, 0), true),
            vec![Coordinate::new(0, 1), Coordinate::new(1, 1)]
        );
    }

    #[test]
    fn endpoints_move_and_are_protected() {
        let mut grid = Grid::from_config(&GridConfig::with_size(5, 8));
        let start = grid.find_start().unwrap();
        let end = grid.find_end().unwrap();
        assert_eq!((start, end), (Coordinate::new(2, 2), Coordinate::new(2, 6)));

        assert_eq!(
            grid.set_cell_type(start, CellType::Wall),
            Err(GridError::Endpoint(start))
        );
        assert_eq!(grid.place_start(end), Err(GridError::Endpoint(end)));

        grid.place_start(Coordinate::new(0, 0)).unwrap();
        assert_eq!(grid.find_start(), Some(Coordinate::new(0, 0)));
        assert_eq!(grid[start], Cell::EMPTY);

        assert_eq!(
            grid.place_end(Coordinate::new(9, 9)),
            Err(GridError::OutOfBounds(Coordinate::new(9, 9)))
        );
    }

    #[test]
    fn weights() {
        let mut grid = Grid::new(2, 2);
        let coord = Coordinate::new(1, 0);
        grid.paint_weight(coord).unwrap();
        assert_eq!(grid[coord], Cell::weighted(5));

        grid.set_cell_type(coord, CellType::Wall).unwrap();
        assert_eq!(grid[coord], Cell::new(CellType::Wall));

        assert_eq!(grid.set_weight(coord, 0), Err(GridError::ZeroWeight));
        grid.set_weight(coord, 1).unwrap();
        assert_eq!(grid[coord], Cell::EMPTY);
    }

    #[test]
    fn trace_tags() {
        let mut grid: Grid = "S3.E".parse().unwrap();
        grid.apply_step(&AlgorithmStep::visit(Coordinate::new(0, 0)));
        grid.apply_step(&AlgorithmStep::visit(Coordinate::new(0, 1)));
        grid.apply_step(&AlgorithmStep::path(Coordinate::new(0, 2)));
        assert_eq!(grid.to_string(), "Sv*E\n");

        grid.clear_trace();
        assert_eq!(grid.to_string(), "S3.E\n");

        grid.set_cell_type(Coordinate::new(0, 2), CellType::Wall).unwrap();
        grid.clear();
        assert_eq!(grid.to_string(), "S..E\n");
    }

    #[test]
    fn printing_drops_weights_of_traced_cells() {
        let mut grid: Grid = "S3.E".parse().unwrap();
        grid.apply_step(&AlgorithmStep::visit(Coordinate::new(0, 1)));

        let reparsed: Grid = grid.to_string().parse().unwrap();
        assert_eq!(reparsed.weight(Coordinate::new(0, 1)), 1);
        assert_eq!(grid.weight(Coordinate::new(0, 1)), 3);

        grid.clear_trace();
        let reparsed: Grid = grid.to_string().parse().unwrap();
        assert_eq!(reparsed, grid);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn deserialize_checks_the_size() {
        let grid: Grid = "S.\n#E".parse().unwrap();
        let json = serde_json::to_value(&grid).unwrap();
        let back: Grid = serde_json::from_value(json.clone()).unwrap();
        assert_eq!(back, grid);

        let mut wrong_size = json.clone();
        wrong_size["rows"] = 3.into();
        let err = serde_json::from_value::<Grid>(wrong_size).unwrap_err();
        assert!(err.to_string().contains("a 3x2 grid needs 6 cells, found 4"));

        let mut zero_weight = json;
        zero_weight["cells"][1]["weight"] = 0.into();
        assert!(serde_json::from_value::<Grid>(zero_weight).is_err());
    }
}
