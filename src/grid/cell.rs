use crate::Cost;

/// What a Cell currently shows.
///
/// Only [`Wall`](CellType::Wall) changes how a search behaves. The other tags are kept for the
/// editor and the renderer, and a search never reads them.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum CellType {
    /// nothing special
    #[default]
    Empty,
    /// can't be entered
    Wall,
    /// where the search starts
    Start,
    /// where the search wants to go
    End,
    /// settled by a replayed search
    Visited,
    /// part of a replayed Path
    Path,
    /// costs more than 1 to enter
    Weight,
}

impl CellType {
    /// `true` for the start and end tags
    pub fn is_endpoint(self) -> bool {
        matches!(self, CellType::Start | CellType::End)
    }

    /// `true` for tags that only exist to show the progress of a search
    pub fn is_trace(self) -> bool {
        matches!(self, CellType::Visited | CellType::Path)
    }
}

/// A single Tile of the Grid
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    /// the tag of the Cell
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub kind: CellType,
    /// the Cost of entering the Cell. Always at least 1
    pub weight: Cost,
}

impl Cell {
    /// An empty Cell with weight 1
    pub const EMPTY: Cell = Cell {
        kind: CellType::Empty,
        weight: 1,
    };

    /// A Cell of the given type with weight 1
    pub const fn new(kind: CellType) -> Cell {
        Cell { kind, weight: 1 }
    }

    /// A [`Weight`](CellType::Weight) Cell that costs `weight` to enter
    pub const fn weighted(weight: Cost) -> Cell {
        Cell {
            kind: CellType::Weight,
            weight,
        }
    }

    /// `true` if the Cell can't be entered
    pub fn is_wall(&self) -> bool {
        self.kind == CellType::Wall
    }
}

impl Default for Cell {
    fn default() -> Cell {
        Cell::EMPTY
    }
}
