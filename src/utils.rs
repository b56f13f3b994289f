use crate::Coordinate;

/// The 4 cardinal directions, in the order every search enumerates them.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Dir {
    Up = 0,
    Down = 1,
    Left = 2,
    Right = 3,
}
pub use self::Dir::*;

/// `(row, col)` offsets, indexed by `Dir`
const UNIT_CIRCLE: [(isize, isize); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

impl Dir {
    pub fn all() -> std::iter::Copied<std::slice::Iter<'static, Dir>> {
        [Up, Down, Left, Right].iter().copied()
    }
    pub fn opposite(self) -> Dir {
        match self {
            Up => Down,
            Down => Up,
            Left => Right,
            Right => Left,
        }
    }
    pub fn perpendicular(self) -> [Dir; 2] {
        if self.is_vertical() {
            [Left, Right]
        } else {
            [Up, Down]
        }
    }
    pub fn num(self) -> usize {
        self as usize
    }
    pub fn is_vertical(self) -> bool {
        self == Up || self == Down
    }
    pub fn offset(self) -> (isize, isize) {
        UNIT_CIRCLE[self.num()]
    }
}

/// Moves `pos` by `(d_row, d_col)` if the result stays inside a `rows` x `cols` Grid
pub fn offset_within(
    pos: Coordinate,
    (d_row, d_col): (isize, isize),
    (rows, cols): (usize, usize),
) -> Option<Coordinate> {
    let row = pos.row.checked_add_signed(d_row)?;
    let col = pos.col.checked_add_signed(d_col)?;
    if row < rows && col < cols {
        Some(Coordinate::new(row, col))
    } else {
        None
    }
}

/// The neighboring position in `dir`, if it is inside the Grid
pub fn get_in_dir(pos: Coordinate, dir: Dir, size: (usize, usize)) -> Option<Coordinate> {
    offset_within(pos, dir.offset(), size)
}

/// The Cells strictly between two positions on the same row or column
pub fn straight_run(from: Coordinate, to: Coordinate) -> impl Iterator<Item = Coordinate> {
    let d_row = signum(from.row, to.row);
    let d_col = signum(from.col, to.col);
    let steps = from.manhattan(to);
    (1..steps).map(move |i| {
        let i = i as isize;
        Coordinate::new(
            (from.row as isize + d_row * i) as usize,
            (from.col as isize + d_col * i) as usize,
        )
    })
}

fn signum(from: usize, to: usize) -> isize {
    match from.cmp(&to) {
        std::cmp::Ordering::Less => 1,
        std::cmp::Ordering::Equal => 0,
        std::cmp::Ordering::Greater => -1,
    }
}
