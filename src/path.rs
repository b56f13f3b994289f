use crate::{Coordinate, Cost, Grid, PointMap};

/// Walks the predecessor map `prev` from `end` back to `start`.
///
/// Returns the Path from `start` to `end`, both included, or an empty Path if the chain of
/// predecessors never reaches `start`.
///
/// ## Examples
/// ```
/// # use trace_pathfinding::{reconstruct_path, Coordinate, PointMap};
/// let (a, b, c) = (Coordinate::new(0, 0), Coordinate::new(0, 1), Coordinate::new(1, 1));
/// let mut prev = PointMap::default();
/// prev.insert(b, a);
/// prev.insert(c, b);
///
/// assert_eq!(reconstruct_path(&prev, a, c), vec![a, b, c]);
/// assert_eq!(reconstruct_path(&prev, a, a), vec![a]);
/// assert!(reconstruct_path(&prev, c, a).is_empty());
/// ```
pub fn reconstruct_path(
    prev: &PointMap<Coordinate>,
    start: Coordinate,
    end: Coordinate,
) -> Vec<Coordinate> {
    let mut steps = vec![end];
    let mut current = end;

    while current != start {
        match prev.get(&current) {
            // every Cell has at most one predecessor, so a chain longer than the map is a loop
            Some(&previous) if steps.len() <= prev.len() => {
                steps.push(previous);
                current = previous;
            }
            _ => return Vec::new(),
        }
    }
    steps.reverse();
    steps
}

/// The total Cost of walking `path` on `grid`: the sum of the weights of every Cell that is
/// entered, which excludes the first one.
///
/// ## Panics
/// if the Path leaves the Grid
pub fn path_cost(grid: &Grid, path: &[Coordinate]) -> Cost {
    path.iter().skip(1).map(|&coord| grid.weight(coord)).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn broken_chain() {
        let mut prev = PointMap::default();
        prev.insert(Coordinate::new(0, 2), Coordinate::new(0, 1));
        let path = reconstruct_path(&prev, Coordinate::new(0, 0), Coordinate::new(0, 2));
        assert!(path.is_empty());
    }

    #[test]
    fn looping_chain() {
        let (a, b) = (Coordinate::new(3, 3), Coordinate::new(3, 4));
        let mut prev = PointMap::default();
        prev.insert(a, b);
        prev.insert(b, a);
        assert!(reconstruct_path(&prev, Coordinate::new(0, 0), a).is_empty());
    }

    #[test]
    fn cost_skips_first_cell() {
        let grid: Grid = "9.3".parse().unwrap();
        let path: Vec<_> = (0..3).map(|col| Coordinate::new(0, col)).collect();
        assert_eq!(path_cost(&grid, &path), 1 + 3);
        assert_eq!(path_cost(&grid, &path[..1]), 0);
        assert_eq!(path_cost(&grid, &[]), 0);
    }
}
