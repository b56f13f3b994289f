use crate::{
    build_result, neighbors::ManhattanNeighborhood, AlgorithmResult, Coordinate, Cost, Grid,
};

/// Searches the Grid with the [Bellman-Ford Algorithm](https://en.wikipedia.org/wiki/Bellman%E2%80%93Ford_algorithm).
///
/// Instead of settling Cells one by one, every pass scans all walkable Cells with a known Cost
/// in row-major order and relaxes their neighbors. There are at most `rows * cols - 1` passes,
/// and the search stops early after a pass that improved nothing. The result is the same
/// lowest Cost that [`dijkstra_search`](super::dijkstra_search) finds, at a much higher price.
///
/// The trace lists every Cell the first time its Cost was improved. `start` itself is never
/// improved and therefore not part of it.
pub fn bellman_ford_search(grid: &Grid, start: Coordinate, end: Coordinate) -> AlgorithmResult {
    let neighborhood = ManhattanNeighborhood::new(grid.rows(), grid.cols());
    let cell_count = grid.rows() * grid.cols();

    let mut costs: Vec<Option<Cost>> = vec![None; cell_count];
    let mut prev: Vec<Option<Coordinate>> = vec![None; cell_count];
    let mut traced = vec![false; cell_count];
    let mut visited_in_order = vec![];

    costs[grid.key(start)] = Some(0);

    let mut all_neighbors = vec![];

    for _ in 1..cell_count {
        let mut updated = false;

        for key in 0..cell_count {
            let current = grid.coordinate_of(key);
            let current_cost = match costs[key] {
                Some(cost) if grid.is_walkable(current) => cost,
                _ => continue,
            };

            grid.walkable_neighbors(&neighborhood, current, &mut all_neighbors);
            for &other in all_neighbors.iter() {
                let other_key = grid.key(other);
                let other_cost = current_cost + grid.weight(other);
                if costs[other_key].map_or(true, |prev_cost| other_cost < prev_cost) {
                    costs[other_key] = Some(other_cost);
                    prev[other_key] = Some(current);
                    updated = true;

                    if !traced[other_key] {
                        traced[other_key] = true;
                        visited_in_order.push(other);
                    }
                }
            }
        }

        if !updated {
            break;
        }
    }

    if costs[grid.key(end)].is_none() {
        return build_result(visited_in_order, vec![]);
    }

    let path = walk_back(grid, &prev, start, end);
    build_result(visited_in_order, path)
}

/// Follows `prev` from `end` to `start`. The chain can't be longer than the Grid has Cells.
fn walk_back(
    grid: &Grid,
    prev: &[Option<Coordinate>],
    start: Coordinate,
    end: Coordinate,
) -> Vec<Coordinate> {
    let mut path = vec![end];
    let mut current = end;
    while current != start {
        match prev[grid.key(current)] {
            Some(previous) if path.len() <= prev.len() => {
                path.push(previous);
                current = previous;
            }
            _ => return vec![],
        }
    }
    path.reverse();
    path
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_first_improvement_only() {
        let grid: Grid = "
            S 9 .
            . . .
        "
        .parse()
        .unwrap();
        let result = bellman_ford_search(&grid, Coordinate::new(0, 0), Coordinate::new(0, 2));

        // (1, 1), (1, 2) and (0, 2) are improved again later in the first pass, but traced once
        let visited: Vec<_> = result.visited().map(<(usize, usize)>::from).collect();
        assert_eq!(visited, vec![(1, 0), (0, 1), (1, 1), (0, 2), (1, 2)]);

        assert!(result.found);
        assert_eq!(result.path_cost(&grid), 4);
        assert_eq!(result.path_length, 5);
    }

    #[test]
    fn start_is_not_traced() {
        let grid: Grid = "S . . E".parse().unwrap();
        let result = bellman_ford_search(&grid, Coordinate::new(0, 0), Coordinate::new(0, 3));

        assert!(!result.visited().any(|coord| coord == Coordinate::new(0, 0)));
        assert_eq!(result.visited_count, 3);
        assert_eq!(result.path_length, 4);

        let result = bellman_ford_search(&grid, Coordinate::new(0, 1), Coordinate::new(0, 1));
        assert!(result.found);
        assert_eq!(result.path, vec![Coordinate::new(0, 1)]);
    }

    #[test]
    fn unreachable_goal() {
        let grid: Grid = "
            S # .
            . # E
        "
        .parse()
        .unwrap();
        let result = bellman_ford_search(&grid, Coordinate::new(0, 0), Coordinate::new(1, 2));

        assert!(!result.found);
        assert!(result.path.is_empty());
        assert_eq!(result.visited_count, 1);
    }

    #[test]
    fn single_cell_grid() {
        let grid = Grid::new(1, 1);
        let result = bellman_ford_search(&grid, Coordinate::new(0, 0), Coordinate::new(0, 0));
        assert!(result.found);
        assert_eq!(result.path_length, 1);
        assert_eq!(result.visited_count, 0);
    }
}
