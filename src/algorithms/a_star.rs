use crate::{
    build_result,
    neighbors::{ManhattanNeighborhood, Neighborhood},
    reconstruct_path, AlgorithmResult, Coordinate, Grid, PointMap, PointSet, PriorityQueue,
};

/// Searches the Grid using the [A* Algorithm](https://en.wikipedia.org/wiki/A*_search_algorithm).
///
/// Works like [`dijkstra_search`](super::dijkstra_search), except that the queue is ordered by
/// the Cost so far plus the Manhattan Distance to `end`. Since every step costs at least 1, that
/// estimate never overshoots and the Path still has the lowest possible Cost.
pub fn a_star_search(grid: &Grid, start: Coordinate, end: Coordinate) -> AlgorithmResult {
    let neighborhood = ManhattanNeighborhood::new(grid.rows(), grid.cols());

    let mut costs = PointMap::default();
    let mut prev = PointMap::default();
    let mut settled = PointSet::default();
    let mut visited_in_order = vec![];
    let mut next = PriorityQueue::new();

    costs.insert(start, 0);
    next.push(start, neighborhood.heuristic(start, end));

    let mut all_neighbors = vec![];

    while let Some(current) = next.pop() {
        if !settled.insert(current) {
            continue;
        }
        visited_in_order.push(current);

        if current == end {
            let path = reconstruct_path(&prev, start, end);
            return build_result(visited_in_order, path);
        }

        let current_cost = costs[&current];

        grid.walkable_neighbors(&neighborhood, current, &mut all_neighbors);
        for &other in all_neighbors.iter() {
            let other_cost = current_cost + grid.weight(other);
            if costs.get(&other).map_or(true, |&prev_cost| other_cost < prev_cost) {
                costs.insert(other, other_cost);
                prev.insert(other, current);
                next.push(other, other_cost + neighborhood.heuristic(other, end));
            }
        }
    }

    build_result(visited_in_order, vec![])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::dijkstra_search;

    #[test]
    fn unreachable_goal() {
        let grid: Grid = "
            S # . . .
            . # # # #
            . 9 . . .
            . 9 . # .
            . . . # E
        "
        .parse()
        .unwrap();

        let result = a_star_search(&grid, Coordinate::new(0, 0), Coordinate::new(0, 2));
        assert!(!result.found);
    }

    #[test]
    fn basic() {
        let grid: Grid = "
            S # . . .
            . # # # #
            . 9 . . .
            . 9 . # .
            . . . # E
        "
        .parse()
        .unwrap();
        let result = a_star_search(&grid, Coordinate::new(0, 0), Coordinate::new(4, 4));

        assert!(result.found);
        assert_eq!(result.path_cost(&grid), 12);
    }

    #[test]
    fn settles_fewer_cells_than_dijkstra() {
        let grid = Grid::new(15, 15);
        let start = Coordinate::new(7, 0);
        let end = Coordinate::new(7, 14);

        let a_star = a_star_search(&grid, start, end);
        let dijkstra = dijkstra_search(&grid, start, end);

        assert_eq!(a_star.path_length, dijkstra.path_length);
        assert!(a_star.visited_count < dijkstra.visited_count);
    }
}
