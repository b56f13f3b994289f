use crate::{
    build_result,
    neighbors::{ManhattanNeighborhood, Neighborhood},
    reconstruct_path, AlgorithmResult, Coordinate, Grid, PointMap, PointSet, PriorityQueue,
};

/// Searches the Grid with a [Greedy Best-First Search](https://en.wikipedia.org/wiki/Best-first_search).
///
/// The queue is ordered only by the Manhattan Distance to `end`; the Cost so far and the weights
/// play no role. Cells are marked as visited when they are queued, so each one is explored at most
/// once. This usually heads straight for the goal but gives no guarantee about the Path.
pub fn greedy_best_first_search(
    grid: &Grid,
    start: Coordinate,
    end: Coordinate,
) -> AlgorithmResult {
    let neighborhood = ManhattanNeighborhood::new(grid.rows(), grid.cols());

    let mut visited = PointSet::default();
    let mut prev = PointMap::default();
    let mut visited_in_order = vec![];
    let mut next = PriorityQueue::new();

    visited.insert(start);
    next.push(start, neighborhood.heuristic(start, end));

    let mut all_neighbors = vec![];

    while let Some(current) = next.pop() {
        visited_in_order.push(current);

        if current == end {
            let path = reconstruct_path(&prev, start, end);
            return build_result(visited_in_order, path);
        }

        grid.walkable_neighbors(&neighborhood, current, &mut all_neighbors);
        for &other in all_neighbors.iter() {
            if visited.insert(other) {
                prev.insert(other, current);
                next.push(other, neighborhood.heuristic(other, end));
            }
        }
    }

    build_result(visited_in_order, vec![])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::breadth_first_search;

    #[test]
    fn heads_straight_for_the_goal() {
        let grid = Grid::new(9, 9);
        let start = Coordinate::new(4, 0);
        let end = Coordinate::new(4, 8);
        let result = greedy_best_first_search(&grid, start, end);

        assert_eq!(result.path_length, 9);
        assert_eq!(result.visited_count, 9);
    }

    #[test]
    fn walks_into_dead_ends() {
        // the pocket around the start faces the goal, so greedy explores it first
        let grid: Grid = "
            . . . . . . .
            . # # # # # .
            . . S . . # E
            . # # # # # .
            . . . . . . .
        "
        .parse()
        .unwrap();
        let start = Coordinate::new(2, 2);
        let end = Coordinate::new(2, 6);

        let greedy = greedy_best_first_search(&grid, start, end);
        let bfs = breadth_first_search(&grid, start, end);

        assert!(greedy.found);
        assert!(greedy.path_length >= bfs.path_length);
        assert!(greedy
            .visited()
            .take(3)
            .all(|coord| coord.row == 2 && coord.col >= 2));
    }
}
