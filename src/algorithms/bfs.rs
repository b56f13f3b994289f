use crate::{
    build_result, neighbors::ManhattanNeighborhood, reconstruct_path, AlgorithmResult, Coordinate,
    Grid, PointMap, PointSet,
};
use std::collections::VecDeque;

/// Searches the Grid with a [Breadth-First Search](https://en.wikipedia.org/wiki/Breadth-first_search).
///
/// Cells are marked as visited when they are queued, so every Cell is queued at most once and its
/// predecessor is the Cell that discovered it first. The search stops as soon as `end` leaves the
/// queue. Weights are ignored: the Path has the fewest possible steps, not the lowest Cost.
pub fn breadth_first_search(grid: &Grid, start: Coordinate, end: Coordinate) -> AlgorithmResult {
    let neighborhood = ManhattanNeighborhood::new(grid.rows(), grid.cols());

    let mut visited = PointSet::default();
    let mut prev = PointMap::default();
    let mut visited_in_order = vec![];
    let mut queue = VecDeque::new();

    visited.insert(start);
    queue.push_back(start);

    let mut all_neighbors = vec![];

    while let Some(current) = queue.pop_front() {
        visited_in_order.push(current);

        if current == end {
            let path = reconstruct_path(&prev, start, end);
            return build_result(visited_in_order, path);
        }

        grid.walkable_neighbors(&neighborhood, current, &mut all_neighbors);
        for &other in all_neighbors.iter() {
            if visited.insert(other) {
                prev.insert(other, current);
                queue.push_back(other);
            }
        }
    }

    build_result(visited_in_order, vec![])
}
