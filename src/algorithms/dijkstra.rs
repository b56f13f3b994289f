use crate::{
    build_result, neighbors::ManhattanNeighborhood, reconstruct_path, AlgorithmResult, Coordinate,
    Grid, PointMap, PointSet, PriorityQueue,
};

/// Searches the Grid using [Dijkstra's Algorithm](https://en.wikipedia.org/wiki/Dijkstra%27s_algorithm).
///
/// The queue is ordered by the Cost so far. Entering a Cell costs that Cell's weight, so the
/// returned Path has the lowest possible Cost. Queue entries of Cells that were settled in the
/// meantime are skipped.
pub fn dijkstra_search(grid: &Grid, start: Coordinate, end: Coordinate) -> AlgorithmResult {
    let neighborhood = ManhattanNeighborhood::new(grid.rows(), grid.cols());

    let mut costs = PointMap::default();
    let mut prev = PointMap::default();
    let mut settled = PointSet::default();
    let mut visited_in_order = vec![];
    let mut next = PriorityQueue::new();

    costs.insert(start, 0);
    next.push(start, 0);

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
                next.push(other, other_cost);
            }
        }
    }

    build_result(visited_in_order, vec![])
}
