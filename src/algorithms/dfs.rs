use crate::{
    build_result, neighbors::ManhattanNeighborhood, reconstruct_path, AlgorithmResult, Coordinate,
    Grid, PointMap, PointSet,
};

/// Searches the Grid with a [Depth-First Search](https://en.wikipedia.org/wiki/Depth-first_search).
///
/// Cells are marked as visited when they are popped from the stack, so a Cell may be pushed
/// several times before that. The Path is whatever the exploration happened to follow and is
/// usually far from the shortest one.
pub fn depth_first_search(grid: &Grid, start: Coordinate, end: Coordinate) -> AlgorithmResult {
    let neighborhood = ManhattanNeighborhood::new(grid.rows(), grid.cols());

    let mut visited = PointSet::default();
    let mut prev = PointMap::default();
    let mut visited_in_order = vec![];
    let mut stack = vec![start];

    let mut all_neighbors = vec![];

    while let Some(current) = stack.pop() {
        if !visited.insert(current) {
            continue;
        }
        visited_in_order.push(current);

        if current == end {
            let path = reconstruct_path(&prev, start, end);
            return build_result(visited_in_order, path);
        }

        grid.walkable_neighbors(&neighborhood, current, &mut all_neighbors);
        for &other in all_neighbors.iter() {
            if !visited.contains(&other) {
                // the latest push is popped first, so it owns the predecessor
                prev.insert(other, current);
                stack.push(other);
            }
        }
    }

    build_result(visited_in_order, vec![])
}
