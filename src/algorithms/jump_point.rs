use crate::{
    build_result,
    neighbors::{ManhattanNeighborhood, Neighborhood},
    reconstruct_path,
    utils::{get_in_dir, straight_run, Dir},
    AlgorithmResult, Coordinate, Grid, PointMap, PointSet, PriorityQueue,
};

/// Searches the Grid with a 4-directional [Jump Point Search](https://en.wikipedia.org/wiki/Jump_point_search).
///
/// Works like [`a_star_search`](super::a_star_search), but instead of stepping to its direct
/// neighbors, every expanded Cell walks in a straight line in each direction until it reaches
/// a jump point: `end`, a Cell with a forced neighbor, or (when moving vertically) a Cell from
/// which a horizontal walk finds a jump point. Only jump points enter the queue.
///
/// The Cells skipped over by a jump are still part of the trace, in the order they were walked,
/// so a replay shows the full runs. Every Cell appears in the trace at most once.
///
/// ## Weights
/// A jump costs the Manhattan Distance it covers, regardless of the weights of the Cells on the
/// way. On Grids with weighted Cells this search can return a Path with fewer steps but a higher
/// Cost than [`dijkstra_search`](super::dijkstra_search). Use one of the weighted searches when
/// the Cost matters.
pub fn jump_point_search(grid: &Grid, start: Coordinate, end: Coordinate) -> AlgorithmResult {
    let neighborhood = ManhattanNeighborhood::new(grid.rows(), grid.cols());

    let mut costs = PointMap::default();
    let mut prev = PointMap::default();
    let mut closed = PointSet::default();
    let mut traced = PointSet::default();
    let mut visited_in_order = vec![];
    let mut next = PriorityQueue::new();

    costs.insert(start, 0);
    next.push(start, neighborhood.heuristic(start, end));

    while let Some(current) = next.pop() {
        if !closed.insert(current) {
            continue;
        }
        if traced.insert(current) {
            visited_in_order.push(current);
        }

        if current == end {
            let jump_points = reconstruct_path(&prev, start, end);
            return build_result(visited_in_order, interpolate_path(&jump_points));
        }

        let current_cost = costs[&current];

        for dir in Dir::all() {
            let Some(jump_point) = jump(grid, current, dir, end) else {
                continue;
            };
            let other_cost = current_cost + current.manhattan(jump_point);
            if costs
                .get(&jump_point)
                .map_or(true, |&prev_cost| other_cost < prev_cost)
            {
                costs.insert(jump_point, other_cost);
                prev.insert(jump_point, current);
                next.push(jump_point, other_cost + neighborhood.heuristic(jump_point, end));

                for skipped in straight_run(current, jump_point) {
                    if !closed.contains(&skipped) && traced.insert(skipped) {
                        visited_in_order.push(skipped);
                    }
                }
            }
        }
    }

    build_result(visited_in_order, vec![])
}

/// Walks from `from` in `dir` until a jump point is found.
///
/// Returns `None` if a wall or the edge of the Grid comes first.
fn jump(grid: &Grid, from: Coordinate, dir: Dir, end: Coordinate) -> Option<Coordinate> {
    let size = grid.size();
    let mut current = from;
    loop {
        let next = get_in_dir(current, dir, size)?;
        if !grid.is_walkable(next) {
            return None;
        }
        if next == end || has_forced_neighbor(grid, next, dir) {
            return Some(next);
        }
        if dir.is_vertical()
            && dir
                .perpendicular()
                .into_iter()
                .any(|side| jump(grid, next, side, end).is_some())
        {
            return Some(next);
        }
        current = next;
    }
}

/// `true` if a Cell beside `pos` is open while the Cell beside the previous position on the same
/// side is blocked, so that reaching it requires turning at `pos`.
fn has_forced_neighbor(grid: &Grid, pos: Coordinate, dir: Dir) -> bool {
    let size = grid.size();
    let behind = get_in_dir(pos, dir.opposite(), size);
    dir.perpendicular().into_iter().any(|side| {
        let beside = get_in_dir(pos, side, size).map_or(false, |c| grid.is_walkable(c));
        let beside_behind = behind
            .and_then(|b| get_in_dir(b, side, size))
            .map_or(false, |c| grid.is_walkable(c));
        beside && !beside_behind
    })
}

/// Expands a chain of jump points into the full Path, Cell by Cell.
fn interpolate_path(jump_points: &[Coordinate]) -> Vec<Coordinate> {
    let mut path = Vec::with_capacity(jump_points.len());
    for (i, &point) in jump_points.iter().enumerate() {
        if i > 0 {
            path.extend(straight_run(jump_points[i - 1], point));
        }
        path.push(point);
    }
    path
}
