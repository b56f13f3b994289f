use crate::{
    build_result, neighbors::ManhattanNeighborhood, reconstruct_path, AlgorithmResult, Coordinate,
    Grid, PointMap, PointSet,
};

/// One half of the bidirectional search
struct Frontier {
    origin: Coordinate,
    queue: Vec<Coordinate>,
    visited: PointSet,
    prev: PointMap<Coordinate>,
}

impl Frontier {
    fn new(origin: Coordinate) -> Frontier {
        let mut visited = PointSet::default();
        visited.insert(origin);
        Frontier {
            origin,
            queue: vec![origin],
            visited,
            prev: PointMap::default(),
        }
    }

    /// Expands every Cell of the current layer, until a neighbor turns out to be already visited
    /// by the `other` side. That neighbor is returned as the meeting point.
    fn expand_layer(
        &mut self,
        grid: &Grid,
        neighborhood: &ManhattanNeighborhood,
        other: &PointSet,
        visited_in_order: &mut Vec<Coordinate>,
    ) -> Option<Coordinate> {
        let layer = std::mem::take(&mut self.queue);
        let mut all_neighbors = vec![];

        for current in layer {
            visited_in_order.push(current);

            grid.walkable_neighbors(neighborhood, current, &mut all_neighbors);
            for &other_id in all_neighbors.iter() {
                if other.contains(&other_id) {
                    if !self.visited.contains(&other_id) {
                        self.prev.insert(other_id, current);
                    }
                    return Some(other_id);
                }
                if self.visited.insert(other_id) {
                    self.prev.insert(other_id, current);
                    self.queue.push(other_id);
                }
            }
        }
        None
    }
}

/// Searches the Grid with two Breadth-First Searches, one from `start` and one from `end`.
///
/// The two sides take turns expanding one full layer each. The first Cell that one side
/// discovers while the other side has already visited it joins the two halves, and the search
/// stops right there. Every expanded Cell of either side ends up in the same trace.
///
/// Like [`breadth_first_search`](super::breadth_first_search), the Path has the fewest possible
/// steps and weights are ignored.
pub fn bidirectional_bfs(grid: &Grid, start: Coordinate, end: Coordinate) -> AlgorithmResult {
    if start == end {
        return build_result(vec![start], vec![start]);
    }
    let neighborhood = ManhattanNeighborhood::new(grid.rows(), grid.cols());

    let mut forward = Frontier::new(start);
    let mut backward = Frontier::new(end);
    let mut visited_in_order = vec![];

    while !forward.queue.is_empty() || !backward.queue.is_empty() {
        if !forward.queue.is_empty() {
            let meeting = forward.expand_layer(
                grid,
                &neighborhood,
                &backward.visited,
                &mut visited_in_order,
            );
            if let Some(meeting) = meeting {
                let path = join_at(&forward, &backward, meeting);
                return build_result(visited_in_order, path);
            }
        }
        if !backward.queue.is_empty() {
            let meeting = backward.expand_layer(
                grid,
                &neighborhood,
                &forward.visited,
                &mut visited_in_order,
            );
            if let Some(meeting) = meeting {
                let path = join_at(&forward, &backward, meeting);
                return build_result(visited_in_order, path);
            }
        }
    }

    build_result(visited_in_order, vec![])
}

/// `start -> meeting` from the forward side, followed by the backward side's chain
/// `meeting -> end` without `meeting` itself
fn join_at(forward: &Frontier, backward: &Frontier, meeting: Coordinate) -> Vec<Coordinate> {
    let mut path = reconstruct_path(&forward.prev, forward.origin, meeting);
    if path.is_empty() {
        return path;
    }

    let mut current = meeting;
    while current != backward.origin {
        match backward.prev.get(&current) {
            Some(&next) if path.len() <= forward.prev.len() + backward.prev.len() + 1 => {
                path.push(next);
                current = next;
            }
            _ => return Vec::new(),
        }
    }
    path
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_start_and_end() {
        let grid = Grid::new(3, 3);
        let center = Coordinate::new(1, 1);
        let result = bidirectional_bfs(&grid, center, center);
        assert!(result.found);
        assert_eq!(result.path, vec![center]);
        assert_eq!(result.visited_count, 1);
    }

    #[test]
    fn meets_in_the_middle() {
        let grid = Grid::new(1, 7);
        let start = Coordinate::new(0, 0);
        let end = Coordinate::new(0, 6);
        let result = bidirectional_bfs(&grid, start, end);

        let expected: Vec<_> = (0..7).map(|col| Coordinate::new(0, col)).collect();
        assert_eq!(result.path, expected);

        // both sides grow towards each other, one layer at a time
        assert_eq!(
            result.visited().collect::<Vec<_>>(),
            vec![
                Coordinate::new(0, 0),
                Coordinate::new(0, 6),
                Coordinate::new(0, 1),
                Coordinate::new(0, 5),
                Coordinate::new(0, 2),
                Coordinate::new(0, 4),
            ]
        );
    }

    #[test]
    fn meeting_at_the_end() {
        let grid = Grid::new(2, 2);
        let start = Coordinate::new(0, 0);
        let end = Coordinate::new(0, 1);
        let result = bidirectional_bfs(&grid, start, end);
        assert_eq!(result.path, vec![start, end]);
        assert_eq!(result.visited_count, 1);
    }

    #[test]
    fn path_around_walls() {
        let grid: Grid = "
            S . . . .
            # # # # .
            . . . . .
            . # # # #
            . . . . E
        "
        .parse()
        .unwrap();
        let start = Coordinate::new(0, 0);
        let end = Coordinate::new(4, 4);
        let result = bidirectional_bfs(&grid, start, end);

        assert_eq!(result.path_length, 17);
        assert_eq!(result.path.first(), Some(&start));
        assert_eq!(result.path.last(), Some(&end));
        for pair in result.path.windows(2) {
            assert_eq!(pair[0].manhattan(pair[1]), 1);
            assert!(grid.is_walkable(pair[1]));
        }
    }
}
