use crate::{path_cost, Coordinate, Cost, Grid};

/// What a replayed step shows
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum StepKind {
    /// the Cells were settled by the search
    Visit,
    /// the Cells belong to the final Path
    Path,
}

/// A single frame of the replay of a search
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AlgorithmStep {
    /// what the step shows
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub kind: StepKind,
    /// the Cells that change in this step
    pub cells: Vec<Coordinate>,
}

impl AlgorithmStep {
    /// A step that marks `coord` as settled
    pub fn visit(coord: Coordinate) -> AlgorithmStep {
        AlgorithmStep {
            kind: StepKind::Visit,
            cells: vec![coord],
        }
    }

    /// A step that marks `coord` as part of the Path
    pub fn path(coord: Coordinate) -> AlgorithmStep {
        AlgorithmStep {
            kind: StepKind::Path,
            cells: vec![coord],
        }
    }
}

/// Everything a search produced.
///
/// `steps` holds one [`Visit`](StepKind::Visit) step per settled Cell in the order they were
/// settled, followed by one [`Path`](StepKind::Path) step per Cell of `path` if a Path was found.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct AlgorithmResult {
    /// the replay of the search
    pub steps: Vec<AlgorithmStep>,
    /// the Path from start to end, both included. Empty if `found` is `false`
    pub path: Vec<Coordinate>,
    /// `true` if the end was reached
    pub found: bool,
    /// the number of distinct Cells the search settled
    pub visited_count: usize,
    /// the number of Cells in `path`
    pub path_length: usize,
}

impl AlgorithmResult {
    /// A result without any visited Cells or Path
    pub fn not_found() -> AlgorithmResult {
        build_result(Vec::new(), Vec::new())
    }

    /// The settled Cells, in the order they were settled
    pub fn visited(&self) -> impl Iterator<Item = Coordinate> + '_ {
        self.cells_of(StepKind::Visit)
    }

    /// The Cells of the Path, in the order they are replayed
    pub fn path_steps(&self) -> impl Iterator<Item = Coordinate> + '_ {
        self.cells_of(StepKind::Path)
    }

    fn cells_of(&self, kind: StepKind) -> impl Iterator<Item = Coordinate> + '_ {
        self.steps
            .iter()
            .filter(move |step| step.kind == kind)
            .flat_map(|step| step.cells.iter().copied())
    }

    /// The total Cost of the Path on `grid`. See [`path_cost`]
    pub fn path_cost(&self, grid: &Grid) -> Cost {
        path_cost(grid, &self.path)
    }
}

/// Turns the order in which a search settled its Cells and the Path it found into an
/// [`AlgorithmResult`].
///
/// An empty `path` means that no Path was found. This function knows nothing about the
/// algorithm that produced its input; every search ends here.
///
/// ## Examples
/// ```
/// # use trace_pathfinding::{build_result, Coordinate, StepKind};
/// let (a, b) = (Coordinate::new(0, 0), Coordinate::new(0, 1));
/// let result = build_result(vec![a, b], vec![a, b]);
///
/// assert!(result.found);
/// assert_eq!((result.visited_count, result.path_length), (2, 2));
/// let kinds: Vec<_> = result.steps.iter().map(|step| step.kind).collect();
/// assert_eq!(kinds, [StepKind::Visit, StepKind::Visit, StepKind::Path, StepKind::Path]);
///
/// let result = build_result(vec![a], vec![]);
/// assert!(!result.found);
/// assert_eq!(result.steps.len(), 1);
/// ```
pub fn build_result(visited_in_order: Vec<Coordinate>, path: Vec<Coordinate>) -> AlgorithmResult {
    let found = !path.is_empty();

    let mut steps = Vec::with_capacity(visited_in_order.len() + path.len());
    steps.extend(visited_in_order.iter().copied().map(AlgorithmStep::visit));
    steps.extend(path.iter().copied().map(AlgorithmStep::path));

    AlgorithmResult {
        steps,
        found,
        visited_count: visited_in_order.len(),
        path_length: path.len(),
        path,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn visits_come_before_path() {
        let cells: Vec<_> = (0..4).map(|col| Coordinate::new(1, col)).collect();
        let result = build_result(cells.clone(), vec![cells[0], cells[3]]);

        assert_eq!(result.visited().collect::<Vec<_>>(), cells);
        assert_eq!(
            result.path_steps().collect::<Vec<_>>(),
            vec![cells[0], cells[3]]
        );
        let first_path = result
            .steps
            .iter()
            .position(|step| step.kind == StepKind::Path)
            .unwrap();
        assert!(result.steps[first_path..]
            .iter()
            .all(|step| step.kind == StepKind::Path));
        assert!(result.steps.iter().all(|step| step.cells.len() == 1));
    }

    #[test]
    fn not_found_is_empty() {
        let result = AlgorithmResult::not_found();
        assert!(!result.found);
        assert!(result.steps.is_empty());
        assert!(result.path.is_empty());
        assert_eq!((result.visited_count, result.path_length), (0, 0));
    }
}
