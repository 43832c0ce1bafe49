use super::{GridPath, PathSearchError};
use crate::grid::{CellIndex, VoxelGrid};
use crate::math::{Point, Real};
use crate::utils::hashmap::{Entry, HashMap};
use alloc::collections::VecDeque;
use alloc::vec;
use alloc::vec::Vec;
use na::Vector3;

/// The six face-adjacent neighbours, in the order they are explored.
const NEIGHBOR_OFFSETS: [[i32; 3]; 6] = [
    [-1, 0, 0],
    [0, 1, 0],
    [1, 0, 0],
    [0, -1, 0],
    [0, 0, -1],
    [0, 0, 1],
];

/// When the search considers that it has reached the end cell.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum GoalAcceptance {
    /// The end cell is accepted as soon as it is generated as the neighbour of
    /// an expanded cell, without checking whether it is walkable.
    ///
    /// The end cell was already probed, so this only makes a difference when
    /// it has no solid cell in its 3×3×2 neighbourhood.
    #[default]
    OnGeneration,
    /// The end cell is accepted only if it passes the same tests as any other
    /// cell the search expands to.
    Validated,
}

/// Breadth-first search of walkable routes through a fully built grid.
///
/// The pathfinder only borrows the grid, which therefore can’t be modified
/// while a search is running.
#[derive(Copy, Clone, Debug)]
pub struct GridPathfinder<'a> {
    grid: &'a VoxelGrid,
    goal_acceptance: GoalAcceptance,
}

impl<'a> GridPathfinder<'a> {
    /// Creates a pathfinder searching the given grid with the default
    /// [`GoalAcceptance::OnGeneration`] policy.
    pub fn new(grid: &'a VoxelGrid) -> Self {
        Self {
            grid,
            goal_acceptance: GoalAcceptance::default(),
        }
    }

    /// Sets when the search considers that it reached the end cell.
    pub fn with_goal_acceptance(mut self, goal_acceptance: GoalAcceptance) -> Self {
        self.goal_acceptance = goal_acceptance;
        self
    }

    /// The searched grid.
    #[inline]
    pub fn grid(&self) -> &'a VoxelGrid {
        self.grid
    }

    /// The goal acceptance policy of this pathfinder.
    #[inline]
    pub fn goal_acceptance(&self) -> GoalAcceptance {
        self.goal_acceptance
    }

    /// Finds a route between two world-space positions.
    ///
    /// Both positions are snapped onto the ground with [`VoxelGrid::probe`],
    /// then connected with [`GridPathfinder::find_path_between_cells`].
    pub fn find_path(
        &self,
        start: &Point<Real>,
        end: &Point<Real>,
    ) -> Result<GridPath, PathSearchError> {
        let start = self
            .grid
            .probe(start)
            .ok_or(PathSearchError::StartNotGrounded)?;
        let end = self
            .grid
            .probe(end)
            .ok_or(PathSearchError::EndNotGrounded)?;
        self.find_path_between_cells(start, end)
    }

    /// Finds a route with the fewest moves between two cells.
    ///
    /// Every cell of the route except, depending on the goal acceptance
    /// policy, the end cell is stayable (see [`VoxelGrid::is_stayable`]).
    /// The start cell itself isn’t checked. If `start == end`, the path only
    /// contains that cell.
    pub fn find_path_between_cells(
        &self,
        start: CellIndex,
        end: CellIndex,
    ) -> Result<GridPath, PathSearchError> {
        if start == end {
            return Ok(GridPath::new(vec![start]));
        }

        // Maps each visited cell to the cell it was reached from.
        let mut predecessors = HashMap::default();
        let mut queue = VecDeque::new();
        let _ = predecessors.insert(start, start);
        queue.push_back(start);

        while let Some(current) = queue.pop_front() {
            for offset in NEIGHBOR_OFFSETS {
                let neighbor = current + Vector3::from(offset);
                let expandable = !predecessors.contains_key(&neighbor)
                    && self.grid.is_stayable(neighbor);

                if neighbor == end
                    && (expandable || self.goal_acceptance == GoalAcceptance::OnGeneration)
                {
                    if let Entry::Vacant(entry) = predecessors.entry(end) {
                        let _ = entry.insert(current);
                    }

                    return Ok(reconstruct_path(&predecessors, start, end));
                }

                if expandable {
                    let _ = predecessors.insert(neighbor, current);
                    queue.push_back(neighbor);
                }
            }
        }

        Err(PathSearchError::Unreachable { start, end })
    }
}

fn reconstruct_path(
    predecessors: &HashMap<CellIndex, CellIndex>,
    start: CellIndex,
    end: CellIndex,
) -> GridPath {
    let mut cells = Vec::new();
    let mut cell = end;
    cells.push(cell);

    while cell != start {
        match predecessors.get(&cell) {
            Some(prev) => {
                cell = *prev;
                cells.push(cell);
            }
            None => break,
        }
    }

    cells.reverse();
    GridPath::new(cells)
}
