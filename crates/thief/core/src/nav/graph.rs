use std::collections::BTreeMap;

use arrayvec::ArrayVec;

use crate::grid::{Cell, Direction};
use crate::memory::TerrainMemory;
use crate::sensor::VisionWindow;

/// Directed edge to a 4-connected neighbour.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Edge {
    pub to: Cell,
    /// Direction travelled from the edge's source to reach `to`.
    pub direction: Direction,
}

/// Graph of traversable cells keyed by [`Cell`].
///
/// An edge `u → v` exists iff `v` is an in-grid 4-neighbour of `u` and both
/// cells are traversable. Adjacency is therefore symmetric, with opposite
/// directions on the two edges. Nodes are kept ordered so iteration, and
/// with it every seeded decision, is reproducible.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NavigationGraph {
    adjacency: BTreeMap<Cell, ArrayVec<Edge, 4>>,
}

impl NavigationGraph {
    /// Builds the graph over the whole remembered grid.
    pub fn from_memory(memory: &TerrainMemory) -> Self {
        Self::build(Cell::all(), |cell| memory.is_traversable(cell))
    }

    /// Builds the graph over the current 5×5 vision window only.
    ///
    /// Cheaper than [`NavigationGraph::from_memory`] and based on what is
    /// visible right now, which is what pursuit needs. Cells hidden this tick
    /// are left out.
    pub fn from_vision(window: &VisionWindow) -> Self {
        let cells = window
            .cells()
            .map(|(cell, _)| cell)
            .chain(std::iter::once(window.center()));
        Self::build(cells, |cell| {
            cell.in_bounds()
                && window
                    .code_at(cell)
                    .is_some_and(|code| code.is_known_passable())
        })
    }

    fn build(cells: impl IntoIterator<Item = Cell>, passable: impl Fn(Cell) -> bool) -> Self {
        let mut adjacency = BTreeMap::new();
        for cell in cells {
            if !passable(cell) {
                continue;
            }
            let edges: ArrayVec<Edge, 4> = Direction::ALL
                .into_iter()
                .filter_map(|direction| {
                    cell.neighbor(direction)
                        .filter(|&to| passable(to))
                        .map(|to| Edge { to, direction })
                })
                .collect();
            adjacency.insert(cell, edges);
        }
        Self { adjacency }
    }

    pub fn contains(&self, cell: Cell) -> bool {
        self.adjacency.contains_key(&cell)
    }

    /// Outgoing edges of `cell`; empty when the cell is not a node.
    pub fn neighbors(&self, cell: Cell) -> &[Edge] {
        self.adjacency
            .get(&cell)
            .map(|edges| edges.as_slice())
            .unwrap_or(&[])
    }

    /// Direction of the edge `from → to`, if there is one.
    pub fn direction_between(&self, from: Cell, to: Cell) -> Option<Direction> {
        self.neighbors(from)
            .iter()
            .find(|edge| edge.to == to)
            .map(|edge| edge.direction)
    }

    pub fn nodes(&self) -> impl Iterator<Item = Cell> + '_ {
        self.adjacency.keys().copied()
    }

    /// Every edge as `(from, edge)`.
    pub fn edges(&self) -> impl Iterator<Item = (Cell, Edge)> + '_ {
        self.adjacency
            .iter()
            .flat_map(|(&from, edges)| edges.iter().map(move |&edge| (from, edge)))
    }

    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(|edges| edges.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::TerrainCode;
    use crate::sensor::VISION_CELLS;

    #[test]
    fn unknown_memory_is_fully_connected() {
        let graph = NavigationGraph::from_memory(&TerrainMemory::new());
        assert_eq!(graph.node_count(), 900);
        // 30 rows × 29 horizontal links, twice over for both axes and directions.
        assert_eq!(graph.edge_count(), 2 * 2 * 30 * 29);
    }

    #[test]
    fn corridor_edges_carry_directions() {
        let mut memory = TerrainMemory::new();
        memory.set(Cell::new(4, 4), TerrainCode::EMPTY);
        memory.set(Cell::new(4, 5), TerrainCode::EMPTY);
        memory.set(Cell::new(5, 5), TerrainCode(100));
        memory.set(Cell::new(3, 5), TerrainCode::WALL);

        let graph = NavigationGraph::from_memory(&memory);

        assert_eq!(
            graph.direction_between(Cell::new(4, 4), Cell::new(4, 5)),
            Some(Direction::East)
        );
        assert_eq!(
            graph.direction_between(Cell::new(4, 5), Cell::new(4, 4)),
            Some(Direction::West)
        );
        assert_eq!(
            graph.direction_between(Cell::new(4, 5), Cell::new(5, 5)),
            Some(Direction::South)
        );
        assert_eq!(
            graph.direction_between(Cell::new(5, 5), Cell::new(4, 5)),
            Some(Direction::North)
        );
        assert!(!graph.contains(Cell::new(3, 5)));
        assert_eq!(
            graph.direction_between(Cell::new(4, 5), Cell::new(3, 5)),
            None
        );
    }

    #[test]
    fn vision_graph_stays_inside_window() {
        let window = VisionWindow::new(Cell::new(10, 10), &[0; VISION_CELLS]).unwrap();
        let graph = NavigationGraph::from_vision(&window);

        assert_eq!(graph.node_count(), 25);
        assert!(graph.contains(Cell::new(10, 10)));
        assert!(!graph.contains(Cell::new(13, 10)));
        // Border cells of the window only link inwards and sideways.
        assert_eq!(graph.neighbors(Cell::new(8, 8)).len(), 2);
        assert_eq!(graph.neighbors(Cell::new(10, 10)).len(), 4);
    }

    #[test]
    fn vision_graph_skips_hidden_and_blocked_cells() {
        let mut raw = [0; VISION_CELLS];
        raw[7] = TerrainCode::WALL.0; // (9, 10), directly north
        raw[0] = TerrainCode::UNKNOWN.0; // (8, 8), hidden
        let window = VisionWindow::new(Cell::new(10, 10), &raw).unwrap();
        let graph = NavigationGraph::from_vision(&window);

        assert!(!graph.contains(Cell::new(9, 10)));
        assert!(!graph.contains(Cell::new(8, 8)));
        assert_eq!(
            graph.direction_between(Cell::new(10, 10), Cell::new(9, 10)),
            None
        );
    }
}
