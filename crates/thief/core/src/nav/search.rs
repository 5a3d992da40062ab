use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap, HashSet};

use crate::config::PathCost;
use crate::grid::{Cell, Step};
use crate::rng::RngOracle;

use super::NavigationGraph;

/// Cells from origin to destination, both inclusive.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Path {
    cells: Vec<Cell>,
}

impl Path {
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn origin(&self) -> Option<Cell> {
        self.cells.first().copied()
    }

    pub fn destination(&self) -> Option<Cell> {
        self.cells.last().copied()
    }

    /// The cell reached by the first edge of the path.
    pub fn next_cell(&self) -> Option<Cell> {
        self.cells.get(1).copied()
    }

    /// Step that follows the first edge, or [`Step::Stay`] for a path with a
    /// single node.
    pub fn first_step(&self, graph: &NavigationGraph) -> Step {
        match (self.origin(), self.next_cell()) {
            (Some(from), Some(to)) => graph
                .direction_between(from, to)
                .map_or(Step::Stay, Step::Move),
            _ => Step::Stay,
        }
    }
}

/// Open-set entry. Ordered by priority, then by a random key drawn on
/// insertion, which makes the pick among equal priorities uniform.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
struct OpenEntry {
    priority: u32,
    tie: u32,
    cell: Cell,
}

/// Best-first search over a [`NavigationGraph`] guided by Manhattan distance.
///
/// With [`PathCost::Heuristic`] a discovered node is queued with its distance
/// to the destination only, and its predecessor is fixed when first seen.
/// All edges cost one step and the grid is open enough that this greedy
/// search stays close to shortest. [`PathCost::Accumulated`] adds the path
/// cost so far and re-links a node when a cheaper route reaches it, which is
/// classic A*.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PathFinder {
    cost: PathCost,
}

impl PathFinder {
    pub const fn new(cost: PathCost) -> Self {
        Self { cost }
    }

    /// Searches a path from `origin` to `destination`.
    ///
    /// Returns `None` when the two cells are equal, when `destination` is not
    /// a node of the graph, or when it cannot be reached from `origin`.
    pub fn search<R: RngOracle>(
        &self,
        graph: &NavigationGraph,
        origin: Cell,
        destination: Cell,
        rng: &mut R,
    ) -> Option<Path> {
        if origin == destination || !graph.contains(destination) {
            return None;
        }

        let mut open = BinaryHeap::new();
        let mut cost_so_far: HashMap<Cell, u32> = HashMap::new();
        let mut came_from: HashMap<Cell, Cell> = HashMap::new();
        let mut closed: HashSet<Cell> = HashSet::new();

        cost_so_far.insert(origin, 0);
        open.push(Reverse(OpenEntry {
            priority: 0,
            tie: rng.next_u32(),
            cell: origin,
        }));

        while let Some(Reverse(OpenEntry { cell: current, .. })) = open.pop() {
            if !closed.insert(current) {
                // Superseded entry of an already expanded node.
                continue;
            }
            if current == destination {
                let path = reconstruct(&came_from, origin, destination);
                tracing::trace!(
                    %origin,
                    %destination,
                    length = path.len(),
                    expanded = closed.len(),
                    "path found"
                );
                return Some(path);
            }

            let current_cost = cost_so_far.get(&current).copied().unwrap_or_default();
            for edge in graph.neighbors(current) {
                let next = edge.to;
                if closed.contains(&next) {
                    continue;
                }
                let next_cost = current_cost + 1;
                let priority = match self.cost {
                    PathCost::Heuristic => {
                        if cost_so_far.contains_key(&next) {
                            continue;
                        }
                        next.manhattan(destination)
                    }
                    PathCost::Accumulated => {
                        if cost_so_far.get(&next).is_some_and(|&known| known <= next_cost) {
                            continue;
                        }
                        next_cost + next.manhattan(destination)
                    }
                };
                cost_so_far.insert(next, next_cost);
                came_from.insert(next, current);
                open.push(Reverse(OpenEntry {
                    priority,
                    tie: rng.next_u32(),
                    cell: next,
                }));
            }
        }

        tracing::trace!(%origin, %destination, expanded = closed.len(), "no path");
        None
    }
}

fn reconstruct(came_from: &HashMap<Cell, Cell>, origin: Cell, destination: Cell) -> Path {
    let mut cells = vec![destination];
    let mut current = destination;
    while current != origin {
        match came_from.get(&current) {
            Some(&previous) => {
                cells.push(previous);
                current = previous;
            }
            None => break,
        }
    }
    cells.reverse();
    debug_assert_eq!(cells.first(), Some(&origin), "predecessor chain broken");
    Path { cells }
}
