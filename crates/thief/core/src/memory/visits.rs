use crate::grid::{Cell, GRID_SIZE};

const CELLS: usize = (GRID_SIZE * GRID_SIZE) as usize;

/// Per-cell count of the ticks the agent spent standing there.
///
/// Only consulted when planning fails: the fallback step prefers the
/// neighbour the agent has visited least.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VisitMap {
    counts: Box<[u32; CELLS]>,
}

impl VisitMap {
    pub fn new() -> Self {
        Self {
            counts: Box::new([0; CELLS]),
        }
    }

    pub fn record(&mut self, cell: Cell) {
        if let Some(index) = cell.index() {
            self.counts[index] = self.counts[index].saturating_add(1);
        }
    }

    pub fn count(&self, cell: Cell) -> u32 {
        cell.index().map_or(0, |index| self.counts[index])
    }
}

impl Default for VisitMap {
    fn default() -> Self {
        Self::new()
    }
}
