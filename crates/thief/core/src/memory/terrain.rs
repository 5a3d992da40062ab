use crate::grid::{Cell, GRID_SIZE, TerrainCode};
use crate::sensor::VisionWindow;

const CELLS: usize = (GRID_SIZE * GRID_SIZE) as usize;

/// Last known terrain code of every cell of the grid.
///
/// The memory only fills up: a cell that left [`TerrainCode::UNKNOWN`] never
/// returns to it, even when a wall hides it from a later vision window.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TerrainMemory {
    cells: Box<[TerrainCode; CELLS]>,
}

impl TerrainMemory {
    pub fn new() -> Self {
        Self {
            cells: Box::new([TerrainCode::UNKNOWN; CELLS]),
        }
    }

    /// Code remembered for `cell`, or `None` outside the grid.
    pub fn get(&self, cell: Cell) -> Option<TerrainCode> {
        cell.index().map(|index| self.cells[index])
    }

    /// Overwrites a single cell. Out-of-grid cells and unknown codes are
    /// ignored so the memory stays monotonic.
    pub fn set(&mut self, cell: Cell, code: TerrainCode) -> bool {
        match cell.index() {
            Some(index) if code.is_known() => {
                self.cells[index] = code;
                true
            }
            _ => false,
        }
    }

    /// Folds the current vision window into memory.
    ///
    /// Every in-grid cell the window reports with an informative code is
    /// overwritten with the newest code; cells reported as not visible keep
    /// whatever was remembered. The agent's own cell is always recorded as
    /// [`TerrainCode::EMPTY`]. Returns how many cells went from unknown to
    /// known.
    pub fn memorize(&mut self, window: &VisionWindow) -> usize {
        let mut discovered = 0;
        for (cell, code) in window.cells() {
            let was_unknown = self.is_unknown(cell);
            if self.set(cell, code) && was_unknown {
                discovered += 1;
            }
        }
        let center = window.center();
        if self.is_unknown(center) {
            discovered += 1;
        }
        self.set(center, TerrainCode::EMPTY);
        discovered
    }

    pub fn is_unknown(&self, cell: Cell) -> bool {
        self.get(cell).is_some_and(TerrainCode::is_unknown)
    }

    /// Traversable for planning, unknown cells included.
    pub fn is_traversable(&self, cell: Cell) -> bool {
        self.get(cell).is_some_and(TerrainCode::is_traversable)
    }

    pub fn is_known_passable(&self, cell: Cell) -> bool {
        self.get(cell).is_some_and(TerrainCode::is_known_passable)
    }

    /// Every cell with its remembered code, row-major.
    pub fn iter(&self) -> impl Iterator<Item = (Cell, TerrainCode)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(index, &code)| (Cell::from_index(index), code))
    }

    pub fn unknown_cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.iter()
            .filter(|(_, code)| code.is_unknown())
            .map(|(cell, _)| cell)
    }

    /// Known cells the agent could stand on.
    pub fn passable_cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.iter()
            .filter(|(_, code)| code.is_known_passable())
            .map(|(cell, _)| cell)
    }

    pub fn known_count(&self) -> usize {
        self.cells.iter().filter(|code| code.is_known()).count()
    }
}

impl Default for TerrainMemory {
    fn default() -> Self {
        Self::new()
    }
}
