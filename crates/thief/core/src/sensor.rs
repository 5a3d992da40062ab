//! Sensor contract with the host engine.
//!
//! The host exposes raw integers: a position, a 5×5 vision window and a 3×3
//! scent window (both with the center omitted), and the number of coins held.
//! [`Observation::capture`] validates those readings once per tick and turns
//! them into typed windows the rest of the agent works with.

use crate::error::AgentError;
use crate::grid::{Cell, TerrainCode};

/// Number of readings in the vision window (5×5 minus the center).
pub const VISION_CELLS: usize = 24;

/// Number of readings in the scent window (3×3 minus the center).
pub const SCENT_CELLS: usize = 8;

/// Readings the host engine provides every tick.
pub trait Sensor {
    /// Current `(x, y)` position of the agent.
    fn position(&self) -> (i32, i32);

    /// Terrain codes of the 5×5 window around the agent, row-major, center
    /// omitted. `-2` marks a cell that is not visible this tick.
    fn vision(&self) -> Vec<i32>;

    /// Scent intensities of the 3×3 window around the agent, row-major,
    /// center omitted. `0` means no scent.
    fn scent(&self) -> Vec<i32>;

    fn coins(&self) -> u32;
}

/// Row-major offsets of a square window of the given radius, center omitted.
fn window_offsets(radius: i32) -> impl Iterator<Item = (i32, i32)> {
    (-radius..=radius)
        .flat_map(move |d_row| (-radius..=radius).map(move |d_col| (d_row, d_col)))
        .filter(|&offset| offset != (0, 0))
}

/// The 5×5 vision window centered on the agent.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VisionWindow {
    center: Cell,
    codes: [TerrainCode; VISION_CELLS],
}

impl VisionWindow {
    pub const RADIUS: i32 = 2;

    pub fn new(center: Cell, raw: &[i32]) -> Result<Self, AgentError> {
        if raw.len() != VISION_CELLS {
            return Err(AgentError::VisionSize {
                expected: VISION_CELLS,
                actual: raw.len(),
            });
        }
        let mut codes = [TerrainCode::UNKNOWN; VISION_CELLS];
        for (slot, &code) in codes.iter_mut().zip(raw) {
            *slot = TerrainCode(code);
        }
        Ok(Self { center, codes })
    }

    pub fn center(&self) -> Cell {
        self.center
    }

    /// Every observed cell with its code, in scan order (row-major from the
    /// top-left of the window). Cells may lie outside the grid.
    pub fn cells(&self) -> impl Iterator<Item = (Cell, TerrainCode)> + '_ {
        window_offsets(Self::RADIUS)
            .zip(self.codes.iter().copied())
            .map(|((d_row, d_col), code)| (self.center.offset(d_row, d_col), code))
    }

    /// Code reported for `cell`. The center is always [`TerrainCode::EMPTY`];
    /// cells outside the window return `None`.
    pub fn code_at(&self, cell: Cell) -> Option<TerrainCode> {
        if cell == self.center {
            return Some(TerrainCode::EMPTY);
        }
        if !self.contains(cell) {
            return None;
        }
        self.cells()
            .find_map(|(observed, code)| (observed == cell).then_some(code))
    }

    /// Whether `cell` lies within the window, center included.
    pub fn contains(&self, cell: Cell) -> bool {
        self.center.row.abs_diff(cell.row) <= Self::RADIUS as u32
            && self.center.col.abs_diff(cell.col) <= Self::RADIUS as u32
    }
}

/// The 3×3 scent window centered on the agent.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScentWindow {
    center: Cell,
    readings: [i32; SCENT_CELLS],
}

impl ScentWindow {
    pub const RADIUS: i32 = 1;

    pub fn new(center: Cell, raw: &[i32]) -> Result<Self, AgentError> {
        let readings: [i32; SCENT_CELLS] =
            raw.try_into().map_err(|_| AgentError::ScentSize {
                expected: SCENT_CELLS,
                actual: raw.len(),
            })?;
        Ok(Self { center, readings })
    }

    pub fn cells(&self) -> impl Iterator<Item = (Cell, i32)> + '_ {
        window_offsets(Self::RADIUS)
            .zip(self.readings.iter().copied())
            .map(|((d_row, d_col), reading)| (self.center.offset(d_row, d_col), reading))
    }

    pub fn is_empty(&self) -> bool {
        self.readings.iter().all(|&reading| reading <= 0)
    }
}

/// Validated sensor readings for one tick.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Observation {
    pub position: Cell,
    pub vision: VisionWindow,
    pub scent: ScentWindow,
    pub coins: u32,
}

impl Observation {
    pub fn capture<S: Sensor + ?Sized>(sensor: &S) -> Result<Self, AgentError> {
        let (x, y) = sensor.position();
        let position = Cell::from_xy(x, y);
        if !position.in_bounds() {
            return Err(AgentError::PositionOutOfBounds { x, y });
        }

        Ok(Self {
            position,
            vision: VisionWindow::new(position, &sensor.vision())?,
            scent: ScentWindow::new(position, &sensor.scent())?,
            coins: sensor.coins(),
        })
    }
}
