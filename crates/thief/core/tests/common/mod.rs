#![allow(dead_code)]

use thief_core::{Cell, Direction, GRID_SIZE, SCENT_CELLS, Sensor, Step, TerrainCode};

/// Static grid world that reports everything in range, without occlusion.
pub struct TestWorld {
    grid: Vec<i32>,
    pub position: Cell,
    pub coins: u32,
    pub scent: Vec<i32>,
}

impl TestWorld {
    pub fn open(position: Cell) -> Self {
        Self {
            grid: vec![TerrainCode::EMPTY.0; (GRID_SIZE * GRID_SIZE) as usize],
            position,
            coins: 0,
            scent: vec![0; SCENT_CELLS],
        }
    }

    pub fn set(&mut self, cell: Cell, code: TerrainCode) {
        let index = cell.index().expect("cell inside grid");
        self.grid[index] = code.0;
    }

    pub fn code(&self, cell: Cell) -> Option<TerrainCode> {
        cell.index().map(|index| TerrainCode(self.grid[index]))
    }

    /// Applies a step the way a host would: blocked moves leave the agent
    /// in place. Returns whether the agent moved.
    pub fn apply(&mut self, step: Step) -> bool {
        let Some(direction) = step.direction() else {
            return false;
        };
        match self.position.neighbor(direction) {
            Some(next) if self.code(next).is_some_and(TerrainCode::is_known_passable) => {
                self.position = next;
                true
            }
            _ => false,
        }
    }

    pub fn neighbor_code(&self, direction: Direction) -> Option<TerrainCode> {
        self.position
            .neighbor(direction)
            .and_then(|cell| self.code(cell))
    }
}

impl Sensor for TestWorld {
    fn position(&self) -> (i32, i32) {
        self.position.to_xy()
    }

    fn vision(&self) -> Vec<i32> {
        let mut codes = Vec::with_capacity(24);
        for d_row in -2..=2 {
            for d_col in -2..=2 {
                if (d_row, d_col) == (0, 0) {
                    continue;
                }
                let cell = self.position.offset(d_row, d_col);
                codes.push(self.code(cell).map_or(TerrainCode::NO_VISION.0, |code| code.0));
            }
        }
        codes
    }

    fn scent(&self) -> Vec<i32> {
        self.scent.clone()
    }

    fn coins(&self) -> u32 {
        self.coins
    }
}

/// Memory-free layout helper: a square of walls around `(top, left)` with
/// an open interior of `size × size` cells.
pub fn wall_ring(world: &mut TestWorld, top: i32, left: i32, size: i32) {
    for row in top..=top + size + 1 {
        for col in left..=left + size + 1 {
            let on_edge =
                row == top || row == top + size + 1 || col == left || col == left + size + 1;
            if on_edge {
                world.set(Cell::new(row, col), TerrainCode::WALL);
            }
        }
    }
}
