//! Headless grid world hosting a single thief.
//!
//! The world owns the static layout of a [`Scenario`], the thief's position
//! and purse, the savers and the scent trail they leave behind. It answers
//! the agent's [`Sensor`] queries and applies the steps the agent returns.

use thief_content::{Scenario, Tile};
use thief_core::{Cell, Direction, PcgRng, RngOracle, Sensor, Step, TerrainCode};

/// Ticks a scent mark stays readable. A reading of `1` is the freshest.
pub const SCENT_TTL: u8 = 5;

/// A pursuable target wandering the grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Saver {
    pub cell: Cell,
    pub code: TerrainCode,
}

/// What happened to the thief's step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepOutcome {
    Stayed,
    Moved(Cell),
    /// The target cell is off the grid or not walkable.
    Blocked,
    /// The thief bumped into a saver and took its coins.
    Robbed { target: TerrainCode, coins: u32 },
}

#[derive(Clone, Debug)]
pub struct World {
    scenario: Scenario,
    thief: Cell,
    coins: u32,
    savers: Vec<Saver>,
    /// Age of the freshest mark per cell, `0` when there is none.
    scent: Vec<u8>,
    rng: PcgRng,
}

impl World {
    pub fn new(scenario: Scenario, seed: u64) -> Self {
        let savers = scenario
            .savers
            .iter()
            .enumerate()
            .map(|(index, &cell)| Saver {
                cell,
                code: Scenario::saver_code(index),
            })
            .collect();
        let cells = (thief_core::GRID_SIZE * thief_core::GRID_SIZE) as usize;

        Self {
            thief: scenario.thief,
            scenario,
            coins: 0,
            savers,
            scent: vec![0; cells],
            rng: PcgRng::seeded(seed),
        }
    }

    pub fn thief(&self) -> Cell {
        self.thief
    }

    pub fn savers(&self) -> &[Saver] {
        &self.savers
    }

    pub fn scenario(&self) -> &Scenario {
        &self.scenario
    }

    pub fn scent_at(&self, cell: Cell) -> u8 {
        cell.index().map_or(0, |index| self.scent[index])
    }

    fn saver_at(&self, cell: Cell) -> Option<&Saver> {
        self.savers.iter().find(|saver| saver.cell == cell)
    }

    fn is_walkable(&self, cell: Cell) -> bool {
        self.scenario.tile(cell).is_some_and(Tile::is_walkable)
    }

    /// Code the thief sees at `cell`, ignoring occlusion.
    fn code_at(&self, cell: Cell) -> TerrainCode {
        match self.scenario.tile(cell) {
            None => TerrainCode::NO_VISION,
            Some(tile) => self.saver_at(cell).map_or(tile.code(), |saver| saver.code),
        }
    }

    /// Outer-ring cells are hidden when the cell between them and the thief
    /// is a wall.
    fn is_occluded(&self, d_row: i32, d_col: i32) -> bool {
        if d_row.abs() < 2 && d_col.abs() < 2 {
            return false;
        }
        let between = self.thief.offset(d_row.clamp(-1, 1), d_col.clamp(-1, 1));
        self.scenario.tile(between) == Some(Tile::Wall)
    }

    /// Applies the thief's step for this tick.
    pub fn apply(&mut self, step: Step) -> StepOutcome {
        let Some(direction) = step.direction() else {
            return StepOutcome::Stayed;
        };
        let Some(next) = self.thief.neighbor(direction) else {
            return StepOutcome::Blocked;
        };

        if let Some(saver) = self.saver_at(next) {
            let target = saver.code;
            let coins = self.scenario.saver_coins;
            self.coins = self.coins.saturating_add(coins);
            return StepOutcome::Robbed { target, coins };
        }
        if !self.is_walkable(next) {
            return StepOutcome::Blocked;
        }

        self.thief = next;
        StepOutcome::Moved(next)
    }

    /// Ages the scent trail, then lets every saver wander one cell.
    pub fn advance(&mut self) {
        for mark in self.scent.iter_mut().filter(|mark| **mark > 0) {
            *mark = if *mark >= SCENT_TTL { 0 } else { *mark + 1 };
        }

        for index in 0..self.savers.len() {
            let from = self.savers[index].cell;
            let options: Vec<Cell> = Direction::ALL
                .iter()
                .filter_map(|&direction| from.neighbor(direction))
                .filter(|&cell| {
                    self.is_walkable(cell) && cell != self.thief && self.saver_at(cell).is_none()
                })
                .collect();

            if let Some(&to) = self.rng.choose(&options) {
                self.savers[index].cell = to;
                if let Some(slot) = from.index() {
                    self.scent[slot] = 1;
                }
            }
        }
    }
}

impl Sensor for World {
    fn position(&self) -> (i32, i32) {
        self.thief.to_xy()
    }

    fn vision(&self) -> Vec<i32> {
        let mut codes = Vec::with_capacity(thief_core::VISION_CELLS);
        for d_row in -2..=2 {
            for d_col in -2..=2 {
                if (d_row, d_col) == (0, 0) {
                    continue;
                }
                let cell = self.thief.offset(d_row, d_col);
                let code = if !cell.in_bounds() {
                    TerrainCode::NO_VISION
                } else if self.is_occluded(d_row, d_col) {
                    TerrainCode::UNKNOWN
                } else {
                    self.code_at(cell)
                };
                codes.push(code.0);
            }
        }
        codes
    }

    fn scent(&self) -> Vec<i32> {
        let mut readings = Vec::with_capacity(thief_core::SCENT_CELLS);
        for d_row in -1..=1 {
            for d_col in -1..=1 {
                if (d_row, d_col) != (0, 0) {
                    let cell = self.thief.offset(d_row, d_col);
                    readings.push(i32::from(self.scent_at(cell)));
                }
            }
        }
        readings
    }

    fn coins(&self) -> u32 {
        self.coins
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scenario(edit: impl FnOnce(&mut Vec<String>)) -> Scenario {
        let mut rows = vec![".".repeat(30); 30];
        edit(&mut rows);
        Scenario::from_rows("test", 10, 5, &rows).unwrap()
    }

    fn place(rows: &mut [String], row: usize, col: usize, glyph: char) {
        rows[row].replace_range(col..col + 1, &glyph.to_string());
    }

    #[test]
    fn corner_vision_reports_off_grid_cells() {
        let world = World::new(scenario(|rows| place(rows, 0, 0, 'T')), 1);
        let vision = world.vision();

        assert_eq!(vision.len(), 24);
        // The first two rows of the window lie above the grid.
        assert!(vision[..10].iter().all(|&code| code == -1));
        assert_eq!(vision[10], -1);
        assert_eq!(vision[12], 0);
    }

    #[test]
    fn walls_hide_the_outer_ring() {
        let world = World::new(
            scenario(|rows| {
                place(rows, 10, 10, 'T');
                place(rows, 10, 11, '#');
                place(rows, 10, 12, 'c');
            }),
            1,
        );
        let vision = world.vision();

        // Row-major window, center omitted: (0,+1) is index 12, (0,+2) index 13.
        assert_eq!(vision[12], TerrainCode::WALL.0);
        assert_eq!(vision[13], TerrainCode::UNKNOWN.0);
    }

    #[test]
    fn moving_into_a_saver_robs_it() {
        let mut world = World::new(
            scenario(|rows| {
                place(rows, 4, 4, 'T');
                place(rows, 4, 5, 'S');
            }),
            1,
        );

        let outcome = world.apply(Step::Move(Direction::East));

        assert_eq!(
            outcome,
            StepOutcome::Robbed {
                target: TerrainCode(100),
                coins: 5
            }
        );
        assert_eq!(world.coins(), 5);
        assert_eq!(world.thief(), Cell::new(4, 4));
    }

    #[test]
    fn purse_saturates_instead_of_overflowing() {
        let mut rows = vec![".".repeat(30); 30];
        place(&mut rows, 4, 4, 'T');
        place(&mut rows, 4, 5, 'S');
        let scenario = Scenario::from_rows("rich", 10, u32::MAX, &rows).unwrap();
        let mut world = World::new(scenario, 1);

        world.apply(Step::Move(Direction::East));
        world.apply(Step::Move(Direction::East));

        assert_eq!(world.coins(), u32::MAX);
    }

    #[test]
    fn walls_and_edges_block_the_thief() {
        let mut world = World::new(
            scenario(|rows| {
                place(rows, 0, 0, 'T');
                place(rows, 1, 0, 'B');
            }),
            1,
        );

        assert_eq!(world.apply(Step::Move(Direction::North)), StepOutcome::Blocked);
        assert_eq!(world.apply(Step::Move(Direction::South)), StepOutcome::Blocked);
        assert_eq!(world.apply(Step::Stay), StepOutcome::Stayed);
        assert_eq!(
            world.apply(Step::Move(Direction::East)),
            StepOutcome::Moved(Cell::new(0, 1))
        );
    }

    #[test]
    fn scent_fades_after_its_lifetime() {
        let mut world = World::new(scenario(|rows| place(rows, 0, 0, 'T')), 3);
        let mark = Cell::new(1, 1);
        world.scent[mark.index().unwrap()] = 1;
        assert_eq!(world.scent()[7], 1);

        for age in 2..=SCENT_TTL {
            world.advance();
            assert_eq!(world.scent_at(mark), age);
        }
        world.advance();
        assert_eq!(world.scent_at(mark), 0);
    }

    #[test]
    fn savers_leave_a_fresh_trail() {
        let mut world = World::new(
            scenario(|rows| {
                place(rows, 0, 0, 'T');
                place(rows, 15, 15, 'S');
            }),
            3,
        );

        world.advance();

        assert_ne!(world.savers()[0].cell, Cell::new(15, 15));
        assert_eq!(world.scent_at(Cell::new(15, 15)), 1);
    }
}
