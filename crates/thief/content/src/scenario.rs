//! Parsed scenario layout.
//!
//! A scenario is a square grid written as text rows, one glyph per cell:
//!
//! | glyph | meaning           |
//! |-------|-------------------|
//! | `.`   | empty floor       |
//! | `#`   | wall              |
//! | `B`   | bank              |
//! | `c`   | coin              |
//! | `p`   | power-up          |
//! | `T`   | thief spawn       |
//! | `S`   | saver spawn       |
//!
//! Spawn glyphs sit on empty floor.

use thief_core::{Cell, GRID_SIZE, TerrainCode};

/// Largest number of savers a scenario can hold; each one needs its own
/// target code in steps of ten.
pub const MAX_SAVERS: usize = 10;

/// Static content of a single cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum Tile {
    #[default]
    Empty,
    Wall,
    Bank,
    Coin,
    Power,
}

impl Tile {
    pub const fn code(self) -> TerrainCode {
        match self {
            Tile::Empty => TerrainCode::EMPTY,
            Tile::Wall => TerrainCode::WALL,
            Tile::Bank => TerrainCode::BANK,
            Tile::Coin => TerrainCode::COIN,
            Tile::Power => TerrainCode::POWER,
        }
    }

    pub const fn is_walkable(self) -> bool {
        matches!(self, Tile::Empty)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LayoutError {
    #[error("layout has {actual} rows, expected {expected}")]
    RowCount { expected: usize, actual: usize },

    #[error("row {row} has {actual} cells, expected {expected}")]
    RowWidth {
        row: usize,
        expected: usize,
        actual: usize,
    },

    #[error("unknown glyph {glyph:?} at row {row}, col {col}")]
    UnknownGlyph { row: usize, col: usize, glyph: char },

    #[error("layout must contain exactly one thief, found {0}")]
    ThiefCount(usize),

    #[error("layout has {actual} savers, at most {max} are supported")]
    TooManySavers { max: usize, actual: usize },
}

/// A fully validated scenario.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scenario {
    pub name: String,
    /// Number of ticks the simulation runs for.
    pub ticks: u32,
    /// Coins a saver carries into each theft.
    pub saver_coins: u32,
    pub thief: Cell,
    pub savers: Vec<Cell>,
    tiles: Vec<Tile>,
}

impl Scenario {
    /// Parses text rows into a scenario, checking shape, glyphs and spawns.
    pub fn from_rows<S: AsRef<str>>(
        name: impl Into<String>,
        ticks: u32,
        saver_coins: u32,
        rows: &[S],
    ) -> Result<Self, LayoutError> {
        let size = GRID_SIZE as usize;
        if rows.len() != size {
            return Err(LayoutError::RowCount {
                expected: size,
                actual: rows.len(),
            });
        }

        let mut tiles = Vec::with_capacity(size * size);
        let mut thieves = Vec::new();
        let mut savers = Vec::new();

        for (row, line) in rows.iter().enumerate() {
            let glyphs: Vec<char> = line.as_ref().chars().collect();
            if glyphs.len() != size {
                return Err(LayoutError::RowWidth {
                    row,
                    expected: size,
                    actual: glyphs.len(),
                });
            }

            for (col, glyph) in glyphs.into_iter().enumerate() {
                let cell = Cell::new(row as i32, col as i32);
                let tile = match glyph {
                    '.' => Tile::Empty,
                    '#' => Tile::Wall,
                    'B' => Tile::Bank,
                    'c' => Tile::Coin,
                    'p' => Tile::Power,
                    'T' => {
                        thieves.push(cell);
                        Tile::Empty
                    }
                    'S' => {
                        savers.push(cell);
                        Tile::Empty
                    }
                    glyph => return Err(LayoutError::UnknownGlyph { row, col, glyph }),
                };
                tiles.push(tile);
            }
        }

        let &[thief] = thieves.as_slice() else {
            return Err(LayoutError::ThiefCount(thieves.len()));
        };
        if savers.len() > MAX_SAVERS {
            return Err(LayoutError::TooManySavers {
                max: MAX_SAVERS,
                actual: savers.len(),
            });
        }

        Ok(Self {
            name: name.into(),
            ticks,
            saver_coins,
            thief,
            savers,
            tiles,
        })
    }

    /// Static tile at `cell`, or `None` outside the grid.
    pub fn tile(&self, cell: Cell) -> Option<Tile> {
        cell.index().map(|index| self.tiles[index])
    }

    /// Target code the saver spawned `index`-th carries: 100, 110, 120...
    pub fn saver_code(index: usize) -> TerrainCode {
        TerrainCode(TerrainCode::TARGET_MIN + 10 * index as i32)
    }
}
