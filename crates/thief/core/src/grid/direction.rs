/// Cardinal movement direction.
///
/// The discriminants are the host engine's movement codes and must not be
/// reordered: `1` moves up a row, `2` down a row, `3` right a column and
/// `4` left a column.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
#[repr(u8)]
pub enum Direction {
    North = 1,
    South = 2,
    East = 3,
    West = 4,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
    ];

    /// `(d_row, d_col)` displacement of one step.
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Direction::North => (-1, 0),
            Direction::South => (1, 0),
            Direction::East => (0, 1),
            Direction::West => (0, -1),
        }
    }

    pub const fn code(self) -> u8 {
        self as u8
    }

    pub const fn from_code(code: u8) -> Option<Self> {
        match code {
            1 => Some(Direction::North),
            2 => Some(Direction::South),
            3 => Some(Direction::East),
            4 => Some(Direction::West),
            _ => None,
        }
    }

    pub const fn opposite(self) -> Self {
        match self {
            Direction::North => Direction::South,
            Direction::South => Direction::North,
            Direction::East => Direction::West,
            Direction::West => Direction::East,
        }
    }
}

/// Outcome of one decision tick.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Step {
    /// Code `0`: no movement this tick.
    #[default]
    Stay,
    Move(Direction),
}

impl Step {
    /// Integer consumed by the host engine.
    pub const fn code(self) -> u8 {
        match self {
            Step::Stay => 0,
            Step::Move(direction) => direction.code(),
        }
    }

    pub const fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Step::Stay),
            other => match Direction::from_code(other) {
                Some(direction) => Some(Step::Move(direction)),
                None => None,
            },
        }
    }

    pub const fn direction(self) -> Option<Direction> {
        match self {
            Step::Stay => None,
            Step::Move(direction) => Some(direction),
        }
    }
}

impl From<Direction> for Step {
    fn from(direction: Direction) -> Self {
        Step::Move(direction)
    }
}
