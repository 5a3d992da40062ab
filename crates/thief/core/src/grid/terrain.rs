use std::fmt;

/// Classification of a single cell as reported by the vision sensor.
///
/// Codes are opaque integers owned by the host engine. The agent only needs
/// to know which ones are sentinels, which ones block movement, and which
/// ones are pursuable targets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TerrainCode(pub i32);

impl TerrainCode {
    /// Never observed, or not visible this tick when it arrives from vision.
    pub const UNKNOWN: Self = Self(-2);
    /// Observed position whose content was hidden from view.
    pub const NO_VISION: Self = Self(-1);
    pub const EMPTY: Self = Self(0);
    pub const WALL: Self = Self(1);
    pub const BANK: Self = Self(3);
    pub const COIN: Self = Self(4);
    pub const POWER: Self = Self(5);

    /// Range of codes used by pursuable targets (savers).
    pub const TARGET_MIN: i32 = 100;
    pub const TARGET_MAX: i32 = 199;

    pub const fn is_unknown(self) -> bool {
        self.0 == Self::UNKNOWN.0
    }

    pub const fn is_known(self) -> bool {
        !self.is_unknown()
    }

    pub const fn is_target(self) -> bool {
        self.0 >= Self::TARGET_MIN && self.0 <= Self::TARGET_MAX
    }

    pub const fn is_thief(self) -> bool {
        matches!(self.0, 200 | 210 | 220 | 230)
    }

    /// Whether the agent may plan a step onto a cell with this code.
    ///
    /// Unknown cells count as traversable: exploration plans optimistically
    /// through territory it has not seen yet.
    pub const fn is_traversable(self) -> bool {
        !matches!(self.0, -1 | 1 | 3 | 4 | 5) && !self.is_thief()
    }

    /// Observed and traversable.
    pub const fn is_known_passable(self) -> bool {
        self.is_known() && self.is_traversable()
    }
}

impl Default for TerrainCode {
    fn default() -> Self {
        Self::UNKNOWN
    }
}

impl From<i32> for TerrainCode {
    fn from(code: i32) -> Self {
        Self(code)
    }
}

impl fmt::Display for TerrainCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
