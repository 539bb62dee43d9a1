use std::fmt;

/// Unique identifier for any entity tracked in the state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EntityId(pub u32);

impl EntityId {
    /// Reserved identifier for the controllable player character.
    pub const PLAYER: Self = Self(0);

    #[inline]
    pub const fn is_player(self) -> bool {
        self.0 == Self::PLAYER.0
    }
}

impl Default for EntityId {
    fn default() -> Self {
        Self::PLAYER
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Discrete grid position expressed in cell coordinates. Row 0 is the top of
/// the grid and rows grow downward.
///
/// Signed so that candidate targets one step outside the grid can be computed
/// and rejected by bounds checks instead of underflowing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub row: i32,
    pub column: i32,
}

impl Position {
    pub const ORIGIN: Self = Self { row: 0, column: 0 };

    pub fn new(row: i32, column: i32) -> Self {
        Self { row, column }
    }

    pub fn above(self) -> Self {
        Self::new(self.row - 1, self.column)
    }

    pub fn below(self) -> Self {
        Self::new(self.row + 1, self.column)
    }

    pub fn offset(self, delta_row: i32, delta_column: i32) -> Self {
        Self::new(self.row + delta_row, self.column + delta_column)
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::ORIGIN
    }
}

/// Bounded integer health meter tracked per movable.
///
/// No gameplay rule writes to it yet; the meter is surfaced to the
/// presentation layer and reserved for future hazard logic.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HealthMeter {
    current: u32,
    maximum: u32,
}

impl HealthMeter {
    /// Creates a meter filled to `maximum`.
    pub fn full(maximum: u32) -> Self {
        Self {
            current: maximum,
            maximum,
        }
    }

    pub fn current(&self) -> u32 {
        self.current
    }

    pub fn maximum(&self) -> u32 {
        self.maximum
    }

    /// Sets the current value, clamped to `[0, maximum]`.
    pub fn set_current(&mut self, value: u32) {
        self.current = value.min(self.maximum);
    }

    pub fn is_depleted(&self) -> bool {
        self.current == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn health_meter_clamps_to_maximum() {
        let mut health = HealthMeter::full(3);
        assert_eq!(health.current(), 3);

        health.set_current(10);
        assert_eq!(health.current(), 3);

        health.set_current(0);
        assert!(health.is_depleted());
    }
}
