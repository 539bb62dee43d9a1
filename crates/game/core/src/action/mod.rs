//! Player commands and their state transitions.
//!
//! Every command the session accepts maps to one action here: horizontal
//! steps (with obstacle climbing and gravity), ladder traversal, digging,
//! and ladder placement. Blocked or out-of-bounds gameplay situations are
//! not errors; they are absorbed as no-ops and encoded in the outcome
//! value. An `Err` from a transition means an internal invariant was
//! violated.
mod climb;
mod dig;
mod ladder;
mod movement;

pub use climb::ClimbAction;
pub use dig::{DigAction, DigOutcome};
pub use ladder::{PlaceLadderAction, PlaceLadderError, PlaceOutcome};
pub use movement::{MoveAction, MoveOutcome};

use crate::config::GameConfig;
use crate::state::GameState;

/// Defines how a concrete action variant mutates game state.
///
/// Implementors can override the validation hooks to surface pre- and
/// post-conditions that must hold around the state mutation.
pub trait ActionTransition {
    type Error;
    type Outcome;

    /// Validates pre-conditions using the state **before** mutation.
    fn pre_validate(&self, _state: &GameState, _config: &GameConfig) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Applies the action by mutating the game state directly.
    fn apply(
        &self,
        state: &mut GameState,
        config: &GameConfig,
    ) -> Result<Self::Outcome, Self::Error>;

    /// Validates post-conditions using the state **after** mutation.
    fn post_validate(&self, _state: &GameState, _config: &GameConfig) -> Result<(), Self::Error> {
        Ok(())
    }
}

/// Top-level command enum accepted by the engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Action {
    Move(MoveAction),
    Climb(ClimbAction),
    Dig(DigAction),
    PlaceLadder(PlaceLadderAction),
}

/// Outcome of a single executed command.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ActionOutcome {
    Move(MoveOutcome),
    Climb(MoveOutcome),
    Dig(DigOutcome),
    PlaceLadder(PlaceOutcome),
}

impl ActionOutcome {
    /// The position change carried by this outcome, if the command can move
    /// the player at all.
    pub fn movement(&self) -> Option<MoveOutcome> {
        match self {
            ActionOutcome::Move(movement) | ActionOutcome::Climb(movement) => Some(*movement),
            ActionOutcome::Dig(dig) => Some(dig.movement),
            ActionOutcome::PlaceLadder(_) => None,
        }
    }
}

/// Direction of a dig command. Row 0 is the top of the grid, so `Down`
/// increases the row.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// `(row, column)` delta of one step in this direction.
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }

    /// Digging in this direction can remove the digger's support; removing a
    /// ceiling block never does.
    pub fn affects_support(self) -> bool {
        !matches!(self, Direction::Up)
    }
}

/// Direction of a horizontal step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LateralDirection {
    Left,
    Right,
}

impl LateralDirection {
    pub fn delta_column(self) -> i32 {
        match self {
            LateralDirection::Left => -1,
            LateralDirection::Right => 1,
        }
    }
}

/// Direction of a ladder traversal step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum VerticalDirection {
    Up,
    Down,
}

impl VerticalDirection {
    pub fn delta_row(self) -> i32 {
        match self {
            VerticalDirection::Up => -1,
            VerticalDirection::Down => 1,
        }
    }
}
