use crate::config::GameConfig;
use crate::state::{GameState, GridError, Position, Resource};

use super::ActionTransition;

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PlaceLadderError {
    #[error(transparent)]
    Grid(#[from] GridError),

    #[error("cell at {position:?} holds no ladder after placement")]
    LadderMissing { position: Position },
}

/// Stamps a ladder onto the player's current cell, overwriting whatever was
/// there.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlaceLadderAction;

/// Where the ladder landed and what it overwrote.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlaceOutcome {
    pub position: Position,
    pub replaced: Option<Resource>,
}

impl ActionTransition for PlaceLadderAction {
    type Error = PlaceLadderError;
    type Outcome = PlaceOutcome;

    fn apply(
        &self,
        state: &mut GameState,
        config: &GameConfig,
    ) -> Result<PlaceOutcome, PlaceLadderError> {
        let position = state.player.position();
        let cell = state.world.grid.cell_mut(position)?;
        let replaced = cell.resource().copied();
        cell.set_resource(Some(Resource::ladder(config.ladder_sprite)));

        Ok(PlaceOutcome { position, replaced })
    }

    fn post_validate(&self, state: &GameState, _config: &GameConfig) -> Result<(), PlaceLadderError> {
        let position = state.player.position();
        if state.world.grid.cell(position)?.has_ladder() {
            Ok(())
        } else {
            Err(PlaceLadderError::LadderMissing { position })
        }
    }
}
