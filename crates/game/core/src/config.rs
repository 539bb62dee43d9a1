use crate::state::SpriteKey;

/// Game configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameConfig {
    /// Visual key stamped onto ladders placed by the player.
    pub ladder_sprite: SpriteKey,
    /// Upper bound for the player's health meter.
    pub player_max_health: u32,
}

impl GameConfig {
    pub const DEFAULT_PLAYER_MAX_HEALTH: u32 = 3;

    pub fn new() -> Self {
        Self {
            ladder_sprite: SpriteKey::LADDER,
            player_max_health: Self::DEFAULT_PLAYER_MAX_HEALTH,
        }
    }

    pub fn with_player_max_health(player_max_health: u32) -> Self {
        Self {
            player_max_health,
            ..Self::new()
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}
