//! Command-driven game session.
use game_core::{
    Action, ActionOutcome, ClimbAction, DigAction, Direction, EntityId, GameConfig, GameEngine,
    GameState, Grid, LateralDirection, MoveAction, PlaceLadderAction, PlayerState,
    VerticalDirection, WorldGenerator,
};
use tracing::{debug, trace};

use crate::error::Result;
use crate::events::{PresentationSink, WorldEvent};

/// Single-session orchestrator around the world engine.
///
/// Commands run synchronously to completion, cascading gravity included,
/// before the next one is accepted; the sink observes a consistent
/// hide → mutate → show sequence for every movement-capable command.
/// Embedders feeding commands from concurrent sources must serialize them
/// in front of the session.
pub struct GameSession<S: PresentationSink> {
    state: GameState,
    config: GameConfig,
    sink: S,
}

impl<S: PresentationSink> GameSession<S> {
    /// Generates the world and reports the initial picture to the sink:
    /// `WorldInitialized`, the player spawn, the health value, and the empty
    /// inventory snapshot.
    pub fn new<G>(generator: &G, config: GameConfig, sink: S) -> Result<Self>
    where
        G: WorldGenerator + ?Sized,
    {
        let state = GameState::generate(generator, &config)?;
        let mut session = Self {
            state,
            config,
            sink,
        };

        debug!(
            width = session.state.world.grid.width(),
            height = session.state.world.grid.height(),
            "world generated"
        );

        session.emit(WorldEvent::WorldInitialized {
            dimensions: session.state.world.grid.dimensions(),
        });
        session.emit(WorldEvent::EntityShown {
            entity: EntityId::PLAYER,
            position: session.state.player.position(),
        });
        let health = session.state.player.movable.health;
        session.emit(WorldEvent::HealthChanged {
            entity: EntityId::PLAYER,
            current: health.current(),
            maximum: health.maximum(),
        });
        session.emit(WorldEvent::InventoryChanged {
            items: session.state.player.inventory.items().to_vec(),
        });

        Ok(session)
    }

    pub fn move_left(&mut self) -> Result<()> {
        self.step(LateralDirection::Left)
    }

    pub fn move_right(&mut self) -> Result<()> {
        self.step(LateralDirection::Right)
    }

    pub fn move_up(&mut self) -> Result<()> {
        self.climb(VerticalDirection::Up)
    }

    pub fn move_down(&mut self) -> Result<()> {
        self.climb(VerticalDirection::Down)
    }

    pub fn dig_left(&mut self) -> Result<()> {
        self.dig(Direction::Left)
    }

    pub fn dig_right(&mut self) -> Result<()> {
        self.dig(Direction::Right)
    }

    pub fn dig_down(&mut self) -> Result<()> {
        self.dig(Direction::Down)
    }

    pub fn dig_up(&mut self) -> Result<()> {
        self.dig(Direction::Up)
    }

    /// Stamps a ladder onto the player's cell. Never moves the player, so no
    /// visibility bracketing is needed.
    pub fn place_ladder(&mut self) -> Result<()> {
        debug!("place ladder");
        self.dispatch(Action::PlaceLadder(PlaceLadderAction), false)?;
        Ok(())
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn grid(&self) -> &Grid {
        &self.state.world.grid
    }

    pub fn player(&self) -> &PlayerState {
        &self.state.player
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    fn step(&mut self, direction: LateralDirection) -> Result<()> {
        debug!(?direction, "horizontal move");
        self.dispatch(Action::Move(MoveAction::new(direction)), true)?;
        Ok(())
    }

    fn climb(&mut self, direction: VerticalDirection) -> Result<()> {
        debug!(?direction, "ladder move");
        self.dispatch(Action::Climb(ClimbAction::new(direction)), true)?;
        Ok(())
    }

    fn dig(&mut self, direction: Direction) -> Result<()> {
        debug!(?direction, "dig");
        self.dispatch(
            Action::Dig(DigAction::new(direction)),
            direction.affects_support(),
        )?;
        Ok(())
    }

    /// Runs one command through the engine, bracketing it with
    /// hidden/shown notifications when it can move the player and reporting
    /// cell and inventory changes in between.
    fn dispatch(&mut self, action: Action, bracket: bool) -> Result<ActionOutcome> {
        if bracket {
            self.emit(WorldEvent::EntityHidden {
                entity: EntityId::PLAYER,
                position: self.state.player.position(),
            });
        }

        let outcome = GameEngine::new(&mut self.state, &self.config).execute(&action)?;
        self.report_world_changes(&outcome);

        if bracket {
            self.emit(WorldEvent::EntityShown {
                entity: EntityId::PLAYER,
                position: self.state.player.position(),
            });
        }

        Ok(outcome)
    }

    fn report_world_changes(&mut self, outcome: &ActionOutcome) {
        match outcome {
            ActionOutcome::Dig(dig) if dig.extracted => {
                if let Some(target) = dig.target {
                    self.emit(WorldEvent::CellChanged {
                        position: target,
                        sprite: None,
                    });
                }
                self.emit(WorldEvent::InventoryChanged {
                    items: self.state.player.inventory.items().to_vec(),
                });
            }
            ActionOutcome::PlaceLadder(place) => {
                self.emit(WorldEvent::CellChanged {
                    position: place.position,
                    sprite: Some(self.config.ladder_sprite),
                });
            }
            _ => {}
        }
    }

    fn emit(&mut self, event: WorldEvent) {
        trace!(?event, "emit");
        self.sink.handle(event);
    }
}
