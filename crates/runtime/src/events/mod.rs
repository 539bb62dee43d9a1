//! Presentation boundary: world events and the sinks that receive them.
//!
//! The session pushes [`WorldEvent`] values into a [`PresentationSink`]
//! injected at construction; the presentation layer renders from those
//! notifications plus read-only state queries and never mutates world state
//! directly.
mod sink;

pub use sink::{EventQueue, PresentationSink};

use game_core::{EntityId, GridDimensions, Position, Resource, SpriteKey};
use serde::{Deserialize, Serialize};

/// Notifications pushed across the presentation boundary.
///
/// Events are emitted synchronously as side effects of session commands, in
/// the order the mutations happen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum WorldEvent {
    /// The world has been generated; emitted once, before any other event.
    WorldInitialized { dimensions: GridDimensions },

    /// An entity became visible at the given position.
    ///
    /// Together with [`WorldEvent::EntityHidden`] this brackets every
    /// movement-capable command, whether or not the position changed, so the
    /// presentation layer can redraw unconditionally.
    EntityShown { entity: EntityId, position: Position },

    /// An entity stopped being visible at the given position.
    EntityHidden { entity: EntityId, position: Position },

    /// A cell's content changed; `sprite` is the new visual key, or `None`
    /// for an emptied cell.
    CellChanged {
        position: Position,
        sprite: Option<SpriteKey>,
    },

    /// Observable health value for a progress/health indicator.
    HealthChanged {
        entity: EntityId,
        current: u32,
        maximum: u32,
    },

    /// Ordered snapshot of the player inventory after an add or remove.
    InventoryChanged { items: Vec<Resource> },
}
