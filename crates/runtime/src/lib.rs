//! Session orchestration for the sandbox world core.
//!
//! This crate wires a world generator and a presentation sink to the
//! `game-core` engine. Consumers embed [`GameSession`] to drive commands and
//! observe the world through [`WorldEvent`] notifications; the presentation
//! layer never mutates world state directly.
//!
//! Modules are organized by responsibility:
//! - [`session`] hosts the command-driven orchestrator
//! - [`events`] defines the presentation boundary (events and sinks)
//! - [`generator`] provides the seeded terrain generator
pub mod events;
pub mod generator;
pub mod session;

mod error;

pub use error::{Result, SessionError};
pub use events::{EventQueue, PresentationSink, WorldEvent};
pub use generator::TerrainGenerator;
pub use session::GameSession;
