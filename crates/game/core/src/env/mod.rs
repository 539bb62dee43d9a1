//! Traits describing the construction-time world boundary.
//!
//! The generator is the only collaborator the core consumes: it produces the
//! initial grid contents and the player spawn point. The procedural algorithm
//! behind it lives outside this crate so the rules stay independent of any
//! particular map recipe.
mod map;

pub use map::{GridDimensions, WorldGenerator};
