use game_core::{ExecuteError, InitializationError};

/// Convenience alias for session results.
pub type Result<T> = std::result::Result<T, SessionError>;

/// Failures a session can surface to its embedder.
///
/// Gameplay friction (walls, empty cells, grid edges) never reaches this
/// type; commands absorb it silently. These errors mean the world could not
/// be built or an engine invariant broke.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("world generation failed: {0}")]
    Initialization(#[from] InitializationError),

    #[error("command violated a world invariant: {0}")]
    Execute(#[from] ExecuteError),
}
