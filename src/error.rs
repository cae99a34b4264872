use thiserror::Error;

use crate::line::TouchId;

/// Errors that can occur while applying an event to a [`crate::LineBoard`].
///
/// All of these are recoverable: the board is left unchanged and the caller
/// logs the error and carries on with the next event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BoardError {
    /// Delete was requested while nothing is selected
    #[error("no line is selected")]
    NoSelection,

    /// Move/end/cancel for a touch that is not drawing a line
    #[error("touch {0} is not being tracked")]
    UnknownTouch(TouchId),

    /// Begin for a touch that is already drawing a line
    #[error("touch {0} is already drawing a line")]
    DuplicateTouch(TouchId),
}

/// Result type for board operations
pub type BoardResult<T> = Result<T, BoardError>;

/// Errors that can occur while loading settings
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("Failed to read settings file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse settings: {0}")]
    ParseError(#[from] serde_json::Error),
}

/// Result type for settings operations
pub type SettingsResult<T> = Result<T, SettingsError>;
