//! Error types for Martian Dice.

use thiserror::Error;

/// User-facing errors for Martian Dice positions and configuration.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MartianError {
    /// Notation is neither `SAVED:ROLLED:DICE` nor a plain dice count.
    #[error("invalid position notation {0:?}: expected SAVED:ROLLED:DICE or a dice count")]
    InvalidNotation(String),

    /// A letter that names no die category.
    #[error("unknown die face {face:?} in {segment} dice")]
    UnknownFace {
        /// The offending letter.
        face: char,
        /// Which segment it appeared in (`saved` or `rolled`).
        segment: &'static str,
    },

    /// A `T` in the rolled segment.
    #[error("tanks cannot be held as rolled dice; they are saved automatically")]
    RolledTanks,

    /// A dice count that is not a non-negative integer.
    #[error("invalid dice count {0:?}")]
    InvalidDiceCount(String),

    /// More dice than a position can hold.
    #[error("{dice} dice exceeds the maximum of {max}")]
    TooManyDice {
        /// Requested dice.
        dice: usize,
        /// Largest supported budget.
        max: usize,
    },

    /// Rolled dice present while dice remain to roll.
    #[error("a position cannot hold rolled dice and {0} dice still to roll")]
    RolledWithPendingDice(u8),

    /// Config file could not be read.
    #[error("IO error: {0}")]
    Io(String),

    /// Malformed config JSON.
    #[error("parse error: {0}")]
    Parse(String),
}

/// Convenience Result type for Martian Dice operations.
pub type Result<T> = std::result::Result<T, MartianError>;
