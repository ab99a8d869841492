//! This module defines general error types used throughout the crate.

use thiserror::Error;

/// Error for reading moves written in face-letter notation (e.g. `U F' R`).
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseMoveError {
    /// there was no move to read
    #[error("expected a move but found nothing")]
    Empty,
    /// the first character is not one of `U L F R B D`
    #[error("'{0}' is not a face, expected one of U L F R B D")]
    UnknownFace(char),
    /// something other than a single `'` followed the face letter
    #[error("unexpected characters '{0}' after face letter")]
    TrailingCharacters(String),
}

/// Error returned when the breadth-first solver gives up without reaching a solved state.
///
/// Neither case is a bug: the search either ran out of states that it had not seen before, or it
/// ran into the exploration limit it was configured with.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SolveError {
    /// every reachable state that was not considered visited has been expanded
    #[error("search space exhausted after expanding {explored} states")]
    Exhausted {
        /// number of states expanded
        explored: usize,
    },
    /// the configured `max_states` limit was hit
    #[error("exploration limit reached after expanding {explored} states")]
    LimitReached {
        /// number of states expanded
        explored: usize,
    },
}
