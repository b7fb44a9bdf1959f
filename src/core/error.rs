//! Fail-fast errors for configuration and programmer mistakes.
//!
//! Rule violations during play (wrong turn, duplicate join, nothing to buy,
//! ...) are never errors: the game narrates them into its event log and
//! leaves state untouched. Only malformed configuration and out-of-range
//! lookups surface as `GameError`.

use thiserror::Error;

use crate::board::SpaceKind;

/// Errors raised when constructing a board or game, or when indexing a board.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("board size {0} is invalid: it must be a multiple of 4 and at least 8")]
    InvalidBoardSize(usize),

    #[error("position {position} is outside the board (size {size})")]
    PositionOutOfRange { position: usize, size: usize },

    #[error("space {position} must be {expected:?}")]
    MisplacedCorner { position: usize, expected: SpaceKind },

    #[error("player limits are invalid: min {min}, max {max}")]
    InvalidPlayerLimits { min: usize, max: usize },

    #[error("setting {0} must be positive")]
    NonPositiveSetting(&'static str),

    #[error("at least one chance outcome must be configured")]
    EmptyChanceOutcomes,

    #[error("chance outcome {0} is out of range")]
    ChanceOutcomeOutOfRange(i64),
}

/// Result alias for fallible engine construction.
pub type Result<T> = std::result::Result<T, GameError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            GameError::InvalidBoardSize(10).to_string(),
            "board size 10 is invalid: it must be a multiple of 4 and at least 8"
        );
        assert_eq!(
            GameError::PositionOutOfRange { position: 12, size: 12 }.to_string(),
            "position 12 is outside the board (size 12)"
        );
        assert_eq!(
            GameError::MisplacedCorner { position: 3, expected: SpaceKind::Jail }.to_string(),
            "space 3 must be Jail"
        );
        assert_eq!(
            GameError::ChanceOutcomeOutOfRange(i64::MIN).to_string(),
            format!("chance outcome {} is out of range", i64::MIN)
        );
    }
}
