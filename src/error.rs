use crate::board::Point;

/// Reasons an engine operation is rejected.
///
/// Every variant is a recoverable rejection: the session that produced it is
/// left exactly as it was before the call.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GoError {
    #[error("point ({row}, {col}) is off the board")]
    OutOfBounds { row: isize, col: isize },

    #[error("point {0} is not empty")]
    OccupiedCell(Point),

    #[error("game is already over")]
    GameOver,

    #[error("no moves to undo")]
    EmptyLedger,

    #[error("no stone at {0}")]
    InvalidInput(Point),

    #[error("cannot parse coordinate '{0}'")]
    ParseCoord(String),
}

pub type Result<T> = std::result::Result<T, GoError>;
