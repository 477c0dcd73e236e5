use std::fmt;

/// Every way a request can be rejected. All variants are recoverable:
/// a rejected operation leaves the session untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GoError {
    Occupied,
    Suicide,
    KoViolation,
    OutOfBounds,
    NoMoveToUndo,
    Parse(String),
}

impl fmt::Display for GoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GoError::Occupied => write!(f, "point is occupied"),
            GoError::Suicide => write!(f, "suicide"),
            GoError::KoViolation => write!(f, "ko violation"),
            GoError::OutOfBounds => write!(f, "point is not on the board"),
            GoError::NoMoveToUndo => write!(f, "no move to undo"),
            GoError::Parse(msg) => write!(f, "parse error: {msg}"),
        }
    }
}

impl std::error::Error for GoError {}
