use serde_repr::{Deserialize_repr, Serialize_repr};
use std::fmt;
use std::ops::Neg;

/// A stone color. Cells are stored as the i8 value (1, -1, 0 for empty).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize_repr, Deserialize_repr)]
#[repr(i8)]
pub enum Stone {
    Black = 1,
    White = -1,
}

impl Stone {
    pub fn from_cell(v: i8) -> Option<Self> {
        match v.signum() {
            1 => Some(Stone::Black),
            -1 => Some(Stone::White),
            _ => None,
        }
    }

    pub fn to_cell(self) -> i8 {
        self as i8
    }

    pub fn opp(self) -> Self {
        match self {
            Stone::Black => Stone::White,
            Stone::White => Stone::Black,
        }
    }

    /// One-letter color tag used in move tokens ("B[D5]").
    pub fn letter(self) -> &'static str {
        match self {
            Stone::Black => "B",
            Stone::White => "W",
        }
    }

    pub fn from_letter(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'B' => Some(Stone::Black),
            'W' => Some(Stone::White),
            _ => None,
        }
    }
}

impl Neg for Stone {
    type Output = Self;

    fn neg(self) -> Self {
        self.opp()
    }
}

impl fmt::Display for Stone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stone::Black => write!(f, "Black"),
            Stone::White => write!(f, "White"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_cell_normalizes() {
        assert_eq!(Stone::from_cell(1), Some(Stone::Black));
        assert_eq!(Stone::from_cell(37), Some(Stone::Black));
        assert_eq!(Stone::from_cell(-1), Some(Stone::White));
        assert_eq!(Stone::from_cell(-9), Some(Stone::White));
        assert_eq!(Stone::from_cell(0), None);
    }

    #[test]
    fn opponent() {
        assert_eq!(Stone::Black.opp(), Stone::White);
        assert_eq!(Stone::White.opp(), Stone::Black);
        assert_eq!(-Stone::Black, Stone::White);
    }

    #[test]
    fn letters_round_trip() {
        assert_eq!(Stone::Black.letter(), "B");
        assert_eq!(Stone::White.letter(), "W");
        assert_eq!(Stone::from_letter('B'), Some(Stone::Black));
        assert_eq!(Stone::from_letter('w'), Some(Stone::White));
        assert_eq!(Stone::from_letter('x'), None);
    }

    #[test]
    fn display() {
        assert_eq!(Stone::Black.to_string(), "Black");
        assert_eq!(Stone::White.to_string(), "White");
    }
}
