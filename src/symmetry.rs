//! The 8 symmetries of a square board and the canonical position key
//! derived from them. Rotated or reflected duplicates of the same position
//! collapse onto one cache entry for the external analysis collaborator.

use serde::{Deserialize, Serialize};

use crate::Point;
use crate::coords;
use crate::turn::Turn;

/// One element of the board's symmetry group: the identity, the three
/// rotations, and the four reflections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Symmetry {
    Identity,
    Rotate90,
    Rotate180,
    Rotate270,
    FlipHorizontal,
    FlipVertical,
    FlipDiagonal,
    FlipAntidiagonal,
}

impl Symmetry {
    pub const ALL: [Symmetry; 8] = [
        Symmetry::Identity,
        Symmetry::Rotate90,
        Symmetry::Rotate180,
        Symmetry::Rotate270,
        Symmetry::FlipHorizontal,
        Symmetry::FlipVertical,
        Symmetry::FlipDiagonal,
        Symmetry::FlipAntidiagonal,
    ];

    /// Transform a point on a `size`-sized board.
    pub fn apply(self, (col, row): Point, size: u8) -> Point {
        let n = size - 1;
        match self {
            Symmetry::Identity => (col, row),
            Symmetry::Rotate90 => (row, n - col),
            Symmetry::Rotate180 => (n - col, n - row),
            Symmetry::Rotate270 => (n - row, col),
            Symmetry::FlipHorizontal => (n - col, row),
            Symmetry::FlipVertical => (col, n - row),
            Symmetry::FlipDiagonal => (row, col),
            Symmetry::FlipAntidiagonal => (n - row, n - col),
        }
    }

    /// The inverse element; reflections and the half turn are involutions.
    pub fn inverse(self) -> Symmetry {
        match self {
            Symmetry::Rotate90 => Symmetry::Rotate270,
            Symmetry::Rotate270 => Symmetry::Rotate90,
            other => other,
        }
    }

    /// Map a point from the transformed orientation back to the original.
    pub fn apply_inverse(self, point: Point, size: u8) -> Point {
        self.inverse().apply(point, size)
    }

    /// Transform a whole move sequence; passes are unchanged.
    pub fn apply_to_moves(self, turns: &[Turn], size: u8) -> Vec<Turn> {
        turns
            .iter()
            .map(|t| match t.pos {
                Some(point) => Turn::play(t.stone, self.apply(point, size)),
                None => t.clone(),
            })
            .collect()
    }
}

/// Rotate/reflect a move sequence into its canonical orientation: the one
/// whose serialization sorts lexicographically smallest.
pub fn canonicalize(size: u8, turns: &[Turn]) -> (Vec<Turn>, Symmetry) {
    let mut best_moves = turns.to_vec();
    let mut best_serialized = coords::serialize_moves(&best_moves);
    let mut best_symmetry = Symmetry::Identity;

    for symmetry in &Symmetry::ALL[1..] {
        let candidate = symmetry.apply_to_moves(turns, size);
        let serialized = coords::serialize_moves(&candidate);
        if serialized < best_serialized {
            best_moves = candidate;
            best_serialized = serialized;
            best_symmetry = *symmetry;
        }
    }

    (best_moves, best_symmetry)
}

/// Canonical cache key: `"<size>:<komi>:<serializedMoves>"`, identical for
/// any two symmetry-equivalent positions. Also returns the symmetry used, so
/// evaluator responses can be mapped back with [`Symmetry::apply_inverse`].
pub fn canonical_key(size: u8, komi: f32, turns: &[Turn]) -> (String, Symmetry) {
    let (canonical, symmetry) = canonicalize(size, turns);
    let moves = coords::serialize_moves(&canonical);
    (format!("{size}:{komi}:{moves}"), symmetry)
}
