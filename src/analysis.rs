//! The narrow request/response contract with the external position
//! evaluator. The engine only serializes a position for the request and maps
//! any symmetry transform applied to the response back to the caller's
//! orientation; how the ranking was produced is not its concern.

use serde::{Deserialize, Serialize};

use crate::coords;
use crate::error::GoError;
use crate::symmetry::{self, Symmetry};
use crate::turn::Turn;

/// Request payload handed to the evaluator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisRequest {
    pub board_size: u8,
    pub komi: f32,
    pub moves_sequence: String,
    pub visits: u32,
}

impl AnalysisRequest {
    pub fn new(board_size: u8, komi: f32, turns: &[Turn], visits: u32) -> Self {
        AnalysisRequest {
            board_size,
            komi,
            moves_sequence: coords::serialize_moves(turns),
            visits,
        }
    }

    /// Build the request in canonical orientation, returning the symmetry
    /// that must be inverted on the response.
    pub fn canonical(board_size: u8, komi: f32, turns: &[Turn], visits: u32) -> (Self, Symmetry) {
        let (canonical, symmetry) = symmetry::canonicalize(board_size, turns);
        (Self::new(board_size, komi, &canonical, visits), symmetry)
    }
}

/// One ranked candidate move from the evaluator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoveCandidate {
    /// Vertex in transport form ("Q16"), or "pass".
    #[serde(rename = "move")]
    pub mv: String,
    pub winrate: f64,
    pub score_lead: f64,
    pub visits: u32,
}

impl MoveCandidate {
    /// Map a candidate returned in canonical orientation back to the
    /// caller's orientation. Pass candidates are untouched.
    pub fn into_original_orientation(
        mut self,
        symmetry: Symmetry,
        board_size: u8,
    ) -> Result<Self, GoError> {
        if let Some(point) = coords::parse_vertex(&self.mv, board_size)? {
            self.mv = coords::format_vertex(symmetry.apply_inverse(point, board_size));
        }
        Ok(self)
    }
}

/// A complete evaluator response for one position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisSummary {
    pub position_key: String,
    pub board_size: u8,
    pub komi: f32,
    pub moves_sequence: String,
    pub top_moves: Vec<MoveCandidate>,
    pub engine_visits: u32,
    pub model_name: String,
    #[serde(default)]
    pub from_cache: bool,
}

impl AnalysisSummary {
    /// Map every candidate back through the given symmetry.
    pub fn into_original_orientation(mut self, symmetry: Symmetry) -> Result<Self, GoError> {
        let board_size = self.board_size;
        self.top_moves = std::mem::take(&mut self.top_moves)
            .into_iter()
            .map(|c| c.into_original_orientation(symmetry, board_size))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(self)
    }
}
