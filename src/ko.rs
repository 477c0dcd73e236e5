use serde::{Deserialize, Serialize};

use crate::Point;
use crate::stone::Stone;

/// The simple-ko guard: at most one forbidden recapture point, recorded with
/// the color that may not play there. Set only after a qualifying
/// single-stone capture and cleared by the next committed move.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ko {
    pub point: Point,
    pub illegal: Stone,
}

impl Ko {
    pub fn forbids(&self, point: Point, stone: Stone) -> bool {
        self.point == point && self.illegal == stone
    }
}
