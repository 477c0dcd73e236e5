use serde::{Deserialize, Serialize};

use crate::Point;
use crate::stone::Stone;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Move {
    Play,
    Pass,
}

/// A single move in a game: a placement or a pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    pub kind: Move,
    pub stone: Stone,
    pub pos: Option<Point>,
}

impl Turn {
    pub fn play(stone: Stone, point: Point) -> Self {
        Turn {
            kind: Move::Play,
            stone,
            pos: Some(point),
        }
    }

    pub fn pass(stone: Stone) -> Self {
        Turn {
            kind: Move::Pass,
            stone,
            pos: None,
        }
    }

    pub fn is_play(&self) -> bool {
        self.kind == Move::Play
    }

    pub fn is_pass(&self) -> bool {
        self.kind == Move::Pass
    }
}
