pub mod analysis;
pub mod board;
pub mod coords;
pub mod error;
pub mod game;
pub mod handicap;
pub mod history;
pub mod ko;
pub mod stone;
pub mod symmetry;
pub mod turn;

pub type Point = (u8, u8);

pub use analysis::{AnalysisRequest, AnalysisSummary, MoveCandidate};
pub use board::{Board, Group, Placement};
pub use error::GoError;
pub use game::{Game, Position, Prisoners};
pub use history::MoveRecord;
pub use ko::Ko;
pub use stone::Stone;
pub use symmetry::Symmetry;
pub use turn::{Move, Turn};
