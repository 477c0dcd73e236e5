use serde::{Deserialize, Serialize};

use crate::Point;
use crate::analysis::AnalysisRequest;
use crate::board::{Board, Placement};
use crate::error::GoError;
use crate::handicap;
use crate::history::{History, MoveRecord};
use crate::ko::Ko;
use crate::stone::Stone;
use crate::symmetry::{self, Symmetry};
use crate::turn::{Move, Turn};

/// Prisoner tally indexed by the capturing color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Prisoners {
    pub black: u32,
    pub white: u32,
}

impl Prisoners {
    pub fn get(&self, stone: Stone) -> u32 {
        match stone {
            Stone::Black => self.black,
            Stone::White => self.white,
        }
    }

    fn add(&mut self, stone: Stone, count: u32) {
        match stone {
            Stone::Black => self.black += count,
            Stone::White => self.white += count,
        }
    }

    fn remove(&mut self, stone: Stone, count: u32) {
        match stone {
            Stone::Black => self.black -= count,
            Stone::White => self.white -= count,
        }
    }
}

/// Serializable snapshot of a position, for callers that persist state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub cells: Vec<i8>,
    pub size: u8,
    pub komi: f32,
    pub prisoners: Prisoners,
    pub ko: Option<Ko>,
}

/// One game session: the board, the invertible move history, the ko guard
/// and the prisoner tally. Sessions are independent; cloning one snapshots
/// the position, e.g. for an in-flight analysis request.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    komi: f32,
    handicap: u8,
    handicap_stones: Vec<Point>,
    history: History,
    ko: Option<Ko>,
    prisoners: Prisoners,
}

const DEFAULT_KOMI: f32 = 7.5;
const HANDICAP_KOMI: f32 = 0.5;

impl Game {
    pub fn new(size: u8) -> Self {
        Self::create(size, DEFAULT_KOMI, 0)
    }

    pub fn with_komi(size: u8, komi: f32) -> Self {
        Self::create(size, komi, 0)
    }

    /// Handicap game: Black's stones are pre-placed and White moves first.
    pub fn with_handicap(size: u8, handicap: u8) -> Self {
        let komi = if handicap >= 2 { HANDICAP_KOMI } else { DEFAULT_KOMI };
        Self::create(size, komi, handicap)
    }

    fn create(size: u8, komi: f32, handicap: u8) -> Self {
        let mut board = Board::new(size);
        let mut handicap_stones = Vec::new();
        if handicap >= 2 {
            if let Some(points) = handicap::handicap_points(size, handicap) {
                for &point in &points {
                    board.set_stone(point, Stone::Black);
                }
                handicap_stones = points;
            }
        }
        Game {
            board,
            komi,
            handicap,
            handicap_stones,
            history: History::new(),
            ko: None,
            prisoners: Prisoners::default(),
        }
    }

    /// Import a partial game: replay a recorded sequence onto a fresh board.
    pub fn from_moves(size: u8, komi: f32, turns: &[Turn]) -> Result<Self, GoError> {
        let mut game = Self::with_komi(size, komi);
        for turn in turns {
            match (turn.kind, turn.pos) {
                (Move::Play, Some(point)) => game.play(turn.stone, point)?,
                (Move::Pass, _) => game.pass_as(turn.stone),
                (Move::Play, None) => {
                    return Err(GoError::Parse("play move without a coordinate".into()));
                }
            }
        }
        Ok(game)
    }

    // -- Accessors --

    pub fn size(&self) -> u8 {
        self.board.size()
    }

    pub fn komi(&self) -> f32 {
        self.komi
    }

    pub fn handicap(&self) -> u8 {
        self.handicap
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn stone_at(&self, point: Point) -> Option<Stone> {
        self.board.stone_at(point)
    }

    pub fn ko(&self) -> Option<&Ko> {
        self.ko.as_ref()
    }

    pub fn prisoners(&self) -> Prisoners {
        self.prisoners
    }

    pub fn move_count(&self) -> usize {
        self.history.len()
    }

    pub fn records(&self) -> &[MoveRecord] {
        self.history.records()
    }

    /// The applied move sequence, oldest first.
    pub fn turns(&self) -> Vec<Turn> {
        self.history.records().iter().map(|r| r.turn.clone()).collect()
    }

    pub fn handicap_stones(&self) -> &[Point] {
        &self.handicap_stones
    }

    /// The sequence that identifies this position to the outside world:
    /// handicap placements first, as Black plays, then the applied moves.
    /// Without the leading placements a handicap game would share a key with
    /// a plain game of the same komi.
    pub fn sequence_turns(&self) -> Vec<Turn> {
        let mut turns: Vec<Turn> = self
            .handicap_stones
            .iter()
            .map(|&point| Turn::play(Stone::Black, point))
            .collect();
        turns.extend(self.turns());
        turns
    }

    /// Whose move it is: Black first, White first in handicap games,
    /// otherwise the opponent of the last applied move.
    pub fn current_turn(&self) -> Stone {
        match self.history.last() {
            None if self.handicap >= 2 => Stone::White,
            None => Stone::Black,
            Some(record) => record.turn.stone.opp(),
        }
    }

    // -- Legality guard & commit --

    /// Place a stone for the player to move. On rejection every piece of
    /// state (board, history, ko, prisoners) is left untouched.
    pub fn place_stone(&mut self, point: Point) -> Result<(), GoError> {
        self.play(self.current_turn(), point)
    }

    /// Place a stone of an explicit color. Bounds, then the ko point (before
    /// any simulation: the recapture is forbidden outright), then capture
    /// and suicide resolution; only then is the move committed.
    pub fn play(&mut self, stone: Stone, point: Point) -> Result<(), GoError> {
        if !self.board.on_board(point) {
            return Err(GoError::OutOfBounds);
        }
        if self.ko.as_ref().is_some_and(|ko| ko.forbids(point, stone)) {
            return Err(GoError::KoViolation);
        }

        let placement = self.board.simulate(point, stone)?;
        let ko_after = detect_ko(&placement, point, stone);
        let captured: Vec<(Point, Stone)> = placement
            .captured
            .iter()
            .map(|&p| (p, stone.opp()))
            .collect();

        self.prisoners.add(stone, captured.len() as u32);
        self.history.push(MoveRecord {
            turn: Turn::play(stone, point),
            ordinal: self.history.len() as u32,
            captured,
            ko_before: self.ko.take(),
            ko_after: ko_after.clone(),
        });
        self.ko = ko_after;
        self.board = placement.board;
        Ok(())
    }

    /// Pass for the player to move. A pass is a committed move: it clears
    /// the ko point and is recorded for undo.
    pub fn pass(&mut self) {
        self.pass_as(self.current_turn());
    }

    fn pass_as(&mut self, stone: Stone) {
        self.history.push(MoveRecord {
            turn: Turn::pass(stone),
            ordinal: self.history.len() as u32,
            captured: Vec::new(),
            ko_before: self.ko.take(),
            ko_after: None,
        });
        self.ko = None;
    }

    // -- History --

    /// Un-apply the last move; false if there is none. Restores the grid,
    /// the prior ko state (verbatim from the record, never re-derived) and
    /// the prisoner tally exactly.
    pub fn undo(&mut self) -> bool {
        self.try_undo().is_ok()
    }

    pub fn try_undo(&mut self) -> Result<(), GoError> {
        let Some(record) = self.history.undo() else {
            return Err(GoError::NoMoveToUndo);
        };
        if let Some(point) = record.turn.pos {
            self.board.clear_stone(point);
            for &(p, color) in &record.captured {
                self.board.set_stone(p, color);
            }
            self.prisoners
                .remove(record.turn.stone, record.captured.len() as u32);
        }
        self.ko = record.ko_before.clone();
        Ok(())
    }

    /// Re-apply the most recently undone move; false if there is none.
    pub fn redo(&mut self) -> bool {
        let Some(record) = self.history.redo() else {
            return false;
        };
        if let Some(point) = record.turn.pos {
            self.board.set_stone(point, record.turn.stone);
            for &(p, _) in &record.captured {
                self.board.clear_stone(p);
            }
            self.prisoners
                .add(record.turn.stone, record.captured.len() as u32);
        }
        self.ko = record.ko_after.clone();
        true
    }

    /// Reset to the starting position (handicap stones re-applied).
    pub fn clear(&mut self) {
        let mut board = Board::new(self.board.size());
        for &point in &self.handicap_stones {
            board.set_stone(point, Stone::Black);
        }
        self.board = board;
        self.history.clear();
        self.ko = None;
        self.prisoners = Prisoners::default();
    }

    // -- Derived views --

    pub fn position(&self) -> Position {
        Position {
            cells: self.board.cells().to_vec(),
            size: self.board.size(),
            komi: self.komi,
            prisoners: self.prisoners,
            ko: self.ko.clone(),
        }
    }

    /// Orientation-independent cache key for the current position. Handicap
    /// placements are part of the keyed sequence and are rotated/reflected
    /// along with the moves.
    pub fn canonical_key(&self) -> (String, Symmetry) {
        symmetry::canonical_key(self.size(), self.komi, &self.sequence_turns())
    }

    /// Evaluator request for the current position, in canonical orientation,
    /// with the symmetry to invert on the response. Handicap placements lead
    /// the serialized sequence.
    pub fn analysis_request(&self, visits: u32) -> (AnalysisRequest, Symmetry) {
        AnalysisRequest::canonical(self.size(), self.komi, &self.sequence_turns(), visits)
    }
}

/// A move qualifies as a ko capture when it takes exactly one stone and the
/// placed stone ends as a singleton group whose sole liberty is the vacated
/// point. The opponent is then barred from the immediate recapture.
fn detect_ko(placement: &Placement, point: Point, stone: Stone) -> Option<Ko> {
    let singleton = placement
        .board
        .neighbors(point)
        .iter()
        .all(|&n| placement.board.stone_at(n) != Some(stone));

    if placement.captured.len() == 1
        && placement.liberties.len() == 1
        && placement.liberties[0] == placement.captured[0]
        && singleton
    {
        Some(Ko {
            point: placement.captured[0],
            illegal: stone.opp(),
        })
    } else {
        None
    }
}
