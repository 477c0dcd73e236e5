//! Textual coordinate transport: GTP-style vertices ("D4", skipping the
//! column letter I) and the `<color>[<coord>]` move tokens used in
//! serialized sequences and position keys.

use crate::Point;
use crate::error::GoError;
use crate::stone::Stone;
use crate::turn::Turn;

/// Column letters in order; 'I' is skipped by convention.
const COLUMNS: &[u8] = b"ABCDEFGHJKLMNOPQRST";

/// Format a point as a vertex, e.g. (3, 3) -> "D4".
///
/// Panics if the point falls outside the largest supported board (19x19);
/// such points have no letter/number form.
pub fn format_vertex((col, row): Point) -> String {
    assert!(
        (col as usize) < COLUMNS.len() && (row as usize) < COLUMNS.len(),
        "point ({col}, {row}) has no vertex form"
    );
    let letter = COLUMNS[col as usize] as char;
    format!("{letter}{}", row + 1)
}

/// Parse a vertex into a point; `Ok(None)` is a pass. Malformed or
/// out-of-range input is rejected here, before it can reach the legality
/// layer.
pub fn parse_vertex(s: &str, size: u8) -> Result<Option<Point>, GoError> {
    let s = s.trim();
    if s.eq_ignore_ascii_case("pass") {
        return Ok(None);
    }
    if s.len() < 2 {
        return Err(GoError::Parse(format!("invalid vertex: {s:?}")));
    }

    let letter = s.as_bytes()[0].to_ascii_uppercase();
    let col = COLUMNS
        .iter()
        .position(|&c| c == letter)
        .ok_or_else(|| GoError::Parse(format!("invalid column letter: {}", letter as char)))?
        as u8;

    let row: u8 = s[1..]
        .parse()
        .map_err(|_| GoError::Parse(format!("invalid row in vertex: {s:?}")))?;
    if row == 0 {
        return Err(GoError::Parse(format!("invalid row in vertex: {s:?}")));
    }

    let point = (col, row - 1);
    if col >= size || row > size {
        return Err(GoError::Parse(format!(
            "vertex {s:?} out of range for board size {size}"
        )));
    }
    Ok(Some(point))
}

/// Format a turn as a move token: "B[D5]", or "W[]" for a pass.
pub fn format_move_token(turn: &Turn) -> String {
    let coord = match turn.pos {
        Some(point) => format_vertex(point),
        None => String::new(),
    };
    format!("{}[{}]", turn.stone.letter(), coord)
}

/// Parse a move token; an empty bracket is a pass.
pub fn parse_move_token(s: &str, size: u8) -> Result<Turn, GoError> {
    let s = s.trim();
    let inner = s
        .strip_suffix(']')
        .and_then(|rest| rest.get(1..).and_then(|r| r.strip_prefix('[')))
        .ok_or_else(|| GoError::Parse(format!("invalid move token: {s:?}")))?;

    let color = s.chars().next().and_then(Stone::from_letter).ok_or_else(|| {
        GoError::Parse(format!("invalid color in move token: {s:?}"))
    })?;

    if inner.is_empty() {
        return Ok(Turn::pass(color));
    }
    match parse_vertex(inner, size)? {
        Some(point) => Ok(Turn::play(color, point)),
        None => Ok(Turn::pass(color)),
    }
}

/// Serialize a move sequence as `;`-joined tokens, e.g. "B[Q16];W[D4]".
pub fn serialize_moves(turns: &[Turn]) -> String {
    turns
        .iter()
        .map(format_move_token)
        .collect::<Vec<_>>()
        .join(";")
}

/// Parse a `;`-joined token sequence. An empty string is an empty sequence.
pub fn parse_moves(s: &str, size: u8) -> Result<Vec<Turn>, GoError> {
    if s.is_empty() {
        return Ok(Vec::new());
    }
    s.split(';')
        .map(|token| parse_move_token(token, size))
        .collect()
}

impl Turn {
    /// Convenience constructor from a color letter and vertex string.
    pub fn from_vertex(stone: Stone, vertex: &str, size: u8) -> Result<Self, GoError> {
        Ok(match parse_vertex(vertex, size)? {
            Some(point) => Turn::play(stone, point),
            None => Turn::pass(stone),
        })
    }
}
