use arrayvec::ArrayVec;

use crate::Point;
use crate::error::GoError;
use crate::stone::Stone;

/// A maximal 4-connected set of same-colored stones and its liberties.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Group {
    pub stones: Vec<Point>,
    pub liberties: Vec<Point>,
}

/// Outcome of simulating a legal placement: the board with captures already
/// removed, the captured points, and the placed group's liberties.
#[derive(Debug, Clone)]
pub struct Placement {
    pub board: Board,
    pub captured: Vec<Point>,
    pub liberties: Vec<Point>,
}

/// A square Go board stored as a flat row-major array of cells.
/// Row 0 is the edge labelled "1" in the transport coordinate format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: Vec<i8>,
    size: u8,
}

impl Board {
    pub fn new(size: u8) -> Self {
        Board {
            cells: vec![0i8; size as usize * size as usize],
            size,
        }
    }

    // -- Accessors --

    pub fn size(&self) -> u8 {
        self.size
    }

    pub fn cells(&self) -> &[i8] {
        &self.cells
    }

    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|&c| c == 0)
    }

    pub fn on_board(&self, (col, row): Point) -> bool {
        col < self.size && row < self.size
    }

    /// Color at a point. Out-of-bounds queries return `None` (empty) rather
    /// than erroring; renderers probe past the edge freely.
    pub fn stone_at(&self, point: Point) -> Option<Stone> {
        if self.on_board(point) {
            Stone::from_cell(self.cells[self.idx(point)])
        } else {
            None
        }
    }

    // -- Graph queries --

    /// The 4-connected on-board neighbors of a point.
    pub fn neighbors(&self, (col, row): Point) -> ArrayVec<Point, 4> {
        let mut result = ArrayVec::new();
        if col > 0 {
            result.push((col - 1, row));
        }
        if col + 1 < self.size {
            result.push((col + 1, row));
        }
        if row > 0 {
            result.push((col, row - 1));
        }
        if row + 1 < self.size {
            result.push((col, row + 1));
        }
        result
    }

    /// Flood-fill the group containing a point, with its liberties.
    /// The group of an empty (or out-of-bounds) point is empty.
    pub fn group(&self, point: Point) -> Group {
        let Some(stone) = self.stone_at(point) else {
            return Group::default();
        };

        let mut visited = vec![false; self.cells.len()];
        let stones = self.fill_from(point, stone, &mut visited);
        let liberties = self.liberties_of(&stones);
        Group { stones, liberties }
    }

    /// Liberties of a pre-computed set of same-colored points. Callers
    /// hand in points from a flood fill, so every point is on the board.
    pub(crate) fn liberties_of(&self, stones: &[Point]) -> Vec<Point> {
        let mut seen = vec![false; self.cells.len()];
        let mut libs = Vec::new();
        for &p in stones {
            for n in self.neighbors(p) {
                let ni = self.idx(n);
                if !seen[ni] && self.stone_at(n).is_none() {
                    seen[ni] = true;
                    libs.push(n);
                }
            }
        }
        libs
    }

    // -- Capture execution --

    /// Simulate placing `stone` at `point` without touching `self`.
    ///
    /// Adjacent opponent groups left with no liberties are captured, and only
    /// then is the placed group checked for suicide. The ordering makes a
    /// snapback (capturing the stone that fills one's last liberty) legal.
    pub fn simulate(&self, point: Point, stone: Stone) -> Result<Placement, GoError> {
        if !self.on_board(point) {
            return Err(GoError::OutOfBounds);
        }
        if self.stone_at(point).is_some() {
            return Err(GoError::Occupied);
        }

        let mut board = self.clone();
        board.set_stone(point, stone);

        let mut captured = Vec::new();
        for chain in board.opponent_chains(point, stone) {
            if board.liberties_of(&chain).is_empty() {
                captured.extend(chain);
            }
        }
        for &p in &captured {
            board.clear_stone(p);
        }

        let liberties = board.group(point).liberties;
        if liberties.is_empty() {
            return Err(GoError::Suicide);
        }

        Ok(Placement {
            board,
            captured,
            liberties,
        })
    }

    /// Distinct opponent groups adjacent to a point.
    fn opponent_chains(&self, point: Point, stone: Stone) -> Vec<Vec<Point>> {
        let opponent = stone.opp();
        let mut chains = Vec::new();
        let mut visited = vec![false; self.cells.len()];

        for n in self.neighbors(point) {
            if self.stone_at(n) != Some(opponent) || visited[self.idx(n)] {
                continue;
            }
            chains.push(self.fill_from(n, opponent, &mut visited));
        }

        chains
    }

    /// Flood fill over `stone`-colored points, sharing a visited bitset.
    fn fill_from(&self, point: Point, stone: Stone, visited: &mut [bool]) -> Vec<Point> {
        let mut result = Vec::new();
        let mut stack = vec![point];

        while let Some(p) = stack.pop() {
            let pi = self.idx(p);
            if visited[pi] {
                continue;
            }
            visited[pi] = true;
            result.push(p);
            for n in self.neighbors(p) {
                if self.stone_at(n) == Some(stone) && !visited[self.idx(n)] {
                    stack.push(n);
                }
            }
        }

        result
    }

    // -- Raw mutators --
    //
    // Crate-visible only: reachable from the commit and undo paths, never
    // from the legality layer.

    pub(crate) fn set_stone(&mut self, point: Point, stone: Stone) {
        if self.on_board(point) {
            let i = self.idx(point);
            self.cells[i] = stone.to_cell();
        }
    }

    pub(crate) fn clear_stone(&mut self, point: Point) {
        if self.on_board(point) {
            let i = self.idx(point);
            self.cells[i] = 0;
        }
    }

    #[inline]
    fn idx(&self, (col, row): Point) -> usize {
        row as usize * self.size as usize + col as usize
    }
}

/// Test helper: build a board from an ASCII layout, last line being row 0.
/// 'B' = Black, 'W' = White, anything else = empty.
#[cfg(test)]
pub(crate) fn board_from_layout(layout: &[&str]) -> Board {
    let size = layout.len() as u8;
    let mut board = Board::new(size);
    for (i, line) in layout.iter().enumerate() {
        let row = size - 1 - i as u8;
        for (col, c) in line.chars().enumerate() {
            if let Some(stone) = Stone::from_letter(c) {
                board.set_stone((col as u8, row), stone);
            }
        }
    }
    board
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_board_is_empty() {
        let board = Board::new(9);
        assert!(board.is_empty());
        assert_eq!(board.size(), 9);
        assert_eq!(board.cells().len(), 81);
    }

    #[test]
    fn stone_at_out_of_bounds_is_empty() {
        let board = Board::new(9);
        assert_eq!(board.stone_at((9, 0)), None);
        assert_eq!(board.stone_at((0, 9)), None);
        assert_eq!(board.stone_at((200, 200)), None);
    }

    #[test]
    fn neighbor_counts() {
        let board = Board::new(9);
        assert_eq!(board.neighbors((0, 0)).len(), 2);
        assert_eq!(board.neighbors((4, 0)).len(), 3);
        assert_eq!(board.neighbors((4, 4)).len(), 4);
        assert_eq!(board.neighbors((8, 8)).len(), 2);
    }

    #[test]
    fn group_of_empty_point_is_empty() {
        let board = Board::new(4);
        let group = board.group((1, 1));
        assert!(group.stones.is_empty());
        assert!(group.liberties.is_empty());
    }

    #[test]
    fn group_of_off_board_point_is_empty() {
        let board = board_from_layout(&[
            "++++", //
            "++++",
            "++++",
            "B+++",
        ]);
        let group = board.group((200, 200));
        assert!(group.stones.is_empty());
        assert!(group.liberties.is_empty());
    }

    #[test]
    fn group_flood_fills_connected_stones() {
        let board = board_from_layout(&[
            "++++", //
            "+BB+",
            "+B++",
            "W+++",
        ]);
        let group = board.group((1, 1));
        assert_eq!(group.stones.len(), 3);
        assert!(group.stones.contains(&(1, 1)));
        assert!(group.stones.contains(&(1, 2)));
        assert!(group.stones.contains(&(2, 2)));
        // White corner stone is not part of it
        assert!(!group.stones.contains(&(0, 0)));
    }

    #[test]
    fn group_liberties_deduplicated() {
        let board = board_from_layout(&[
            "++++", //
            "++++",
            "BB++",
            "++++",
        ]);
        let group = board.group((0, 1));
        assert_eq!(group.stones.len(), 2);
        // (0,0), (1,0), (0,2), (1,2), (2,1)
        assert_eq!(group.liberties.len(), 5);
    }

    #[test]
    fn single_stone_liberties_in_corner() {
        let board = board_from_layout(&[
            "++++", //
            "++++",
            "++++",
            "B+++",
        ]);
        assert_eq!(board.group((0, 0)).liberties.len(), 2);
    }

    #[test]
    fn simulate_rejects_out_of_bounds() {
        let board = Board::new(4);
        assert_eq!(
            board.simulate((4, 0), Stone::Black).unwrap_err(),
            GoError::OutOfBounds
        );
    }

    #[test]
    fn simulate_rejects_occupied() {
        let mut board = Board::new(4);
        board.set_stone((1, 1), Stone::Black);
        assert_eq!(
            board.simulate((1, 1), Stone::White).unwrap_err(),
            GoError::Occupied
        );
    }

    #[test]
    fn simulate_rejects_suicide() {
        // White playing the corner has no liberties and captures nothing.
        let board = board_from_layout(&[
            "++++", //
            "++++",
            "B+++",
            "+B++",
        ]);
        assert_eq!(
            board.simulate((0, 0), Stone::White).unwrap_err(),
            GoError::Suicide
        );
    }

    #[test]
    fn simulate_captures_single_stone() {
        let board = board_from_layout(&[
            "++++", //
            "+B++",
            "BWB+",
            "++++",
        ]);
        let placement = board.simulate((1, 0), Stone::Black).unwrap();
        assert_eq!(placement.captured, vec![(1, 1)]);
        assert_eq!(placement.board.stone_at((1, 1)), None);
        assert_eq!(placement.board.stone_at((1, 0)), Some(Stone::Black));
    }

    #[test]
    fn simulate_captures_chain() {
        let board = board_from_layout(&[
            "WWB+", //
            "W+WB",
            "BWWB",
            "+BB+",
        ]);
        let placement = board.simulate((1, 2), Stone::Black).unwrap();
        assert_eq!(placement.captured.len(), 6);
        for &p in &placement.captured {
            assert_eq!(placement.board.stone_at(p), None);
        }
    }

    #[test]
    fn capture_resolves_before_suicide_check() {
        // Snapback: Black at the corner has no liberty of its own, but it
        // removes the white stone's last liberty first, so it is legal.
        let board = board_from_layout(&[
            "++++", //
            "B+++",
            "WB++",
            "+WW+",
        ]);
        let placement = board.simulate((0, 0), Stone::Black).unwrap();
        assert_eq!(placement.captured, vec![(0, 1)]);
        assert_eq!(placement.liberties, vec![(0, 1)]);
    }

    #[test]
    fn captured_stone_frees_neighboring_liberties() {
        // Surround a lone white stone; the capturing stone ends with the
        // vacated point among its liberties.
        let board = board_from_layout(&[
            "++++", //
            "+B++",
            "BWB+",
            "++++",
        ]);
        let placement = board.simulate((1, 0), Stone::Black).unwrap();
        assert!(placement.liberties.contains(&(1, 1)));
        assert!(!placement.liberties.is_empty());
    }

    #[test]
    fn simulate_does_not_mutate_original() {
        let board = board_from_layout(&[
            "++++", //
            "+B++",
            "BWB+",
            "++++",
        ]);
        let before = board.clone();
        board.simulate((1, 0), Stone::Black).unwrap();
        assert_eq!(board, before);
    }
}
