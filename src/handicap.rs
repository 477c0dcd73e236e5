use crate::Point;

/// Maximum handicap stones for a board: 9 on any odd square board of at
/// least 7 lines, where the full hoshi grid exists.
pub fn max_handicap(size: u8) -> u8 {
    if size < 7 || size.is_multiple_of(2) { 0 } else { 9 }
}

/// Standard hoshi handicap placement, ordered the traditional way (opposing
/// corners first, then the remaining corners, sides, center).
///
/// Returns `None` for even or too-small boards, or an invalid count.
pub fn handicap_points(size: u8, count: u8) -> Option<Vec<Point>> {
    if count < 2 || count > max_handicap(size) {
        return None;
    }

    // Hoshi offset from the edge: 3 on boards of 13+ lines, else 2.
    let off = if size >= 13 { 3 } else { 2 };
    let far = size - 1 - off;
    let mid = size / 2;

    let lower_left = (off, off);
    let upper_right = (far, far);
    let upper_left = (off, far);
    let lower_right = (far, off);
    let left_mid = (off, mid);
    let right_mid = (far, mid);
    let bottom_mid = (mid, off);
    let top_mid = (mid, far);
    let center = (mid, mid);

    let pts = match count {
        2 => vec![lower_left, upper_right],
        3 => vec![lower_left, upper_right, upper_left],
        4 => vec![lower_left, upper_right, upper_left, lower_right],
        5 => vec![lower_left, upper_right, upper_left, lower_right, center],
        6 => vec![
            lower_left,
            upper_right,
            upper_left,
            lower_right,
            left_mid,
            right_mid,
        ],
        7 => vec![
            lower_left,
            upper_right,
            upper_left,
            lower_right,
            left_mid,
            right_mid,
            center,
        ],
        8 => vec![
            lower_left,
            upper_right,
            upper_left,
            lower_right,
            left_mid,
            right_mid,
            bottom_mid,
            top_mid,
        ],
        9 => vec![
            lower_left,
            upper_right,
            upper_left,
            lower_right,
            left_mid,
            right_mid,
            bottom_mid,
            top_mid,
            center,
        ],
        _ => unreachable!(),
    };

    Some(pts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::parse_vertex;

    fn vertices(coords: &[&str], size: u8) -> Vec<Point> {
        coords
            .iter()
            .map(|c| parse_vertex(c, size).unwrap().unwrap())
            .collect()
    }

    #[test]
    fn rejects_invalid_boards_and_counts() {
        assert!(handicap_points(5, 2).is_none());
        assert!(handicap_points(8, 2).is_none());
        assert!(handicap_points(19, 0).is_none());
        assert!(handicap_points(19, 1).is_none());
        assert!(handicap_points(19, 10).is_none());
    }

    #[test]
    fn max_handicap_by_size() {
        assert_eq!(max_handicap(5), 0);
        assert_eq!(max_handicap(8), 0);
        assert_eq!(max_handicap(7), 9);
        assert_eq!(max_handicap(9), 9);
        assert_eq!(max_handicap(13), 9);
        assert_eq!(max_handicap(19), 9);
    }

    #[test]
    fn returns_requested_count() {
        for n in 2..=9u8 {
            assert_eq!(handicap_points(19, n).unwrap().len(), n as usize);
        }
    }

    #[test]
    fn nineteen_matches_standard_table() {
        assert_eq!(
            handicap_points(19, 4).unwrap(),
            vertices(&["D4", "Q16", "D16", "Q4"], 19)
        );
        assert_eq!(
            handicap_points(19, 9).unwrap(),
            vertices(
                &["D4", "Q16", "D16", "Q4", "D10", "Q10", "K4", "K16", "K10"],
                19
            )
        );
    }

    #[test]
    fn thirteen_matches_standard_table() {
        assert_eq!(
            handicap_points(13, 5).unwrap(),
            vertices(&["D4", "K10", "D10", "K4", "G7"], 13)
        );
    }

    #[test]
    fn nine_matches_standard_table() {
        assert_eq!(
            handicap_points(9, 2).unwrap(),
            vertices(&["C3", "G7"], 9)
        );
        assert_eq!(
            handicap_points(9, 9).unwrap(),
            vertices(
                &["C3", "G7", "C7", "G3", "C5", "G5", "E3", "E7", "E5"],
                9
            )
        );
    }
}
