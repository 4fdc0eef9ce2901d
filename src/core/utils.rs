use crate::core::definitions::Square;

#[inline]
pub fn is_valid_square(row: i8, col: i8) -> bool {
    (0..8).contains(&row) && (0..8).contains(&col)
}

#[derive(Debug)]
pub struct BetweenIterator {
    row: i8,
    col: i8,
    target: (i8, i8),
    step: (i8, i8),
}

impl Iterator for BetweenIterator {
    type Item = Square;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.row += self.step.0;
        self.col += self.step.1;
        if (self.row, self.col) == self.target {
            None
        } else {
            Square::new(self.row, self.col)
        }
    }
}

/// Squares strictly between `from` and `to`, which must share a line.
pub fn between(from: Square, to: Square) -> BetweenIterator {
    debug_assert!(
        is_in_straight_line(from, to) || is_in_diagonal_line(from, to),
        "Points can't form line to search between them!"
    );
    BetweenIterator {
        row: from.row(),
        col: from.col(),
        target: (to.row(), to.col()),
        step: (
            (to.row() - from.row()).signum(),
            (to.col() - from.col()).signum(),
        ),
    }
}

pub fn distance(a: Square, b: Square) -> u8 {
    a.row().abs_diff(b.row()) + a.col().abs_diff(b.col())
}

pub fn is_in_straight_line(a: Square, b: Square) -> bool {
    a.row() == b.row() || a.col() == b.col()
}

pub fn is_in_diagonal_line(a: Square, b: Square) -> bool {
    a.row().abs_diff(b.row()) == a.col().abs_diff(b.col())
}

/** Possible moves for pieces */
pub const KNIGHT_MOVES: [(i8, i8); 8] = [
    (2, 1),
    (2, -1),
    (-2, 1),
    (-2, -1),
    (1, 2),
    (1, -2),
    (-1, 2),
    (-1, -2),
];
pub const KING_MOVES: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Every delta in `-reach..=reach` squared, row-major.
pub fn deltas(reach: i8) -> impl Iterator<Item = (i8, i8)> {
    (-reach..=reach).flat_map(move |dr| (-reach..=reach).map(move |dc| (dr, dc)))
}
