//! Built-in seeding patterns.
//!
//! Patterns are written in [Plaintext](https://conwaylife.com/wiki/Plaintext):
//! `o` is a living cell, `.` is a dead cell.

use crate::cells::{State, ALIVE, DEAD};

/// A small rectangular pattern.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pattern {
    /// Name of the pattern, used in error messages.
    pub name: &'static str,
    /// Rows of the pattern, from top to bottom.
    ///
    /// All rows have the same length.
    pub rows: &'static [&'static str],
}

impl Pattern {
    /// Number of rows.
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.rows.first().map_or(0, |row| row.len())
    }

    /// All cells of the pattern, as `(row, col, state)`, in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, State)> + '_ {
        self.rows.iter().enumerate().flat_map(|(i, row)| {
            row.bytes()
                .enumerate()
                .map(move |(j, c)| (i, j, if c == b'o' { ALIVE } else { DEAD }))
        })
    }
}

/// A pattern assembled from several smaller patterns inside a fixed frame.
///
/// Cells of the frame that are not covered by any part are dead.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Composite {
    /// Name of the pattern, used in error messages.
    pub name: &'static str,
    /// Number of rows of the frame.
    pub height: usize,
    /// Number of columns of the frame.
    pub width: usize,
    /// The parts, with the offsets `(row, col)` of their top-left corners
    /// inside the frame.
    pub parts: &'static [(usize, usize, Pattern)],
}

/// The [glider](https://conwaylife.com/wiki/Glider), moving towards the bottom right.
pub const GLIDER: Pattern = Pattern {
    name: "glider",
    rows: &[
        "..o", //
        "o.o", //
        ".oo",
    ],
};

/// The [block](https://conwaylife.com/wiki/Block).
pub const BLOCK: Pattern = Pattern {
    name: "block",
    rows: &[
        "oo", //
        "oo",
    ],
};

/// The left half of the Gosper glider gun, without its block.
pub const GOSPER_LEFT: Pattern = Pattern {
    name: "gosper-left",
    rows: &[
        "..oo....", //
        ".o...o..", //
        "o.....o.", //
        "o...o.oo", //
        "o.....o.", //
        ".o...o..", //
        "..oo....",
    ],
};

/// The right half of the Gosper glider gun, without its block.
pub const GOSPER_RIGHT: Pattern = Pattern {
    name: "gosper-right",
    rows: &[
        "....o", //
        "..o.o", //
        "oo...", //
        "oo...", //
        "oo...", //
        "..o.o", //
        "....o",
    ],
};

/// The [Gosper glider gun](https://conwaylife.com/wiki/Gosper_glider_gun),
/// in an 11 × 38 frame.
pub const GOSPER_GUN: Composite = Composite {
    name: "Gosper glider gun",
    height: 11,
    width: 38,
    parts: &[
        (5, 1, BLOCK),
        (3, 11, GOSPER_LEFT),
        (1, 21, GOSPER_RIGHT),
        (3, 35, BLOCK),
    ],
};

#[cfg(test)]
mod tests {
    use super::*;

    fn population(pattern: &Pattern) -> usize {
        pattern.cells().filter(|&(_, _, s)| s == ALIVE).count()
    }

    #[test]
    fn rectangular() {
        for pattern in [GLIDER, BLOCK, GOSPER_LEFT, GOSPER_RIGHT] {
            let width = pattern.width();
            assert!(pattern.rows.iter().all(|row| row.len() == width));
        }
    }

    #[test]
    fn glider_cells() {
        let alive = GLIDER
            .cells()
            .filter(|&(_, _, s)| s == ALIVE)
            .map(|(i, j, _)| (i, j))
            .collect::<Vec<_>>();
        assert_eq!(alive, vec![(0, 2), (1, 0), (1, 2), (2, 1), (2, 2)]);
    }

    #[test]
    fn gosper_parts_fit() {
        for &(i, j, part) in GOSPER_GUN.parts {
            assert!(i + part.height() <= GOSPER_GUN.height);
            assert!(j + part.width() <= GOSPER_GUN.width);
        }
        let total: usize = GOSPER_GUN.parts.iter().map(|(_, _, p)| population(p)).sum();
        assert_eq!(total, 36);
    }
}
