//! Cells in the cellular automaton.

use crate::error::FileFormatError;
use std::{
    fmt::{self, Display, Formatter},
    ops::Not,
    str::FromStr,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Possible states of a cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum State {
    /// A dead cell.
    #[default]
    Dead,
    /// A living cell.
    Alive,
}

/// The Dead state.
pub const DEAD: State = State::Dead;
/// The Alive state.
pub const ALIVE: State = State::Alive;

impl State {
    /// Whether the cell is alive.
    #[inline]
    pub fn is_alive(self) -> bool {
        self == ALIVE
    }

    /// The pixel intensity of the state: `255` for [`ALIVE`], `0` for [`DEAD`].
    ///
    /// This is also the spelling used when writing pattern files.
    #[inline]
    pub fn value(self) -> u8 {
        match self {
            State::Alive => 255,
            State::Dead => 0,
        }
    }
}

/// Flips the state.
impl Not for State {
    type Output = Self;

    #[inline]
    fn not(self) -> Self::Output {
        match self {
            State::Alive => DEAD,
            State::Dead => ALIVE,
        }
    }
}

impl From<bool> for State {
    #[inline]
    fn from(alive: bool) -> Self {
        if alive {
            ALIVE
        } else {
            DEAD
        }
    }
}

/// Parses a cell-state literal in a pattern file.
///
/// Accepted spellings:
///
/// * **Dead**: `0`, `0.0`, `.`, `DEAD`;
/// * **Alive**: `255`, `255.0`, `o`, `O`, `ALIVE`.
///
/// `DEAD` and `ALIVE` are case-insensitive. Anything else is rejected,
/// including other integers.
impl FromStr for State {
    type Err = FileFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "0" | "0.0" | "." => Ok(DEAD),
            "255" | "255.0" | "o" | "O" => Ok(ALIVE),
            _ if s.eq_ignore_ascii_case("dead") => Ok(DEAD),
            _ if s.eq_ignore_ascii_case("alive") => Ok(ALIVE),
            _ => Err(FileFormatError::InvalidCell {
                row: 0,
                col: 0,
                token: s.to_string(),
            }),
        }
    }
}

/// Displays the state in plaintext: `o` for living cells, `.` for dead cells.
impl Display for State {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        let c = match self {
            State::Alive => 'o',
            State::Dead => '.',
        };
        write!(f, "{}", c)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_literals() {
        for s in ["0", "0.0", ".", "dead", "DEAD"] {
            assert_eq!(s.parse::<State>(), Ok(DEAD), "{}", s);
        }
        for s in ["255", "255.0", "o", "O", "Alive"] {
            assert_eq!(s.parse::<State>(), Ok(ALIVE), "{}", s);
        }
    }

    #[test]
    fn reject_unknown_literals() {
        for s in ["1", "128", "-0", "x", ""] {
            assert!(s.parse::<State>().is_err(), "{:?}", s);
        }
    }

    #[test]
    fn not() {
        assert_eq!(!ALIVE, DEAD);
        assert_eq!(!DEAD, ALIVE);
        assert_eq!(State::default(), DEAD);
    }
}
