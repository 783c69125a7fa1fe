//! Building the initial grid.

use crate::{
    cells::State,
    error::{Error, FileFormatError},
    grid::Grid,
    patterns::{GLIDER, GOSPER_GUN},
};
use log::{debug, info};
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::{Path, PathBuf},
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Probability that a cell is alive in a randomly seeded grid.
pub const ALIVE_PROBABILITY: f64 = 0.2;

/// Where the initial grid comes from.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Seed {
    /// Every cell is independently alive with probability [`ALIVE_PROBABILITY`].
    Random,
    /// A single glider with its top-left corner at `(1, 1)`.
    Glider,
    /// A Gosper glider gun with its top-left corner at `(1, 1)`.
    Gosper,
    /// A pattern file, which also decides the grid size.
    PatternFile(PathBuf),
}

/// Creates the initial grid.
///
/// `size` is ignored for [`Seed::PatternFile`], whose first line gives the size.
/// `random_seed` is only used by [`Seed::Random`]; without it the grid is
/// seeded from system entropy.
pub fn load_initial_grid(
    seed: &Seed,
    size: usize,
    random_seed: Option<u64>,
) -> Result<Grid, Error> {
    debug!("Seeding a {0}x{0} grid with {1:?}", size, seed);
    match seed {
        Seed::Random => {
            let mut rng = match random_seed {
                Some(s) => StdRng::seed_from_u64(s),
                None => StdRng::from_entropy(),
            };
            random_grid(size, ALIVE_PROBABILITY, &mut rng)
        }
        Seed::Glider => {
            let mut grid = Grid::new(size)?;
            grid.stamp(&GLIDER, 1, 1)?;
            Ok(grid)
        }
        Seed::Gosper => {
            let mut grid = Grid::new(size)?;
            grid.stamp_composite(&GOSPER_GUN, 1, 1)?;
            Ok(grid)
        }
        Seed::PatternFile(path) => Ok(read_pattern_file(path)?),
    }
}

/// Creates a grid whose cells are independently alive with the given probability.
///
/// # Panics
///
/// Panics if `probability` is not in `[0, 1]`.
pub fn random_grid<R: Rng + ?Sized>(
    size: usize,
    probability: f64,
    rng: &mut R,
) -> Result<Grid, Error> {
    let mut cells = Grid::cell_buffer(size)?;
    cells.extend((0..size * size).map(|_| State::from(rng.gen_bool(probability))));
    Ok(Grid::from_cells(size, cells))
}

/// Reads a pattern file.
pub fn read_pattern_file<P: AsRef<Path>>(path: P) -> Result<Grid, FileFormatError> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let grid = read_pattern(BufReader::new(file))?;
    info!(
        "Loaded a {0}x{0} grid from {1}",
        grid.size(),
        path.display()
    );
    Ok(grid)
}

/// Reads a grid in the pattern file format.
///
/// The first line is the size `n`. Each of the next `n` lines contains
/// `n` cell states separated by whitespace; see [`State`]'s `FromStr`
/// implementation for the accepted spellings. Blank lines after the last
/// row are ignored.
pub fn read_pattern<R: BufRead>(reader: R) -> Result<Grid, FileFormatError> {
    let mut lines = reader.lines();

    let size_line = lines.next().ok_or(FileFormatError::MissingSize)??;
    let size_str = size_line.trim();
    let size = match size_str.parse::<usize>() {
        Ok(size) if size > 0 && size.checked_mul(size).is_some() => size,
        _ => return Err(FileFormatError::InvalidSize(size_str.to_string())),
    };

    // The header alone is not trusted with an allocation; cells are
    // pushed as their rows are read.
    let mut cells = Vec::new();
    for row in 0..size {
        let line = lines.next().ok_or(FileFormatError::MissingRow {
            expected: size,
            found: row,
        })??;
        let tokens = line.split_whitespace().collect::<Vec<_>>();
        if tokens.len() != size {
            return Err(FileFormatError::RowLength {
                row,
                expected: size,
                found: tokens.len(),
            });
        }
        for (col, token) in tokens.into_iter().enumerate() {
            let state = token
                .parse::<State>()
                .map_err(|_| FileFormatError::InvalidCell {
                    row,
                    col,
                    token: token.to_string(),
                })?;
            cells.push(state);
        }
    }

    for line in lines {
        let line = line?;
        if !line.trim().is_empty() {
            return Err(FileFormatError::TrailingContent(line));
        }
    }

    Ok(Grid::from_cells(size, cells))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cells::{ALIVE, DEAD};

    #[test]
    fn read() -> Result<(), FileFormatError> {
        let grid = read_pattern("3\n0 255 0\n0\t0 255\n255 255 255\n\n".as_bytes())?;
        assert_eq!(grid.size(), 3);
        assert_eq!(grid.to_string(), ".o.\n..o\nooo\n");
        Ok(())
    }

    #[test]
    fn read_crlf() -> Result<(), FileFormatError> {
        let grid = read_pattern(" 2 \r\no .\r\n. o\r\n".as_bytes())?;
        assert_eq!(grid.get(0, 0), ALIVE);
        assert_eq!(grid.get(0, 1), DEAD);
        assert_eq!(grid.get(1, 1), ALIVE);
        Ok(())
    }

    #[test]
    fn missing_size() {
        assert_eq!(read_pattern("".as_bytes()), Err(FileFormatError::MissingSize));
    }

    #[test]
    fn invalid_size() {
        for text in ["abc\n", "0\n", "-3\n", "2.5\n"] {
            assert!(
                matches!(
                    read_pattern(text.as_bytes()),
                    Err(FileFormatError::InvalidSize(_))
                ),
                "{:?}",
                text
            );
        }
    }

    #[test]
    fn huge_size_line() {
        let size = (1u128 << (usize::BITS / 2)).to_string();
        assert_eq!(
            read_pattern(format!("{}\n0\n", size).as_bytes()),
            Err(FileFormatError::InvalidSize(size))
        );
        assert_eq!(
            read_pattern("1000000000\n0 0\n".as_bytes()),
            Err(FileFormatError::RowLength {
                row: 0,
                expected: 1_000_000_000,
                found: 2,
            })
        );
        assert_eq!(
            read_pattern("1000000000\n".as_bytes()),
            Err(FileFormatError::MissingRow {
                expected: 1_000_000_000,
                found: 0,
            })
        );
    }

    #[test]
    fn truncated() {
        assert_eq!(
            read_pattern("3\n0 0 0\n0 0 0\n".as_bytes()),
            Err(FileFormatError::MissingRow {
                expected: 3,
                found: 2,
            })
        );
    }

    #[test]
    fn short_row() {
        assert_eq!(
            read_pattern("2\n0 0\n255\n".as_bytes()),
            Err(FileFormatError::RowLength {
                row: 1,
                expected: 2,
                found: 1,
            })
        );
    }

    #[test]
    fn long_row() {
        assert!(matches!(
            read_pattern("2\n0 0 0\n0 0\n".as_bytes()),
            Err(FileFormatError::RowLength { row: 0, found: 3, .. })
        ));
    }

    #[test]
    fn invalid_cell() {
        assert_eq!(
            read_pattern("2\n0 0\n0 128\n".as_bytes()),
            Err(FileFormatError::InvalidCell {
                row: 1,
                col: 1,
                token: String::from("128"),
            })
        );
    }

    #[test]
    fn trailing_content() {
        assert_eq!(
            read_pattern("1\n0\n0\n".as_bytes()),
            Err(FileFormatError::TrailingContent(String::from("0")))
        );
    }

    #[test]
    fn missing_file() {
        let path = std::env::temp_dir().join("torus-life-no-such-file.txt");
        assert!(matches!(
            read_pattern_file(path),
            Err(FileFormatError::Io(_))
        ));
    }

    #[test]
    fn seeded_random_is_reproducible() -> Result<(), Error> {
        let a = load_initial_grid(&Seed::Random, 32, Some(7))?;
        let b = load_initial_grid(&Seed::Random, 32, Some(7))?;
        assert_eq!(a, b);
        Ok(())
    }

    #[test]
    fn random_extremes() -> Result<(), Error> {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(random_grid(10, 0.0, &mut rng)?.population(), 0);
        assert_eq!(random_grid(10, 1.0, &mut rng)?.population(), 100);
        assert_eq!(random_grid(0, 0.5, &mut rng), Err(Error::NonPositiveError));
        Ok(())
    }

    #[test]
    fn random_huge_size() {
        let mut rng = StdRng::seed_from_u64(1);
        let size = 1 << (usize::BITS / 2);
        assert_eq!(
            random_grid(size, 0.5, &mut rng),
            Err(Error::GridTooLargeError(size))
        );
        assert_eq!(
            load_initial_grid(&Seed::Random, usize::MAX, Some(1)),
            Err(Error::GridTooLargeError(usize::MAX))
        );
    }
}
