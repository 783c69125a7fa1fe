//! The grid.

use crate::{
    cells::{State, DEAD},
    error::Error,
    patterns::{Composite, Pattern},
};
use log::info;
use std::{
    fmt::{self, Display, Formatter},
    fs::File,
    io::{self, BufWriter, Write},
    path::Path,
};

/// Offsets of the eight cells in the Moore neighborhood.
const NBHD: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// A square grid of cells whose opposite edges are adjacent.
///
/// Cells are stored row by row. The size never changes after creation.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Grid {
    /// Number of rows, which is also the number of columns.
    size: usize,
    /// All the cells, row-major.
    cells: Vec<State>,
}

impl Grid {
    /// Creates a grid of dead cells.
    pub fn new(size: usize) -> Result<Self, Error> {
        let mut cells = Grid::cell_buffer(size)?;
        cells.resize(size * size, DEAD);
        Ok(Grid { size, cells })
    }

    /// An empty buffer with room for all the cells of a grid of this size.
    ///
    /// Fails instead of panicking or aborting when the size is zero or when
    /// the cells cannot be allocated.
    pub(crate) fn cell_buffer(size: usize) -> Result<Vec<State>, Error> {
        if size == 0 {
            return Err(Error::NonPositiveError);
        }
        let len = size
            .checked_mul(size)
            .ok_or(Error::GridTooLargeError(size))?;
        let mut cells = Vec::new();
        cells
            .try_reserve_exact(len)
            .map_err(|_| Error::GridTooLargeError(size))?;
        Ok(cells)
    }

    /// Creates a grid from its rows.
    ///
    /// Every row should have as many cells as there are rows.
    pub(crate) fn from_cells(size: usize, cells: Vec<State>) -> Self {
        debug_assert_eq!(cells.len(), size * size);
        Grid { size, cells }
    }

    /// Number of rows (and columns).
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    fn index(&self, row: usize, col: usize) -> usize {
        debug_assert!(row < self.size && col < self.size);
        row * self.size + col
    }

    /// Gets the state of a cell.
    ///
    /// # Panics
    ///
    /// Panics if `(row, col)` is outside the grid.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> State {
        self.cells[self.index(row, col)]
    }

    /// Sets the state of a cell.
    ///
    /// # Panics
    ///
    /// Panics if `(row, col)` is outside the grid.
    #[inline]
    pub fn set(&mut self, row: usize, col: usize, state: State) {
        let i = self.index(row, col);
        self.cells[i] = state;
    }

    /// Gets the state of a cell, wrapping the coordinates around the edges.
    #[inline]
    pub fn get_wrapped(&self, row: isize, col: isize) -> State {
        let n = self.size as isize;
        self.get(row.rem_euclid(n) as usize, col.rem_euclid(n) as usize)
    }

    /// Number of living cells among the eight neighbors of a cell.
    ///
    /// On grids smaller than 3 × 3 some neighbors are the same cell,
    /// or the cell itself; each is counted once per offset.
    pub fn neighbors(&self, row: usize, col: usize) -> usize {
        let (row, col) = (row as isize, col as isize);
        NBHD.iter()
            .filter(|&&(di, dj)| self.get_wrapped(row + di, col + dj).is_alive())
            .count()
    }

    /// Number of living cells.
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|s| s.is_alive()).count()
    }

    /// Iterates over the rows.
    pub fn rows(&self) -> impl Iterator<Item = &[State]> + '_ {
        self.cells.chunks(self.size)
    }

    pub(crate) fn rows_mut(&mut self) -> impl Iterator<Item = &mut [State]> + '_ {
        self.cells.chunks_mut(self.size)
    }

    #[cfg(feature = "parallel")]
    pub(crate) fn cells_mut(&mut self) -> &mut [State] {
        &mut self.cells
    }

    /// Writes a pattern with its top-left corner at `(row, col)`.
    ///
    /// Dead cells of the pattern overwrite the grid as well.
    /// Returns an error if the pattern does not fit.
    pub fn stamp(&mut self, pattern: &Pattern, row: usize, col: usize) -> Result<(), Error> {
        self.check_fit(pattern.name, pattern.height(), pattern.width(), row, col)?;
        for (i, j, state) in pattern.cells() {
            self.set(row + i, col + j, state);
        }
        Ok(())
    }

    /// Writes a composite pattern with the top-left corner of its frame at `(row, col)`.
    ///
    /// The whole frame is cleared first.
    pub fn stamp_composite(
        &mut self,
        composite: &Composite,
        row: usize,
        col: usize,
    ) -> Result<(), Error> {
        self.check_fit(composite.name, composite.height, composite.width, row, col)?;
        for i in row..row + composite.height {
            for j in col..col + composite.width {
                self.set(i, j, DEAD);
            }
        }
        for (i, j, part) in composite.parts {
            self.stamp(part, row + i, col + j)?;
        }
        Ok(())
    }

    fn check_fit(
        &self,
        name: &'static str,
        height: usize,
        width: usize,
        row: usize,
        col: usize,
    ) -> Result<(), Error> {
        let min = (row + height).max(col + width);
        if self.size < min {
            return Err(Error::GridTooSmallError {
                pattern: name,
                size: self.size,
                min,
            });
        }
        Ok(())
    }

    /// Writes the grid in the pattern file format.
    ///
    /// The first line is the size; each following line is a row of
    /// space-separated `0` (dead) or `255` (alive).
    pub fn write_pattern<W: Write>(&self, mut writer: W) -> io::Result<()> {
        writeln!(writer, "{}", self.size)?;
        for row in self.rows() {
            let line = row
                .iter()
                .map(|s| s.value().to_string())
                .collect::<Vec<_>>()
                .join(" ");
            writeln!(writer, "{}", line)?;
        }
        writer.flush()
    }

    /// Saves the grid to a pattern file.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), Error> {
        let path = path.as_ref();
        let file = File::create(path)?;
        self.write_pattern(BufWriter::new(file))?;
        info!("Saved a {0}x{0} grid to {1}", self.size, path.display());
        Ok(())
    }
}

/// Displays the grid in [Plaintext](https://conwaylife.com/wiki/Plaintext),
/// one row per line.
impl Display for Grid {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        for row in self.rows() {
            for state in row {
                write!(f, "{}", state)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        cells::ALIVE,
        patterns::{GLIDER, GOSPER_GUN},
    };

    #[test]
    fn empty_size() {
        assert_eq!(Grid::new(0), Err(Error::NonPositiveError));
    }

    #[test]
    fn huge_size() {
        let size = 1 << (usize::BITS / 2);
        assert_eq!(Grid::new(size), Err(Error::GridTooLargeError(size)));
        assert_eq!(
            Grid::new(usize::MAX),
            Err(Error::GridTooLargeError(usize::MAX))
        );
        assert!(Error::GridTooLargeError(size).is_configuration());
    }

    #[test]
    #[cfg(target_pointer_width = "64")]
    fn unallocatable_size() {
        // The square fits in a `usize` but not in any address space.
        let size = 3_000_000_000;
        assert_eq!(Grid::new(size), Err(Error::GridTooLargeError(size)));
    }

    #[test]
    fn wrapped() -> Result<(), Error> {
        let mut grid = Grid::new(5)?;
        grid.set(0, 4, ALIVE);
        assert_eq!(grid.get_wrapped(-5, -1), ALIVE);
        assert_eq!(grid.get_wrapped(5, 9), ALIVE);
        assert_eq!(grid.get_wrapped(0, 0), DEAD);
        Ok(())
    }

    #[test]
    fn corner_neighbors() -> Result<(), Error> {
        let mut grid = Grid::new(6)?;
        grid.set(5, 5, ALIVE);
        grid.set(0, 5, ALIVE);
        grid.set(5, 0, ALIVE);
        assert_eq!(grid.neighbors(0, 0), 3);
        assert_eq!(grid.neighbors(3, 3), 0);
        Ok(())
    }

    #[test]
    fn tiny_grid_neighbors() -> Result<(), Error> {
        let mut grid = Grid::new(1)?;
        grid.set(0, 0, ALIVE);
        assert_eq!(grid.neighbors(0, 0), 8);
        Ok(())
    }

    #[test]
    fn stamp_glider() -> Result<(), Error> {
        let mut grid = Grid::new(4)?;
        grid.stamp(&GLIDER, 1, 1)?;
        assert_eq!(grid.to_string(), "....\n...o\n.o.o\n..oo\n");
        assert_eq!(
            grid.stamp(&GLIDER, 2, 1),
            Err(Error::GridTooSmallError {
                pattern: "glider",
                size: 4,
                min: 5,
            })
        );
        Ok(())
    }

    #[test]
    fn stamp_gosper() -> Result<(), Error> {
        let mut grid = Grid::new(39)?;
        grid.stamp_composite(&GOSPER_GUN, 1, 1)?;
        assert_eq!(grid.population(), 36);
        assert_eq!(grid.get(6, 2), ALIVE);
        assert_eq!(grid.get(4, 37), ALIVE);

        let mut grid = Grid::new(38)?;
        assert!(grid.stamp_composite(&GOSPER_GUN, 1, 1).is_err());
        assert_eq!(grid.population(), 0);
        Ok(())
    }

    #[test]
    fn write_pattern() -> Result<(), Box<dyn std::error::Error>> {
        let mut grid = Grid::new(2)?;
        grid.set(1, 0, ALIVE);
        let mut buf = Vec::new();
        grid.write_pattern(&mut buf)?;
        assert_eq!(String::from_utf8(buf)?, "2\n0 0\n255 0\n");
        Ok(())
    }
}
