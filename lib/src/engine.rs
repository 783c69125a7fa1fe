//! Conway's rule, `B3/S23`, on the toroidal grid.

use crate::{
    cells::{State, ALIVE, DEAD},
    grid::Grid,
};
use std::mem;

/// The state of a cell in the next generation, given its current state
/// and the number of its living neighbors.
#[inline]
pub fn next_state(state: State, neighbors: usize) -> State {
    match (state, neighbors) {
        (State::Alive, 2) | (State::Alive, 3) => ALIVE,
        (State::Alive, _) => DEAD,
        (State::Dead, 3) => ALIVE,
        (State::Dead, _) => DEAD,
    }
}

/// Computes the next generation of `grid` into `next`.
///
/// Every cell is computed from `grid` only, so the order in which cells
/// are visited does not matter.
///
/// # Panics
///
/// Panics if the two grids have different sizes.
pub fn step_into(grid: &Grid, next: &mut Grid) {
    assert_eq!(grid.size(), next.size(), "grids should have the same size");
    for (i, row) in next.rows_mut().enumerate() {
        for (j, cell) in row.iter_mut().enumerate() {
            *cell = next_state(grid.get(i, j), grid.neighbors(i, j));
        }
    }
}

/// Computes the next generation of `grid`.
pub fn step(grid: &Grid) -> Grid {
    let mut next = grid.clone();
    step_into(grid, &mut next);
    next
}

/// Computes the next generation of `grid` into `next`, one row per rayon task.
///
/// Tasks only read `grid` and write disjoint rows of `next`.
///
/// # Panics
///
/// Panics if the two grids have different sizes.
#[cfg(feature = "parallel")]
pub fn par_step_into(grid: &Grid, next: &mut Grid) {
    use rayon::prelude::*;

    assert_eq!(grid.size(), next.size(), "grids should have the same size");
    next.cells_mut()
        .par_chunks_mut(grid.size())
        .enumerate()
        .for_each(|(i, row)| {
            for (j, cell) in row.iter_mut().enumerate() {
                *cell = next_state(grid.get(i, j), grid.neighbors(i, j));
            }
        });
}

/// Computes the next generation of `grid` in parallel.
#[cfg(feature = "parallel")]
pub fn par_step(grid: &Grid) -> Grid {
    let mut next = grid.clone();
    par_step_into(grid, &mut next);
    next
}

/// A running simulation.
///
/// Holds the current generation and a back buffer of the same size.
/// Each step is computed into the back buffer, which then swaps places
/// with the current one.
#[derive(Clone, Debug)]
pub struct Life {
    /// The current generation.
    current: Grid,
    /// Scratch space for the next generation.
    next: Grid,
    /// Number of steps taken since the initial grid.
    generation: u64,
}

impl Life {
    /// Starts a simulation from an initial grid.
    pub fn new(grid: Grid) -> Self {
        let next = grid.clone();
        Life {
            current: grid,
            next,
            generation: 0,
        }
    }

    /// The current generation.
    pub fn grid(&self) -> &Grid {
        &self.current
    }

    /// Number of steps taken since the initial grid.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Number of living cells in the current generation.
    pub fn population(&self) -> usize {
        self.current.population()
    }

    /// Advances one generation.
    pub fn advance(&mut self) -> &Grid {
        #[cfg(feature = "parallel")]
        par_step_into(&self.current, &mut self.next);
        #[cfg(not(feature = "parallel"))]
        step_into(&self.current, &mut self.next);

        mem::swap(&mut self.current, &mut self.next);
        self.generation += 1;
        &self.current
    }

    /// Advances `n` generations.
    pub fn advance_by(&mut self, n: u64) -> &Grid {
        for _ in 0..n {
            self.advance();
        }
        &self.current
    }

    /// Stops the simulation, returning the current generation.
    pub fn into_grid(self) -> Grid {
        self.current
    }
}
