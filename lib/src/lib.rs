//! __Conway's Game of Life__ on a toroidal grid.
//!
//! The grid wraps around: row `0` is adjacent to the last row, and column `0`
//! to the last column.
//!
//! # Example
//!
//! ```rust
//! use torus_life_lib::{Config, Life};
//!
//! let config = Config::new(20).set_glider(true);
//! let mut life = Life::new(config.initial_grid().unwrap());
//! life.advance_by(4);
//!
//! // A glider moves one cell diagonally every four generations.
//! assert_eq!(life.population(), 5);
//! ```

mod cells;
mod config;
mod engine;
mod error;
mod grid;
mod loader;
pub mod patterns;

pub use cells::{State, ALIVE, DEAD};
pub use config::Config;
pub use engine::{next_state, step, step_into, Life};
pub use error::{Error, FileFormatError};
pub use grid::Grid;
pub use loader::{
    load_initial_grid, random_grid, read_pattern, read_pattern_file, Seed, ALIVE_PROBABILITY,
};

#[cfg(feature = "parallel")]
pub use engine::{par_step, par_step_into};
