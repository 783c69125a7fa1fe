//! Simulation configuration.

use crate::{
    error::Error,
    grid::Grid,
    loader::{load_initial_grid, Seed},
};
use educe::Educe;
use log::warn;
use std::path::PathBuf;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Simulation configuration.
///
/// The seeding mode is given by independent flags, like on the command line.
/// See [`seed`](Self::seed) for how they are combined.
#[derive(Clone, Debug, Educe, PartialEq, Eq)]
#[educe(Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Config {
    /// Number of rows and columns of the grid.
    ///
    /// Ignored when a pattern file is used.
    #[educe(Default = 100)]
    pub size: usize,

    /// Starts from a single glider.
    pub glider: bool,

    /// Starts from a Gosper glider gun.
    pub gosper: bool,

    /// Starts from a pattern file.
    pub pattern_file: Option<PathBuf>,

    /// Seed of the random number generator for random seeding.
    ///
    /// `None` means that the grid is seeded from system entropy.
    pub random_seed: Option<u64>,

    /// Delay between two generations, in milliseconds.
    #[educe(Default = 50)]
    pub interval: u64,

    /// Number of generations to run.
    ///
    /// `None` means that it runs until stopped.
    pub generations: Option<u64>,
}

impl Config {
    /// Sets up a new configuration with given grid size.
    pub fn new(size: usize) -> Self {
        Config {
            size,
            ..Config::default()
        }
    }

    /// Sets whether to start from a glider.
    pub fn set_glider(mut self, glider: bool) -> Self {
        self.glider = glider;
        self
    }

    /// Sets whether to start from a Gosper glider gun.
    pub fn set_gosper(mut self, gosper: bool) -> Self {
        self.gosper = gosper;
        self
    }

    /// Sets the pattern file.
    pub fn set_pattern_file<T: Into<Option<PathBuf>>>(mut self, pattern_file: T) -> Self {
        self.pattern_file = pattern_file.into();
        self
    }

    /// Sets the seed of the random number generator.
    pub fn set_random_seed<T: Into<Option<u64>>>(mut self, random_seed: T) -> Self {
        self.random_seed = random_seed.into();
        self
    }

    /// Sets the delay between two generations.
    pub fn set_interval(mut self, interval: u64) -> Self {
        self.interval = interval;
        self
    }

    /// Sets the number of generations to run.
    pub fn set_generations<T: Into<Option<u64>>>(mut self, generations: T) -> Self {
        self.generations = generations.into();
        self
    }

    /// The seeding mode.
    ///
    /// When several modes are set, the first one in this list wins:
    ///
    /// 1. glider;
    /// 2. Gosper glider gun;
    /// 3. pattern file;
    /// 4. random, if none of the above is set.
    pub fn seed(&self) -> Seed {
        let selected = [self.glider, self.gosper, self.pattern_file.is_some()]
            .iter()
            .filter(|&&b| b)
            .count();

        let seed = if self.glider {
            Seed::Glider
        } else if self.gosper {
            Seed::Gosper
        } else if let Some(path) = &self.pattern_file {
            Seed::PatternFile(path.clone())
        } else {
            Seed::Random
        };

        if selected > 1 {
            warn!("Several seeding modes are set; using {:?}", seed);
        }
        seed
    }

    /// Creates the initial grid.
    pub fn initial_grid(&self) -> Result<Grid, Error> {
        let grid = load_initial_grid(&self.seed(), self.size, self.random_seed)?;
        if grid.size() != self.size {
            warn!(
                "The pattern file sets the grid size to {}, overriding {}",
                grid.size(),
                self.size
            );
        }
        Ok(grid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default() {
        let config = Config::default();
        assert_eq!(config.size, 100);
        assert_eq!(config.interval, 50);
        assert_eq!(config.seed(), Seed::Random);
    }

    #[test]
    fn precedence() {
        let path = PathBuf::from("pattern.txt");
        let all = Config::new(50)
            .set_glider(true)
            .set_gosper(true)
            .set_pattern_file(path.clone());
        assert_eq!(all.seed(), Seed::Glider);

        let no_glider = all.clone().set_glider(false);
        assert_eq!(no_glider.seed(), Seed::Gosper);

        let file_only = no_glider.set_gosper(false);
        assert_eq!(file_only.seed(), Seed::PatternFile(path));

        let none = file_only.set_pattern_file(None);
        assert_eq!(none.seed(), Seed::Random);
    }

    #[test]
    fn gosper_before_file() {
        let config = Config::new(50)
            .set_gosper(true)
            .set_pattern_file(PathBuf::from("pattern.txt"));
        assert_eq!(config.seed(), Seed::Gosper);
    }
}
