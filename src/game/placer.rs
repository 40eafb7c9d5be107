use super::grid::{Grid, Position};
use rand::{seq::IteratorRandom, Rng};
use std::collections::HashSet;
use thiserror::Error;

/// Picks random free cells of a grid
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct RandomPlacer<R> {
    grid: Grid,
    rng: R,
}

impl<R: Rng> RandomPlacer<R> {
    pub(crate) fn new(grid: Grid, rng: R) -> RandomPlacer<R> {
        RandomPlacer { grid, rng }
    }

    /// Choose a cell of the grid uniformly at random from those not in
    /// `exclude`.
    ///
    /// # Errors
    ///
    /// Returns `Err` if every cell of the grid is excluded.
    pub(crate) fn place(&mut self, exclude: &HashSet<Position>) -> Result<Position, GridFull> {
        self.grid
            .positions()
            .filter(|p| !exclude.contains(p))
            .choose(&mut self.rng)
            .ok_or(GridFull {
                width: self.grid.width,
                height: self.grid.height,
            })
    }
}

#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
#[error("no free cell left on the {width}x{height} grid")]
pub(crate) struct GridFull {
    width: u16,
    height: u16,
}
