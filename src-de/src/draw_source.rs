//! Source of every random draw made by the optimizer.
//!
//! The trajectory of a run is fully determined by the sequence of draws, so
//! the core never touches an RNG directly: it asks a [`DrawSource`] for one of
//! three kinds of draw, always in the same order.

use rand::Rng;

use crate::distinct_indices::distinct_indices;

/// Random draws consumed by initialization, mutation and crossover.
pub trait DrawSource {
    /// Uniform real in `[0, 1)`.
    fn uniform(&mut self) -> f64;

    /// Uniform index in `[0, n)`; `n > 0`.
    fn index_below(&mut self, n: usize) -> usize;

    /// `count` distinct indices of `0..pool_size`, sampled without
    /// replacement and never equal to `exclude`.
    fn distinct_indices(
        &mut self,
        pool_size: usize,
        exclude: Option<usize>,
        count: usize,
    ) -> Vec<usize>;
}

impl<R: Rng + ?Sized> DrawSource for R {
    fn uniform(&mut self) -> f64 {
        self.random::<f64>()
    }

    fn index_below(&mut self, n: usize) -> usize {
        self.random_range(0..n)
    }

    fn distinct_indices(
        &mut self,
        pool_size: usize,
        exclude: Option<usize>,
        count: usize,
    ) -> Vec<usize> {
        distinct_indices(exclude, count, pool_size, self)
    }
}
