use std::cmp::Ordering;

use ndarray::{Array1, Array2};

use crate::draw_source::DrawSource;

/// DE/rand/2/dir: sample three individuals, rank them by fitness
/// (`b` best, then `m`, then `w`) and build `x_b + F/2 (x_b - x_m - x_w)`.
///
/// Ties keep sampling order.
pub(crate) fn mutant_rand2_dir<S: DrawSource + ?Sized>(
    pop: &Array2<f64>,
    fitness: &Array1<f64>,
    exclude: Option<usize>,
    f: f64,
    draws: &mut S,
) -> Array1<f64> {
    let mut idxs = draws.distinct_indices(pop.nrows(), exclude, 3);
    idxs.sort_by(|&a, &b| fitness[a].partial_cmp(&fitness[b]).unwrap_or(Ordering::Equal));
    let b = pop.row(idxs[0]).to_owned();
    let m = pop.row(idxs[1]).to_owned();
    let w = pop.row(idxs[2]).to_owned();
    &b + &((&b - &m - &w) * (f / 2.0))
}
