use ndarray::{Array1, Array2};

use crate::draw_source::DrawSource;

/// DE/best/1: `x_best + F (x_r1 - x_r2)`, with `x_best` the global best.
pub(crate) fn mutant_best1<S: DrawSource + ?Sized>(
    pop: &Array2<f64>,
    best_x: &Array1<f64>,
    exclude: Option<usize>,
    f: f64,
    draws: &mut S,
) -> Array1<f64> {
    let idxs = draws.distinct_indices(pop.nrows(), exclude, 2);
    let r0 = idxs[0];
    let r1 = idxs[1];
    best_x + &((pop.row(r0).to_owned() - pop.row(r1).to_owned()) * f)
}
