use ndarray::{Array1, Array2};

use crate::draw_source::DrawSource;

/// DE/rand/1: `x_r1 + F (x_r2 - x_r3)`.
pub(crate) fn mutant_rand1<S: DrawSource + ?Sized>(
    pop: &Array2<f64>,
    exclude: Option<usize>,
    f: f64,
    draws: &mut S,
) -> Array1<f64> {
    let idxs = draws.distinct_indices(pop.nrows(), exclude, 3);
    let r0 = idxs[0];
    let r1 = idxs[1];
    let r2 = idxs[2];
    &pop.row(r0).to_owned() + &((pop.row(r1).to_owned() - pop.row(r2).to_owned()) * f)
}
