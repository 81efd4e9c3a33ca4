use ndarray::{Array1, Array2};

use crate::draw_source::DrawSource;

/// DE/best/2: `x_best + F (x_r1 - x_r2) + F (x_r3 - x_r4)`.
pub(crate) fn mutant_best2<S: DrawSource + ?Sized>(
    pop: &Array2<f64>,
    best_x: &Array1<f64>,
    exclude: Option<usize>,
    f: f64,
    draws: &mut S,
) -> Array1<f64> {
    let idxs = draws.distinct_indices(pop.nrows(), exclude, 4);
    let r0 = idxs[0];
    let r1 = idxs[1];
    let r2 = idxs[2];
    let r3 = idxs[3];
    best_x
        + &((pop.row(r0).to_owned() - pop.row(r1).to_owned()) * f)
        + &((pop.row(r2).to_owned() - pop.row(r3).to_owned()) * f)
}
