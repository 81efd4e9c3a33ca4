use ndarray::{Array1, Array2};

use crate::draw_source::DrawSource;

/// DE/target-to-best/1: `x_i + F (x_best - x_i) + F (x_r1 - x_r2)`.
pub(crate) fn mutant_target_to_best1<S: DrawSource + ?Sized>(
    i: usize,
    pop: &Array2<f64>,
    best_x: &Array1<f64>,
    exclude: Option<usize>,
    f: f64,
    draws: &mut S,
) -> Array1<f64> {
    let idxs = draws.distinct_indices(pop.nrows(), exclude, 2);
    let r0 = idxs[0];
    let r1 = idxs[1];
    let target = pop.row(i).to_owned();
    &target
        + &((best_x - &target) * f)
        + &((pop.row(r0).to_owned() - pop.row(r1).to_owned()) * f)
}
