use ndarray::{Array1, Array2};

use crate::draw_source::DrawSource;

/// DE/rand/2: `x_r1 + F (x_r2 - x_r3) + F (x_r4 - x_r5)`.
pub(crate) fn mutant_rand2<S: DrawSource + ?Sized>(
    pop: &Array2<f64>,
    exclude: Option<usize>,
    f: f64,
    draws: &mut S,
) -> Array1<f64> {
    let idxs = draws.distinct_indices(pop.nrows(), exclude, 5);
    let r0 = idxs[0];
    let r1 = idxs[1];
    let r2 = idxs[2];
    let r3 = idxs[3];
    let r4 = idxs[4];
    &pop.row(r0).to_owned()
        + &((pop.row(r1).to_owned() - pop.row(r2).to_owned()) * f)
        + &((pop.row(r3).to_owned() - pop.row(r4).to_owned()) * f)
}
