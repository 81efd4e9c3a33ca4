use ndarray::{Array1, Array2};

use crate::draw_source::DrawSource;

/// Uniform population in `[lower, upper]`, drawn row by row.
///
/// The convex combination never overflows, even when `upper - lower` is not
/// representable.
pub(crate) fn init_random<S: DrawSource + ?Sized>(
    npop: usize,
    lower: &Array1<f64>,
    upper: &Array1<f64>,
    draws: &mut S,
) -> Array2<f64> {
    let n = lower.len();
    let mut pop = Array2::<f64>::zeros((npop, n));
    for i in 0..npop {
        for j in 0..n {
            let u = draws.uniform();
            let x = lower[j] * (1.0 - u) + upper[j] * u;
            pop[(i, j)] = x.max(lower[j]).min(upper[j]);
        }
    }
    pop
}
