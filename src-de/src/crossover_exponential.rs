use ndarray::Array1;

use crate::draw_source::DrawSource;

/// Exponential crossover.
///
/// The run length `L` starts at 1 and grows while a uniform draw is `<= cr`
/// and `L <= dim`; the draw comes first, so the last test always consumes
/// one draw and `L` can reach `dim + 1`. The start index is drawn after the
/// run length. Donor coordinates `n, n+1, ..., n+L-1` (mod `dim`) replace
/// the target's.
pub(crate) fn exponential_crossover<S: DrawSource + ?Sized>(
    target: &Array1<f64>,
    donor: &Array1<f64>,
    cr: f64,
    draws: &mut S,
) -> Array1<f64> {
    let dim = target.len();
    let mut trial = target.clone();
    let mut l = 1usize;
    while draws.uniform() <= cr && l <= dim {
        l += 1;
    }
    let n = draws.index_below(dim);
    for j in n..n + l {
        let j = j % dim;
        trial[j] = donor[j];
    }
    trial
}
