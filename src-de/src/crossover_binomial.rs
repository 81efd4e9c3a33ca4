use ndarray::Array1;

use crate::draw_source::DrawSource;

/// Binomial crossover: coordinate `jrand` always comes from the donor, every
/// coordinate (including `jrand`) also draws one uniform and takes the donor
/// value when the draw is `< cr`.
pub(crate) fn binomial_crossover<S: DrawSource + ?Sized>(
    target: &Array1<f64>,
    donor: &Array1<f64>,
    cr: f64,
    draws: &mut S,
) -> Array1<f64> {
    let dim = target.len();
    let jrand = draws.index_below(dim);
    let mut trial = target.clone();
    trial[jrand] = donor[jrand];
    for j in 0..dim {
        if draws.uniform() < cr {
            trial[j] = donor[j];
        }
    }
    trial
}
