use ndarray::Array1;

/// Clamp every coordinate of `x` into `[lower, upper]`.
///
/// A NaN coordinate (donor arithmetic `inf - inf` on very wide bounds) is
/// reset to its lower bound.
pub(crate) fn clip_inplace(x: &mut Array1<f64>, lower: &Array1<f64>, upper: &Array1<f64>) {
    for i in 0..x.len() {
        if x[i].is_nan() {
            x[i] = lower[i];
        } else if x[i] > upper[i] {
            x[i] = upper[i];
        } else if x[i] < lower[i] {
            x[i] = lower[i];
        }
    }
}
