//! Unimodal test functions

use ndarray::Array1;

/// Sphere function - N-dimensional bowl
/// Global minimum: f(x) = 0 at x = (0, 0, ..., 0)
/// Bounds: x_i in [-5.12, 5.12]
pub fn sphere(x: &Array1<f64>) -> f64 {
    x.iter().map(|&xi| xi * xi).sum()
}

/// Rosenbrock function - N-dimensional curved valley
/// Global minimum: f(x) = 0 at x = (1, 1, ..., 1)
/// Bounds: x_i in [-2.048, 2.048]
pub fn rosenbrock(x: &Array1<f64>) -> f64 {
    x.windows(2)
        .into_iter()
        .map(|w| 100.0 * (w[1] - w[0].powi(2)).powi(2) + (1.0 - w[0]).powi(2))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_sphere_values() {
        assert_eq!(sphere(&array![0.0, 0.0, 0.0]), 0.0);
        assert_eq!(sphere(&array![1.0, -2.0]), 5.0);
    }

    #[test]
    fn test_rosenbrock_values() {
        assert_eq!(rosenbrock(&array![1.0, 1.0, 1.0]), 0.0);
        // single term: 100 (0 - 0)^2 + (1 - 0)^2
        assert_eq!(rosenbrock(&array![0.0, 0.0]), 1.0);
        // fewer than two coordinates has no term
        assert_eq!(rosenbrock(&array![3.0]), 0.0);
    }
}
