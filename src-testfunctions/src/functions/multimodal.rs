//! Multimodal test functions

use ndarray::Array1;

/// Rastrigin function - N-dimensional multimodal
/// Global minimum: f(x) = 0 at x = (0, 0, ..., 0)
/// Bounds: x_i in [-5.12, 5.12]
pub fn rastrigin(x: &Array1<f64>) -> f64 {
    let n = x.len() as f64;
    let sum: f64 = x
        .iter()
        .map(|&xi| xi.powi(2) - 10.0 * (2.0 * std::f64::consts::PI * xi).cos())
        .sum();
    10.0 * n + sum
}

/// Ackley function - N-dimensional multimodal
/// Global minimum: f(x) = 0 at x = (0, 0, ..., 0)
/// Bounds: x_i in [-32.768, 32.768]
pub fn ackley(x: &Array1<f64>) -> f64 {
    let n = x.len() as f64;
    let sum_sq: f64 = x.iter().map(|&xi| xi.powi(2)).sum();
    let sum_cos: f64 = x.iter().map(|&xi| (2.0 * std::f64::consts::PI * xi).cos()).sum();

    -20.0 * (-0.2 * (sum_sq / n).sqrt()).exp() - (sum_cos / n).exp() + 20.0 + std::f64::consts::E
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::{Array1, array};

    #[test]
    fn test_rastrigin_values() {
        assert!(rastrigin(&Array1::zeros(10)).abs() < 1e-12);
        // integer points sit on local minima: f = sum x_i^2
        assert!((rastrigin(&array![1.0, -2.0]) - 5.0).abs() < 1e-9);
        assert!(rastrigin(&array![0.5, 0.5]) > rastrigin(&array![1.0, 0.0]));
    }

    #[test]
    fn test_ackley_values() {
        assert!(ackley(&Array1::zeros(3)).abs() < 1e-12);
        assert!(ackley(&array![1.0, 1.0]) > 3.0);
    }
}
