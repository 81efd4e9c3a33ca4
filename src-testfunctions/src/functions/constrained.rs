//! Constrained test functions
//!
//! The optimizer knows nothing about constraints: an infeasible point simply
//! gets a fitness of [`PENALTY_SENTINEL`], far above any feasible value.

use ndarray::Array1;

use super::unimodal::sphere;

/// Fitness returned for infeasible points
pub const PENALTY_SENTINEL: f64 = 1e10;

/// Feasibility of the penalized sphere: every coordinate must be >= 0.
/// Returns the violation (0 if satisfied, positive if violated)
pub fn nonnegative_constraint(x: &Array1<f64>) -> f64 {
    x.iter().map(|&xi| (-xi).max(0.0)).sum()
}

/// Sphere restricted to the non-negative orthant
/// Global minimum: f(x) = 0 at x = (0, 0, ..., 0)
/// Infeasible points: f(x) = PENALTY_SENTINEL
pub fn penalized_sphere(x: &Array1<f64>) -> f64 {
    if nonnegative_constraint(x) > 0.0 {
        return PENALTY_SENTINEL;
    }
    sphere(x)
}
