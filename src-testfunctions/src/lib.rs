//! Optimization test functions library
//!
//! Objective functions used to exercise the Differential Evolution optimizer,
//! together with their usual search box and known global minima.
//!
//! # Example
//!
//! ```rust
//! use ndarray::Array1;
//! use devo_testfunctions::*;
//!
//! let x = Array1::from_vec(vec![0.0, 0.0]);
//! assert_eq!(sphere(&x), 0.0);
//!
//! let f = get_function("rastrigin").unwrap();
//! assert!(f(&x).abs() < 1e-12);
//! let bounds = get_function_bounds_vec("rastrigin", (-1.0, 1.0));
//! assert_eq!(bounds[0], (-5.12, 5.12));
//! ```

use ndarray::{Array1, Array2};
use std::collections::HashMap;

pub mod functions;
pub use functions::*;

/// Signature shared by every test function
pub type TestFunction = fn(&Array1<f64>) -> f64;

/// Metadata for a test function including bounds and known minima
#[derive(Debug, Clone)]
pub struct FunctionMetadata {
    /// Function name
    pub name: String,
    /// Bounds for each dimension (min, max)
    pub bounds: Vec<(f64, f64)>,
    /// Global minima locations and values
    pub global_minima: Vec<(Vec<f64>, f64)>,
    /// Inequality constraint functions (should be <= 0 when satisfied)
    pub inequality_constraints: Vec<TestFunction>,
    /// Description of the function
    pub description: String,
    /// Whether the function is multimodal
    pub multimodal: bool,
    /// Typical dimension(s) for the function
    pub dimensions: Vec<usize>,
}

/// Create bounds matrix for optimization (2 x n matrix)
/// bounds[[0, i]] = lower bound, bounds[[1, i]] = upper bound
pub fn create_bounds(n: usize, lower: f64, upper: f64) -> Array2<f64> {
    Array2::from_shape_fn((2, n), |(i, _)| if i == 0 { lower } else { upper })
}

/// Look up a test function by name
pub fn get_function(name: &str) -> Option<TestFunction> {
    match name {
        "sphere" => Some(sphere),
        "rastrigin" => Some(rastrigin),
        "rosenbrock" => Some(rosenbrock),
        "ackley" => Some(ackley),
        "penalized_sphere" => Some(penalized_sphere),
        _ => None,
    }
}

/// Names of every function [`get_function`] knows, sorted
pub fn function_names() -> Vec<&'static str> {
    vec!["ackley", "penalized_sphere", "rastrigin", "rosenbrock", "sphere"]
}

/// Get metadata for all available test functions
pub fn get_function_metadata() -> HashMap<String, FunctionMetadata> {
    let mut metadata = HashMap::new();

    metadata.insert(
        "sphere".to_string(),
        FunctionMetadata {
            name: "sphere".to_string(),
            bounds: vec![(-5.12, 5.12); 2], // Default 2D, but can be N-dimensional
            global_minima: vec![(vec![0.0, 0.0], 0.0)],
            inequality_constraints: vec![],
            description: "N-dimensional unimodal bowl".to_string(),
            multimodal: false,
            dimensions: vec![2, 5, 10, 30],
        },
    );

    metadata.insert(
        "rastrigin".to_string(),
        FunctionMetadata {
            name: "rastrigin".to_string(),
            bounds: vec![(-5.12, 5.12); 2],
            global_minima: vec![(vec![0.0, 0.0], 0.0)],
            inequality_constraints: vec![],
            description: "N-dimensional multimodal function with a regular grid of local minima"
                .to_string(),
            multimodal: true,
            dimensions: vec![2, 5, 10],
        },
    );

    metadata.insert(
        "rosenbrock".to_string(),
        FunctionMetadata {
            name: "rosenbrock".to_string(),
            bounds: vec![(-2.048, 2.048); 2],
            global_minima: vec![(vec![1.0, 1.0], 0.0)],
            inequality_constraints: vec![],
            description: "N-dimensional unimodal function with a curved valley".to_string(),
            multimodal: false,
            dimensions: vec![2, 5, 10],
        },
    );

    metadata.insert(
        "ackley".to_string(),
        FunctionMetadata {
            name: "ackley".to_string(),
            bounds: vec![(-32.768, 32.768); 2],
            global_minima: vec![(vec![0.0, 0.0], 0.0)],
            inequality_constraints: vec![],
            description: "N-dimensional multimodal function".to_string(),
            multimodal: true,
            dimensions: vec![2, 5, 10],
        },
    );

    metadata.insert(
        "penalized_sphere".to_string(),
        FunctionMetadata {
            name: "penalized_sphere".to_string(),
            bounds: vec![(-5.0, 5.0); 2],
            global_minima: vec![(vec![0.0, 0.0], 0.0)],
            inequality_constraints: vec![nonnegative_constraint as TestFunction],
            description: "Sphere on the non-negative orthant, penalty sentinel elsewhere"
                .to_string(),
            multimodal: false,
            dimensions: vec![2, 5, 10],
        },
    );

    metadata
}

/// Get the default bounds of a function, if known
pub fn get_function_bounds(function_name: &str) -> Option<Vec<(f64, f64)>> {
    get_function_metadata().get(function_name).map(|meta| meta.bounds.clone())
}

/// Bounds as a Vec for optimization.
/// Returns 2D default bounds if the function is not found
pub fn get_function_bounds_vec(function_name: &str, default_bounds: (f64, f64)) -> Vec<(f64, f64)> {
    match get_function_bounds(function_name) {
        Some(bounds) if !bounds.is_empty() => bounds,
        _ => vec![default_bounds; 2],
    }
}
