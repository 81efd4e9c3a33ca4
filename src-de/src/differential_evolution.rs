use crate::{ConvergenceSink, DEConfig, DEReport, DifferentialEvolution, Result};
use ndarray::Array1;

/// Convenience function taking bounds as `(lower, upper)` pairs:
/// - `func`: objective function mapping x -> f(x), lower is better
/// - `bounds`: one pair per dimension
/// - `config`: DE configuration
pub fn differential_evolution<F>(func: &F, bounds: &[(f64, f64)], config: DEConfig) -> Result<DEReport>
where
	F: Fn(&Array1<f64>) -> f64,
{
	let (lower, upper) = split_bounds(bounds);
	let de = DifferentialEvolution::new(func, lower, upper, config)?;
	Ok(de.solve())
}

/// Same as [`differential_evolution`], reporting every generation to `sink`
pub fn differential_evolution_with_sink<F, K>(
	func: &F,
	bounds: &[(f64, f64)],
	config: DEConfig,
	sink: &mut K,
) -> Result<DEReport>
where
	F: Fn(&Array1<f64>) -> f64,
	K: ConvergenceSink + ?Sized,
{
	let (lower, upper) = split_bounds(bounds);
	let de = DifferentialEvolution::new(func, lower, upper, config)?;
	Ok(de.solve_with_sink(sink))
}

fn split_bounds(bounds: &[(f64, f64)]) -> (Array1<f64>, Array1<f64>) {
	let lower: Array1<f64> = bounds.iter().map(|b| b.0).collect();
	let upper: Array1<f64> = bounds.iter().map(|b| b.1).collect();
	(lower, upper)
}
