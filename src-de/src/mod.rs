//! Differential Evolution (DE) global optimizer in pure Rust using ndarray
//!
//! Minimises a black-box objective over a box `[lower, upper]` with the
//! classic steady-state DE loop: every generation visits each individual in
//! index order, builds a donor by mutation, clamps it into the box, crosses it
//! with the target and keeps the trial only when it is strictly better.
//! Individuals later in a generation already see the replacements made
//! earlier in the same generation.
//!
//! Supported features:
//! - Mutation strategies: rand/1, best/1, target-to-best/1, best/2, rand/2, rand/2/dir
//! - Exponential and binomial crossover
//! - Fixed budget of generations, no early stop
//! - Convergence trace and convergence iteration (generation of last improvement)
//! - Reproducible runs from a seed, or from any [`DrawSource`]
//! - Penalty-valued objectives: infeasibility is just a large fitness
//!
//! ```rust
//! use devo_de::{differential_evolution, DEConfigBuilder};
//!
//! let bounds = vec![(-5.12, 5.12); 2];
//! let config = DEConfigBuilder::new()
//! 	.npop(20)
//! 	.iter(200)
//! 	.recombination(0.9)
//! 	.mutation(0.5)
//! 	.seed(42)
//! 	.build()
//! 	.expect("valid config");
//! let sphere = |x: &ndarray::Array1<f64>| -> f64 { x.iter().map(|v| v * v).sum() };
//! let report = differential_evolution(&sphere, &bounds, config).expect("valid bounds");
//! assert!(report.best_fitness < 1e-3);
//! ```

use std::fmt;
use std::str::FromStr;

use ndarray::{Array1, Array2};
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

pub mod error;
pub use error::{DEError, RecordError, Result};

pub mod draw_source;
pub use draw_source::DrawSource;

mod distinct_indices;
mod init_random;
mod run_state;

mod mutant_best1;
mod mutant_best2;
mod mutant_rand1;
mod mutant_rand2;
mod mutant_rand2_dir;
mod mutant_target_to_best1;

mod clip_inplace;
mod crossover_binomial;
mod crossover_exponential;

pub mod differential_evolution;
pub mod optimization_recorder;
pub mod plot;
pub mod run_recorded;
pub mod sink;
pub use differential_evolution::{differential_evolution, differential_evolution_with_sink};
pub use optimization_recorder::{OptimizationRecord, OptimizationRecorder};
pub use run_recorded::run_recorded_differential_evolution;
pub use sink::{ConvergenceSink, FnSink, NullSink};


use run_state::{DEState, Selection};

/// Index and value of the first strict minimum, skipping NaN entries.
/// Returns NaN only when every entry is NaN.
pub(crate) fn argmin(v: &Array1<f64>) -> (usize, f64) {
	let mut best_i = 0usize;
	let mut best_v = v[0];
	for (i, &val) in v.iter().enumerate() {
		if val < best_v || (best_v.is_nan() && !val.is_nan()) {
			best_v = val;
			best_i = i;
		}
	}
	(best_i, best_v)
}

/// Mutation strategy producing the donor vector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
	/// `x_r1 + F (x_r2 - x_r3)`
	Rand1,
	/// `x_best + F (x_r1 - x_r2)`
	Best1,
	/// `x_i + F (x_best - x_i) + F (x_r1 - x_r2)`
	TargetToBest1,
	/// `x_best + F (x_r1 - x_r2) + F (x_r3 - x_r4)`
	Best2,
	/// `x_r1 + F (x_r2 - x_r3) + F (x_r4 - x_r5)`
	Rand2,
	/// Fitness-directed: the three sampled individuals are ranked b <= m <= w
	/// and the donor is `x_b + F/2 (x_b - x_m - x_w)`
	Rand2Dir,
}

impl Strategy {
	/// Number of distinct individuals sampled per donor
	pub fn required_samples(&self) -> usize {
		match self {
			Strategy::Best1 | Strategy::TargetToBest1 => 2,
			Strategy::Rand1 | Strategy::Rand2Dir => 3,
			Strategy::Best2 => 4,
			Strategy::Rand2 => 5,
		}
	}

	/// Notation used in `DE/x/y/z`, e.g. `rand/2/dir`
	pub fn label(&self) -> &'static str {
		match self {
			Strategy::Rand1 => "rand/1",
			Strategy::Best1 => "best/1",
			Strategy::TargetToBest1 => "target-to-best/1",
			Strategy::Best2 => "best/2",
			Strategy::Rand2 => "rand/2",
			Strategy::Rand2Dir => "rand/2/dir",
		}
	}
}

impl Default for Strategy {
	fn default() -> Self {
		Strategy::Rand1
	}
}

fn compact(s: &str) -> String {
	s.to_lowercase().chars().filter(|c| !matches!(c, '/' | '-' | '_' | ' ')).collect()
}

impl FromStr for Strategy {
	type Err = String;
	fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
		let t = compact(s);
		match t.strip_prefix("de").unwrap_or(&t) {
			"rand1" => Ok(Strategy::Rand1),
			"best1" => Ok(Strategy::Best1),
			"targettobest1" | "currenttobest1" => Ok(Strategy::TargetToBest1),
			"best2" => Ok(Strategy::Best2),
			"rand2" => Ok(Strategy::Rand2),
			"rand2dir" => Ok(Strategy::Rand2Dir),
			_ => Err(format!("unknown strategy: {}", s)),
		}
	}
}

impl fmt::Display for Strategy {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.label())
	}
}

/// Crossover type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Crossover {
	/// One contiguous circular segment of the donor
	Exponential,
	/// Binomial (uniform) crossover with one forced donor coordinate
	Binomial,
}

impl Crossover {
	pub fn label(&self) -> &'static str {
		match self {
			Crossover::Exponential => "exp",
			Crossover::Binomial => "bin",
		}
	}
}

impl Default for Crossover {
	fn default() -> Self {
		Crossover::Exponential
	}
}

impl FromStr for Crossover {
	type Err = String;
	fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
		match s.trim().to_lowercase().as_str() {
			"exp" | "exponential" => Ok(Crossover::Exponential),
			"bin" | "binomial" => Ok(Crossover::Binomial),
			_ => Err(format!("unknown crossover: {}", s)),
		}
	}
}

impl fmt::Display for Crossover {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.label())
	}
}

/// A mutation strategy paired with a crossover, written `DE/rand/1/exp`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Scheme {
	pub strategy: Strategy,
	pub crossover: Crossover,
}

impl FromStr for Scheme {
	type Err = String;
	/// Accepts `DE/rand/1/exp`, `rand/2/dir/bin` or `best1bin`.
	fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
		let t = compact(s);
		let (head, crossover) = if let Some(h) = t.strip_suffix("exponential") {
			(h, Crossover::Exponential)
		} else if let Some(h) = t.strip_suffix("binomial") {
			(h, Crossover::Binomial)
		} else if let Some(h) = t.strip_suffix("exp") {
			(h, Crossover::Exponential)
		} else if let Some(h) = t.strip_suffix("bin") {
			(h, Crossover::Binomial)
		} else {
			return Err(format!("unknown scheme: {} (missing exp/bin suffix)", s));
		};
		let strategy = head.parse::<Strategy>().map_err(|_| format!("unknown scheme: {}", s))?;
		Ok(Scheme { strategy, crossover })
	}
}

impl fmt::Display for Scheme {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "DE/{}/{}", self.strategy.label(), self.crossover.label())
	}
}

/// Run parameters of the Differential Evolution optimizer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DEConfig {
	/// Population size
	pub npop: usize,
	/// Number of generations, always run to the end
	pub iter: usize,
	/// Crossover rate CR in [0,1]
	pub cr: f64,
	/// Mutation (scaling) factor F > 0
	pub f: f64,
	#[serde(default)]
	pub strategy: Strategy,
	#[serde(default)]
	pub crossover: Crossover,
	#[serde(default)]
	pub seed: Option<u64>,
	/// Exclude the target index from the mutation sample.
	/// Off by default: the target may be drawn as a reference individual.
	#[serde(default)]
	pub exclude_target: bool,
	/// Log progress at info level every generation
	#[serde(default)]
	pub disp: bool,
}

impl DEConfig {
	pub fn scheme(&self) -> Scheme {
		Scheme { strategy: self.strategy, crossover: self.crossover }
	}

	/// Smallest population the configured strategy can sample from
	pub fn required_population(&self) -> usize {
		self.strategy.required_samples() + usize::from(self.exclude_target)
	}

	/// Check every run parameter; no random draw happens before this passes.
	pub fn validate(&self) -> Result<()> {
		if self.npop == 0 {
			return Err(DEError::InvalidPopulationSize);
		}
		let required = self.required_population();
		if self.npop < required {
			return Err(DEError::PopulationTooSmall {
				pop_size: self.npop,
				required,
				strategy: self.strategy.label(),
			});
		}
		if self.iter == 0 {
			return Err(DEError::InvalidIterations);
		}
		if !(self.f.is_finite() && self.f > 0.0) {
			return Err(DEError::InvalidMutationFactor { factor: self.f });
		}
		if !(0.0..=1.0).contains(&self.cr) {
			return Err(DEError::InvalidCrossoverRate { rate: self.cr });
		}
		Ok(())
	}
}

/// Fluent builder for `DEConfig`.
///
/// `npop`, `iter`, `recombination` and `mutation` have no defaults and must
/// be set before [`DEConfigBuilder::build`].
#[derive(Debug, Default, Clone)]
pub struct DEConfigBuilder {
	npop: Option<usize>,
	iter: Option<usize>,
	cr: Option<f64>,
	f: Option<f64>,
	strategy: Strategy,
	crossover: Crossover,
	seed: Option<u64>,
	exclude_target: bool,
	disp: bool,
}

impl DEConfigBuilder {
	pub fn new() -> Self {
		Self::default()
	}
	pub fn npop(mut self, v: usize) -> Self {
		self.npop = Some(v);
		self
	}
	pub fn iter(mut self, v: usize) -> Self {
		self.iter = Some(v);
		self
	}
	/// Crossover rate CR
	pub fn recombination(mut self, v: f64) -> Self {
		self.cr = Some(v);
		self
	}
	/// Mutation factor F
	pub fn mutation(mut self, v: f64) -> Self {
		self.f = Some(v);
		self
	}
	pub fn strategy(mut self, v: Strategy) -> Self {
		self.strategy = v;
		self
	}
	pub fn crossover(mut self, v: Crossover) -> Self {
		self.crossover = v;
		self
	}
	pub fn scheme(mut self, v: Scheme) -> Self {
		self.strategy = v.strategy;
		self.crossover = v.crossover;
		self
	}
	pub fn seed(mut self, v: u64) -> Self {
		self.seed = Some(v);
		self
	}
	pub fn exclude_target(mut self, v: bool) -> Self {
		self.exclude_target = v;
		self
	}
	pub fn disp(mut self, v: bool) -> Self {
		self.disp = v;
		self
	}
	pub fn build(self) -> Result<DEConfig> {
		let cfg = DEConfig {
			npop: self.npop.ok_or(DEError::MissingParameter("npop"))?,
			iter: self.iter.ok_or(DEError::MissingParameter("iter"))?,
			cr: self.cr.ok_or(DEError::MissingParameter("recombination"))?,
			f: self.f.ok_or(DEError::MissingParameter("mutation"))?,
			strategy: self.strategy,
			crossover: self.crossover,
			seed: self.seed,
			exclude_target: self.exclude_target,
			disp: self.disp,
		};
		cfg.validate()?;
		Ok(cfg)
	}
}

/// Result/Report of a DE optimization run
#[derive(Clone, Serialize)]
pub struct DEReport {
	pub best_fitness: f64,
	pub best_solution: Array1<f64>,
	/// Generation (1-based) of the last global best update; 0 if the initial
	/// best was never beaten
	pub convergence_iteration: usize,
	/// Generations run
	pub nit: usize,
	/// Objective evaluations
	pub nfev: usize,
	pub population: Array2<f64>,
	pub fitness: Array1<f64>,
	pub message: String,
}

impl fmt::Debug for DEReport {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("DEReport")
			.field("best_fitness", &self.best_fitness)
			.field("best_solution", &self.best_solution.to_vec())
			.field("convergence_iteration", &self.convergence_iteration)
			.field("nit", &self.nit)
			.field("nfev", &self.nfev)
			.field(
				"population",
				&format!("{}x{}", self.population.nrows(), self.population.ncols()),
			)
			.field("message", &self.message)
			.finish()
	}
}

/// State handed to [`ConvergenceSink::inspect`] after each generation
pub struct DEIntermediate<'a> {
	pub iter: usize,
	pub best_fitness: f64,
	pub best_solution: &'a Array1<f64>,
	pub population: &'a Array2<f64>,
	pub fitness: &'a Array1<f64>,
	/// Trials that replaced their target this generation
	pub accepted: usize,
	/// Trials that also improved the global best
	pub improved: usize,
}

impl DEIntermediate<'_> {
	/// Spread of the population fitness, std(fitness)
	pub fn convergence(&self) -> f64 {
		self.fitness.std(0.0)
	}
}

/// Differential Evolution optimizer
pub struct DifferentialEvolution<'a, F>
where
	F: Fn(&Array1<f64>) -> f64,
{
	func: &'a F,
	lower: Array1<f64>,
	upper: Array1<f64>,
	config: DEConfig,
}

impl<'a, F> DifferentialEvolution<'a, F>
where
	F: Fn(&Array1<f64>) -> f64,
{
	/// Create a new DE optimizer with objective `func` and bounds [lower, upper]
	pub fn new(func: &'a F, lower: Array1<f64>, upper: Array1<f64>, config: DEConfig) -> Result<Self> {
		if lower.len() != upper.len() {
			return Err(DEError::BoundsMismatch { lower_len: lower.len(), upper_len: upper.len() });
		}
		if lower.is_empty() {
			return Err(DEError::EmptyBounds);
		}
		for (index, (&lo, &hi)) in lower.iter().zip(upper.iter()).enumerate() {
			if !(lo.is_finite() && hi.is_finite() && lo <= hi) {
				return Err(DEError::InvalidBounds { index, lower: lo, upper: hi });
			}
		}
		config.validate()?;
		Ok(Self { func, lower, upper, config })
	}

	pub fn config(&self) -> &DEConfig {
		&self.config
	}

	/// Run with an RNG seeded from the configuration and return the report
	pub fn solve(&self) -> DEReport {
		let mut trace: Vec<f64> = Vec::with_capacity(self.config.iter);
		self.solve_with_sink(&mut trace)
	}

	/// Same as [`Self::solve`] but feeds `sink` every generation
	pub fn solve_with_sink<K>(&self, sink: &mut K) -> DEReport
	where
		K: ConvergenceSink + ?Sized,
	{
		let mut rng: StdRng = match self.config.seed {
			Some(s) => StdRng::seed_from_u64(s),
			None => {
				let mut thread_rng = rand::rng();
				StdRng::from_rng(&mut thread_rng)
			}
		};
		self.solve_with(&mut rng, sink)
	}

	/// Run the optimization drawing every random number from `draws`
	pub fn solve_with<S, K>(&self, draws: &mut S, sink: &mut K) -> DEReport
	where
		S: DrawSource + ?Sized,
		K: ConvergenceSink + ?Sized,
	{
		use clip_inplace::clip_inplace;
		use crossover_binomial::binomial_crossover;
		use crossover_exponential::exponential_crossover;

		let cfg = &self.config;
		let npop = cfg.npop;
		let scheme = cfg.scheme();

		log::info!(
			"{}: {} dimensions, population={}, generations={}, F={}, CR={}",
			scheme,
			self.lower.len(),
			npop,
			cfg.iter,
			cfg.f,
			cfg.cr
		);

		let mut state = DEState::initialize(self.func, npop, &self.lower, &self.upper, draws);
		log::debug!("initial best: fitness={:.6e}", state.best_f);

		let progress = if cfg.disp { log::Level::Info } else { log::Level::Debug };

		for generation in 1..=cfg.iter {
			let mut accepted = 0usize;
			let mut improved = 0usize;

			for i in 0..npop {
				let mut donor = self.mutate(i, &state, draws);
				clip_inplace(&mut donor, &self.lower, &self.upper);

				let target = state.pop.row(i).to_owned();
				let trial = match cfg.crossover {
					Crossover::Exponential => exponential_crossover(&target, &donor, cfg.cr, draws),
					Crossover::Binomial => binomial_crossover(&target, &donor, cfg.cr, draws),
				};

				let trial_f = (self.func)(&trial);
				state.nfev += 1;

				match state.select(i, trial, trial_f, generation) {
					Selection::Rejected => {}
					Selection::Accepted => accepted += 1,
					Selection::Improved => {
						accepted += 1;
						improved += 1;
					}
				}
			}

			sink.append(generation, state.best_f);
			sink.inspect(&DEIntermediate {
				iter: generation,
				best_fitness: state.best_f,
				best_solution: &state.best_x,
				population: &state.pop,
				fitness: &state.fitness,
				accepted,
				improved,
			});

			log::log!(
				progress,
				"DE iter {:4}  best_f={:.6e}  accepted={}/{}, improved={}",
				generation,
				state.best_f,
				accepted,
				npop,
				improved
			);
		}

		log::info!(
			"{} finished: best_f={:.6e}, convergence iteration {}",
			scheme,
			state.best_f,
			state.convergence_iter
		);

		DEReport {
			best_fitness: state.best_f,
			best_solution: state.best_x,
			convergence_iteration: state.convergence_iter,
			nit: cfg.iter,
			nfev: state.nfev,
			population: state.pop,
			fitness: state.fitness,
			message: format!("Maximum iterations reached: {}", cfg.iter),
		}
	}

	fn mutate<S: DrawSource + ?Sized>(&self, i: usize, state: &DEState, draws: &mut S) -> Array1<f64> {
		use mutant_best1::mutant_best1;
		use mutant_best2::mutant_best2;
		use mutant_rand1::mutant_rand1;
		use mutant_rand2::mutant_rand2;
		use mutant_rand2_dir::mutant_rand2_dir;
		use mutant_target_to_best1::mutant_target_to_best1;

		let f = self.config.f;
		let exclude = self.config.exclude_target.then_some(i);
		let pop = &state.pop;
		match self.config.strategy {
			Strategy::Rand1 => mutant_rand1(pop, exclude, f, draws),
			Strategy::Best1 => mutant_best1(pop, &state.best_x, exclude, f, draws),
			Strategy::TargetToBest1 => {
				mutant_target_to_best1(i, pop, &state.best_x, exclude, f, draws)
			}
			Strategy::Best2 => mutant_best2(pop, &state.best_x, exclude, f, draws),
			Strategy::Rand2 => mutant_rand2(pop, exclude, f, draws),
			Strategy::Rand2Dir => mutant_rand2_dir(pop, &state.fitness, exclude, f, draws),
		}
	}
}

#[cfg(test)]
mod strategy_tests {
	use super::*;

	#[test]
	fn test_argmin_skips_nan() {
		assert_eq!(argmin(&ndarray::array![3.0, 1.0, 1.0, 2.0]), (1, 1.0));
		assert_eq!(argmin(&ndarray::array![f64::NAN, 2.0, f64::NAN, 0.5]), (3, 0.5));
		let (i, v) = argmin(&ndarray::array![f64::NAN, f64::NAN]);
		assert_eq!(i, 0);
		assert!(v.is_nan());
	}

	#[test]
	fn test_parse_strategy_variants() {
		assert_eq!("rand1".parse::<Strategy>().unwrap(), Strategy::Rand1);
		assert_eq!("DE/best/2".parse::<Strategy>().unwrap(), Strategy::Best2);
		assert_eq!("target-to-best/1".parse::<Strategy>().unwrap(), Strategy::TargetToBest1);
		assert_eq!("current_to_best1".parse::<Strategy>().unwrap(), Strategy::TargetToBest1);
		assert_eq!("rand/2/dir".parse::<Strategy>().unwrap(), Strategy::Rand2Dir);
		assert!("rand3".parse::<Strategy>().is_err());
	}

	#[test]
	fn test_scheme_round_trip_notation() {
		let s: Scheme = "DE/rand/1/exp".parse().unwrap();
		assert_eq!(s, Scheme { strategy: Strategy::Rand1, crossover: Crossover::Exponential });
		assert_eq!(s.to_string(), "DE/rand/1/exp");

		let s: Scheme = "best1bin".parse().unwrap();
		assert_eq!(s.to_string(), "DE/best/1/bin");

		let s: Scheme = "DE/rand/2/dir/binomial".parse().unwrap();
		assert_eq!(s.strategy, Strategy::Rand2Dir);
		assert_eq!(s.crossover, Crossover::Binomial);

		assert!("DE/rand/1".parse::<Scheme>().is_err());
	}

	#[test]
	fn test_builder_requires_run_parameters() {
		let err = DEConfigBuilder::new().iter(10).recombination(0.5).mutation(0.5).build();
		assert_eq!(err.unwrap_err(), DEError::MissingParameter("npop"));
		let err = DEConfigBuilder::new().npop(10).recombination(0.5).mutation(0.5).build();
		assert_eq!(err.unwrap_err(), DEError::MissingParameter("iter"));
	}

	#[test]
	fn test_validate_rejects_bad_parameters() {
		let base = DEConfigBuilder::new().npop(10).iter(5).recombination(0.5).mutation(0.5);
		assert!(base.clone().build().is_ok());
		assert_eq!(
			base.clone().recombination(1.5).build().unwrap_err(),
			DEError::InvalidCrossoverRate { rate: 1.5 }
		);
		assert!(matches!(
			base.clone().mutation(0.0).build().unwrap_err(),
			DEError::InvalidMutationFactor { .. }
		));
		assert_eq!(base.clone().iter(0).build().unwrap_err(), DEError::InvalidIterations);
		assert_eq!(base.clone().npop(0).build().unwrap_err(), DEError::InvalidPopulationSize);
		assert_eq!(
			base.clone().npop(4).strategy(Strategy::Rand2).build().unwrap_err(),
			DEError::PopulationTooSmall { pop_size: 4, required: 5, strategy: "rand/2" }
		);
		// excluding the target needs one more individual
		assert!(base.clone().npop(3).build().is_ok());
		assert!(base.npop(3).exclude_target(true).build().is_err());
	}

	#[test]
	fn test_config_json_defaults() {
		let cfg: DEConfig =
			serde_json::from_str(r#"{"npop": 50, "iter": 1000, "cr": 0.2, "f": 0.6}"#).unwrap();
		assert_eq!(cfg.scheme().to_string(), "DE/rand/1/exp");
		assert_eq!(cfg.seed, None);
		assert!(!cfg.exclude_target);

		let cfg: DEConfig = serde_json::from_str(
			r#"{"npop": 8, "iter": 3, "cr": 0.9, "f": 0.5, "strategy": "rand2_dir", "crossover": "binomial"}"#,
		)
		.unwrap();
		assert_eq!(cfg.scheme().to_string(), "DE/rand/2/dir/bin");
	}
}
