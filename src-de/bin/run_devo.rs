use clap::Parser;
use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};

use devo_de::plot::plot_convergence;
use devo_de::{
	Crossover, DEConfig, DEConfigBuilder, OptimizationRecorder, Scheme, Strategy,
	differential_evolution_with_sink,
};
use devo_env::get_records_dir;
use devo_testfunctions::{
	function_names, get_function, get_function_bounds_vec, get_function_metadata,
};

/// CLI arguments for a single Differential Evolution run
#[derive(Parser, Debug)]
#[command(name = "run_devo")]
#[command(about = "Minimise a test function with Differential Evolution")]
struct Args {
	/// Objective function (see --list-functions)
	#[arg(long, default_value = "rastrigin")]
	function: String,

	/// Number of decision variables
	#[arg(long, default_value_t = 10)]
	dim: usize,

	/// Lower bound, same for every dimension (default: the function's usual box)
	#[arg(long, allow_negative_numbers = true)]
	lower: Option<f64>,

	/// Upper bound, same for every dimension (default: the function's usual box)
	#[arg(long, allow_negative_numbers = true)]
	upper: Option<f64>,

	/// Population size
	#[arg(long, default_value_t = 50)]
	npop: usize,

	/// Number of generations
	#[arg(long, default_value_t = 1000)]
	iter: usize,

	/// Crossover rate CR in [0, 1]
	#[arg(long, default_value_t = 0.2)]
	cr: f64,

	/// Mutation factor F
	#[arg(long, default_value_t = 0.6)]
	f: f64,

	/// Scheme in DE/x/y/z notation, e.g. DE/rand/1/exp or DE/best/2/bin
	#[arg(long, default_value = "DE/rand/1/exp")]
	scheme: String,

	/// Mutation strategy, overrides the one in --scheme
	#[arg(long)]
	strategy: Option<String>,

	/// Crossover (exp|bin), overrides the one in --scheme
	#[arg(long)]
	crossover: Option<String>,

	/// Random seed for a reproducible run
	#[arg(long)]
	seed: Option<u64>,

	/// Never sample the target individual during mutation
	#[arg(long)]
	exclude_target: bool,

	/// JSON file with a full DEConfig, replaces the parameter flags above
	#[arg(long)]
	config: Option<PathBuf>,

	/// Output directory for the CSV trace and the convergence chart
	#[arg(short, long)]
	output_dir: Option<PathBuf>,

	/// Save one CSV row per generation
	#[arg(long)]
	record: bool,

	/// Do not write the convergence chart
	#[arg(long)]
	no_plot: bool,

	/// List available functions and exit
	#[arg(long)]
	list_functions: bool,

	/// Log every generation at info level
	#[arg(short, long)]
	verbose: bool,
}

fn resolve_scheme(args: &Args) -> Result<Scheme, String> {
	let mut scheme: Scheme = args.scheme.parse()?;
	if let Some(s) = &args.strategy {
		scheme.strategy = s.parse::<Strategy>()?;
	}
	if let Some(c) = &args.crossover {
		scheme.crossover = c.parse::<Crossover>()?;
	}
	Ok(scheme)
}

fn build_config(args: &Args) -> Result<DEConfig, Box<dyn Error>> {
	let mut config = match &args.config {
		Some(path) => {
			let text = fs::read_to_string(path)?;
			serde_json::from_str::<DEConfig>(&text)?
		}
		None => DEConfigBuilder::new()
			.npop(args.npop)
			.iter(args.iter)
			.recombination(args.cr)
			.mutation(args.f)
			.scheme(resolve_scheme(args)?)
			.build()?,
	};
	if let Some(seed) = args.seed {
		config.seed = Some(seed);
	}
	config.exclude_target |= args.exclude_target;
	config.disp |= args.verbose;
	config.validate()?;
	Ok(config)
}

/// `--lower`/`--upper` when given, else the function's metadata box
/// (±5.12 for unknown names), repeated for every dimension.
fn resolve_bounds(args: &Args) -> Vec<(f64, f64)> {
	let (meta_lower, meta_upper) = get_function_bounds_vec(&args.function, (-5.12, 5.12))[0];
	let lower = args.lower.unwrap_or(meta_lower);
	let upper = args.upper.unwrap_or(meta_upper);
	vec![(lower, upper); args.dim]
}

fn output_dir(args: &Args) -> PathBuf {
	if let Some(dir) = &args.output_dir {
		return dir.clone();
	}
	match get_records_dir() {
		Ok(dir) => dir,
		Err(e) => {
			log::warn!("{}; writing to ./data_generated/records", e);
			Path::new("data_generated").join("records")
		}
	}
}

fn list_functions() {
	let metadata = get_function_metadata();
	for name in function_names() {
		match metadata.get(name) {
			Some(meta) => println!("{:<18} {}", name, meta.description),
			None => println!("{}", name),
		}
	}
}

fn main() -> Result<(), Box<dyn Error>> {
	env_logger::init();
	let args = Args::parse();

	if args.list_functions {
		list_functions();
		return Ok(());
	}

	let func = get_function(&args.function)
		.ok_or_else(|| format!("unknown function: {} (see --list-functions)", args.function))?;
	let config = build_config(&args)?;
	let scheme = config.scheme();
	let bounds = resolve_bounds(&args);
	let out = output_dir(&args);

	let (report, trace) = if args.record {
		let mut recorder = OptimizationRecorder::new(args.function.as_str());
		let report = differential_evolution_with_sink(&func, &bounds, config, &mut recorder)?;
		let csv_path = recorder.save_to_csv(&out)?;
		log::info!("saved {} generations to {}", recorder.records().len(), csv_path.display());
		(report, recorder.trace())
	} else {
		let mut trace: Vec<f64> = Vec::with_capacity(config.iter);
		let report = differential_evolution_with_sink(&func, &bounds, config, &mut trace)?;
		(report, trace)
	};

	if !args.no_plot {
		let file_name = format!("{}_{}.html", args.function, scheme.to_string().replace('/', "_"));
		plot_convergence(&trace, &scheme.to_string(), &out.join(file_name))?;
	}

	println!("{}", serde_json::to_string_pretty(&report)?);
	Ok(())
}
