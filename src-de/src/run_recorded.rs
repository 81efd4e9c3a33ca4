//! Recording wrapper for differential evolution

use std::path::{Path, PathBuf};

use ndarray::Array1;

use crate::error::RecordError;
use crate::{DEConfig, DEReport, OptimizationRecorder, differential_evolution_with_sink};

/// Run differential evolution and save one CSV row per generation to
/// `<output_dir>/<function_name>.csv`.
///
/// Returns the report and the CSV path.
pub fn run_recorded_differential_evolution<F>(
    function_name: &str,
    func: F,
    bounds: &[(f64, f64)],
    config: DEConfig,
    output_dir: &Path,
) -> Result<(DEReport, PathBuf), RecordError>
where
    F: Fn(&Array1<f64>) -> f64,
{
    let mut recorder = OptimizationRecorder::new(function_name);
    let report = differential_evolution_with_sink(&func, bounds, config, &mut recorder)?;
    let csv_path = recorder.save_to_csv(output_dir)?;
    Ok((report, csv_path))
}
