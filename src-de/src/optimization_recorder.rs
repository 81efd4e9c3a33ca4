use std::fs::create_dir_all;
use std::path::{Path, PathBuf};

use crate::error::RecordError;
use crate::sink::ConvergenceSink;
use crate::DEIntermediate;

/// Records optimization progress, one row per generation
#[derive(Debug, Clone)]
pub struct OptimizationRecorder {
    /// Function name (used for CSV filename)
    function_name: String,
    records: Vec<OptimizationRecord>,
    /// Best function value seen so far
    best_value: Option<f64>,
}

/// A single optimization iteration record
#[derive(Debug, Clone, PartialEq)]
pub struct OptimizationRecord {
    /// Generation number, 1-based
    pub iteration: usize,
    /// Best x found so far
    pub x: Vec<f64>,
    /// Best function result so far
    pub best_result: f64,
    /// Convergence measure (standard deviation of population fitness)
    pub convergence: f64,
    /// Whether this iteration improved the best known result
    pub is_improvement: bool,
}

impl OptimizationRecorder {
    /// Create a new optimization recorder for the given function
    pub fn new(function_name: impl Into<String>) -> Self {
        Self { function_name: function_name.into(), records: Vec::new(), best_value: None }
    }

    /// Get all recorded iterations
    pub fn records(&self) -> &[OptimizationRecord] {
        &self.records
    }

    /// Best fitness per generation, i.e. the convergence trace
    pub fn trace(&self) -> Vec<f64> {
        self.records.iter().map(|r| r.best_result).collect()
    }

    /// Save all recorded iterations to `<output_dir>/<function_name>.csv`
    pub fn save_to_csv(&self, output_dir: &Path) -> Result<PathBuf, RecordError> {
        create_dir_all(output_dir)?;
        let filename = output_dir.join(format!("{}.csv", self.function_name));
        let mut wtr = csv::Writer::from_path(&filename)?;

        let num_dimensions = self.records.first().map_or(0, |r| r.x.len());
        let mut header = vec!["iteration".to_string()];
        header.extend((0..num_dimensions).map(|i| format!("x{}", i)));
        header.extend(["best_result", "convergence", "is_improvement"].map(String::from));
        wtr.write_record(&header)?;

        for record in &self.records {
            let mut row = vec![record.iteration.to_string()];
            row.extend(record.x.iter().map(|xi| format!("{:.16}", xi)));
            row.push(format!("{:.16}", record.best_result));
            row.push(format!("{:.16}", record.convergence));
            row.push(record.is_improvement.to_string());
            wtr.write_record(&row)?;
        }
        wtr.flush()?;
        log::info!("recorded {} generations to {}", self.records.len(), filename.display());
        Ok(filename)
    }
}

impl ConvergenceSink for OptimizationRecorder {
    fn append(&mut self, generation: usize, best: f64) {
        let is_improvement = match self.best_value {
            Some(prev) => best < prev,
            None => true,
        };
        if is_improvement {
            self.best_value = Some(best);
        }
        self.records.push(OptimizationRecord {
            iteration: generation,
            x: Vec::new(),
            best_result: best,
            convergence: 0.0,
            is_improvement,
        });
    }

    fn inspect(&mut self, state: &DEIntermediate<'_>) {
        if let Some(last) = self.records.last_mut() {
            if last.iteration == state.iter {
                last.x = state.best_solution.to_vec();
                last.convergence = state.convergence();
            }
        }
    }
}
