//! Error types for the Differential Evolution optimizer.
//!
//! Every precondition is checked before the first random draw, so an `Err`
//! means no part of the run has started.

use thiserror::Error;

/// Errors raised while validating a Differential Evolution run.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DEError {
    /// No decision variables were given.
    #[error("bounds are empty: at least one dimension is required")]
    EmptyBounds,

    /// Lower and upper bounds have different lengths.
    #[error("bounds mismatch: lower has {lower_len} elements, upper has {upper_len}")]
    BoundsMismatch {
        /// Length of the lower bounds array
        lower_len: usize,
        /// Length of the upper bounds array
        upper_len: usize,
    },

    /// A lower bound exceeds its upper bound, or one of them is not finite.
    #[error("invalid bounds at index {index}: lower ({lower}) / upper ({upper})")]
    InvalidBounds {
        /// Index of the invalid bound pair
        index: usize,
        /// The lower bound value
        lower: f64,
        /// The upper bound value
        upper: f64,
    },

    /// Population size must be positive.
    #[error("population size must be > 0")]
    InvalidPopulationSize,

    /// Population cannot supply the distinct individuals the strategy samples.
    #[error("population size ({pop_size}) too small for {strategy}: needs at least {required}")]
    PopulationTooSmall {
        /// The configured population size
        pop_size: usize,
        /// Minimum population size for the strategy
        required: usize,
        /// Strategy notation, e.g. `rand/2`
        strategy: &'static str,
    },

    /// Number of generations must be positive.
    #[error("number of generations must be > 0")]
    InvalidIterations,

    /// Mutation factor must be finite and strictly positive.
    #[error("invalid mutation factor: {factor} (must be > 0)")]
    InvalidMutationFactor {
        /// The invalid mutation factor
        factor: f64,
    },

    /// Crossover rate is out of valid range [0, 1].
    #[error("invalid crossover rate: {rate} (must be in [0, 1])")]
    InvalidCrossoverRate {
        /// The invalid crossover rate
        rate: f64,
    },

    /// A required run parameter was never set on the builder.
    #[error("missing run parameter: {0}")]
    MissingParameter(&'static str),
}

/// A specialized `Result` type for DE operations.
pub type Result<T> = std::result::Result<T, DEError>;

impl DEError {
    /// Returns `true` for errors about the search box.
    pub fn is_bounds_error(&self) -> bool {
        matches!(
            self,
            DEError::EmptyBounds | DEError::BoundsMismatch { .. } | DEError::InvalidBounds { .. }
        )
    }

    /// Returns `true` for errors about run parameters.
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            DEError::InvalidPopulationSize
                | DEError::PopulationTooSmall { .. }
                | DEError::InvalidIterations
                | DEError::InvalidMutationFactor { .. }
                | DEError::InvalidCrossoverRate { .. }
                | DEError::MissingParameter(_)
        )
    }
}

/// Errors from the recording helpers (CSV trace, convergence chart).
#[derive(Debug, Error)]
pub enum RecordError {
    /// The optimizer rejected its inputs.
    #[error(transparent)]
    Optimizer(#[from] DEError),

    /// Creating the output directory or file failed.
    #[error("i/o error while recording: {0}")]
    Io(#[from] std::io::Error),

    /// Writing the CSV trace failed.
    #[error("csv error while recording: {0}")]
    Csv(#[from] csv::Error),
}
