//! Environment variable utilities for devo
//!
//! Generated files (CSV traces, convergence charts) go below the directory
//! named by `DEVO_DIR`.

use crate::constants::{DATA_GENERATED, DEVO_DIR_VAR, RECORDS};
use std::env;
use std::path::PathBuf;

/// Error type for environment variable issues
#[derive(Debug, thiserror::Error)]
pub enum EnvError {
    #[error(
        "DEVO_DIR environment variable is not set. Please set it to the project root directory (e.g., export DEVO_DIR=/path/to/devo)"
    )]
    DevoDirNotSet,

    #[error("DEVO_DIR points to a non-existent directory: {0}")]
    DevoDirNotFound(PathBuf),

    #[error("Failed to create data_generated directory: {0}")]
    DataGeneratedCreationFailed(std::io::Error),
}

/// Get the DEVO_DIR environment variable and validate it exists
///
/// # Errors
///
/// Returns an error if:
/// - DEVO_DIR is not set
/// - DEVO_DIR points to a non-existent directory
///
/// # Example
///
/// ```no_run
/// use devo_env::env_utils::get_devo_dir;
///
/// let devo_dir = get_devo_dir()?;
/// println!("devo directory: {}", devo_dir.display());
/// # Ok::<(), devo_env::env_utils::EnvError>(())
/// ```
pub fn get_devo_dir() -> Result<PathBuf, EnvError> {
    let devo_dir = env::var(DEVO_DIR_VAR).map_err(|_| EnvError::DevoDirNotSet)?;

    let path = PathBuf::from(devo_dir);

    if !path.exists() {
        return Err(EnvError::DevoDirNotFound(path));
    }

    Ok(path)
}

/// Get the path to the data_generated directory, creating it if necessary
pub fn get_data_generated_dir() -> Result<PathBuf, EnvError> {
    let data_generated = get_devo_dir()?.join(DATA_GENERATED);

    if !data_generated.exists() {
        std::fs::create_dir_all(&data_generated).map_err(EnvError::DataGeneratedCreationFailed)?;
    }

    Ok(data_generated)
}

/// Get the path to data_generated/records, creating it if necessary
///
/// # Errors
///
/// Returns an error if:
/// - DEVO_DIR is not set or invalid
/// - Cannot create the directories
pub fn get_records_dir() -> Result<PathBuf, EnvError> {
    let records_dir = get_data_generated_dir()?.join(RECORDS);

    if !records_dir.exists() {
        std::fs::create_dir_all(&records_dir).map_err(EnvError::DataGeneratedCreationFailed)?;
    }

    Ok(records_dir)
}
