//! Environment utilities and constants shared by the devo crates

pub mod constants;
pub mod env_utils;

pub use constants::*;
pub use env_utils::{EnvError, get_data_generated_dir, get_devo_dir, get_records_dir};
