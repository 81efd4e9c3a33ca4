//! Test function implementations organized by category
//!
//! - `unimodal`: single-optimum functions
//! - `multimodal`: many local minima
//! - `constrained`: feasibility expressed as a penalty value

pub mod constrained;
pub mod multimodal;
pub mod unimodal;

pub use constrained::*;
pub use multimodal::*;
pub use unimodal::*;
