//! Reporting collaborators fed once per generation.
//!
//! Sinks never feed back into the algorithm.

use crate::DEIntermediate;

/// Receives the global best fitness after each generation.
pub trait ConvergenceSink {
    /// Called once per generation with the 1-based generation index.
    fn append(&mut self, generation: usize, best: f64);

    /// Read-only view of the state at the end of the generation, called right
    /// after [`ConvergenceSink::append`].
    fn inspect(&mut self, _state: &DEIntermediate<'_>) {}
}

/// The convergence trace: element `t` is the best fitness after generation `t + 1`.
impl ConvergenceSink for Vec<f64> {
    fn append(&mut self, _generation: usize, best: f64) {
        self.push(best);
    }
}

/// Discards everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl ConvergenceSink for NullSink {
    fn append(&mut self, _generation: usize, _best: f64) {}
}

/// Adapts a closure `FnMut(generation, best)` into a sink.
pub struct FnSink<F>(pub F);

impl<F: FnMut(usize, f64)> ConvergenceSink for FnSink<F> {
    fn append(&mut self, generation: usize, best: f64) {
        (self.0)(generation, best)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec_sink_collects_values() {
        let mut trace: Vec<f64> = Vec::new();
        ConvergenceSink::append(&mut trace, 1, 3.0);
        ConvergenceSink::append(&mut trace, 2, 1.0);
        assert_eq!(trace, vec![3.0, 1.0]);
    }

    #[test]
    fn test_fn_sink_sees_generation_index() {
        let mut seen = Vec::new();
        {
            let mut sink = FnSink(|g: usize, b: f64| seen.push((g, b)));
            sink.append(1, 0.5);
            sink.append(2, 0.25);
        }
        assert_eq!(seen, vec![(1, 0.5), (2, 0.25)]);
    }
}
