use ndarray::{Array1, Array2};

use crate::argmin;
use crate::draw_source::DrawSource;
use crate::init_random::init_random;

/// Outcome of one greedy selection step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Selection {
    /// Trial was not strictly better than the target.
    Rejected,
    /// Trial replaced the target.
    Accepted,
    /// Trial replaced the target and became the new global best.
    Improved,
}

/// Mutable state of one run, owned by the main loop.
///
/// `fitness[i]` is always the objective value of `pop.row(i)`, and
/// `best_f <= fitness.min()` holds after every selection.
#[derive(Debug, Clone)]
pub(crate) struct DEState {
    pub pop: Array2<f64>,
    pub fitness: Array1<f64>,
    pub best_x: Array1<f64>,
    pub best_f: f64,
    /// 1-based generation of the last global best update, 0 if none
    pub convergence_iter: usize,
    pub nfev: usize,
}

impl DEState {
    /// Draw and evaluate the initial population, then pick the initial best.
    pub fn initialize<F, S>(
        func: &F,
        npop: usize,
        lower: &Array1<f64>,
        upper: &Array1<f64>,
        draws: &mut S,
    ) -> Self
    where
        F: Fn(&Array1<f64>) -> f64,
        S: DrawSource + ?Sized,
    {
        let pop = init_random(npop, lower, upper, draws);
        let fitness: Array1<f64> = pop.rows().into_iter().map(|row| func(&row.to_owned())).collect();
        let (best_idx, best_f) = argmin(&fitness);
        let best_x = pop.row(best_idx).to_owned();
        Self { pop, fitness, best_x, best_f, convergence_iter: 0, nfev: npop }
    }

    /// Replace individual `i` with `trial` when strictly better.
    pub fn select(
        &mut self,
        i: usize,
        trial: Array1<f64>,
        trial_f: f64,
        generation: usize,
    ) -> Selection {
        if !(trial_f < self.fitness[i]) {
            return Selection::Rejected;
        }
        self.pop.row_mut(i).assign(&trial);
        self.fitness[i] = trial_f;
        if trial_f < self.best_f {
            self.best_f = trial_f;
            self.best_x = trial;
            self.convergence_iter = generation;
            return Selection::Improved;
        }
        Selection::Accepted
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    fn state() -> DEState {
        DEState {
            pop: array![[1.0, 1.0], [2.0, 2.0]],
            fitness: array![2.0, 8.0],
            best_x: array![1.0, 1.0],
            best_f: 2.0,
            convergence_iter: 0,
            nfev: 2,
        }
    }

    #[test]
    fn test_tie_does_not_replace() {
        let mut s = state();
        assert_eq!(s.select(1, array![0.0, 0.0], 8.0, 1), Selection::Rejected);
        assert_eq!(s.pop.row(1).to_vec(), vec![2.0, 2.0]);
    }

    #[test]
    fn test_nan_trial_is_rejected() {
        let mut s = state();
        assert_eq!(s.select(0, array![0.0, 0.0], f64::NAN, 1), Selection::Rejected);
        assert_eq!(s.fitness[0], 2.0);
    }

    #[test]
    fn test_accept_without_new_best() {
        let mut s = state();
        assert_eq!(s.select(1, array![1.5, 1.5], 4.5, 3), Selection::Accepted);
        assert_eq!(s.fitness[1], 4.5);
        assert_eq!(s.convergence_iter, 0);
        assert_eq!(s.best_f, 2.0);
    }

    #[test]
    fn test_improvement_updates_best_and_generation() {
        let mut s = state();
        assert_eq!(s.select(1, array![0.5, 0.5], 0.5, 7), Selection::Improved);
        assert_eq!(s.best_f, 0.5);
        assert_eq!(s.best_x, array![0.5, 0.5]);
        assert_eq!(s.convergence_iter, 7);
        assert_eq!(s.pop.row(1).to_vec(), vec![0.5, 0.5]);
    }

    #[test]
    fn test_nan_first_individual_is_not_the_initial_best() {
        use rand::SeedableRng;
        use rand::rngs::StdRng;
        use std::cell::Cell;

        let calls = Cell::new(0usize);
        let func = |x: &Array1<f64>| {
            let k = calls.get();
            calls.set(k + 1);
            if k == 0 { f64::NAN } else { x.iter().map(|v| v * v).sum() }
        };
        let mut rng = StdRng::seed_from_u64(2);
        let s = DEState::initialize(&func, 4, &array![-1.0, -1.0], &array![1.0, 1.0], &mut rng);

        assert!(s.fitness[0].is_nan());
        assert!(s.best_f.is_finite());
        assert!(s.fitness.iter().skip(1).all(|&f| s.best_f <= f));
        assert_ne!(s.pop.row(0).to_owned(), s.best_x);
    }
}
