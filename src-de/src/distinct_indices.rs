use rand::Rng;
use rand::seq::SliceRandom;

/// Draw `count` distinct indices from `0..pool_size` without replacement,
/// skipping `exclude` when given.
///
/// The whole pool is shuffled and the first admissible entries are kept, so
/// the number of draws consumed does not depend on `exclude`.
pub(crate) fn distinct_indices<R: Rng + ?Sized>(
    exclude: Option<usize>,
    count: usize,
    pool_size: usize,
    rng: &mut R,
) -> Vec<usize> {
    debug_assert!(count <= pool_size - usize::from(exclude.is_some()));
    let mut idxs: Vec<usize> = (0..pool_size).collect();
    idxs.shuffle(rng);
    let mut out = Vec::with_capacity(count);
    for idx in idxs.into_iter() {
        if Some(idx) == exclude {
            continue;
        }
        if out.len() == count {
            break;
        }
        out.push(idx);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_indices_are_distinct_and_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            let idxs = distinct_indices(None, 5, 6, &mut rng);
            assert_eq!(idxs.len(), 5);
            let mut sorted = idxs.clone();
            sorted.sort_unstable();
            sorted.dedup();
            assert_eq!(sorted.len(), 5);
            assert!(idxs.iter().all(|&i| i < 6));
        }
    }

    #[test]
    fn test_excluded_index_never_drawn() {
        let mut rng = StdRng::seed_from_u64(11);
        for round in 0..200 {
            let exclude = round % 4;
            let idxs = distinct_indices(Some(exclude), 3, 4, &mut rng);
            assert_eq!(idxs.len(), 3);
            assert!(!idxs.contains(&exclude));
        }
    }

    #[test]
    fn test_full_pool_is_a_permutation() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut idxs = distinct_indices(None, 4, 4, &mut rng);
        idxs.sort_unstable();
        assert_eq!(idxs, vec![0, 1, 2, 3]);
    }
}
