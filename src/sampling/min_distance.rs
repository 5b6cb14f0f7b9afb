use itertools::Itertools;
use rand::seq::index;
use rand::Rng;
use tracing::trace;

/// Errors raised when sampling positions.
#[derive(Debug, Copy, Clone, Eq, PartialEq, thiserror::Error)]
pub enum SampleError {
    /// Returned when `k` positions spaced more than `d` apart do not fit in `1..n`.
    #[error("cannot sample {k} positions from 1..{n} with a minimum distance of {d}")]
    InvalidSampleParameters {
        /// The exclusive upper bound of the range.
        n: usize,
        /// The number of requested positions.
        k: usize,
        /// The minimum distance between positions.
        d: usize,
    },
}

/// The size of the range the raw positions are drawn from, before they are spread apart.
/// Returns `None` if it is too small to hold `k` distinct positions.
fn compressed_range(n: usize, k: usize, d: usize) -> Option<usize> {
    let m = (k - 1).checked_mul(d).and_then(|spread| n.checked_sub(spread))?;
    (m > k).then_some(m)
}

/// Samples `k` distinct positions from `1..n`, so that any two positions are more than `d`
/// apart. Neither `0` nor `n` is ever returned.
///
/// The positions are drawn without replacement from the smaller range `1..n - (k - 1) * d`, and
/// the position of rank `r` is then shifted right by `r * d`. Since the raw positions are distinct,
/// sorted neighbours end up at least `d + 1` apart, and every such combination is equally likely.
/// The result keeps the order of the draw, so it is not sorted.
pub fn sample_with_minimum_distance(
    n: usize,
    k: usize,
    d: usize,
    rng: &mut impl Rng,
) -> Result<Vec<usize>, SampleError> {
    let invalid = SampleError::InvalidSampleParameters { n, k, d };
    if n == 0 {
        return Err(invalid);
    }
    if k == 0 {
        return Ok(Vec::new());
    }
    let m = compressed_range(n, k, d).ok_or(invalid)?;
    trace!(n, k, d, m, "sampling positions with minimum distance");

    let raw = index::sample(rng, m - 1, k)
        .into_iter()
        .map(|idx| idx + 1)
        .collect_vec();

    // The rank of each drawn value among the drawn values.
    let mut ranks = vec![0; k];
    for (rank, i) in (0..k).sorted_by_key(|&i| raw[i]).enumerate() {
        ranks[i] = rank;
    }

    Ok(raw
        .iter()
        .zip(ranks)
        .map(|(&pos, rank)| pos + d * rank)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::{sample_with_minimum_distance, SampleError};
    use crate::sampling::pairwise;
    use crate::utils::tests::{assert_count_close, SEED};
    use fxhash::FxHashMap;
    use itertools::Itertools;
    use rand::prelude::{SeedableRng, StdRng};
    use rand::seq::index;

    /// Checks that a sample satisfies all the guarantees of the sampler.
    fn check_sample(sample: &[usize], n: usize, k: usize, d: usize) {
        assert_eq!(sample.len(), k, "Wrong sample size: {:?}", sample);
        assert!(
            sample.iter().all(|&pos| 1 <= pos && pos < n),
            "Position out of range 1..{}: {:?}",
            n,
            sample
        );
        let sorted = sample.iter().copied().sorted().collect_vec();
        for (a, b) in pairwise(&sorted) {
            assert!(b - a > d, "Positions too close: {:?}", sorted);
        }
    }

    #[test]
    fn test_concrete_scenario() {
        let mut rng = StdRng::from_seed(SEED);
        for _ in 0..1000 {
            let sample = sample_with_minimum_distance(10, 3, 2, &mut rng).unwrap();
            check_sample(&sample, 10, 3, 2);
        }
    }

    #[test]
    fn test_parameter_grid() {
        let mut rng = StdRng::from_seed(SEED);
        for n in 1..40 {
            for k in 1..8 {
                for d in 0..6 {
                    let res = sample_with_minimum_distance(n, k, d, &mut rng);
                    let fits = n as isize - ((k - 1) * d) as isize > k as isize;
                    match res {
                        Ok(sample) => {
                            assert!(fits, "Sampled with n={} k={} d={}", n, k, d);
                            check_sample(&sample, n, k, d);
                        }
                        Err(err) => {
                            assert!(!fits, "Rejected n={} k={} d={}", n, k, d);
                            assert_eq!(err, SampleError::InvalidSampleParameters { n, k, d });
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn test_rejects_small_range() {
        let mut rng = StdRng::from_seed(SEED);
        assert_eq!(
            sample_with_minimum_distance(5, 3, 2, &mut rng),
            Err(SampleError::InvalidSampleParameters { n: 5, k: 3, d: 2 })
        );
        // The compressed range would be negative.
        assert!(sample_with_minimum_distance(5, 4, 10, &mut rng).is_err());
        assert!(sample_with_minimum_distance(10, 3, usize::MAX, &mut rng).is_err());
        assert!(sample_with_minimum_distance(0, 0, 0, &mut rng).is_err());
        assert!(sample_with_minimum_distance(0, 1, 0, &mut rng).is_err());
    }

    #[test]
    fn test_empty_sample() {
        let mut rng = StdRng::from_seed(SEED);
        assert_eq!(sample_with_minimum_distance(1, 0, 0, &mut rng), Ok(vec![]));
        assert_eq!(sample_with_minimum_distance(10, 0, 100, &mut rng), Ok(vec![]));
    }

    /// When the compressed range holds exactly `k` values, the positions are packed as tightly as
    /// the spacing allows, `d + 1` apart.
    #[test]
    fn test_tight_fit() {
        let mut rng = StdRng::from_seed(SEED);
        for _ in 0..20 {
            let sample = sample_with_minimum_distance(10, 3, 3, &mut rng).unwrap();
            assert_eq!(sample.into_iter().sorted().collect_vec(), vec![1, 5, 9]);
        }
    }

    /// Neighbours are never exactly `d` apart, but `d + 1` is reached.
    #[test]
    fn test_smallest_gap() {
        let mut rng = StdRng::from_seed(SEED);
        let mut smallest = usize::MAX;
        for _ in 0..5000 {
            let sample = sample_with_minimum_distance(10, 2, 2, &mut rng).unwrap();
            let (a, b) = sample.into_iter().sorted().collect_tuple().unwrap();
            smallest = smallest.min(b - a);
        }
        assert_eq!(smallest, 3);
    }

    #[test]
    fn test_zero_distance() {
        let mut rng = StdRng::from_seed(SEED);
        let sample = sample_with_minimum_distance(6, 5, 0, &mut rng).unwrap();
        assert_eq!(sample.into_iter().sorted().collect_vec(), vec![1, 2, 3, 4, 5]);
    }

    /// The output keeps the relative order of the underlying draw.
    #[test]
    fn test_keeps_draw_order() {
        let mut rng = StdRng::from_seed(SEED);
        for _ in 0..100 {
            let mut replay = rng.clone();
            let raw = index::sample(&mut replay, 50 - 4 * 3 - 1, 5).into_vec();
            let sample = sample_with_minimum_distance(50, 5, 3, &mut rng).unwrap();
            let raw_order = (0..5).sorted_by_key(|&i| raw[i]).collect_vec();
            let sample_order = (0..5).sorted_by_key(|&i| sample[i]).collect_vec();
            assert_eq!(raw_order, sample_order);
        }
    }

    #[test]
    fn test_seeded_is_deterministic() {
        let first = sample_with_minimum_distance(1000, 20, 7, &mut StdRng::from_seed(SEED));
        let second = sample_with_minimum_distance(1000, 20, 7, &mut StdRng::from_seed(SEED));
        assert_eq!(first, second);
    }

    /// Every combination with gaps larger than `d` should be drawn with the same frequency.
    #[test]
    fn test_uniformity() {
        const TRIALS: usize = 42_000;
        // 95th percentile is 31.4, 99.9th percentile is 45.3 at 20 degrees of freedom.
        const CHI_SQUARED_LIMIT: f64 = 45.3;

        let (n, k, d) = (10, 2, 2);
        let valid = (1..n)
            .tuple_combinations()
            .filter(|&(a, b): &(usize, usize)| b - a > d)
            .collect_vec();
        assert_eq!(valid.len(), 21);

        let mut rng = StdRng::from_seed(SEED);
        let mut counts: FxHashMap<(usize, usize), usize> = FxHashMap::default();
        for _ in 0..TRIALS {
            let sample = sample_with_minimum_distance(n, k, d, &mut rng).unwrap();
            let (a, b) = sample.into_iter().sorted().collect_tuple().unwrap();
            *counts.entry((a, b)).or_default() += 1;
        }
        assert_eq!(counts.len(), valid.len(), "Unexpected combinations: {:?}", counts);

        let expected = TRIALS as f64 / valid.len() as f64;
        let mut chi_squared = 0.;
        for combination in valid.iter() {
            let observed = *counts.get(combination).unwrap_or(&0);
            assert_count_close(observed, expected, 0.1);
            chi_squared += (observed as f64 - expected).powi(2) / expected;
        }
        assert!(
            chi_squared < CHI_SQUARED_LIMIT,
            "Non-uniform sample, chi squared: {}",
            chi_squared
        );
    }

    #[test]
    fn test_error_message() {
        let err = SampleError::InvalidSampleParameters { n: 5, k: 3, d: 2 };
        assert_eq!(
            err.to_string(),
            "cannot sample 3 positions from 1..5 with a minimum distance of 2"
        );
    }
}
