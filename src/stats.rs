//! NaN-aware summary statistics.
//!
//! After normalization the missing samples are NaN, which poisons the plain
//! `f64::min`/`max` folds used elsewhere. These helpers skip NaN the way
//! numpy's `nanmin`/`nanmax` do, but return `None` instead of NaN when
//! nothing is left.

use ndarray::{ArrayBase, Data, Dimension};
use num_traits::Float;

/// Smallest non-NaN element.
pub fn nan_min<A, S, D>(samples: &ArrayBase<S, D>) -> Option<A>
where
    A: Float,
    S: Data<Elem = A>,
    D: Dimension,
{
    samples
        .iter()
        .copied()
        .filter(|x| !x.is_nan())
        .reduce(A::min)
}

/// Largest non-NaN element.
pub fn nan_max<A, S, D>(samples: &ArrayBase<S, D>) -> Option<A>
where
    A: Float,
    S: Data<Elem = A>,
    D: Dimension,
{
    samples
        .iter()
        .copied()
        .filter(|x| !x.is_nan())
        .reduce(A::max)
}

/// `(min, max)` over non-NaN elements, in one pass.
pub fn nan_range<A, S, D>(samples: &ArrayBase<S, D>) -> Option<(A, A)>
where
    A: Float,
    S: Data<Elem = A>,
    D: Dimension,
{
    samples
        .iter()
        .copied()
        .filter(|x| !x.is_nan())
        .fold(None, |acc, x| match acc {
            None => Some((x, x)),
            Some((lo, hi)) => Some((lo.min(x), hi.max(x))),
        })
}

/// Number of NaN elements.
pub fn count_missing<A, S, D>(samples: &ArrayBase<S, D>) -> usize
where
    A: Float,
    S: Data<Elem = A>,
    D: Dimension,
{
    samples.iter().filter(|x| x.is_nan()).count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sentinel::normalize;
    use ndarray::{array, Array1};

    #[test]
    fn test_sentinel_skews_range_until_normalized() {
        let rhob = array![2.31, -999.25, 2.65, 2.48];
        assert_eq!(nan_min(&rhob), Some(-999.25));

        let clean = normalize(&rhob);
        assert_eq!(nan_range(&clean), Some((2.31, 2.65)));
        assert_eq!(count_missing(&clean), 1);
    }

    #[test]
    fn test_all_nan_is_none() {
        let a = array![f64::NAN, f64::NAN];
        assert_eq!(nan_min(&a), None);
        assert_eq!(nan_max(&a), None);
        assert_eq!(nan_range(&a), None);
        assert_eq!(count_missing(&a), 2);
    }

    #[test]
    fn test_empty_is_none() {
        let a = Array1::<f64>::zeros(0);
        assert_eq!(nan_range(&a), None);
        assert_eq!(count_missing(&a), 0);
    }

    #[test]
    fn test_2d_range() {
        let a = array![[3.0, f64::NAN], [-1.0, 7.5]];
        assert_eq!(nan_min(&a), Some(-1.0));
        assert_eq!(nan_max(&a), Some(7.5));
    }

    #[test]
    fn test_infinity_is_kept() {
        let a = array![1.0, f64::INFINITY];
        assert_eq!(nan_max(&a), Some(f64::INFINITY));
    }
}
