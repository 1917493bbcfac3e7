//! Sentinel value normalization.
//!
//! Logging tools write a fixed number (LAS `NULL`, usually `-999.25`) where no
//! measurement was taken. Left in place it wrecks every min/max and average,
//! so it is replaced with NaN before any analysis or plotting.
//!
//! Matching is **exact** floating-point equality. A file that encodes its null
//! as `-999.2500001` is not cleaned by the default policy; opt into
//! [`SentinelMatch::Tolerance`] explicitly if that is needed.
//!
//! A NaN sentinel never matches anything (NaN is unequal to itself), so
//! normalizing with a NaN sentinel returns the input unchanged.
//!
//! Two disciplines are offered and they are observably different to callers
//! that alias the input:
//! - [`convert_value_to_nan`] / [`normalize`] / [`SentinelPolicy::apply`] are
//!   pure and return a new array.
//! - [`convert_value_to_nan_in_place`] / [`SentinelPolicy::apply_in_place`]
//!   mutate the caller's array and return the number of replaced elements.
//!
//! # Usage
//!
//! ```
//! use ndarray::array;
//! use petrophys::sentinel::normalize;
//!
//! let gr = array![45.0_f64, -999.25, 60.5];
//! let clean = normalize(&gr);
//! assert!(clean[1].is_nan());
//! ```

use crate::config::defaults;
use ndarray::{Array, ArrayBase, Data, DataMut, Dimension};
use num_traits::{Float, NumCast};
use serde::{Deserialize, Serialize};

/// Default LAS null value.
pub const DEFAULT_SENTINEL: f64 = defaults::NULL_VALUE;

// ============================================================================
// Exact single-value conversion
// ============================================================================

/// Return a copy of `samples` with every element equal to `sentinel` set to NaN.
///
/// Works on arrays of any rank, including empty ones.
pub fn convert_value_to_nan<A, S, D>(samples: &ArrayBase<S, D>, sentinel: A) -> Array<A, D>
where
    A: Float,
    S: Data<Elem = A>,
    D: Dimension,
{
    samples.mapv(|x| if x == sentinel { A::nan() } else { x })
}

/// [`convert_value_to_nan`] with the default `-999.25` sentinel.
pub fn normalize<A, S, D>(samples: &ArrayBase<S, D>) -> Array<A, D>
where
    A: Float,
    S: Data<Elem = A>,
    D: Dimension,
{
    SentinelPolicy::default().apply(samples)
}

/// Replace `sentinel` with NaN inside `samples`, returning how many elements changed.
pub fn convert_value_to_nan_in_place<A, S, D>(samples: &mut ArrayBase<S, D>, sentinel: A) -> usize
where
    A: Float,
    S: DataMut<Elem = A>,
    D: Dimension,
{
    let mut replaced = 0;
    samples.map_inplace(|x| {
        if *x == sentinel {
            *x = A::nan();
            replaced += 1;
        }
    });
    replaced
}

/// Number of elements exactly equal to `sentinel`.
pub fn count_sentinels<A, S, D>(samples: &ArrayBase<S, D>, sentinel: A) -> usize
where
    A: Float,
    S: Data<Elem = A>,
    D: Dimension,
{
    samples.iter().filter(|&&x| x == sentinel).count()
}

// ============================================================================
// Policy
// ============================================================================

/// How sample values are compared against sentinel values.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum SentinelMatch {
    /// IEEE-754 equality (`x == sentinel`)
    #[default]
    Exact,
    /// `|x - sentinel| <= abs`
    Tolerance { abs: f64 },
}

/// One or more sentinel values plus the rule used to match them.
///
/// `SentinelPolicy::default()` is exact matching against `-999.25` and gives
/// the same result as [`normalize`].
///
/// Sentinels are stored as `f64` and rounded to the array's element type
/// before comparing, so an `f32` array holding `0.1_f32` matches a policy
/// built from `0.1`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentinelPolicy {
    values: Vec<f64>,
    matching: SentinelMatch,
}

impl Default for SentinelPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_SENTINEL)
    }
}

impl SentinelPolicy {
    /// Exact matching against a single value.
    pub fn new(sentinel: f64) -> Self {
        Self {
            values: vec![sentinel],
            matching: SentinelMatch::Exact,
        }
    }

    /// Add further values to treat as missing.
    pub fn with_extra(mut self, extra: impl IntoIterator<Item = f64>) -> Self {
        self.values.extend(extra);
        self
    }

    pub fn with_matching(mut self, matching: SentinelMatch) -> Self {
        self.matching = matching;
        self
    }

    /// Shorthand for `with_matching(SentinelMatch::Tolerance { abs })`.
    pub fn with_tolerance(self, abs: f64) -> Self {
        self.with_matching(SentinelMatch::Tolerance { abs })
    }

    /// The primary sentinel followed by any extra values.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn matching(&self) -> SentinelMatch {
        self.matching
    }

    /// Whether `x` counts as a missing measurement under this policy.
    pub fn is_sentinel<A: Float>(&self, x: A) -> bool {
        let mut sentinels = self.values.iter().filter_map(|&s| <A as NumCast>::from(s));
        match self.matching {
            SentinelMatch::Exact => sentinels.any(|s| x == s),
            SentinelMatch::Tolerance { abs } => {
                let Some(abs) = <A as NumCast>::from(abs) else {
                    return false;
                };
                sentinels.any(|s| (x - s).abs() <= abs)
            }
        }
    }

    /// Pure variant: a new array with matching elements set to NaN.
    pub fn apply<A, S, D>(&self, samples: &ArrayBase<S, D>) -> Array<A, D>
    where
        A: Float,
        S: Data<Elem = A>,
        D: Dimension,
    {
        samples.mapv(|x| if self.is_sentinel(x) { A::nan() } else { x })
    }

    /// In-place variant, returning the number of replaced elements.
    pub fn apply_in_place<A, S, D>(&self, samples: &mut ArrayBase<S, D>) -> usize
    where
        A: Float,
        S: DataMut<Elem = A>,
        D: Dimension,
    {
        let mut replaced = 0;
        samples.map_inplace(|x| {
            if self.is_sentinel(*x) {
                *x = A::nan();
                replaced += 1;
            }
        });
        replaced
    }

    /// Number of elements this policy would replace.
    pub fn count<A, S, D>(&self, samples: &ArrayBase<S, D>) -> usize
    where
        A: Float,
        S: Data<Elem = A>,
        D: Dimension,
    {
        samples.iter().filter(|&&x| self.is_sentinel(x)).count()
    }
}

// ============================================================================
// Tests
// ============================================================================
