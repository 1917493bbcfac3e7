//! Well-log curve sets.
//!
//! A [`CurveSet`] is what a LAS reader hands over once parsing is done: a
//! number of named curves (mnemonics such as `GR`, `DT`, `RHOB`, `NPHI`,
//! `DRHO`) sampled on a shared depth index (`DEPT`). Every curve has the same
//! number of samples; that invariant is enforced on insert and on
//! deserialization.
//!
//! Mnemonic lookup ignores ASCII case, since contractors are inconsistent
//! about it (`Dept`, `DEPT`).

use crate::sentinel::SentinelPolicy;
use crate::stats;
use ndarray::{Array1, Array2, ArrayViewMut1, Axis};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

// ============================================================================
// Errors
// ============================================================================

#[derive(Debug, Error, Clone, PartialEq)]
pub enum CurveError {
    #[error("Curve {mnemonic} has {actual} samples, expected {expected}")]
    LengthMismatch {
        mnemonic: String,
        expected: usize,
        actual: usize,
    },

    #[error("Duplicate curve mnemonic: {0}")]
    DuplicateMnemonic(String),

    #[error("Curve not found: {0}")]
    MissingCurve(String),

    #[error("Invalid depth window [{min}, {max}]")]
    InvalidWindow { min: f64, max: f64 },

    #[error("Invalid core interval: top {top} must be finite and not below bottom {bottom}")]
    InvalidInterval { top: f64, bottom: f64 },
}

// ============================================================================
// Curve
// ============================================================================

/// A single depth-indexed measurement channel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Curve {
    pub mnemonic: String,
    #[serde(default)]
    pub unit: String,
    #[serde(default)]
    pub description: String,
    pub data: Array1<f64>,
}

impl Curve {
    pub fn new(mnemonic: impl Into<String>, data: impl Into<Array1<f64>>) -> Self {
        Self {
            mnemonic: mnemonic.into(),
            unit: String::new(),
            description: String::new(),
            data: data.into(),
        }
    }

    pub fn with_unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = unit.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Copy of this curve with sentinels replaced by NaN.
    pub fn normalized(&self, policy: &SentinelPolicy) -> Self {
        self.with_data(policy.apply(&self.data))
    }

    /// `(min, max)` ignoring NaN.
    pub fn range(&self) -> Option<(f64, f64)> {
        stats::nan_range(&self.data)
    }

    fn with_data(&self, data: Array1<f64>) -> Self {
        Self {
            mnemonic: self.mnemonic.clone(),
            unit: self.unit.clone(),
            description: self.description.clone(),
            data,
        }
    }

    fn matches(&self, mnemonic: &str) -> bool {
        self.mnemonic.eq_ignore_ascii_case(mnemonic)
    }
}

// ============================================================================
// Normalization Report
// ============================================================================

/// Per-curve count of samples replaced by [`CurveSet::normalize_in_place`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NormalizationReport {
    pub replaced: Vec<(String, usize)>,
}

impl NormalizationReport {
    pub fn total(&self) -> usize {
        self.replaced.iter().map(|(_, n)| n).sum()
    }

    /// Replaced count for one curve, `None` if the curve was not in the set.
    pub fn for_curve(&self, mnemonic: &str) -> Option<usize> {
        self.replaced
            .iter()
            .find(|(m, _)| m.eq_ignore_ascii_case(mnemonic))
            .map(|(_, n)| *n)
    }
}

// ============================================================================
// Curve Set
// ============================================================================

/// Curves of one well sharing a depth index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "CurveSetRecord")]
pub struct CurveSet {
    well: String,
    depth_mnemonic: String,
    curves: Vec<Curve>,
}

/// Unvalidated serde form of [`CurveSet`].
#[derive(Deserialize)]
struct CurveSetRecord {
    well: String,
    depth_mnemonic: String,
    #[serde(default)]
    curves: Vec<Curve>,
}

impl TryFrom<CurveSetRecord> for CurveSet {
    type Error = CurveError;

    fn try_from(record: CurveSetRecord) -> Result<Self, Self::Error> {
        Self::from_curves(record.well, record.depth_mnemonic, record.curves)
    }
}

impl CurveSet {
    /// Empty set; the first inserted curve fixes the sample count.
    pub fn new(well: impl Into<String>, depth_mnemonic: impl Into<String>) -> Self {
        Self {
            well: well.into(),
            depth_mnemonic: depth_mnemonic.into(),
            curves: Vec::new(),
        }
    }

    pub fn from_curves(
        well: impl Into<String>,
        depth_mnemonic: impl Into<String>,
        curves: impl IntoIterator<Item = Curve>,
    ) -> Result<Self, CurveError> {
        let mut set = Self::new(well, depth_mnemonic);
        for curve in curves {
            set.insert(curve)?;
        }
        Ok(set)
    }

    /// Add a curve, rejecting duplicates and length mismatches.
    pub fn insert(&mut self, curve: Curve) -> Result<(), CurveError> {
        if self.get(&curve.mnemonic).is_some() {
            return Err(CurveError::DuplicateMnemonic(curve.mnemonic));
        }
        if let Some(first) = self.curves.first() {
            let actual = curve.len();
            if first.len() != actual {
                return Err(CurveError::LengthMismatch {
                    mnemonic: curve.mnemonic,
                    expected: first.len(),
                    actual,
                });
            }
        }
        self.curves.push(curve);
        Ok(())
    }

    pub fn well(&self) -> &str {
        &self.well
    }

    pub fn depth_mnemonic(&self) -> &str {
        &self.depth_mnemonic
    }

    pub fn get(&self, mnemonic: &str) -> Option<&Curve> {
        self.curves.iter().find(|c| c.matches(mnemonic))
    }

    /// Samples of a curve, or `MissingCurve`.
    pub fn curve(&self, mnemonic: &str) -> Result<&Array1<f64>, CurveError> {
        self.get(mnemonic)
            .map(|c| &c.data)
            .ok_or_else(|| CurveError::MissingCurve(mnemonic.to_string()))
    }

    /// Mutable view of a curve's samples. The length cannot change through it.
    pub fn data_mut(&mut self, mnemonic: &str) -> Result<ArrayViewMut1<'_, f64>, CurveError> {
        self.curves
            .iter_mut()
            .find(|c| c.matches(mnemonic))
            .map(|c| c.data.view_mut())
            .ok_or_else(|| CurveError::MissingCurve(mnemonic.to_string()))
    }

    /// The depth index curve.
    pub fn depth(&self) -> Result<&Array1<f64>, CurveError> {
        self.curve(&self.depth_mnemonic)
    }

    /// Mnemonics in insertion order.
    pub fn mnemonics(&self) -> impl Iterator<Item = &str> {
        self.curves.iter().map(|c| c.mnemonic.as_str())
    }

    pub fn curves(&self) -> &[Curve] {
        &self.curves
    }

    /// Samples per curve.
    pub fn len(&self) -> usize {
        self.curves.first().map_or(0, Curve::len)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn curve_count(&self) -> usize {
        self.curves.len()
    }

    /// Copy of the set with every curve, depth included, normalized.
    pub fn normalize(&self, policy: &SentinelPolicy) -> Self {
        Self {
            well: self.well.clone(),
            depth_mnemonic: self.depth_mnemonic.clone(),
            curves: self.curves.iter().map(|c| c.normalized(policy)).collect(),
        }
    }

    /// Normalize every curve in place.
    pub fn normalize_in_place(&mut self, policy: &SentinelPolicy) -> NormalizationReport {
        let replaced: Vec<(String, usize)> = self
            .curves
            .iter_mut()
            .map(|c| {
                let n = policy.apply_in_place(&mut c.data);
                if n > 0 {
                    debug!(well = %self.well, curve = %c.mnemonic, replaced = n, "Sentinels replaced");
                }
                (c.mnemonic.clone(), n)
            })
            .collect();
        let report = NormalizationReport { replaced };

        info!(
            well = %self.well,
            curves = self.curves.len(),
            samples = self.len(),
            replaced = report.total(),
            "Curve set normalized"
        );
        report
    }

    /// Rows whose depth lies in `[min, max]`. Rows with NaN depth are dropped.
    pub fn depth_window(&self, min: f64, max: f64) -> Result<Self, CurveError> {
        if min.is_nan() || max.is_nan() || min > max {
            return Err(CurveError::InvalidWindow { min, max });
        }
        let depth = self.depth()?;
        let rows: Vec<usize> = depth
            .iter()
            .enumerate()
            .filter(|&(_, &d)| d >= min && d <= max)
            .map(|(i, _)| i)
            .collect();

        debug!(well = %self.well, min, max, rows = rows.len(), "Depth window selected");

        Ok(Self {
            well: self.well.clone(),
            depth_mnemonic: self.depth_mnemonic.clone(),
            curves: self
                .curves
                .iter()
                .map(|c| c.with_data(c.data.select(Axis(0), &rows)))
                .collect(),
        })
    }

    /// NaN-aware `(min, max)` of each curve, in insertion order.
    pub fn ranges(&self) -> Vec<(String, Option<(f64, f64)>)> {
        self.curves
            .iter()
            .map(|c| (c.mnemonic.clone(), c.range()))
            .collect()
    }

    /// Samples as a matrix: one row per depth sample, one column per curve.
    pub fn to_matrix(&self) -> Array2<f64> {
        Array2::from_shape_fn((self.len(), self.curves.len()), |(row, col)| {
            self.curves[col].data[row]
        })
    }
}

// ============================================================================
// Tests
// ============================================================================
