//! Log quality screening.
//!
//! DRHO is the difference between the short- and long-spaced density
//! readings. Large values mean the pad lost contact with the borehole wall
//! (washouts, rugose hole) and the bulk density on that sample is unreliable.

use crate::config::defaults;
use crate::curves::{CurveError, CurveSet};
use ndarray::{Array1, ArrayBase, Data, DataMut, Ix1, Zip};
use tracing::info;

/// `true` where `drho > max_drho`. NaN DRHO is unknown, not flagged.
pub fn unreliable_density_mask<S>(drho: &ArrayBase<S, Ix1>, max_drho: f64) -> Array1<bool>
where
    S: Data<Elem = f64>,
{
    drho.mapv(|d| d > max_drho)
}

/// Set RHOB to NaN wherever DRHO exceeds `max_drho`.
///
/// Returns the number of samples masked, counting only samples that were not
/// already NaN.
pub fn mask_unreliable_density<S, T>(
    rhob: &mut ArrayBase<S, Ix1>,
    drho: &ArrayBase<T, Ix1>,
    max_drho: f64,
) -> Result<usize, CurveError>
where
    S: DataMut<Elem = f64>,
    T: Data<Elem = f64>,
{
    mask_density_where(rhob, drho, max_drho, defaults::DENSITY_CORRECTION_MNEMONIC)
}

fn mask_density_where<S, T>(
    rhob: &mut ArrayBase<S, Ix1>,
    drho: &ArrayBase<T, Ix1>,
    max_drho: f64,
    correction: &str,
) -> Result<usize, CurveError>
where
    S: DataMut<Elem = f64>,
    T: Data<Elem = f64>,
{
    if rhob.len() != drho.len() {
        return Err(CurveError::LengthMismatch {
            mnemonic: correction.to_string(),
            expected: rhob.len(),
            actual: drho.len(),
        });
    }

    let mut masked = 0;
    Zip::from(rhob).and(drho).for_each(|r, &d| {
        if d > max_drho && !r.is_nan() {
            *r = f64::NAN;
            masked += 1;
        }
    });
    Ok(masked)
}

impl CurveSet {
    /// Mask the `density` curve where the `correction` curve exceeds `max_drho`.
    pub fn mask_unreliable_density(
        &mut self,
        density: &str,
        correction: &str,
        max_drho: f64,
    ) -> Result<usize, CurveError> {
        let drho = self.curve(correction)?.clone();
        let mut rhob = self.data_mut(density)?;
        let masked = mask_density_where(&mut rhob, &drho, max_drho, correction)?;

        info!(
            well = %self.well(),
            density,
            correction,
            max_drho,
            masked,
            "Unreliable density samples masked"
        );
        Ok(masked)
    }
}
