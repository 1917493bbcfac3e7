//! Sonic log unit conversions.
//!
//! Sonic tools record compressional slowness `DT` in microseconds per foot.
//! Tracks are usually drawn per metre, or as interval velocity.

use ndarray::{Array, ArrayBase, Data, Dimension};

/// Metres in one foot (exact, international foot)
pub const METRES_PER_FOOT: f64 = 0.3048;

/// Feet in one metre
pub const FEET_PER_METRE: f64 = 1.0 / METRES_PER_FOOT;

/// Microseconds in one second
const US_PER_S: f64 = 1.0e6;

/// μs/ft → μs/m. NaN passes through.
pub fn slowness_per_metre(dt_us_per_ft: f64) -> f64 {
    dt_us_per_ft / METRES_PER_FOOT
}

/// μs/ft → interval velocity in m/s.
///
/// Non-positive or NaN slowness has no physical velocity and yields NaN.
pub fn sonic_velocity(dt_us_per_ft: f64) -> f64 {
    if dt_us_per_ft.is_nan() || dt_us_per_ft <= 0.0 {
        return f64::NAN;
    }
    US_PER_S / slowness_per_metre(dt_us_per_ft)
}

/// Element-wise [`slowness_per_metre`].
pub fn slowness_per_metre_array<S, D>(dt: &ArrayBase<S, D>) -> Array<f64, D>
where
    S: Data<Elem = f64>,
    D: Dimension,
{
    dt.mapv(slowness_per_metre)
}

/// Element-wise [`sonic_velocity`].
pub fn sonic_velocity_array<S, D>(dt: &ArrayBase<S, D>) -> Array<f64, D>
where
    S: Data<Elem = f64>,
    D: Dimension,
{
    dt.mapv(sonic_velocity)
}
