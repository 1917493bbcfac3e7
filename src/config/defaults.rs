//! Library-wide default constants.
//!
//! Values follow the conventions of the data providers (LAS null value,
//! curve mnemonics) rather than anything discoverable from the data itself.

// ============================================================================
// Sentinel
// ============================================================================

/// LAS `NULL` value written by logging contractors where no measurement exists.
///
/// Inspect the `~Well` section of a LAS file to confirm it for a given well.
pub const NULL_VALUE: f64 = -999.25;

// ============================================================================
// Curves
// ============================================================================

/// Mnemonic of the measured-depth index curve.
pub const DEPTH_MNEMONIC: &str = "DEPT";

/// Bulk density (g/cm³).
pub const DENSITY_MNEMONIC: &str = "RHOB";

/// Density correction (g/cm³), difference between short- and long-spaced
/// density readings.
pub const DENSITY_CORRECTION_MNEMONIC: &str = "DRHO";

// ============================================================================
// Quality
// ============================================================================

/// DRHO above this value marks the bulk density reading as unreliable (g/cm³).
///
/// Usually coincides with washouts and poor pad contact on the borehole wall.
pub const MAX_DENSITY_CORRECTION_GCC: f64 = 0.1;

// ============================================================================
// Config discovery
// ============================================================================

/// Environment variable holding a path to the config file.
pub const CONFIG_ENV_VAR: &str = "PETROPHYS_CONFIG";

/// Config file name searched for in the working directory.
pub const CONFIG_FILE_NAME: &str = "petrophys.toml";
