//! petrophys: Petrophysical Data Cleaning
//!
//! Prepares well-log curves and core measurements for analysis and plotting.
//! Loading files and drawing figures are left to the caller; this crate works
//! on the numeric arrays in between.
//!
//! ## Modules
//!
//! - **Sentinel**: replace the instrument "no measurement" value (`-999.25`) with NaN
//! - **Curves**: mnemonic-keyed curve sets on a shared depth index
//! - **Cores**: cored depth intervals and the log samples inside them
//! - **Stats**: NaN-aware min/max for track extents
//! - **Units**: sonic slowness conversions
//! - **Quality**: DRHO-based bulk density screening
//! - **Config**: TOML configuration for all of the above

pub mod config;
pub mod cores;
pub mod curves;
pub mod quality;
pub mod sentinel;
pub mod stats;
pub mod units;

// Re-export configuration
pub use config::{ConfigError, PetrophysConfig};

// Re-export the normalizer
pub use sentinel::{
    convert_value_to_nan, convert_value_to_nan_in_place, normalize, SentinelMatch,
    SentinelPolicy, DEFAULT_SENTINEL,
};

// Re-export data model
pub use cores::{core_span, CoreInterval};
pub use curves::{Curve, CurveError, CurveSet, NormalizationReport};
