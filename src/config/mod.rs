//! Configuration Module
//!
//! Sentinel handling, curve mnemonics and quality limits loaded from a TOML
//! file. Nothing in the library reads configuration implicitly: callers load
//! a `PetrophysConfig` and pass the pieces they need.
//!
//! ## Loading Order
//!
//! 1. `PETROPHYS_CONFIG` environment variable (path to TOML file)
//! 2. `petrophys.toml` in the current working directory
//! 3. Built-in defaults
//!
//! ## Usage
//!
//! ```ignore
//! let config = PetrophysConfig::load();
//! let clean = curves.normalize(&config.sentinel_policy());
//! ```

mod petrophys_config;
pub mod defaults;
pub mod validation;

pub use petrophys_config::*;
