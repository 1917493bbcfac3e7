//! Petrophys Configuration - sentinel, curve naming and quality limits as TOML values
//!
//! Each struct implements `Default` with the conventional values, so running
//! without a config file behaves exactly like the built-in defaults.

use super::defaults;
use crate::sentinel::{SentinelMatch, SentinelPolicy};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{info, warn};

// ============================================================================
// Config Provenance
// ============================================================================

/// Dotted key paths that were explicitly present in the user's TOML file.
///
/// Serde defaults fill every field after deserialization; this keeps track of
/// which ones the user actually wrote.
#[derive(Debug, Clone, Default)]
pub struct ConfigProvenance {
    pub explicit_keys: HashSet<String>,
}

impl ConfigProvenance {
    /// Example: `provenance.is_user_set("sentinel.value")`
    pub fn is_user_set(&self, dotted_key: &str) -> bool {
        self.explicit_keys.contains(dotted_key)
    }
}

// ============================================================================
// Top-Level Config
// ============================================================================

/// Root configuration.
///
/// Load with `PetrophysConfig::load()` which searches:
/// 1. `$PETROPHYS_CONFIG` env var
/// 2. `./petrophys.toml`
/// 3. Built-in defaults
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PetrophysConfig {
    /// Sentinel ("no measurement") handling
    #[serde(default)]
    pub sentinel: SentinelConfig,

    /// Curve mnemonics used by depth and quality operations
    #[serde(default)]
    pub curves: CurveConfig,

    /// Log quality limits
    #[serde(default)]
    pub quality: QualityConfig,
}

impl PetrophysConfig {
    /// Load configuration using the standard search order, falling back to
    /// defaults on any failure.
    pub fn load() -> Self {
        Self::load_with_provenance().0
    }

    /// Same search order as `load()`, also returning which keys were set.
    pub fn load_with_provenance() -> (Self, ConfigProvenance) {
        // 1. Env var
        if let Ok(path) = std::env::var(defaults::CONFIG_ENV_VAR) {
            let p = PathBuf::from(&path);
            if p.exists() {
                match Self::load_from_file_with_provenance(&p) {
                    Ok((config, provenance)) => {
                        info!(path = %p.display(), "Loaded config from {}", defaults::CONFIG_ENV_VAR);
                        return (config, provenance);
                    }
                    Err(e) => {
                        warn!(path = %p.display(), error = %e, "Failed to load config from {}, falling back", defaults::CONFIG_ENV_VAR);
                    }
                }
            } else {
                warn!(path = %path, "{} points to non-existent file, falling back", defaults::CONFIG_ENV_VAR);
            }
        }

        // 2. Working directory
        let local = PathBuf::from(defaults::CONFIG_FILE_NAME);
        if local.exists() {
            match Self::load_from_file_with_provenance(&local) {
                Ok((config, provenance)) => {
                    info!(path = %local.display(), "Loaded config from working directory");
                    return (config, provenance);
                }
                Err(e) => {
                    warn!(error = %e, "Failed to load ./{}, using defaults", defaults::CONFIG_FILE_NAME);
                }
            }
        }

        // 3. Defaults
        info!("No {} found, using built-in defaults", defaults::CONFIG_FILE_NAME);
        (Self::default(), ConfigProvenance::default())
    }

    /// Load from a specific TOML file path.
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let (config, _provenance) = Self::load_from_file_with_provenance(path)?;
        Ok(config)
    }

    /// Load from a specific TOML file path, also returning provenance.
    pub fn load_from_file_with_provenance(
        path: &Path,
    ) -> Result<(Self, ConfigProvenance), ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::Io(path.to_path_buf(), e))?;
        let (config, provenance) = Self::from_toml_str(&contents)
            .map_err(|e| match e {
                ConfigError::Parse(_, inner) => ConfigError::Parse(path.to_path_buf(), inner),
                other => other,
            })?;
        Ok((config, provenance))
    }

    /// Parse and validate a TOML document.
    ///
    /// Unknown keys are logged as warnings and never fail the parse.
    pub fn from_toml_str(contents: &str) -> Result<(Self, ConfigProvenance), ConfigError> {
        for w in &super::validation::validate_unknown_keys(contents) {
            warn!("{}", w);
        }

        let provenance = ConfigProvenance {
            explicit_keys: contents
                .parse::<toml::Value>()
                .map(|v| super::validation::walk_toml_keys(&v, ""))
                .unwrap_or_default()
                .into_iter()
                .collect(),
        };

        let config: Self = toml::from_str(contents)
            .map_err(|e| ConfigError::Parse(PathBuf::new(), e))?;
        config.validate()?;
        Ok((config, provenance))
    }

    /// Serialize the current config to a TOML string.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(ConfigError::Serialize)
    }

    /// Write the config to a file.
    pub fn save_to_file(&self, path: &Path) -> Result<(), ConfigError> {
        let contents = self.to_toml()?;
        std::fs::write(path, contents)
            .map_err(|e| ConfigError::Io(path.to_path_buf(), e))?;
        info!(path = %path.display(), "Config saved");
        Ok(())
    }

    /// Validate all values for internal consistency.
    ///
    /// Errors are values that cannot work; suspicious values are logged.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let (errors, warnings) = super::validation::validate_ranges(self);
        for w in &warnings {
            warn!("{}", w);
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Validation(errors))
        }
    }

    /// Sentinel policy described by the `[sentinel]` section.
    pub fn sentinel_policy(&self) -> SentinelPolicy {
        self.sentinel.policy()
    }
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Config I/O error ({}): {1}", .0.display())]
    Io(PathBuf, std::io::Error),

    #[error("Config parse error ({}): {1}", .0.display())]
    Parse(PathBuf, toml::de::Error),

    #[error("Config serialization error: {0}")]
    Serialize(toml::ser::Error),

    #[error("Config validation failed:\n  - {}", .0.join("\n  - "))]
    Validation(Vec<String>),
}

// ============================================================================
// Sentinel
// ============================================================================

/// `[sentinel]` section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentinelConfig {
    /// Primary null value (LAS `NULL`)
    #[serde(default = "default_null_value")]
    pub value: f64,

    /// Further values treated as missing, e.g. a known bad lab reading
    #[serde(default)]
    pub extra_values: Vec<f64>,

    /// Absolute tolerance for matching. Absent means exact equality.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tolerance: Option<f64>,
}

fn default_null_value() -> f64 {
    defaults::NULL_VALUE
}

impl Default for SentinelConfig {
    fn default() -> Self {
        Self {
            value: default_null_value(),
            extra_values: Vec::new(),
            tolerance: None,
        }
    }
}

impl SentinelConfig {
    pub fn policy(&self) -> SentinelPolicy {
        let matching = self
            .tolerance
            .map_or(SentinelMatch::Exact, |abs| SentinelMatch::Tolerance { abs });
        SentinelPolicy::new(self.value)
            .with_extra(self.extra_values.iter().copied())
            .with_matching(matching)
    }
}

// ============================================================================
// Curves
// ============================================================================

/// `[curves]` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurveConfig {
    #[serde(default = "default_depth_mnemonic")]
    pub depth_mnemonic: String,

    #[serde(default = "default_density_mnemonic")]
    pub density_mnemonic: String,

    #[serde(default = "default_density_correction_mnemonic")]
    pub density_correction_mnemonic: String,
}

fn default_depth_mnemonic() -> String {
    defaults::DEPTH_MNEMONIC.to_string()
}
fn default_density_mnemonic() -> String {
    defaults::DENSITY_MNEMONIC.to_string()
}
fn default_density_correction_mnemonic() -> String {
    defaults::DENSITY_CORRECTION_MNEMONIC.to_string()
}

impl Default for CurveConfig {
    fn default() -> Self {
        Self {
            depth_mnemonic: default_depth_mnemonic(),
            density_mnemonic: default_density_mnemonic(),
            density_correction_mnemonic: default_density_correction_mnemonic(),
        }
    }
}

// ============================================================================
// Quality
// ============================================================================

/// `[quality]` section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QualityConfig {
    /// DRHO limit above which RHOB is considered unreliable (g/cm³)
    #[serde(default = "default_max_density_correction")]
    pub max_density_correction_gcc: f64,
}

fn default_max_density_correction() -> f64 {
    defaults::MAX_DENSITY_CORRECTION_GCC
}

impl Default for QualityConfig {
    fn default() -> Self {
        Self {
            max_density_correction_gcc: default_max_density_correction(),
        }
    }
}
