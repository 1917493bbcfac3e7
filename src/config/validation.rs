//! Config validation: unknown-key detection with Levenshtein suggestions
//! and value range checks.
//!
//! The raw TOML is first walked as a `toml::Value` tree and compared against
//! the known field names, producing "did you mean?" warnings. Serde
//! deserialization runs afterwards. Warnings never break a config.

use super::PetrophysConfig;
use std::collections::HashSet;

/// A non-fatal config warning (typo, suspicious value).
#[derive(Debug, Clone)]
pub struct ValidationWarning {
    pub field: String,
    pub message: String,
    pub suggestion: Option<String>,
}

impl std::fmt::Display for ValidationWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)?;
        if let Some(ref s) = self.suggestion {
            write!(f, " (did you mean '{s}'?)")?;
        }
        Ok(())
    }
}

// ============================================================================
// Known Config Keys
// ============================================================================

/// Every valid dotted key path of `PetrophysConfig`.
///
/// Kept in step with the structs in `petrophys_config.rs` by hand.
pub fn known_config_keys() -> HashSet<&'static str> {
    let keys: &[&str] = &[
        // [sentinel]
        "sentinel",
        "sentinel.value",
        "sentinel.extra_values",
        "sentinel.tolerance",
        // [curves]
        "curves",
        "curves.depth_mnemonic",
        "curves.density_mnemonic",
        "curves.density_correction_mnemonic",
        // [quality]
        "quality",
        "quality.max_density_correction_gcc",
    ];
    keys.iter().copied().collect()
}

// ============================================================================
// TOML Key Walking
// ============================================================================

/// Recursively walks a `toml::Value` tree and collects all dotted key paths.
///
/// `{ a = { b = 1, c = 2 } }` yields `["a", "a.b", "a.c"]`.
pub fn walk_toml_keys(value: &toml::Value, prefix: &str) -> Vec<String> {
    let mut keys = Vec::new();
    if let Some(table) = value.as_table() {
        for (k, v) in table {
            let path = if prefix.is_empty() {
                k.clone()
            } else {
                format!("{prefix}.{k}")
            };
            keys.push(path.clone());
            if v.is_table() {
                keys.extend(walk_toml_keys(v, &path));
            }
        }
    }
    keys
}

// ============================================================================
// Levenshtein Distance
// ============================================================================

fn levenshtein(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0; b.len() + 1];

    for (i, ca) in a.iter().enumerate() {
        curr[0] = i + 1;
        for (j, cb) in b.iter().enumerate() {
            let cost = usize::from(ca != cb);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}

/// Closest known key within edit distance 3, ties broken alphabetically.
pub fn suggest_correction(unknown: &str, known: &HashSet<&str>) -> Option<String> {
    known
        .iter()
        .map(|&k| (levenshtein(unknown, k), k))
        .filter(|&(dist, _)| dist <= 3)
        .min()
        .map(|(_, k)| k.to_string())
}

// ============================================================================
// Unknown Key Validation
// ============================================================================

/// Warnings for every unknown key in a raw TOML document.
///
/// Malformed TOML yields no warnings; serde reports the parse error later.
pub fn validate_unknown_keys(raw_toml: &str) -> Vec<ValidationWarning> {
    let Ok(value) = raw_toml.parse::<toml::Value>() else {
        return Vec::new();
    };

    let known = known_config_keys();
    walk_toml_keys(&value, "")
        .into_iter()
        .filter(|key| !known.contains(key.as_str()))
        .map(|key| ValidationWarning {
            suggestion: suggest_correction(&key, &known),
            message: format!("Unknown config key '{key}'"),
            field: key,
        })
        .collect()
}

// ============================================================================
// Range Validation
// ============================================================================

/// Validate value ranges on a parsed config.
///
/// Returns (errors, warnings). Errors are values the library cannot work
/// with; warnings are legal but almost certainly unintended.
pub fn validate_ranges(config: &PetrophysConfig) -> (Vec<String>, Vec<ValidationWarning>) {
    let mut errors = Vec::new();
    let mut warnings = Vec::new();

    let s = &config.sentinel;

    // NaN never compares equal, so a NaN sentinel matches nothing
    if s.value.is_nan() {
        warnings.push(ValidationWarning {
            field: "sentinel.value".to_string(),
            message: "sentinel.value is NaN; normalization will leave every array unchanged"
                .to_string(),
            suggestion: None,
        });
    }
    for (i, v) in s.extra_values.iter().enumerate() {
        if v.is_nan() {
            warnings.push(ValidationWarning {
                field: format!("sentinel.extra_values[{i}]"),
                message: format!("sentinel.extra_values[{i}] is NaN and will never match"),
                suggestion: None,
            });
        }
    }

    if let Some(tol) = s.tolerance {
        if !tol.is_finite() || tol < 0.0 {
            errors.push(format!(
                "sentinel.tolerance = {tol} must be a finite number >= 0"
            ));
        } else if tol >= 1.0 {
            warnings.push(ValidationWarning {
                field: "sentinel.tolerance".to_string(),
                message: format!(
                    "sentinel.tolerance = {tol} is wide enough to swallow real measurements"
                ),
                suggestion: None,
            });
        }
    }

    let c = &config.curves;
    for (name, value) in [
        ("curves.depth_mnemonic", &c.depth_mnemonic),
        ("curves.density_mnemonic", &c.density_mnemonic),
        ("curves.density_correction_mnemonic", &c.density_correction_mnemonic),
    ] {
        if value.trim().is_empty() {
            errors.push(format!("{name} must not be empty"));
        }
    }

    let q = config.quality.max_density_correction_gcc;
    if !q.is_finite() || q <= 0.0 {
        errors.push(format!(
            "quality.max_density_correction_gcc = {q} must be a finite number > 0"
        ));
    } else if q > 0.5 {
        warnings.push(ValidationWarning {
            field: "quality.max_density_correction_gcc".to_string(),
            message: format!(
                "quality.max_density_correction_gcc = {q:.2} is outside the typical range (0-0.5 g/cm3)"
            ),
            suggestion: None,
        });
    }

    (errors, warnings)
}

// ============================================================================
// Tests
// ============================================================================
