//! Core intervals.
//!
//! A core is a physical rock sample cut between two measured depths and
//! analysed in the lab, separately from the continuous log. Depth increases
//! downward, so `top <= bottom`.

use crate::curves::{CurveError, CurveSet};
use serde::{Deserialize, Serialize};

/// Measured-depth range of one core.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoreInterval {
    top: f64,
    bottom: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    label: Option<String>,
}

impl CoreInterval {
    pub fn new(top: f64, bottom: f64) -> Result<Self, CurveError> {
        if !top.is_finite() || !bottom.is_finite() || top > bottom {
            return Err(CurveError::InvalidInterval { top, bottom });
        }
        Ok(Self {
            top,
            bottom,
            label: None,
        })
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn top(&self) -> f64 {
        self.top
    }

    pub fn bottom(&self) -> f64 {
        self.bottom
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    pub fn thickness(&self) -> f64 {
        self.bottom - self.top
    }

    /// Inclusive at both ends; NaN is never contained.
    pub fn contains(&self, depth: f64) -> bool {
        depth >= self.top && depth <= self.bottom
    }
}

/// Shallowest top and deepest bottom over a set of cores.
pub fn core_span(intervals: &[CoreInterval]) -> Option<(f64, f64)> {
    intervals.iter().fold(None, |acc, c| match acc {
        None => Some((c.top, c.bottom)),
        Some((top, bottom)) => Some((top.min(c.top), bottom.max(c.bottom))),
    })
}

impl CurveSet {
    /// Log samples recorded inside a cored interval.
    pub fn within_core(&self, core: &CoreInterval) -> Result<Self, CurveError> {
        self.depth_window(core.top, core.bottom)
    }
}
