//! Classification thresholds
//!
//! The defaults are the production cut-offs. They can be overridden from
//! `nbti.toml`, mainly for calibration experiments against new backend
//! versions.

use serde::{Deserialize, Serialize};

/// Cut-offs for the first-stage (persona) classifier
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Stage1Thresholds {
    /// 2D:4D ratio strictly above this is "emotional"
    pub emotional_above: f64,
    /// 2D:4D ratio strictly below this is "instinct"
    pub instinct_below: f64,
    /// Average aspect ratio at or above this is "slim"
    pub slim_at_least: f64,
}

impl Default for Stage1Thresholds {
    fn default() -> Self {
        Self {
            emotional_above: 1.02,
            instinct_below: 0.98,
            slim_at_least: 1.2,
        }
    }
}

/// Cut-offs for the second-stage (durability) classifier
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Stage2Thresholds {
    /// Any single nail at or above this curvature is the high band
    pub high_max_at_least: f64,
    /// Spread at or above this is the high band; below it the low band is possible
    pub high_std_dev_at_least: f64,
    /// Mean curvature strictly below this (with small spread) is the low band
    pub low_mean_below: f64,
}

impl Default for Stage2Thresholds {
    fn default() -> Self {
        Self {
            high_max_at_least: 1.10,
            high_std_dev_at_least: 0.03,
            low_mean_below: 1.03,
        }
    }
}

/// Both stages together, as stored under `[thresholds]` in config
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Thresholds {
    pub stage1: Stage1Thresholds,
    pub stage2: Stage2Thresholds,
}

impl Thresholds {
    /// Check that every cut-off is finite and the 2D:4D bands do not overlap
    pub fn validate(&self) -> anyhow::Result<()> {
        let values = [
            ("stage1.emotional_above", self.stage1.emotional_above),
            ("stage1.instinct_below", self.stage1.instinct_below),
            ("stage1.slim_at_least", self.stage1.slim_at_least),
            ("stage2.high_max_at_least", self.stage2.high_max_at_least),
            ("stage2.high_std_dev_at_least", self.stage2.high_std_dev_at_least),
            ("stage2.low_mean_below", self.stage2.low_mean_below),
        ];
        for (name, value) in values {
            if !value.is_finite() || value < 0.0 {
                anyhow::bail!(
                    "Threshold {} must be a finite non-negative number, got {}",
                    name,
                    value
                );
            }
        }
        if self.stage1.instinct_below > self.stage1.emotional_above {
            anyhow::bail!(
                "stage1.instinct_below ({}) must not exceed stage1.emotional_above ({})",
                self.stage1.instinct_below,
                self.stage1.emotional_above
            );
        }
        Ok(())
    }
}
