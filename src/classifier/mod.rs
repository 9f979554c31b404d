//! Measurement classifier
//!
//! Turns per-finger nail measurements into result cards:
//!
//! - **Stage 1** (`analyze_stage1`): index/ring 2D:4D ratio and nail
//!   shape select one of six persona cards. Fails if either finger is
//!   missing.
//! - **Stage 2** (`analyze_stage2`): curvature statistics over up to four
//!   fingers select one of three durability profiles. Never fails.
//!
//! Everything here is pure and synchronous. The catalogs are immutable
//! statics, so a [`Classifier`] can be shared across threads freely.

mod stage1;
mod stage2;
mod stats;
mod thresholds;

pub use stage1::{
    analyze_stage1, analyze_stage1_with, digit_ratio, persona_code, shape_for, tendency_for,
    PersonaResult, Shape,
};
pub use stage2::{
    analyze_stage2, analyze_stage2_with, collect_curvatures, profile_code, CurvatureSource,
    ProfileResult,
};
pub use stats::{format_stat, CurvatureStats};
pub use thresholds::{Stage1Thresholds, Stage2Thresholds, Thresholds};

use crate::error::ClassifyResult;
use crate::models::Measurements;

/// Both classification stages bound to one set of thresholds
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Classifier {
    thresholds: Thresholds,
}

impl Classifier {
    pub fn new(thresholds: Thresholds) -> Self {
        Self { thresholds }
    }

    pub fn stage1(&self, measurements: &Measurements) -> ClassifyResult<PersonaResult> {
        analyze_stage1_with(measurements, &self.thresholds.stage1)
    }

    pub fn stage2(&self, measurements: &Measurements) -> ProfileResult {
        analyze_stage2_with(measurements, &self.thresholds.stage2)
    }
}
