//! First-stage classifier: 2D:4D ratio and nail shape to persona card

use super::stats::format_stat;
use super::thresholds::Stage1Thresholds;
use crate::catalog::{self, EmotionalTendency, PersonaCode, PersonaRecord};
use crate::error::{ClassifyError, ClassifyResult};
use crate::models::{Finger, Measurements};
use serde::Serialize;
use tracing::debug;

/// Nail outline class from the average height/width ratio
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
    Slim,
    Wide,
}

impl std::fmt::Display for Shape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Shape::Slim => write!(f, "slim"),
            Shape::Wide => write!(f, "wide"),
        }
    }
}

/// Persona card plus the computed 2D:4D ratio
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PersonaResult {
    #[serde(flatten)]
    pub record: &'static PersonaRecord,
    /// 2D:4D ratio with four decimals
    pub ratio: String,
    #[serde(skip)]
    pub ratio_2d4d: f64,
    #[serde(skip)]
    pub shape_avg: f64,
    #[serde(skip)]
    pub tendency: EmotionalTendency,
    #[serde(skip)]
    pub shape: Shape,
}

impl PersonaResult {
    pub fn code(&self) -> PersonaCode {
        self.record.id
    }
}

/// Index/ring height ratio; 1 when the ring height is not positive
pub fn digit_ratio(index_height: f64, ring_height: f64) -> f64 {
    if ring_height > 0.0 {
        index_height / ring_height
    } else {
        1.0
    }
}

pub fn tendency_for(ratio: f64, t: &Stage1Thresholds) -> EmotionalTendency {
    if ratio > t.emotional_above {
        EmotionalTendency::Emotional
    } else if ratio < t.instinct_below {
        EmotionalTendency::Instinct
    } else {
        EmotionalTendency::Balance
    }
}

pub fn shape_for(shape_avg: f64, t: &Stage1Thresholds) -> Shape {
    if shape_avg >= t.slim_at_least {
        Shape::Slim
    } else {
        Shape::Wide
    }
}

/// Decision table over (tendency, shape)
pub fn persona_code(tendency: EmotionalTendency, shape: Shape) -> PersonaCode {
    match (tendency, shape) {
        (EmotionalTendency::Emotional, Shape::Slim) => PersonaCode::P1,
        (EmotionalTendency::Emotional, Shape::Wide) => PersonaCode::P2,
        (EmotionalTendency::Instinct, Shape::Slim) => PersonaCode::P3,
        (EmotionalTendency::Instinct, Shape::Wide) => PersonaCode::P4,
        (EmotionalTendency::Balance, Shape::Slim) => PersonaCode::P5,
        (EmotionalTendency::Balance, Shape::Wide) => PersonaCode::P6,
    }
}

/// Classify with the production thresholds
pub fn analyze_stage1(measurements: &Measurements) -> ClassifyResult<PersonaResult> {
    analyze_stage1_with(measurements, &Stage1Thresholds::default())
}

/// Classify index and ring measurements into a persona card.
///
/// Fails only when the index or ring nail is missing. Any other finger
/// in `measurements` is ignored.
pub fn analyze_stage1_with(
    measurements: &Measurements,
    thresholds: &Stage1Thresholds,
) -> ClassifyResult<PersonaResult> {
    let index = measurements
        .get(Finger::Index)
        .ok_or(ClassifyError::MissingData {
            finger: Finger::Index,
        })?;
    let ring = measurements
        .get(Finger::Ring)
        .ok_or(ClassifyError::MissingData {
            finger: Finger::Ring,
        })?;

    let ratio_2d4d = digit_ratio(index.height, ring.height);
    let tendency = tendency_for(ratio_2d4d, thresholds);

    let shape_avg = (index.aspect_ratio() + ring.aspect_ratio()) / 2.0;
    let shape = shape_for(shape_avg, thresholds);

    let code = persona_code(tendency, shape);
    debug!(
        "Stage 1: ratio={:.6} ({}), shape_avg={:.6} ({}) -> {}",
        ratio_2d4d, tendency, shape_avg, shape, code
    );

    Ok(PersonaResult {
        record: catalog::persona(code),
        ratio: format_stat(ratio_2d4d),
        ratio_2d4d,
        shape_avg,
        tendency,
        shape,
    })
}
