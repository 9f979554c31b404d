//! Fixed sample measurements.
//!
//! These are what the web client shows when the analysis backend is
//! unreachable, so a demo always ends on a result card.

use crate::models::{Finger, Measurement, Measurements};

/// Index and ring nails of identical size
pub fn stage1_sample() -> Measurements {
    Measurements::new()
        .with(Finger::Index, Measurement::new(12.56, 15.56))
        .with(Finger::Ring, Measurement::new(12.56, 15.56))
}

/// Four nails with measured curvature
pub fn stage2_sample() -> Measurements {
    Measurements::new()
        .with(Finger::Index, Measurement::with_curvature(13.2, 15.8, 1.197))
        .with(Finger::Middle, Measurement::with_curvature(14.1, 16.5, 1.170))
        .with(Finger::Ring, Measurement::with_curvature(12.8, 15.1, 1.180))
        .with(Finger::Pinky, Measurement::with_curvature(10.5, 12.3, 1.171))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{PersonaCode, ProfileCode};
    use crate::classifier::{analyze_stage1, analyze_stage2};

    #[test]
    fn test_stage1_sample_result() {
        let r = analyze_stage1(&stage1_sample()).unwrap();
        assert_eq!(r.code(), PersonaCode::P5);
        assert_eq!(r.ratio, "1.0000");
    }

    #[test]
    fn test_stage2_sample_result() {
        let r = analyze_stage2(&stage2_sample());
        assert_eq!(r.code(), ProfileCode::DA);
        assert_eq!(r.avg_curvature, "1.1795");
    }
}
