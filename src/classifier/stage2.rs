//! Second-stage classifier: nail curvature to durability profile card

use super::stats::{format_stat, CurvatureStats};
use super::thresholds::Stage2Thresholds;
use crate::catalog::{self, ProfileCode, ProfileRecord};
use crate::models::{Finger, Measurements};
use serde::Serialize;
use tracing::debug;

/// Where the curvature sample came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CurvatureSource {
    /// Arc/chord curvature measured by the backend
    Measured,
    /// Height/width used as a stand-in
    AspectRatio,
    /// Nothing usable; the default card was returned
    Missing,
}

/// Profile card plus the computed average curvature
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProfileResult {
    #[serde(flatten)]
    pub record: &'static ProfileRecord,
    /// Mean curvature with four decimals
    #[serde(rename = "avgCurvature")]
    pub avg_curvature: String,
    #[serde(skip)]
    pub source: CurvatureSource,
    #[serde(skip)]
    pub stats: Option<CurvatureStats>,
}

impl ProfileResult {
    pub fn code(&self) -> ProfileCode {
        self.record.id
    }
}

/// Collect the curvature sample in Index, Middle, Ring, Pinky order.
///
/// Measured curvatures win. Only when no finger has a positive curvature
/// does the height/width ratio stand in.
pub fn collect_curvatures(measurements: &Measurements) -> (Vec<f64>, CurvatureSource) {
    let measured: Vec<f64> = Finger::ALL
        .iter()
        .filter_map(|f| measurements.get(*f))
        .filter_map(|m| m.curvature)
        .filter(|c| *c > 0.0)
        .collect();
    if !measured.is_empty() {
        return (measured, CurvatureSource::Measured);
    }

    let proxies: Vec<f64> = Finger::ALL
        .iter()
        .filter_map(|f| measurements.get(*f))
        .filter(|m| m.width > 0.0)
        .map(|m| m.height / m.width)
        .collect();
    if !proxies.is_empty() {
        return (proxies, CurvatureSource::AspectRatio);
    }

    (Vec::new(), CurvatureSource::Missing)
}

/// First match wins: high before low, mid otherwise
pub fn profile_code(stats: &CurvatureStats, t: &Stage2Thresholds) -> ProfileCode {
    if stats.max >= t.high_max_at_least || stats.std_dev >= t.high_std_dev_at_least {
        ProfileCode::DA
    } else if stats.mean < t.low_mean_below && stats.std_dev < t.high_std_dev_at_least {
        ProfileCode::DC
    } else {
        ProfileCode::DB
    }
}

/// Classify with the production thresholds
pub fn analyze_stage2(measurements: &Measurements) -> ProfileResult {
    analyze_stage2_with(measurements, &Stage2Thresholds::default())
}

/// Classify nail curvature into a profile card.
///
/// Never fails: without any usable data the low-curvature card is
/// returned with an average of `"0.0000"`.
pub fn analyze_stage2_with(
    measurements: &Measurements,
    thresholds: &Stage2Thresholds,
) -> ProfileResult {
    let (values, source) = collect_curvatures(measurements);

    let Some(stats) = CurvatureStats::from_values(&values) else {
        debug!("Stage 2: no usable curvature data, using default card");
        return ProfileResult {
            record: catalog::profile(ProfileCode::DC),
            avg_curvature: format_stat(0.0),
            source: CurvatureSource::Missing,
            stats: None,
        };
    };

    let code = profile_code(&stats, thresholds);
    debug!(
        "Stage 2: n={} ({:?}) mean={:.6} max={:.6} std={:.6} -> {}",
        stats.count, source, stats.mean, stats.max, stats.std_dev, code
    );

    ProfileResult {
        record: catalog::profile(code),
        avg_curvature: format_stat(stats.mean),
        source,
        stats: Some(stats),
    }
}
