//! Core data models for NBTI
//!
//! These models describe the per-finger measurements produced by the
//! nail analysis backend, in the exact shape the backend sends them.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::str::FromStr;

/// Fingers the classifier knows about
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Finger {
    Index,
    Middle,
    Ring,
    Pinky,
}

impl Finger {
    /// All fingers in collection order
    pub const ALL: [Finger; 4] = [Finger::Index, Finger::Middle, Finger::Ring, Finger::Pinky];

    /// Key used by the analysis backend
    pub fn as_str(&self) -> &'static str {
        match self {
            Finger::Index => "Index",
            Finger::Middle => "Middle",
            Finger::Ring => "Ring",
            Finger::Pinky => "Pinky",
        }
    }
}

impl std::fmt::Display for Finger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for Finger {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Finger::ALL
            .into_iter()
            .find(|f| f.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| {
                anyhow::anyhow!("Unknown finger '{}'. Valid: Index, Middle, Ring, Pinky", s)
            })
    }
}

/// Width/height (mm) and optional arc/chord curvature for one nail
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct Measurement {
    #[serde(rename = "w")]
    pub width: f64,
    #[serde(rename = "h")]
    pub height: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub curvature: Option<f64>,
}

impl Measurement {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            curvature: None,
        }
    }

    pub fn with_curvature(width: f64, height: f64, curvature: f64) -> Self {
        Self {
            width,
            height,
            curvature: Some(curvature),
        }
    }

    /// Height over width, 0 when the width is not positive
    pub fn aspect_ratio(&self) -> f64 {
        if self.width > 0.0 {
            self.height / self.width
        } else {
            0.0
        }
    }

    /// Curvature as shown next to each finger on the result screen.
    ///
    /// Falls back to the aspect ratio when the backend did not measure
    /// curvature; `None` when neither is available.
    pub fn display_curvature(&self) -> Option<f64> {
        match self.curvature {
            Some(c) => Some(c),
            None if self.width > 0.0 => Some(self.height / self.width),
            None => None,
        }
    }
}

/// Finger name to measurement, keyed exactly as received.
///
/// Unknown keys (e.g. `Thumb`) are kept so the payload round-trips,
/// but the classifiers only ever look up [`Finger`] keys.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct Measurements(BTreeMap<String, Measurement>);

impl Measurements {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert
    pub fn with(mut self, finger: Finger, measurement: Measurement) -> Self {
        self.insert(finger, measurement);
        self
    }

    pub fn insert(&mut self, finger: Finger, measurement: Measurement) {
        self.0.insert(finger.as_str().to_string(), measurement);
    }

    pub fn get(&self, finger: Finger) -> Option<&Measurement> {
        self.0.get(finger.as_str())
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Known fingers that are present, in collection order
    pub fn fingers(&self) -> impl Iterator<Item = (Finger, &Measurement)> {
        Finger::ALL
            .into_iter()
            .filter_map(move |f| self.get(f).map(|m| (f, m)))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(Finger, Measurement)> for Measurements {
    fn from_iter<I: IntoIterator<Item = (Finger, Measurement)>>(iter: I) -> Self {
        let mut out = Measurements::new();
        for (finger, m) in iter {
            out.insert(finger, m);
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_measurement_wire_keys() {
        let m: Measurement = serde_json::from_str(r#"{"w": 12.5, "h": 15.0}"#).unwrap();
        assert_eq!(m.width, 12.5);
        assert_eq!(m.height, 15.0);
        assert!(m.curvature.is_none());

        let json = serde_json::to_string(&Measurement::with_curvature(1.0, 2.0, 1.1)).unwrap();
        assert_eq!(json, r#"{"w":1.0,"h":2.0,"curvature":1.1}"#);
    }

    #[test]
    fn test_aspect_ratio_zero_width() {
        assert_eq!(Measurement::new(0.0, 15.0).aspect_ratio(), 0.0);
        assert_eq!(Measurement::new(10.0, 15.0).aspect_ratio(), 1.5);
    }

    #[test]
    fn test_display_curvature() {
        assert_eq!(Measurement::with_curvature(10.0, 12.0, 1.17).display_curvature(), Some(1.17));
        assert_eq!(Measurement::new(10.0, 12.0).display_curvature(), Some(1.2));
        assert_eq!(Measurement::new(0.0, 12.0).display_curvature(), None);
    }

    #[test]
    fn test_unknown_keys_are_kept() {
        let m: Measurements = serde_json::from_str(
            r#"{"Index": {"w": 1, "h": 2}, "Thumb": {"w": 3, "h": 4}}"#,
        )
        .unwrap();
        assert_eq!(m.len(), 2);
        assert!(m.keys().any(|k| k == "Thumb"));
        let fingers: Vec<Finger> = m.fingers().map(|(f, _)| f).collect();
        assert_eq!(fingers, vec![Finger::Index]);
    }

    #[test]
    fn test_finger_from_str() {
        assert_eq!("ring".parse::<Finger>().unwrap(), Finger::Ring);
        assert_eq!("Pinky".parse::<Finger>().unwrap(), Finger::Pinky);
        assert!("Thumb".parse::<Finger>().is_err());
    }
}
