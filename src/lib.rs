//! NBTI - nail measurement personality classifier
//!
//! Classifies per-finger nail measurements from the analysis backend
//! into pre-authored result cards:
//!
//! - stage 1 reads the index/ring 2D:4D ratio and nail shape and picks
//!   one of six personas (`P1`..`P6`)
//! - stage 2 reads nail curvature statistics and picks one of three
//!   durability profiles (`D-A`, `D-B`, `D-C`)
//!
//! ```
//! use nbti::{analyze_stage1, Finger, Measurement, Measurements};
//!
//! let m = Measurements::new()
//!     .with(Finger::Index, Measurement::new(12.56, 15.56))
//!     .with(Finger::Ring, Measurement::new(12.56, 15.56));
//! let result = analyze_stage1(&m).unwrap();
//! assert_eq!(result.code().as_str(), "P5");
//! assert_eq!(result.ratio, "1.0000");
//! ```

pub mod catalog;
pub mod classifier;
pub mod cli;
pub mod config;
pub mod error;
pub mod models;
pub mod payload;
pub mod reporters;
pub mod samples;
pub mod share;

pub use catalog::{PersonaCode, PersonaRecord, ProfileCode, ProfileRecord};
pub use classifier::{
    analyze_stage1, analyze_stage2, Classifier, PersonaResult, ProfileResult, Thresholds,
};
pub use error::{ClassifyError, ErrorCode, PayloadError};
pub use models::{Finger, Measurement, Measurements};
pub use payload::AnalysisPayload;
