//! Classifying commands: `step1`, `step2` and the combined `analyze`

use super::{InputArgs, OutputArgs, Session};
use crate::classifier::PersonaResult;
use crate::error::PayloadError;
use crate::models::Measurements;
use crate::payload::AnalysisPayload;
use crate::reporters::{self, ErrorReport, FingerReading, NbtiReport, OutputFormat};
use crate::samples::{stage1_sample, stage2_sample};
use anyhow::{bail, Context, Result};
use console::style;
use std::io::{IsTerminal, Read, Write};
use std::path::Path;
use tracing::{debug, info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    One,
    Two,
}

impl Stage {
    fn sample(self) -> Measurements {
        match self {
            Stage::One => stage1_sample(),
            Stage::Two => stage2_sample(),
        }
    }
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Stage::One => write!(f, "step 1"),
            Stage::Two => write!(f, "step 2"),
        }
    }
}

/// A result, or the error object to print in its place
type Outcome<T> = std::result::Result<T, ErrorReport>;

/// Measurements for one stage plus the backend's annotated photo
#[derive(Debug, Clone, PartialEq)]
struct StageInput {
    measurements: Measurements,
    image: Option<String>,
}

impl StageInput {
    fn sample(stage: Stage) -> Self {
        Self {
            measurements: stage.sample(),
            image: None,
        }
    }
}

/// Run `step1` or `step2`
pub fn run_step(
    session: &Session,
    stage: Stage,
    input: &InputArgs,
    output: &OutputArgs,
) -> Result<()> {
    let format = session.format(output.format.as_deref())?;
    let resolved =
        resolve_measurements(stage, input.input.as_deref(), input.sample, input.fallback)?;
    let outcome = resolved.and_then(|input| {
        let m = &input.measurements;
        let fingers = FingerReading::from_measurements(m);
        let (step1, step2) = match stage {
            Stage::One => (Some(classify_stage1(session, m)?), None),
            Stage::Two => (None, Some(session.classifier.stage2(m))),
        };
        Ok(NbtiReport::new(step1, step2, fingers, session.config.base_url())
            .with_image(input.image))
    });
    emit(session, outcome, format, output.output.as_deref())
}

/// Run `analyze`: both stages in one report
pub fn run_combined(
    session: &Session,
    step1: Option<&Path>,
    step2: Option<&Path>,
    sample: bool,
    fallback: bool,
    output: &OutputArgs,
) -> Result<()> {
    if !sample && step1.is_none() && step2.is_none() {
        bail!("Nothing to analyze. Pass --step1 and/or --step2, or --sample");
    }
    if step1.is_some_and(is_stdin) && step2.is_some_and(is_stdin) {
        bail!("Only one of --step1 and --step2 can read stdin");
    }
    let format = session.format(output.format.as_deref())?;
    let outcome = combined_report(session, step1, step2, sample, fallback)?;
    emit(session, outcome, format, output.output.as_deref())
}

fn combined_report(
    session: &Session,
    step1: Option<&Path>,
    step2: Option<&Path>,
    sample: bool,
    fallback: bool,
) -> Result<Outcome<NbtiReport>> {
    let m1 = match load_optional(Stage::One, step1, sample, fallback)? {
        Ok(m) => m,
        Err(e) => return Ok(Err(e)),
    };
    let m2 = match load_optional(Stage::Two, step2, sample, fallback)? {
        Ok(m) => m,
        Err(e) => return Ok(Err(e)),
    };

    let persona = match m1
        .as_ref()
        .map(|input| classify_stage1(session, &input.measurements))
        .transpose()
    {
        Ok(p) => p,
        Err(e) => return Ok(Err(e)),
    };
    let profile = m2
        .as_ref()
        .map(|input| session.classifier.stage2(&input.measurements));

    // The curvature screen shows the stage 2 hand when there is one
    let shown = m2.or(m1);
    let fingers = shown
        .as_ref()
        .map(|input| FingerReading::from_measurements(&input.measurements))
        .unwrap_or_default();
    let image = shown.and_then(|input| input.image);

    Ok(Ok(NbtiReport::new(persona, profile, fingers, session.config.base_url())
        .with_image(image)))
}

/// Measurements for a stage that may be left out of a combined run
fn load_optional(
    stage: Stage,
    path: Option<&Path>,
    sample: bool,
    fallback: bool,
) -> Result<Outcome<Option<StageInput>>> {
    if sample {
        return Ok(Ok(Some(StageInput::sample(stage))));
    }
    Ok(path
        .map(|p| resolve_measurements(stage, Some(p), false, fallback))
        .transpose()?
        .transpose())
}

/// Read the payload for a stage, or substitute the sample data.
///
/// I/O problems are errors. A payload that is unusable (bad JSON, an
/// error status, no measurements) becomes an error object, or the sample
/// measurements when `fallback` is set.
fn resolve_measurements(
    stage: Stage,
    input: Option<&Path>,
    sample: bool,
    fallback: bool,
) -> Result<Outcome<StageInput>> {
    if sample {
        info!("Using sample measurements for {}", stage);
        return Ok(Ok(StageInput::sample(stage)));
    }

    let text = read_input(input)?;
    let parsed = AnalysisPayload::from_json(&text).and_then(|p| {
        Ok(StageInput {
            measurements: p.measurements()?.clone(),
            image: p.processed_image().map(str::to_string),
        })
    });

    match parsed {
        Ok(input) => {
            debug!("{}: {} measurement(s)", stage, input.measurements.len());
            Ok(Ok(input))
        }
        Err(e) if fallback => {
            warn!("{}: {}; falling back to sample measurements", stage, e);
            Ok(Ok(StageInput::sample(stage)))
        }
        Err(e) => Ok(Err(payload_error_report(&e))),
    }
}

fn classify_stage1(session: &Session, m: &Measurements) -> Outcome<PersonaResult> {
    session
        .classifier
        .stage1(m)
        .map_err(|e| ErrorReport::new(e.code(), e.to_string()))
}

/// Upstream errors keep the backend's own message
fn payload_error_report(e: &PayloadError) -> ErrorReport {
    match e {
        PayloadError::Upstream { code, message } => {
            ErrorReport::new(code.clone(), message.clone())
        }
        other => ErrorReport::new(other.code(), other.to_string()),
    }
}

fn is_stdin(path: &Path) -> bool {
    path == Path::new("-")
}

fn read_input(input: Option<&Path>) -> Result<String> {
    match input {
        Some(path) if !is_stdin(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        _ => {
            let stdin = std::io::stdin();
            if stdin.is_terminal() {
                bail!("No input. Pass a payload file, pipe one on stdin, or use --sample");
            }
            let mut text = String::new();
            stdin
                .lock()
                .read_to_string(&mut text)
                .context("Failed to read stdin")?;
            Ok(text)
        }
    }
}

/// Print the report, or print the error object and exit non-zero
fn emit(
    session: &Session,
    outcome: Outcome<NbtiReport>,
    format: OutputFormat,
    output: Option<&Path>,
) -> Result<()> {
    match outcome {
        Ok(report) => {
            let rendered =
                reporters::report_with_format(&report, format, session.render_options(output))?;
            write_output(&rendered, output)
        }
        Err(error) => {
            debug!("Classification failed: {} {}", error.error_code, error.message);
            let rendered =
                reporters::error_with_format(&error, format, session.render_options(None))?;
            write_output(&rendered, None)?;
            std::process::exit(1);
        }
    }
}

fn write_output(rendered: &str, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => {
            std::fs::write(path, rendered)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            eprintln!(
                "{}Report written to: {}",
                style("📄 ").bold(),
                style(path.display()).cyan()
            );
        }
        None => {
            let mut out = std::io::stdout().lock();
            out.write_all(rendered.as_bytes())?;
            if !rendered.ends_with('\n') {
                writeln!(out)?;
            }
            out.flush()?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{PersonaCode, ProfileCode};
    use crate::classifier::Classifier;
    use crate::config::NbtiConfig;
    use crate::error::ErrorCode;

    fn session() -> Session {
        Session {
            config: NbtiConfig::default(),
            classifier: Classifier::default(),
            no_color: true,
        }
    }

    fn write(dir: &tempfile::TempDir, name: &str, content: &str) -> std::path::PathBuf {
        let path = dir.path().join(name);
        std::fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_resolve_reads_payload_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(
            &dir,
            "p.json",
            r#"{"status": "success", "measurements": {
                "Index": {"w": 10, "h": 12}, "Ring": {"w": 10, "h": 11}
            }}"#,
        );
        let input = resolve_measurements(Stage::One, Some(&path), false, false)
            .unwrap()
            .unwrap();
        assert_eq!(input.measurements.len(), 2);
        assert!(input.image.is_none());
    }

    #[test]
    fn test_resolve_keeps_annotated_photo() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(
            &dir,
            "p.json",
            r#"{
                "status": "success",
                "vis_image": "",
                "processed_image": "data:image/jpeg;base64,QQ==",
                "measurements": {"Index": {"w": 10, "h": 12}, "Ring": {"w": 10, "h": 11}}
            }"#,
        );
        let input = resolve_measurements(Stage::One, Some(&path), false, false)
            .unwrap()
            .unwrap();
        assert_eq!(input.image.as_deref(), Some("data:image/jpeg;base64,QQ=="));
    }

    #[test]
    fn test_resolve_error_payload() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(
            &dir,
            "p.json",
            r#"{"status": "error", "error_code": "NO_CARD", "message": "card not found"}"#,
        );
        let err = resolve_measurements(Stage::Two, Some(&path), false, false)
            .unwrap()
            .unwrap_err();
        assert_eq!(err.error_code, ErrorCode::NoCard);
        assert_eq!(err.message, "card not found");

        let input = resolve_measurements(Stage::Two, Some(&path), false, true)
            .unwrap()
            .unwrap();
        assert_eq!(input.measurements, stage2_sample());
        assert!(input.image.is_none());
    }

    #[test]
    fn test_resolve_invalid_json_is_server_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(&dir, "p.json", "<html>502 Bad Gateway</html>");
        let err = resolve_measurements(Stage::One, Some(&path), false, false)
            .unwrap()
            .unwrap_err();
        assert_eq!(err.error_code, ErrorCode::AiServerError);
    }

    #[test]
    fn test_resolve_unrecognized_code_keeps_message() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(
            &dir,
            "p.json",
            r#"{"status": "error", "error_code": "IMAGE_TOO_DARK", "message": "사진이 너무 어둡습니다"}"#,
        );
        let err = resolve_measurements(Stage::One, Some(&path), false, false)
            .unwrap()
            .unwrap_err();
        assert_eq!(err.error_code, ErrorCode::Other("IMAGE_TOO_DARK".into()));
        assert_eq!(err.message, "사진이 너무 어둡습니다");
    }

    #[test]
    fn test_resolve_missing_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.json");
        assert!(resolve_measurements(Stage::One, Some(&missing), false, true).is_err());
    }

    #[test]
    fn test_combined_sample_report() {
        let report = combined_report(&session(), None, None, true, false)
            .unwrap()
            .unwrap();
        assert_eq!(report.step1.as_ref().unwrap().code(), PersonaCode::P5);
        assert_eq!(report.step2.as_ref().unwrap().code(), ProfileCode::DA);
        assert_eq!(report.fingers.len(), 4);
        assert!(report.share.unwrap().title.contains('×'));
    }

    #[test]
    fn test_combined_missing_ring_reports_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(&dir, "p.json", r#"{"measurements": {"Index": {"w": 10, "h": 12}}}"#);
        let err = combined_report(&session(), Some(&path), None, false, false)
            .unwrap()
            .unwrap_err();
        assert_eq!(err.error_code, ErrorCode::MissingKeyNails);
    }

    #[test]
    fn test_combined_step2_only() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(
            &dir,
            "p.json",
            r#"{"measurements": {"Index": {"w": 10, "h": 10, "curvature": 1.01}}}"#,
        );
        let report = combined_report(&session(), None, Some(&path), false, false)
            .unwrap()
            .unwrap();
        assert!(report.step1.is_none());
        assert_eq!(report.step2.as_ref().unwrap().code(), ProfileCode::DC);
        assert_eq!(report.fingers.len(), 1);
    }

    #[test]
    fn test_combined_prefers_stage2_photo() {
        let dir = tempfile::tempdir().unwrap();
        let p1 = write(
            &dir,
            "p1.json",
            r#"{"vis_image": "data:one", "measurements": {
                "Index": {"w": 10, "h": 12}, "Ring": {"w": 10, "h": 12}
            }}"#,
        );
        let p2 = write(
            &dir,
            "p2.json",
            r#"{"vis_image": "data:two", "measurements": {"Index": {"w": 10, "h": 12}}}"#,
        );
        let report = combined_report(&session(), Some(&p1), Some(&p2), false, false)
            .unwrap()
            .unwrap();
        assert_eq!(report.image.as_deref(), Some("data:two"));

        let report = combined_report(&session(), Some(&p1), None, false, false)
            .unwrap()
            .unwrap();
        assert_eq!(report.image.as_deref(), Some("data:one"));
    }
}
