//! Text (terminal) reporter with colors and formatting

use super::{ErrorReport, FingerReading, NbtiReport, RenderOptions};
use crate::catalog::ProfileStats;
use crate::classifier::{PersonaResult, ProfileResult};
use anyhow::Result;

/// ANSI styles, blank when color is off
struct Palette {
    reset: &'static str,
    bold: &'static str,
    dim: &'static str,
    accent: &'static str,
    red: &'static str,
}

impl Palette {
    fn new(color: bool) -> Self {
        if color {
            Self {
                reset: "\x1b[0m",
                bold: "\x1b[1m",
                dim: "\x1b[2m",
                accent: "\x1b[35m", // Magenta
                red: "\x1b[31m",
            }
        } else {
            Self {
                reset: "",
                bold: "",
                dim: "",
                accent: "",
                red: "",
            }
        }
    }
}

const RULE: &str = "──────────────────────────────────────";
const BAR_WIDTH: usize = 20;

/// Render report as formatted terminal output
pub fn render(report: &NbtiReport, options: RenderOptions) -> Result<String> {
    let c = Palette::new(options.color);
    let mut out = String::new();

    out.push_str(&format!("\n{}NBTI Result{}\n", c.bold, c.reset));
    out.push_str(&format!("{}{RULE}{}\n", c.dim, c.reset));

    if let Some(p) = &report.step1 {
        render_persona(&mut out, p, &c);
    }
    if let Some(d) = &report.step2 {
        render_profile(&mut out, d, &c);
    }
    if !report.fingers.is_empty() {
        render_fingers(&mut out, &report.fingers, &c);
    }
    if let Some(share) = &report.share {
        out.push_str(&format!("{}SHARE{}\n", c.bold, c.reset));
        out.push_str(&format!("  {}\n", share.title));
        out.push_str(&format!("  {}{}{}\n\n", c.dim, share.image_url, c.reset));
    }

    Ok(out)
}

fn render_persona(out: &mut String, p: &PersonaResult, c: &Palette) {
    let r = p.record;
    out.push_str(&format!(
        "{}STEP 1{}  {}{}{}  {}{}{}\n",
        c.bold, c.reset, c.dim, r.id, c.reset, c.accent, r.name, c.reset
    ));
    out.push_str(&format!("  {}\n", r.sub_title));
    out.push_str(&format!("  {}{}{}\n", c.dim, r.tags.join(" "), c.reset));
    out.push_str(&format!(
        "  2D:4D ratio {}  ({}, {})\n\n",
        p.ratio, p.tendency, p.shape
    ));
    push_paragraphs(out, r.description);
    let names: Vec<&str> = r.match_nails.iter().map(|n| n.name).collect();
    out.push_str(&format!("  Matching nails: {}\n\n", names.join(", ")));
}

fn render_profile(out: &mut String, d: &ProfileResult, c: &Palette) {
    let r = d.record;
    out.push_str(&format!(
        "{}STEP 2{}  {}{}{}  {}{} ({}){}  {}\n",
        c.bold,
        c.reset,
        c.dim,
        r.id,
        c.reset,
        c.accent,
        r.name,
        r.curvature_level,
        c.reset,
        r.type_name
    ));
    out.push_str(&format!("  {}\n", r.sub_title));
    out.push_str(&format!("  {}{}{}\n", c.dim, r.tags.join(" "), c.reset));
    out.push_str(&format!("  Average curvature {}\n\n", d.avg_curvature));
    render_stats(out, &r.stats);
    out.push('\n');
    push_paragraphs(out, r.description);
    out.push_str(&format!("  {}Solution{}\n", c.bold, c.reset));
    push_paragraphs(out, r.solution);
    let names: Vec<&str> = r.match_nails.iter().map(|n| n.name).collect();
    out.push_str(&format!("  Matching nails: {}\n\n", names.join(", ")));
}

fn render_stats(out: &mut String, stats: &ProfileStats) {
    for (label, value) in [
        ("Mental defense", stats.hardness),
        ("Resilience", stats.flexibility),
        ("Energy", stats.gloss),
    ] {
        out.push_str(&format!("  {:<15} {} {:>3}%\n", label, stat_bar(value), value));
    }
}

fn render_fingers(out: &mut String, fingers: &[FingerReading], c: &Palette) {
    out.push_str(&format!("{}FINGERS{}\n", c.bold, c.reset));
    for f in fingers {
        out.push_str(&format!("  {:<7} W: {:>6.2}  H: {:>6.2}", f.finger, f.w, f.h));
        if let Some(curv) = &f.curvature {
            out.push_str(&format!("  curvature: {}", curv));
        }
        out.push('\n');
    }
    out.push('\n');
}

/// Filled/empty bar for a percentage
fn stat_bar(percent: u8) -> String {
    let filled = (usize::from(percent.min(100)) * BAR_WIDTH + 50) / 100;
    format!("{}{}", "█".repeat(filled), "░".repeat(BAR_WIDTH - filled))
}

fn push_paragraphs(out: &mut String, text: &str) {
    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() {
            out.push('\n');
        } else {
            out.push_str(&format!("  {}\n", line));
        }
    }
    out.push('\n');
}

pub fn render_error(error: &ErrorReport, options: RenderOptions) -> String {
    let c = Palette::new(options.color);
    format!(
        "{}✗ {}{}: {}\n  {}{}{}\n",
        c.red,
        error.error_code,
        c.reset,
        error.message,
        c.dim,
        error.error_code.user_message(),
        c.reset
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use crate::reporters::tests::test_report;

    #[test]
    fn test_text_contains_both_stages() {
        let out = render(&test_report(), RenderOptions { color: false }).unwrap();
        assert!(out.contains("STEP 1  P5  고귀한 성직자"));
        assert!(out.contains("2D:4D ratio 1.0000  (balance, slim)"));
        assert!(out.contains("STEP 2  D-A  뚝심있는 승부사 (상)  IRON"));
        assert!(out.contains("Average curvature 1.1795"));
        assert!(out.contains("curvature: 1.1970"));
        assert!(!out.contains("\x1b["));
    }

    #[test]
    fn test_text_color() {
        let out = render(&test_report(), RenderOptions { color: true }).unwrap();
        assert!(out.contains("\x1b[1m"));
    }

    #[test]
    fn test_stat_bar() {
        assert_eq!(stat_bar(0).chars().filter(|c| *c == '█').count(), 0);
        assert_eq!(stat_bar(100).chars().filter(|c| *c == '█').count(), BAR_WIDTH);
        assert_eq!(stat_bar(95).chars().filter(|c| *c == '█').count(), 19);
        assert_eq!(stat_bar(30).chars().count(), BAR_WIDTH);
    }

    #[test]
    fn test_render_error() {
        let err = ErrorReport::new(ErrorCode::NoCard, "card not found");
        let out = render_error(&err, RenderOptions { color: false });
        assert!(out.starts_with("✗ NO_CARD: card not found"));
    }
}
