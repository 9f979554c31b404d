//! Markdown reporter
//!
//! Renders a result card suitable for pasting into a chat, a blog post
//! or a campaign landing page.

use super::{ErrorReport, NbtiReport};
use crate::classifier::{PersonaResult, ProfileResult};
use anyhow::Result;

/// Render report as Markdown
pub fn render(report: &NbtiReport) -> Result<String> {
    let mut md = String::from("# NBTI Result\n\n");

    if let Some(p) = &report.step1 {
        md.push_str(&render_persona(p));
    }
    if let Some(d) = &report.step2 {
        md.push_str(&render_profile(d));
    }

    if !report.fingers.is_empty() {
        md.push_str("## Measurements\n\n");
        md.push_str("| Finger | W (mm) | H (mm) | Curvature |\n");
        md.push_str("|--------|-------:|-------:|----------:|\n");
        for f in &report.fingers {
            md.push_str(&format!(
                "| {} | {:.2} | {:.2} | {} |\n",
                f.finger,
                f.w,
                f.h,
                f.curvature.as_deref().unwrap_or("-")
            ));
        }
        md.push('\n');
    }

    if let Some(share) = &report.share {
        md.push_str("## Share\n\n");
        md.push_str(&format!("**{}**\n\n", share.title));
        md.push_str(&format!("![{}]({})\n", share.description, share.image_url));
    }

    if let Some(image) = &report.image {
        md.push_str("\n## Analyzed photo\n\n");
        md.push_str(&format!("![analyzed hand]({})\n", image));
    }

    Ok(md)
}

fn render_persona(p: &PersonaResult) -> String {
    let r = p.record;
    let mut md = format!("## Step 1: {} ({})\n\n", r.name, r.id);
    md.push_str(&format!("*{}*  \n{}\n\n", r.sub_title, r.tags.join(" ")));
    md.push_str(&format!(
        "2D:4D ratio **{}** ({}, {})\n\n",
        p.ratio, p.tendency, p.shape
    ));
    md.push_str(&quote(r.description));
    md.push_str("**Matching nails**\n\n");
    for nail in r.match_nails {
        md.push_str(&format!("- {}\n", nail.name));
    }
    md.push('\n');
    md
}

fn render_profile(d: &ProfileResult) -> String {
    let r = d.record;
    let mut md = format!(
        "## Step 2: {} ({}, {} {})\n\n",
        r.name, r.id, r.type_name, r.curvature_level
    );
    md.push_str(&format!("*{}*  \n{}\n\n", r.sub_title, r.tags.join(" ")));
    md.push_str(&format!("Average curvature **{}**\n\n", d.avg_curvature));
    md.push_str("| Mental defense | Resilience | Energy |\n");
    md.push_str("|---------------:|-----------:|-------:|\n");
    md.push_str(&format!(
        "| {}% | {}% | {}% |\n\n",
        r.stats.hardness, r.stats.flexibility, r.stats.gloss
    ));
    md.push_str(&quote(r.description));
    md.push_str(&format!("**Solution**: {}\n\n", r.solution));
    md.push_str("**Matching nails**\n\n");
    for nail in r.match_nails {
        md.push_str(&format!("- {}\n", nail.name));
    }
    md.push('\n');
    md
}

fn quote(text: &str) -> String {
    let mut out = String::new();
    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() {
            out.push_str(">\n");
        } else {
            out.push_str(&format!("> {}\n", line));
        }
    }
    out.push('\n');
    out
}

pub fn render_error(error: &ErrorReport) -> String {
    format!(
        "# NBTI Result\n\n**Error `{}`**: {}\n\n{}\n",
        error.error_code,
        error.message,
        error.error_code.user_message()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reporters::tests::test_report;

    #[test]
    fn test_markdown_sections() {
        let md = render(&test_report()).unwrap();
        assert!(md.starts_with("# NBTI Result"));
        assert!(md.contains("## Step 1: 고귀한 성직자 (P5)"));
        assert!(md.contains("## Step 2: 뚝심있는 승부사 (D-A, IRON 상)"));
        assert!(md.contains("| Index | 13.20 | 15.80 | 1.1970 |"));
        assert!(md.contains("| 95% | 30% | 85% |"));
        assert!(md.contains("## Share"));
    }

    #[test]
    fn test_markdown_includes_analyzed_photo() {
        let md = render(&test_report()).unwrap();
        assert!(!md.contains("## Analyzed photo"));

        let report = test_report().with_image(Some("data:image/png;base64,AAAA".into()));
        let md = render(&report).unwrap();
        assert!(md.contains("![analyzed hand](data:image/png;base64,AAAA)"));
    }

    #[test]
    fn test_quote_blank_lines() {
        assert_eq!(quote("a\n\nb"), "> a\n>\n> b\n\n");
    }
}
