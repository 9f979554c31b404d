//! Catalog command - list result cards or show one

use super::Session;
use crate::catalog::{self, PersonaCode, PersonaRecord, ProfileCode, ProfileRecord};
use crate::reporters::OutputFormat;
use anyhow::{bail, Result};
use console::style;
use serde::Serialize;

/// One card of either kind
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(untagged)]
enum Card {
    Persona(&'static PersonaRecord),
    Profile(&'static ProfileRecord),
}

/// Run the catalog command
pub fn run(session: &Session, code: Option<&str>, format: Option<&str>) -> Result<()> {
    let format = session.format(format)?;
    let color = session.render_options(None).color;
    let output = match code {
        Some(code) => render_card(lookup(code)?, format, color)?,
        None => render_list(format, color)?,
    };
    println!("{}", output.trim_end());
    Ok(())
}

fn lookup(code: &str) -> Result<Card> {
    if let Ok(c) = code.parse::<PersonaCode>() {
        return Ok(Card::Persona(catalog::persona(c)));
    }
    if let Ok(c) = code.parse::<ProfileCode>() {
        return Ok(Card::Profile(catalog::profile(c)));
    }
    bail!(
        "Unknown card '{}'. Valid codes: P1-P6, D-A, D-B, D-C",
        code
    )
}

fn all_cards() -> Vec<Card> {
    catalog::personas()
        .iter()
        .map(Card::Persona)
        .chain(catalog::profiles().iter().map(Card::Profile))
        .collect()
}

fn render_list(format: OutputFormat, color: bool) -> Result<String> {
    let cards = all_cards();
    Ok(match format {
        OutputFormat::Json => serde_json::to_string_pretty(&cards)?,
        OutputFormat::Markdown => {
            let mut md = String::from("| Code | Name | Subtitle |\n|------|------|----------|\n");
            for card in &cards {
                let (id, name, sub) = summary(card);
                md.push_str(&format!("| {} | {} | {} |\n", id, name, sub));
            }
            md
        }
        OutputFormat::Text => {
            let mut out = String::new();
            for card in &cards {
                let (id, name, sub) = summary(card);
                let id = format!("{:<4}", id);
                if color {
                    out.push_str(&format!(
                        "  {} {}  {}\n",
                        style(id).cyan(),
                        style(name).bold(),
                        style(sub).dim()
                    ));
                } else {
                    out.push_str(&format!("  {} {}  {}\n", id, name, sub));
                }
            }
            out
        }
    })
}

fn summary(card: &Card) -> (String, &'static str, &'static str) {
    match card {
        Card::Persona(p) => (p.id.to_string(), p.name, p.sub_title),
        Card::Profile(d) => (d.id.to_string(), d.name, d.sub_title),
    }
}

fn render_card(card: Card, format: OutputFormat, color: bool) -> Result<String> {
    if format == OutputFormat::Json {
        return Ok(serde_json::to_string_pretty(&card)?);
    }
    let (id, name, sub) = summary(&card);
    let (tags, description, nails) = match card {
        Card::Persona(p) => (p.tags, p.description, p.match_nails),
        Card::Profile(d) => (d.tags, d.description, d.match_nails),
    };
    let nails: Vec<&str> = nails.iter().map(|n| n.name).collect();

    let mut out = match (format, color) {
        (OutputFormat::Markdown, _) => format!(
            "## {} ({})\n\n*{}*  \n{}\n\n",
            name,
            id,
            sub,
            tags.join(" ")
        ),
        (_, true) => format!(
            "{}  {}\n  {}\n  {}\n\n",
            style(&id).cyan(),
            style(name).bold(),
            sub,
            style(tags.join(" ")).dim()
        ),
        (_, false) => format!("{}  {}\n  {}\n  {}\n\n", id, name, sub, tags.join(" ")),
    };
    let (quote, indent) = match format {
        OutputFormat::Markdown => ("> ", ""),
        _ => ("  ", "  "),
    };
    for line in description.lines().map(str::trim) {
        if line.is_empty() {
            out.push_str(quote.trim_end());
            out.push('\n');
        } else {
            out.push_str(&format!("{}{}\n", quote, line));
        }
    }
    out.push_str(&format!("\n{}Matching nails: {}\n", indent, nails.join(", ")));
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_both_kinds() {
        assert!(matches!(lookup("p2").unwrap(), Card::Persona(p) if p.id == PersonaCode::P2));
        assert!(matches!(lookup("D-C").unwrap(), Card::Profile(d) if d.id == ProfileCode::DC));
        assert!(lookup("X9").is_err());
    }

    #[test]
    fn test_list_has_all_cards() {
        let text = render_list(OutputFormat::Text, false).unwrap();
        assert_eq!(text.lines().count(), 9);
        assert!(text.contains("D-B"));

        let json: serde_json::Value =
            serde_json::from_str(&render_list(OutputFormat::Json, false).unwrap()).unwrap();
        assert_eq!(json.as_array().unwrap().len(), 9);
        assert_eq!(json[6]["id"], "D-A");
    }

    #[test]
    fn test_card_json_matches_record() {
        let out = render_card(lookup("P1").unwrap(), OutputFormat::Json, false).unwrap();
        let json: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(json["id"], "P1");
        assert_eq!(json["isEmotional"], true);
    }

    #[test]
    fn test_card_markdown() {
        let out = render_card(lookup("D-A").unwrap(), OutputFormat::Markdown, false).unwrap();
        assert!(out.starts_with("## 뚝심있는 승부사 (D-A)"));
        assert!(out.contains("Matching nails:"));
    }
}
