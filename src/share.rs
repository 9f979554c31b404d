//! Share card content for result pages.
//!
//! Only builds the text and links; posting to a social network is the
//! front end's job.

use crate::classifier::{PersonaResult, ProfileResult};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShareCard {
    pub title: String,
    pub description: String,
    pub image_url: String,
    /// Suggested file name when the card image is downloaded
    pub file_name: String,
}

/// Join a site-relative image path onto `base_url`, if one is configured
pub fn absolute_url(base_url: Option<&str>, path: &str) -> String {
    match base_url {
        Some(base) if !path.starts_with("http://") && !path.starts_with("https://") => {
            format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'))
        }
        _ => path.to_string(),
    }
}

/// Share card for a persona result
pub fn persona_card(result: &PersonaResult, base_url: Option<&str>) -> ShareCard {
    let record = result.record;
    ShareCard {
        title: format!("[N(네일)BTI] {} ({})", record.name, record.sub_title),
        description: record.sub_title.to_string(),
        image_url: absolute_url(base_url, record.result_img),
        file_name: format!("NBTI_{}.png", record.name),
    }
}

/// Share card for a profile result, naming the persona too when known
pub fn profile_card(
    persona: Option<&PersonaResult>,
    profile: &ProfileResult,
    base_url: Option<&str>,
) -> ShareCard {
    let record = profile.record;
    let title = match persona {
        Some(p) => format!("[네일BTI] {} × {}", p.record.name, record.name),
        None => format!("[네일BTI] {}", record.name),
    };
    ShareCard {
        title,
        description: record.sub_title.to_string(),
        image_url: absolute_url(base_url, record.main_img),
        file_name: format!("NBTI_{}.png", record.name),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::{analyze_stage1, analyze_stage2};
    use crate::samples::{stage1_sample, stage2_sample};

    #[test]
    fn test_absolute_url() {
        assert_eq!(absolute_url(None, "/images/a.png"), "/images/a.png");
        assert_eq!(
            absolute_url(Some("https://nbti.example.com/"), "/images/a.png"),
            "https://nbti.example.com/images/a.png"
        );
        assert_eq!(
            absolute_url(Some("https://x.test"), "https://cdn.test/a.png"),
            "https://cdn.test/a.png"
        );
    }

    #[test]
    fn test_persona_card() {
        let p = analyze_stage1(&stage1_sample()).unwrap();
        let card = persona_card(&p, Some("https://nbti.example.com"));
        assert_eq!(card.title, "[N(네일)BTI] 고귀한 성직자 (외유내강의 정석)");
        assert_eq!(card.description, "외유내강의 정석");
        assert_eq!(card.image_url, "https://nbti.example.com/images/nbti/P5_result.jpg");
        assert_eq!(card.file_name, "NBTI_고귀한 성직자.png");
    }

    #[test]
    fn test_profile_card_with_and_without_persona() {
        let p = analyze_stage1(&stage1_sample()).unwrap();
        let d = analyze_stage2(&stage2_sample());

        let combined = profile_card(Some(&p), &d, None);
        assert_eq!(combined.title, "[네일BTI] 고귀한 성직자 × 뚝심있는 승부사");
        assert_eq!(combined.image_url, "/images/nbti/ironType.png");

        let alone = profile_card(None, &d, None);
        assert_eq!(alone.title, "[네일BTI] 뚝심있는 승부사");
        assert_eq!(alone.description, "흔들리지 않는 단단한 내면");
    }
}
