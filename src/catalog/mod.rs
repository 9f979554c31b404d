//! Result card catalogs
//!
//! Two fixed tables of pre-authored result cards:
//! - personas (`P1`..`P6`), selected by the first-stage classifier
//! - durability profiles (`D-A`, `D-B`, `D-C`), selected by the second stage
//!
//! Both tables are `static` data indexed by their code enums. Nothing here
//! is ever mutated, so records are handed out as `&'static` borrows.

mod personas;
mod profiles;

use serde::{Serialize, Serializer};
use std::str::FromStr;

pub use personas::PERSONAS;
pub use profiles::PROFILES;

/// Persona card key
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PersonaCode {
    P1,
    P2,
    P3,
    P4,
    P5,
    P6,
}

impl PersonaCode {
    pub const ALL: [PersonaCode; 6] = [
        PersonaCode::P1,
        PersonaCode::P2,
        PersonaCode::P3,
        PersonaCode::P4,
        PersonaCode::P5,
        PersonaCode::P6,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PersonaCode::P1 => "P1",
            PersonaCode::P2 => "P2",
            PersonaCode::P3 => "P3",
            PersonaCode::P4 => "P4",
            PersonaCode::P5 => "P5",
            PersonaCode::P6 => "P6",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl std::fmt::Display for PersonaCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for PersonaCode {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PersonaCode::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| anyhow::anyhow!("Unknown persona code '{}'. Valid codes: P1-P6", s))
    }
}

/// Durability profile card key
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ProfileCode {
    /// Iron, high curvature
    DA,
    /// Balance, mid curvature
    DB,
    /// Glass, low curvature
    DC,
}

impl ProfileCode {
    pub const ALL: [ProfileCode; 3] = [ProfileCode::DA, ProfileCode::DB, ProfileCode::DC];

    pub fn as_str(&self) -> &'static str {
        match self {
            ProfileCode::DA => "D-A",
            ProfileCode::DB => "D-B",
            ProfileCode::DC => "D-C",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl std::fmt::Display for ProfileCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for ProfileCode {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_uppercase().replace('_', "-");
        ProfileCode::ALL
            .into_iter()
            .find(|c| c.as_str() == normalized || c.as_str().replace('-', "") == normalized)
            .ok_or_else(|| {
                anyhow::anyhow!("Unknown profile code '{}'. Valid codes: D-A, D-B, D-C", s)
            })
    }
}

/// Emotional tendency of a persona.
///
/// On the wire this is `true`, `false` or the string `"balance"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EmotionalTendency {
    Emotional,
    Instinct,
    Balance,
}

impl Serialize for EmotionalTendency {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            EmotionalTendency::Emotional => serializer.serialize_bool(true),
            EmotionalTendency::Instinct => serializer.serialize_bool(false),
            EmotionalTendency::Balance => serializer.serialize_str("balance"),
        }
    }
}

impl std::fmt::Display for EmotionalTendency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EmotionalTendency::Emotional => write!(f, "emotional"),
            EmotionalTendency::Instinct => write!(f, "instinct"),
            EmotionalTendency::Balance => write!(f, "balance"),
        }
    }
}

/// Ordinal curvature band (상 / 중 / 하)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum CurvatureLevel {
    #[serde(rename = "상")]
    High,
    #[serde(rename = "중")]
    Mid,
    #[serde(rename = "하")]
    Low,
}

impl CurvatureLevel {
    pub fn label(&self) -> &'static str {
        match self {
            CurvatureLevel::High => "상",
            CurvatureLevel::Mid => "중",
            CurvatureLevel::Low => "하",
        }
    }
}

impl std::fmt::Display for CurvatureLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A nail product recommended alongside a result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MatchNail {
    pub name: &'static str,
    pub img: &'static str,
}

/// Persona card colors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PersonaTheme {
    pub bg: &'static str,
    pub text: &'static str,
    pub dome: &'static str,
    pub card: &'static str,
}

/// Profile card colors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ProfileTheme {
    pub bg: &'static str,
    pub text: &'static str,
    pub accent: &'static str,
    pub card: &'static str,
}

/// Percentages shown as stat bars on a profile card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ProfileStats {
    /// Mental defense
    pub hardness: u8,
    /// Resilience
    pub flexibility: u8,
    /// Energy output
    pub gloss: u8,
}

/// First-stage result card
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonaRecord {
    #[serde(serialize_with = "serialize_display")]
    pub id: PersonaCode,
    pub name: &'static str,
    pub sub_title: &'static str,
    pub tags: &'static [&'static str],
    #[serde(rename = "desc")]
    pub description: &'static str,
    pub main_img: &'static str,
    pub shape_img: &'static str,
    pub result_img: &'static str,
    pub match_nails: &'static [MatchNail],
    pub is_emotional: EmotionalTendency,
    pub is_slim: bool,
    pub colors: PersonaTheme,
}

/// Second-stage result card
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileRecord {
    #[serde(serialize_with = "serialize_display")]
    pub id: ProfileCode,
    pub type_name: &'static str,
    pub name: &'static str,
    pub sub_title: &'static str,
    pub tags: &'static [&'static str],
    #[serde(rename = "desc")]
    pub description: &'static str,
    pub solution: &'static str,
    pub curvature_level: CurvatureLevel,
    pub stats: ProfileStats,
    pub main_img: &'static str,
    pub result_img: &'static str,
    pub match_nails: &'static [MatchNail],
    pub colors: ProfileTheme,
}

fn serialize_display<T: std::fmt::Display, S: Serializer>(
    value: &T,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.collect_str(value)
}

/// Look up a persona card
pub fn persona(code: PersonaCode) -> &'static PersonaRecord {
    &PERSONAS[code.index()]
}

/// Look up a profile card
pub fn profile(code: ProfileCode) -> &'static ProfileRecord {
    &PROFILES[code.index()]
}

pub fn personas() -> &'static [PersonaRecord] {
    &PERSONAS
}

pub fn profiles() -> &'static [ProfileRecord] {
    &PROFILES
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tables_are_indexed_by_code() {
        for code in PersonaCode::ALL {
            assert_eq!(persona(code).id, code);
        }
        for code in ProfileCode::ALL {
            assert_eq!(profile(code).id, code);
        }
    }

    #[test]
    fn test_persona_flags_match_codes() {
        use EmotionalTendency::*;
        let expected = [
            (PersonaCode::P1, Emotional, true),
            (PersonaCode::P2, Emotional, false),
            (PersonaCode::P3, Instinct, true),
            (PersonaCode::P4, Instinct, false),
            (PersonaCode::P5, Balance, true),
            (PersonaCode::P6, Balance, false),
        ];
        for (code, tendency, slim) in expected {
            let p = persona(code);
            assert_eq!(p.is_emotional, tendency, "{}", code);
            assert_eq!(p.is_slim, slim, "{}", code);
        }
    }

    #[test]
    fn test_match_nails_count() {
        for p in personas() {
            assert!((1..=2).contains(&p.match_nails.len()), "{}", p.id);
        }
        for p in profiles() {
            assert!((1..=2).contains(&p.match_nails.len()), "{}", p.id);
        }
    }

    #[test]
    fn test_profile_levels() {
        assert_eq!(profile(ProfileCode::DA).curvature_level, CurvatureLevel::High);
        assert_eq!(profile(ProfileCode::DB).curvature_level, CurvatureLevel::Mid);
        assert_eq!(profile(ProfileCode::DC).curvature_level, CurvatureLevel::Low);
    }

    #[test]
    fn test_code_parsing() {
        assert_eq!("p3".parse::<PersonaCode>().unwrap(), PersonaCode::P3);
        assert!("P7".parse::<PersonaCode>().is_err());
        assert_eq!("D-A".parse::<ProfileCode>().unwrap(), ProfileCode::DA);
        assert_eq!("d_b".parse::<ProfileCode>().unwrap(), ProfileCode::DB);
        assert_eq!("dc".parse::<ProfileCode>().unwrap(), ProfileCode::DC);
        assert!("D-D".parse::<ProfileCode>().is_err());
    }

    #[test]
    fn test_emotional_tendency_wire_format() {
        assert_eq!(serde_json::to_string(&EmotionalTendency::Emotional).unwrap(), "true");
        assert_eq!(serde_json::to_string(&EmotionalTendency::Instinct).unwrap(), "false");
        assert_eq!(serde_json::to_string(&EmotionalTendency::Balance).unwrap(), "\"balance\"");
    }

    #[test]
    fn test_record_serialization_uses_camel_case() {
        let v = serde_json::to_value(profile(ProfileCode::DA)).unwrap();
        assert_eq!(v["id"], "D-A");
        assert_eq!(v["typeName"], "IRON");
        assert_eq!(v["curvatureLevel"], "상");
        assert_eq!(v["stats"]["hardness"], 95);
        assert!(v["desc"].is_string());

        let v = serde_json::to_value(persona(PersonaCode::P5)).unwrap();
        assert_eq!(v["id"], "P5");
        assert_eq!(v["isEmotional"], "balance");
        assert_eq!(v["isSlim"], true);
        assert_eq!(v["subTitle"], "외유내강의 정석");
        assert_eq!(v["matchNails"][0]["name"], "스노우치크");
    }
}
