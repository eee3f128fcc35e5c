use serde::{Deserialize, Serialize};
use strum::EnumString;
use strum_macros::Display;
use uuid::Uuid;

/// Body of `POST /api/classify-text`.
#[derive(Serialize, Deserialize, Clone)]
pub struct ClassifyRequest {
    pub text: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Display)]
pub enum Classification {
    Cyberbullying,
    Safe,
}

/// Thematic category reported by the classification service. The wire value
/// is a free-form string; unrecognized values are tolerated and fall back at
/// presentation time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "snake_case")]
pub enum Theme {
    RacialSlurs,
    GenderSlurs,
    SuicidalIdeation,
    GeneralBullying,
    Safe,
}

/// Response body of `POST /api/classify-text`. `classification` and
/// `confidence` are mandatory; `theme` and `keywords` default to
/// absent/empty when the service omits them.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ClassificationResult {
    pub classification: Classification,
    pub confidence: f32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme: Option<String>,
    #[serde(default)]
    pub keywords: Vec<String>,
}

impl ClassificationResult {
    /// Parsed theme, or `None` when absent or unrecognized.
    pub fn known_theme(&self) -> Option<Theme> {
        self.theme.as_deref().and_then(|raw| raw.parse().ok())
    }

    pub fn is_cyberbullying(&self) -> bool {
        self.classification == Classification::Cyberbullying
    }
}

/// Body of `POST /api/feedback`. Created at most once per completed
/// analysis; the sink consumes it best-effort and returns nothing we use.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct FeedbackRecord {
    pub id: Uuid,
    pub judgment: bool,
    pub result: ClassificationResult,
    pub original_text: String,
}

impl FeedbackRecord {
    pub fn new(judgment: bool, result: ClassificationResult, original_text: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            judgment,
            result,
            original_text,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn result_decodes_without_optional_fields() {
        let result: ClassificationResult =
            serde_json::from_str(r#"{"classification":"Safe","confidence":0.97}"#).unwrap();
        assert_eq!(result.classification, Classification::Safe);
        assert_eq!(result.theme, None);
        assert!(result.keywords.is_empty());
    }

    #[test]
    fn result_decodes_full_body() {
        let body = r#"{
            "classification": "Cyberbullying",
            "confidence": 0.91,
            "theme": "general_bullying",
            "keywords": ["worthless", "loser"]
        }"#;
        let result: ClassificationResult = serde_json::from_str(body).unwrap();
        assert!(result.is_cyberbullying());
        assert_eq!(result.known_theme(), Some(Theme::GeneralBullying));
        assert_eq!(result.keywords, vec!["worthless", "loser"]);
    }

    #[test]
    fn mandatory_fields_are_enforced() {
        let missing_confidence = r#"{"classification":"Safe"}"#;
        assert!(serde_json::from_str::<ClassificationResult>(missing_confidence).is_err());
    }

    #[test]
    fn unknown_theme_is_tolerated() {
        let body = r#"{"classification":"Cyberbullying","confidence":0.5,"theme":"doxxing"}"#;
        let result: ClassificationResult = serde_json::from_str(body).unwrap();
        assert_eq!(result.known_theme(), None);
        assert_eq!(result.theme.as_deref(), Some("doxxing"));
    }

    #[test]
    fn theme_parses_snake_case_wire_values() {
        assert_eq!("suicidal_ideation".parse(), Ok(Theme::SuicidalIdeation));
        assert_eq!(Theme::RacialSlurs.to_string(), "racial_slurs");
        assert!("".parse::<Theme>().is_err());
    }
}
