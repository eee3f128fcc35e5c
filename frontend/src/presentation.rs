use shared::{ClassificationResult, Theme};

/// Display-ready facets derived from a classification result. Pure data;
/// rendering decides how to use it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DisplayFacets {
    pub theme_label: &'static str,
    pub theme_color: &'static str,
    pub confidence_percent: u8,
    pub show_crisis_banner: bool,
}

const FALLBACK_LABEL: &str = "Uncategorized";
const FALLBACK_COLOR: &str = "theme-unknown";

/// Maps a result to its display facets. Deterministic, no I/O; unknown or
/// absent themes fall back to a generic badge instead of failing.
pub fn present(result: &ClassificationResult) -> DisplayFacets {
    let theme = result.known_theme();
    let (theme_label, theme_color) = match theme {
        Some(Theme::RacialSlurs) => ("Racial Slurs", "theme-racial"),
        Some(Theme::GenderSlurs) => ("Gender-based Harassment", "theme-gender"),
        Some(Theme::SuicidalIdeation) => ("Suicidal Ideation", "theme-suicidal"),
        Some(Theme::GeneralBullying) => ("General Bullying", "theme-general"),
        Some(Theme::Safe) => ("Safe Content", "theme-safe"),
        None => (FALLBACK_LABEL, FALLBACK_COLOR),
    };

    DisplayFacets {
        theme_label,
        theme_color,
        confidence_percent: (result.confidence.clamp(0.0, 1.0) * 100.0).round() as u8,
        show_crisis_banner: theme == Some(Theme::SuicidalIdeation),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::Classification;

    fn result_with(theme: Option<&str>, confidence: f32) -> ClassificationResult {
        ClassificationResult {
            classification: Classification::Cyberbullying,
            confidence,
            theme: theme.map(str::to_string),
            keywords: Vec::new(),
        }
    }

    #[test]
    fn confidence_is_rounded_not_truncated() {
        assert_eq!(
            present(&result_with(None, 0.8734)).confidence_percent,
            87
        );
        assert_eq!(present(&result_with(None, 0.879)).confidence_percent, 88);
        assert_eq!(present(&result_with(None, 0.0)).confidence_percent, 0);
        assert_eq!(present(&result_with(None, 1.0)).confidence_percent, 100);
    }

    #[test]
    fn suicidal_ideation_raises_crisis_banner() {
        let facets = present(&result_with(Some("suicidal_ideation"), 0.9));
        assert!(facets.show_crisis_banner);
        assert_eq!(facets.theme_label, "Suicidal Ideation");
    }

    #[test]
    fn other_themes_do_not_raise_crisis_banner() {
        for theme in ["racial_slurs", "gender_slurs", "general_bullying", "safe"] {
            assert!(!present(&result_with(Some(theme), 0.9)).show_crisis_banner);
        }
    }

    #[test]
    fn unrecognized_theme_falls_back_without_failing() {
        let facets = present(&result_with(Some("doxxing"), 0.42));
        assert_eq!(facets.theme_label, FALLBACK_LABEL);
        assert_eq!(facets.theme_color, FALLBACK_COLOR);
        assert!(!facets.show_crisis_banner);
    }

    #[test]
    fn absent_theme_falls_back() {
        let facets = present(&result_with(None, 0.42));
        assert_eq!(facets.theme_label, FALLBACK_LABEL);
        assert!(!facets.show_crisis_banner);
    }

    #[test]
    fn known_theme_labels() {
        assert_eq!(
            present(&result_with(Some("racial_slurs"), 0.9)).theme_label,
            "Racial Slurs"
        );
        assert_eq!(
            present(&result_with(Some("gender_slurs"), 0.9)).theme_label,
            "Gender-based Harassment"
        );
        assert_eq!(
            present(&result_with(Some("safe"), 0.9)).theme_label,
            "Safe Content"
        );
    }
}
