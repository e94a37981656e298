// Dark palette shared by the dashboard widgets
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThemePalette {
    pub page_background: String,
    pub panel_background: String,
    pub panel_border: String,
    pub text_primary: String,
    pub text_muted: String,
    pub accent: String,
    pub positive: String,
    pub negative: String,
}

impl ThemePalette {
    pub fn default_dark() -> Self {
        Self {
            page_background: "#111827".to_string(),
            panel_background: "#1f2937".to_string(),
            panel_border: "#374151".to_string(),
            text_primary: "#ffffff".to_string(),
            text_muted: "#9ca3af".to_string(),
            accent: "#22d3ee".to_string(),
            positive: "#10b981".to_string(),
            negative: "#ef4444".to_string(),
        }
    }

    /// Inline stylesheet injected once at the root of the app.
    pub fn stylesheet(&self) -> String {
        format!(
            "body {{ margin: 0; background: {bg}; color: #e5e7eb; font-family: sans-serif; }}\n\
             .panel {{ background: {panel}; border-radius: 8px; padding: 20px; margin-top: 24px; }}\n\
             .muted {{ color: {muted}; }}\n\
             .accent {{ color: {accent}; }}\n\
             .up {{ color: {pos}; }}\n\
             .down {{ color: {neg}; }}\n\
             button:disabled {{ opacity: 0.5; cursor: not-allowed; }}\n\
             table {{ width: 100%; border-collapse: collapse; font-size: 14px; }}\n\
             th, td {{ text-align: left; padding: 10px 16px; border-bottom: 1px solid {border}; }}",
            bg = self.page_background,
            panel = self.panel_background,
            muted = self.text_muted,
            accent = self.accent,
            pos = self.positive,
            neg = self.negative,
            border = self.panel_border,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stylesheet_uses_palette_colors() {
        let palette = ThemePalette::default_dark();
        let css = palette.stylesheet();
        assert!(css.contains("#111827"));
        assert!(css.contains(".down { color: #ef4444; }"));
    }
}
