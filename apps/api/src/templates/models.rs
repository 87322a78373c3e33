use serde::{Deserialize, Serialize};

/// A named visual palette selectable for a generated site.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Template {
    pub id: String,
    pub name: String,
    pub category: String,
    #[serde(default)]
    pub description: String,
    pub colors: TemplateColors,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub preview_image: String,
}

/// The five color roles injected into the generated document's CSS variables.
/// Values are substituted verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateColors {
    pub primary: String,
    pub secondary: String,
    pub accent: String,
    pub background: String,
    pub text: String,
}

impl TemplateColors {
    /// `(role, value)` pairs in declaration order.
    pub fn roles(&self) -> [(&'static str, &str); 5] {
        [
            ("primary", self.primary.as_str()),
            ("secondary", self.secondary.as_str()),
            ("accent", self.accent.as_str()),
            ("background", self.background.as_str()),
            ("text", self.text.as_str()),
        ]
    }
}

impl Template {
    /// Checks every color is `#RGB` or `#RRGGBB`.
    ///
    /// Returns one message per offending role. The generator itself never
    /// calls this; the catalog checks its palettes once at startup.
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let problems: Vec<String> = self
            .colors
            .roles()
            .into_iter()
            .filter(|(_, value)| !is_hex_color(value))
            .map(|(role, value)| format!("colors.{role} must be a hex color, got '{value}'"))
            .collect();

        if problems.is_empty() {
            Ok(())
        } else {
            Err(problems)
        }
    }
}

fn is_hex_color(value: &str) -> bool {
    match value.strip_prefix('#') {
        Some(digits) => {
            matches!(digits.len(), 3 | 6) && digits.chars().all(|c| c.is_ascii_hexdigit())
        }
        None => false,
    }
}
