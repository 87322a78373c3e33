use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Fallback template id for records whose settings omit one.
pub const DEFAULT_TEMPLATE_ID: &str = "template-1";

// ────────────────────────────────────────────────────────────────────────────
// Portfolio record
// ────────────────────────────────────────────────────────────────────────────

/// One person's portfolio as produced by the editor.
///
/// Only `personal_info`, the four section lists and `social_links` feed the
/// site generator. The identity/lifecycle fields are owned by the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioRecord {
    #[serde(default)]
    pub id: Option<String>,
    /// Display title used by the editor's dashboard, never rendered.
    #[serde(default, deserialize_with = "empty_as_none")]
    pub title: Option<String>,
    pub personal_info: PersonalInfo,
    #[serde(default)]
    pub education: Vec<EducationEntry>,
    #[serde(default)]
    pub experience: Vec<ExperienceEntry>,
    #[serde(default)]
    pub skills: Vec<SkillEntry>,
    #[serde(default)]
    pub projects: Vec<ProjectEntry>,
    #[serde(default)]
    pub social_links: SocialLinks,
    #[serde(default)]
    pub settings: PortfolioSettings,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub user_id: Option<String>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub user_email: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalInfo {
    pub first_name: String,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub last_name: Option<String>,
    pub email: String,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub phone: Option<String>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub location: Option<String>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub summary: Option<String>,
    /// Embedded image, usually a `data:` URL.
    #[serde(default, deserialize_with = "empty_as_none")]
    pub photo: Option<String>,
}

impl PersonalInfo {
    /// `first + ' ' + last`, trimmed so a missing last name leaves no trailing space.
    pub fn full_name(&self) -> String {
        format!(
            "{} {}",
            self.first_name,
            self.last_name.as_deref().unwrap_or_default()
        )
        .trim()
        .to_string()
    }

    /// First character of the first name, or `P` when the first name is empty.
    pub fn initial(&self) -> char {
        self.first_name.chars().next().unwrap_or('P')
    }

    pub fn email(&self) -> Option<&str> {
        Some(self.email.as_str()).filter(|e| !e.is_empty())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EducationEntry {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub degree: String,
    #[serde(default)]
    pub institution: String,
    #[serde(default)]
    pub year: String,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExperienceEntry {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub position: String,
    #[serde(default)]
    pub company: String,
    /// Raw editor value: `YYYY-MM`, `YYYY-MM-DD` or an RFC 3339 timestamp.
    #[serde(default, deserialize_with = "empty_as_none")]
    pub start_date: Option<String>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub end_date: Option<String>,
    /// Ongoing role. When set, `end_date` is ignored.
    #[serde(default)]
    pub current: bool,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillEntry {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub level: SkillLevel,
    #[serde(default)]
    pub category: String,
}

/// Self-assessed proficiency. Unknown labels are kept verbatim in `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SkillLevel {
    Beginner,
    #[default]
    Intermediate,
    Advanced,
    Expert,
    Other(String),
}

impl SkillLevel {
    /// Width of the rendered skill bar. `Other` fills like `Intermediate`.
    pub fn fill_percent(&self) -> u8 {
        match self {
            SkillLevel::Beginner => 25,
            SkillLevel::Intermediate => 50,
            SkillLevel::Advanced => 75,
            SkillLevel::Expert => 100,
            SkillLevel::Other(_) => 50,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            SkillLevel::Beginner => "Beginner",
            SkillLevel::Intermediate => "Intermediate",
            SkillLevel::Advanced => "Advanced",
            SkillLevel::Expert => "Expert",
            SkillLevel::Other(raw) => raw,
        }
    }
}

impl From<String> for SkillLevel {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "Beginner" => SkillLevel::Beginner,
            "Intermediate" => SkillLevel::Intermediate,
            "Advanced" => SkillLevel::Advanced,
            "Expert" => SkillLevel::Expert,
            _ => SkillLevel::Other(raw),
        }
    }
}

impl From<SkillLevel> for String {
    fn from(level: SkillLevel) -> Self {
        match level {
            SkillLevel::Other(raw) => raw,
            known => known.label().to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectEntry {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub technologies: Vec<String>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub link: Option<String>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub image: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialLinks {
    #[serde(default, deserialize_with = "empty_as_none")]
    pub linkedin: Option<String>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub github: Option<String>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub twitter: Option<String>,
    /// Collected by the editor but not rendered in the contact block.
    #[serde(default, deserialize_with = "empty_as_none")]
    pub portfolio: Option<String>,
}

impl SocialLinks {
    pub fn has_rendered_links(&self) -> bool {
        self.linkedin.is_some() || self.github.is_some() || self.twitter.is_some()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioSettings {
    #[serde(default = "default_template_id")]
    pub template: String,
    #[serde(default = "default_color_scheme")]
    pub color_scheme: String,
    #[serde(default = "default_true")]
    pub enable_analytics: bool,
    #[serde(default)]
    pub password_protect: bool,
    #[serde(default)]
    pub password: String,
}

impl Default for PortfolioSettings {
    fn default() -> Self {
        Self {
            template: default_template_id(),
            color_scheme: default_color_scheme(),
            enable_analytics: true,
            password_protect: false,
            password: String::new(),
        }
    }
}

fn default_template_id() -> String {
    DEFAULT_TEMPLATE_ID.to_string()
}

fn default_color_scheme() -> String {
    "blue".to_string()
}

fn default_true() -> bool {
    true
}

/// Treats `""` and `null` the same as a missing key.
fn empty_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.is_empty()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn minimal_json() -> serde_json::Value {
        json!({
            "personalInfo": { "firstName": "Ada", "email": "ada@example.com" }
        })
    }

    #[test]
    fn test_minimal_record_fills_defaults() {
        let record: PortfolioRecord = serde_json::from_value(minimal_json()).unwrap();
        assert_eq!(record.personal_info.first_name, "Ada");
        assert!(record.personal_info.last_name.is_none());
        assert!(record.education.is_empty());
        assert!(record.projects.is_empty());
        assert_eq!(record.settings.template, "template-1");
        assert!(record.settings.enable_analytics);
        assert_eq!(record.social_links, SocialLinks::default());
    }

    #[test]
    fn test_empty_strings_deserialize_as_absent() {
        let json = json!({
            "personalInfo": {
                "firstName": "Ada",
                "lastName": "",
                "email": "ada@example.com",
                "phone": "",
                "summary": null,
                "photo": null
            },
            "socialLinks": { "linkedin": "", "github": "https://github.com/ada", "twitter": "", "portfolio": "" }
        });
        let record: PortfolioRecord = serde_json::from_value(json).unwrap();
        assert!(record.personal_info.last_name.is_none());
        assert!(record.personal_info.phone.is_none());
        assert!(record.personal_info.summary.is_none());
        assert!(record.social_links.linkedin.is_none());
        assert_eq!(
            record.social_links.github.as_deref(),
            Some("https://github.com/ada")
        );
        assert!(record.social_links.has_rendered_links());
    }

    #[test]
    fn test_non_string_first_name_is_rejected() {
        let json = json!({ "personalInfo": { "firstName": 42, "email": "a@b.co" } });
        let err = serde_json::from_value::<PortfolioRecord>(json).unwrap_err();
        assert!(
            err.to_string().contains("invalid type"),
            "unexpected error: {err}"
        );
    }

    #[test]
    fn test_missing_email_is_rejected() {
        let json = json!({ "personalInfo": { "firstName": "Ada" } });
        let err = serde_json::from_value::<PortfolioRecord>(json).unwrap_err();
        assert!(err.to_string().contains("email"), "unexpected error: {err}");
    }

    #[test]
    fn test_skill_level_parses_known_and_keeps_unknown() {
        let skills: Vec<SkillEntry> = serde_json::from_value(json!([
            { "name": "Rust", "level": "Expert", "category": "Technical" },
            { "name": "Go", "level": "Guru", "category": "Technical" }
        ]))
        .unwrap();
        assert_eq!(skills[0].level, SkillLevel::Expert);
        assert_eq!(skills[1].level, SkillLevel::Other("Guru".to_string()));
        assert_eq!(skills[1].level.label(), "Guru");

        let back = serde_json::to_value(&skills[1]).unwrap();
        assert_eq!(back["level"], "Guru");
    }

    #[test]
    fn test_skill_level_fill_table() {
        assert_eq!(SkillLevel::Beginner.fill_percent(), 25);
        assert_eq!(SkillLevel::Intermediate.fill_percent(), 50);
        assert_eq!(SkillLevel::Advanced.fill_percent(), 75);
        assert_eq!(SkillLevel::Expert.fill_percent(), 100);
        assert_eq!(SkillLevel::Other("expert".into()).fill_percent(), 50);
    }

    #[test]
    fn test_full_name_and_initial() {
        let mut info: PersonalInfo = serde_json::from_value(json!({
            "firstName": "Ada", "lastName": "Lovelace", "email": ""
        }))
        .unwrap();
        assert_eq!(info.full_name(), "Ada Lovelace");
        assert_eq!(info.initial(), 'A');
        assert!(info.email().is_none());

        info.last_name = None;
        assert_eq!(info.full_name(), "Ada");

        info.first_name = String::new();
        assert_eq!(info.initial(), 'P');
    }
}
