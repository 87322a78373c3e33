//! Template Catalog: the static list of palettes offered to the editor.
//!
//! The catalog is read-only after startup and shared through `AppState`.
//! Lookups by unknown id fall back to the configured default template.

use anyhow::{bail, Result};

use crate::templates::models::{Template, TemplateColors};

/// Category filter value meaning "no filter".
pub const ALL_CATEGORIES: &str = "All";

pub const CATEGORIES: &[&str] = &[ALL_CATEGORIES, "Professional", "Creative", "Technology"];

struct BuiltinTemplate {
    id: &'static str,
    name: &'static str,
    category: &'static str,
    description: &'static str,
    // primary, secondary, accent, background, text
    colors: [&'static str; 5],
    features: [&'static str; 3],
    preview_image: &'static str,
}

const BUILTIN_TEMPLATES: &[BuiltinTemplate] = &[
    BuiltinTemplate {
        id: "template-1",
        name: "Professional Blue",
        category: "Professional",
        description: "Clean and corporate design for business professionals",
        colors: ["#2563EB", "#1E40AF", "#38BDF8", "#F8FAFC", "#1E293B"],
        features: ["Modern Layout", "Professional Typography", "Gradient Accents"],
        preview_image: "https://images.unsplash.com/photo-1552664730-d307ca884978?w=600&h=400&fit=crop",
    },
    BuiltinTemplate {
        id: "template-2",
        name: "Creative Purple",
        category: "Creative",
        description: "Modern gradient design for creative professionals",
        colors: ["#7C3AED", "#5B21B6", "#A78BFA", "#FAF5FF", "#312E81"],
        features: ["Creative Layout", "Vibrant Colors", "Modern Design"],
        preview_image: "https://images.unsplash.com/photo-1558655146-364adaf1fcc9?w=600&h=400&fit=crop",
    },
    BuiltinTemplate {
        id: "template-3",
        name: "Tech Minimal",
        category: "Technology",
        description: "Minimalist design for tech professionals",
        colors: ["#0F172A", "#475569", "#06B6D4", "#FFFFFF", "#0F172A"],
        features: ["Minimal Design", "Clean Typography", "Dark Mode"],
        preview_image: "https://images.unsplash.com/photo-1555099962-4199c345e5dd?w=600&h=400&fit=crop",
    },
    BuiltinTemplate {
        id: "template-4",
        name: "Green Professional",
        category: "Professional",
        description: "Eco-friendly design with green accents",
        colors: ["#16A34A", "#15803D", "#4ADE80", "#F0FDF4", "#14532D"],
        features: ["Eco Design", "Professional Layout", "Green Theme"],
        preview_image: "https://images.unsplash.com/photo-1551434678-e076c223a692?w=600&h=400&fit=crop",
    },
    BuiltinTemplate {
        id: "template-5",
        name: "Bold Gradient",
        category: "Creative",
        description: "Vibrant gradient design for bold personalities",
        colors: ["#EC4899", "#DB2777", "#F472B6", "#FDF2F8", "#831843"],
        features: ["Bold Colors", "Gradient Effects", "Creative Layout"],
        preview_image: "https://images.unsplash.com/photo-1512486130939-2c4f79935e4f?w=600&h=400&fit=crop",
    },
    BuiltinTemplate {
        id: "template-6",
        name: "Dark Tech",
        category: "Technology",
        description: "Dark mode design for developers",
        colors: ["#3B82F6", "#1E40AF", "#60A5FA", "#0F172A", "#E2E8F0"],
        features: ["Dark Theme", "Developer Focused", "Modern Design"],
        preview_image: "https://images.unsplash.com/photo-1555066931-4365d14bab8c?w=600&h=400&fit=crop",
    },
];

impl BuiltinTemplate {
    fn to_template(&self) -> Template {
        let [primary, secondary, accent, background, text] = self.colors;
        Template {
            id: self.id.to_string(),
            name: self.name.to_string(),
            category: self.category.to_string(),
            description: self.description.to_string(),
            colors: TemplateColors {
                primary: primary.to_string(),
                secondary: secondary.to_string(),
                accent: accent.to_string(),
                background: background.to_string(),
                text: text.to_string(),
            },
            features: self.features.iter().map(|f| f.to_string()).collect(),
            preview_image: self.preview_image.to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct TemplateCatalog {
    templates: Vec<Template>,
    default_index: usize,
}

impl TemplateCatalog {
    /// Builds the built-in catalog. Fails if any palette is malformed or
    /// `default_id` is not one of its templates.
    pub fn builtin(default_id: &str) -> Result<Self> {
        let templates: Vec<Template> = BUILTIN_TEMPLATES.iter().map(|t| t.to_template()).collect();
        for template in &templates {
            if let Err(errors) = template.validate() {
                bail!("Template '{}' is malformed: {}", template.id, errors.join(", "));
            }
        }
        let Some(default_index) = templates.iter().position(|t| t.id == default_id) else {
            bail!("Default template '{default_id}' is not in the catalog");
        };
        Ok(Self {
            templates,
            default_index,
        })
    }

    pub fn all(&self) -> &[Template] {
        &self.templates
    }

    pub fn find(&self, id: &str) -> Option<&Template> {
        self.templates.iter().find(|t| t.id == id)
    }

    pub fn default_template(&self) -> &Template {
        &self.templates[self.default_index]
    }

    /// Exact lookup, falling back to the default template for unknown ids.
    pub fn resolve(&self, id: &str) -> &Template {
        self.find(id).unwrap_or_else(|| {
            tracing::debug!("Unknown template '{id}', using default");
            self.default_template()
        })
    }

    /// Templates in the given category. `All` returns the whole catalog.
    pub fn by_category(&self, category: &str) -> Vec<&Template> {
        self.templates
            .iter()
            .filter(|t| category == ALL_CATEGORIES || t.category == category)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> TemplateCatalog {
        TemplateCatalog::builtin("template-1").unwrap()
    }

    #[test]
    fn test_builtin_has_six_valid_templates() {
        let catalog = catalog();
        assert_eq!(catalog.all().len(), 6);
        for template in catalog.all() {
            assert!(
                template.validate().is_ok(),
                "{} has invalid colors",
                template.id
            );
            assert_eq!(template.features.len(), 3);
        }
    }

    #[test]
    fn test_find_returns_exact_template() {
        let catalog = catalog();
        let dark = catalog.find("template-6").unwrap();
        assert_eq!(dark.name, "Dark Tech");
        assert_eq!(dark.colors.background, "#0F172A");
        assert!(catalog.find("template-99").is_none());
    }

    #[test]
    fn test_resolve_falls_back_to_default() {
        let catalog = TemplateCatalog::builtin("template-3").unwrap();
        assert_eq!(catalog.resolve("nope").id, "template-3");
        assert_eq!(catalog.resolve("template-2").id, "template-2");
    }

    #[test]
    fn test_builtin_rejects_unknown_default() {
        assert!(TemplateCatalog::builtin("template-0").is_err());
    }

    #[test]
    fn test_by_category_filters() {
        let catalog = catalog();
        assert_eq!(catalog.by_category(ALL_CATEGORIES).len(), 6);
        let creative: Vec<&str> = catalog
            .by_category("Creative")
            .iter()
            .map(|t| t.id.as_str())
            .collect();
        assert_eq!(creative, vec!["template-2", "template-5"]);
        assert!(catalog.by_category("Unknown").is_empty());
    }

    #[test]
    fn test_every_template_category_is_listed() {
        for template in catalog().all() {
            assert!(CATEGORIES.contains(&template.category.as_str()));
        }
    }
}
