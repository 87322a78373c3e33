//! Section builders: one per block of the generated page.
//!
//! Each builder returns a [`Fragment`]: markup when its backing data is present,
//! `Omitted` otherwise. Header and footer are always rendered.

use chrono::{DateTime, NaiveDate};

use crate::portfolio::models::{
    EducationEntry, ExperienceEntry, PersonalInfo, ProjectEntry, SkillEntry, SocialLinks,
};
use crate::site::markup::{escape, escape_multiline, Fragment};
use crate::site::GenerationError;
use crate::templates::models::TemplateColors;

pub const DEFAULT_TITLE: &str = "Professional Portfolio";
pub const PRESENT_LABEL: &str = "Present";
pub const ATTRIBUTION: &str = "Portfolio created with QuickPortfolio";

// ────────────────────────────────────────────────────────────────────────────
// Icons
// ────────────────────────────────────────────────────────────────────────────

const ICON_EMAIL: &str = r#"<svg width="20" height="20" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2"><path d="M4 4h16c1.1 0 2 .9 2 2v12c0 1.1-.9 2-2 2H4c-1.1 0-2-.9-2-2V6c0-1.1.9-2 2-2z"></path><polyline points="22,6 12,13 2,6"></polyline></svg>"#;
const ICON_PHONE: &str = r#"<svg width="20" height="20" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2"><path d="M22 16.92v3a2 2 0 0 1-2.18 2 19.79 19.79 0 0 1-8.63-3.07 19.5 19.5 0 0 1-6-6 19.79 19.79 0 0 1-3.07-8.67A2 2 0 0 1 4.11 2h3a2 2 0 0 1 2 1.72 12.84 12.84 0 0 0 .7 2.81 2 2 0 0 1-.45 2.11L8.09 9.91a16 16 0 0 0 6 6l1.27-1.27a2 2 0 0 1 2.11-.45 12.84 12.84 0 0 0 2.81.7A2 2 0 0 1 22 16.92z"></path></svg>"#;
const ICON_LOCATION: &str = r#"<svg width="20" height="20" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2"><path d="M21 10c0 7-9 13-9 13s-9-6-9-13a9 9 0 0 1 18 0z"></path><circle cx="12" cy="10" r="3"></circle></svg>"#;
const ICON_LINKEDIN: &str = r#"<svg width="20" height="20" viewBox="0 0 24 24" fill="currentColor"><path d="M16 8a6 6 0 0 1 6 6v7h-4v-7a2 2 0 0 0-2-2 2 2 0 0 0-2 2v7h-4v-7a6 6 0 0 1 6-6z"></path><rect x="2" y="9" width="4" height="12"></rect><circle cx="4" cy="4" r="2"></circle></svg>"#;
const ICON_GITHUB: &str = r#"<svg width="20" height="20" viewBox="0 0 24 24" fill="currentColor"><path d="M9 19c-5 1.5-5-2.5-7-3m14 6v-3.87a3.37 3.37 0 0 0-.94-2.61c3.14-.35 6.44-1.54 6.44-7A5.44 5.44 0 0 0 20 4.77 5.07 5.07 0 0 0 19.91 1S18.73.65 16 2.48a13.38 13.38 0 0 0-7 0C6.27.65 5.09 1 5.09 1A5.07 5.07 0 0 0 5 4.77a5.44 5.44 0 0 0-1.5 3.78c0 5.42 3.3 6.61 6.44 7A3.37 3.37 0 0 0 9 18.13V22"></path></svg>"#;
const ICON_TWITTER: &str = r#"<svg width="20" height="20" viewBox="0 0 24 24" fill="currentColor"><path d="M23 3a10.9 10.9 0 0 1-3.14 1.53 4.48 4.48 0 0 0-7.86 3v1A10.66 10.66 0 0 1 3 4s-4 9 5 13a11.64 11.64 0 0 1-7 2c9 5 20 0 20-11.5a4.5 4.5 0 0 0-.08-.83A7.72 7.72 0 0 0 23 3z"></path></svg>"#;
const ICON_EXTERNAL_LINK: &str = r#"<svg viewBox="0 0 24 24" width="16" height="16" stroke="currentColor" fill="none"><path d="M18 13v6a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V8a2 2 0 0 1 2-2h6"></path><polyline points="15 3 21 3 21 9"></polyline><line x1="10" y1="14" x2="21" y2="3"></line></svg>"#;

// ────────────────────────────────────────────────────────────────────────────
// Header / contact / summary
// ────────────────────────────────────────────────────────────────────────────

/// Photo (or initial badge), full name and title. Always rendered.
pub fn header(info: &PersonalInfo) -> String {
    let full_name = escape(&info.full_name());
    let avatar = match info.photo.as_deref() {
        Some(photo) => format!(r#"<img src="{}" alt="{full_name}">"#, escape(photo)),
        None => format!("<span>{}</span>", escape(&info.initial().to_string())),
    };
    let title = escape(info.title.as_deref().unwrap_or(DEFAULT_TITLE));

    format!(
        r#"    <header class="portfolio-header">
        <div class="header-overlay"></div>
        <div class="container">
            <div class="header-content">
                <div class="profile-image">
                    {avatar}
                </div>
                <div class="profile-info">
                    <h1>{full_name}</h1>
                    <p class="title">{title}</p>
                </div>
            </div>
        </div>
    </header>
"#
    )
}

/// Email/phone/location rows and LinkedIn/GitHub/Twitter icons.
///
/// `social.portfolio` is not rendered here.
pub fn contact(info: &PersonalInfo, social: &SocialLinks) -> Fragment {
    let rows: Vec<String> = [
        (ICON_EMAIL, info.email()),
        (ICON_PHONE, info.phone.as_deref()),
        (ICON_LOCATION, info.location.as_deref()),
    ]
    .into_iter()
    .filter_map(|(icon, value)| {
        value.map(|v| {
            format!(
                r#"                <div class="contact-item">
                    {icon}
                    <span>{}</span>
                </div>
"#,
                escape(v)
            )
        })
    })
    .collect();

    let links: Vec<String> = [
        (ICON_LINKEDIN, social.linkedin.as_deref()),
        (ICON_GITHUB, social.github.as_deref()),
        (ICON_TWITTER, social.twitter.as_deref()),
    ]
    .into_iter()
    .filter_map(|(icon, href)| {
        href.map(|h| {
            format!(
                r#"                <a href="{}" class="social-link" target="_blank" rel="noopener">
                    {icon}
                </a>
"#,
                escape(h)
            )
        })
    })
    .collect();

    if rows.is_empty() && links.is_empty() {
        return Fragment::Omitted;
    }

    let items = if rows.is_empty() {
        String::new()
    } else {
        format!(
            "            <div class=\"contact-items\">\n{}            </div>\n",
            rows.concat()
        )
    };
    let socials = if links.is_empty() {
        String::new()
    } else {
        format!(
            "            <div class=\"social-links\">\n{}            </div>\n",
            links.concat()
        )
    };

    Fragment::Rendered(format!(
        "    <div class=\"contact-info\">\n        <div class=\"container\">\n{items}{socials}        </div>\n    </div>\n"
    ))
}

pub fn summary(info: &PersonalInfo) -> Fragment {
    Fragment::when(info.summary.as_deref(), |text| {
        format!(
            r#"            <section class="summary-section">
                <h2>About Me</h2>
                <div class="summary">{}</div>
            </section>
"#,
            escape_multiline(text)
        )
    })
}

// ────────────────────────────────────────────────────────────────────────────
// Experience
// ────────────────────────────────────────────────────────────────────────────

/// Timeline of roles in array order.
///
/// Fails when a populated date cannot be read as a month and year.
pub fn experience(
    entries: &[ExperienceEntry],
    colors: &TemplateColors,
) -> Result<Fragment, GenerationError> {
    if entries.is_empty() {
        return Ok(Fragment::Omitted);
    }

    let mut items = String::new();
    for (i, entry) in entries.iter().enumerate() {
        let start = match entry.start_date.as_deref() {
            Some(raw) => format_month_year(raw, &format!("experience[{i}].startDate"))?,
            None => String::new(),
        };
        let end = if entry.current {
            PRESENT_LABEL.to_string()
        } else {
            match entry.end_date.as_deref() {
                Some(raw) => format_month_year(raw, &format!("experience[{i}].endDate"))?,
                None => String::new(),
            }
        };
        let description = Fragment::when(entry.description.as_deref(), |text| {
            format!(
                "\n                        <p class=\"description\">{}</p>",
                escape_multiline(text)
            )
        });

        items.push_str(&format!(
            r#"                    <div class="timeline-item">
                        <div class="timeline-dot" style="background-color: {primary};"></div>
                        <div class="timeline-content">
                            <h3>{position}</h3>
                            <p class="company">{company}</p>
                            <p class="duration">{start} - {end}</p>{description}
                        </div>
                    </div>
"#,
            primary = colors.primary,
            position = escape(&entry.position),
            company = escape(&entry.company),
        ));
    }

    Ok(Fragment::Rendered(format!(
        r#"            <section class="experience-section">
                <h2>Experience</h2>
                <div class="timeline">
{items}                </div>
            </section>
"#
    )))
}

/// Formats an editor date as `"<Mon> <YYYY>"`, e.g. `Jan 2020`.
///
/// Accepts `YYYY-MM`, `YYYY-MM-DD` and RFC 3339 timestamps. Month and year are
/// read from the text as written, with no timezone conversion.
pub fn format_month_year(raw: &str, field: &str) -> Result<String, GenerationError> {
    let trimmed = raw.trim();
    let date = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(&format!("{trimmed}-01"), "%Y-%m-%d"))
        .or_else(|_| DateTime::parse_from_rfc3339(trimmed).map(|dt| dt.date_naive()))
        .map_err(|_| GenerationError::InvalidField {
            field: field.to_string(),
            reason: format!("'{raw}' is not a YYYY-MM, YYYY-MM-DD or RFC 3339 date"),
        })?;
    Ok(date.format("%b %Y").to_string())
}

// ────────────────────────────────────────────────────────────────────────────
// Education / skills / projects
// ────────────────────────────────────────────────────────────────────────────

pub fn education(entries: &[EducationEntry]) -> Fragment {
    if entries.is_empty() {
        return Fragment::Omitted;
    }

    let items: String = entries
        .iter()
        .map(|edu| {
            let description = Fragment::when(edu.description.as_deref(), |text| {
                format!(
                    "\n                        <p class=\"description\">{}</p>",
                    escape_multiline(text)
                )
            });
            format!(
                r#"                    <div class="education-item">
                        <h3>{}</h3>
                        <p class="institution">{}</p>
                        <p class="education-year">{}</p>{description}
                    </div>
"#,
                escape(&edu.degree),
                escape(&edu.institution),
                escape(&edu.year),
            )
        })
        .collect();

    Fragment::Rendered(format!(
        r#"            <section class="education-section">
                <h2>Education</h2>
                <div class="education-grid">
{items}                </div>
            </section>
"#
    ))
}

pub fn skills(entries: &[SkillEntry], colors: &TemplateColors) -> Fragment {
    if entries.is_empty() {
        return Fragment::Omitted;
    }

    let items: String = entries
        .iter()
        .map(|skill| {
            format!(
                r#"                    <div class="skill-item">
                        <div class="skill-header">
                            <span class="skill-name">{name}</span>
                            <span class="skill-level">{level}</span>
                        </div>
                        <div class="skill-bar">
                            <div class="skill-progress" style="width: {width}%; background-color: {primary};"></div>
                        </div>
                        <span class="skill-category">{category}</span>
                    </div>
"#,
                name = escape(&skill.name),
                level = escape(skill.level.label()),
                width = skill.level.fill_percent(),
                primary = colors.primary,
                category = escape(&skill.category),
            )
        })
        .collect();

    Fragment::Rendered(format!(
        r#"            <section class="skills-section">
                <h2>Skills &amp; Expertise</h2>
                <div class="skills-grid">
{items}                </div>
            </section>
"#
    ))
}

pub fn projects(entries: &[ProjectEntry], colors: &TemplateColors) -> Fragment {
    if entries.is_empty() {
        return Fragment::Omitted;
    }

    let items: String = entries
        .iter()
        .map(|project| project_card(project, colors))
        .collect();

    Fragment::Rendered(format!(
        r#"            <section class="projects-section">
                <h2>Projects</h2>
                <div class="projects-grid">
{items}                </div>
            </section>
"#
    ))
}

fn project_card(project: &ProjectEntry, colors: &TemplateColors) -> String {
    let title = escape(&project.title);
    let image = Fragment::when(project.image.as_deref(), |src| {
        format!(
            r#"
                        <div class="project-image">
                            <img src="{}" alt="{title}" onerror="this.style.display='none'">
                        </div>"#,
            escape(src)
        )
    });
    let link = Fragment::when(project.link.as_deref(), |href| {
        format!(
            r#"
                                <a href="{}" target="_blank" rel="noopener" class="project-link">{ICON_EXTERNAL_LINK}</a>"#,
            escape(href)
        )
    });
    let tags = if project.technologies.is_empty() {
        Fragment::Omitted
    } else {
        let spans: String = project
            .technologies
            .iter()
            .map(|tech| {
                format!(
                    r#"<span class="tech-tag" style="background-color: {accent}20; color: {accent};">{}</span>"#,
                    escape(tech),
                    accent = colors.accent
                )
            })
            .collect();
        Fragment::Rendered(format!(
            "\n                            <div class=\"project-technologies\">{spans}</div>"
        ))
    };

    format!(
        r#"                    <div class="project-card">{image}
                        <div class="project-content">
                            <div class="project-header">
                                <h3>{title}</h3>{link}
                            </div>
                            <p class="project-description">{description}</p>{tags}
                        </div>
                    </div>
"#,
        description = escape_multiline(&project.description),
    )
}

// ────────────────────────────────────────────────────────────────────────────
// Footer
// ────────────────────────────────────────────────────────────────────────────

pub fn footer(info: &PersonalInfo, year: i32) -> String {
    format!(
        r#"    <footer class="portfolio-footer">
        <div class="container">
            <div class="footer-content">
                <p>&copy; {year} {}</p>
                <p>{ATTRIBUTION}</p>
            </div>
        </div>
    </footer>
"#,
        escape(&info.full_name())
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::portfolio::models::SkillLevel;

    fn colors() -> TemplateColors {
        TemplateColors {
            primary: "#2563EB".to_string(),
            secondary: "#1E40AF".to_string(),
            accent: "#38BDF8".to_string(),
            background: "#F8FAFC".to_string(),
            text: "#1E293B".to_string(),
        }
    }

    fn info() -> PersonalInfo {
        PersonalInfo {
            first_name: "Ada".to_string(),
            last_name: Some("Lovelace".to_string()),
            email: "ada@example.com".to_string(),
            phone: None,
            location: None,
            title: None,
            summary: None,
            photo: None,
        }
    }

    fn job(current: bool, end_date: Option<&str>) -> ExperienceEntry {
        ExperienceEntry {
            id: None,
            position: "Engineer".to_string(),
            company: "Analytical Engines Co".to_string(),
            start_date: Some("2020-01".to_string()),
            end_date: end_date.map(str::to_string),
            current,
            description: Some("Built things".to_string()),
        }
    }

    fn skill(level: &str) -> SkillEntry {
        SkillEntry {
            id: None,
            name: "Math".to_string(),
            level: SkillLevel::from(level.to_string()),
            category: "Technical".to_string(),
        }
    }

    #[test]
    fn test_format_month_year_accepts_editor_formats() {
        assert_eq!(format_month_year("2020-01", "f").unwrap(), "Jan 2020");
        assert_eq!(format_month_year("2019-12-31", "f").unwrap(), "Dec 2019");
        assert_eq!(
            format_month_year("2021-07-01T00:00:00-08:00", "f").unwrap(),
            "Jul 2021"
        );
    }

    #[test]
    fn test_format_month_year_names_field_on_garbage() {
        let err = format_month_year("last spring", "experience[2].endDate").unwrap_err();
        match err {
            GenerationError::InvalidField { field, .. } => {
                assert_eq!(field, "experience[2].endDate")
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_current_job_renders_present_even_with_future_end_date() {
        let html = experience(&[job(true, Some("2099-05"))], &colors()).unwrap();
        let html = html.as_str();
        assert!(html.contains("Jan 2020 - Present"));
        assert!(!html.contains("2099"));
    }

    #[test]
    fn test_current_job_ignores_unparseable_end_date() {
        let html = experience(&[job(true, Some("whenever"))], &colors()).unwrap();
        assert!(html.as_str().contains("Present"));
    }

    #[test]
    fn test_past_job_renders_formatted_end_date() {
        let html = experience(&[job(false, Some("2022-03-15"))], &colors()).unwrap();
        assert!(html.as_str().contains("Jan 2020 - Mar 2022"));
    }

    #[test]
    fn test_past_job_with_bad_end_date_fails() {
        let err = experience(&[job(false, Some("soon"))], &colors()).unwrap_err();
        assert!(err.to_string().contains("experience[0].endDate"));
    }

    #[test]
    fn test_empty_lists_are_omitted() {
        assert_eq!(experience(&[], &colors()).unwrap(), Fragment::Omitted);
        assert_eq!(education(&[]), Fragment::Omitted);
        assert_eq!(skills(&[], &colors()), Fragment::Omitted);
        assert_eq!(projects(&[], &colors()), Fragment::Omitted);
    }

    #[test]
    fn test_skill_bar_widths_follow_level_table() {
        for (level, width) in [
            ("Beginner", 25),
            ("Intermediate", 50),
            ("Advanced", 75),
            ("Expert", 100),
            ("Wizard", 50),
        ] {
            let html = skills(&[skill(level)], &colors());
            assert!(
                html.as_str()
                    .contains(&format!("width: {width}%; background-color: #2563EB;")),
                "level {level} should render at {width}%"
            );
        }
    }

    #[test]
    fn test_contact_block_omitted_without_any_data() {
        let mut bare = info();
        bare.email = String::new();
        assert_eq!(contact(&bare, &SocialLinks::default()), Fragment::Omitted);
    }

    #[test]
    fn test_contact_block_skips_portfolio_link() {
        let social = SocialLinks {
            linkedin: None,
            github: Some("https://github.com/ada".to_string()),
            twitter: None,
            portfolio: Some("https://ada.dev".to_string()),
        };
        let html = contact(&info(), &social);
        let html = html.as_str();
        assert!(html.contains("ada@example.com"));
        assert!(html.contains("https://github.com/ada"));
        assert!(!html.contains("https://ada.dev"));
        assert_eq!(html.matches("class=\"social-link\"").count(), 1);
        assert_eq!(html.matches("class=\"contact-item\"").count(), 1);
    }

    #[test]
    fn test_header_uses_initial_badge_and_default_title() {
        let html = header(&info());
        assert!(html.contains("<span>A</span>"));
        assert!(html.contains("<h1>Ada Lovelace</h1>"));
        assert!(html.contains(DEFAULT_TITLE));
    }

    #[test]
    fn test_header_prefers_photo() {
        let mut with_photo = info();
        with_photo.photo = Some("data:image/png;base64,AAAA".to_string());
        with_photo.title = Some("Analyst".to_string());
        let html = header(&with_photo);
        assert!(html.contains(r#"<img src="data:image/png;base64,AAAA" alt="Ada Lovelace">"#));
        assert!(!html.contains("<span>A</span>"));
        assert!(html.contains("Analyst"));
    }

    #[test]
    fn test_summary_converts_newlines() {
        let mut with_summary = info();
        with_summary.summary = Some("Line one\nLine two".to_string());
        assert!(summary(&with_summary)
            .as_str()
            .contains("Line one<br>Line two"));
        assert_eq!(summary(&info()), Fragment::Omitted);
    }

    #[test]
    fn test_project_card_optional_parts() {
        let bare = ProjectEntry {
            id: None,
            title: "Engine".to_string(),
            description: "Gears\nand levers".to_string(),
            technologies: vec![],
            link: None,
            image: None,
        };
        let html = project_card(&bare, &colors());
        assert!(html.contains("<h3>Engine</h3>"));
        assert!(html.contains("Gears<br>and levers"));
        assert!(!html.contains("project-link"));
        assert!(!html.contains("project-image"));
        assert!(!html.contains("project-technologies"));

        let full = ProjectEntry {
            technologies: vec!["Brass".to_string(), "Steam".to_string()],
            link: Some("https://example.com/engine".to_string()),
            image: Some("data:image/png;base64,BBBB".to_string()),
            ..bare
        };
        let html = project_card(&full, &colors());
        assert!(html.contains(r#"href="https://example.com/engine""#));
        assert!(html.contains("project-image"));
        assert!(html.contains(
            r#"<span class="tech-tag" style="background-color: #38BDF820; color: #38BDF8;">Brass</span>"#
        ));
    }

    #[test]
    fn test_footer_has_year_and_name() {
        let html = footer(&info(), 2026);
        assert!(html.contains("&copy; 2026 Ada Lovelace"));
        assert!(html.contains(ATTRIBUTION));
    }
}
