//! Archive Packager: wraps the rendered page into a deployable ZIP bundle.
//!
//! The bundle always holds exactly the four entries in [`ARCHIVE_ENTRIES`].
//! Compression is CPU-bound; callers on the async runtime should run
//! [`build_archive`] inside `tokio::task::spawn_blocking`.

use std::io::{Cursor, Write};

use chrono::{Datelike, NaiveDate};
use tracing::info;
use zip::write::FileOptions;
use zip::{CompressionMethod, ZipWriter};

use crate::portfolio::models::PortfolioRecord;
use crate::site::assembler::render_html;
use crate::site::GenerationError;
use crate::templates::models::Template;

pub const INDEX_PATH: &str = "index.html";
pub const README_PATH: &str = "README.md";
pub const CUSTOM_CSS_PATH: &str = "styles/custom.css";
pub const FAVICON_PATH: &str = "favicon.svg";

pub const ARCHIVE_ENTRIES: [&str; 4] = [INDEX_PATH, README_PATH, CUSTOM_CSS_PATH, FAVICON_PATH];

const COMPRESSION_LEVEL: i32 = 6;

/// Builds the ZIP bundle for `record` and returns its bytes.
///
/// `index.html` is byte-identical to [`render_html`] for the same inputs.
pub fn build_archive(
    record: &PortfolioRecord,
    template: &Template,
    today: NaiveDate,
) -> Result<Vec<u8>, GenerationError> {
    let html = render_html(record, template, today)?;

    // Same order as ARCHIVE_ENTRIES.
    let contents: [String; 4] = [
        html,
        readme(record, today),
        custom_css(record, template),
        favicon_svg(record, template),
    ];

    let options = FileOptions::default()
        .compression_method(CompressionMethod::Deflated)
        .compression_level(Some(COMPRESSION_LEVEL));

    let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
    for (path, body) in ARCHIVE_ENTRIES.iter().zip(&contents) {
        zip.start_file(*path, options)?;
        zip.write_all(body.as_bytes())?;
    }
    let bytes = zip.finish()?.into_inner();

    info!(
        template = %template.id,
        bytes = bytes.len(),
        "Packaged portfolio archive"
    );

    Ok(bytes)
}

/// Usage instructions for the downloaded bundle.
pub fn readme(record: &PortfolioRecord, today: NaiveDate) -> String {
    let info = &record.personal_info;
    format!(
        r#"# {name}'s Portfolio

## Created with QuickPortfolio
Generated on: {month}/{day}/{year}

## How to Use

### Option 1: Open Locally
Simply open `index.html` in your web browser.

### Option 2: Deploy Online

#### Netlify
1. Go to https://app.netlify.com/drop
2. Drag and drop this ZIP file
3. Your portfolio will be live instantly!

#### GitHub Pages
1. Create a new GitHub repository
2. Upload all files
3. Go to Settings > Pages
4. Select "main" branch and save
5. Your portfolio will be live at: https://yourusername.github.io/repository-name

#### Vercel
1. Go to https://vercel.com/new
2. Import Git repository or drag and drop files
3. Click "Deploy"

## Customization
Edit `index.html` to make changes to your portfolio.

## Features
- Fully responsive design
- SEO optimized
- Fast loading
- No external dependencies
- Mobile-friendly

## Contact
If you need help, contact: {contact}

---
Thank you for using QuickPortfolio!
"#,
        name = info.full_name(),
        month = today.month(),
        day = today.day(),
        year = today.year(),
        contact = info.email().unwrap_or("N/A"),
    )
}

/// Optional decorative rules. Only `accent` and `primary` are substituted.
pub fn custom_css(record: &PortfolioRecord, template: &Template) -> String {
    format!(
        r#"/* Additional Custom Styles for {first_name}'s Portfolio */

/* Add any custom CSS here */
.custom-highlight {{
    background: linear-gradient(120deg, {accent}20 0%, {primary}20 100%);
    padding: 1rem;
    border-radius: 8px;
    border-left: 4px solid {primary};
}}

/* Animation for skill bars */
@keyframes slideIn {{
    from {{
        width: 0;
    }}
    to {{
        width: var(--skill-width);
    }}
}}

.skill-progress {{
    animation: slideIn 1.5s ease-out;
}}

/* Dark mode preference */
@media (prefers-color-scheme: dark) {{
    body {{
        background: #0F172A;
        color: #E2E8F0;
    }}

    .skill-item,
    .project-card,
    .education-item {{
        background: #1E293B;
        border-color: #334155;
    }}
}}
"#,
        first_name = record.personal_info.first_name,
        accent = template.colors.accent,
        primary = template.colors.primary,
    )
}

/// 32x32 rounded square with a primary→secondary gradient and the person's initial.
pub fn favicon_svg(record: &PortfolioRecord, template: &Template) -> String {
    let initial = record.personal_info.initial();
    let label = match initial {
        '&' => "&amp;".to_string(),
        '<' => "&lt;".to_string(),
        '>' => "&gt;".to_string(),
        c => c.to_string(),
    };
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<svg width="32" height="32" viewBox="0 0 32 32" xmlns="http://www.w3.org/2000/svg">
  <defs>
    <linearGradient id="gradient" x1="0%" y1="0%" x2="100%" y2="100%">
      <stop offset="0%" style="stop-color:{primary};stop-opacity:1" />
      <stop offset="100%" style="stop-color:{secondary};stop-opacity:1" />
    </linearGradient>
  </defs>
  <rect width="32" height="32" rx="8" fill="url(#gradient)"/>
  <text x="16" y="22" text-anchor="middle" fill="white" font-family="Arial, sans-serif" font-size="16" font-weight="bold">{label}</text>
</svg>
"#,
        primary = template.colors.primary,
        secondary = template.colors.secondary,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Read;

    use serde_json::json;
    use zip::ZipArchive;

    use crate::templates::TemplateCatalog;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, 7).unwrap()
    }

    fn template() -> Template {
        TemplateCatalog::builtin("template-2")
            .unwrap()
            .default_template()
            .clone()
    }

    fn record(email: &str) -> PortfolioRecord {
        serde_json::from_value(json!({
            "personalInfo": { "firstName": "Grace", "lastName": "Hopper", "email": email },
            "skills": [{ "name": "COBOL", "level": "Expert", "category": "Languages" }]
        }))
        .unwrap()
    }

    fn read_entry(archive: &mut ZipArchive<Cursor<Vec<u8>>>, name: &str) -> String {
        let mut file = archive.by_name(name).unwrap();
        let mut contents = String::new();
        file.read_to_string(&mut contents).unwrap();
        contents
    }

    #[test]
    fn test_archive_contains_exactly_four_entries() {
        let bytes = build_archive(&record("grace@navy.mil"), &template(), today()).unwrap();
        let mut archive = ZipArchive::new(Cursor::new(bytes)).unwrap();

        let mut names: Vec<String> = archive.file_names().map(str::to_string).collect();
        names.sort();
        let mut expected: Vec<String> = ARCHIVE_ENTRIES.iter().map(|s| s.to_string()).collect();
        expected.sort();
        assert_eq!(names, expected);

        let file = archive.by_name(INDEX_PATH).unwrap();
        assert_eq!(file.compression(), CompressionMethod::Deflated);
    }

    #[test]
    fn test_archived_index_matches_standalone_html() {
        let record = record("grace@navy.mil");
        let template = template();
        let html = render_html(&record, &template, today()).unwrap();
        let bytes = build_archive(&record, &template, today()).unwrap();
        let mut archive = ZipArchive::new(Cursor::new(bytes)).unwrap();
        assert_eq!(read_entry(&mut archive, INDEX_PATH), html);
    }

    #[test]
    fn test_readme_names_person_date_and_contact() {
        let text = readme(&record("grace@navy.mil"), today());
        assert!(text.starts_with("# Grace Hopper's Portfolio"));
        assert!(text.contains("Generated on: 3/7/2026"));
        assert!(text.contains("If you need help, contact: grace@navy.mil"));
    }

    #[test]
    fn test_readme_falls_back_to_na_without_email() {
        let text = readme(&record(""), today());
        assert!(text.contains("If you need help, contact: N/A"));
    }

    #[test]
    fn test_custom_css_uses_accent_and_primary_only() {
        let template = template();
        let css = custom_css(&record("g@h.io"), &template);
        assert!(css.starts_with("/* Additional Custom Styles for Grace's Portfolio */"));
        assert!(css.contains("linear-gradient(120deg, #A78BFA20 0%, #7C3AED20 100%)"));
        assert!(css.contains("border-left: 4px solid #7C3AED;"));
        assert!(!css.contains(&template.colors.secondary));
        assert!(!css.contains(&template.colors.background));
    }

    #[test]
    fn test_favicon_gradient_and_initial() {
        let svg = favicon_svg(&record("g@h.io"), &template());
        assert!(svg.contains("stop-color:#7C3AED"));
        assert!(svg.contains("stop-color:#5B21B6"));
        assert!(svg.contains(">G</text>"));
    }

    #[test]
    fn test_favicon_defaults_to_p() {
        let mut record = record("g@h.io");
        record.personal_info.first_name = String::new();
        let svg = favicon_svg(&record, &template());
        assert!(svg.contains(">P</text>"));
    }

    #[test]
    fn test_archive_propagates_render_failure() {
        let mut record = record("g@h.io");
        record.experience = serde_json::from_value(json!([
            { "position": "Admiral", "company": "Navy", "startDate": "not-a-date" }
        ]))
        .unwrap();
        let err = build_archive(&record, &template(), today()).unwrap_err();
        assert!(matches!(err, GenerationError::InvalidField { .. }));
    }
}
