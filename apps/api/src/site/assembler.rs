//! HTML Document Assembler: serializes a portfolio into one self-contained page.
//!
//! Output is a pure function of `(record, template, today)`. Only the footer
//! year depends on `today`, so two calls with the same clock produce identical
//! bytes.

use chrono::{Datelike, NaiveDate};
use tracing::debug;

use crate::portfolio::models::PortfolioRecord;
use crate::site::markup::escape;
use crate::site::sections;
use crate::site::styles::{root_variables, BASE_STYLES, ENHANCEMENT_SCRIPT, FONT_LINKS};
use crate::site::GenerationError;
use crate::templates::models::Template;

/// Renders the complete HTML document for `record` styled with `template`.
///
/// Absent optional data omits its section. A populated but unreadable
/// experience date is the only input that fails.
pub fn render_html(
    record: &PortfolioRecord,
    template: &Template,
    today: NaiveDate,
) -> Result<String, GenerationError> {
    let info = &record.personal_info;
    let colors = &template.colors;

    let header = sections::header(info);
    let contact = sections::contact(info, &record.social_links);
    let summary = sections::summary(info);
    let experience = sections::experience(&record.experience, colors)?;
    let education = sections::education(&record.education);
    let skills = sections::skills(&record.skills, colors);
    let projects = sections::projects(&record.projects, colors);
    let footer = sections::footer(info, today.year());

    let html = format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title} - Portfolio</title>
{FONT_LINKS}    <style>
{root}
{BASE_STYLES}    </style>
</head>
<body>
{header}{contact}    <main class="main-content">
        <div class="container">
{summary}{experience}{education}{skills}{projects}        </div>
    </main>
{footer}    <script>
{ENHANCEMENT_SCRIPT}    </script>
</body>
</html>
"#,
        title = escape(&info.full_name()),
        root = root_variables(colors),
    );

    debug!(
        template = %template.id,
        experience = record.experience.len(),
        education = record.education.len(),
        skills = record.skills.len(),
        projects = record.projects.len(),
        bytes = html.len(),
        "Rendered portfolio document"
    );

    Ok(html)
}
