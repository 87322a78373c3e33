use crate::errors::AppError;
use crate::portfolio::models::PortfolioRecord;

/// A single failed boundary check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldIssue {
    pub field: String,
    pub reason: String,
}

impl FieldIssue {
    fn new(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

/// Collects every boundary violation in `record`.
///
/// Checks:
/// - `personalInfo.firstName` and `personalInfo.email` are non-blank
/// - the email has the shape `x@y.z`
/// - each embedded data-URL image decodes to at most `max_image_bytes`
///
/// Linked (non `data:`) images are not size-checked.
pub fn find_issues(record: &PortfolioRecord, max_image_bytes: usize) -> Vec<FieldIssue> {
    let mut issues = Vec::new();
    let info = &record.personal_info;

    if info.first_name.trim().is_empty() {
        issues.push(FieldIssue::new("personalInfo.firstName", "is required"));
    }

    if info.email.trim().is_empty() {
        issues.push(FieldIssue::new("personalInfo.email", "is required"));
    } else if !looks_like_email(info.email.trim()) {
        issues.push(FieldIssue::new(
            "personalInfo.email",
            "must look like name@domain.tld",
        ));
    }

    let images = std::iter::once(("personalInfo.photo".to_string(), info.photo.as_deref())).chain(
        record
            .projects
            .iter()
            .enumerate()
            .map(|(i, p)| (format!("projects[{i}].image"), p.image.as_deref())),
    );
    for (field, image) in images {
        let Some(size) = image.and_then(data_url_size) else {
            continue;
        };
        if size > max_image_bytes {
            issues.push(FieldIssue::new(
                field,
                format!("image is {size} bytes, limit is {max_image_bytes}"),
            ));
        }
    }

    issues
}

/// Fails with `AppError::Validation` naming every failing field.
pub fn check_record(record: &PortfolioRecord, max_image_bytes: usize) -> Result<(), AppError> {
    let issues = find_issues(record, max_image_bytes);
    if issues.is_empty() {
        return Ok(());
    }
    let detail = issues
        .iter()
        .map(|issue| format!("{} {}", issue.field, issue.reason))
        .collect::<Vec<_>>()
        .join("; ");
    Err(AppError::Validation(detail))
}

/// Non-whitespace, one `@`, and a dot somewhere inside the domain part.
fn looks_like_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() {
        return false;
    }
    match domain.rfind('.') {
        Some(dot) => dot > 0 && dot < domain.len() - 1,
        None => false,
    }
}

/// Decoded size of a base64 `data:` URL, or `None` for anything else.
fn data_url_size(url: &str) -> Option<usize> {
    let rest = url.strip_prefix("data:")?;
    let (meta, payload) = rest.split_once(',')?;
    if !meta.ends_with(";base64") {
        // Percent-encoded payload; the raw length is an upper bound.
        return Some(payload.len());
    }
    let payload = payload.trim_end();
    let padding = payload.chars().rev().take_while(|&c| c == '=').count();
    let decoded = (payload.len() / 4) * 3 + (payload.len() % 4) * 3 / 4;
    Some(decoded.saturating_sub(padding.min(2)))
}
