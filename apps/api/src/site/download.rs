//! Filename derivation and the HTTP download response for exported sites.

use axum::{
    http::header,
    response::{IntoResponse, Response},
};

use crate::portfolio::models::PersonalInfo;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Html,
    Zip,
}

impl ExportFormat {
    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Html => "html",
            ExportFormat::Zip => "zip",
        }
    }

    pub fn content_type(self) -> &'static str {
        match self {
            ExportFormat::Html => "text/html; charset=utf-8",
            ExportFormat::Zip => "application/zip",
        }
    }
}

/// `<first>-<last>-portfolio.<ext>`, lower-cased, then every whitespace run
/// replaced by a single hyphen.
///
/// `John` / `Doe Smith` → `john-doe-smith-portfolio.html`.
pub fn portfolio_filename(info: &PersonalInfo, format: ExportFormat) -> String {
    let raw = format!(
        "{}-{}-portfolio.{}",
        info.first_name.to_lowercase(),
        info.last_name.as_deref().unwrap_or_default().to_lowercase(),
        format.extension()
    );
    collapse_whitespace(&raw)
}

fn collapse_whitespace(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut in_run = false;
    for ch in input.chars() {
        if ch.is_whitespace() {
            if !in_run {
                out.push('-');
            }
            in_run = true;
        } else {
            out.push(ch);
            in_run = false;
        }
    }
    out
}

/// Wraps generated bytes in a response the browser saves as `filename`.
pub fn download_response(format: ExportFormat, filename: &str, body: Vec<u8>) -> Response {
    (
        [
            (header::CONTENT_TYPE, format.content_type().to_string()),
            (header::CONTENT_DISPOSITION, content_disposition(filename)),
        ],
        body,
    )
        .into_response()
}

/// Header values must be visible ASCII, so non-ASCII names get an ASCII
/// fallback plus an RFC 5987 `filename*` parameter.
fn content_disposition(filename: &str) -> String {
    let fallback: String = filename
        .chars()
        .map(|c| match c {
            '"' | '\\' => '_',
            c if c.is_ascii_graphic() || c == ' ' => c,
            _ => '_',
        })
        .collect();
    if fallback == filename {
        return format!("attachment; filename=\"{filename}\"");
    }

    let encoded: String = filename
        .bytes()
        .map(|b| match b {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'.' | b'_' | b'~' => {
                (b as char).to_string()
            }
            _ => format!("%{b:02X}"),
        })
        .collect();
    format!("attachment; filename=\"{fallback}\"; filename*=UTF-8''{encoded}")
}
