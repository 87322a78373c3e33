//! Small HTML helpers shared by the section builders.

use std::fmt;

/// Output of a section builder: either markup or nothing at all.
///
/// An omitted section contributes the empty string to the document, never an
/// empty wrapper element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fragment {
    Rendered(String),
    Omitted,
}

impl Fragment {
    pub fn as_str(&self) -> &str {
        match self {
            Fragment::Rendered(html) => html,
            Fragment::Omitted => "",
        }
    }

    /// Renders `build` only when `value` is present.
    pub fn when<T>(value: Option<T>, build: impl FnOnce(T) -> String) -> Self {
        value.map_or(Fragment::Omitted, |v| Fragment::Rendered(build(v)))
    }
}

impl fmt::Display for Fragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Escapes text for use in element content and double-quoted attributes.
pub fn escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Escapes text and turns every `\n` into `<br>`. Runs of newlines are kept.
pub fn escape_multiline(input: &str) -> String {
    escape(input).replace('\n', "<br>")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_covers_markup_characters() {
        assert_eq!(
            escape(r#"<a href="x">Tom & Jerry's</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; Jerry&#39;s&lt;/a&gt;"
        );
        assert_eq!(escape("plain"), "plain");
    }

    #[test]
    fn test_escape_multiline_keeps_every_newline() {
        assert_eq!(escape_multiline("a\n\nb<c>"), "a<br><br>b&lt;c&gt;");
    }

    #[test]
    fn test_fragment_when() {
        let some = Fragment::when(Some("x"), |v| format!("<p>{v}</p>"));
        assert_eq!(some, Fragment::Rendered("<p>x</p>".to_string()));

        let none = Fragment::when(None::<&str>, |v| format!("<p>{v}</p>"));
        assert_eq!(none.as_str(), "");
        assert_eq!(none.to_string(), "");
    }
}
