//! Rich-text body of a campaign.
//!
//! The editor widget is an external collaborator: it hands back a whole HTML
//! document. [`RichText::from_html`] keeps only what sits between the
//! `<body>` boundaries, and [`RichText::to_html`] wraps it back into a
//! document when the message is serialized.

use serde::{Deserialize, Serialize};

/// How the body should be interpreted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    #[default]
    Plain,
    Html,
}

impl ContentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentType::Plain => "plain",
            ContentType::Html => "html",
        }
    }
}

/// A campaign body plus its content type.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RichText {
    pub content_type: ContentType,
    pub body: String,
}

impl RichText {
    pub fn plain(body: impl Into<String>) -> Self {
        Self { content_type: ContentType::Plain, body: body.into() }
    }

    pub fn html(body: impl Into<String>) -> Self {
        Self { content_type: ContentType::Html, body: body.into() }
    }

    /// Read an editor document, keeping the inner content of `<body>`.
    ///
    /// Input without a body element is taken as a fragment. The body is kept
    /// byte for byte, whitespace included.
    pub fn from_html(document: &str) -> Self {
        Self::html(body_content(document))
    }

    /// Serialize to a complete HTML document.
    pub fn to_html(&self) -> String {
        let inner = match self.content_type {
            ContentType::Html => self.body.clone(),
            ContentType::Plain => self
                .body
                .lines()
                .map(|line| format!("<p>{}</p>", escape_html(line)))
                .collect::<Vec<_>>()
                .join(""),
        };
        format!("<html><head></head><body>{}</body></html>", inner)
    }

    pub fn is_blank(&self) -> bool {
        self.body.trim().is_empty()
    }
}

/// Slice between the end of the opening `<body ...>` tag and `</body>`.
fn body_content(document: &str) -> &str {
    let lower = document.to_ascii_lowercase();

    let Some(open) = lower.find("<body") else {
        return document;
    };
    let Some(tag_end) = lower[open..].find('>').map(|i| open + i + 1) else {
        return document;
    };
    let close = lower[tag_end..]
        .find("</body>")
        .map(|i| tag_end + i)
        .unwrap_or(document.len());

    &document[tag_end..close]
}

fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_editor_document() {
        let doc = r#"<html><head><style>body { color: #333; }</style></head><BODY class="x"><p>Hello</p></BODY></html>"#;
        let text = RichText::from_html(doc);
        assert_eq!(text.content_type, ContentType::Html);
        assert_eq!(text.body, "<p>Hello</p>");
    }

    #[test]
    fn test_fragment_is_kept() {
        assert_eq!(RichText::from_html("<b>hi</b>").body, "<b>hi</b>");
    }

    #[test]
    fn test_unclosed_body() {
        assert_eq!(RichText::from_html("<body><i>x</i>").body, "<i>x</i>");
    }

    #[test]
    fn test_html_round_trip() {
        let original = RichText::html("<h1>Sale</h1><p>50% off</p>");
        assert_eq!(RichText::from_html(&original.to_html()), original);
    }

    #[test]
    fn test_html_round_trip_keeps_whitespace() {
        let original = RichText::html("\n  <p>Hi</p>\n");
        let restored = RichText::from_html(&original.to_html());
        assert_eq!(restored.body, "\n  <p>Hi</p>\n");
        assert_eq!(restored, original);
    }

    #[test]
    fn test_plain_is_escaped() {
        let html = RichText::plain("a < b\nTom & Jerry").to_html();
        assert!(html.contains("<p>a &lt; b</p><p>Tom &amp; Jerry</p>"));
    }

    #[test]
    fn test_blank() {
        assert!(RichText::plain("  \n ").is_blank());
        assert!(!RichText::html("<br>").is_blank());
    }
}
