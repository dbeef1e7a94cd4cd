//! Summary formatting
//!
//! Turns AI-generated contract summaries written in a small line-oriented
//! markup into a structural document:
//!
//! - a line that is wholly `**UPPERCASE TITLE**` is a section header
//! - a line that is wholly `**Some label:**` is a subsection header
//! - a line starting with `*`, `-` or `•` plus whitespace is a bullet
//! - anything else is a paragraph
//!
//! Blank lines only separate. Consecutive bullets merge into one list.
//! Headers do not nest and lists do not nest.
//!
//! # Examples
//!
//! ```
//! use application::{Block, format_summary};
//!
//! let doc = format_summary("**PAYMENT TERMS**\n* Net 30\n* 2% late fee");
//! assert_eq!(doc.blocks.len(), 2);
//! assert_eq!(doc.blocks[0], Block::SectionHeader("PAYMENT TERMS".to_string()));
//! ```

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// `**text**` with no asterisks inside
static BOLD_SPAN: LazyLock<Regex> = LazyLock::new(|| {
    #[allow(clippy::expect_used)]
    Regex::new(r"\*\*([^*]+)\*\*").expect("bold span pattern is valid")
});

/// Bullet marker followed by whitespace
static BULLET_MARKER: LazyLock<Regex> = LazyLock::new(|| {
    #[allow(clippy::expect_used)]
    Regex::new(r"^[*\-•]\s+").expect("bullet marker pattern is valid")
});

/// Uppercase letters, whitespace and ampersands, with at least one letter
static SECTION_TITLE: LazyLock<Regex> = LazyLock::new(|| {
    #[allow(clippy::expect_used)]
    Regex::new(r"^[A-Z\s&]*[A-Z][A-Z\s&]*$").expect("section title pattern is valid")
});

/// A run of inline text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "text", rename_all = "snake_case")]
pub enum Inline {
    /// Unemphasised text
    Text(String),
    /// Bold span
    Bold(String),
}

impl Inline {
    /// The text regardless of emphasis
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Text(text) | Self::Bold(text) => text,
        }
    }
}

/// Text with inline bold spans
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RichText(pub Vec<Inline>);

impl RichText {
    /// Split a line into plain and bold runs
    ///
    /// Text without `**` markers yields a single plain run, unchanged.
    #[must_use]
    pub fn parse(line: &str) -> Self {
        let mut spans = Vec::new();
        let mut cursor = 0;

        for captures in BOLD_SPAN.captures_iter(line) {
            let (Some(whole), Some(inner)) = (captures.get(0), captures.get(1)) else {
                continue;
            };
            if whole.start() > cursor {
                spans.push(Inline::Text(line[cursor..whole.start()].to_string()));
            }
            spans.push(Inline::Bold(inner.as_str().to_string()));
            cursor = whole.end();
        }
        if cursor < line.len() {
            spans.push(Inline::Text(line[cursor..].to_string()));
        }

        Self(spans)
    }

    /// Plain text with emphasis dropped
    #[must_use]
    pub fn plain(&self) -> String {
        self.0.iter().map(Inline::as_str).collect()
    }

    /// The inner text if the whole run is a single bold span
    #[must_use]
    pub fn sole_bold(&self) -> Option<&str> {
        match self.0.as_slice() {
            [Inline::Bold(text)] => Some(text),
            _ => None,
        }
    }

    /// Render as HTML with escaping
    #[must_use]
    pub fn to_html(&self) -> String {
        let mut html = String::new();
        for span in &self.0 {
            match span {
                Inline::Text(text) => html.push_str(&escape_html(text)),
                Inline::Bold(text) => {
                    html.push_str("<strong>");
                    html.push_str(&escape_html(text));
                    html.push_str("</strong>");
                },
            }
        }
        html
    }
}

impl From<&str> for RichText {
    fn from(text: &str) -> Self {
        Self(vec![Inline::Text(text.to_string())])
    }
}

/// One bullet point
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BulletItem {
    /// Item text with the marker stripped
    pub text: RichText,
    /// The source line was indented
    pub indented: bool,
}

/// A structural block of a formatted summary
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "content", rename_all = "snake_case")]
pub enum Block {
    /// Top-level section title
    SectionHeader(String),
    /// Labelled subsection, colon included
    SubsectionHeader(String),
    /// Consecutive bullet lines
    BulletList(Vec<BulletItem>),
    /// Any other line
    Paragraph(RichText),
}

/// Structured form of a summary
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormattedDocument {
    /// Blocks in input order
    pub blocks: Vec<Block>,
}

impl FormattedDocument {
    /// No blocks at all
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Render as an HTML fragment
    #[must_use]
    pub fn render_html(&self) -> String {
        let mut html = String::new();
        for block in &self.blocks {
            match block {
                Block::SectionHeader(text) => {
                    html.push_str(&format!(
                        "<h3 class=\"summary-section\">{}</h3>",
                        escape_html(text)
                    ));
                },
                Block::SubsectionHeader(text) => {
                    html.push_str(&format!(
                        "<h4 class=\"summary-subsection\">{}</h4>",
                        escape_html(text)
                    ));
                },
                Block::BulletList(items) => {
                    let nested = items.first().is_some_and(|item| item.indented);
                    html.push_str(if nested {
                        "<ul class=\"summary-list nested\">"
                    } else {
                        "<ul class=\"summary-list\">"
                    });
                    for item in items {
                        html.push_str(&format!("<li>{}</li>", item.text.to_html()));
                    }
                    html.push_str("</ul>");
                },
                Block::Paragraph(text) => {
                    html.push_str(&format!("<p class=\"summary-text\">{}</p>", text.to_html()));
                },
            }
        }
        html
    }
}

/// Classification of a single non-blank line
#[derive(Debug, PartialEq, Eq)]
enum LineKind {
    Section(String),
    Subsection(String),
    Bullet(BulletItem),
    Paragraph(RichText),
}

fn classify_line(line: &str) -> LineKind {
    let indent = line.chars().take_while(|c| c.is_whitespace()).count();
    let trimmed = line.trim();
    let rich = RichText::parse(trimmed);

    if let Some(inner) = rich.sole_bold() {
        if SECTION_TITLE.is_match(inner) {
            return LineKind::Section(inner.trim().to_string());
        }
        if inner.ends_with(':') {
            return LineKind::Subsection(inner.trim().to_string());
        }
    }

    if let Some(marker) = BULLET_MARKER.find(trimmed) {
        return LineKind::Bullet(BulletItem {
            text: RichText::parse(&trimmed[marker.end()..]),
            indented: indent > 0,
        });
    }

    LineKind::Paragraph(rich)
}

/// Scanner state
#[derive(Debug)]
enum ScanState {
    Scanning,
    InBulletList(Vec<BulletItem>),
}

/// Parse summary markup into blocks
///
/// Never fails: unrecognised markup becomes paragraphs.
#[must_use]
pub fn format_summary(raw: &str) -> FormattedDocument {
    let mut blocks = Vec::new();
    let mut state = ScanState::Scanning;

    for line in raw.lines().filter(|line| !line.trim().is_empty()) {
        let kind = classify_line(line);

        state = match (state, kind) {
            (ScanState::Scanning, LineKind::Bullet(item)) => ScanState::InBulletList(vec![item]),
            (ScanState::InBulletList(mut items), LineKind::Bullet(item)) => {
                items.push(item);
                ScanState::InBulletList(items)
            },
            (previous, other) => {
                if let ScanState::InBulletList(items) = previous {
                    blocks.push(Block::BulletList(items));
                }
                blocks.push(match other {
                    LineKind::Section(text) => Block::SectionHeader(text),
                    LineKind::Subsection(text) => Block::SubsectionHeader(text),
                    LineKind::Paragraph(text) => Block::Paragraph(text),
                    LineKind::Bullet(item) => Block::BulletList(vec![item]),
                });
                ScanState::Scanning
            },
        };
    }

    if let ScanState::InBulletList(items) = state {
        blocks.push(Block::BulletList(items));
    }

    FormattedDocument { blocks }
}

/// Escape text for inclusion in HTML
#[must_use]
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
