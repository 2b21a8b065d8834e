use std::sync::LazyLock;

use regex::Regex;
use serde::Deserialize;

use crate::error::{Error, Result};
use crate::span::{Span, StyleKind};

static IMAGE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"!\[([^\]]+)\]\(([^)]+)\)").expect("valid image regex"));

static LINK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[([^\]]+)\]\(([^)]+)\)").expect("valid link regex"));

static TITLE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#\s+(.+)$").expect("valid title regex"));

/// A paired delimiter and the span kind it produces.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Delimiter {
    pub token: String,
    pub kind: StyleKind,
}

impl Delimiter {
    pub fn new(token: impl Into<String>, kind: StyleKind) -> Self {
        Self {
            token: token.into(),
            kind,
        }
    }
}

/// Splits text into inline spans.
///
/// The configured delimiters are applied in order, then images, then
/// links. Each stage only re-splits spans that are still plain text, so
/// code spans must come first to keep `*` inside code literal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tokenizer {
    delimiters: Vec<Delimiter>,
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new(vec![
            Delimiter::new("`", StyleKind::Code),
            Delimiter::new("**", StyleKind::Bold),
            Delimiter::new("*", StyleKind::Italic),
        ])
    }
}

impl Tokenizer {
    pub fn new(delimiters: Vec<Delimiter>) -> Self {
        Self { delimiters }
    }

    pub fn delimiters(&self) -> &[Delimiter] {
        &self.delimiters
    }

    pub fn tokenize(&self, text: &str) -> Result<Vec<Span>> {
        let spans = self
            .delimiters
            .iter()
            .try_fold(vec![Span::Text(text.to_string())], |spans, delimiter| {
                split_delimiter(spans, &delimiter.token, delimiter.kind)
            })?;
        let spans = split_images(spans)?;
        split_links(spans)
    }
}

/// Tokenize `text` with the default delimiter table.
pub fn text_to_spans(text: &str) -> Result<Vec<Span>> {
    Tokenizer::default().tokenize(text)
}

/// Split every text span on `delimiter`; odd fragments become `kind`.
///
/// Empty fragments are kept, so `"**a**"` yields an empty leading and
/// trailing text span.
pub fn split_delimiter(spans: Vec<Span>, delimiter: &str, kind: StyleKind) -> Result<Vec<Span>> {
    if delimiter.is_empty() {
        return Ok(spans);
    }

    let mut out = Vec::with_capacity(spans.len());
    for span in spans {
        let Span::Text(text) = span else {
            out.push(span);
            continue;
        };

        if text.matches(delimiter).count() % 2 != 0 {
            return Err(Error::UnbalancedDelimiter {
                delimiter: delimiter.to_string(),
                text,
            });
        }

        for (i, fragment) in text.split(delimiter).enumerate() {
            if i % 2 == 0 {
                out.push(Span::Text(fragment.to_string()));
            } else {
                out.push(kind.span(fragment));
            }
        }
    }
    Ok(out)
}

/// All `![alt](url)` references in `text`, left to right.
pub fn extract_images(text: &str) -> Vec<(String, String)> {
    IMAGE_RE
        .captures_iter(text)
        .map(|caps| (caps[1].to_string(), caps[2].to_string()))
        .collect()
}

/// All `[text](url)` references in `text` not preceded by `!`.
pub fn extract_links(text: &str) -> Vec<(String, String)> {
    let mut links = Vec::new();
    let mut start = 0;
    while let Some(caps) = LINK_RE.captures_at(text, start) {
        let Some(whole) = caps.get(0) else {
            break;
        };
        if text[..whole.start()].ends_with('!') {
            start = whole.start() + 1;
            continue;
        }
        links.push((caps[1].to_string(), caps[2].to_string()));
        start = whole.end();
    }
    links
}

pub fn split_images(spans: Vec<Span>) -> Result<Vec<Span>> {
    split_references(spans, Reference::Image)
}

pub fn split_links(spans: Vec<Span>) -> Result<Vec<Span>> {
    split_references(spans, Reference::Link)
}

#[derive(Debug, Clone, Copy)]
enum Reference {
    Image,
    Link,
}

impl Reference {
    fn extract(self, text: &str) -> Vec<(String, String)> {
        match self {
            Reference::Image => extract_images(text),
            Reference::Link => extract_links(text),
        }
    }

    fn markup(self, label: &str, url: &str) -> String {
        match self {
            Reference::Image => format!("![{label}]({url})"),
            Reference::Link => format!("[{label}]({url})"),
        }
    }

    fn span(self, label: String, url: String) -> Span {
        match self {
            Reference::Image => Span::Image { alt: label, url },
            Reference::Link => Span::Link { text: label, url },
        }
    }
}

fn split_references(spans: Vec<Span>, reference: Reference) -> Result<Vec<Span>> {
    let mut out = Vec::with_capacity(spans.len());
    for span in spans {
        let Span::Text(text) = span else {
            out.push(span);
            continue;
        };

        let matches = reference.extract(&text);
        if matches.is_empty() {
            out.push(Span::Text(text));
            continue;
        }

        let mut pos = 0;
        for (label, url) in matches {
            let markup = reference.markup(&label, &url);
            let start = text[pos..]
                .find(&markup)
                .map(|offset| pos + offset)
                .ok_or_else(|| Error::MalformedSpan {
                    span: markup.clone(),
                })?;

            if pos < start {
                out.push(Span::Text(text[pos..start].to_string()));
            }
            out.push(reference.span(label, url));
            pos = start + markup.len();
        }

        if pos < text.len() {
            out.push(Span::Text(text[pos..].to_string()));
        }
    }
    Ok(out)
}

/// Text of the first `# ` (level one) heading line.
pub fn extract_title(markdown: &str) -> Result<String> {
    markdown
        .lines()
        .find_map(|line| TITLE_RE.captures(line).map(|caps| caps[1].to_string()))
        .ok_or(Error::TitleNotFound)
}
