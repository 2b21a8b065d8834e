use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::error::Error;
use crate::node::Node;

/// Inline text spans with formatting
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Span {
    Text(String),
    Bold(String),
    Italic(String),
    Code(String),
    Link { text: String, url: String },
    Image { alt: String, url: String },
}

impl Span {
    /// The literal text carried by the span (alt text for images).
    pub fn text(&self) -> &str {
        match self {
            Span::Text(text) | Span::Bold(text) | Span::Italic(text) | Span::Code(text) => text,
            Span::Link { text, .. } => text,
            Span::Image { alt, .. } => alt,
        }
    }

    pub fn is_text(&self) -> bool {
        matches!(self, Span::Text(_))
    }

    /// Convert the span into a leaf node.
    pub fn to_node(&self) -> Node {
        match self {
            Span::Text(text) => Node::text(text),
            Span::Bold(text) => Node::leaf("b", text),
            Span::Italic(text) => Node::leaf("i", text),
            Span::Code(text) => Node::leaf("code", text),
            Span::Link { text, url } => Node::leaf("a", text).with_attribute("href", url),
            Span::Image { alt, url } => Node {
                tag: Some("img".to_string()),
                ..Node::default()
            }
            .with_attribute("src", url)
            .with_attribute("alt", alt),
        }
    }
}

/// Span kinds produced by splitting on a paired delimiter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(try_from = "String")]
pub enum StyleKind {
    Code,
    Bold,
    Italic,
}

impl StyleKind {
    pub fn span(self, text: impl Into<String>) -> Span {
        match self {
            StyleKind::Code => Span::Code(text.into()),
            StyleKind::Bold => Span::Bold(text.into()),
            StyleKind::Italic => Span::Italic(text.into()),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            StyleKind::Code => "code",
            StyleKind::Bold => "bold",
            StyleKind::Italic => "italic",
        }
    }
}

impl fmt::Display for StyleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for StyleKind {
    type Err = Error;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name {
            "code" => Ok(StyleKind::Code),
            "bold" => Ok(StyleKind::Bold),
            "italic" => Ok(StyleKind::Italic),
            other => Err(Error::InvalidKind(other.to_string())),
        }
    }
}

impl TryFrom<String> for StyleKind {
    type Error = Error;

    fn try_from(name: String) -> Result<Self, Self::Error> {
        name.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_has_no_tag() {
        let node = Span::Text("plain".to_string()).to_node();
        assert_eq!(node.tag, None);
        assert_eq!(node.value.as_deref(), Some("plain"));
        assert_eq!(node.attributes, None);
    }

    #[test]
    fn styled_spans() {
        assert_eq!(
            Span::Bold("b".to_string()).to_node().render().unwrap(),
            "<b >b</b>"
        );
        assert_eq!(
            Span::Italic("i".to_string()).to_node().render().unwrap(),
            "<i >i</i>"
        );
        assert_eq!(
            Span::Code("x = 1".to_string()).to_node().render().unwrap(),
            "<code >x = 1</code>"
        );
    }

    #[test]
    fn link_carries_href() {
        let span = Span::Link {
            text: "Home".to_string(),
            url: "https://example.com".to_string(),
        };
        assert_eq!(
            span.to_node().render().unwrap(),
            "<a href=\"https://example.com\">Home</a>"
        );
    }

    #[test]
    fn image_has_src_and_alt_and_no_value() {
        let span = Span::Image {
            alt: "Logo".to_string(),
            url: "/logo.png".to_string(),
        };
        let node = span.to_node();
        assert_eq!(node.value, None);
        assert_eq!(
            node.render().unwrap(),
            "<img alt=\"Logo\" src=\"/logo.png\"></img>"
        );
    }

    #[test]
    fn style_kind_names() {
        assert_eq!("bold".parse::<StyleKind>(), Ok(StyleKind::Bold));
        assert_eq!("italic".parse::<StyleKind>(), Ok(StyleKind::Italic));
        assert_eq!("code".parse::<StyleKind>(), Ok(StyleKind::Code));
        assert_eq!(StyleKind::Bold.to_string(), "bold");
    }

    #[test]
    fn non_delimiter_kinds_are_invalid() {
        for name in ["link", "image", "text", "underline"] {
            assert_eq!(
                name.parse::<StyleKind>(),
                Err(Error::InvalidKind(name.to_string()))
            );
        }
    }
}
