use std::collections::BTreeMap;

use crate::error::{Error, Result};

/// A generic HTML element in the output tree.
///
/// Whether a node renders as a leaf or as a container is decided by
/// `children`: `None` takes the leaf path (`value` between the tags),
/// `Some` takes the container path and must hold at least one child.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Node {
    pub tag: Option<String>,
    pub value: Option<String>,
    pub children: Option<Vec<Node>>,
    pub attributes: Option<BTreeMap<String, String>>,
}

impl Node {
    /// Raw text with no surrounding element.
    pub fn text(value: impl Into<String>) -> Self {
        Self {
            value: Some(value.into()),
            ..Self::default()
        }
    }

    /// An element holding a literal value.
    pub fn leaf(tag: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            tag: Some(tag.into()),
            value: Some(value.into()),
            ..Self::default()
        }
    }

    /// An element wrapping other nodes.
    pub fn parent(tag: impl Into<String>, children: Vec<Node>) -> Self {
        Self {
            tag: Some(tag.into()),
            children: Some(children),
            ..Self::default()
        }
    }

    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes
            .get_or_insert_with(BTreeMap::new)
            .insert(key.into(), value.into());
        self
    }

    /// Render this node and its descendants to an HTML string.
    ///
    /// Fails with [`Error::MissingTag`] if this node (or any element
    /// descendant) has no tag, and with [`Error::EmptyContainer`] if a
    /// container has no children.
    pub fn render(&self) -> Result<String> {
        let mut out = String::new();
        self.render_element(&mut out)?;
        Ok(out)
    }

    fn render_element(&self, out: &mut String) -> Result<()> {
        let tag = self.tag.as_deref().ok_or(Error::MissingTag)?;

        match &self.children {
            None => {
                open_tag(tag, self.attributes.as_ref(), out);
                out.push_str(self.value.as_deref().unwrap_or_default());
            }
            Some(children) if children.is_empty() => {
                return Err(Error::EmptyContainer {
                    tag: tag.to_string(),
                });
            }
            Some(children) => {
                open_tag(tag, self.attributes.as_ref(), out);
                for child in children {
                    child.render_child(out)?;
                }
            }
        }

        out.push_str("</");
        out.push_str(tag);
        out.push('>');
        Ok(())
    }

    fn render_child(&self, out: &mut String) -> Result<()> {
        // Tagless leaves inside a container are plain text
        if self.tag.is_none() && self.children.is_none() {
            out.push_str(self.value.as_deref().unwrap_or_default());
            return Ok(());
        }
        self.render_element(out)
    }
}

// The space after the tag name is always emitted, even with no attributes.
fn open_tag(tag: &str, attributes: Option<&BTreeMap<String, String>>, out: &mut String) {
    out.push('<');
    out.push_str(tag);
    out.push(' ');
    out.push_str(&attributes_to_html(attributes));
    out.push('>');
}

fn attributes_to_html(attributes: Option<&BTreeMap<String, String>>) -> String {
    let Some(attributes) = attributes else {
        return String::new();
    };
    attributes
        .iter()
        .map(|(key, value)| format!("{key}=\"{value}\""))
        .collect::<Vec<_>>()
        .join(" ")
}
