use std::sync::LazyLock;

use regex::Regex;

static HEADING_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*(#{1,6})\s").expect("valid heading regex"));

static UNORDERED_ITEM_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[*-]\s").expect("valid unordered item regex"));

static ORDERED_ITEM_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+\.\s").expect("valid ordered item regex"));

const FENCE: &str = "```";

/// Block-level kinds recognised in a document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    Heading,
    Code,
    Quote,
    UnorderedList,
    OrderedList,
    Paragraph,
}

/// Split a document into trimmed, non-blank lines.
///
/// Each surviving line is its own block: consecutive lines are never
/// merged into one paragraph or quote.
pub fn split_blocks(markdown: &str) -> Vec<&str> {
    markdown
        .split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect()
}

/// Classify a block. The first matching rule wins.
pub fn classify(block: &str) -> BlockKind {
    if HEADING_RE.is_match(block) {
        BlockKind::Heading
    } else if block.starts_with(FENCE) && block.ends_with(FENCE) {
        BlockKind::Code
    } else if block.starts_with('>') {
        BlockKind::Quote
    } else if UNORDERED_ITEM_RE.is_match(block) {
        BlockKind::UnorderedList
    } else if ORDERED_ITEM_RE.is_match(block) {
        BlockKind::OrderedList
    } else {
        BlockKind::Paragraph
    }
}

/// Heading level and the text after the marker, if `block` is a heading.
pub(crate) fn heading_parts(block: &str) -> Option<(u8, &str)> {
    let caps = HEADING_RE.captures(block)?;
    let marker = caps.get(1)?;
    let whole = caps.get(0)?;
    Some((marker.len() as u8, &block[whole.end()..]))
}

/// The text between the opening and closing fences.
pub(crate) fn code_body(block: &str) -> &str {
    if block.len() >= 2 * FENCE.len() {
        &block[FENCE.len()..block.len() - FENCE.len()]
    } else {
        ""
    }
}

/// The item text after its list marker, if `block` is an item of list `kind`.
pub(crate) fn list_item_text(block: &str, kind: BlockKind) -> Option<&str> {
    let marker = match kind {
        BlockKind::UnorderedList => UNORDERED_ITEM_RE.find(block)?,
        BlockKind::OrderedList => ORDERED_ITEM_RE.find(block)?,
        BlockKind::Heading | BlockKind::Code | BlockKind::Quote | BlockKind::Paragraph => {
            return None;
        }
    };
    Some(&block[marker.end()..])
}
