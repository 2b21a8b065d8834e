use crate::block::{self, BlockKind};
use crate::error::{Error, Result};
use crate::inline::Tokenizer;
use crate::node::Node;
use crate::span::Span;

/// Parse markdown text into a `div` holding one node per block.
///
/// Runs of consecutive list items of the same kind are grouped into a
/// single `ul` or `ol`.
pub fn parse(markdown: &str, tokenizer: &Tokenizer) -> Result<Node> {
    let blocks: Vec<(&str, BlockKind)> = block::split_blocks(markdown)
        .into_iter()
        .map(|block| (block, block::classify(block)))
        .collect();

    let mut children = Vec::with_capacity(blocks.len());
    let mut i = 0;
    while i < blocks.len() {
        let (block, kind) = blocks[i];

        match kind {
            BlockKind::Heading => children.push(heading_to_node(block, tokenizer)?),
            BlockKind::Code => children.push(code_to_node(block, tokenizer)?),
            BlockKind::Quote => children.push(quote_to_node(block, tokenizer)?),
            BlockKind::Paragraph => {
                children.push(Node::parent("p", text_to_children(block, tokenizer)?))
            }
            BlockKind::UnorderedList | BlockKind::OrderedList => {
                let items: Vec<&str> = blocks[i..]
                    .iter()
                    .take_while(|(_, next)| *next == kind)
                    .map(|(b, _)| *b)
                    .collect();
                children.push(list_to_node(&items, kind, tokenizer)?);
                i += items.len();
                continue;
            }
        }

        i += 1;
    }

    Ok(Node::parent("div", children))
}

fn text_to_children(text: &str, tokenizer: &Tokenizer) -> Result<Vec<Node>> {
    Ok(tokenizer
        .tokenize(text)?
        .iter()
        .map(Span::to_node)
        .collect())
}

fn heading_to_node(block: &str, tokenizer: &Tokenizer) -> Result<Node> {
    let (level, text) = block::heading_parts(block).ok_or_else(|| Error::InvalidBlock {
        line: block.to_string(),
    })?;
    Ok(Node::parent(
        format!("h{level}"),
        text_to_children(text, tokenizer)?,
    ))
}

fn code_to_node(block: &str, tokenizer: &Tokenizer) -> Result<Node> {
    let code = Node::parent("code", text_to_children(block::code_body(block), tokenizer)?);
    Ok(Node::parent("pre", vec![code]))
}

fn quote_to_node(block: &str, tokenizer: &Tokenizer) -> Result<Node> {
    let mut lines = Vec::new();
    for line in block.lines() {
        let Some(rest) = line.strip_prefix('>') else {
            return Err(Error::InvalidBlock {
                line: line.to_string(),
            });
        };
        lines.push(rest.trim_start());
    }
    Ok(Node::parent(
        "blockquote",
        text_to_children(&lines.join(" "), tokenizer)?,
    ))
}

fn list_to_node(items: &[&str], kind: BlockKind, tokenizer: &Tokenizer) -> Result<Node> {
    let tag = match kind {
        BlockKind::UnorderedList => "ul",
        BlockKind::OrderedList => "ol",
        BlockKind::Heading | BlockKind::Code | BlockKind::Quote | BlockKind::Paragraph => {
            return Err(Error::InvalidBlock {
                line: items.first().copied().unwrap_or_default().to_string(),
            });
        }
    };
    let children = items
        .iter()
        .map(|item| {
            let text = block::list_item_text(item, kind).ok_or_else(|| Error::InvalidBlock {
                line: item.to_string(),
            })?;
            Ok(Node::parent("li", text_to_children(text, tokenizer)?))
        })
        .collect::<Result<Vec<_>>>()?;
    Ok(Node::parent(tag, children))
}
