mod block;
mod config;
mod error;
mod inline;
mod node;
mod parser;
pub mod site;
mod span;

pub use block::{BlockKind, classify, split_blocks};
pub use config::{BuildConfig, Config, ConfigError, InlineConfig, PathsConfig};
pub use error::{Error, Result};
pub use inline::{
    Delimiter, Tokenizer, extract_images, extract_links, extract_title, split_delimiter,
    split_images, split_links, text_to_spans,
};
pub use node::Node;
pub use span::{Span, StyleKind};

/// Parse markdown text into an HTML node tree.
pub fn parse(markdown: &str) -> Result<Node> {
    parser::parse(markdown, &Tokenizer::default())
}

/// Parse markdown text with the inline delimiters from `config`.
pub fn parse_with_config(markdown: &str, config: &Config) -> Result<Node> {
    parser::parse(markdown, &config.tokenizer())
}

/// Convert markdown to an HTML fragment using default config.
pub fn markdown_to_html(markdown: &str) -> Result<String> {
    parse(markdown)?.render()
}

/// Convert markdown to an HTML fragment with custom config.
pub fn markdown_to_html_with_config(markdown: &str, config: &Config) -> Result<String> {
    parse_with_config(markdown, config)?.render()
}
