use thiserror::Error;

/// Errors produced while tokenizing, building or rendering a document.
///
/// Every variant is terminal for the call that raised it: there is no
/// partial result.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// An inline delimiter appears an odd number of times in a text span.
    #[error("unbalanced `{delimiter}` delimiter in {text:?}")]
    UnbalancedDelimiter { delimiter: String, text: String },

    /// An image or link match could not be found again while splitting.
    #[error("malformed inline span {span:?}")]
    MalformedSpan { span: String },

    /// A quote block contains a line that does not start with `>`.
    #[error("quote line does not start with `>`: {line:?}")]
    InvalidBlock { line: String },

    /// A node without a tag was rendered as an element.
    #[error("cannot render node: missing tag")]
    MissingTag,

    /// A container node was rendered without any children.
    #[error("cannot render <{tag}>: container has no children")]
    EmptyContainer { tag: String },

    /// The document has no level-1 heading line.
    #[error("title not found: document has no `# ` heading")]
    TitleNotFound,

    /// An inline kind name that is not a delimiter style.
    #[error("invalid inline kind {0:?}")]
    InvalidKind(String),
}

pub type Result<T> = std::result::Result<T, Error>;
