use crate::parsing::rope::span::{LineRange, Span};

use super::kinds::FenceKind;

/// The kind of a block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlockKind {
    /// Metadata block delimited by marker lines at the top of the document.
    FrontMatter,
    /// A fenced code block (``` or ~~~).
    FencedCode {
        /// Whether backticks or tildes were used.
        kind: FenceKind,
    },
    /// A pipe table: header row, delimiter row and body rows.
    Table,
    /// A paragraph block (default when no other block opener matches).
    Paragraph,
}

/// A parsed block node with its kind, source map and spans.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockNode {
    pub kind: BlockKind,
    /// Lines consumed by the block, end exclusive.
    pub map: LineRange,
    /// Full byte span of the block including delimiters.
    pub span: Span,
    /// Content span (excludes delimiter lines).
    pub content_span: Span,
    /// Hidden blocks produce no rendered output of their own.
    pub hidden: bool,
    /// Raw source of delimited blocks, kept for diagnostics. Empty for paragraphs.
    pub markup: String,
}
