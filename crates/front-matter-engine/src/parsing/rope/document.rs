use xi_rope::Rope;

use super::{
    lines::{LineMetrics, lines_with_spans},
    slice::slice_to_string,
    span::Span,
    view::DocumentView,
};

/// [`DocumentView`] over an `xi_rope::Rope` with a precomputed line table.
#[derive(Debug)]
pub struct RopeDocument<'r> {
    rope: &'r Rope,
    lines: Vec<LineMetrics>,
    block_indent: usize,
}

impl<'r> RopeDocument<'r> {
    pub fn new(rope: &'r Rope) -> Self {
        let lines = lines_with_spans(rope)
            .map(|lr| LineMetrics::measure(&lr))
            .collect();
        Self {
            rope,
            lines,
            block_indent: 0,
        }
    }

    /// Parses as if nested in a container indented by `indent` columns.
    #[must_use]
    pub fn with_block_indent(mut self, indent: usize) -> Self {
        self.block_indent = indent;
        self
    }

    pub fn rope(&self) -> &'r Rope {
        self.rope
    }

    pub fn metrics(&self, line: usize) -> Option<&LineMetrics> {
        self.lines.get(line)
    }

    // Lines past the end behave like an empty line at the end of the document.
    fn line(&self, line: usize) -> LineMetrics {
        self.lines.get(line).copied().unwrap_or(LineMetrics {
            start: self.rope.len(),
            end: self.rope.len(),
            tab_shift: 0,
            indent: 0,
        })
    }
}

impl DocumentView for RopeDocument<'_> {
    fn len(&self) -> usize {
        self.rope.len()
    }

    fn line_count(&self) -> usize {
        self.lines.len()
    }

    fn line_start(&self, line: usize) -> usize {
        self.line(line).start
    }

    fn line_end(&self, line: usize) -> usize {
        self.line(line).end
    }

    fn tab_shift(&self, line: usize) -> usize {
        self.line(line).tab_shift
    }

    fn indent(&self, line: usize) -> usize {
        self.line(line).indent
    }

    fn block_indent(&self) -> usize {
        self.block_indent
    }

    fn byte_at(&self, offset: usize) -> Option<u8> {
        (offset < self.rope.len()).then(|| self.rope.byte_at(offset))
    }

    fn slice(&self, span: Span) -> String {
        slice_to_string(self.rope, span)
    }
}
