use super::span::Span;

/// Line-indexed, read-only access to a document.
///
/// Block rules never re-derive offsets; the host computes them once and
/// hands this capability to each rule call.
pub trait DocumentView {
    /// Total length of the document in bytes.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn line_count(&self) -> usize;

    /// Offset of the first byte of `line`.
    fn line_start(&self, line: usize) -> usize;

    /// Offset just before the terminator of `line`.
    fn line_end(&self, line: usize) -> usize;

    /// Bytes of leading whitespace on `line`.
    fn tab_shift(&self, line: usize) -> usize;

    /// Leading indentation of `line` after tab expansion.
    fn indent(&self, line: usize) -> usize;

    /// Minimum indentation of the container currently being parsed.
    fn block_indent(&self) -> usize;

    /// Byte at `offset`, or `None` past the end of the document.
    fn byte_at(&self, offset: usize) -> Option<u8>;

    fn slice(&self, span: Span) -> String;

    /// Offset of the first non-whitespace byte on `line`.
    fn first_non_space(&self, line: usize) -> usize {
        self.line_start(line) + self.tab_shift(line)
    }

    /// Start of `line`, or the document end when `line` is past the last line.
    fn line_start_or_len(&self, line: usize) -> usize {
        if line < self.line_count() {
            self.line_start(line)
        } else {
            self.len()
        }
    }

    fn is_blank(&self, line: usize) -> bool {
        self.first_non_space(line) >= self.line_end(line)
    }

    /// Skips spaces and tabs starting at `offset`.
    fn skip_spaces(&self, mut offset: usize) -> usize {
        while matches!(self.byte_at(offset), Some(b' ' | b'\t')) {
            offset += 1;
        }
        offset
    }
}
