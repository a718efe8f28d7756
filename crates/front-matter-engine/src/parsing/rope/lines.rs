use xi_rope::Rope;

use super::span::Span;

/// Tab stops used when expanding leading tabs into an indentation count.
pub const TAB_WIDTH: usize = 4;

/// A reference to a single line in the rope with its byte span.
#[derive(Debug, Clone)]
pub struct LineRef {
    /// Byte span of this line in the rope (includes newline if present).
    pub span: Span,
    /// The line text as a string, terminator included.
    pub text: String,
}

/// Returns an iterator over lines with their byte spans.
///
/// Uses `lines_raw` to preserve newline characters so spans stay contiguous.
/// A trailing newline does not produce an extra empty line.
pub fn lines_with_spans(rope: &Rope) -> impl Iterator<Item = LineRef> + '_ {
    let mut offset = 0usize;
    rope.lines_raw(..).map(move |line| {
        let start = offset;
        let len = line.len();
        offset += len;
        LineRef {
            span: Span { start, end: offset },
            text: line.into_owned(),
        }
    })
}

/// Per-line offsets and indentation, precomputed once per document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineMetrics {
    /// Offset of the first byte of the line.
    pub start: usize,
    /// Offset just before the line terminator (`\n` or `\r\n`).
    pub end: usize,
    /// Number of leading space/tab bytes.
    pub tab_shift: usize,
    /// Leading indentation with tabs expanded to the next tab stop.
    pub indent: usize,
}

impl LineMetrics {
    pub fn measure(lr: &LineRef) -> Self {
        let content = lr
            .text
            .strip_suffix('\n')
            .map(|t| t.strip_suffix('\r').unwrap_or(t))
            .unwrap_or(lr.text.as_str());

        let mut tab_shift = 0usize;
        let mut indent = 0usize;
        for b in content.bytes() {
            match b {
                b' ' => indent += 1,
                b'\t' => indent += TAB_WIDTH - indent % TAB_WIDTH,
                _ => break,
            }
            tab_shift += 1;
        }

        Self {
            start: lr.span.start,
            end: lr.span.start + content.len(),
            tab_shift,
            indent,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn metrics(src: &str) -> Vec<LineMetrics> {
        let rope = Rope::from(src);
        lines_with_spans(&rope)
            .map(|lr| LineMetrics::measure(&lr))
            .collect()
    }

    #[test]
    fn trailing_newline_adds_no_line() {
        assert_eq!(metrics("a\nb\n").len(), 2);
        assert_eq!(metrics("a\nb").len(), 2);
    }

    #[test]
    fn end_excludes_crlf() {
        let m = metrics("ab\r\ncd");
        assert_eq!(
            m[0],
            LineMetrics {
                start: 0,
                end: 2,
                tab_shift: 0,
                indent: 0
            }
        );
        assert_eq!(m[1].start, 4);
        assert_eq!(m[1].end, 6);
    }

    #[test]
    fn tabs_expand_to_next_stop() {
        let m = metrics("  \tx\n\t x");
        assert_eq!((m[0].tab_shift, m[0].indent), (3, 4));
        assert_eq!((m[1].tab_shift, m[1].indent), (2, 5));
    }

    #[test]
    fn blank_line_shift_covers_whole_line() {
        let m = metrics("   \nx");
        assert_eq!(m[0].start + m[0].tab_shift, m[0].end);
    }
}
