use crate::parsing::{
    blocks::{
        ruler::BlockRule,
        state::BlockState,
        types::{BlockKind, BlockNode},
    },
    rope::{
        span::{LineRange, Span},
        view::DocumentView,
    },
};

use super::{relative_indent, run_length};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FenceKind {
    Backticks,
    Tildes,
}

impl FenceKind {
    pub fn from_byte(b: u8) -> Option<Self> {
        match b {
            b'`' => Some(FenceKind::Backticks),
            b'~' => Some(FenceKind::Tildes),
            _ => None,
        }
    }

    pub fn byte(self) -> u8 {
        match self {
            FenceKind::Backticks => b'`',
            FenceKind::Tildes => b'~',
        }
    }
}

/// Fenced code block rule. Fence contents are a raw zone: no other rule
/// sees the lines between the fences.
#[derive(Debug, Default)]
pub struct CodeFence;

impl CodeFence {
    pub const NAME: &'static str = "fence";
    pub const MIN_LEN: usize = 3;

    /// Kind and length of an opening fence on `line`.
    pub fn sig(view: &dyn DocumentView, line: usize) -> Option<(FenceKind, usize)> {
        if relative_indent(view, line) >= 4 {
            return None;
        }
        let first = view.first_non_space(line);
        let last = view.line_end(line);
        if first >= last {
            return None;
        }
        let kind = view.byte_at(first).and_then(FenceKind::from_byte)?;
        let len = run_length(view, first, last, kind.byte());
        if len < Self::MIN_LEN {
            return None;
        }

        // backtick info strings may not contain backticks
        if kind == FenceKind::Backticks {
            let info = view.slice(Span::new(first + len, last));
            if info.contains('`') {
                return None;
            }
        }
        Some((kind, len))
    }

    /// Whether `line` closes a fence of `kind` opened with `len` characters.
    pub fn closes(view: &dyn DocumentView, line: usize, kind: FenceKind, len: usize) -> bool {
        let first = view.first_non_space(line);
        let last = view.line_end(line);
        if first >= last || view.byte_at(first) != Some(kind.byte()) {
            return false;
        }
        if relative_indent(view, line) >= 4 {
            return false;
        }
        let run = run_length(view, first, last, kind.byte());
        run >= len && view.skip_spaces(first + run) >= last
    }
}

impl BlockRule for CodeFence {
    fn run(
        &mut self,
        view: &dyn DocumentView,
        state: &mut BlockState,
        start_line: usize,
        end_line: usize,
        silent: bool,
    ) -> bool {
        let Some((kind, len)) = Self::sig(view, start_line) else {
            return false;
        };
        if silent {
            return true;
        }

        let mut next = start_line;
        let closed = loop {
            next += 1;
            if next >= end_line {
                // unterminated fence: runs to the end of the container
                break false;
            }
            if !view.is_blank(next) && view.indent(next) < view.block_indent() {
                break false;
            }
            if Self::closes(view, next, kind, len) {
                break true;
            }
        };

        let span = Span::new(
            view.line_start(start_line),
            view.line_end(if closed { next } else { next - 1 }),
        );
        let content_start = view.line_start_or_len(start_line + 1).min(span.end);
        let content_end = if closed {
            view.line_start(next)
        } else {
            span.end
        };
        let map_end = if closed { next + 1 } else { next };

        state.push(BlockNode {
            kind: BlockKind::FencedCode { kind },
            map: LineRange::new(start_line, map_end),
            span,
            content_span: Span::new(content_start, content_end.max(content_start)),
            hidden: false,
            markup: view.slice(span),
        });
        state.line = map_end;
        true
    }
}
