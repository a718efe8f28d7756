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

use super::relative_indent;

/// Pipe table rule: a header row, a delimiter row such as `|---|:--:|`,
/// then body rows until a blank line or a line without a pipe.
#[derive(Debug, Default)]
pub struct Table;

impl Table {
    pub const NAME: &'static str = "table";

    fn row_text(view: &dyn DocumentView, line: usize) -> String {
        view.slice(Span::new(view.first_non_space(line), view.line_end(line)))
    }

    fn is_row(view: &dyn DocumentView, line: usize) -> bool {
        !view.is_blank(line)
            && view.indent(line) >= view.block_indent()
            && Self::row_text(view, line).contains('|')
    }

    /// Whether `line` is a delimiter row.
    pub fn is_delimiter_row(view: &dyn DocumentView, line: usize) -> bool {
        if view.is_blank(line) || relative_indent(view, line) >= 4 {
            return false;
        }
        let text = Self::row_text(view, line);
        let text = text.trim_end();
        text.contains('|')
            && text.contains('-')
            && text.chars().all(|c| matches!(c, '|' | '-' | ':' | ' ' | '\t'))
    }
}

impl BlockRule for Table {
    fn run(
        &mut self,
        view: &dyn DocumentView,
        state: &mut BlockState,
        start_line: usize,
        end_line: usize,
        silent: bool,
    ) -> bool {
        if start_line + 2 > end_line || relative_indent(view, start_line) >= 4 {
            return false;
        }
        if !Self::is_row(view, start_line) || !Self::is_delimiter_row(view, start_line + 1) {
            return false;
        }
        if silent {
            return true;
        }

        let mut next = start_line + 2;
        while next < end_line && Self::is_row(view, next) {
            next += 1;
        }

        let span = Span::new(view.line_start(start_line), view.line_end(next - 1));
        state.push(BlockNode {
            kind: BlockKind::Table,
            map: LineRange::new(start_line, next),
            span,
            content_span: span,
            hidden: false,
            markup: view.slice(span),
        });
        state.line = next;
        true
    }
}
