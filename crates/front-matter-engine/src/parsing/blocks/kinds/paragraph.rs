use crate::parsing::{
    blocks::{
        ruler::{BlockRuler, RuleChain},
        state::{BlockState, ParentKind},
        types::{BlockKind, BlockNode},
    },
    rope::{
        span::{LineRange, Span},
        view::DocumentView,
    },
};

use super::relative_indent;

/// Paragraph block: the fallback when no rule claims a line.
///
/// Paragraphs have no delimiters. They run until a blank line, the lazy
/// continuation boundary, or a line some rule registered for
/// [`RuleChain::Paragraph`] would claim.
#[derive(Debug)]
pub struct Paragraph;

impl Paragraph {
    pub fn parse(
        ruler: &mut BlockRuler<'_>,
        view: &dyn DocumentView,
        state: &mut BlockState,
        start_line: usize,
        end_line: usize,
    ) {
        let end_line = end_line.min(state.line_max);
        let line_max = state.line_max;
        let mut state = state.override_boundary(line_max, ParentKind::Paragraph);

        let mut next = start_line + 1;
        while next < end_line && !view.is_blank(next) {
            // deeply indented lines are lazy continuations
            if relative_indent(view, next) > 3 {
                next += 1;
                continue;
            }
            let interrupted = ruler
                .alternatives(RuleChain::Paragraph)
                .any(|rule| rule.run(view, &mut state, next, end_line, true));
            if interrupted {
                break;
            }
            next += 1;
        }

        let last = view.line_end(next - 1);
        state.push(BlockNode {
            kind: BlockKind::Paragraph,
            map: LineRange::new(start_line, next),
            span: Span::new(view.line_start(start_line), last),
            content_span: Span::new(view.first_non_space(start_line), last),
            hidden: false,
            markup: String::new(),
        });
        state.line = next;
    }
}
