use log::warn;

use crate::parsing::rope::view::DocumentView;

use super::{
    kinds::{
        CodeFence, FrontMatter, FrontMatterOptions, Paragraph, Table, front_matter,
    },
    ruler::{BlockRuler, RuleChain},
    state::BlockState,
    types::BlockNode,
};

/// Block-level parser: offers each line to the ruler's rules in priority
/// order and falls back to a paragraph.
#[derive(Debug)]
pub struct BlockParser<'a> {
    ruler: BlockRuler<'a>,
}

impl<'a> BlockParser<'a> {
    /// Parser with the default rules: code fences, then tables.
    pub fn new() -> Self {
        let mut ruler = BlockRuler::new();
        ruler.append(
            CodeFence::NAME,
            CodeFence,
            &[
                RuleChain::Paragraph,
                RuleChain::Reference,
                RuleChain::Blockquote,
                RuleChain::List,
            ],
        );
        ruler.append(
            Table::NAME,
            Table,
            &[RuleChain::Paragraph, RuleChain::Reference],
        );
        Self { ruler }
    }

    /// Default parser with front matter installed ahead of tables.
    pub fn with_front_matter(
        options: FrontMatterOptions,
        on_content: impl FnMut(&str) + 'a,
    ) -> Self {
        let mut parser = Self::new();
        let index = parser
            .ruler
            .position(Table::NAME)
            .unwrap_or(parser.ruler.len());
        parser.ruler.insert_at(
            index,
            front_matter::NAME,
            FrontMatter::new(options, on_content),
            &RuleChain::ALL,
        );
        parser
    }

    /// Parser without any rules; every line becomes part of a paragraph.
    pub fn empty() -> Self {
        Self {
            ruler: BlockRuler::new(),
        }
    }

    pub fn ruler(&self) -> &BlockRuler<'a> {
        &self.ruler
    }

    pub fn ruler_mut(&mut self) -> &mut BlockRuler<'a> {
        &mut self.ruler
    }

    /// Parses lines `[start_line, end_line)` into `state.tokens`.
    pub fn tokenize(
        &mut self,
        view: &dyn DocumentView,
        state: &mut BlockState,
        start_line: usize,
        end_line: usize,
    ) {
        state.line = start_line;

        while state.line < end_line {
            while state.line < end_line && view.is_blank(state.line) {
                state.line += 1;
            }
            if state.line >= end_line {
                break;
            }

            let line = state.line;
            // lines less indented than the container end it
            if view.indent(line) < view.block_indent() {
                break;
            }

            let claimed = self
                .ruler
                .rules_mut()
                .any(|rule| rule.run(view, state, line, end_line, false));
            if !claimed {
                Paragraph::parse(&mut self.ruler, view, state, line, end_line);
            }

            if state.line <= line {
                warn!("block rule claimed line {line} without consuming it");
                state.line = line + 1;
            }
        }
    }

    /// Parses the whole document.
    pub fn parse(&mut self, view: &dyn DocumentView) -> Vec<BlockNode> {
        let mut state = BlockState::new(view.line_count());
        self.tokenize(view, &mut state, 0, view.line_count());
        state.tokens
    }
}

impl Default for BlockParser<'_> {
    fn default() -> Self {
        Self::new()
    }
}
