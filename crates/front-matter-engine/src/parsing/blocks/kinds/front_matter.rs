//! Front matter: a metadata block that opens the document.
//!
//! ```text
//! ---
//! title: Notes
//! ---
//! Body starts here.
//! ```
//!
//! The opener must be the first line of the document and consist only of
//! the marker character (at least `min_markers` of them). The closer is the
//! first later line whose marker run is at least as long as the opener's,
//! indented less than 4 columns past the container, with nothing but
//! whitespace after the run. A run of `.` closes the block whatever marker
//! opened it. Without a closer the block ends at the end of the document or
//! of the enclosing container.
//!
//! The rule returns the structural result to the parser and hands the raw
//! text between the delimiter lines to a callback. It never interprets that
//! text.

use log::{debug, trace};

use crate::parsing::{
    blocks::{
        builder::BlockParser,
        ruler::{BlockRule, RuleChain, RulerError},
        state::{BlockState, ParentKind},
        types::{BlockKind, BlockNode},
    },
    rope::{
        span::{LineRange, Span},
        view::DocumentView,
    },
};

use super::{relative_indent, run_length, table::Table};

/// Name of the rule in the block ruler.
pub const NAME: &str = "front_matter";

/// Closes a front matter block whatever marker opened it.
pub const ALT_CLOSER: u8 = b'.';

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum OptionsError {
    #[error("Invalid front matter marker {0:?}: expected an ASCII punctuation character")]
    InvalidMarker(char),
    #[error("Minimum marker count must be at least 1")]
    ZeroMinMarkers,
}

/// Marker character and minimum opener length, fixed per recognizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrontMatterOptions {
    marker: u8,
    min_markers: usize,
}

impl FrontMatterOptions {
    pub const DEFAULT_MARKER: char = '-';
    pub const DEFAULT_MIN_MARKERS: usize = 3;

    pub fn new(marker: char, min_markers: usize) -> Result<Self, OptionsError> {
        if !marker.is_ascii_punctuation() {
            return Err(OptionsError::InvalidMarker(marker));
        }
        if min_markers == 0 {
            return Err(OptionsError::ZeroMinMarkers);
        }
        Ok(Self {
            marker: marker as u8,
            min_markers,
        })
    }

    pub fn marker(&self) -> char {
        char::from(self.marker)
    }

    pub fn min_markers(&self) -> usize {
        self.min_markers
    }
}

impl Default for FrontMatterOptions {
    fn default() -> Self {
        Self {
            marker: Self::DEFAULT_MARKER as u8,
            min_markers: Self::DEFAULT_MIN_MARKERS,
        }
    }
}

/// Outcome of the closing scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrontMatterScan {
    /// Whether a closer line was found.
    pub closed: bool,
    /// The closer line, or the line where scanning stopped.
    pub stop_line: usize,
    /// Text between the delimiter lines, trailing terminator excluded.
    pub content: Span,
    /// Marker byte of the opener.
    pub marker: u8,
    /// Marker run length of the opener.
    pub marker_count: usize,
}

impl FrontMatterScan {
    /// Line the parser resumes at.
    pub fn next_line(&self) -> usize {
        if self.closed {
            self.stop_line + 1
        } else {
            self.stop_line
        }
    }
}

/// Front matter block rule. `on_content` receives the raw text once per
/// committed match.
pub struct FrontMatter<F> {
    options: FrontMatterOptions,
    on_content: F,
}

impl<F> std::fmt::Debug for FrontMatter<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FrontMatter")
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}

impl<F: FnMut(&str)> FrontMatter<F> {
    pub fn new(options: FrontMatterOptions, on_content: F) -> Self {
        Self {
            options,
            on_content,
        }
    }

    pub fn options(&self) -> FrontMatterOptions {
        self.options
    }

    /// Marker count of the opener, if `start_line` opens front matter.
    pub fn opener(&self, view: &dyn DocumentView, start_line: usize) -> Option<usize> {
        if start_line != 0 || start_line >= view.line_count() {
            return None;
        }

        let first = view.first_non_space(start_line);
        let last = view.line_end(start_line);
        let count = run_length(view, first, last, self.options.marker);
        if count < self.options.min_markers {
            return None;
        }

        // only whitespace, Unicode included, may follow the markers
        let tail = view.skip_spaces(first + count);
        if tail < last
            && !view
                .slice(Span::new(tail, last))
                .chars()
                .all(char::is_whitespace)
        {
            return None;
        }
        Some(count)
    }

    /// Looks for the closer after `start_line`, stopping at `end_line`.
    pub fn scan(
        &self,
        view: &dyn DocumentView,
        start_line: usize,
        end_line: usize,
        marker_count: usize,
    ) -> FrontMatterScan {
        let block_indent = view.block_indent();
        let mut line = start_line;

        let closed = loop {
            line += 1;
            if line >= end_line {
                // autoclosed by the end of the document or the parent
                break false;
            }

            let first = view.first_non_space(line);
            let last = view.line_end(line);

            if first < last && view.indent(line) < block_indent {
                // non-empty line with negative indent ends the block
                break false;
            }

            let Some(ch) = view
                .byte_at(first)
                .filter(|&b| first < last && (b == self.options.marker || b == ALT_CLOSER))
            else {
                continue;
            };

            if relative_indent(view, line) >= 4 {
                trace!("front matter: line {line} indented too far to close");
                continue;
            }

            let run = run_length(view, first, last, ch);
            if run < marker_count {
                trace!("front matter: line {line} run {run} shorter than opener {marker_count}");
                continue;
            }

            if view.skip_spaces(first + run) < last {
                continue;
            }

            break true;
        };

        let content_start = view.line_start_or_len(start_line + 1);
        let mut content_end = view.line_start_or_len(line).max(content_start);
        if content_end > content_start && view.byte_at(content_end - 1) == Some(b'\n') {
            content_end -= 1;
            if content_end > content_start && view.byte_at(content_end - 1) == Some(b'\r') {
                content_end -= 1;
            }
        }

        FrontMatterScan {
            closed,
            stop_line: line,
            content: Span::new(content_start, content_end),
            marker: self.options.marker,
            marker_count,
        }
    }
}

impl<F: FnMut(&str)> BlockRule for FrontMatter<F> {
    fn run(
        &mut self,
        view: &dyn DocumentView,
        state: &mut BlockState,
        start_line: usize,
        end_line: usize,
        silent: bool,
    ) -> bool {
        let Some(marker_count) = self.opener(view, start_line) else {
            return false;
        };

        // Since start is found, we can report success here in validation mode
        if silent {
            return true;
        }

        let scan = self.scan(view, start_line, end_line, marker_count);
        let next_line = scan.next_line();
        let span = Span::new(
            view.line_start(start_line),
            if scan.closed {
                view.line_end(scan.stop_line)
            } else {
                scan.content.end
            },
        );

        {
            // keeps lazy continuations from running past the block
            let mut guard = state.override_boundary(scan.stop_line, ParentKind::Container);
            guard.push(BlockNode {
                kind: BlockKind::FrontMatter,
                map: LineRange::new(start_line, next_line),
                span,
                content_span: scan.content,
                hidden: true,
                markup: view.slice(span),
            });
            guard.line = next_line;
        }

        debug!(
            "front matter: lines {start_line}..{next_line}, closed: {}, {} content bytes",
            scan.closed,
            scan.content.len()
        );

        let content = view.slice(scan.content);
        (self.on_content)(&content);
        true
    }
}

/// Registers front matter ahead of the table rule.
///
/// The rule may claim the start of paragraphs, reference definitions,
/// blockquotes and lists.
pub fn front_matter_plugin<'a>(
    parser: &mut BlockParser<'a>,
    options: FrontMatterOptions,
    on_content: impl FnMut(&str) + 'a,
) -> Result<(), RulerError> {
    parser.ruler_mut().insert_before(
        Table::NAME,
        NAME,
        FrontMatter::new(options, on_content),
        &RuleChain::ALL,
    )
}
