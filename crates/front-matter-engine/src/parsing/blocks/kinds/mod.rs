pub mod code_fence;
pub mod front_matter;
pub mod paragraph;
pub mod table;

pub use code_fence::{CodeFence, FenceKind};
pub use front_matter::{
    FrontMatter, FrontMatterOptions, FrontMatterScan, OptionsError, front_matter_plugin,
};
pub use paragraph::Paragraph;
pub use table::Table;

use crate::parsing::rope::view::DocumentView;

/// Length of the run of `byte` starting at `pos`, bounded by `end`.
pub(crate) fn run_length(view: &dyn DocumentView, pos: usize, end: usize, byte: u8) -> usize {
    let mut cur = pos;
    while cur < end && view.byte_at(cur) == Some(byte) {
        cur += 1;
    }
    cur - pos
}

/// Indentation of `line` relative to the enclosing container.
pub(crate) fn relative_indent(view: &dyn DocumentView, line: usize) -> usize {
    view.indent(line).saturating_sub(view.block_indent())
}
