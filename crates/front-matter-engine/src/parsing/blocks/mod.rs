//! # Block Parsing
//!
//! Rule-based block parsing over a line-indexed [`DocumentView`].
//!
//! ## Flow
//!
//! 1. **Line index** (`rope`): offsets, tab shift and indentation per line,
//!    computed once per document
//! 2. **Dispatch** (`builder`): `BlockParser` offers each line to the rules of
//!    its `BlockRuler` in priority order; a paragraph is the fallback
//!
//! ## Modules
//!
//! - **`types`**: `BlockNode`, `BlockKind`
//! - **`state`**: `BlockState` (cursor, continuation boundary, tokens) and the
//!   `BoundaryGuard` that scopes boundary overrides
//! - **`ruler`**: `BlockRule` trait and the ordered `BlockRuler`
//! - **`kinds`**: the rules themselves (front matter, code fence, table, paragraph)
//! - **`builder`**: `BlockParser`
//!
//! ## Key Invariants
//!
//! - A silent (probe) rule call never pushes tokens, moves the cursor or
//!   fires callbacks
//! - Boundary overrides are always restored, including on early returns
//! - All block nodes store byte spans into the rope
//!
//! [`DocumentView`]: crate::parsing::rope::DocumentView

pub mod builder;
pub mod kinds;
pub mod ruler;
pub mod state;
pub mod types;

pub use builder::BlockParser;
pub use kinds::{
    FenceKind, FrontMatter, FrontMatterOptions, FrontMatterScan, OptionsError, front_matter_plugin,
};
pub use ruler::{BlockRule, BlockRuler, RuleChain, RulerError};
pub use state::{BlockState, BoundaryGuard, ParentKind};
pub use types::{BlockKind, BlockNode};
