pub mod io;
pub mod parsing;

// Re-export key types for easier usage
pub use parsing::blocks::{
    BlockKind, BlockNode, BlockParser, BlockRule, BlockRuler, BlockState, FrontMatter,
    FrontMatterOptions, OptionsError, RuleChain, RulerError, front_matter_plugin,
};
pub use parsing::rope::{DocumentView, LineRange, RopeDocument, Span};
pub use parsing::{ParsedDoc, parse_document, parse_document_with};
