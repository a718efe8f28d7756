pub mod blocks;
pub mod rope;
pub mod snapshot;

#[cfg(test)]
mod tests;

use xi_rope::Rope;

use blocks::{BlockKind, BlockNode, BlockParser, FrontMatterOptions};
use rope::RopeDocument;

#[derive(Debug)]
pub struct ParsedDoc {
    pub blocks: Vec<BlockNode>,
    /// Raw front matter text, when the document opens with front matter.
    pub front_matter: Option<String>,
}

impl ParsedDoc {
    /// The front matter block node, if any.
    pub fn front_matter_block(&self) -> Option<&BlockNode> {
        self.blocks
            .iter()
            .find(|b| matches!(b.kind, BlockKind::FrontMatter))
    }

    /// Blocks that render: everything except hidden blocks.
    pub fn visible_blocks(&self) -> impl Iterator<Item = &BlockNode> {
        self.blocks.iter().filter(|b| !b.hidden)
    }
}

/// Parses with the default front matter options (`---`, at least 3 markers).
pub fn parse_document(rope: &Rope) -> ParsedDoc {
    parse_document_with(rope, FrontMatterOptions::default())
}

pub fn parse_document_with(rope: &Rope, options: FrontMatterOptions) -> ParsedDoc {
    let doc = RopeDocument::new(rope);
    let mut front_matter = None;

    let blocks = {
        let mut parser = BlockParser::with_front_matter(options, |text: &str| {
            front_matter = Some(text.to_string());
        });
        parser.parse(&doc)
    };

    ParsedDoc {
        blocks,
        front_matter,
    }
}
