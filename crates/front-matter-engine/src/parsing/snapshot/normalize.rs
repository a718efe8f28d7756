use std::fmt;

use xi_rope::Rope;

use crate::parsing::{
    blocks::{BlockKind, BlockNode, FenceKind},
    rope::slice::preview,
};

#[derive(Debug)]
pub struct Snap {
    pub blocks: Vec<BlockSnap>,
}

#[derive(Debug)]
pub struct BlockSnap {
    pub kind: String,
    pub lines: (usize, usize),
    pub hidden: bool,
    pub text: String,
}

pub fn normalize(rope: &Rope, blocks: &[BlockNode]) -> Snap {
    let blocks = blocks
        .iter()
        .map(|b| {
            let kind = match &b.kind {
                BlockKind::FrontMatter => "front_matter".to_string(),
                BlockKind::FencedCode {
                    kind: FenceKind::Backticks,
                } => "fence(backticks)".to_string(),
                BlockKind::FencedCode {
                    kind: FenceKind::Tildes,
                } => "fence(tildes)".to_string(),
                BlockKind::Table => "table".to_string(),
                BlockKind::Paragraph => "paragraph".to_string(),
            };

            BlockSnap {
                kind,
                lines: (b.map.start, b.map.end),
                hidden: b.hidden,
                text: preview(rope, b.span, 60),
            }
        })
        .collect();

    Snap { blocks }
}

impl fmt::Display for Snap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for b in &self.blocks {
            let hidden = if b.hidden { " hidden" } else { "" };
            writeln!(
                f,
                "{} {}..{}{} | {}",
                b.kind, b.lines.0, b.lines.1, hidden, b.text
            )?;
        }
        Ok(())
    }
}
