use xi_rope::Rope;

use crate::parsing::blocks::{BlockKind, BlockNode};

/// Validates parser output invariants.
///
/// Asserts that:
/// - All block and content spans are within rope bounds
/// - Content spans are contained within their block spans
/// - Line maps are non-empty, ordered and do not overlap
/// - Front matter, if present, is the first block, starts at line 0 and is hidden
///
/// # Panics
/// Panics with a descriptive message if any invariant is violated.
pub fn check(rope: &Rope, blocks: &[BlockNode]) {
    let n = rope.len();
    let mut prev_end = 0usize;

    for (i, b) in blocks.iter().enumerate() {
        assert!(
            b.span.start <= b.span.end && b.span.end <= n,
            "block span out of bounds: {:?} (rope len: {})",
            b.span,
            n
        );
        assert!(
            b.content_span.start <= b.content_span.end && b.content_span.end <= n,
            "content span out of bounds: {:?} (rope len: {})",
            b.content_span,
            n
        );
        assert!(
            b.span.contains(b.content_span),
            "content span not contained in block span: content {:?}, block {:?}",
            b.content_span,
            b.span
        );
        assert!(
            !b.map.is_empty() && b.map.start >= prev_end,
            "line map {:?} empty or overlapping previous block ending at {}",
            b.map,
            prev_end
        );
        prev_end = b.map.end;

        if b.kind == BlockKind::FrontMatter {
            assert!(
                i == 0 && b.map.start == 0 && b.hidden,
                "front matter must be the hidden first block: {b:?}"
            );
        }
    }
}
