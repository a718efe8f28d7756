//! Pipeline tests: default parser with front matter installed.

use pretty_assertions::assert_eq;
use rstest::rstest;
use xi_rope::Rope;

use crate::parsing::{
    blocks::{BlockKind, FrontMatterOptions},
    parse_document, parse_document_with,
    rope::LineRange,
    snapshot,
};

#[test]
fn empty_document() {
    let rope = Rope::from("");
    let doc = parse_document(&rope);
    assert!(doc.blocks.is_empty());
    assert_eq!(doc.front_matter, None);
}

#[test]
fn blank_lines_only() {
    let rope = Rope::from("\n\n\n");
    let doc = parse_document(&rope);
    assert!(doc.blocks.is_empty());
    assert_eq!(doc.front_matter, None);
}

#[test]
fn empty_front_matter_then_body() {
    let rope = Rope::from("---\n---\nbody\n");
    let doc = parse_document(&rope);

    assert_eq!(doc.front_matter.as_deref(), Some(""));
    assert_eq!(doc.blocks.len(), 2);
    assert_eq!(doc.blocks[1].kind, BlockKind::Paragraph);
    assert_eq!(doc.blocks[1].map, LineRange::new(2, 3));
}

#[test]
fn body_directly_after_closer() {
    let rope = Rope::from("---\na: 1\n---\nbody");
    let doc = parse_document(&rope);

    let fm = doc.front_matter_block().unwrap();
    assert_eq!(fm.map, LineRange::new(0, 3));
    assert_eq!(doc.front_matter.as_deref(), Some("a: 1"));

    let visible: Vec<_> = doc.visible_blocks().map(|b| b.map).collect();
    assert_eq!(visible, vec![LineRange::new(3, 4)]);
}

#[test]
fn custom_marker() {
    let rope = Rope::from("+++\ntitle = \"x\"\n+++\nbody\n");
    let options = FrontMatterOptions::new('+', 3).unwrap();

    let doc = parse_document_with(&rope, options);
    assert_eq!(doc.front_matter.as_deref(), Some("title = \"x\""));

    // the default marker leaves the same document alone
    let doc = parse_document(&rope);
    assert_eq!(doc.front_matter, None);
}

#[test]
fn table_right_after_front_matter() {
    let rope = Rope::from("---\na: 1\n---\na | b\n--|--\n");
    let doc = parse_document(&rope);

    let kinds: Vec<_> = doc.blocks.iter().map(|b| b.kind.clone()).collect();
    assert_eq!(kinds, vec![BlockKind::FrontMatter, BlockKind::Table]);
}

#[rstest]
#[case("---\na: 1\n---\nbody")]
#[case("----\na: 1\n--\nbody")]
#[case("---\nfoo")]
#[case("---")]
#[case("---\r\na: 1\r\n...\r\n\r\ntext\r\n")]
#[case("---\n```\n---\n```\n")]
#[case("text\n---\nmore\n")]
#[case("   ---   \n\n\n")]
fn output_invariants_hold(#[case] src: &str) {
    let rope = Rope::from(src);
    let doc = parse_document(&rope);
    snapshot::invariants(&rope, &doc.blocks);
    assert_eq!(doc.front_matter.is_some(), doc.front_matter_block().is_some());
}

#[test]
fn normalize_outline() {
    let rope = Rope::from("---\na: 1\n---\n~~~\nx\n~~~\n");
    let doc = parse_document(&rope);
    let snap = snapshot::normalize(&rope, &doc.blocks);

    assert_eq!(
        snap.to_string(),
        "front_matter 0..3 hidden | ---\\na: 1\\n---\nfence(tildes) 3..6 | ~~~\\nx\\n~~~\n"
    );
}
