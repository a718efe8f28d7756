use criterion::{Criterion, criterion_group, criterion_main};
use front_matter_engine::parse_document;
use xi_rope::Rope;

/// Optional front matter with `keys` lines, then `sections` copies of a mixed body.
fn generate_markdown_content(keys: Option<usize>, closed: bool, sections: usize) -> String {
    let mut content = String::new();
    if let Some(keys) = keys {
        content.push_str("---\n");
        for i in 0..keys {
            content.push_str(&format!("key_{i}: value {i}\n"));
        }
        if closed {
            content.push_str("---\n");
        }
    }
    let body = "Paragraph with some content.\n\n```rust\nfn example() {}\n```\n\na | b\n--|--\n1 | 2\n\n";
    content.push_str(&body.repeat(sections));
    content
}

fn bench_front_matter(c: &mut Criterion) {
    let mut group = c.benchmark_group("parsing");
    group.sample_size(10);

    let inputs = [
        ("front_matter_closed", generate_markdown_content(Some(200), true, 100)),
        // no closer: the scan runs to the end of the document
        ("front_matter_unclosed", generate_markdown_content(Some(200), false, 100)),
        ("no_front_matter", generate_markdown_content(None, false, 100)),
    ];

    for (name, content) in inputs {
        let rope = Rope::from(content.as_str());
        group.bench_function(name, |b| {
            b.iter(|| std::hint::black_box(parse_document(std::hint::black_box(&rope))));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_front_matter);
criterion_main!(benches);
