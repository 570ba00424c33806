//! Benchmarks for markdown rendering performance.

#![allow(clippy::format_push_string)] // Benchmark setup code, performance not critical

use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use folio_renderer::render;

/// Generate post-shaped markdown with the given structure.
fn generate_markdown(sections: usize, paragraphs_per_section: usize) -> String {
    let mut md = String::with_capacity(sections * paragraphs_per_section * 200);
    md.push_str("# Post Title\n\n");

    for i in 0..sections {
        md.push_str(&format!("## Section {i}\n\n"));
        for j in 0..paragraphs_per_section {
            md.push_str(&format!(
                "Paragraph {j} in section {i} with **bold**, *italic*, and \
                 a link to https://example.com/{i}/{j}.\n\n"
            ));
        }
    }
    md
}

fn bench_render_plain(c: &mut Criterion) {
    let markdown = generate_markdown(10, 3);

    let mut group = c.benchmark_group("render_plain");
    group.throughput(Throughput::Bytes(markdown.len() as u64));
    group.bench_function("10_sections", |b| b.iter(|| render(&markdown)));
    group.finish();
}

fn bench_render_directives(c: &mut Criterion) {
    let mut markdown = String::new();
    for i in 0..50 {
        markdown.push_str(&format!(
            "Item {i}: !![Save](toast:saved)!! !![New](badge:green:star)!! \
             and !![Info](tooltip:details for {i})!!\n\n"
        ));
    }

    c.bench_function("render_directives_150", |b| b.iter(|| render(&markdown)));
}

fn bench_render_code_blocks(c: &mut Criterion) {
    let markdown = r#"# Code

```rust
fn main() {
    println!("Hello, world!");
    for i in 0..10 {
        println!("{i}");
    }
}
```

```python
def greet(name):
    return f"Hello, {name}!"
```
"#;

    c.bench_function("render_code_blocks", |b| b.iter(|| render(markdown)));
}

fn bench_render_tables(c: &mut Criterion) {
    let mut markdown = String::from("| Name | Year | Rating |\n|------|-----:|-------:|\n");
    for i in 0..100 {
        markdown.push_str(&format!("| Movie {i} | 20{:02} | {}/10 |\n", i % 26, i % 10));
    }

    c.bench_function("render_table_100_rows", |b| b.iter(|| render(&markdown)));
}

fn bench_render_large_document(c: &mut Criterion) {
    let markdown = generate_markdown(100, 5);

    let mut group = c.benchmark_group("large_document");
    group.throughput(Throughput::Bytes(markdown.len() as u64));
    group.bench_function("render", |b| b.iter(|| render(&markdown)));
    group.finish();
}

criterion_group!(
    benches,
    bench_render_plain,
    bench_render_directives,
    bench_render_code_blocks,
    bench_render_tables,
    bench_render_large_document,
);

criterion_main!(benches);
