//! Benchmarks for ddldom tree operations.
//!
//! Run with: cargo bench
//!
//! Trees are built synthetically with a fixed number of sections and
//! paragraphs per section.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use ddldom::prelude::*;
use ddldom::{from_json, to_ddl, to_json, ImportOptions, JsonFormat};

/// Creates a document with `sections` sections of `paragraphs` paragraphs each.
fn create_test_document(sections: usize, paragraphs: usize) -> Document {
    let doc = Document::new().unwrap();
    doc.info().unwrap().set_title("Benchmark").unwrap();
    doc.embedded_files()
        .unwrap()
        .add_file("Data", "./data.bin")
        .unwrap();

    for s in 0..sections {
        let elements = doc.add_section().unwrap().elements().unwrap();
        for p in 0..paragraphs {
            let paragraph = elements
                .add_paragraph(format!("Section {} paragraph {} of benchmark text.", s, p))
                .unwrap();
            if p % 2 == 0 {
                paragraph.set_left_indent(Unit::from_centimeter(1.0)).unwrap();
                paragraph.set_color(Color::RED).unwrap();
            }
        }
        elements.add_page_break().unwrap();
    }

    doc
}

/// Benchmark DDL serialization at various sizes.
fn bench_serialize(c: &mut Criterion) {
    let mut group = c.benchmark_group("serialize_ddl");
    let options = DdlOptions::default();

    for (sections, paragraphs) in [(1, 10), (10, 50), (50, 100)] {
        let doc = create_test_document(sections, paragraphs);

        group.bench_function(format!("{}x{}", sections, paragraphs), |b| {
            b.iter(|| to_ddl(black_box(&doc), &options).unwrap());
        });
    }

    group.finish();
}

/// Benchmark independent copies of a tree.
fn bench_deep_copy(c: &mut Criterion) {
    let doc = create_test_document(10, 50);

    c.bench_function("deep_copy_10x50", |b| {
        b.iter(|| black_box(&doc).deep_copy());
    });
}

/// Benchmark JSON import of an exported tree.
fn bench_json_import(c: &mut Criterion) {
    let json = to_json(create_test_document(10, 50), JsonFormat::Compact).unwrap();
    let options = ImportOptions::default();

    c.bench_function("json_import_10x50", |b| {
        b.iter(|| from_json(black_box(&json), &options).unwrap());
    });
}

criterion_group!(benches, bench_serialize, bench_deep_copy, bench_json_import);
criterion_main!(benches);
