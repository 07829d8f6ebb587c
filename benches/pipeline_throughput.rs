//! End-to-end compile throughput benchmarks
//!
//! Measures lowering plus rendering of generated compositions with varying:
//! - Card counts (10, 100, 1000)
//! - Render modes (Content, Debug)
//!
//! Run benchmarks: `cargo bench --bench pipeline_throughput`

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use scenemark::{PipelineBuilder, RenderMode};
use serde_json::{Value, json};
use std::hint::black_box;

/// A grid of auto-layout cards, each holding a title, an icon, and a badge.
fn generate_composition(cards: usize) -> String {
    let children: Vec<Value> = (0..cards)
        .map(|i| {
            let x = (i % 10) as f64 * 120.0;
            let y = (i / 10) as f64 * 80.0;
            json!({
                "id": format!("{}:1", i),
                "type": "FRAME",
                "name": "Card",
                "width": 110,
                "height": 70,
                "absoluteTransform": [[1, 0, x], [0, 1, y]],
                "layoutMode": "VERTICAL",
                "itemSpacing": 4,
                "paddingLeft": 8,
                "paddingTop": 8,
                "style": {
                    "fills": [{ "type": "SOLID", "color": { "r": 1, "g": 1, "b": 1 } }],
                    "cornerRadius": 6,
                    "effects": [{ "type": "DROP_SHADOW", "radius": 4, "offset": { "x": 0, "y": 2 },
                                  "color": { "r": 0, "g": 0, "b": 0, "a": 0.2 } }]
                },
                "children": [
                    {
                        "id": format!("{}:2", i),
                        "type": "TEXT",
                        "width": 90,
                        "height": 18,
                        "absoluteTransform": [[1, 0, x + 8.0], [0, 1, y + 8.0]],
                        "text": {
                            "characters": format!("Card {}", i),
                            "segments": [{
                                "characters": format!("Card {}", i),
                                "fontName": { "family": "Inter", "style": "Medium" },
                                "fontSize": 14
                            }]
                        }
                    },
                    {
                        "id": format!("{}:3", i),
                        "type": "VECTOR",
                        "width": 16,
                        "height": 16,
                        "absoluteTransform": [[1, 0, x + 8.0], [0, 1, y + 30.0]],
                        "svgContent": "<svg xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"0 0 16 16\"><circle cx=\"8\" cy=\"8\" r=\"7\" fill=\"#09f\"/></svg>"
                    },
                    {
                        "id": format!("{}:4", i),
                        "type": "RECTANGLE",
                        "width": 24,
                        "height": 8,
                        "absoluteTransform": [[0.866, 0.5, x + 60.0], [-0.5, 0.866, y + 40.0]],
                        "style": { "fills": [{ "type": "SOLID", "color": { "r": 1, "g": 0.3, "b": 0 } }] }
                    }
                ]
            })
        })
        .collect();
    json!({
        "bounds": { "x": 0, "y": 0, "width": 1200, "height": ((cards / 10 + 1) * 80) },
        "absOrigin": { "x": 0, "y": 0 },
        "children": children
    })
    .to_string()
}

fn benchmark_pipeline_throughput(c: &mut Criterion) {
    let mut group = c.benchmark_group("pipeline_throughput");
    let pipeline = PipelineBuilder::new().build().expect("Failed to build pipeline");

    for cards in [10, 100, 1000] {
        group.throughput(Throughput::Elements(cards as u64));
        let composition = generate_composition(cards);
        group.bench_with_input(BenchmarkId::new("cards", cards), &composition, |b, input| {
            b.iter(|| {
                let output = pipeline.render_json(black_box(input)).expect("Render failed");
                black_box(output.html.len())
            });
        });
    }
    group.finish();
}

fn benchmark_render_modes(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_mode");
    let composition = generate_composition(200);

    for (name, mode) in [("content", RenderMode::Content), ("debug", RenderMode::Debug)] {
        let pipeline = PipelineBuilder::new()
            .with_mode(mode)
            .build()
            .expect("Failed to build pipeline");
        let lowered = pipeline.lower_json(&composition).expect("Lowering failed");
        group.bench_function(name, |b| {
            b.iter(|| pipeline.render_lowered(black_box(&lowered)).expect("Render failed"));
        });
    }
    group.finish();
}

criterion_group!(benches, benchmark_pipeline_throughput, benchmark_render_modes);
criterion_main!(benches);
