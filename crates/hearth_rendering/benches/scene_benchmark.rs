//! # Scene Graph Benchmark
//!
//! Traversal of a wide, moderately deep forest and layer teardown.
//!
//! Run with: `cargo bench --package hearth_rendering --bench scene_benchmark`

#![allow(missing_docs)]

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use hearth_rendering::SceneGraph;
use hearth_ui::{Color, Rect, RenderList};

/// `layers` roots, each with `width` groups holding `width` leaves.
fn build(layers: usize, width: usize) -> (SceneGraph, Vec<u32>) {
    let mut graph = SceneGraph::with_capacity(layers * (1 + width + width * width));
    let mut roots = Vec::with_capacity(layers);
    for _ in 0..layers {
        let root = graph.create_group();
        for g in 0..width {
            let group = graph.create_group();
            graph.add_child(root, group);
            for l in 0..width {
                let leaf = if l % 4 == 0 {
                    graph.create_spinner((0.0, 0.0), 4.0, 1.0, Color::EMBER)
                } else {
                    graph.create_rect(Rect::new(l as f32, g as f32, 1.0, 1.0), Color::MOSS)
                };
                graph.add_child(group, leaf);
                graph.set_z_index(leaf, ((l * 7) % width) as f32);
            }
        }
        roots.push(root);
    }
    (graph, roots)
}

/// Benchmark: update and render every node.
fn bench_frame(c: &mut Criterion) {
    let mut group = c.benchmark_group("scene_frame");

    for width in [4, 16, 32] {
        let (mut graph, _) = build(4, width);
        let mut out = RenderList::new();
        group.bench_with_input(BenchmarkId::from_parameter(width), &width, |b, _| {
            b.iter(|| {
                graph.update_all(1.0 / 60.0);
                out.begin_frame();
                graph.render_all(&mut out);
                black_box(out.len())
            });
        });
    }

    group.finish();
}

/// Benchmark: destroy every layer and rebuild.
fn bench_destroy(c: &mut Criterion) {
    c.bench_function("scene_destroy_rebuild_16", |b| {
        b.iter(|| {
            let (mut graph, roots) = build(4, 16);
            for root in roots {
                black_box(graph.destroy_layer(root));
            }
            graph.free_count()
        });
    });
}

criterion_group!(benches, bench_frame, bench_destroy);
criterion_main!(benches);
